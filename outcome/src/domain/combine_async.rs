//! Asynchronous forms of the combination algebra.
//!
//! Every input future is polled concurrently and the merge runs once all of
//! them have resolved. There is no timeout and no partial delivery; dropping
//! the returned future cancels the fan-out.

use std::future::Future;

use futures_util::future::join_all;

use super::{Outcome, Reduce, reduce_all};

/// Resolve a tuple of outcome futures concurrently.
///
/// A one-element tuple resolves to the bare outcome; larger tuples resolve
/// to a tuple of outcomes in the same positions.
///
/// # Examples
/// ```
/// use outcome::{CollectAsync, Outcome, Status};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let merged = (
///     async { Outcome::success(2) },
///     async { Outcome::<i32>::failed("quota exceeded") },
/// )
///     .reduce_async(|(a, _)| a.payload().copied())
///     .await;
///
/// assert_eq!(merged.status(), Status::Failed);
/// assert_eq!(
///     merged.message(),
///     Some("Result 0 not contain Message or Success,quota exceeded")
/// );
/// # });
/// ```
pub trait CollectAsync: Sized {
    /// What the futures resolve to once gathered.
    type Output;

    /// Await every future concurrently and gather the outcomes.
    fn collect_async(self) -> impl Future<Output = Self::Output>;

    /// Await every future, then fold the outcomes with
    /// [`Reduce::reduce`].
    fn reduce_async<R, F>(self, projector: F) -> impl Future<Output = Outcome<R>>
    where
        Self::Output: Reduce,
        F: FnOnce(&Self::Output) -> R,
    {
        async move { self.collect_async().await.reduce(projector) }
    }
}

impl<A, FA> CollectAsync for (FA,)
where
    FA: Future<Output = Outcome<A>>,
{
    type Output = Outcome<A>;

    fn collect_async(self) -> impl Future<Output = Self::Output> {
        self.0
    }
}

macro_rules! impl_collect_async {
    ($($idx:tt : $ty:ident => $fut:ident),+) => {
        impl<$($ty, $fut),+> CollectAsync for ($($fut,)+)
        where
            $($fut: Future<Output = Outcome<$ty>>),+
        {
            type Output = ($(Outcome<$ty>,)+);

            fn collect_async(self) -> impl Future<Output = Self::Output> {
                async move { futures_util::join!($(self.$idx),+) }
            }
        }
    };
}

impl_collect_async!(0: A => FA, 1: B => FB);
impl_collect_async!(0: A => FA, 1: B => FB, 2: C => FC);
impl_collect_async!(0: A => FA, 1: B => FB, 2: C => FC, 3: D => FD);
impl_collect_async!(0: A => FA, 1: B => FB, 2: C => FC, 3: D => FD, 4: E => FE);
impl_collect_async!(0: A => FA, 1: B => FB, 2: C => FC, 3: D => FD, 4: E => FE, 5: G => FG);
impl_collect_async!(
    0: A => FA,
    1: B => FB,
    2: C => FC,
    3: D => FD,
    4: E => FE,
    5: G => FG,
    6: H => FH
);

/// Await any number of same-typed outcome futures concurrently.
pub async fn collect_all_async<T, I>(futures: I) -> Vec<Outcome<T>>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T>>,
{
    join_all(futures).await
}

/// Await any number of same-typed outcome futures, then fold them with
/// [`reduce_all`].
pub async fn reduce_all_async<T, R, I, F>(futures: I, projector: F) -> Outcome<R>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T>>,
    F: FnOnce(&[Outcome<T>]) -> R,
{
    reduce_all(collect_all_async(futures).await, projector)
}

/// Outcome helpers for futures that resolve to an outcome.
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Await the outcome and override its external code.
    fn with_external_code(self, code: u16) -> impl Future<Output = Outcome<T>> {
        async move { self.await.with_external_code(code) }
    }

    /// Await the outcome and fold it with [`Reduce::reduce`].
    fn reduce_async<R, F>(self, projector: F) -> impl Future<Output = Outcome<R>>
    where
        F: FnOnce(&Outcome<T>) -> R,
    {
        async move { self.await.reduce(projector) }
    }
}

impl<T, F> OutcomeFutureExt<T> for F where F: Future<Output = Outcome<T>> {}
