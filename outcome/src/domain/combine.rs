//! Combination algebra: gather several outcomes and fold them into one.
//!
//! [`Collect`] only repackages outcomes into a tuple. [`Reduce`] applies a
//! projector to the gathered outcomes and then resolves the merged status:
//!
//! 1. any `Fault` wins, and the first faulting input's fault is carried;
//! 2. otherwise any failure-class input makes the result the highest
//!    failure-class status present, with every message comma-joined;
//! 3. otherwise the result is `Success` with the projector's value and the
//!    comma-joined messages.
//!
//! Inputs are consumed but never modified. A panicking projector is not
//! caught.
//!
//! # Examples
//! ```
//! use outcome::{Collect, Outcome, Reduce, Status};
//!
//! let price = Outcome::success(12_u32);
//! let stock = Outcome::<u32>::content(Status::Exist, Some("in stock".to_owned()))
//!     .expect("Exist is a content kind");
//!
//! let merged = price
//!     .collect(stock)
//!     .reduce(|(price, _)| price.payload().copied().unwrap_or_default() * 2);
//!
//! assert_eq!(merged.status(), Status::Success);
//! assert_eq!(merged.payload(), Some(&24));
//! assert_eq!(
//!     merged.message(),
//!     Some("Result 0 not contain Message or Success,in stock")
//! );
//! ```

use tracing::debug;

use super::{Fault, Outcome, Status};

type MergeParts = (Status, Option<String>, Option<Fault>);

/// Gather outcomes into a fixed-size tuple, one at a time.
///
/// `a.collect(b).collect(c)` yields `(a, b, c)`. Tuples grow up to seven
/// outcomes.
pub trait Collect<Next> {
    /// The tuple produced by appending `Next`.
    type Output;

    /// Append `next` after the outcomes already gathered.
    fn collect(self, next: Next) -> Self::Output;
}

/// Fold gathered outcomes into a single outcome.
pub trait Reduce: Sized {
    /// Run `projector` over the inputs, then merge their statuses.
    ///
    /// The projector sees the inputs in their original form, not their
    /// unwrapped payloads. Its value becomes the payload only when the merge
    /// resolves to `Success`.
    fn reduce<R, F>(self, projector: F) -> Outcome<R>
    where
        F: FnOnce(&Self) -> R;
}

/// Gather outcomes positionally into a tuple.
///
/// # Examples
/// ```
/// use outcome::{collect, Outcome};
///
/// let (a, b, c) = collect!(
///     Outcome::success(1),
///     Outcome::success("two"),
///     Outcome::<()>::failed("three"),
/// );
/// assert!(a.is_success() && b.is_success() && !c.is_success());
/// ```
#[macro_export]
macro_rules! collect {
    ($($outcome:expr),+ $(,)?) => {
        ($($outcome,)+)
    };
}

impl<T> Reduce for Outcome<T> {
    fn reduce<R, F>(self, projector: F) -> Outcome<R>
    where
        F: FnOnce(&Self) -> R,
    {
        let candidate = projector(&self);
        merge_single(self.into_merge_parts(), candidate)
    }
}

impl<A> Reduce for (Outcome<A>,) {
    fn reduce<R, F>(self, projector: F) -> Outcome<R>
    where
        F: FnOnce(&Self) -> R,
    {
        let candidate = projector(&self);
        merge_single(self.0.into_merge_parts(), candidate)
    }
}

impl<A, B> Collect<Outcome<B>> for Outcome<A> {
    type Output = (Outcome<A>, Outcome<B>);

    fn collect(self, next: Outcome<B>) -> Self::Output {
        (self, next)
    }
}

macro_rules! impl_tuple_algebra {
    ($($idx:tt : $ty:ident),+) => {
        impl<$($ty),+> Reduce for ($(Outcome<$ty>,)+) {
            fn reduce<R, F>(self, projector: F) -> Outcome<R>
            where
                F: FnOnce(&Self) -> R,
            {
                let candidate = projector(&self);
                merge(vec![$(self.$idx.into_merge_parts()),+], candidate)
            }
        }
    };
}

macro_rules! impl_tuple_collect {
    ($($idx:tt : $ty:ident),+) => {
        impl<$($ty,)+ Next> Collect<Outcome<Next>> for ($(Outcome<$ty>,)+) {
            type Output = ($(Outcome<$ty>,)+ Outcome<Next>);

            fn collect(self, next: Outcome<Next>) -> Self::Output {
                ($(self.$idx,)+ next)
            }
        }
    };
}

impl_tuple_algebra!(0: A, 1: B);
impl_tuple_algebra!(0: A, 1: B, 2: C);
impl_tuple_algebra!(0: A, 1: B, 2: C, 3: D);
impl_tuple_algebra!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_tuple_algebra!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G);
impl_tuple_algebra!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G, 6: H);

impl_tuple_collect!(0: A, 1: B);
impl_tuple_collect!(0: A, 1: B, 2: C);
impl_tuple_collect!(0: A, 1: B, 2: C, 3: D);
impl_tuple_collect!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_tuple_collect!(0: A, 1: B, 2: C, 3: D, 4: E, 5: G);

/// Fold any number of same-typed outcomes into one.
///
/// Follows the same rules as [`Reduce::reduce`]. An empty input resolves
/// to `Success` with no message.
///
/// # Examples
/// ```
/// use outcome::{reduce_all, Outcome, Status};
///
/// let parts = vec![Outcome::success(2), Outcome::success(3)];
/// let total = reduce_all(parts, |parts| {
///     parts.iter().filter_map(Outcome::payload).sum::<i32>()
/// });
/// assert_eq!(total.status(), Status::Success);
/// assert_eq!(total.payload(), Some(&5));
/// ```
pub fn reduce_all<T, R, F>(outcomes: Vec<Outcome<T>>, projector: F) -> Outcome<R>
where
    F: FnOnce(&[Outcome<T>]) -> R,
{
    let candidate = projector(&outcomes);
    if outcomes.is_empty() {
        return Outcome::set(Status::Success, Some(candidate), None, None);
    }
    merge(
        outcomes.into_iter().map(Outcome::into_merge_parts).collect(),
        candidate,
    )
}

fn placeholder_message(index: usize) -> String {
    format!("Result {index} not contain Message or Success")
}

fn join_messages(inputs: &mut [MergeParts]) -> String {
    inputs
        .iter_mut()
        .enumerate()
        .map(|(index, (_, message, _))| match message.take() {
            Some(text) if !text.is_empty() => text,
            _ => placeholder_message(index),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn merge<R>(mut inputs: Vec<MergeParts>, candidate: R) -> Outcome<R> {
    let count = inputs.len();

    if let Some(position) = inputs
        .iter()
        .position(|(status, _, _)| *status == Status::Fault)
    {
        let (_, _, fault) = inputs.swap_remove(position);
        debug!(inputs = count, position, "merge resolved to Fault");
        return Outcome::set(Status::Fault, None, None, fault);
    }

    let message = join_messages(&mut inputs);
    let worst_failure = inputs
        .iter()
        .map(|(status, _, _)| *status)
        .filter(|status| status.is_failure_class())
        .max();

    match worst_failure {
        Some(status) => {
            debug!(inputs = count, %status, "merge resolved to failure");
            Outcome::set(status, None, Some(message), None)
        }
        None => {
            debug!(inputs = count, "merge resolved to Success");
            Outcome::set(Status::Success, Some(candidate), Some(message), None)
        }
    }
}

fn merge_single<R>((status, message, fault): MergeParts, candidate: R) -> Outcome<R> {
    if status == Status::Fault {
        return Outcome::set(Status::Fault, None, None, fault);
    }
    if status.is_failure_class() {
        return Outcome::set(status, None, message, None);
    }
    Outcome::set(Status::Success, Some(candidate), message, None)
}
