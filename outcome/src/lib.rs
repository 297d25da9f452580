//! Typed operation outcomes.
//!
//! An [`Outcome`] records how an operation ended: a [`Status`], an optional
//! message, an optional [`Fault`] and an optional payload. Outcomes from
//! independent operations combine with [`Collect`] and [`Reduce`] (or their
//! async forms in [`CollectAsync`]) into one outcome whose status follows a
//! fixed priority: a fault beats the worst failure, which beats success.
//!
//! The [`inbound::http`] adapter projects outcomes to a response code and a
//! JSON body.
//!
//! ```
//! use outcome::{Outcome, Reduce, Status, collect};
//!
//! let merged = collect!(
//!     Outcome::success(1),
//!     Outcome::<i32>::content(Status::NotExist, Some("gone".to_owned()))
//!         .expect("content kind"),
//!     Outcome::<i32>::failed("bad"),
//! )
//! .reduce(|_| 0);
//!
//! assert_eq!(merged.status(), Status::Failed);
//! assert_eq!(
//!     merged.message(),
//!     Some("Result 0 not contain Message or Success,gone,bad")
//! );
//! ```

pub mod domain;
pub mod inbound;

pub use domain::{
    Collect, CollectAsync, Fault, Outcome, OutcomeError, OutcomeFutureExt, Reduce, Status,
    collect_all_async, reduce_all, reduce_all_async,
};
pub use inbound::http::{IntoOutcomeResponse, OutcomeResponse, ResponseOptions, ResponseProjector};
