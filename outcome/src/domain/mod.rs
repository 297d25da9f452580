//! Transport-agnostic outcome core.
//!
//! Nothing in this module knows about HTTP. Inbound adapters map outcomes to
//! responses, see [`crate::inbound::http`].

pub mod combine;
pub mod combine_async;
pub mod error;
pub mod fault;
pub mod outcome;
pub mod status;

pub use self::combine::{Collect, Reduce, reduce_all};
pub use self::combine_async::{
    CollectAsync, OutcomeFutureExt, collect_all_async, reduce_all_async,
};
pub use self::error::OutcomeError;
pub use self::fault::Fault;
pub use self::outcome::Outcome;
pub use self::status::Status;
