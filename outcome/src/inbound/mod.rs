//! Inbound adapters that present outcomes to external callers while keeping
//! framework details at the edge.
//!
//! HTTP projection lives under [`http`].

pub mod http;
