//! Chain construction and execution
//!
//! The engine is split along the build/run seam:
//!
//! - [`builder`] — the [`Pipeline`] type and its registration surface
//! - [`rule`] — the canonical rule shapes wrapped at registration
//! - [`continuation`] — verdict settlement for deferred rules
//! - `executor` — the ordered walk, implemented on `Pipeline`
//!
//! A built chain is immutable and cheap to clone; execution borrows it
//! shared, so one chain can serve concurrent calls.

pub mod builder;
pub mod continuation;
mod executor;
pub mod rule;

pub use builder::Pipeline;
pub use continuation::Continuation;
pub use rule::Rule;
