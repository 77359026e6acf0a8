//! Built-in placeholder passes.
//!
//! These passes declare the well-known resource names of a deferred plus
//! forward-plus pipeline but perform no rendering. They exist to exercise
//! the graph's scheduling and to mark where real pass bodies plug in.

pub mod deferred;
pub mod forward_plus;

pub use deferred::DeferredPass;
pub use forward_plus::ForwardPlusPass;
