//! Exposes the deimos error type

use thiserror::Error;

/// Error type that deimos can return.
///
/// The frame loop itself never fails: [`RenderGraph::execute`](crate::RenderGraph::execute)
/// reports misconfiguration and keeps going. These variants are produced by
/// the opt-in diagnostics instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A pass reads a resource before any earlier pass writes it.
    #[error("Resource `{0}` is read by pass `{1}` before any pass writes it.")]
    ReadBeforeWrite(String, String),
    /// A pass references a resource name with no registry entry.
    #[error("Resource `{0}` is not registered.")]
    UnregisteredResource(String),
}
