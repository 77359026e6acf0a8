//! Frame graph scheduling and transient render target pooling
//!
//! Deimos schedules an ordered list of rendering passes and manages the
//! lifetime of the named resources they produce and consume. Each pass
//! declares the resource names it reads and writes. Before a frame runs, the
//! graph computes every resource's last use; backing handles are then
//! allocated the moment a pass first writes a resource and returned to a
//! shape-keyed pool as soon as the last use has executed. Two render targets
//! with the same dimensions and format that are live in disjoint parts of
//! the frame therefore share one backing handle instead of costing two
//! allocations.
//!
//! Passes execute strictly in the order they were added. The declared
//! read/write sets drive lifetime decisions only, never reordering, so the
//! caller adds passes in a valid order and the graph stays predictable.
//!
//! # Example
//!
//! ```
//! use deimos::prelude::*;
//!
//! let mut graph = RenderGraph::new();
//! graph.register_resource("offscreen", ResourceDescriptor::color_target(64, 64, "RGBA8"));
//!
//! graph.add_pass(
//!     PassBuilder::new("draw")
//!         .write("offscreen")
//!         .execute_fn(|| println!("drawing"))
//!         .build(),
//! );
//! graph.add_pass(PassBuilder::new("post").read("offscreen").build());
//!
//! // Runs "draw" then "post"; "offscreen" is allocated before "draw" and
//! // returned to the pool right after "post".
//! graph.execute();
//! ```
//!
//! For further example code, check out the following modules
//! - [`graph`] for the pass contract and the scheduling algorithm.
//! - [`pool`] for the shape-keyed handle pool.
//! - [`passes`] for the built-in placeholder pipeline passes.

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate log;

pub mod prelude;
pub use crate::prelude::*;

pub mod error;
pub mod graph;
pub mod passes;
pub mod pool;
