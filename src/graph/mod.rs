//! The render graph system schedules an ordered list of passes and manages
//! the backing handles of the named resources they touch. Each pass declares
//! its reads and writes up front; before running a frame the graph computes
//! the last pass to touch every resource, then walks the pass list once,
//! allocating resources on first write and recycling transient ones the
//! moment their last use has executed.
//!
//! Resources are referenced by name everywhere. The graph re-resolves the
//! name to a handle every frame, which is what makes pooling safe: the
//! numeric handle behind a name may change between frames.
//!
//! Through the [`GraphViz`](crate::graph::viz::GraphViz) trait, it's
//! possible to export a graphviz-compatible dot file to display the pass
//! dependency structure.
//!
//! # Example
//!
//! ```
//! use deimos::prelude::*;
//!
//! let mut graph = RenderGraph::new();
//! graph.register_resource("gbuffer", ResourceDescriptor::color_target(1280, 720, "RGBA16F"));
//! graph.register_resource("depth", ResourceDescriptor::depth_stencil(1280, 720, "D24S8"));
//!
//! graph.add_pass(
//!     PassBuilder::new("geometry")
//!         .write("gbuffer")
//!         .write("depth")
//!         .build(),
//! );
//! graph.add_pass(
//!     PassBuilder::new("lighting")
//!         .read("gbuffer")
//!         .read("depth")
//!         .build(),
//! );
//!
//! graph.execute();
//! assert_eq!(graph.pool().stats().minted, 2);
//! ```
//!
//! For more complex passes, see the [`pass`] module documentation.

pub mod pass;
pub mod render_graph;
pub mod resource;
pub mod viz;
