pub use crate::error::Error;
pub use crate::graph::pass::{CallbackPass, PassBuilder, RenderPass};
pub use crate::graph::render_graph::RenderGraph;
pub use crate::graph::resource::{ResourceDescriptor, ResourceKind, ResourceRecord};
pub use crate::graph::viz::GraphViz;
pub use crate::passes::deferred::DeferredPass;
pub use crate::passes::forward_plus::ForwardPlusPass;
pub use crate::pool::{Handle, PoolKey, PoolStats, TransientPool};
