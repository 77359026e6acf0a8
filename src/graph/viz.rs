//! Debug visualization of the pass dependency structure.

use petgraph::dot::Dot;
use petgraph::Graph;

use crate::graph::render_graph::RenderGraph;

/// Trait that is implemented for the render graph to help with debugging and
/// visualizing the pass structure.
pub trait GraphViz {
    /// Get the string representation of this graph in `dot` format.
    fn dot(&self) -> String;
}

impl RenderGraph {
    /// Build the pass dependency structure: a node per pass, and an edge
    /// from a pass writing a resource to every later pass reading or
    /// rewriting it, labelled with the resource name.
    ///
    /// This is derived from the declared sets for diagnostics only.
    /// Execution order is the add order and never consults this graph.
    pub fn dependency_graph(&self) -> Graph<String, String> {
        let mut graph = Graph::new();
        let nodes: Vec<_> = self
            .passes
            .iter()
            .map(|pass| graph.add_node(pass.name().to_owned()))
            .collect();

        for (producer, pass) in self.passes.iter().enumerate() {
            for name in pass.writes() {
                for (consumer, other) in self.passes.iter().enumerate().skip(producer + 1) {
                    if other.reads().contains(name) || other.writes().contains(name) {
                        graph.add_edge(nodes[producer], nodes[consumer], name.clone());
                    }
                }
            }
        }
        graph
    }
}

impl GraphViz for RenderGraph {
    fn dot(&self) -> String {
        format!("{}", Dot::new(&self.dependency_graph()))
    }
}
