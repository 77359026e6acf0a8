use crate::graph::pass::RenderPass;
use crate::passes::deferred::DeferredPass;

/// Forward-plus lighting stage.
///
/// Consumes the G-buffer and depth produced by [`DeferredPass`] and writes
/// the per-tile light index list. The body is a placeholder for light
/// culling and shading.
#[derive(Debug)]
pub struct ForwardPlusPass {
    reads: Vec<String>,
    writes: Vec<String>,
}

impl ForwardPlusPass {
    /// Well-known name of the per-tile light index list.
    pub const LIGHT_LIST: &'static str = "LightListBuffer";

    /// Create the pass.
    pub fn new() -> Self {
        let mut reads: Vec<String> = DeferredPass::GBUFFER_TARGETS
            .iter()
            .map(|&name| name.to_owned())
            .collect();
        reads.push(DeferredPass::DEPTH.to_owned());
        ForwardPlusPass {
            reads,
            writes: vec![Self::LIGHT_LIST.to_owned()],
        }
    }
}

impl Default for ForwardPlusPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for ForwardPlusPass {
    fn name(&self) -> &str {
        "ForwardPlusPass"
    }

    fn reads(&self) -> &[String] {
        &self.reads
    }

    fn writes(&self) -> &[String] {
        &self.writes
    }

    fn execute(&mut self) {
        debug!("ForwardPlusPass: execute (placeholder)");
    }
}
