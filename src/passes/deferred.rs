use crate::graph::pass::RenderPass;

/// Geometry stage of a deferred pipeline.
///
/// Writes the four G-buffer color targets and the depth buffer. The body is
/// a placeholder; G-buffer fill and lighting dispatch land here once a
/// backend exists.
#[derive(Debug)]
pub struct DeferredPass {
    writes: Vec<String>,
}

impl DeferredPass {
    /// Well-known names of the four G-buffer color targets.
    pub const GBUFFER_TARGETS: [&'static str; 4] =
        ["GBuffer_RT0", "GBuffer_RT1", "GBuffer_RT2", "GBuffer_RT3"];
    /// Well-known name of the depth buffer.
    pub const DEPTH: &'static str = "Depth";

    /// Create the pass.
    pub fn new() -> Self {
        let mut writes: Vec<String> = Self::GBUFFER_TARGETS
            .iter()
            .map(|&name| name.to_owned())
            .collect();
        writes.push(Self::DEPTH.to_owned());
        DeferredPass {
            writes,
        }
    }
}

impl Default for DeferredPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for DeferredPass {
    fn name(&self) -> &str {
        "DeferredPass"
    }

    fn writes(&self) -> &[String] {
        &self.writes
    }

    fn execute(&mut self) {
        debug!("DeferredPass: execute (placeholder)");
    }
}
