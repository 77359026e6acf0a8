//! The render graph module holds the pass scheduler and resource registry.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use crate::error::Error;
use crate::graph::pass::RenderPass;
use crate::graph::resource::{ResourceDescriptor, ResourceRecord};
use crate::pool::TransientPool;

/// Owns an ordered list of passes and a registry of named resources, and
/// drives the allocate/setup/execute/release cycle once per frame.
///
/// Passes execute strictly in the order they were added; the declared
/// read/write sets feed resource lifetime decisions only, never reordering.
/// The caller is responsible for adding passes in a valid dependency order;
/// [`validate`](RenderGraph::validate) checks this on demand.
///
/// A graph exclusively owns its registry and its pool. Multiple independent
/// graphs can coexist, each with their own handle space.
pub struct RenderGraph {
    pub(crate) passes: Vec<Box<dyn RenderPass>>,
    resources: HashMap<String, ResourceRecord>,
    pool: TransientPool,
}

impl RenderGraph {
    /// Create an empty graph with its own pool.
    pub fn new() -> Self {
        Self::with_pool(TransientPool::new())
    }

    /// Create a graph that allocates through the given pool. Use this to
    /// install device callbacks on the pool before the graph takes it over.
    pub fn with_pool(pool: TransientPool) -> Self {
        RenderGraph {
            passes: vec![],
            resources: HashMap::new(),
            pool,
        }
    }

    /// Append a pass. Order is significant: passes run in exactly the order
    /// they were added.
    pub fn add_pass(&mut self, pass: impl RenderPass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Insert or update the descriptor for a named resource.
    ///
    /// A newly registered name starts unallocated. Re-registering an
    /// existing name keeps its current handle and only swaps the descriptor,
    /// which takes effect on the next allocation. Registration never
    /// allocates by itself.
    pub fn register_resource(&mut self, name: impl Into<String>, descriptor: ResourceDescriptor) {
        let name = name.into();
        match self.resources.get_mut(&name) {
            Some(record) => record.descriptor = descriptor,
            None => {
                self.resources.insert(name, ResourceRecord::new(descriptor));
            }
        }
    }

    /// Number of passes added to the graph.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Look up the registry record for a resource.
    pub fn resource(&self, name: &str) -> Option<&ResourceRecord> {
        self.resources.get(name)
    }

    /// The pool backing this graph's allocations.
    pub fn pool(&self) -> &TransientPool {
        &self.pool
    }

    /// Run one frame.
    ///
    /// First computes the last pass to reference every resource, then walks
    /// the pass list in order. Each pass gets its unallocated writes backed
    /// by the pool before `setup` and `execute` run; afterwards every
    /// transient resource whose last use was this pass is released.
    ///
    /// A write to an already-allocated resource does nothing, which is what
    /// lets several passes accumulate into one target. A write to an
    /// unregistered name is reported and skipped; the frame always runs to
    /// completion.
    pub fn execute(&mut self) {
        let last_use = self.compute_last_use();

        for index in 0..self.passes.len() {
            debug!("Execute pass: {}", self.passes[index].name());

            {
                let pass = &self.passes[index];
                for name in pass.writes() {
                    let Some(record) = self.resources.get_mut(name) else {
                        warn!("Resource not registered: {}", name);
                        continue;
                    };
                    if record.handle.is_none() {
                        record.handle = Some(self.pool.allocate(name.clone(), &record.descriptor));
                    }
                }
            }

            {
                let pass = &mut self.passes[index];
                pass.setup();
                pass.execute();
            }

            // A name in both sets is visited twice; the second release is a
            // no-op because the record is already unallocated.
            let pass = &self.passes[index];
            for name in pass.reads().iter().chain(pass.writes()) {
                let Some(record) = self.resources.get_mut(name) else {
                    continue;
                };
                if !record.descriptor.transient {
                    continue;
                }
                if last_use.get(name) == Some(&index) {
                    self.pool.release(name, &record.descriptor);
                    record.handle = None;
                }
            }
        }
    }

    /// Check that every read is preceded by a write and that every
    /// referenced resource is registered.
    ///
    /// Diagnostic only: [`execute`](RenderGraph::execute) does not call this
    /// and tolerates both conditions at runtime.
    pub fn validate(&self) -> Result<()> {
        let mut written: HashSet<&str> = HashSet::new();
        for pass in &self.passes {
            for name in pass.reads() {
                if !written.contains(name.as_str()) {
                    return Err(
                        Error::ReadBeforeWrite(name.clone(), pass.name().to_owned()).into()
                    );
                }
            }
            for name in pass.reads().iter().chain(pass.writes()) {
                if !self.resources.contains_key(name) {
                    return Err(Error::UnregisteredResource(name.clone()).into());
                }
            }
            for name in pass.writes() {
                written.insert(name.as_str());
            }
        }
        Ok(())
    }

    /// For each referenced resource name, the highest pass index that reads
    /// or writes it. Names referenced by no pass have no entry and are never
    /// auto-released.
    fn compute_last_use(&self) -> HashMap<String, usize> {
        let mut last_use = HashMap::new();
        for (index, pass) in self.passes.iter().enumerate() {
            for name in pass.reads().iter().chain(pass.writes()) {
                last_use.insert(name.clone(), index);
            }
        }
        last_use
    }
}

impl Default for RenderGraph {
    fn default() -> Self {
        Self::new()
    }
}
