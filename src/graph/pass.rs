//! This module exposes the [`RenderPass`] trait, the unit of work scheduled
//! by a [`RenderGraph`](crate::RenderGraph), and the [`PassBuilder`] used to
//! assemble passes from closures without declaring a struct per pass.
//!
//! # Example
//!
//! A pass that writes an offscreen target, and one that samples it:
//!
//! ```
//! use deimos::prelude::*;
//!
//! let offscreen_pass = PassBuilder::new("offscreen")
//!     .write("offscreen")
//!     .execute_fn(|| {
//!         // Draw calls land here once a backend exists.
//!     })
//!     .build();
//!
//! let sample_pass = PassBuilder::new("sample")
//!     .read("offscreen")
//!     .write("swapchain")
//!     .build();
//! ```
//!
//! Passes with a fixed role are usually structs implementing [`RenderPass`]
//! directly; see [`passes`](crate::passes) for the built-in ones.

use static_assertions::assert_obj_safe;

/// A unit of rendering work with declared resource reads and writes.
///
/// The graph queries [`reads`](RenderPass::reads) and
/// [`writes`](RenderPass::writes) several times per frame (for last-use
/// computation, allocation and release), so they must return the same names
/// on every call and be free of side effects. Implementations store the
/// vectors rather than rebuilding them.
///
/// [`setup`](RenderPass::setup) and [`execute`](RenderPass::execute) may
/// have side effects but must not change the declared sets.
pub trait RenderPass {
    /// Stable name of this pass, used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Names of the resources this pass consumes.
    fn reads(&self) -> &[String] {
        &[]
    }

    /// Names of the resources this pass produces.
    fn writes(&self) -> &[String] {
        &[]
    }

    /// Per-frame setup, called right before [`execute`](RenderPass::execute).
    fn setup(&mut self) {}

    /// Perform the pass.
    fn execute(&mut self) {}
}

assert_obj_safe!(RenderPass);

type BoxedHookFn = Box<dyn FnMut()>;

/// A pass assembled from closures by a [`PassBuilder`].
#[derive(Derivative)]
#[derivative(Debug)]
pub struct CallbackPass {
    name: String,
    reads: Vec<String>,
    writes: Vec<String>,
    #[derivative(Debug = "ignore")]
    setup: Option<BoxedHookFn>,
    #[derivative(Debug = "ignore")]
    execute: Option<BoxedHookFn>,
}

impl RenderPass for CallbackPass {
    fn name(&self) -> &str {
        &self.name
    }

    fn reads(&self) -> &[String] {
        &self.reads
    }

    fn writes(&self) -> &[String] {
        &self.writes
    }

    fn setup(&mut self) {
        if let Some(hook) = &mut self.setup {
            hook();
        }
    }

    fn execute(&mut self) {
        if let Some(hook) = &mut self.execute {
            hook();
        }
    }
}

/// Used to create [`CallbackPass`] objects.
/// # Example
/// See the [`pass`](crate::graph::pass) module level documentation.
pub struct PassBuilder {
    inner: CallbackPass,
}

impl PassBuilder {
    /// Create a new pass with the given name and no declared resources.
    pub fn new(name: impl Into<String>) -> Self {
        PassBuilder {
            inner: CallbackPass {
                name: name.into(),
                reads: vec![],
                writes: vec![],
                setup: None,
                execute: None,
            },
        }
    }

    /// Declare that the pass reads `resource`.
    pub fn read(mut self, resource: impl Into<String>) -> Self {
        self.inner.reads.push(resource.into());
        self
    }

    /// Declare that the pass writes `resource`.
    pub fn write(mut self, resource: impl Into<String>) -> Self {
        self.inner.writes.push(resource.into());
        self
    }

    /// Set the closure invoked for per-frame setup.
    pub fn setup_fn(mut self, hook: impl FnMut() + 'static) -> Self {
        self.inner.setup = Some(Box::new(hook));
        self
    }

    /// Set the closure invoked when the pass executes.
    pub fn execute_fn(mut self, hook: impl FnMut() + 'static) -> Self {
        self.inner.execute = Some(Box::new(hook));
        self
    }

    /// Obtain the built pass.
    pub fn build(self) -> CallbackPass {
        self.inner
    }
}
