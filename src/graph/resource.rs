use crate::pool::Handle;

/// Kind of resource a descriptor creates.
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ResourceKind {
    /// Color render target
    #[default]
    ColorTarget,
    /// Depth-stencil target
    DepthStencil,
    /// Generic buffer
    Buffer,
}

/// Describes a logical resource: kind, dimensions, format tag and whether
/// its backing handle may be recycled within a frame.
///
/// The format tag is application-defined; the graph and pool treat it as an
/// opaque equality and hash key only.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Kind of resource.
    pub kind: ResourceKind,
    /// Width in pixels, or element count for buffers.
    pub width: u32,
    /// Height in pixels. Buffers use 1.
    pub height: u32,
    /// Format tag, e.g. "RGBA8" or "D24S8".
    pub format: String,
    /// Whether the backing handle returns to the pool on release. When
    /// false, release destroys the handle instead.
    pub transient: bool,
}

impl ResourceDescriptor {
    /// Create a transient color target descriptor.
    pub fn color_target(width: u32, height: u32, format: impl Into<String>) -> Self {
        ResourceDescriptor {
            kind: ResourceKind::ColorTarget,
            width,
            height,
            format: format.into(),
            transient: true,
        }
    }

    /// Create a transient depth-stencil descriptor.
    pub fn depth_stencil(width: u32, height: u32, format: impl Into<String>) -> Self {
        ResourceDescriptor {
            kind: ResourceKind::DepthStencil,
            width,
            height,
            format: format.into(),
            transient: true,
        }
    }

    /// Create a transient buffer descriptor holding `elements` entries.
    pub fn buffer(elements: u32, format: impl Into<String>) -> Self {
        ResourceDescriptor {
            kind: ResourceKind::Buffer,
            width: elements,
            height: 1,
            format: format.into(),
            transient: true,
        }
    }

    /// Mark the resource as persistent: on release its handle is destroyed
    /// rather than pooled, and the graph never auto-releases it.
    pub fn persistent(mut self) -> Self {
        self.transient = false;
        self
    }
}

/// Registry entry for a named resource: its descriptor plus the handle
/// currently backing it, if any.
///
/// Records persist across frames; only the handle changes as the graph
/// allocates and releases around pass execution.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    pub(crate) descriptor: ResourceDescriptor,
    pub(crate) handle: Option<Handle>,
}

impl ResourceRecord {
    pub(crate) fn new(descriptor: ResourceDescriptor) -> Self {
        ResourceRecord {
            descriptor,
            handle: None,
        }
    }

    /// The descriptor this resource was registered with.
    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// The handle currently backing this resource, or `None` when
    /// unallocated.
    pub fn handle(&self) -> Option<Handle> {
        self.handle
    }

    /// Whether the resource currently has a backing handle.
    pub fn is_allocated(&self) -> bool {
        self.handle.is_some()
    }
}
