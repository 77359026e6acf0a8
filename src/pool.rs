//! Pooled allocation of render resource handles.
//!
//! [`TransientPool`] hands out opaque [`Handle`]s for named resources and
//! reclaims them on release. A released transient handle is not freed but
//! parked in a free list keyed by the resource's shape, so the next
//! allocation of a matching shape reuses it instead of minting a new
//! identity. Non-transient handles are discarded on release and never
//! re-enter circulation.
//!
//! The pool is a logical-handle bookkeeper: nothing is created on a device.
//! A backend wrapping a real graphics API installs its create/destroy calls
//! through [`TransientPool::on_create`] and [`TransientPool::on_destroy`].

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use multimap::MultiMap;

use crate::graph::resource::{ResourceDescriptor, ResourceKind};

/// Opaque identifier standing in for a real GPU or OS resource.
///
/// Handles are only meaningful to the pool that minted them. Passes must
/// address resources by name and let the graph re-resolve the handle every
/// frame: pooling can put the same id behind a different name from one frame
/// to the next, so a cached handle value goes stale silently.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    /// Get the numeric id of this handle. Ids are minted from 1; no live or
    /// pooled handle ever has id 0.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Display for Handle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shape key for pool buckets.
///
/// Two descriptors land in the same bucket if and only if their kind,
/// dimensions and format tag are all equal. The transient flag does not
/// participate in the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolKey {
    kind: ResourceKind,
    width: u32,
    height: u32,
    format: String,
}

impl PoolKey {
    /// Derive the pool key for a descriptor.
    pub fn of(descriptor: &ResourceDescriptor) -> Self {
        PoolKey {
            kind: descriptor.kind,
            width: descriptor.width,
            height: descriptor.height,
            format: descriptor.format.clone(),
        }
    }
}

impl Display for PoolKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}_{} ({:?})", self.width, self.height, self.format, self.kind)
    }
}

/// Counters describing what the pool has done so far.
///
/// These mirror the pool's log output in queryable form, so a harness can
/// assert on allocation and reuse behavior without scraping logs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PoolStats {
    /// Fresh handles minted because no pooled handle matched the shape.
    pub minted: u64,
    /// Allocations served by reusing a pooled handle.
    pub reused: u64,
    /// Releases that parked a transient handle for reuse.
    pub pooled: u64,
    /// Releases that discarded a non-transient handle.
    pub discarded: u64,
}

type BoxedCreateFn = Box<dyn FnMut(Handle, &ResourceDescriptor)>;
type BoxedDestroyFn = Box<dyn FnMut(Handle)>;

/// Pooled allocator of resource handles, keyed by resource shape.
///
/// The pool tracks which name currently owns which handle and keeps a LIFO
/// free list per [`PoolKey`]. A handle is either live under exactly one name
/// or parked in exactly one bucket, never both.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct TransientPool {
    free: MultiMap<PoolKey, Handle>,
    live: HashMap<String, Handle>,
    next_id: u64,
    stats: PoolStats,
    #[derivative(Debug = "ignore")]
    on_create: Option<BoxedCreateFn>,
    #[derivative(Debug = "ignore")]
    on_destroy: Option<BoxedDestroyFn>,
}

impl TransientPool {
    /// Create an empty pool. Handle ids start at 1.
    pub fn new() -> Self {
        TransientPool {
            free: MultiMap::new(),
            live: HashMap::new(),
            next_id: 1,
            stats: PoolStats::default(),
            on_create: None,
            on_destroy: None,
        }
    }

    /// Install a callback invoked whenever a fresh handle is minted.
    ///
    /// This is the seam where a graphics backend creates the device object
    /// backing the handle. Reused handles do not trigger it.
    pub fn on_create(&mut self, callback: impl FnMut(Handle, &ResourceDescriptor) + 'static) {
        self.on_create = Some(Box::new(callback));
    }

    /// Install a callback invoked when a handle is logically freed: on
    /// release of a non-transient resource, and for every handle still
    /// tracked when the pool is dropped.
    pub fn on_destroy(&mut self, callback: impl FnMut(Handle) + 'static) {
        self.on_destroy = Some(Box::new(callback));
    }

    /// Allocate a handle for `name`, reusing a pooled handle of the same
    /// shape when one is available and minting a fresh id otherwise.
    ///
    /// Allocating a name that is already live overwrites the live mapping
    /// and orphans the previous handle; callers must release first. The
    /// graph guarantees this by only allocating unallocated records.
    pub fn allocate(&mut self, name: impl Into<String>, descriptor: &ResourceDescriptor) -> Handle {
        let name = name.into();
        let key = PoolKey::of(descriptor);
        let handle = match self.free.get_vec_mut(&key).and_then(Vec::pop) {
            Some(handle) => {
                self.stats.reused += 1;
                debug!("Reuse {} -> handle {}", name, handle);
                handle
            }
            None => {
                let handle = Handle(self.next_id);
                self.next_id += 1;
                self.stats.minted += 1;
                debug!("Alloc {} -> handle {}", name, handle);
                #[cfg(feature = "log-objects")]
                trace!("Created new handle {} for shape {}", handle, key);
                if let Some(callback) = &mut self.on_create {
                    callback(handle, descriptor);
                }
                handle
            }
        };
        self.live.insert(name, handle);
        handle
    }

    /// Release the handle held by `name`. Unknown names are ignored.
    ///
    /// Transient handles are parked in the bucket for the descriptor's shape;
    /// non-transient handles are destroyed.
    pub fn release(&mut self, name: &str, descriptor: &ResourceDescriptor) {
        let Some(handle) = self.live.remove(name) else {
            return;
        };
        if descriptor.transient {
            self.stats.pooled += 1;
            debug!("Pool {} handle {}", name, handle);
            self.free.insert(PoolKey::of(descriptor), handle);
        } else {
            self.stats.discarded += 1;
            debug!("Free {} handle {}", name, handle);
            self.destroy(handle);
        }
    }

    /// Number of handles currently live under a name.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of handles parked for reuse, over all buckets.
    pub fn pooled_count(&self) -> usize {
        self.free.iter_all().map(|(_, handles)| handles.len()).sum()
    }

    /// Counters for allocations, reuses and releases so far.
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    fn destroy(&mut self, handle: Handle) {
        #[cfg(feature = "log-objects")]
        trace!("Destroying handle {}", handle);
        if let Some(callback) = &mut self.on_destroy {
            callback(handle);
        }
    }
}

impl Default for TransientPool {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TransientPool {
    fn drop(&mut self) {
        let free = std::mem::replace(&mut self.free, MultiMap::new());
        for (_, handles) in free.iter_all() {
            for &handle in handles {
                debug!("Cleanup pooled handle {}", handle);
                self.destroy(handle);
            }
        }
        let live = std::mem::take(&mut self.live);
        for (name, handle) in live {
            debug!("Release live resource {} handle {}", name, handle);
            self.destroy(handle);
        }
    }
}
