use deimos::prelude::*;

mod framework;

use framework::{events, journal, record, rgba8};

#[test]
pub fn handles_are_distinct_while_live() {
    let mut pool = TransientPool::new();
    let a = pool.allocate("A", &rgba8(64));
    let b = pool.allocate("B", &rgba8(64));

    assert_ne!(a, b, "two live names must never share a handle");
    assert_eq!(pool.live_count(), 2);

    // Once A is released its handle may move to a new name, but it is no
    // longer live under A.
    pool.release("A", &rgba8(64));
    let c = pool.allocate("C", &rgba8(64));
    assert_eq!(c, a);
    assert_eq!(pool.live_count(), 2);
    assert_eq!(pool.pooled_count(), 0);
}

#[test]
pub fn released_transient_handle_is_reused() {
    let mut pool = TransientPool::new();
    let first = pool.allocate("A", &rgba8(64));
    pool.release("A", &rgba8(64));

    let second = pool.allocate("B", &rgba8(64));
    assert_eq!(second, first, "same shape must reuse the pooled handle");
    assert_eq!(pool.stats().minted, 1, "reuse must not mint a new identity");
    assert_eq!(pool.stats().reused, 1);
}

#[test]
pub fn reuse_is_lifo() {
    let mut pool = TransientPool::new();
    let a = pool.allocate("A", &rgba8(64));
    let b = pool.allocate("B", &rgba8(64));
    pool.release("A", &rgba8(64));
    pool.release("B", &rgba8(64));

    // B was pooled last, so it comes back first.
    assert_eq!(pool.allocate("C", &rgba8(64)), b);
    assert_eq!(pool.allocate("D", &rgba8(64)), a);
    assert_eq!(pool.stats().minted, 2);
    assert_eq!(pool.stats().reused, 2);
}

#[test]
pub fn non_transient_release_discards_the_handle() {
    let persistent = rgba8(64).persistent();

    let mut pool = TransientPool::new();
    let first = pool.allocate("A", &persistent);
    pool.release("A", &persistent);

    assert_eq!(pool.pooled_count(), 0);
    assert_eq!(pool.stats().discarded, 1);

    // A same-shape transient allocation must mint a fresh id.
    let second = pool.allocate("B", &rgba8(64));
    assert_ne!(second, first);
    assert_eq!(pool.stats().minted, 2);
    assert_eq!(pool.stats().reused, 0);
}

#[test]
pub fn buckets_are_kind_aware() {
    // Same dimensions, same format tag, different kind: no cross-kind reuse
    // even if an application recycles a format string.
    let color = rgba8(64);
    let depth = ResourceDescriptor::depth_stencil(64, 64, "RGBA8");

    let mut pool = TransientPool::new();
    let first = pool.allocate("Color", &color);
    pool.release("Color", &color);

    let second = pool.allocate("Depth", &depth);
    assert_ne!(second, first);
    assert_eq!(pool.stats().minted, 2);
}

#[test]
pub fn buckets_are_format_aware() {
    let hdr = ResourceDescriptor::color_target(64, 64, "RGBA16F");

    let mut pool = TransientPool::new();
    let first = pool.allocate("Ldr", &rgba8(64));
    pool.release("Ldr", &rgba8(64));

    let second = pool.allocate("Hdr", &hdr);
    assert_ne!(second, first);
    assert_eq!(pool.pooled_count(), 1, "the RGBA8 handle stays in its own bucket");
}

#[test]
pub fn release_of_unknown_name_is_a_noop() {
    let mut pool = TransientPool::new();
    pool.release("Ghost", &rgba8(64));

    assert_eq!(pool.live_count(), 0);
    assert_eq!(pool.pooled_count(), 0);
    assert_eq!(pool.stats(), PoolStats::default());
}

#[test]
pub fn double_release_is_a_noop() {
    let mut pool = TransientPool::new();
    pool.allocate("A", &rgba8(64));
    pool.release("A", &rgba8(64));
    pool.release("A", &rgba8(64));

    assert_eq!(pool.pooled_count(), 1);
    assert_eq!(pool.stats().pooled, 1);
}

#[test]
pub fn destroy_callback_fires_for_discard_and_teardown() {
    let destroyed = journal();

    {
        let mut pool = TransientPool::new();
        let hook = destroyed.clone();
        pool.on_destroy(move |handle| record(&hook, format!("destroy:{}", handle.id())));

        let persistent = rgba8(128).persistent();
        pool.allocate("Scratch", &rgba8(64));
        pool.release("Scratch", &rgba8(64)); // pooled, not destroyed
        pool.allocate("Target", &persistent);
        pool.release("Target", &persistent); // destroyed immediately
        pool.allocate("Leftover", &rgba8(64)); // still live at teardown
    }

    let mut seen = events(&destroyed);
    // Teardown order over buckets is unspecified; the set is what matters
    // after the first (deterministic) discard.
    let first = seen.remove(0);
    assert_eq!(first, "destroy:2");
    seen.sort();
    assert_eq!(seen, vec!["destroy:1", "destroy:3"]);
}

#[test]
pub fn create_callback_fires_only_for_minted_handles() {
    let created = journal();

    let mut pool = TransientPool::new();
    let hook = created.clone();
    pool.on_create(move |handle, descriptor| {
        record(&hook, format!("create:{}:{}", handle.id(), descriptor.format))
    });

    pool.allocate("A", &rgba8(64));
    pool.release("A", &rgba8(64));
    pool.allocate("B", &rgba8(64)); // reuse, no create event

    assert_eq!(events(&created), vec!["create:1:RGBA8"]);
}
