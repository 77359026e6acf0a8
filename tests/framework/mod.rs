use std::sync::{Arc, Mutex};

use deimos::prelude::*;

/// Shared event journal that tracking passes and pool hooks append to.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn record(journal: &Journal, event: impl Into<String>) {
    journal.lock().unwrap().push(event.into());
}

pub fn events(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// A pass that records its setup and execute invocations in a shared
/// journal, so tests can assert on exact scheduling order.
pub struct TrackingPass {
    name: String,
    reads: Vec<String>,
    writes: Vec<String>,
    journal: Journal,
}

impl TrackingPass {
    pub fn new(name: &str, reads: &[&str], writes: &[&str], journal: &Journal) -> Self {
        TrackingPass {
            name: name.to_owned(),
            reads: reads.iter().map(|&name| name.to_owned()).collect(),
            writes: writes.iter().map(|&name| name.to_owned()).collect(),
            journal: journal.clone(),
        }
    }
}

impl RenderPass for TrackingPass {
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
        record(&self.journal, format!("setup:{}", self.name));
    }

    fn execute(&mut self) {
        record(&self.journal, format!("execute:{}", self.name));
    }
}

/// A pool whose mint events land in the journal as `create:<id>`. Reuse of
/// a pooled handle produces no event, which is exactly what makes reuse
/// observable in the recorded sequence.
pub fn journaling_pool(journal: &Journal) -> TransientPool {
    let mut pool = TransientPool::new();
    let create_journal = journal.clone();
    pool.on_create(move |handle, _| record(&create_journal, format!("create:{}", handle.id())));
    pool
}

/// Square transient color target of the given edge length.
pub fn rgba8(size: u32) -> ResourceDescriptor {
    ResourceDescriptor::color_target(size, size, "RGBA8")
}
