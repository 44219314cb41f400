use std::sync::Mutex;

use vfxops_core::PublishRecord;

use crate::traits::{select_newest_first, Tracker};

/// In-memory tracker for tests. Not durable.
#[derive(Default)]
pub struct InMemoryTracker {
    records: Mutex<Vec<PublishRecord>>,
}

impl InMemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Tracker for InMemoryTracker {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn record_publish(&self, record: &PublishRecord) -> anyhow::Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn list_publishes(&self, show: Option<&str>, shot: Option<&str>) -> anyhow::Result<Vec<PublishRecord>> {
        let records = self.records.lock().unwrap().clone();
        Ok(select_newest_first(records, show, shot))
    }
}
