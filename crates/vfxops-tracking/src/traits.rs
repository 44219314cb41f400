use vfxops_core::PublishRecord;

/// Append-only history of publish records.
pub trait Tracker: Send + Sync {
    /// Short backend name, as selected in config.
    fn backend(&self) -> &'static str;

    /// Append one record. Earlier records are never lost or replaced; the same
    /// (show, shot, version) may be recorded any number of times.
    fn record_publish(&self, record: &PublishRecord) -> anyhow::Result<()>;

    /// Stored records matching both filters when given, newest timestamp first.
    fn list_publishes(&self, show: Option<&str>, shot: Option<&str>) -> anyhow::Result<Vec<PublishRecord>>;
}

/// Filter and order records the way every backend reports them.
pub fn select_newest_first<I>(records: I, show: Option<&str>, shot: Option<&str>) -> Vec<PublishRecord>
where
    I: IntoIterator<Item = PublishRecord>,
{
    let mut out: Vec<PublishRecord> = records.into_iter().filter(|r| r.matches(show, shot)).collect();
    out.sort_by(|a, b| b.timestamp_utc.cmp(&a.timestamp_utc));
    out
}
