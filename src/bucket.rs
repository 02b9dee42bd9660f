//! Date bucketing.
//!
//! A file modified on 2023-03-05 belongs to bucket `2023/2023-03-05`: a year folder with a
//! year-month-day folder nested inside it. Dates are taken in the local timezone.
//!
//! Grouping yields a `BucketPlan`, ordered by date; records within a bucket are ordered by
//! name so collision prefixes are assigned deterministically.

use chrono::{DateTime, Datelike, Local, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

use crate::fs_ops::FileRecord;

/// Year/month/day destination segment for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BucketKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Key for a modification time, interpreted in the local timezone.
    /// Times chrono cannot represent map to the epoch key.
    pub fn from_modified(modified: SystemTime) -> Self {
        Self::try_from_modified(modified).unwrap_or_else(Self::epoch)
    }

    /// Key for a modification time, or `None` when it falls outside chrono's date range.
    pub fn try_from_modified(modified: SystemTime) -> Option<Self> {
        let local = utc_from_system_time(modified)?.with_timezone(&Local);
        Some(Self::new(local.year(), local.month(), local.day()))
    }

    /// Key of the Unix epoch in local time.
    pub fn epoch() -> Self {
        let local = DateTime::<Utc>::default().with_timezone(&Local);
        Self::new(local.year(), local.month(), local.day())
    }

    /// Relative directory for this bucket, using the platform separator.
    pub fn relative_dir(&self) -> PathBuf {
        let mut p = PathBuf::from(self.year.to_string());
        p.push(self.day_folder());
        p
    }

    fn day_folder(&self) -> String {
        format!("{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn utc_from_system_time(t: SystemTime) -> Option<DateTime<Utc>> {
    let (secs, nanos) = match t.duration_since(UNIX_EPOCH) {
        Ok(d) => (i64::try_from(d.as_secs()).ok()?, d.subsec_nanos()),
        Err(e) => {
            let d = e.duration();
            let secs = i64::try_from(d.as_secs()).ok()?;
            match d.subsec_nanos() {
                0 => (-secs, 0),
                n => (-secs - 1, 1_000_000_000 - n),
            }
        }
    };
    DateTime::from_timestamp(secs, nanos)
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.day_folder())
    }
}

/// Files grouped by bucket, ready for relocation.
#[derive(Debug, Default)]
pub struct BucketPlan {
    buckets: BTreeMap<BucketKey, Vec<FileRecord>>,
}

impl BucketPlan {
    /// Group a source listing by bucket. Directory records are dropped.
    pub fn from_records(records: impl IntoIterator<Item = FileRecord>) -> Self {
        let mut buckets: BTreeMap<BucketKey, Vec<FileRecord>> = BTreeMap::new();
        for record in records.into_iter().filter(|r| !r.is_directory) {
            let key = BucketKey::try_from_modified(record.modified_at).unwrap_or_else(|| {
                warn!(name = ?record.name, "Modification time out of range, using epoch");
                BucketKey::epoch()
            });
            buckets.entry(key).or_default().push(record);
        }
        for files in buckets.values_mut() {
            files.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Self { buckets }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BucketKey, &[FileRecord])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn get(&self, key: &BucketKey) -> Option<&[FileRecord]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn file_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
