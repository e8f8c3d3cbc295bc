use crate::record::{BenchmarkRecord, Phase};
use std::collections::{btree_map::Entry, BTreeMap};

/// Collapse repeated observations for the same `(database, workload, phase)`
/// key into a single record.
///
/// Each field is maximized independently: repeated runs are attempts at the
/// same measurement and the highest observed value is kept, throughput and
/// storage size separately. Max is commutative and associative, so input
/// order never changes the result and aggregating twice is a no-op.
pub fn aggregate(records: Vec<BenchmarkRecord>) -> Vec<BenchmarkRecord> {
    let mut groups: BTreeMap<(String, String, Phase), BenchmarkRecord> = BTreeMap::new();

    for record in records {
        match groups.entry(record.key()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                let merged = slot.get_mut();
                merged.throughput_ops_per_sec =
                    merged.throughput_ops_per_sec.max(record.throughput_ops_per_sec);
                merged.throughput_millions =
                    merged.throughput_millions.max(record.throughput_millions);
                merged.storage_size_mb = merged.storage_size_mb.max(record.storage_size_mb);
            }
        }
    }

    groups.into_values().collect()
}
