use crate::aggregate::aggregate;
use crate::record::{BenchmarkRecord, Phase};

fn record(database: &str, workload: &str, phase: Phase, throughput: f64, size: f64) -> BenchmarkRecord {
    BenchmarkRecord::new(
        database.to_owned(),
        workload.to_owned(),
        phase,
        throughput,
        size,
    )
}

#[test]
pub fn duplicates_collapse_to_the_maximum() {
    let records = vec![
        record("rocksdb", "workloada", Phase::Run, 500_000.0, 0.0),
        record("rocksdb", "workloada", Phase::Run, 700_000.0, 0.0),
    ];
    let reversed: Vec<_> = records.iter().cloned().rev().collect();

    for input in [records, reversed] {
        let dataset = aggregate(input);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].throughput_ops_per_sec, 700_000.0);
        assert_eq!(dataset[0].throughput_millions, 0.7);
    }
}

#[test]
pub fn fields_maximize_independently() {
    // highest throughput and largest size may come from different runs
    let dataset = aggregate(vec![
        record("rocksdb", "workloada", Phase::Run, 700_000.0, 10.0),
        record("rocksdb", "workloada", Phase::Run, 500_000.0, 50.0),
    ]);

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset[0].throughput_ops_per_sec, 700_000.0);
    assert_eq!(dataset[0].storage_size_mb, 50.0);
}

#[test]
pub fn distinct_keys_stay_separate() {
    let dataset = aggregate(vec![
        record("rocksdb", "workloada", Phase::Run, 1.0, 0.0),
        record("rocksdb", "workloada", Phase::Load, 2.0, 0.0),
        record("rocksdb", "workloadb", Phase::Run, 3.0, 0.0),
        record("leveldb", "workloada", Phase::Run, 4.0, 0.0),
    ]);

    assert_eq!(dataset.len(), 4);
}

#[test]
pub fn aggregation_is_idempotent() {
    let records = vec![
        record("rocksdb", "workloada", Phase::Run, 500_000.0, 12.0),
        record("rocksdb", "workloada", Phase::Run, 700_000.0, 8.0),
        record("leveldb", "workload_scan100", Phase::Run, 300_000.0, 96.0),
    ];

    let once = aggregate(records);
    let twice = aggregate(once.clone());

    assert_eq!(once.len(), twice.len());
    for (first, second) in once.iter().zip(twice.iter()) {
        assert_eq!(first.key(), second.key());
        assert_eq!(first.throughput_ops_per_sec, second.throughput_ops_per_sec);
        assert_eq!(first.throughput_millions, second.throughput_millions);
        assert_eq!(first.storage_size_mb, second.storage_size_mb);
    }
}
