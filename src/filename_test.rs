use crate::filename::{decode, DecodedName};
use crate::record::Phase;

#[test]
pub fn workload_with_embedded_separator() {
    assert_eq!(
        decode("rocksdb_workload_scan100_run_20240101.log"),
        Some(DecodedName {
            database: String::from("rocksdb"),
            workload: String::from("workload_scan100"),
            phase: Phase::Run,
        })
    );
}

#[test]
pub fn plain_workload() {
    assert_eq!(
        decode("leveldb_workloada_load_1.log"),
        Some(DecodedName {
            database: String::from("leveldb"),
            workload: String::from("workloada"),
            phase: Phase::Load,
        })
    );
}

#[test]
pub fn too_few_tokens() {
    assert_eq!(decode("db_run.log"), None);
    assert_eq!(decode("db_workloada_run.log"), None);
}

#[test]
pub fn missing_phase_token() {
    assert_eq!(decode("rocksdb_workloada_warmup_20240101.log"), None);
}

#[test]
pub fn empty_workload_is_legal() {
    // phase directly after the database decodes to an empty workload
    let decoded = decode("rocksdb_run_20240101_120000.log").unwrap();

    assert_eq!(decoded.database, "rocksdb");
    assert_eq!(decoded.workload, "");
    assert_eq!(decoded.phase, Phase::Run);
}

#[test]
pub fn timestamp_tokens_are_ignored() {
    let decoded = decode("lmdb_workloadb_run_2024_01_01_120000.log").unwrap();

    assert_eq!(decoded.database, "lmdb");
    assert_eq!(decoded.workload, "workloadb");
    assert_eq!(decoded.phase, Phase::Run);
}
