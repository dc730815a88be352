//! Report directories: persistence of both worlds and fail-closed reads.

use statespace_harness::report::{report_all, report_digest, ReportError, SearchReport};
use statespace_harness::report_dir::{read_report_dir, write_report_dir, DIGEST_INDEX_FILENAME};
use statespace_harness::worlds::figure_3_31;
use statespace_harness::worlds::river_crossing::RiverCrossing;
use statespace_search::SearchPolicy;

fn all_reports(policy: &SearchPolicy) -> Vec<SearchReport> {
    let mut reports = report_all(&RiverCrossing::classic(), policy).unwrap();
    reports.extend(report_all(&figure_3_31::problem().unwrap(), policy).unwrap());
    reports
}

#[test]
fn written_directory_verifies_and_matches_in_memory_digests() {
    let dir = tempfile::tempdir().unwrap();
    let reports = all_reports(&SearchPolicy::default().with_transitions());
    write_report_dir(&reports, dir.path()).unwrap();

    let index = read_report_dir(dir.path()).unwrap();
    assert_eq!(index.len(), reports.len());
    for report in &reports {
        let on_disk = std::fs::read(dir.path().join(report.file_name())).unwrap();
        assert_eq!(report_digest(&on_disk), report.digest);
        assert_eq!(index[&report.file_name()], report.digest);
    }
}

#[test]
fn rewriting_the_same_reports_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let reports = all_reports(&SearchPolicy::default());
    write_report_dir(&reports, dir.path()).unwrap();
    let first = std::fs::read(dir.path().join(DIGEST_INDEX_FILENAME)).unwrap();
    write_report_dir(&reports, dir.path()).unwrap();
    let second = std::fs::read(dir.path().join(DIGEST_INDEX_FILENAME)).unwrap();
    assert_eq!(first, second);
    assert!(read_report_dir(dir.path()).is_ok());
}

#[test]
fn budget_limited_reports_persist_without_solutions() {
    let dir = tempfile::tempdir().unwrap();
    let reports = all_reports(&SearchPolicy::default().with_max_expansions(2));
    for report in &reports {
        let value = report.value().unwrap();
        assert_eq!(value["termination"], "expansion_budget_exceeded");
        assert!(value["solution"].is_null());
    }
    write_report_dir(&reports, dir.path()).unwrap();
    assert_eq!(read_report_dir(dir.path()).unwrap().len(), 8);
}

#[test]
fn single_byte_tamper_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&all_reports(&SearchPolicy::default()), dir.path()).unwrap();

    let target = dir.path().join("figure_3_31.ucs.json");
    let mut bytes = std::fs::read(&target).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    std::fs::write(&target, bytes).unwrap();

    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(
        matches!(&err, ReportError::DigestMismatch { name, .. } if name == "figure_3_31.ucs.json"),
        "{err}"
    );
}
