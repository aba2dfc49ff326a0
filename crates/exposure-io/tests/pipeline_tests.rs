//! End-to-end pipeline tests: fixture files in, score files out

use exposure_core::{compute_aife, compute_aioe};
use exposure_io::{load_ability_ratings, load_firm_postings, load_relevance_matrix, write_scores};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    write!(file, "{contents}").unwrap();
    path
}

#[test]
fn test_full_pipeline_csv_to_csv() {
    let dir = tempfile::tempdir().unwrap();

    let relevance = write_fixture(
        &dir,
        "relevance.csv",
        "ability_id,App1,App2\n\
         A1,0.5,0.5\n\
         A2,1.0,0.0\n",
    );
    let ratings = write_fixture(
        &dir,
        "abilities.csv",
        "O*NET-SOC Code,Element ID,Scale ID,Data Value\n\
         15-1252,A1,IM,2.0\n\
         15-1252,A1,LV,3.5\n\
         15-1252,A2,IM,1.0\n",
    );
    let postings = write_fixture(
        &dir,
        "postings.csv",
        "firm_id,occupation_code,share\n\
         F1,15-1252,0.6\n\
         F1,99-9999,0.4\n",
    );

    let matrix = load_relevance_matrix(&relevance).unwrap();
    let table = load_ability_ratings(&ratings).unwrap();
    let firms = load_firm_postings(&postings).unwrap();

    // AIOE: 2.0*1.0 + 1.0*1.0 = 3.0, AIFE: 0.6*3.0 = 1.8
    let aioe = compute_aioe(&table, &matrix);
    assert_eq!(aioe.get("15-1252"), Some(3.0));

    let aife = compute_aife(&firms, &aioe);
    assert_eq!(aife.get("F1"), Some(1.8));

    let out = dir.path().join("aife_scores.csv");
    write_scores(&out, &aife, "firm_id", "aife_score").unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "firm_id,aife_score\nF1,1.8\n"
    );
}

#[test]
fn test_pipeline_firm_absent_when_no_occupation_matches() {
    let dir = tempfile::tempdir().unwrap();

    let relevance = write_fixture(&dir, "relevance.csv", "ability_id,App1\nA1,1.0\n");
    let ratings = write_fixture(
        &dir,
        "abilities.csv",
        "O*NET-SOC Code,Element ID,Scale ID,Data Value\n\
         15-1252,A1,IM,2.0\n",
    );
    let postings = write_fixture(
        &dir,
        "postings.csv",
        "firm_id,occupation_code\n\
         F1,15-1252\n\
         F2,99-9999\n",
    );

    let aioe = compute_aioe(
        &load_ability_ratings(&ratings).unwrap(),
        &load_relevance_matrix(&relevance).unwrap(),
    );
    let aife = compute_aife(&load_firm_postings(&postings).unwrap(), &aioe);

    assert_eq!(aife.get("F1"), Some(2.0));
    assert!(aife.get("F2").is_none());
}

#[test]
fn test_pipeline_posting_counts_as_weights() {
    let dir = tempfile::tempdir().unwrap();

    let relevance = write_fixture(
        &dir,
        "relevance.csv",
        "ability_id,App1\n\
         A1,1.0\n\
         A2,0.5\n",
    );
    let ratings = write_fixture(
        &dir,
        "abilities.csv",
        "O*NET-SOC Code,Element ID,Scale ID,Data Value\n\
         15-1252,A1,IM,1.0\n\
         29-1141,A2,IM,2.0\n",
    );
    // no share column: num_postings defaults to 1 per row
    let postings = write_fixture(
        &dir,
        "postings.csv",
        "firm_id,occupation_code\n\
         F1,15-1252\n\
         F1,15-1252\n\
         F1,29-1141\n",
    );

    let aioe = compute_aioe(
        &load_ability_ratings(&ratings).unwrap(),
        &load_relevance_matrix(&relevance).unwrap(),
    );
    assert_eq!(aioe.get("15-1252"), Some(1.0));
    assert_eq!(aioe.get("29-1141"), Some(1.0));

    let aife = compute_aife(&load_firm_postings(&postings).unwrap(), &aioe);
    assert_eq!(aife.get("F1"), Some(3.0));
}
