use question_splitter::io::{read_participants, read_questions, write_report};
use question_splitter::models::Policy;
use question_splitter::session::{Roster, Session};
use question_splitter::{ExportFormat, SplitError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

// Test fixtures - sample data for testing

fn create_sample_questions_content() -> String {
    r#"1. What is the capital of France?

2. Name three primary colors.
   3. Define photosynthesis.

4. In which year did the French Revolution begin?"#
        .to_string()
}

fn create_sample_csv_content() -> String {
    "1. What is H2O?,2. Name a noble gas\n3. Define an isotope\n,4. What is pH?\n".to_string()
}

fn create_sample_participants_content() -> String {
    r#"Alice

Bob
Alice
  Charlie  "#
        .to_string()
}

/// Writes content into `dir` under `file_name` and returns the full path
fn write_fixture(dir: &TempDir, file_name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, content).unwrap();
    path
}

// Tests for read_questions

#[test]
fn test_read_questions_txt_skips_blanks_and_trims() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "questions.txt", &create_sample_questions_content());

    let questions = read_questions(&path).unwrap();

    assert_eq!(questions.len(), 4);
    assert_eq!(questions[0], "1. What is the capital of France?");
    assert_eq!(questions[2], "3. Define photosynthesis.");
}

#[test]
fn test_read_questions_txt_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "questions.txt", "\n\n   \n");

    let questions = read_questions(&path).unwrap();
    assert!(questions.is_empty());
}

#[test]
fn test_read_questions_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = read_questions(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, SplitError::SourceRead(_, _)));
}

#[test]
fn test_read_questions_csv_collects_cells_in_row_order() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "questions.csv", &create_sample_csv_content());

    let questions = read_questions(&path).unwrap();

    assert_eq!(
        questions,
        [
            "1. What is H2O?",
            "2. Name a noble gas",
            "3. Define an isotope",
            "4. What is pH?"
        ]
    );
}

#[test]
fn test_read_questions_csv_trims_cells_and_skips_empty_ones() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "questions.csv", " 1. Alpha ,  ,2. Beta\n");

    let questions = read_questions(&path).unwrap();
    assert_eq!(questions, ["1. Alpha", "2. Beta"]);
}

#[test]
fn test_read_questions_csv_honors_quoting() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "questions.csv",
        "\"1. What is 2,5 + 3?\",2. Simplify 4/8\n",
    );

    let questions = read_questions(&path).unwrap();
    assert_eq!(questions, ["1. What is 2,5 + 3?", "2. Simplify 4/8"]);
}

#[test]
fn test_read_questions_csv_extension_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "QUESTIONS.CSV", "1. Alpha,2. Beta\n");

    let questions = read_questions(&path).unwrap();
    assert_eq!(questions, ["1. Alpha", "2. Beta"]);
}

#[test]
fn test_read_questions_unknown_extension_reads_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "questions.dat", "1. Alpha\n2. Beta\n");

    let questions = read_questions(&path).unwrap();
    assert_eq!(questions, ["1. Alpha", "2. Beta"]);
}

// Tests for read_participants

#[test]
fn test_read_participants_skips_blanks_and_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "names.txt", &create_sample_participants_content());

    let participants = read_participants(&path).unwrap();
    assert_eq!(participants, ["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_read_participants_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = read_participants(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, SplitError::SourceRead(_, _)));
}

// Tests for write_report

#[test]
fn test_write_report_round_trips_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.txt");

    write_report(&path, "line one\nline two\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
}

#[test]
fn test_write_report_missing_directory_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("results.txt");

    let err = write_report(&path, "contents").unwrap_err();
    assert!(matches!(err, SplitError::ExportWrite(_, _)));
}

// Full pipeline: files in, rendered report out

#[test]
fn test_full_split_from_files_to_report() {
    let dir = TempDir::new().unwrap();
    let questions_path = write_fixture(
        &dir,
        "quiz.txt",
        "3. Gamma\n1. Alpha\n2. Beta\n5. Epsilon\n4. Delta\n",
    );
    let names_path = write_fixture(&dir, "names.txt", "Alice\nBob\n");

    let roster = Roster::new(read_participants(&names_path).unwrap());
    let mut session = Session::new(roster);
    assert_eq!(session.load_questions(&questions_path).unwrap(), 5);

    let mut rng = StdRng::seed_from_u64(1);
    session.distribute(Policy::Even, &mut rng).unwrap();

    let report = session.report().unwrap();
    let output_path = dir.path().join("quiz_results.txt");
    write_report(&output_path, &ExportFormat::Text.render(&report)).unwrap();

    let text = fs::read_to_string(&output_path).unwrap();
    assert!(text.contains("Total questions: 5"));
    assert!(text.contains("Alice [3 questions]:"));
    assert!(text.contains("Bob [2 questions]:"));
    // Alice holds questions 3, 1 and the remainder 4, re-sorted for the report
    assert!(text.contains("1. Alpha\n3. Gamma\n4. Delta\n"));
    assert!(text.contains("2. Beta\n5. Epsilon\n"));
    assert!(text.contains("Fewest questions: Bob; most questions: Alice"));
}
