use question_splitter::utils::{derive_output_path, path_exists};
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_path_exists_with_existing_file() {
    // Create a temporary file
    let temp_file = NamedTempFile::new().unwrap();
    let temp_path = temp_file.path();

    // Test that path_exists returns true for existing file
    assert!(path_exists(temp_path));
    assert!(path_exists(temp_path.to_str().unwrap()));
}

#[test]
fn test_path_exists_with_existing_directory() {
    // Create a temporary directory
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    // Test that path_exists returns true for existing directory
    assert!(path_exists(temp_path));
    assert!(path_exists(temp_path.to_str().unwrap()));
}

#[test]
fn test_path_exists_with_nonexistent_path() {
    // Test with a path that definitely doesn't exist
    let nonexistent_path = "/this/path/definitely/does/not/exist/hopefully/12345";

    assert!(!path_exists(nonexistent_path));
    assert!(!path_exists(Path::new(nonexistent_path)));
}

#[test]
fn test_derive_output_path_keeps_the_directory() {
    let output = derive_output_path(Path::new("/data/sets/quiz.txt"), "txt");
    assert_eq!(output, PathBuf::from("/data/sets/quiz_results.txt"));
}

#[test]
fn test_derive_output_path_applies_the_format_extension() {
    let output = derive_output_path(Path::new("/data/sets/quiz.txt"), "html");
    assert_eq!(output, PathBuf::from("/data/sets/quiz_results.html"));
}

#[test]
fn test_derive_output_path_with_relative_input() {
    let output = derive_output_path(Path::new("quiz.csv"), "csv");
    assert_eq!(output, PathBuf::from("quiz_results.csv"));
}

#[test]
fn test_derive_output_path_without_input_extension() {
    let output = derive_output_path(Path::new("/data/quiz"), "txt");
    assert_eq!(output, PathBuf::from("/data/quiz_results.txt"));
}
