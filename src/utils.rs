use std::path::{Path, PathBuf};

/// Checks if a path exists
pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    Path::new(path.as_ref()).exists()
}

/// Default export path for an input file: `<stem>_results.<extension>`
/// next to the input
pub fn derive_output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("results");
    input.with_file_name(format!("{stem}_results.{extension}"))
}
