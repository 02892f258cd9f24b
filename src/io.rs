use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SplitError};

/// Reads questions from a source file. `.csv` sources contribute every
/// non-empty cell in row order; any other extension is read as plain text
/// with one question per line. Blank lines and surrounding whitespace are
/// dropped either way.
pub fn read_questions(path: &Path) -> Result<Vec<String>> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let questions = if is_csv {
        read_questions_csv(path)?
    } else {
        read_questions_lines(path)?
    };

    log::info!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

fn read_questions_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| SplitError::SourceRead(path.display().to_string(), e))?;
    let reader = BufReader::new(file);
    let mut questions = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| SplitError::SourceRead(path.display().to_string(), e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        questions.push(line.to_string());
    }

    Ok(questions)
}

fn read_questions_csv(path: &Path) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| SplitError::SourceParse(path.display().to_string(), e))?;

    let mut questions = Vec::new();
    for result in rdr.records() {
        let record =
            result.map_err(|e| SplitError::SourceParse(path.display().to_string(), e))?;
        for cell in record.iter() {
            if !cell.is_empty() {
                questions.push(cell.to_string());
            }
        }
    }

    Ok(questions)
}

/// Reads participant names, one per line. Blank lines are skipped and
/// repeated names are dropped with a warning, keeping the first occurrence.
pub fn read_participants(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| SplitError::SourceRead(path.display().to_string(), e))?;
    let reader = BufReader::new(file);
    let mut names: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| SplitError::SourceRead(path.display().to_string(), e))?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if names.iter().any(|existing| existing == name) {
            log::warn!("Skipping duplicate participant name: {name}");
            continue;
        }
        names.push(name.to_string());
    }

    log::info!("Loaded {} participants from {}", names.len(), path.display());
    Ok(names)
}

/// Writes a rendered report to disk. A failure here leaves the in-memory
/// report untouched, so the caller can retry with another path.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .map_err(|e| SplitError::ExportWrite(path.display().to_string(), e))?;
    log::info!("Saved results to {}", path.display());
    Ok(())
}
