//! Host-side state for one distribution round: the loaded questions, the
//! editable participant roster and the latest assignment.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::distribution::{distribute_even, distribute_random};
use crate::error::Result;
use crate::io;
use crate::models::{Assignment, Policy};
use crate::report::Report;

/// Editable, order-significant participant list. Keeping the names unique
/// is the roster's job; the distribution engine never checks.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    initial: Vec<String>,
    names: Vec<String>,
}

impl Roster {
    /// Builds a roster from a list of names. Blank names are dropped and
    /// the first occurrence of a repeated name wins, with a warning.
    pub fn new(names: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim().to_string();
            if name.is_empty() {
                continue;
            }
            if unique.contains(&name) {
                log::warn!("Skipping duplicate participant name: {name}");
                continue;
            }
            unique.push(name);
        }
        Self {
            initial: unique.clone(),
            names: unique,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Appends a name to the roster. Blank and already-present names are
    /// rejected. Returns whether the roster changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.names.iter().any(|n| n == name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Renames a participant in place, keeping its position. Rejects blank
    /// names, names already on the roster and unknown old names.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        let new = new.trim();
        if new.is_empty() || self.names.iter().any(|n| n == new) {
            return false;
        }
        match self.names.iter().position(|n| n == old) {
            Some(index) => {
                self.names[index] = new.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes a participant. Returns whether the roster changed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    /// Restores the names the roster was built with, discarding every
    /// add, rename and remove since.
    pub fn reset(&mut self) {
        self.names = self.initial.clone();
    }
}

/// One load-distribute-export round. The stored assignment is only ever
/// replaced by a successful distribution run, so a failed run keeps the
/// previous result intact.
#[derive(Debug, Default)]
pub struct Session {
    source_path: Option<PathBuf>,
    questions: Vec<String>,
    roster: Roster,
    assignment: Option<Assignment>,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        Self {
            source_path: None,
            questions: Vec::new(),
            roster,
            assignment: None,
        }
    }

    /// Loads questions from a file, replacing any previously loaded list
    /// and remembering the source path for export naming.
    pub fn load_questions(&mut self, path: &Path) -> Result<usize> {
        let questions = io::read_questions(path)?;
        self.source_path = Some(path.to_path_buf());
        self.questions = questions;
        Ok(self.questions.len())
    }

    /// Supplies questions directly, for callers that load their own
    pub fn set_questions(&mut self, questions: Vec<String>) {
        self.source_path = None;
        self.questions = questions;
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Runs the given policy over the current questions and roster. On
    /// success the new assignment replaces the stored one.
    pub fn distribute<R: Rng>(&mut self, policy: Policy, rng: &mut R) -> Result<()> {
        let assignment = match policy {
            Policy::Even => distribute_even(&self.questions, self.roster.names())?,
            Policy::Random => distribute_random(&self.questions, self.roster.names(), rng)?,
        };
        log::info!(
            "Distributed {} questions among {} participants ({})",
            assignment.total_questions(),
            assignment.participant_count(),
            policy.as_str()
        );
        self.assignment = Some(assignment);
        Ok(())
    }

    /// Builds a report from the latest assignment, if one exists
    pub fn report(&self) -> Option<Report> {
        self.assignment.as_ref().map(Report::from_assignment)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
