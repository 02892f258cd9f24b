/// Represents the supported distribution policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Contiguous blocks in list order, remainder dealt round-robin
    Even,
    /// Uniform shuffle followed by greedy minimum-load placement
    Random,
}

impl Policy {
    /// Returns the policy name used on the command line (e.g., "even")
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Even => "even",
            Policy::Random => "random",
        }
    }

    /// Parse a policy name (e.g., "even", "random") into a Policy
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "even" => Some(Policy::Even),
            "random" => Some(Policy::Random),
            _ => None,
        }
    }

    /// Returns all supported policies
    pub fn all() -> &'static [Policy] {
        &[Policy::Even, Policy::Random]
    }
}

/// One participant's share of a distribution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentEntry {
    pub participant: String,
    pub questions: Vec<String>,
}

/// Result of a distribution run: one entry per participant, in roster
/// order, together covering every question exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    entries: Vec<AssignmentEntry>,
}

impl Assignment {
    pub(crate) fn from_entries(entries: Vec<AssignmentEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AssignmentEntry] {
        &self.entries
    }

    pub fn participant_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of questions across all entries
    pub fn total_questions(&self) -> usize {
        self.entries.iter().map(|entry| entry.questions.len()).sum()
    }

    /// Number of questions held by the named participant, if present
    pub fn count_for(&self, participant: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.participant == participant)
            .map(|entry| entry.questions.len())
    }

    /// Smallest per-participant question count (0 for an empty assignment)
    pub fn min_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.questions.len())
            .min()
            .unwrap_or(0)
    }

    /// Largest per-participant question count (0 for an empty assignment)
    pub fn max_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.questions.len())
            .max()
            .unwrap_or(0)
    }
}
