use serde::Serialize;

use crate::models::Assignment;
use crate::numbering::extract_number;

/// Colour palette for rich exports, as RGB triples. Participants beyond
/// the palette wrap around to the start.
pub const PALETTE: [(u8, u8, u8); 12] = [
    (0, 112, 192),   // blue
    (237, 125, 49),  // orange
    (112, 173, 71),  // green
    (255, 192, 0),   // gold
    (155, 0, 211),   // violet
    (255, 0, 0),     // red
    (0, 176, 240),   // light blue
    (146, 208, 80),  // light green
    (192, 0, 0),     // dark red
    (0, 176, 80),    // emerald
    (112, 48, 160),  // purple
    (255, 140, 0),   // dark orange
];

/// Returns the colour for the participant at the given roster position
pub fn palette_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}

/// One participant's block of a report: the name, the question count and
/// the questions re-sorted by their leading number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub participant: String,
    pub count: usize,
    pub questions: Vec<String>,
}

/// One row of the compact summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub index: usize,
    pub name: String,
    pub questions: usize,
}

/// Format-agnostic view of an assignment, ready for rendering. Building a
/// report never touches the assignment, so the same assignment always
/// produces the same report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_questions: usize,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Builds the report for an assignment. Sections keep the participant
    /// order of the assignment; within a section the questions are sorted
    /// by their extracted number, with ties keeping their assigned order.
    pub fn from_assignment(assignment: &Assignment) -> Self {
        let sections = assignment
            .entries()
            .iter()
            .map(|entry| {
                let mut questions = entry.questions.clone();
                questions.sort_by_key(|question| extract_number(question));
                ReportSection {
                    participant: entry.participant.clone(),
                    count: questions.len(),
                    questions,
                }
            })
            .collect();

        Report {
            total_questions: assignment.total_questions(),
            sections,
        }
    }

    pub fn participant_count(&self) -> usize {
        self.sections.len()
    }

    /// Smallest per-participant question count (0 for an empty report)
    pub fn min_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.count)
            .min()
            .unwrap_or(0)
    }

    /// Largest per-participant question count (0 for an empty report)
    pub fn max_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.count)
            .max()
            .unwrap_or(0)
    }

    /// Participants holding the fewest questions, in section order
    pub fn at_min(&self) -> Vec<&str> {
        let min = self.min_count();
        self.sections
            .iter()
            .filter(|section| section.count == min)
            .map(|section| section.participant.as_str())
            .collect()
    }

    /// Participants holding the most questions, in section order
    pub fn at_max(&self) -> Vec<&str> {
        let max = self.max_count();
        self.sections
            .iter()
            .filter(|section| section.count == max)
            .map(|section| section.participant.as_str())
            .collect()
    }

    /// Rows of the summary table: 1-based index, name and question count
    /// per participant, in section order
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, section)| SummaryRow {
                index: i + 1,
                name: section.participant.clone(),
                questions: section.count,
            })
            .collect()
    }
}
