use crate::report::{palette_color, Report};

/// Represents the supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Html,
    Csv,
}

impl ExportFormat {
    /// Returns the format name used on the command line (e.g., "text")
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
        }
    }

    /// Returns the file extension used for exports in this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
        }
    }

    /// Parse a format name (e.g., "text", "html") into an ExportFormat
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ExportFormat::Text),
            "html" => Some(ExportFormat::Html),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    /// Returns all supported export formats
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Text, ExportFormat::Html, ExportFormat::Csv]
    }

    /// Renders a report in this format
    pub fn render(&self, report: &Report) -> String {
        match self {
            ExportFormat::Text => format_plain_report(report),
            ExportFormat::Html => format_report_html(report),
            ExportFormat::Csv => format_summary_csv(report),
        }
    }
}

pub fn format_plain_report(report: &Report) -> String {
    let total_questions = report.total_questions;
    let num_participants = report.participant_count();

    let mut output = String::new();
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str("QUESTION DISTRIBUTION RESULTS\n");
    output.push_str(&format!("Total questions: {total_questions}\n"));
    output.push_str(&format!("Participants: {num_participants}\n"));
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    // One block per participant, questions re-sorted by their number
    for section in &report.sections {
        output.push_str(&"-".repeat(39));
        output.push('\n');
        output.push_str(&format!(
            "{} [{} {}]:\n",
            section.participant,
            section.count,
            if section.count == 1 {
                "question"
            } else {
                "questions"
            }
        ));
        output.push_str(&"-".repeat(39));
        output.push('\n');
        for question in &section.questions {
            output.push_str(question);
            output.push('\n');
        }
        output.push('\n');
    }

    // Outcome line, with the spread called out when the split is uneven
    let min_count = report.min_count();
    let max_count = report.max_count();
    if min_count == max_count {
        output.push_str(&format!(
            "Distributed {total_questions} questions among {num_participants} participants ({min_count} per participant)\n"
        ));
    } else {
        output.push_str(&format!(
            "Distributed {total_questions} questions among {num_participants} participants (from {min_count} to {max_count} per participant)\n"
        ));
        output.push_str(&format!(
            "Fewest questions: {}; most questions: {}\n",
            report.at_min().join(", "),
            report.at_max().join(", ")
        ));
    }
    output.push('\n');

    output.push_str(&format_summary_table(report));

    output
}

fn format_summary_table(report: &Report) -> String {
    let rows = report.summary_rows();
    let mut max_index_len = 1; // Minimum width for "#"
    let mut max_name_len = 4; // Minimum width for "Name"
    let mut max_count_len = 9; // Minimum width for "Questions"

    // Calculate maximum lengths for alignment
    for row in &rows {
        max_index_len = max_index_len.max(row.index.to_string().len());
        max_name_len = max_name_len.max(row.name.len());
        max_count_len = max_count_len.max(row.questions.to_string().len());
    }

    // Create header
    let header = format!(
        "{:>width_index$} | {:<width_name$} | {:>width_count$}\n",
        "#",
        "Name",
        "Questions",
        width_index = max_index_len,
        width_name = max_name_len,
        width_count = max_count_len,
    );

    // Create separator line
    let separator = format!(
        "{:->width_index$}-+-{:-<width_name$}-+-{:->width_count$}\n",
        "",
        "",
        "",
        width_index = max_index_len,
        width_name = max_name_len,
        width_count = max_count_len,
    );

    let mut output = String::new();
    output.push_str(&header);
    output.push_str(&separator);
    for row in &rows {
        output.push_str(&format!(
            "{:>width_index$} | {:<width_name$} | {:>width_count$}\n",
            row.index,
            row.name,
            row.questions,
            width_index = max_index_len,
            width_name = max_name_len,
            width_count = max_count_len,
        ));
    }
    output
}

pub fn format_report_html(report: &Report) -> String {
    let total_questions = report.total_questions;
    let num_participants = report.participant_count();

    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html>\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str("<title>Question Distribution Results</title>\n");
    output.push_str("</head>\n<body>\n");
    output.push_str("<h1 style=\"text-align:center\">QUESTION DISTRIBUTION RESULTS</h1>\n");
    output.push_str(&format!(
        "<p style=\"text-align:center\"><b>Total questions: {total_questions} | Participants: {num_participants}</b></p>\n"
    ));

    let min_count = report.min_count();
    let max_count = report.max_count();
    if min_count != max_count {
        output.push_str(&format!(
            "<p style=\"text-align:center\">Fewest questions: {}; most questions: {}</p>\n",
            escape_html(&report.at_min().join(", ")),
            escape_html(&report.at_max().join(", "))
        ));
    }

    // One coloured block per participant
    for (i, section) in report.sections.iter().enumerate() {
        let (r, g, b) = palette_color(i);
        output.push_str("<hr>\n");
        output.push_str(&format!(
            "<h2 style=\"color:#{r:02x}{g:02x}{b:02x}\">{} [{} {}]</h2>\n",
            escape_html(&section.participant),
            section.count,
            if section.count == 1 {
                "question"
            } else {
                "questions"
            }
        ));
        for question in &section.questions {
            output.push_str(&format!("<p>{}</p>\n", escape_html(question)));
        }
    }

    // Summary table, name cells in the same colour as the blocks above
    output.push_str("<hr>\n");
    output.push_str("<h2>Distribution summary</h2>\n");
    output.push_str("<table border=\"1\" cellspacing=\"0\" cellpadding=\"4\">\n");
    output.push_str("<tr><th>#</th><th>Name</th><th>Questions</th></tr>\n");
    for (i, row) in report.summary_rows().iter().enumerate() {
        let (r, g, b) = palette_color(i);
        output.push_str(&format!(
            "<tr><td>{}</td><td style=\"color:#{r:02x}{g:02x}{b:02x}\">{}</td><td>{}</td></tr>\n",
            row.index,
            escape_html(&row.name),
            row.questions
        ));
    }
    output.push_str("</table>\n");
    output.push_str("</body>\n</html>\n");

    output
}

pub fn format_summary_csv(report: &Report) -> String {
    use csv::WriterBuilder;

    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(vec![]);

    for row in report.summary_rows() {
        let _ = wtr.serialize(row);
    }

    let data = wtr.into_inner().unwrap();
    String::from_utf8(data).unwrap()
}

/// Short plain-text preview of loaded questions, at most `limit` entries
/// with long texts cut at 100 characters
pub fn format_question_preview(questions: &[String], limit: usize) -> String {
    let total = questions.len();
    let shown = limit.min(total);

    let mut output = String::new();
    output.push_str(&format!("Total questions: {total}\n\n"));
    output.push_str(&format!("First {shown} questions (numbering preserved):\n"));

    for question in questions.iter().take(limit) {
        if question.chars().count() > 100 {
            let truncated: String = question.chars().take(100).collect();
            output.push_str(&format!("{truncated}...\n"));
        } else {
            output.push_str(question);
            output.push('\n');
        }
    }

    if total > limit {
        output.push_str(&format!("\n... and {} more\n", total - limit));
    }

    output
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
