//! Question Splitter - distributes question lists among participants
//!
//! The core is a pure distribution engine (an even contiguous-block policy
//! and a random minimum-load policy) plus report building and rendering.
//! File loading, the roster and the CLI are thin collaborators around it.

pub mod distribution;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod numbering;
pub mod report;
pub mod session;
pub mod utils;

// Re-export commonly used items
pub use distribution::{distribute_even, distribute_random};
pub use error::{Result, SplitError};
pub use formatters::{
    format_plain_report, format_question_preview, format_report_html, ExportFormat,
};
pub use models::{Assignment, AssignmentEntry, Policy};
pub use numbering::extract_number;
pub use report::{palette_color, Report, ReportSection, SummaryRow};
pub use session::{Roster, Session};
