//! Markdown to Mo Wen converter module
//!
//! This module reformats markdown lines into Mo Wen style:
//! - Headings become bold text behind a `▎`/`▏` prefix
//! - List runs are re-leveled and drawn with `●`/`•` bullets
//! - Code blocks are copied verbatim
//! - Every block is separated by blank lines

mod line;
mod list;
mod report;
mod scanner;

pub use line::{is_fence, LineKind, ListItem, FENCE};
pub use list::{format_list_block, BULLET, INDENT_UNIT, TOP_BULLET};
pub use report::{
    ConversionReport, ConversionStatistics, ConversionWarning, ReportFormat, WarningKind,
};
pub use scanner::{
    convert, format_heading, ConversionResult, MowenConverter, MAJOR_HEADING_PREFIX,
    MINOR_HEADING_PREFIX,
};
