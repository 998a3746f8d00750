//! Markdown to Mo Wen converter
//!
//! Scans the input once, line by line. Code blocks are copied verbatim,
//! list items are buffered until their run ends and then re-leveled as a
//! unit, headings and paragraphs become blocks separated by two blank lines.

use super::line::{is_fence, LineKind, ListItem};
use super::list::format_list_block;
use super::report::{ConversionReport, ConversionWarning, WarningKind};
use std::time::Instant;

/// Heading prefix for levels 1 and 2
pub const MAJOR_HEADING_PREFIX: &str = "▎ ";

/// Heading prefix for level 3
pub const MINOR_HEADING_PREFIX: &str = "▏ ";

/// Blank lines appended after a heading, paragraph or closed code block
const BLOCK_GAP: usize = 2;

/// Result of a Mo Wen conversion
#[derive(Debug)]
pub struct ConversionResult {
    /// Converted lines, without trailing newlines
    pub lines: Vec<String>,
    /// Conversion report
    pub report: ConversionReport,
}

impl ConversionResult {
    /// Converted document with lines joined by `\n`
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Markdown to Mo Wen converter
#[derive(Debug, Default, Clone, Copy)]
pub struct MowenConverter;

impl MowenConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert markdown lines to Mo Wen style.
    ///
    /// `input_path` and `output_path` are only recorded in the report.
    pub fn convert<S: AsRef<str>>(
        &self,
        lines: &[S],
        input_path: &str,
        output_path: &str,
    ) -> ConversionResult {
        let start_time = Instant::now();

        let mut report = ConversionReport::new(input_path, output_path);
        report.statistics.total_lines = lines.len();

        let mut scanner = Scanner::new(&mut report);
        for (idx, line) in lines.iter().enumerate() {
            scanner.feed(idx + 1, line.as_ref());
        }
        let lines = scanner.finish();

        report.statistics.output_lines = lines.len();
        report.duration_ms = start_time.elapsed().as_millis() as u64;
        log::info!(
            "converted {} lines into {} lines ({} warning(s))",
            report.statistics.total_lines,
            report.statistics.output_lines,
            report.warnings.len()
        );

        ConversionResult { lines, report }
    }
}

/// Convert markdown lines to Mo Wen style, discarding the report.
pub fn convert<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    MowenConverter::new().convert(lines, "", "").lines
}

/// Single-pass scanning state
struct Scanner<'r> {
    output: Vec<String>,
    list_buffer: Vec<ListItem>,
    /// Line number of the open fence while inside a code block
    open_fence: Option<usize>,
    report: &'r mut ConversionReport,
}

impl<'r> Scanner<'r> {
    fn new(report: &'r mut ConversionReport) -> Self {
        Self {
            output: Vec::new(),
            list_buffer: Vec::new(),
            open_fence: None,
            report,
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) {
        if self.open_fence.is_some() {
            if is_fence(line) {
                self.toggle_fence(line_number, line);
            } else {
                self.output.push(line.to_string());
            }
            return;
        }

        match LineKind::classify(line) {
            LineKind::Fence => self.toggle_fence(line_number, line),
            LineKind::ListItem(item) => {
                self.report.statistics.list_items += 1;
                self.list_buffer.push(item);
            }
            LineKind::Blank => {
                self.report.statistics.blank_lines_dropped += 1;
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.report.statistics.headings += 1;
                self.push_block(format_heading(level, &text));
            }
            LineKind::Paragraph => {
                self.flush_list();
                self.report.statistics.paragraphs += 1;
                self.push_block(line.to_string());
            }
        }
    }

    fn toggle_fence(&mut self, line_number: usize, line: &str) {
        self.flush_list();
        self.output.push(line.to_string());
        match self.open_fence.take() {
            Some(_) => self.push_gap(),
            None => {
                self.report.statistics.code_blocks += 1;
                self.open_fence = Some(line_number);
            }
        }
    }

    fn flush_list(&mut self) {
        if self.list_buffer.is_empty() {
            return;
        }
        log::debug!("flushing list run of {} item(s)", self.list_buffer.len());
        self.report.statistics.list_blocks += 1;
        let formatted = format_list_block(&self.list_buffer);
        self.output.extend(formatted);
        self.list_buffer.clear();
    }

    fn push_block(&mut self, line: String) {
        self.output.push(line);
        self.push_gap();
    }

    fn push_gap(&mut self) {
        self.output.extend(std::iter::repeat_n(String::new(), BLOCK_GAP));
    }

    fn finish(mut self) -> Vec<String> {
        self.flush_list();
        if let Some(line) = self.open_fence {
            log::warn!("code fence opened at line {} is never closed", line);
            self.report.add_warning(ConversionWarning {
                line,
                kind: WarningKind::UnclosedCodeFence,
                message: "Code fence is never closed; remaining lines copied verbatim"
                    .to_string(),
            });
        }
        self.output
    }
}

/// Render a heading line: bold text behind a level-dependent prefix.
pub fn format_heading(level: usize, text: &str) -> String {
    let text = if text.starts_with("**") && text.ends_with("**") {
        text.to_string()
    } else {
        format!("**{}**", text)
    };

    let prefix = match level {
        1 | 2 => MAJOR_HEADING_PREFIX,
        3 => MINOR_HEADING_PREFIX,
        _ => "",
    };
    format!("{}{}", prefix, text)
}
