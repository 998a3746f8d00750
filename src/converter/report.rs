//! Conversion report types for Mo Wen conversion

use serde::{Deserialize, Serialize};

/// Output format of a written report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Human-readable text
    Text,
}

/// Type of warning during conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A code fence was opened but never closed
    UnclosedCodeFence,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningKind::UnclosedCodeFence => write!(f, "unclosed_code_fence"),
        }
    }
}

/// A warning generated during conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionWarning {
    /// Line number (1-indexed)
    pub line: usize,
    pub kind: WarningKind,
    /// Human-readable message
    pub message: String,
}

impl std::fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Statistics about the conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Lines in the input
    pub total_lines: usize,
    /// Lines in the output
    pub output_lines: usize,
    pub headings: usize,
    pub paragraphs: usize,
    /// Flushed list runs
    pub list_blocks: usize,
    pub list_items: usize,
    /// Code blocks opened, closed or not
    pub code_blocks: usize,
    /// Blank lines outside code blocks, which are not carried over
    pub blank_lines_dropped: usize,
}

/// Complete conversion report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Input file path
    pub input_file: String,
    /// Output file path
    pub output_file: String,
    /// Timestamp of conversion
    pub timestamp: String,
    /// Duration in milliseconds
    pub duration_ms: u64,
    pub statistics: ConversionStatistics,
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionReport {
    /// Create a new empty report
    pub fn new(input: &str, output: &str) -> Self {
        Self {
            input_file: input.to_string(),
            output_file: output.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            statistics: ConversionStatistics::default(),
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, warning: ConversionWarning) {
        self.warnings.push(warning);
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to human-readable text format
    pub fn to_text(&self) -> String {
        let stats = &self.statistics;
        let mut output = String::new();

        output.push_str("Mo Wen Conversion Report\n");
        output.push_str("========================\n");
        output.push_str(&format!("Input:  {}\n", self.input_file));
        output.push_str(&format!("Output: {}\n", self.output_file));
        output.push_str(&format!("Date:   {}\n", self.timestamp));
        output.push_str(&format!("Time:   {}ms\n\n", self.duration_ms));

        output.push_str("Statistics\n");
        output.push_str("----------\n");
        output.push_str(&format!("Input lines:     {}\n", stats.total_lines));
        output.push_str(&format!("Output lines:    {}\n", stats.output_lines));
        output.push_str(&format!("Headings:        {}\n", stats.headings));
        output.push_str(&format!("Paragraphs:      {}\n", stats.paragraphs));
        output.push_str(&format!(
            "Lists:           {} ({} items)\n",
            stats.list_blocks, stats.list_items
        ));
        output.push_str(&format!("Code blocks:     {}\n", stats.code_blocks));
        output.push_str(&format!(
            "Blank lines:     {} dropped\n\n",
            stats.blank_lines_dropped
        ));

        if !self.warnings.is_empty() {
            output.push_str("Warnings\n");
            output.push_str("--------\n");
            for warning in &self.warnings {
                output.push_str(&format!("⚠ {}\n", warning));
            }
            output.push('\n');
        }

        output.push_str("Result\n");
        output.push_str("------\n");
        if self.warnings.is_empty() {
            output.push_str("✓ Conversion completed successfully\n");
        } else {
            output.push_str("✓ Conversion completed with warnings\n");
        }
        output.push_str(&format!("✓ Output written to {}\n", self.output_file));

        output
    }
}
