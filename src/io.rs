//! File access around the converter: reading source lines, deriving the
//! output location and writing the converted document.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::converter::{ConversionReport, ConversionResult, MowenConverter, ReportFormat};

/// Appended to the input's file stem to name the output file
pub const OUTPUT_SUFFIX: &str = "_mowen";

/// Extension of the output file
pub const OUTPUT_EXTENSION: &str = "md";

#[derive(Debug, Error)]
pub enum MowenError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("failed to serialize conversion report: {source}")]
    Report {
        #[from]
        source: serde_json::Error,
    },
}

/// Read a UTF-8 file as lines with their line endings stripped.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_lines(path: &Path) -> Result<Vec<String>, MowenError> {
    if !path.exists() {
        return Err(MowenError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| MowenError::Read {
        source,
        path: path.to_path_buf(),
    })?;

    Ok(split_lines(&text))
}

fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Write lines joined by `\n`, without a trailing newline.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), MowenError> {
    let content = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");

    fs::write(path, content).map_err(|source| MowenError::Write {
        source,
        path: path.to_path_buf(),
    })
}

/// Output path next to the input: `dir/name.md` becomes `dir/name_mowen.md`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(OUTPUT_SUFFIX);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    input.with_file_name(name)
}

/// Read `input`, convert it, and return the result without writing anything.
///
/// The output path only names the destination in the report; it defaults to
/// [`output_path_for`].
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
) -> Result<(PathBuf, ConversionResult), MowenError> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output_path_for(input));

    let lines = read_lines(input)?;
    log::debug!("read {} lines from {}", lines.len(), input.display());

    let result = MowenConverter::new().convert(
        &lines,
        &input.display().to_string(),
        &output.display().to_string(),
    );
    Ok((output, result))
}

/// Write a report as pretty JSON or as the text summary.
pub fn write_report(
    report: &ConversionReport,
    path: &Path,
    format: ReportFormat,
) -> Result<(), MowenError> {
    let content = match format {
        ReportFormat::Json => report.to_json()?,
        ReportFormat::Text => report.to_text(),
    };

    fs::write(path, content).map_err(|source| MowenError::Write {
        source,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            output_path_for(Path::new("docs/name.md")),
            PathBuf::from("docs/name_mowen.md")
        );
    }

    #[test]
    fn test_output_path_without_directory() {
        assert_eq!(
            output_path_for(Path::new("notes.markdown")),
            PathBuf::from("notes_mowen.md")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(
            output_path_for(Path::new("/tmp/README")),
            PathBuf::from("/tmp/README_mowen.md")
        );
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        assert_eq!(
            output_path_for(Path::new("a/v1.2.md")),
            PathBuf::from("a/v1.2_mowen.md")
        );
    }

    #[test]
    fn test_split_lines_on_every_line_ending() {
        assert_eq!(split_lines("a\rb\r\nc\nd\r"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_lines(Path::new("definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, MowenError::NotFound { .. }));
        assert_eq!(err.to_string(), "file not found: definitely/not/here.md");
    }
}
