//! Line classification for the Mo Wen scanner

use regex::Regex;
use std::sync::LazyLock;

/// Opening and closing marker of a code block
pub const FENCE: &str = "```";

/// Tabs in leading whitespace count as this many spaces
const TAB_WIDTH: usize = 4;

// Whitespace classes include U+001C..U+001F, same as `is_space`
static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\s\x1C-\x1F]*)([-*])[\s\x1C-\x1F]+(.*)").unwrap());

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\s\x1C-\x1F]*)(\d+\.)[\s\x1C-\x1F]+(.*)").unwrap());

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)[\s\x1C-\x1F]+(.*)").unwrap());

/// One list item line, captured before its run is formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// The source line as read
    pub line: String,
    /// Width of the leading whitespace, tabs expanded
    pub indent: usize,
    pub ordered: bool,
    /// Text after the marker and its following whitespace
    pub content: String,
    /// `-`, `*`, or the numeral with its dot (`12.`)
    pub marker: String,
}

impl ListItem {
    /// Parse a list item line, or `None` if the line is not one.
    pub fn parse(line: &str) -> Option<Self> {
        let (caps, ordered) = match UNORDERED_ITEM_RE.captures(line) {
            Some(caps) => (caps, false),
            None => (ORDERED_ITEM_RE.captures(line)?, true),
        };

        Some(Self {
            line: line.to_string(),
            indent: indent_width(&caps[1]),
            ordered,
            content: caps[3].to_string(),
            marker: caps[2].to_string(),
        })
    }
}

/// Classified source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Fence,
    ListItem(ListItem),
    Blank,
    Heading { level: usize, text: String },
    Paragraph,
}

impl LineKind {
    /// Classify a line outside a code block.
    ///
    /// Precedence is fence, list item, blank, heading, then paragraph, so a
    /// line like `- # x` is a list item and `   ` is blank.
    pub fn classify(line: &str) -> Self {
        if is_fence(line) {
            return LineKind::Fence;
        }
        if let Some(item) = ListItem::parse(line) {
            return LineKind::ListItem(item);
        }
        if trim_space(line).is_empty() {
            return LineKind::Blank;
        }
        if let Some(caps) = HEADING_RE.captures(line) {
            return LineKind::Heading {
                level: caps[1].len(),
                text: caps[2].to_string(),
            };
        }
        LineKind::Paragraph
    }
}

/// Whether the trimmed line opens or closes a code block
pub fn is_fence(line: &str) -> bool {
    trim_space(line).starts_with(FENCE)
}

/// Unicode whitespace plus the information separators U+001C..U+001F
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn trim_space(line: &str) -> &str {
    line.trim_matches(is_space)
}

fn indent_width(whitespace: &str) -> usize {
    whitespace
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}
