//! List run formatting
//!
//! A run of list items is re-leveled as a unit: nesting is derived from each
//! item's indentation relative to the shallowest item of the run, and every
//! item is rendered with a normalized marker and a 4-space indent unit.

use super::line::ListItem;

/// Output indentation unit, one per nesting level
pub const INDENT_UNIT: &str = "    ";

/// Marker for unordered items of a flat run, and for nested items
pub const BULLET: &str = "•";

/// Marker for top-level unordered items of a nested run
pub const TOP_BULLET: &str = "●";

/// Render a run of list items, each followed by one blank line.
pub fn format_list_block(items: &[ListItem]) -> Vec<String> {
    let Some(min_indent) = items.iter().map(|item| item.indent).min() else {
        return Vec::new();
    };
    let is_nested = items.iter().any(|item| item.indent > min_indent);

    let mut lines = Vec::with_capacity(items.len() * 2);
    for item in items {
        let relative_indent = item.indent - min_indent;
        lines.push(format_item(item, relative_indent, is_nested));
        lines.push(String::new());
    }
    lines
}

fn format_item(item: &ListItem, relative_indent: usize, is_nested: bool) -> String {
    if item.ordered {
        let indent = INDENT_UNIT.repeat(relative_indent / 2);
        return format!("{}{} {}", indent, item.marker, item.content);
    }

    if !is_nested {
        return format!("{} {}", BULLET, item.content);
    }

    if relative_indent == 0 {
        format!("{} {}", TOP_BULLET, item.content)
    } else {
        // 1 and 2 columns both land on the first nested level
        let indent = INDENT_UNIT.repeat((relative_indent / 2).max(1));
        format!("{}{} {}", indent, BULLET, item.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(lines: &[&str]) -> Vec<ListItem> {
        lines
            .iter()
            .map(|l| ListItem::parse(l).expect("list item"))
            .collect()
    }

    #[test]
    fn test_empty_run() {
        assert!(format_list_block(&[]).is_empty());
    }

    #[test]
    fn test_flat_unordered_run() {
        let out = format_list_block(&items(&["- a", "* b"]));
        assert_eq!(out, vec!["• a", "", "• b", ""]);
    }

    #[test]
    fn test_flat_run_drops_common_indent() {
        let out = format_list_block(&items(&["    - a", "    - b"]));
        assert_eq!(out, vec!["• a", "", "• b", ""]);
    }

    #[test]
    fn test_single_item_is_never_nested() {
        let out = format_list_block(&items(&["      - only"]));
        assert_eq!(out, vec!["• only", ""]);
    }

    #[test]
    fn test_two_level_unordered_run() {
        let out = format_list_block(&items(&["- a", "  - b", "- c"]));
        assert_eq!(out, vec!["● a", "", "    • b", "", "● c", ""]);
    }

    #[test]
    fn test_nested_floor_for_shallow_indent() {
        let one = format_list_block(&items(&["- a", " - b"]));
        let two = format_list_block(&items(&["- a", "  - b"]));
        assert_eq!(one[2], "    • b");
        assert_eq!(two[2], "    • b");
    }

    #[test]
    fn test_deeper_levels_scale_by_two_columns() {
        let out = format_list_block(&items(&["- a", "    - b", "      - c"]));
        assert_eq!(out[2], "        • b");
        assert_eq!(out[4], "            • c");
    }

    #[test]
    fn test_tab_indented_child() {
        let out = format_list_block(&items(&["- a", "\t- b"]));
        assert_eq!(out[2], "        • b");
    }

    #[test]
    fn test_ordered_run_keeps_markers() {
        let out = format_list_block(&items(&["1. one", "2. two", "10. ten"]));
        assert_eq!(out, vec!["1. one", "", "2. two", "", "10. ten", ""]);
    }

    #[test]
    fn test_ordered_nesting_has_no_floor() {
        let out = format_list_block(&items(&["1. one", " 2. two", "    3. three"]));
        assert_eq!(out[0], "1. one");
        assert_eq!(out[2], "2. two");
        assert_eq!(out[4], "        3. three");
    }

    #[test]
    fn test_mixed_run_uses_shared_minimum() {
        let out = format_list_block(&items(&["1. step", "   - detail", "2. next"]));
        assert_eq!(out, vec!["1. step", "", "    • detail", "", "2. next", ""]);
    }

    #[test]
    fn test_every_item_followed_by_one_blank() {
        let out = format_list_block(&items(&["- a", "  - b", "    - c", "1. d"]));
        assert_eq!(out.len(), 8);
        for pair in out.chunks(2) {
            assert!(!pair[0].is_empty());
            assert_eq!(pair[1], "");
        }
    }
}
