//! Unified diff: line-by-line comparison of two text revisions.
//!
//! Uses the `similar` crate (Myers diff algorithm) to produce canonical
//! unified-diff text with hunk headers and context lines.

use similar::TextDiff;

/// Number of unchanged lines kept around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Compute a unified diff between an old and a new revision of a text.
///
/// Hunks carry standard `@@ -old +new @@` headers and three lines of
/// context; the file labels are the fixed `before` / `after` pair.
/// Identical inputs produce an empty string.
///
/// ```
/// use verlog_diff::unified_diff;
///
/// assert_eq!(unified_diff("same\n", "same\n"), "");
/// let diff = unified_diff("old line\n", "new line\n");
/// assert!(diff.contains("-old line"));
/// assert!(diff.contains("+new line"));
/// ```
pub fn unified_diff(old: &str, new: &str) -> String {
    // Identical content.
    if old == new {
        return String::new();
    }

    let diff = TextDiff::from_lines(old, new);
    diff.unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header("before", "after")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_no_diff() {
        assert_eq!(unified_diff("hello\nworld\n", "hello\nworld\n"), "");
        assert_eq!(unified_diff("", ""), "");
    }

    #[test]
    fn headers_and_hunk_marker() {
        let diff = unified_diff("a\n", "b\n");
        assert!(diff.starts_with("--- before\n+++ after\n"));
        assert!(diff.contains("@@"));
    }

    #[test]
    fn single_line_change() {
        let diff = unified_diff("hello world\n", "hello universe\n");
        assert!(diff.contains("-hello world"));
        assert!(diff.contains("+hello universe"));
    }

    #[test]
    fn addition_only() {
        let diff = unified_diff("line1\nline2\n", "line1\nline2\nline3\n");
        assert!(diff.contains("+line3"));
        assert!(!diff.contains("-line1"));
    }

    #[test]
    fn removal_only() {
        let diff = unified_diff("line1\nline2\nline3\n", "line1\nline3\n");
        assert!(diff.contains("-line2"));
        assert!(!diff.contains("+line1"));
    }

    #[test]
    fn empty_to_content() {
        let diff = unified_diff("", "new content\n");
        assert!(diff.contains("+new content"));
    }

    #[test]
    fn content_to_empty() {
        let diff = unified_diff("old content\n", "");
        assert!(diff.contains("-old content"));
    }

    #[test]
    fn context_lines_around_change() {
        let old = "a\nb\nc\nd\ne\nf\ng\n";
        let new = "a\nb\nc\nX\ne\nf\ng\n";
        let diff = unified_diff(old, new);
        // Three context lines on each side of the change.
        assert!(diff.contains(" c\n"));
        assert!(diff.contains(" e\n"));
        assert!(diff.contains("-d\n"));
        assert!(diff.contains("+X\n"));
    }

    #[test]
    fn distant_changes_produce_separate_hunks() {
        let old: String = (1..=30).map(|n| format!("line{n}\n")).collect();
        let new = old.replace("line2\n", "LINE2\n").replace("line28\n", "LINE28\n");
        let diff = unified_diff(&old, &new);
        assert_eq!(diff.matches("@@").count(), 4, "two hunks, two markers each");
    }
}
