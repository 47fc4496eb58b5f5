//! Changelog rendering: turns a unified diff into a compact markdown summary.
//!
//! The summary lists every added line under `### Added` and every removed
//! line under `### Removed`, each prefixed with its 1-based line number in
//! the revision it belongs to (`L12: text`). A removal immediately followed
//! by an addition with the same trimmed content is treated as whitespace
//! churn and suppressed from both sections.

/// Body emitted when a change was detected but no diff text was available.
pub const NO_READABLE_DIFF: &str = "File changed (no readable diff)\n";

/// Heading for lines present only in the new revision.
const ADDED_HEADING: &str = "### Added";
/// Heading for lines present only in the old revision.
const REMOVED_HEADING: &str = "### Removed";

/// Render a unified diff as a changelog summary.
///
/// Line numbers are tracked from the hunk headers: removed lines are
/// numbered in the old revision, added lines in the new one. An empty
/// diff renders as the [`NO_READABLE_DIFF`] notice; a diff containing
/// only whitespace churn renders as the empty string.
pub fn render_summary(diff_text: &str) -> String {
    if diff_text.is_empty() {
        return NO_READABLE_DIFF.to_string();
    }

    let lines: Vec<&str> = diff_text.split('\n').collect();
    let mut added: Vec<String> = Vec::new();
    let mut removed: Vec<String> = Vec::new();
    let mut old_line = 0usize;
    let mut new_line = 0usize;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if line.starts_with("@@") {
            if let Some((old_start, new_start)) = parse_hunk_header(line) {
                old_line = old_start;
                new_line = new_start;
            }
            i += 1;
            continue;
        }

        if is_removal(line) {
            // A removal answered by an addition with identical trimmed
            // content is whitespace churn; drop the pair.
            if let Some(j) = next_content_line(&lines, i + 1) {
                if is_addition(lines[j]) && body(line).trim() == body(lines[j]).trim() {
                    old_line += 1;
                    new_line += 1;
                    i = j + 1;
                    continue;
                }
            }
            removed.push(format!("L{}: {}", old_line, body(line).trim()));
            old_line += 1;
        } else if is_addition(line) {
            added.push(format!("L{}: {}", new_line, body(line).trim()));
            new_line += 1;
        } else if !line.starts_with('\\') {
            // Context line. `\ No newline at end of file` markers advance
            // neither revision.
            old_line += 1;
            new_line += 1;
        }
        i += 1;
    }

    let mut out = String::new();
    if !added.is_empty() {
        out.push_str(ADDED_HEADING);
        out.push('\n');
        for entry in &added {
            out.push_str(entry);
            out.push('\n');
        }
        out.push('\n');
    }
    if !removed.is_empty() {
        out.push_str(REMOVED_HEADING);
        out.push('\n');
        for entry in &removed {
            out.push_str(entry);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// A removed-line record (`-...`), as opposed to the `---` file header.
fn is_removal(line: &str) -> bool {
    line.starts_with('-') && !line.starts_with("---")
}

/// An added-line record (`+...`), as opposed to the `+++` file header.
fn is_addition(line: &str) -> bool {
    line.starts_with('+') && !line.starts_with("+++")
}

/// The line content with its one-character diff marker stripped.
fn body(line: &str) -> &str {
    &line[1..]
}

/// Parse `@@ -old[,count] +new[,count] @@` into the two start line numbers.
fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    parts.next()?; // "@@"
    let old = parts.next()?.trim_start_matches('-');
    let new = parts.next()?.trim_start_matches('+');
    let old_start = old.split(',').next()?.parse().ok()?;
    let new_start = new.split(',').next()?.parse().ok()?;
    Some((old_start, new_start))
}

/// Index of the next line that is diff content, skipping `\`-prefixed
/// no-newline markers.
fn next_content_line(lines: &[&str], mut idx: usize) -> Option<usize> {
    while idx < lines.len() {
        if !lines[idx].starts_with('\\') {
            return Some(idx);
        }
        idx += 1;
    }
    None
}
