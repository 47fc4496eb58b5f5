//! Path filtering: extension allowlist and ignore patterns.

use glob::{MatchOptions, Pattern};

/// Glob matching where `*` and `?` stop at directory separators, so
/// `a*.txt` never reaches across path segments.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Returns `true` when `name` ends with one of the allowed extensions.
///
/// Comparison is case-insensitive, so `NOTES.TXT` is tracked by `.txt`.
pub fn has_tracked_extension(name: &str, extensions: &[String]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Returns `true` when the relative slash path matches an ignore pattern.
///
/// Three pattern forms are recognized:
///
/// - `dir/*` ignores every path containing `dir` as a whole segment;
/// - patterns containing `*` or `?` glob-match the base name or the full
///   relative path;
/// - anything else must equal the base name exactly.
pub fn should_ignore(rel_path: &str, patterns: &[String]) -> bool {
    let base = rel_path.rsplit('/').next().unwrap_or(rel_path);
    for pat in patterns {
        if let Some(dir) = pat.strip_suffix("/*") {
            if rel_path.split('/').any(|segment| segment == dir) {
                return true;
            }
            continue;
        }
        if pat.contains(['*', '?']) {
            if let Ok(pattern) = Pattern::new(pat) {
                if pattern.matches_with(base, GLOB_OPTIONS)
                    || pattern.matches_with(rel_path, GLOB_OPTIONS)
                {
                    return true;
                }
            }
            continue;
        }
        if base == pat {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(pats: &[&str]) -> Vec<String> {
        pats.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let exts = patterns(&[".txt", ".md"]);
        assert!(has_tracked_extension("notes.txt", &exts));
        assert!(has_tracked_extension("NOTES.TXT", &exts));
        assert!(has_tracked_extension("readme.MD", &exts));
        assert!(!has_tracked_extension("image.png", &exts));
        assert!(!has_tracked_extension("noext", &exts));
    }

    #[test]
    fn glob_pattern_matches_base_name() {
        let pats = patterns(&["*.tmp"]);
        assert!(should_ignore("scratch.tmp", &pats));
        assert!(should_ignore("deep/nested/scratch.tmp", &pats));
        assert!(!should_ignore("scratch.txt", &pats));
    }

    #[test]
    fn glob_pattern_matches_full_path() {
        let pats = patterns(&["docs/*.md"]);
        assert!(should_ignore("docs/guide.md", &pats));
        assert!(!should_ignore("notes/guide.md", &pats));
        // `*` must not cross a separator.
        assert!(!should_ignore("docs/sub/guide.md", &pats));
    }

    #[test]
    fn question_mark_glob() {
        let pats = patterns(&["v?.txt"]);
        assert!(should_ignore("v1.txt", &pats));
        assert!(should_ignore("sub/v2.txt", &pats));
        assert!(!should_ignore("v10.txt", &pats));
    }

    #[test]
    fn directory_pattern_matches_whole_segment() {
        let pats = patterns(&["node_modules/*"]);
        assert!(should_ignore("node_modules/lib.js", &pats));
        assert!(should_ignore("src/node_modules/lib.js", &pats));
        assert!(should_ignore("src/node_modules", &pats));
        assert!(!should_ignore("node_modules_backup/lib.js", &pats));
        assert!(!should_ignore("lib.js", &pats));
    }

    #[test]
    fn exact_name_matches_base_only() {
        let pats = patterns(&["secrets.txt"]);
        assert!(should_ignore("secrets.txt", &pats));
        assert!(should_ignore("config/secrets.txt", &pats));
        assert!(!should_ignore("secrets.txt.bak", &pats));
        assert!(!should_ignore("my-secrets.txt", &pats));
    }

    #[test]
    fn empty_pattern_list_ignores_nothing() {
        assert!(!should_ignore("anything.txt", &[]));
    }
}
