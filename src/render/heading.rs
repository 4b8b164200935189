//! Heading-Level Rewriting
//!
//! Shifts every Markdown heading line in a README body so that its top-level
//! heading lands at the section's depth inside the aggregate document and
//! all subheadings shift proportionally.
//!
//! Heading recognition is lexical: a heading line starts with `#`. Inline
//! link syntax `[label](target)` is matched first and passed through
//! untouched, so a `#` inside a link target is never mistaken for a heading
//! marker.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an inline Markdown link (capture 1) or a heading line.
/// The link alternation wins, exempting `[x](y#z)` from the heading rule.
static LINK_OR_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(\[[^\[\]]*\]\([^()]*\))|^#.*").expect("link/heading pattern is valid")
});

/// Shift all heading lines in `input` so its shallowest heading sits at
/// level `depth`.
///
/// The prefix added to every heading line is `depth - m` hashes, where `m`
/// is the shallowest heading level already present. A well-formed README
/// (top-level `# ` heading, `m = 1`) therefore gains exactly `depth - 1`
/// hashes. Re-applying at the same depth is a no-op, and headings are never
/// un-prefixed: bodies already at or below the target depth pass through
/// unchanged.
pub fn shift_headings(input: &str, depth: usize) -> String {
    let Some(min_level) = min_heading_level(input) else {
        return input.to_string();
    };
    let extra = depth.saturating_sub(min_level);
    if extra == 0 {
        return input.to_string();
    }

    let prefix = "#".repeat(extra);
    LINK_OR_HEADING
        .replace_all(input, |caps: &regex::Captures<'_>| {
            match caps.get(1) {
                // Inline link: pass through verbatim
                Some(link) => link.as_str().to_string(),
                None => format!("{}{}", prefix, &caps[0]),
            }
        })
        .into_owned()
}

/// Shallowest heading level in `input`, or `None` if it has no headings
pub fn min_heading_level(input: &str) -> Option<usize> {
    input
        .lines()
        .filter(|line| line.starts_with('#'))
        .map(|line| line.chars().take_while(|&c| c == '#').count())
        .min()
}

// =============================================================================
// Tests
// =============================================================================
