//! Numbered-list marker pass.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{PhraseTable, SymbolKey};

/// A run of 1-3 digits at a true line start, terminated by `.` or `)`.
/// Mid-line numbers never match, so decimals and cross-references survive.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\n)(\d{1,3})([.)])(\s*)").expect("valid list pattern"));

/// Convert leading list markers into speakable form.
///
/// The two separators are not equivalent: `"3. Buy milk"` reads as an
/// enumerated item and becomes `"Point 3. Buy milk"`, while `"3) Buy milk"`
/// is an inline sub-reference and is only normalized to `"3. Buy milk"`
/// with no added words.
pub(super) fn rewrite_list_markers(text: &str, table: &PhraseTable) -> String {
    let point = table.phrase(SymbolKey::Point);
    LIST_MARKER
        .replace_all(text, |caps: &Captures<'_>| {
            let leading = &caps[1];
            let number = &caps[2];
            let trailing = &caps[4];
            if &caps[3] == "." {
                format!("{leading}{point}{number}.{trailing}")
            } else {
                format!("{leading}{number}.{trailing}")
            }
        })
        .into_owned()
}
