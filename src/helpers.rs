use crate::character_sets::is_ascii_tab_or_newline;
use crate::compat::Cow;

/// Fast check if string contains tabs or newlines
/// Optimization: Uses SIMD-accelerated memchr
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Remove ASCII tab/newline/CR characters.
/// Returns a Cow to avoid allocation when the input is already clean,
/// which is the common case for setter inputs.
pub fn remove_ascii_tab_or_newline(input: &str) -> Cow<'_, str> {
    if !has_tabs_or_newline(input) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}
