use crate::compat::{Cow, String, Vec, vec};
use crate::percent_encode::percent_encode_path_into;
use crate::scheme::SchemeType;

/// A URL path.
///
/// Opaque paths belong to non-special URLs without an authority
/// (e.g. `mailto:user@example.com`) and are never rewritten through the
/// structured pathname setter. Structured paths are an ordered segment
/// list; `Segments(vec![])` is the legal empty path of a generic scheme
/// with a host, and a single empty segment is the root path `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    Opaque(String),
    Segments(Vec<String>),
}

impl Path {
    /// The root path `/` (a single empty segment)
    pub fn root() -> Self {
        Self::Segments(vec![String::new()])
    }

    /// The empty structured path
    pub fn empty() -> Self {
        Self::Segments(Vec::new())
    }

    /// Check if this is an opaque path
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// Strip trailing U+0020 spaces, but only from an opaque path.
    /// Invoked when a fragment or query is removed, per the WHATWG URL spec.
    pub(crate) fn strip_trailing_spaces_if_opaque(&mut self) {
        if let Self::Opaque(s) = self {
            let end = s.trim_end_matches(' ').len();
            s.truncate(end);
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::empty()
    }
}

impl core::fmt::Display for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Opaque(s) => f.write_str(s),
            Self::Segments(segments) => {
                for segment in segments {
                    f.write_str("/")?;
                    f.write_str(segment)?;
                }
                Ok(())
            }
        }
    }
}

/// Check if a segment is a Windows drive letter (`C:` or `C|`)
fn is_windows_drive_letter(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

/// Check if a segment is a normalized Windows drive letter (`C:`)
fn is_normalized_windows_drive_letter(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Shorten a path: remove its last segment.
/// For file: URLs a lone normalized Windows drive letter is kept.
fn shorten_path(segments: &mut Vec<String>, scheme_type: SchemeType) {
    if scheme_type == SchemeType::File
        && segments.len() == 1
        && is_normalized_windows_drive_letter(&segments[0])
    {
        return;
    }
    segments.pop();
}

fn is_single_dot(segment: &str) -> bool {
    segment == "." || segment.eq_ignore_ascii_case("%2e")
}

fn is_double_dot(segment: &str) -> bool {
    segment == ".."
        || segment.eq_ignore_ascii_case(".%2e")
        || segment.eq_ignore_ascii_case("%2e.")
        || segment.eq_ignore_ascii_case("%2e%2e")
}

/// Parse an already-sanitized path string into `segments`.
///
/// The input has had its leading separator stripped by the caller.
/// Resolves `.`/`..` segments (including their percent-encoded spellings),
/// treats `\` as a separator for special schemes, preserves file: drive
/// letters, and percent-encodes each segment with the path encode set.
///
/// Appends to whatever is already in `segments`, so a caller resuming a
/// relative path keeps its base segments. Returns false on failure; the
/// current segment rules are total, so the result is reserved for
/// scheme-aware rules at this seam.
pub(crate) fn parse_prepared_path(
    input: &str,
    scheme_type: SchemeType,
    segments: &mut Vec<String>,
) -> bool {
    // Special schemes accept '\' as a path separator
    let input: Cow<'_, str> =
        if scheme_type.is_special() && memchr::memchr(b'\\', input.as_bytes()).is_some() {
            Cow::Owned(input.replace('\\', "/"))
        } else {
            Cow::Borrowed(input)
        };

    let mut input = input.as_ref();
    loop {
        let location = memchr::memchr(b'/', input.as_bytes());
        let segment = if let Some(loc) = location {
            let seg = &input[..loc];
            input = &input[loc + 1..];
            seg
        } else {
            input
        };

        if is_double_dot(segment) {
            shorten_path(segments, scheme_type);
            // A trailing ".." leaves a trailing slash
            if location.is_none() {
                segments.push(String::new());
            }
        } else if is_single_dot(segment) {
            // A trailing "." leaves a trailing slash
            if location.is_none() {
                segments.push(String::new());
            }
        } else if scheme_type == SchemeType::File
            && segments.is_empty()
            && is_windows_drive_letter(segment)
        {
            // Normalize "C|" to "C:"
            let mut normalized = String::with_capacity(2);
            normalized.push_str(&segment[..1]);
            normalized.push(':');
            segments.push(normalized);
        } else {
            let mut encoded = String::new();
            percent_encode_path_into(&mut encoded, segment);
            segments.push(encoded);
        }

        if location.is_none() {
            break;
        }
    }
    true
}
