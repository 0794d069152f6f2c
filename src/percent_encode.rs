use crate::compat::{String, ToString};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Define encode sets following WHATWG URL spec
// Based on https://url.spec.whatwg.org/#percent-encoded-bytes

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Path percent-encode set
/// Fragment + #, ?, ^, {, }
pub const PATH_SET: &AsciiSet = &FRAGMENT_SET
    .add(b'#')
    .add(b'?')
    .add(b'^')
    .add(b'{')
    .add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], ^, |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'|');

/// Query percent-encode set (for non-special URLs)
/// C0 control + space, ", #, <, >
/// Note: Does NOT encode single quote ' (different from `SPECIAL_QUERY_SET`)
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special query percent-encode set (for special URLs like http, https, etc.)
/// `QUERY_SET` + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Percent-encode a string using the provided encode set
pub fn percent_encode_with_set(input: &str, encode_set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, encode_set).to_string()
}

/// Percent-encode for userinfo
pub fn percent_encode_userinfo(input: &str) -> String {
    percent_encode_with_set(input, USERINFO_SET)
}

/// Percent-encode a path segment directly into a buffer
/// Manually iterates to avoid write! macro overhead
pub fn percent_encode_path_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, PATH_SET) {
        buffer.push_str(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_set() {
        assert_eq!(percent_encode_with_set("a b", FRAGMENT_SET), "a%20b");
        assert_eq!(percent_encode_with_set("<x>", FRAGMENT_SET), "%3Cx%3E");
        // '#' passes through in fragments
        assert_eq!(percent_encode_with_set("a#b", FRAGMENT_SET), "a#b");
    }

    #[test]
    fn test_userinfo_set() {
        assert_eq!(percent_encode_userinfo("a:b"), "a%3Ab");
        assert_eq!(percent_encode_userinfo("a@b"), "a%40b");
        assert_eq!(percent_encode_userinfo("a/b"), "a%2Fb");
    }

    #[test]
    fn test_query_sets() {
        // Single quote encoded only in the special set
        assert_eq!(percent_encode_with_set("a'b", SPECIAL_QUERY_SET), "a%27b");
        assert_eq!(percent_encode_with_set("a'b", QUERY_SET), "a'b");
        assert_eq!(percent_encode_with_set("a#b", QUERY_SET), "a%23b");
    }

    #[test]
    fn test_percent_encode_path_into() {
        let mut buffer = String::new();
        percent_encode_path_into(&mut buffer, "a b?c");
        assert_eq!(buffer, "a%20b%3Fc");
    }
}
