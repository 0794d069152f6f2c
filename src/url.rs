use crate::character_sets::is_c0_control_or_space;
use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::helpers::remove_ascii_tab_or_newline;
use crate::path::{Path, parse_prepared_path};
use crate::percent_encode::{
    FRAGMENT_SET, QUERY_SET, SPECIAL_QUERY_SET, percent_encode_userinfo, percent_encode_with_set,
};
use crate::scheme::SchemeType;

/// Already-parsed components handed over by a front-end URL parser.
/// Fragment, query, username and password are expected to be
/// percent-encoded; the scheme may be any case.
#[derive(Debug, Clone, Default)]
pub struct UrlParts {
    pub scheme: String,
    pub host: Option<String>,
    pub username: String,
    pub password: String,
    pub port: Option<u16>,
    pub path: Path,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// A parsed URL record.
///
/// Construction happens once, through [`Url::from_parts`]; after that the
/// setters mutate the record in place while re-validating and re-encoding
/// each component. Every fallible setter either commits fully or leaves
/// the record untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    scheme: String,
    scheme_type: SchemeType,
    host: Option<String>,
    username: String,
    password: String,
    port: Option<u16>,
    path: Path,
    query: Option<String>,
    fragment: Option<String>,
}

impl Url {
    /// Assemble a URL record from already-parsed components.
    /// The scheme type is computed once here and cached.
    pub fn from_parts(parts: UrlParts) -> Self {
        let scheme = parts.scheme.to_ascii_lowercase();
        let scheme_type = SchemeType::from_scheme(&scheme);
        Self {
            scheme,
            scheme_type,
            host: parts.host,
            username: parts.username,
            password: parts.password,
            port: parts.port,
            path: parts.path,
            query: parts.query,
            fragment: parts.fragment,
        }
    }

    // Getters

    /// Get the scheme (without the trailing ':')
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the cached scheme type
    pub fn scheme_type(&self) -> SchemeType {
        self.scheme_type
    }

    /// Get the host, if any
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Get the username (percent-encoded, empty if absent)
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the password (percent-encoded, empty if absent)
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Get the explicit port, if any.
    /// A port equal to the scheme default is stored as `None`.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Get the path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the serialized pathname
    pub fn pathname(&self) -> String {
        self.path.to_string()
    }

    /// Get the query (percent-encoded, without the leading '?')
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Get the fragment (percent-encoded, without the leading '#')
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    // Capability predicates

    /// Check if the scheme is special (http, https, ws, wss, ftp, file)
    pub fn is_special(&self) -> bool {
        self.scheme_type.is_special()
    }

    /// Check if the path is opaque
    pub fn has_opaque_path(&self) -> bool {
        self.path.is_opaque()
    }

    /// Check if this URL can carry credentials or an explicit port.
    /// Requires a non-empty host and a scheme other than file.
    pub fn cannot_have_credentials_or_port(&self) -> bool {
        self.host.as_ref().is_none_or(|host| host.is_empty())
            || self.scheme_type == SchemeType::File
    }

    // Setters

    /// Set the fragment. Never fails.
    ///
    /// An empty input clears the fragment; a single leading '#' is
    /// stripped, tabs and newlines removed, and the rest stored
    /// percent-encoded with the fragment encode set.
    pub fn set_hash(&mut self, input: &str) {
        if input.is_empty() {
            self.fragment = None;
            self.path.strip_trailing_spaces_if_opaque();
            return;
        }

        let new_value = input.strip_prefix('#').unwrap_or(input);
        let new_value = remove_ascii_tab_or_newline(new_value);
        self.fragment = Some(percent_encode_with_set(&new_value, FRAGMENT_SET));
    }

    /// Set the query. Never fails.
    ///
    /// Special schemes encode with the stricter special-query set.
    pub fn set_search(&mut self, input: &str) {
        if input.is_empty() {
            self.query = None;
            self.path.strip_trailing_spaces_if_opaque();
            return;
        }

        let new_value = input.strip_prefix('?').unwrap_or(input);
        let new_value = remove_ascii_tab_or_newline(new_value);

        let query_percent_encode_set = if self.is_special() {
            SPECIAL_QUERY_SET
        } else {
            QUERY_SET
        };

        self.query = Some(percent_encode_with_set(&new_value, query_percent_encode_set));
    }

    /// Set the username. Fails without mutation if this URL cannot carry
    /// credentials. Independent of the password.
    pub fn set_username(&mut self, input: &str) -> bool {
        if self.cannot_have_credentials_or_port() {
            return false;
        }
        self.username = percent_encode_userinfo(input);
        true
    }

    /// Set the password. Fails without mutation if this URL cannot carry
    /// credentials. Independent of the username.
    pub fn set_password(&mut self, input: &str) -> bool {
        if self.cannot_have_credentials_or_port() {
            return false;
        }
        self.password = percent_encode_userinfo(input);
        true
    }

    /// Set the pathname. Fails without mutation on an opaque path;
    /// otherwise the path is rebuilt from the input.
    pub fn set_pathname(&mut self, input: &str) -> bool {
        if self.path.is_opaque() {
            return false;
        }
        self.path = Path::empty();
        self.parse_path(input)
    }

    /// Set the port. Fails without mutation if this URL cannot carry a
    /// port or the input does not parse as a port number.
    pub fn set_port(&mut self, input: &str) -> bool {
        if self.cannot_have_credentials_or_port() {
            return false;
        }
        let trimmed = remove_ascii_tab_or_newline(input);
        if trimmed.is_empty() {
            self.port = None;
            return true;
        }
        // Both checks run against the original input: a leading tab still
        // rejects even though sanitization would have removed it.
        if input.bytes().next().is_some_and(is_c0_control_or_space) {
            return false;
        }
        // Input should contain at least one ascii digit.
        if !input.bytes().any(|b| b.is_ascii_digit()) {
            return false;
        }

        // Nothing is committed until the parse succeeds, so a rejected
        // value leaves the previous port in place.
        match parse_port(&trimmed) {
            Ok(port) => {
                self.port = if self.scheme_type.default_port() == Some(port) {
                    None
                } else {
                    Some(port)
                };
                true
            }
            Err(_) => false,
        }
    }

    /// Parse a path string into the structured path.
    ///
    /// Special schemes accept '\' as a leading separator and always end up
    /// with at least the root path. Generic schemes keep an empty path
    /// when a host is present.
    fn parse_path(&mut self, input: &str) -> bool {
        let internal_input = remove_ascii_tab_or_newline(input);
        let internal_input = internal_input.as_ref();
        let bytes = internal_input.as_bytes();

        if self.is_special() {
            if bytes.is_empty() {
                self.path = Path::root();
            } else if bytes[0] == b'/' || bytes[0] == b'\\' {
                return self.run_prepared_path(&internal_input[1..]);
            } else {
                return self.run_prepared_path(internal_input);
            }
        } else if !bytes.is_empty() {
            if let Some(rest) = internal_input.strip_prefix('/') {
                return self.run_prepared_path(rest);
            }
            return self.run_prepared_path(internal_input);
        } else if self.host.is_none() {
            self.path = Path::root();
        }
        true
    }

    fn run_prepared_path(&mut self, input: &str) -> bool {
        let scheme_type = self.scheme_type;
        match &mut self.path {
            Path::Segments(segments) => parse_prepared_path(input, scheme_type, segments),
            Path::Opaque(_) => false,
        }
    }
}

/// Parse the leading ASCII-digit run of an already-sanitized port string.
///
/// Trailing non-digit content is ignored, matching the lenient port state
/// of the WHATWG URL parser ("8a0" parses to port 8). The caller has
/// already guaranteed at least one digit somewhere in the raw input.
fn parse_port(input: &str) -> Result<u16> {
    let digits_end = input
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(input.len());
    let digits = &input[..digits_end];
    if digits.is_empty() {
        return Err(ParseError::InvalidPort);
    }
    digits.parse::<u16>().map_err(|_| ParseError::InvalidPort)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn http_url() -> Url {
        Url::from_parts(UrlParts {
            scheme: "http".to_string(),
            host: Some("example.com".to_string()),
            path: Path::root(),
            ..UrlParts::default()
        })
    }

    fn mailto_url() -> Url {
        Url::from_parts(UrlParts {
            scheme: "mailto".to_string(),
            path: Path::Opaque("user@example.com".to_string()),
            ..UrlParts::default()
        })
    }

    #[test]
    fn test_from_parts_caches_scheme_type() {
        let url = Url::from_parts(UrlParts {
            scheme: "HTTPS".to_string(),
            host: Some("example.com".to_string()),
            ..UrlParts::default()
        });
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.scheme_type(), SchemeType::Https);
        assert!(url.is_special());
    }

    #[test]
    fn test_cannot_have_credentials_or_port() {
        assert!(!http_url().cannot_have_credentials_or_port());
        assert!(mailto_url().cannot_have_credentials_or_port());

        let empty_host = Url::from_parts(UrlParts {
            scheme: "foo".to_string(),
            host: Some(String::new()),
            ..UrlParts::default()
        });
        assert!(empty_host.cannot_have_credentials_or_port());

        let file = Url::from_parts(UrlParts {
            scheme: "file".to_string(),
            host: Some("localhost".to_string()),
            path: Path::root(),
            ..UrlParts::default()
        });
        assert!(file.cannot_have_credentials_or_port());
    }

    #[test]
    fn test_parse_port_digit_prefix() {
        assert_eq!(parse_port("80").unwrap(), 80);
        assert_eq!(parse_port("8a0").unwrap(), 8);
        assert_eq!(parse_port("0000000080").unwrap(), 80);
        assert_eq!(parse_port("65535").unwrap(), 65535);
        assert_eq!(parse_port("65536"), Err(ParseError::InvalidPort));
        assert_eq!(parse_port("a80"), Err(ParseError::InvalidPort));
    }

    #[test]
    fn test_set_port_default_port_is_cleared() {
        let mut url = http_url();
        assert!(url.set_port("8080"));
        assert_eq!(url.port(), Some(8080));
        // The scheme default normalizes back to no explicit port
        assert!(url.set_port("80"));
        assert_eq!(url.port(), None);
    }

    #[test]
    fn test_set_port_unsanitized_checks() {
        let mut url = http_url();
        assert!(url.set_port("8080"));

        // Leading tab rejects even though sanitization would remove it
        assert!(!url.set_port("\t80"));
        assert_eq!(url.port(), Some(8080));

        // Tabs alone sanitize to empty and clear the port
        assert!(url.set_port("\t\n"));
        assert_eq!(url.port(), None);
    }

    #[test]
    fn test_set_hash_opaque_path_trailing_spaces() {
        let mut url = Url::from_parts(UrlParts {
            scheme: "mailto".to_string(),
            path: Path::Opaque("user@example.com  ".to_string()),
            fragment: Some("frag".to_string()),
            ..UrlParts::default()
        });
        url.set_hash("");
        assert_eq!(url.fragment(), None);
        assert_eq!(url.pathname(), "user@example.com");
    }

    #[test]
    fn test_set_search_encode_set_by_speciality() {
        let mut special = http_url();
        special.set_search("a'b");
        assert_eq!(special.query(), Some("a%27b"));

        let mut generic = Url::from_parts(UrlParts {
            scheme: "foo".to_string(),
            host: Some("host".to_string()),
            path: Path::root(),
            ..UrlParts::default()
        });
        generic.set_search("a'b");
        assert_eq!(generic.query(), Some("a'b"));
    }

    #[test]
    fn test_parse_path_empty_generic_with_host() {
        let mut url = Url::from_parts(UrlParts {
            scheme: "foo".to_string(),
            host: Some("host".to_string()),
            path: Path::root(),
            ..UrlParts::default()
        });
        // Empty path with a host is legal for generic schemes
        assert!(url.set_pathname(""));
        assert_eq!(url.pathname(), "");
    }

    #[test]
    fn test_parse_path_empty_generic_without_host() {
        let mut url = Url::from_parts(UrlParts {
            scheme: "foo".to_string(),
            path: Path::Segments(crate::compat::vec!["x".to_string()]),
            ..UrlParts::default()
        });
        assert!(url.set_pathname(""));
        assert_eq!(url.pathname(), "/");
    }
}
