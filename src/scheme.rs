/// URL scheme types
///
/// Special schemes get dedicated variants; everything else is `NotSpecial`.
/// Special-ness drives the default path, query encode-set choice and
/// backslash tolerance in paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    #[default]
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    NotSpecial,
}

impl SchemeType {
    /// Get the scheme type for a scheme string (without the trailing ':').
    /// The caller is expected to pass an already-lowercased scheme.
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme {
            "http" => Self::Http,
            "https" => Self::Https,
            "ws" => Self::Ws,
            "wss" => Self::Wss,
            "ftp" => Self::Ftp,
            "file" => Self::File,
            _ => Self::NotSpecial,
        }
    }

    /// Check if this is a special scheme
    pub fn is_special(self) -> bool {
        self != Self::NotSpecial
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::NotSpecial => None,
        }
    }
}
