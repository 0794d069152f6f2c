/// Errors that can occur while rewriting a URL component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid port number
    InvalidPort,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPort => "Invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for component mutation operations
pub type Result<T> = core::result::Result<T, ParseError>;
