#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod percent_encode;

mod path;
mod scheme;
mod url;

// Public API
pub use error::ParseError;
pub use path::Path;
pub use scheme::SchemeType;
pub use url::{Url, UrlParts};

pub type Result<T> = core::result::Result<T, ParseError>;
