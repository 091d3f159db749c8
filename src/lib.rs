//! XML Doc Smells Library
//!
//! This library finds documentation smells in C# XML doc comments: missing,
//! empty, duplicate or unknown tags, tags that do not fit the documented
//! member, malformed markup and rethrows whose exception cannot be inferred.

pub mod config;
pub mod cs;
pub mod error;
pub mod logging;
pub mod smells;
#[cfg(test)]
pub mod test_utils;

pub use config::XmlDocOptions;
pub use error::{DocResult, DocSmellError};
pub use smells::{analyze_source, sort_findings, Finding, XmlDocSmell};
