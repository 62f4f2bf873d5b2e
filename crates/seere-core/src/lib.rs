//! # Seere Core
//!
//! Core error and metric types for the Seere tensor compression library.
//!
//! Seere is named after the 70th demon of the Ars Goetia, who crosses the
//! earth in the twinkling of an eye - just as compressed weights cross the
//! wire in a fraction of their raw size.
//!
//! ## Contents
//!
//! - [`Error`] / [`Result`] - the failure taxonomy shared by all Seere crates
//! - [`CompressionRatio`] - original-vs-compressed size metrics

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::CompressionRatio;
