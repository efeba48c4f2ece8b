//! # Ville Development Tools
//!
//! Command-line tools for development:
//! - Catalog data validators
//! - Catalog exporters

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod export;
pub mod validate;
