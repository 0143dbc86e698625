//! strtab - static C string tables from Android `strings.xml` translations
//!
//! strtab is a CLI tool and library that reads one `strings.xml` per language,
//! reconciles the members declared across all languages into a single record
//! layout, and emits a shared C header plus one populated table per language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and validation
//! - `core`: Parsing, schema reconciliation and code emission
//! - `error`: Fatal error kinds of a generation run

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use error::{Error, Result};
