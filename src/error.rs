//! Error types for the generation pipeline.
//!
//! Every variant is fatal: a run either produces a fully consistent set of
//! artifacts or none at all.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::MemberShape;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read resource file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse resource file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("<{element}> without a 'name' attribute in {}", path.display())]
    MissingName { path: PathBuf, element: String },

    #[error("member name '{member}' in {} is not a valid C identifier", path.display())]
    InvalidMemberName { path: PathBuf, member: String },

    #[error("member '{member}' is declared more than once in {}", path.display())]
    DuplicateMember { path: PathBuf, member: String },

    #[error("item #{index} of string-array '{member}' has no text in {}", path.display())]
    MissingArrayItemText {
        path: PathBuf,
        member: String,
        index: usize,
    },

    #[error(
        "schema conflict for member '{member}': declared as {existing}, but language '{language}' declares it as {incoming}"
    )]
    SchemaConflict {
        member: String,
        existing: MemberShape,
        incoming: MemberShape,
        language: String,
    },

    #[error("value of member '{member}' in language '{language}' does not match schema shape {expected}")]
    UnexpectedValueShape {
        member: String,
        language: String,
        expected: MemberShape,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
