//! Generation core: resource parsing, schema reconciliation and C emission.
//!
//! ## Module Structure
//!
//! - `parsers`: `strings.xml` -> [`LanguageTable`]
//! - `schema`: cross-language member shapes ([`SchemaRegistry`] -> [`Schema`])
//! - `emit`: shared header and per-language table rendering
//! - `pipeline`: two-pass orchestration (reconcile, then render and write)
//! - `writer`: atomic artifact writes

pub mod context;
pub mod data;
pub mod emit;
pub mod parsers;
pub mod pipeline;
pub mod schema;
pub mod writer;

pub use context::{GenerateContext, LanguageInput, Overrides};
pub use data::{LanguageTable, MemberShape, NULL_LITERAL, Value};
pub use pipeline::{Generation, Reconciled, generate, reconcile, render};
pub use schema::{Schema, SchemaRegistry};
pub use writer::Artifact;
