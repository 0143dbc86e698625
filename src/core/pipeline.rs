//! Two-pass generation.
//!
//! Pass one parses every language and reconciles member shapes into one
//! schema. Pass two renders the header and every language table against the
//! finalized schema. Nothing is written until both passes succeed.

use colored::Colorize;

use crate::core::context::{GenerateContext, LanguageInput};
use crate::core::data::{LanguageTable, Value};
use crate::core::emit::{EmitOptions, emit_header, emit_table};
use crate::core::parsers::parse_resource_file;
use crate::core::schema::{Schema, SchemaRegistry};
use crate::core::writer::{Artifact, write_artifacts};
use crate::error::Result;

/// Output of pass one: the finalized schema and the buffered language tables.
#[derive(Debug)]
pub struct Reconciled {
    pub schema: Schema,
    pub tables: Vec<LanguageTable>,
}

impl Reconciled {
    pub fn languages(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.language.clone()).collect()
    }
}

/// Parse every input in order and reconcile their member shapes.
pub fn reconcile(inputs: &[LanguageInput], verbose: bool) -> Result<Reconciled> {
    let mut registry = SchemaRegistry::new();
    let mut tables = Vec::with_capacity(inputs.len());

    for input in inputs {
        if verbose {
            eprintln!(
                "{}",
                format!("parse {} {}", input.language, input.path.display()).cyan()
            );
        }

        let table = parse_resource_file(&input.path, &input.language)?;
        if verbose {
            print_entries(&table);
        }

        registry.record_table(&table)?;
        tables.push(table);
    }

    Ok(Reconciled {
        schema: registry.finalize(),
        tables,
    })
}

/// Render the header and one source file per language.
///
/// The header comes first, followed by the sources in language order.
pub fn render(
    reconciled: &Reconciled,
    options: &EmitOptions,
    ctx: &GenerateContext,
) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::with_capacity(reconciled.tables.len() + 1);

    artifacts.push(Artifact {
        path: ctx.header_path(),
        content: emit_header(&reconciled.schema, &reconciled.languages(), options),
    });

    for table in &reconciled.tables {
        artifacts.push(Artifact {
            path: ctx.source_path(&table.language),
            content: emit_table(table, &reconciled.schema, options)?,
        });
    }

    Ok(artifacts)
}

/// Result of a full generation run.
#[derive(Debug)]
pub struct Generation {
    pub reconciled: Reconciled,
    pub artifacts: Vec<Artifact>,
}

/// Run both passes and write every artifact.
pub fn generate(ctx: &GenerateContext) -> Result<Generation> {
    let reconciled = reconcile(&ctx.inputs, ctx.verbose)?;
    let artifacts = render(&reconciled, &ctx.emit_options(), ctx)?;
    write_artifacts(&artifacts)?;

    Ok(Generation {
        reconciled,
        artifacts,
    })
}

fn print_entries(table: &LanguageTable) {
    for (name, value) in &table.entries {
        let line = match value {
            Value::Scalar(literal) => format!(" .{} = {},", name, literal),
            Value::Array(items) => format!(" .{} = {{ {} }},", name, items.join(", ")),
        };
        eprintln!("{}", line.cyan());
    }
}
