use super::{CodeWriter, EmitOptions, HEADER_PLACEHOLDER, render_template};
use crate::core::data::{LanguageTable, MemberShape, NULL_LITERAL, Value};
use crate::core::schema::Schema;
use crate::error::{Error, Result};

/// Render one language's source file: the prolog followed by a designated
/// initializer that assigns every schema member in schema order.
///
/// Members the language does not declare are initialized to null: `0` for
/// scalars and `count` `0` entries for arrays.
pub fn emit_table(table: &LanguageTable, schema: &Schema, options: &EmitOptions) -> Result<String> {
    let language = &table.language;
    let mut w = CodeWriter::new(&options.eol);

    let prolog = render_template(&options.source_prolog, language)
        .replace(HEADER_PLACEHOLDER, &options.header_file_name);
    w.prolog(&prolog);

    w.line(&format!(
        "const {} {} =",
        options.struct_type_name,
        options.instance_name(language)
    ));
    w.line("{");

    for (name, shape) in schema.members() {
        match (shape, table.get(name)) {
            (MemberShape::Scalar, Some(Value::Scalar(literal))) => {
                w.line(&format!("    .{} = {},", name, literal));
            }
            (MemberShape::Scalar, None) => {
                w.line(&format!("    .{} = {},", name, NULL_LITERAL));
            }
            (MemberShape::Array(count), Some(Value::Array(items))) if items.len() == *count => {
                write_array(&mut w, name, items.iter().map(String::as_str));
            }
            (MemberShape::Array(count), None) => {
                write_array(&mut w, name, std::iter::repeat_n(NULL_LITERAL, *count));
            }
            (expected, Some(_)) => {
                return Err(Error::UnexpectedValueShape {
                    member: name.clone(),
                    language: language.clone(),
                    expected: *expected,
                });
            }
        }
    }

    w.line("};");
    Ok(w.finish())
}

fn write_array<'a>(w: &mut CodeWriter, name: &str, items: impl Iterator<Item = &'a str>) {
    w.line(&format!("    .{} = {{", name));
    for item in items {
        w.line(&format!("        {},", item));
    }
    w.line("    },");
}
