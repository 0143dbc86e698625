use super::{CodeWriter, EmitOptions};
use crate::core::data::MemberShape;
use crate::core::schema::Schema;

/// Render the shared header: the record type with one field per schema
/// member, followed by one `extern` declaration per language.
pub fn emit_header(schema: &Schema, languages: &[String], options: &EmitOptions) -> String {
    let type_name = &options.struct_type_name;
    let mut w = CodeWriter::new(&options.eol);

    w.prolog(&options.header_prolog);
    w.line("// Definitions");
    w.line(&format!("typedef struct {}", type_name));
    w.line("{");
    for (name, shape) in schema.members() {
        match shape {
            MemberShape::Scalar => w.line(&format!("    const char* {};", name)),
            MemberShape::Array(count) => w.line(&format!("    const char* {}[{}];", name, count)),
        }
    }
    w.line(&format!("}} {};", type_name));

    w.blank();
    w.line("// Forward Declarations");
    for language in languages {
        w.line(&format!(
            "extern const {} {};",
            type_name,
            options.instance_name(language)
        ));
    }

    w.finish()
}
