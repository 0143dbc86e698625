//! C code emission for the shared header and the per-language tables.

mod table;
mod types;

pub use table::emit_table;
pub use types::emit_header;

use crate::config::Config;

/// Placeholder replaced by the language identifier in templates.
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Placeholder replaced by the header file name in the source prolog.
pub const HEADER_PLACEHOLDER: &str = "{header}";

/// Everything the emitters take from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub eol: String,
    pub header_file_name: String,
    pub header_prolog: String,
    pub source_prolog: String,
    pub struct_type_name: String,
    pub instance_name: String,
}

impl EmitOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            eol: config.eol.clone(),
            header_file_name: config.header_file_name.clone(),
            header_prolog: config.header_prolog.clone(),
            source_prolog: config.source_prolog.clone(),
            struct_type_name: config.struct_type_name.clone(),
            instance_name: config.instance_name.clone(),
        }
    }

    /// Name of the table instance generated for `language`.
    pub fn instance_name(&self, language: &str) -> String {
        render_template(&self.instance_name, language)
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub fn render_template(template: &str, language: &str) -> String {
    template.replace(LANG_PLACEHOLDER, language)
}

/// Accumulates generated lines, terminating each with the configured EOL.
struct CodeWriter<'a> {
    out: String,
    eol: &'a str,
}

impl<'a> CodeWriter<'a> {
    fn new(eol: &'a str) -> Self {
        Self {
            out: String::new(),
            eol,
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str(self.eol);
    }

    fn blank(&mut self) {
        self.out.push_str(self.eol);
    }

    /// Prologs are written by users with plain `\n`; re-terminate each line.
    fn prolog(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
