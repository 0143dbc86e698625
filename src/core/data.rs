use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Literal emitted for a `<string>` without text: a null pointer, as opposed
/// to `""` which is an empty string.
pub const NULL_LITERAL: &str = "0";

/// Wrap raw resource text in double quotes.
///
/// The text is not escaped: embedded `"` or `\` characters reach the
/// generated C source verbatim.
pub fn quote(text: &str) -> String {
    format!("\"{}\"", text)
}

/// Shape of a struct member, derived from the values observed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberShape {
    Scalar,
    Array(usize),
}

impl fmt::Display for MemberShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberShape::Scalar => write!(f, "scalar"),
            MemberShape::Array(1) => write!(f, "array of 1 item"),
            MemberShape::Array(count) => write!(f, "array of {} items", count),
        }
    }
}

/// A member value as realized by one language.
///
/// Every string is an emitted C literal: either quoted text or [`NULL_LITERAL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Array(Vec<String>),
}

impl Value {
    pub fn shape(&self) -> MemberShape {
        match self {
            Value::Scalar(_) => MemberShape::Scalar,
            Value::Array(items) => MemberShape::Array(items.len()),
        }
    }
}

/// All members declared by one language's resource file, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    pub language: String,
    pub file_path: PathBuf,
    pub entries: IndexMap<String, Value>,
}

impl LanguageTable {
    pub fn new(language: impl Into<String>, file_path: &Path) -> Self {
        Self {
            language: language.into(),
            file_path: file_path.to_path_buf(),
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn scalar_count(&self) -> usize {
        self.entries
            .values()
            .filter(|v| matches!(v, Value::Scalar(_)))
            .count()
    }

    pub fn array_count(&self) -> usize {
        self.entries.len() - self.scalar_count()
    }
}
