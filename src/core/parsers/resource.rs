//! Parser for Android-style `strings.xml` resource documents.
//!
//! ```xml
//! <resources>
//!     <string name="welcome">Welcome</string>
//!     <string name="empty"/>
//!     <string-array name="days">
//!         <item>Mon</item>
//!         <item>Tue</item>
//!     </string-array>
//! </resources>
//! ```

use std::{fs, path::Path};

use indexmap::map::Entry;
use roxmltree::{Document, Node, ParsingOptions};

use crate::config::is_c_identifier;
use crate::core::data::{LanguageTable, NULL_LITERAL, Value, quote};
use crate::error::{Error, Result};

const STRING_TAG: &str = "string";
const STRING_ARRAY_TAG: &str = "string-array";
const ITEM_TAG: &str = "item";
const NAME_ATTR: &str = "name";

pub fn parse_resource_file(path: &Path, language: &str) -> Result<LanguageTable> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_resource_str(&content, path, language)
}

/// Parse resource content. `path` is only used for error reporting.
pub fn parse_resource_str(content: &str, path: &Path, language: &str) -> Result<LanguageTable> {
    // Android resources may declare entities in an internal DTD subset.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut table = LanguageTable::new(language, path);

    for node in doc.descendants().filter(|n| n.is_element()) {
        let tag = node.tag_name().name();
        if tag != STRING_TAG && tag != STRING_ARRAY_TAG {
            continue;
        }
        let name = member_name(node, path)?;
        let value = if tag == STRING_TAG {
            Value::Scalar(scalar_literal(node))
        } else {
            Value::Array(array_literals(node, name, path)?)
        };

        match table.entries.entry(name.to_string()) {
            Entry::Occupied(_) => {
                return Err(Error::DuplicateMember {
                    path: path.to_path_buf(),
                    member: name.to_string(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }

    Ok(table)
}

fn member_name<'a>(node: Node<'a, '_>, path: &Path) -> Result<&'a str> {
    let name = node.attribute(NAME_ATTR).ok_or_else(|| Error::MissingName {
        path: path.to_path_buf(),
        element: node.tag_name().name().to_string(),
    })?;
    // Names become struct fields.
    if !is_c_identifier(name) {
        return Err(Error::InvalidMemberName {
            path: path.to_path_buf(),
            member: name.to_string(),
        });
    }
    Ok(name)
}

fn scalar_literal(node: Node) -> String {
    // Only a leading text node counts; anything else is a null value.
    match node.text() {
        Some(text) => quote(text),
        None => NULL_LITERAL.to_string(),
    }
}

fn array_literals(node: Node, name: &str, path: &Path) -> Result<Vec<String>> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name() == ITEM_TAG)
        .enumerate()
        .map(|(index, item)| {
            item.text().map(quote).ok_or_else(|| Error::MissingArrayItemText {
                path: path.to_path_buf(),
                member: name.to_string(),
                index,
            })
        })
        .collect()
}
