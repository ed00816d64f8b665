//! Statement files: one classified statement per line.
//!
//! ```text
//! * comment
//! If      IF lv_x = 1.
//! Write   WRITE 'one'.
//! EndIf   ENDIF.
//! ```
//!
//! The first word names the statement kind (case-insensitive), the rest of
//! the line is the statement text. Blank lines and lines starting with `*`
//! are skipped.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use structura_core::Statement;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("line {line}: unknown statement kind `{kind}`")]
    UnknownKind { line: usize, kind: String },
}

/// A loaded statement file together with its text, for diagnostics.
#[derive(Debug)]
pub struct StatementFile {
    pub name: String,
    pub source: String,
    pub statements: Vec<Statement>,
}

pub fn load_statements(path: &Path) -> Result<StatementFile, LoadError> {
    let (name, source) = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LoadError::Io {
                path: path.to_owned(),
                source,
            })?;
        ("<stdin>".to_owned(), buf)
    } else {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        (path.to_string_lossy().into_owned(), content)
    };

    let statements = parse_statements(&source)?;
    Ok(StatementFile {
        name,
        source,
        statements,
    })
}

/// Classify each line of `source`. Spans point at the statement text.
pub fn parse_statements(source: &str) -> Result<Vec<Statement>, LoadError> {
    let mut statements = Vec::new();
    let mut offset = 0;

    for (row, raw) in source.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw.len();

        let line = raw.trim_end_matches(['\n', '\r']);
        let content = line.trim_start();
        if content.is_empty() || content.starts_with('*') {
            continue;
        }

        let (word, rest) = content
            .split_once(char::is_whitespace)
            .unwrap_or((content, ""));
        let kind = structura_abap::from_name(word).ok_or_else(|| LoadError::UnknownKind {
            line: row + 1,
            kind: word.to_owned(),
        })?;

        let text = rest.trim();
        let (start, text) = if text.is_empty() {
            (line_start + line.len() - content.len(), word)
        } else {
            (line_start + line.len() - rest.trim_start().len(), text)
        };

        statements.push(Statement::new(kind, text).at(start..start + text.len(), row));
    }

    Ok(statements)
}
