//! JSON5 parsing for meta-sprite collections
//!
//! Accepts either a single JSON5 array of collections or one collection per
//! line (JSONL). JSON5 allows comments, trailing commas, and unquoted keys.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::composition::Warning;
use crate::models::SpriteCollection;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// Error reading a collections file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read collections: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse collections: {0}")]
    Parse(#[from] ParseError),
}

/// Result of parsing a collections document.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub collections: Vec<SpriteCollection>,
    pub warnings: Vec<Warning>,
}

/// Parse a single JSON5 collection.
///
/// Collections that carry a sprite size but no bounds get bounds computed
/// from their placements. Unsized collections are measured later, once they
/// adopt the sprite chip's size.
pub fn parse_line(line: &str, line_number: usize) -> Result<SpriteCollection, ParseError> {
    let collection: SpriteCollection = json5::from_str(line)
        .map_err(|e| ParseError { message: e.to_string(), line: line_number })?;
    Ok(with_bounds(collection))
}

/// Parse a collections document.
///
/// A document starting with `[` is parsed as one array and any error is
/// fatal. Otherwise each non-blank line that is not a `//` comment is one
/// collection; malformed lines become warnings and parsing continues.
pub fn parse_collections(contents: &str) -> Result<ParseResult, ParseError> {
    if contents.trim_start().starts_with('[') {
        let collections: Vec<SpriteCollection> = json5::from_str(contents)
            .map_err(|e| ParseError { message: e.to_string(), line: 1 })?;
        return Ok(ParseResult {
            collections: collections.into_iter().map(with_bounds).collect(),
            warnings: Vec::new(),
        });
    }

    let mut result = ParseResult::default();
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        match parse_line(trimmed, index + 1) {
            Ok(collection) => result.collections.push(collection),
            Err(e) => result.warnings.push(Warning::new(e.to_string())),
        }
    }
    Ok(result)
}

/// Read and parse a collections file.
pub fn load_collections(path: &Path) -> Result<ParseResult, LoadError> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_collections(&contents)?)
}

fn with_bounds(mut collection: SpriteCollection) -> SpriteCollection {
    if collection.bounds.is_empty() && !collection.is_empty() {
        collection.recalculate_bounds();
    }
    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bounds;

    #[test]
    fn test_parse_line_computes_missing_bounds() {
        let collection = parse_line(
            r#"{name: "pair", sprites: [{id: 1}, {id: 2, x: 8}], sprite_width: 8, sprite_height: 8}"#,
            1,
        )
        .unwrap();
        assert_eq!(collection.name, "pair");
        assert_eq!(collection.bounds, Bounds::new(16, 8));
    }

    #[test]
    fn test_parse_line_defers_bounds_without_sprite_size() {
        let mut collection =
            parse_line(r#"{name: "pair", sprites: [{id: 1}, {id: 2, x: 16}]}"#, 1).unwrap();
        assert_eq!(collection.sprite_size(), None);
        assert!(collection.bounds.is_empty());

        collection.adopt_sprite_size(16, 16);
        assert_eq!(collection.bounds, Bounds::new(32, 16));
    }

    #[test]
    fn test_parse_line_keeps_explicit_bounds() {
        let collection = parse_line(
            r#"{"name": "wide", "sprites": [{"id": 1}], "bounds": {"width": 32, "height": 8}}"#,
            1,
        )
        .unwrap();
        assert_eq!(collection.bounds, Bounds::new(32, 8));
    }

    #[test]
    fn test_parse_line_error_has_line_number() {
        let err = parse_line("{name: ", 7).unwrap_err();
        assert_eq!(err.line, 7);
        assert!(err.to_string().starts_with("line 7:"));
    }

    #[test]
    fn test_parse_collections_jsonl_with_warnings() {
        let input = "// ships\n{name: \"a\", sprites: [{id: 1}]}\n\nnot json\n{name: \"b\"}\n";
        let result = parse_collections(input).unwrap();

        let names: Vec<&str> = result.collections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.starts_with("line 4:"));
    }

    #[test]
    fn test_parse_collections_array() {
        let input = r#"[
            {name: "a", sprites: [{id: 0}, {id: 1, x: 8}], sprite_width: 8, sprite_height: 8},
            {name: "b", sprites: [],}, // trailing comma
        ]"#;
        let result = parse_collections(input).unwrap();
        assert_eq!(result.collections.len(), 2);
        assert_eq!(result.collections[0].bounds, Bounds::new(16, 8));
        assert!(result.collections[1].bounds.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_collections_bad_array_is_fatal() {
        assert!(parse_collections("[{name: }]").is_err());
    }
}
