// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Readers for primitive catalogs, operation lists and saved expressions

use crate::ast::OperationTable;
use crate::error::{self, CsgError};
use crate::geometry::{Primitive, PrimitiveCatalog, PrimitiveKind};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse fitted-primitive rows: `<type> <param_1> ... <param_n>`.
/// Blank lines are ignored.
pub fn parse_fit(source: &str) -> error::Result<PrimitiveCatalog> {
    let mut catalog = PrimitiveCatalog::default();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            continue;
        };

        let kind: PrimitiveKind = name.parse().map_err(|_| CsgError::UnknownPrimitive {
            line: line_no,
            name: name.to_string(),
        })?;

        let params = fields
            .map(|value| {
                value.parse::<f64>().map_err(|_| CsgError::InvalidParameter {
                    line: line_no,
                    primitive: kind.tag().to_string(),
                    value: value.to_string(),
                })
            })
            .collect::<error::Result<Vec<f64>>>()?;

        let primitive = Primitive::from_parameters(kind, &params).ok_or_else(|| {
            CsgError::ParameterCount {
                line: line_no,
                primitive: kind.tag().to_string(),
                expected: kind.parameter_count(),
                found: params.len(),
            }
        })?;
        catalog.push(primitive);
    }

    Ok(catalog)
}

/// Import a `.fit` file
pub fn read_fit(path: impl AsRef<Path>) -> Result<PrimitiveCatalog> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read primitive file: {}", path.display()))?;

    parse_fit(&source).with_context(|| format!("Failed to parse primitive file: {}", path.display()))
}

/// Parse an operation list, one name per line.
///
/// Returns the table and the skipped unknown entries.
pub fn parse_operations(source: &str) -> (OperationTable, Vec<CsgError>) {
    OperationTable::from_names(
        source
            .lines()
            .enumerate()
            .filter_map(|(index, line)| line.split_whitespace().next().map(|name| (index + 1, name))),
    )
}

/// Import an operation list file
pub fn read_operations(path: impl AsRef<Path>) -> Result<(OperationTable, Vec<CsgError>)> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read operation file: {}", path.display()))?;
    Ok(parse_operations(&source))
}

/// First line of the file, trimmed
pub fn read_expression(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read expression file: {}", path.display()))?;
    Ok(first_line(&source).to_string())
}

/// Comma-separated primitive names on the first line of the file
pub fn read_primitive_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read primitive names: {}", path.display()))?;
    Ok(parse_primitive_names(&source))
}

pub fn parse_primitive_names(source: &str) -> Vec<String> {
    first_line(source)
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn first_line(source: &str) -> &str {
    source.lines().next().unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operation;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_fit() {
        let source = "sphere 0 0 0 1.5\n\nPLANE 0 0 1 -2\ncylinder 0 0 1 1 1 0 0.25\n";
        let catalog = parse_fit(source).unwrap();
        assert_eq!(catalog.len(), 3);

        let kinds: Vec<&str> = catalog.iter().map(Primitive::type_tag).collect();
        assert_eq!(kinds, vec!["sphere", "plane", "cylinder"]);

        match catalog.iter().next() {
            Some(Primitive::Sphere { radius, .. }) => assert_relative_eq!(*radius, 1.5),
            other => panic!("expected sphere, got {:?}", other),
        };
    }

    #[test]
    fn test_unknown_primitive_is_fatal() {
        let err = parse_fit("sphere 0 0 0 1\npyramid 1 2 3\n").unwrap_err();
        assert!(matches!(err, CsgError::UnknownPrimitive { line: 2, ref name } if name == "pyramid"));
    }

    #[test]
    fn test_bad_parameters() {
        assert!(matches!(
            parse_fit("sphere 0 0 zero 1").unwrap_err(),
            CsgError::InvalidParameter { line: 1, .. }
        ));
        assert!(matches!(
            parse_fit("torus 0 0 1 0 0 0 1").unwrap_err(),
            CsgError::ParameterCount { expected: 8, found: 7, .. }
        ));
    }

    #[test]
    fn test_parse_operations() {
        let (table, skipped) = parse_operations("union\nfoobar\n\nnegation extra\nunion\n");
        assert_eq!(table.len(), 2);
        assert!(table.contains(Operation::Union));
        assert!(table.contains(Operation::Negation));
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn test_read_primitive_names() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "sphere0,sphere1,plane2")?;

        let names = read_primitive_names(file.path())?;
        assert_eq!(names, vec!["sphere0", "sphere1", "plane2"]);
        Ok(())
    }

    #[test]
    fn test_read_expression_takes_first_line() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "  union[sphere0,plane1]  ")?;
        writeln!(file, "negation[sphere0]")?;

        assert_eq!(read_expression(file.path())?, "union[sphere0,plane1]");
        Ok(())
    }

    #[test]
    fn test_read_fit_error_mentions_path() {
        let err = read_fit("/nonexistent/shapes.fit").unwrap_err();
        assert!(err.to_string().contains("shapes.fit"));
    }
}
