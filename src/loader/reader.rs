//! Readers for the name list and edge-pair files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::types::{NetworkError, NetworkResult};

/// Read a newline-delimited name list from a file.
pub fn read_names(path: &Path) -> NetworkResult<Vec<String>> {
    let text = fs::read_to_string(path)?;
    parse_names(&text)
}

/// Parse a name list: one name per line, trimmed, blanks and repeats dropped.
pub fn parse_names(text: &str) -> NetworkResult<Vec<String>> {
    let mut seen = HashSet::new();
    let names: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(NetworkError::EmptyNameList);
    }
    Ok(names)
}

/// Read whitespace-delimited raw id pairs from a file.
pub fn read_edge_pairs(path: &Path) -> NetworkResult<Vec<(u64, u64)>> {
    let text = fs::read_to_string(path)?;
    parse_edge_pairs(&text)
}

/// Parse edge pairs, one `a b` pair per line. Blank lines and lines starting
/// with `#` or `%` are skipped.
pub fn parse_edge_pairs(text: &str) -> NetworkResult<Vec<(u64, u64)>> {
    let mut pairs = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(NetworkError::Parse {
                line: idx + 1,
                message: format!("expected two ids, got {:?}", line),
            });
        };
        pairs.push((parse_id(a, idx + 1)?, parse_id(b, idx + 1)?));
    }
    Ok(pairs)
}

fn parse_id(field: &str, line: usize) -> NetworkResult<u64> {
    field.parse().map_err(|_| NetworkError::Parse {
        line,
        message: format!("invalid id {:?}", field),
    })
}
