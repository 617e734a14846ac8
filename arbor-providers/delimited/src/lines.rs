//! Shared line scanner for the delimited formats.

use std::io::BufRead;

use crate::DelimitedError;

/// How fields are separated within a line.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Separator {
    /// Commas only; empty fields are errors.
    Comma,
    /// Commas when the line has any, otherwise runs of whitespace.
    CommaOrWhitespace,
}

/// Reads every data line of `reader` into a rectangular table of numbers.
///
/// Input without data lines yields an empty table.
pub(crate) fn read_table(
    reader: impl BufRead,
    separator: Separator,
) -> Result<Vec<Vec<f64>>, DelimitedError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(DelimitedError::Read)?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let line_number = index + 1;
        let row = parse_row(text, line_number, separator)?;
        if let Some(first) = rows.first()
            && first.len() != row.len()
        {
            return Err(DelimitedError::RaggedRow {
                line: line_number,
                expected: first.len(),
                actual: row.len(),
            });
        }
        rows.push(row);
    }

    Ok(rows)
}

fn parse_row(text: &str, line: usize, separator: Separator) -> Result<Vec<f64>, DelimitedError> {
    let use_commas = match separator {
        Separator::Comma => true,
        Separator::CommaOrWhitespace => text.contains(','),
    };
    if use_commas {
        text.split(',')
            .enumerate()
            .map(|(index, field)| parse_field(field.trim(), line, index + 1))
            .collect()
    } else {
        text.split_whitespace()
            .enumerate()
            .map(|(index, field)| parse_field(field, line, index + 1))
            .collect()
    }
}

fn parse_field(field: &str, line: usize, column: usize) -> Result<f64, DelimitedError> {
    field
        .parse::<f64>()
        .map_err(|_| DelimitedError::InvalidValue {
            line,
            column,
            value: field.to_owned(),
        })
}
