//! Reader for the line-oriented operator format.
//!
//! Each line holds one term:
//!
//! ```text
//! <pauli-string> <coefficient> <parameter>
//! XIZ 2.0 0
//! ZZI -0.25 1
//! ```
//!
//! Fields are whitespace-separated; anything after the third field is
//! ignored. The line number is the term's position. A parameter of `0`
//! makes the term independent. The Pauli alphabet is not checked here;
//! decoding reports unsupported symbols.

use std::num::IntErrorKind;
use std::path::Path;

use crate::error::{IrError, IrResult};
use crate::operator::{OperatorRecord, OperatorSet};

/// Parse every line of `text` into an operator set.
///
/// The first failing line aborts the read.
pub fn parse_operators(text: &str) -> IrResult<OperatorSet> {
    let mut set = OperatorSet::new();
    for (offset, line) in text.lines().enumerate() {
        set.push(parse_record(line, offset + 1)?)?;
    }
    Ok(set)
}

/// Read and parse an operator file.
pub fn read_operators(path: impl AsRef<Path>) -> IrResult<OperatorSet> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| IrError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_operators(&text)
}

/// Parse a single line as the term at `position`.
pub fn parse_record(line: &str, position: usize) -> IrResult<OperatorRecord> {
    let wrong = |reason: String| IrError::WrongFormat { position, reason };
    let mut fields = line.split_whitespace();

    let symbols = fields
        .next()
        .ok_or_else(|| wrong("missing Pauli string".into()))?;
    let coefficient = fields
        .next()
        .ok_or_else(|| wrong("missing coefficient".into()))?;
    let coefficient: f64 = coefficient
        .parse()
        .map_err(|_| wrong(format!("invalid coefficient '{coefficient}'")))?;
    let parameter = fields
        .next()
        .ok_or_else(|| wrong("missing parameter".into()))?;
    let parameter = parse_parameter(parameter, position)?;

    OperatorRecord::new(position, symbols, coefficient, parameter)
}

fn parse_parameter(field: &str, position: usize) -> IrResult<u64> {
    let negative = || IrError::NegativeParameter {
        position,
        value: field.to_string(),
    };
    let out_of_bounds = || IrError::ParameterOutOfBounds {
        position,
        value: field.to_string(),
    };

    match field.parse::<i128>() {
        Ok(value) if value < 0 => Err(negative()),
        Ok(value) => u64::try_from(value).map_err(|_| out_of_bounds()),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(out_of_bounds()),
            IntErrorKind::NegOverflow => Err(negative()),
            _ => Err(IrError::WrongFormat {
                position,
                reason: format!("invalid parameter '{field}'"),
            }),
        },
    }
}
