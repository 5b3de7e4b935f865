//! Validation + conversion pipelines.
//!
//! Each entry point validates its input first and only then converts, so the
//! converter is never invoked on invalid input and failures carry no partial
//! results.

use serde::{Deserialize, Serialize};

use crate::convert::convert;
use crate::validate::{parse_batch, validate_batch, validate_single, ValidationError};

/// A converted number: the input paired with its FizzBuzz result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub number: i32,
    pub result: String,
}

/// Validate a raw comma-separated input string and convert every number.
///
/// The output order matches the input order.
pub fn process_input(input: &str) -> Result<Vec<Conversion>, ValidationError> {
    let numbers = parse_batch(input)?;
    Ok(convert_all(&numbers))
}

/// Validate an already-parsed batch and convert every number.
pub fn process_batch(numbers: &[i32]) -> Result<Vec<Conversion>, ValidationError> {
    let numbers = validate_batch(numbers)?;
    Ok(convert_all(&numbers))
}

/// Validate and convert a single number.
pub fn process_single(number: i32) -> Result<Conversion, ValidationError> {
    let number = validate_single(number)?;
    Ok(Conversion {
        number,
        result: convert(number),
    })
}

fn convert_all(numbers: &[i32]) -> Vec<Conversion> {
    numbers
        .iter()
        .map(|&number| Conversion {
            number,
            result: convert(number),
        })
        .collect()
}
