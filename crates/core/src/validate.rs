//! Input classification for FizzBuzz batches.
//!
//! Pure validation functions over user-supplied input. Every entry point
//! returns `Result<_, ValidationError>`, so exactly one outcome holds per
//! call: `Ok` is the success state and the error variants are the failure
//! classifications. The variants carry the offending value so callers can
//! report it, and each renders a fixed human-readable message used verbatim
//! by the console and the HTTP API.

use thiserror::Error;

/// Lowest accepted number, inclusive.
pub const MIN_VALUE: i32 = 1;

/// Highest accepted number, inclusive.
pub const MAX_VALUE: i32 = 100;

/// Exact number of values a batch must contain.
pub const BATCH_SIZE: usize = 5;

/// Classification of invalid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no input provided")]
    NoInput,

    #[error("'{token}' is not a whole number (enter only integers separated by commas)")]
    InvalidFormat { token: String },

    #[error("number {number} is out of range ({min}-{max})", min = MIN_VALUE, max = MAX_VALUE)]
    OutOfRange { number: i32 },

    #[error("expected exactly {expected} numbers, got {count}", expected = BATCH_SIZE)]
    WrongCount { count: usize },
}

/// Validate a raw comma-separated input string and produce the batch.
///
/// Checks run in a fixed order: presence, then count, then number format,
/// then range. The first violation wins. Tokens are trimmed before parsing,
/// so `" 3 , 15 "` style input is accepted.
pub fn parse_batch(input: &str) -> Result<Vec<i32>, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::NoInput);
    }

    let tokens: Vec<&str> = input.split(',').collect();
    if tokens.len() != BATCH_SIZE {
        return Err(ValidationError::WrongCount {
            count: tokens.len(),
        });
    }

    let mut numbers = Vec::with_capacity(BATCH_SIZE);
    for token in tokens {
        let trimmed = token.trim();
        let number = trimmed
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidFormat {
                token: trimmed.to_string(),
            })?;
        numbers.push(number);
    }

    check_range(&numbers)?;

    Ok(numbers)
}

/// Validate an already-parsed batch, the entry point the HTTP API uses.
///
/// Same semantics as [`parse_batch`] minus the string parsing: an empty
/// slice is no input, then count, then range.
pub fn validate_batch(numbers: &[i32]) -> Result<Vec<i32>, ValidationError> {
    if numbers.is_empty() {
        return Err(ValidationError::NoInput);
    }

    if numbers.len() != BATCH_SIZE {
        return Err(ValidationError::WrongCount {
            count: numbers.len(),
        });
    }

    check_range(numbers)?;

    Ok(numbers.to_vec())
}

/// Validate a single number against the accepted range.
///
/// No batch-size or format concerns apply here.
pub fn validate_single(number: i32) -> Result<i32, ValidationError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&number) {
        return Err(ValidationError::OutOfRange { number });
    }

    Ok(number)
}

fn check_range(numbers: &[i32]) -> Result<(), ValidationError> {
    for &number in numbers {
        if !(MIN_VALUE..=MAX_VALUE).contains(&number) {
            return Err(ValidationError::OutOfRange { number });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // parse_batch tests
    // ============================================================================

    #[test]
    fn test_parse_batch_valid_input() {
        assert_eq!(parse_batch("1,2,3,4,5"), Ok(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_parse_batch_preserves_input_order() {
        assert_eq!(parse_batch("5,4,3,2,1"), Ok(vec![5, 4, 3, 2, 1]));
    }

    #[test]
    fn test_parse_batch_trims_whitespace_around_tokens() {
        assert_eq!(parse_batch(" 3 , 15 ,7,  20,5 "), Ok(vec![3, 15, 7, 20, 5]));
    }

    #[test]
    fn test_parse_batch_boundary_values() {
        assert_eq!(parse_batch("1,100,50,99,2"), Ok(vec![1, 100, 50, 99, 2]));
    }

    #[test]
    fn test_parse_batch_empty_input() {
        assert_eq!(parse_batch(""), Err(ValidationError::NoInput));
    }

    #[test]
    fn test_parse_batch_whitespace_only_input() {
        assert_eq!(parse_batch("   "), Err(ValidationError::NoInput));
    }

    #[test]
    fn test_parse_batch_too_few_numbers() {
        assert_eq!(
            parse_batch("1,2,3,4"),
            Err(ValidationError::WrongCount { count: 4 })
        );
    }

    #[test]
    fn test_parse_batch_too_many_numbers() {
        assert_eq!(
            parse_batch("1,2,3,4,5,6"),
            Err(ValidationError::WrongCount { count: 6 })
        );
    }

    #[test]
    fn test_parse_batch_single_number() {
        assert_eq!(
            parse_batch("1"),
            Err(ValidationError::WrongCount { count: 1 })
        );
    }

    #[test]
    fn test_parse_batch_checks_count_before_format() {
        // Three garbage tokens still report the count problem first
        assert_eq!(
            parse_batch("a,b,c"),
            Err(ValidationError::WrongCount { count: 3 })
        );
    }

    #[test]
    fn test_parse_batch_checks_count_before_range() {
        // 150 is out of range but the count check runs first
        assert_eq!(
            parse_batch("1,2,3,150"),
            Err(ValidationError::WrongCount { count: 4 })
        );
    }

    #[test]
    fn test_parse_batch_word_token() {
        assert_eq!(
            parse_batch("abc,2,3,4,5"),
            Err(ValidationError::InvalidFormat {
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_parse_batch_decimal_token() {
        assert_eq!(
            parse_batch("1,2.5,3,4,5"),
            Err(ValidationError::InvalidFormat {
                token: "2.5".to_string()
            })
        );
    }

    #[test]
    fn test_parse_batch_trailing_comma_leaves_empty_token() {
        // "1,2,3,4," splits into five tokens, the last one empty
        assert_eq!(
            parse_batch("1,2,3,4,"),
            Err(ValidationError::InvalidFormat {
                token: String::new()
            })
        );
    }

    #[test]
    fn test_parse_batch_checks_format_before_range() {
        // Format problems win over range problems regardless of position
        assert_eq!(
            parse_batch("150,two,3,4,5"),
            Err(ValidationError::InvalidFormat {
                token: "two".to_string()
            })
        );
    }

    #[test]
    fn test_parse_batch_zero_is_out_of_range() {
        assert_eq!(
            parse_batch("0,2,3,4,5"),
            Err(ValidationError::OutOfRange { number: 0 })
        );
    }

    #[test]
    fn test_parse_batch_negative_is_out_of_range() {
        assert_eq!(
            parse_batch("-1,2,3,4,5"),
            Err(ValidationError::OutOfRange { number: -1 })
        );
    }

    #[test]
    fn test_parse_batch_above_upper_boundary() {
        assert_eq!(
            parse_batch("101,2,3,4,5"),
            Err(ValidationError::OutOfRange { number: 101 })
        );
    }

    #[test]
    fn test_parse_batch_last_number_out_of_range() {
        assert_eq!(
            parse_batch("1,2,3,4,150"),
            Err(ValidationError::OutOfRange { number: 150 })
        );
    }

    // ============================================================================
    // validate_batch tests
    // ============================================================================

    #[test]
    fn test_validate_batch_valid_numbers() {
        assert_eq!(validate_batch(&[1, 2, 3, 4, 5]), Ok(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_validate_batch_empty_slice() {
        assert_eq!(validate_batch(&[]), Err(ValidationError::NoInput));
    }

    #[test]
    fn test_validate_batch_too_few() {
        assert_eq!(
            validate_batch(&[1, 2, 3]),
            Err(ValidationError::WrongCount { count: 3 })
        );
    }

    #[test]
    fn test_validate_batch_too_many() {
        assert_eq!(
            validate_batch(&[1, 2, 3, 4, 5, 6]),
            Err(ValidationError::WrongCount { count: 6 })
        );
    }

    #[test]
    fn test_validate_batch_out_of_range() {
        assert_eq!(
            validate_batch(&[1, 2, 3, 4, 101]),
            Err(ValidationError::OutOfRange { number: 101 })
        );
    }

    #[test]
    fn test_validate_batch_checks_count_before_range() {
        assert_eq!(
            validate_batch(&[1, 2, 150]),
            Err(ValidationError::WrongCount { count: 3 })
        );
    }

    // ============================================================================
    // validate_single tests
    // ============================================================================

    #[test]
    fn test_validate_single_in_range() {
        assert_eq!(validate_single(1), Ok(1));
        assert_eq!(validate_single(50), Ok(50));
        assert_eq!(validate_single(100), Ok(100));
    }

    #[test]
    fn test_validate_single_below_range() {
        assert_eq!(
            validate_single(0),
            Err(ValidationError::OutOfRange { number: 0 })
        );
        assert_eq!(
            validate_single(-100),
            Err(ValidationError::OutOfRange { number: -100 })
        );
    }

    #[test]
    fn test_validate_single_above_range() {
        assert_eq!(
            validate_single(101),
            Err(ValidationError::OutOfRange { number: 101 })
        );
        assert_eq!(
            validate_single(1000),
            Err(ValidationError::OutOfRange { number: 1000 })
        );
    }

    // ============================================================================
    // error message tests
    // ============================================================================

    #[test]
    fn test_error_messages_are_fixed() {
        assert_eq!(ValidationError::NoInput.to_string(), "no input provided");
        assert_eq!(
            ValidationError::InvalidFormat {
                token: "abc".to_string()
            }
            .to_string(),
            "'abc' is not a whole number (enter only integers separated by commas)"
        );
        assert_eq!(
            ValidationError::OutOfRange { number: 150 }.to_string(),
            "number 150 is out of range (1-100)"
        );
        assert_eq!(
            ValidationError::WrongCount { count: 4 }.to_string(),
            "expected exactly 5 numbers, got 4"
        );
    }
}
