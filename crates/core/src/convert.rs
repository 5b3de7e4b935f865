//! Number to FizzBuzz string transformations.

/// Convert a number to its FizzBuzz representation.
///
/// Returns "FizzBuzz" when the number is divisible by both 3 and 5, "Fizz"
/// when divisible by 3 only, "Buzz" when divisible by 5 only, and the decimal
/// string otherwise.
///
/// The function is total over `i32`: range policy lives in [`crate::validate`],
/// so 0 (divisible by both) and negative numbers follow the same divisibility
/// rules as everything else.
pub fn convert(number: i32) -> String {
    let divisible_by_3 = number % 3 == 0;
    let divisible_by_5 = number % 5 == 0;

    match (divisible_by_3, divisible_by_5) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => number.to_string(),
    }
}

/// Convert a batch of numbers, preserving input order.
pub fn convert_batch(numbers: &[i32]) -> Vec<String> {
    numbers.iter().copied().map(convert).collect()
}
