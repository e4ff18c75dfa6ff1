//! Divisor finder.
//!
//! Lists every positive divisor of a number in ascending order, using trial
//! division up to the square root.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DivisorError {
    /// Not a positive integer: blank, fractional, zero, negative or too large.
    #[error("Invalid numeric input: {0:?}")]
    InvalidNumericInput(String),
}

/// Sorted divisors of `n`. Empty for `n <= 0`.
#[must_use]
pub fn divisors(n: i64) -> Vec<u64> {
    if n <= 0 {
        return Vec::new();
    }
    divisors_of(n.unsigned_abs())
}

fn divisors_of(n: u64) -> Vec<u64> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = 1u64;
    // i <= n / i keeps i * i <= n without overflowing
    while i <= n / i {
        if n % i == 0 {
            low.push(i);
            if i != n / i {
                high.push(n / i);
            }
        }
        i += 1;
    }
    high.reverse();
    low.extend(high);
    low
}

/// Parses user input as a positive integer.
pub fn parse_positive(input: &str) -> Result<u64, DivisorError> {
    match input.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DivisorError::InvalidNumericInput(input.to_string())),
    }
}

/// A number and its divisors, ready to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisorReport {
    pub number: u64,
    pub divisors: Vec<u64>,
}

impl DivisorReport {
    pub fn new(number: u64) -> Self {
        Self {
            number,
            divisors: divisors_of(number),
        }
    }

    /// Parses `input` and builds the report for it.
    pub fn from_input(input: &str) -> Result<Self, DivisorError> {
        parse_positive(input).map(Self::new)
    }

    pub fn count(&self) -> usize {
        self.divisors.len()
    }
}

impl fmt::Display for DivisorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self
            .divisors
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "✨ 입력된 숫자: {}", self.number)?;
        writeln!(f, "{}의 약수 개수: {}개", self.number, self.count())?;
        writeln!(f, "📝 약수 목록")?;
        write!(f, "{list}")
    }
}
