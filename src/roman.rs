//! Roman numeral parsing and rendering
//!
//! Numerals are accepted case-insensitively and rendered in uppercase.
//! Only values within `[1..3999]` are representable.

use crate::error::{CodecError, Result};
use crate::escape::quote;
use std::fmt;
use std::str::FromStr;

/// Smallest value that has a roman representation
pub const MIN_NUMBER: u16 = 1;
/// Largest value that has a roman representation
pub const MAX_NUMBER: u16 = 3999;

const MAX_REPEATS: usize = 3;
const PLACES: [u16; 4] = [1000, 100, 10, 1];
// Ordered by value; the letters for a decimal place start at index 2 * place
const LETTERS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// Numeric value of a roman digit, ignoring case
fn digit_value(c: char) -> Option<u16> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// A validated digit of the input together with its character position
#[derive(Debug, Clone, Copy)]
struct Digit {
    ch: char,
    value: u16,
    pos: usize,
}

impl Digit {
    /// V, L and D can never stand on the left side of a subtraction
    fn can_subtract(&self) -> bool {
        !matches!(self.ch.to_ascii_uppercase(), 'V' | 'L' | 'D')
    }
}

fn parse_error(input: &str, reason: impl fmt::Display) -> CodecError {
    CodecError::syntax(format!("Cannot parse string {}: {}", quote(input), reason))
}

/// Checks every character and the repetition limit, producing the digit stream.
fn scan(input: &str) -> Result<Vec<Digit>> {
    let mut digits: Vec<Digit> = Vec::with_capacity(input.len());
    let mut run = 0;

    for (pos, ch) in input.chars().enumerate() {
        let value = digit_value(ch).ok_or_else(|| {
            parse_error(
                input,
                format!(
                    "the character {} at {} is not valid roman digit",
                    quote(&ch.to_string()),
                    pos
                ),
            )
        })?;

        run = match digits.last() {
            Some(prev) if prev.value == value => run + 1,
            _ => 1,
        };
        if run > MAX_REPEATS {
            return Err(parse_error(
                input,
                format!(
                    "the character {} at {} occurs more than {} times in a row",
                    quote(&ch.to_string()),
                    pos,
                    MAX_REPEATS
                ),
            ));
        }

        digits.push(Digit { ch, value, pos });
    }

    Ok(digits)
}

/// Parses a roman numeral into its numeric value.
///
/// Digits are grouped into tokens with one character of lookahead: a digit
/// followed by a bigger one forms a subtractive pair (`IV`, `XC`), any other
/// digit stands alone. Token values must not grow from left to right, and the
/// input must be the canonical spelling of its value (`IXI` and `VIV` are
/// rejected in favour of `X` and `IX`).
///
/// # Errors
/// Returns [`CodecError::Syntax`] naming the input and the offending
/// character or token position.
///
/// # Example
/// ```
/// assert_eq!(roman_semver::roman::parse("MMMCMXCIX").unwrap(), 3999);
/// assert_eq!(roman_semver::roman::parse("xix").unwrap(), 19);
/// assert!(roman_semver::roman::parse("IC").is_err());
/// ```
pub fn parse(input: &str) -> Result<u16> {
    if input.is_empty() {
        return Err(parse_error(input, "the string is empty"));
    }

    let digits = scan(input)?;
    let mut total: u32 = 0;
    let mut last: Option<u16> = None;
    let mut i = 0;

    while i < digits.len() {
        let current = digits[i];
        let (value, token, len) = match digits.get(i + 1) {
            Some(next) if current.value < next.value => {
                let token: String = [current.ch, next.ch].iter().collect();
                if !current.can_subtract() || next.value > current.value * 10 {
                    return Err(parse_error(
                        input,
                        format!(
                            "the combination {} at {} is not a valid subtraction",
                            quote(&token),
                            current.pos
                        ),
                    ));
                }
                (next.value - current.value, token, 2)
            }
            _ => (current.value, current.ch.to_string(), 1),
        };

        if let Some(prev) = last {
            if value > prev {
                return Err(parse_error(
                    input,
                    format!(
                        "the combination {} at {} is greater than the previous one",
                        quote(&token),
                        current.pos
                    ),
                ));
            }
        }

        total += u32::from(value);
        if total > u32::from(MAX_NUMBER) {
            return Err(parse_error(
                input,
                format!("the value exceeds {}", MAX_NUMBER),
            ));
        }

        last = Some(value);
        i += len;
    }

    // Bounded above by MAX_NUMBER, non-empty input gives at least 1
    let total = total as u16;
    let canonical = render(total);
    if !canonical.eq_ignore_ascii_case(input) {
        // Index of the first character that differs, or the shorter length
        let pos = input
            .chars()
            .zip(canonical.chars())
            .position(|(a, b)| !a.eq_ignore_ascii_case(&b))
            .unwrap_or_else(|| input.chars().count().min(canonical.len()));
        return Err(parse_error(
            input,
            format!(
                "the numeral is not in canonical form at {}, expected {}",
                pos,
                quote(&canonical)
            ),
        ));
    }

    Ok(total)
}

/// Renders a value known to be within range.
fn render(num: u16) -> String {
    let mut result = String::new();
    let mut rest = num;

    for (k, place) in PLACES.iter().enumerate() {
        let count = rest / place;
        rest %= place;

        let base = 2 * (PLACES.len() - 1 - k);
        let one = LETTERS[base];
        // Thousands never reach 4, so their five and ten are never read
        let five = LETTERS[(base + 1).min(LETTERS.len() - 1)];
        let ten = LETTERS[(base + 2).min(LETTERS.len() - 1)];

        match count {
            0 => {}
            1..=3 => result.extend(std::iter::repeat(one).take(count as usize)),
            4 => {
                result.push(one);
                result.push(five);
            }
            5..=8 => {
                result.push(five);
                result.extend(std::iter::repeat(one).take((count - 5) as usize));
            }
            _ => {
                result.push(one);
                result.push(ten);
            }
        }
    }

    result
}

fn range_error(num: impl fmt::Display) -> CodecError {
    CodecError::value(format!(
        "Cannot convert {} to a roman number: only numbers within range of [{}..{}] are allowed",
        num, MIN_NUMBER, MAX_NUMBER
    ))
}

/// Converts a number into its uppercase roman representation.
///
/// # Errors
/// Returns [`CodecError::Value`] when `num` is outside `[1..3999]`.
pub fn stringify(num: i64) -> Result<String> {
    if num < i64::from(MIN_NUMBER) || num > i64::from(MAX_NUMBER) {
        return Err(range_error(num));
    }
    Ok(render(num as u16))
}

/// Like [`stringify`], but for numbers that may carry a fractional part.
///
/// # Errors
/// Returns [`CodecError::Value`] when `num` is not an integer or is out of range.
pub fn stringify_float(num: f64) -> Result<String> {
    if !num.is_finite() || num.fract() != 0.0 {
        return Err(CodecError::value(format!(
            "Cannot convert {} to a roman number: only integers are allowed",
            num
        )));
    }
    if num < f64::from(MIN_NUMBER) || num > f64::from(MAX_NUMBER) {
        return Err(range_error(num));
    }
    Ok(render(num as u16))
}

/// Whether [`parse`] accepts the string.
pub fn valid(input: &str) -> bool {
    parse(input).is_ok()
}

/// A number that is guaranteed to have a roman representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanNumeral(u16);

impl RomanNumeral {
    /// Create a numeral, checking the `[1..3999]` range
    pub fn new(value: u16) -> Result<Self> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            return Err(range_error(value));
        }
        Ok(RomanNumeral(value))
    }

    /// The numeric value
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.0))
    }
}

impl FromStr for RomanNumeral {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(RomanNumeral)
    }
}

impl TryFrom<u32> for RomanNumeral {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self> {
        let narrowed = u16::try_from(value).map_err(|_| range_error(value))?;
        RomanNumeral::new(narrowed)
    }
}

impl From<RomanNumeral> for u16 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}
