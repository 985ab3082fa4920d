//! Operand extraction, validation and addition for `/add`.

use serde::Serialize;
use tracing::debug;

use crate::error::AddError;

/// Raw operands as they appear in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOperands {
    /// First occurrence of `a`, if any.
    pub a: Option<String>,
    /// First occurrence of `b`, if any.
    pub b: Option<String>,
}

impl RawOperands {
    /// Extract `a` and `b` from a raw (still percent-encoded) query string.
    ///
    /// Repeated keys keep their first value. Unknown keys are ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut operands = Self::default();
        let Some(query) = query else {
            return operands;
        };

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "a" => &mut operands.a,
                "b" => &mut operands.b,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        operands
    }
}

/// Validated operands of an addition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AddInputs {
    pub a: f64,
    pub b: f64,
}

/// Result of an addition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AddResult {
    pub sum: f64,
}

impl AddInputs {
    /// Validate raw operands: presence first, then numeric format.
    pub fn parse(raw: &RawOperands) -> Result<Self, AddError> {
        let (Some(a_raw), Some(b_raw)) = (raw.a.as_deref(), raw.b.as_deref()) else {
            return Err(AddError::MissingParameter);
        };

        match (parse_operand(a_raw), parse_operand(b_raw)) {
            (Some(a), Some(b)) => Ok(Self { a, b }),
            _ => Err(AddError::InvalidFormat {
                a: a_raw.to_string(),
                b: b_raw.to_string(),
            }),
        }
    }

    /// IEEE-754 double addition of the two operands.
    pub fn sum(&self) -> AddResult {
        AddResult {
            sum: self.a + self.b,
        }
    }
}

/// First code point of every Unicode `Nd` (decimal digit) run of ten.
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0,
    0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0,
    0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// ASCII equivalent of a Unicode decimal digit, if `c` is one.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let code = u32::from(c);
    DECIMAL_DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
}

/// Rewrite an operand into the ASCII form `f64::from_str` understands.
///
/// Unicode decimal digits become ASCII digits, and a single `_` between two
/// digits is dropped. Any other underscore is left in place so parsing fails.
fn normalize_operand(value: &str) -> String {
    let chars: Vec<char> = value
        .trim()
        .chars()
        .map(|c| ascii_digit(c).unwrap_or(c))
        .collect();

    let mut normalized = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        let between_digits = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(char::is_ascii_digit);
        if c == '_' && between_digits {
            continue;
        }
        normalized.push(c);
    }
    normalized
}

/// Parse a single operand as a finite `f64`.
///
/// Surrounding whitespace is ignored, digit separators (`1_000`) and
/// non-ASCII decimal digits are accepted. `inf` and `nan` spellings are
/// rejected because they have no JSON representation.
pub fn parse_operand(value: &str) -> Option<f64> {
    match normalize_operand(value).parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        Ok(parsed) => {
            debug!(value, %parsed, "Rejecting non-finite operand");
            None
        }
        Err(_) => None,
    }
}
