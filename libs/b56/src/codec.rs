//! Encoding and decoding between `u64` and base-56 strings.

use crate::alphabet::{self, RADIX, ZERO};
use crate::B56Error;

/// Number of symbols in a padded encoding. 56^12 exceeds 2^64, so every `u64` fits.
pub const WIDTH: usize = 12;

/// Separator between a domain prefix and the padded encoding.
pub const DELIMITER: char = '-';

/// Positional weights: `WEIGHTS[p] == 56^p`.
const WEIGHTS: [u64; WIDTH] = build_weights();

const fn build_weights() -> [u64; WIDTH] {
    let mut weights = [1u64; WIDTH];
    let mut p = 1;
    while p < WIDTH {
        weights[p] = weights[p - 1] * RADIX;
        p += 1;
    }
    weights
}

/// Encodes `value` in base 56.
///
/// With `pad` the result is always [`WIDTH`] symbols long. Without it, leading
/// zero symbols are stripped, leaving `"0"` for zero.
///
/// ```
/// assert_eq!(b56::encode(56, false), "10");
/// assert_eq!(b56::encode(56, true), "000000000010");
/// ```
pub fn encode(value: u64, pad: bool) -> String {
    let digits = encode_padded(value);
    let digits = if pad {
        &digits[..]
    } else {
        trim_leading_zeros(&digits)
    };
    digits.iter().map(|&b| b as char).collect()
}

/// Encodes `value` padded and tagged with a domain prefix: `{prefix}-{encoding}`.
///
/// The prefix must not contain [`DELIMITER`]; use [`crate::Prefix`] to validate
/// one up front.
///
/// ```
/// assert_eq!(b56::encode_with_prefix(3136, "ord"), "ord-000000000100");
/// ```
pub fn encode_with_prefix(value: u64, prefix: &str) -> String {
    let digits = encode_padded(value);
    let mut out = String::with_capacity(prefix.len() + 1 + WIDTH);
    out.push_str(prefix);
    out.push(DELIMITER);
    out.extend(digits.iter().map(|&b| b as char));
    out
}

/// Decodes a base-56 string, padded or not.
///
/// Short inputs are read as if left-padded with zero symbols, so `""` is 0.
/// Leading zero symbols carry no value, so inputs longer than [`WIDTH`] are
/// accepted as long as the extra symbols are zeros.
pub fn decode(encoded: &str) -> Result<u64, B56Error> {
    // Reject foreign symbols before looking at magnitude.
    let digits = encoded
        .char_indices()
        .map(|(position, symbol)| {
            alphabet::value(symbol).ok_or(B56Error::InvalidSymbol { symbol, position })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let start = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(digits.len());
    let significant = &digits[start..];
    if significant.len() > WIDTH {
        return Err(B56Error::Overflow);
    }

    let mut value = 0u64;
    for (position, &digit) in significant.iter().rev().enumerate() {
        let term = WEIGHTS[position]
            .checked_mul(u64::from(digit))
            .ok_or(B56Error::Overflow)?;
        value = value.checked_add(term).ok_or(B56Error::Overflow)?;
    }

    Ok(value)
}

/// Decodes a prefixed value, discarding the prefix.
///
/// The input is split on the first [`DELIMITER`].
pub fn decode_with_prefix(encoded: &str) -> Result<u64, B56Error> {
    decode_with_prefix_parts(encoded).map(|(_, value)| value)
}

/// Decodes a prefixed value and returns the prefix alongside the value.
pub fn decode_with_prefix_parts(encoded: &str) -> Result<(&str, u64), B56Error> {
    let Some((prefix, digits)) = encoded.split_once(DELIMITER) else {
        return Err(B56Error::MalformedInput {
            input: encoded.to_string(),
        });
    };

    Ok((prefix, decode(digits)?))
}

/// Produces all [`WIDTH`] symbols, most significant first.
fn encode_padded(value: u64) -> [u8; WIDTH] {
    let mut out = [ZERO; WIDTH];
    let mut remaining = value;

    for position in (0..WIDTH).rev() {
        let digit = digit_at(position, remaining);
        remaining -= u64::from(digit) * WEIGHTS[position];
        out[WIDTH - 1 - position] = alphabet::symbol(digit);
    }

    debug_assert_eq!(remaining, 0);
    out
}

/// Largest `m` with `m * 56^position <= remaining`.
///
/// Higher positions have already been subtracted, so `remaining < 56^(position + 1)`
/// and the quotient is at most 55.
fn digit_at(position: usize, remaining: u64) -> u8 {
    let weight = WEIGHTS[position];
    if position == WIDTH - 1 {
        // 2 * 56^11 > u64::MAX: the top digit is 0 or 1.
        return u8::from(remaining >= weight);
    }
    (remaining / weight) as u8
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let start = digits
        .iter()
        .position(|&b| b != ZERO)
        .unwrap_or(digits.len() - 1);
    &digits[start..]
}
