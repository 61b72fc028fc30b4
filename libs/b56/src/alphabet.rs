//! The fixed base-56 alphabet and its lookup tables.
//!
//! Both directions of the symbol/value mapping come from [`SYMBOLS`]. The reverse
//! table is built at compile time, so there is nothing to initialize at runtime.

/// Number of symbols in the alphabet.
pub const RADIX: u64 = 56;

/// Symbols ordered by digit value: digits, then lowercase and uppercase letters
/// without the look-alikes `i`, `l`, `o`, `I`, `L`, `O`.
pub const SYMBOLS: &[u8; 56] = b"0123456789abcdefghjkmnpqrstuvwxyzABCDEFGHJKMNPQRSTUVWXYZ";

/// The symbol for digit value zero, used for padding.
pub const ZERO: u8 = SYMBOLS[0];

const INVALID: u8 = u8::MAX;

const VALUES: [u8; 128] = build_values();

const fn build_values() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the symbol for a digit value.
///
/// # Panics
///
/// Panics if `digit` is 56 or more. Callers only pass values reduced modulo the radix.
#[inline]
pub const fn symbol(digit: u8) -> u8 {
    SYMBOLS[digit as usize]
}

/// Returns the digit value of a symbol, or `None` if it is not in the alphabet.
#[inline]
pub fn value(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    match VALUES[symbol as usize] {
        INVALID => None,
        v => Some(v),
    }
}
