//! Symbol Key Encoding
//!
//! Deterministic encoding of a human-readable ticker into the fixed-width
//! storage key. The ticker's UTF-8 bytes are left-packed into a zero-filled
//! 32-byte buffer, truncating past the width.
//!
//! Two tickers sharing the same leading 32 encoded bytes map to the same
//! key. That ambiguity is inherited from the original key scheme and is
//! accepted rather than hashed away; NGX tickers are well under the width
//! in practice.

use crate::constants::registry::SYMBOL_KEY_WIDTH;
use crate::types::SymbolKey;

/// Derive the fixed-width key for a ticker. Empty string → all-zero key.
pub fn symbol_to_key(symbol: &str) -> SymbolKey {
    let mut key = [0u8; SYMBOL_KEY_WIDTH];
    let bytes = symbol.as_bytes();
    let len = bytes.len().min(SYMBOL_KEY_WIDTH);
    key[..len].copy_from_slice(&bytes[..len]);
    key
}

/// Best-effort inverse for display: strips trailing zero padding.
///
/// Lossy for tickers that were truncated or contain interior NUL bytes;
/// only the key itself is authoritative.
pub fn key_to_symbol(key: &SymbolKey) -> String {
    let end = key.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&key[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(symbol_to_key("DANGCEM"), symbol_to_key("DANGCEM"));
    }

    #[test]
    fn test_distinct_short_symbols_are_injective() {
        let tickers = ["DANGCEM", "GTCO", "MTNN", "BUACEMENT", "ACCESSCORP", "ZENITHBANK"];
        for a in &tickers {
            for b in &tickers {
                if a != b {
                    assert_ne!(symbol_to_key(a), symbol_to_key(b), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_empty_maps_to_zero_key() {
        assert_eq!(symbol_to_key(""), [0u8; 32]);
    }

    #[test]
    fn test_left_packing_layout() {
        let key = symbol_to_key("GTCO");
        assert_eq!(&key[..4], b"GTCO");
        assert!(key[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_truncation_collides_past_width() {
        // Inherited ambiguity: keys agree once the first 32 bytes agree.
        let long_a = "A".repeat(32) + "X";
        let long_b = "A".repeat(32) + "Y";
        assert_eq!(symbol_to_key(&long_a), symbol_to_key(&long_b));
        assert_eq!(symbol_to_key(&long_a), symbol_to_key(&"A".repeat(32)));
    }

    #[test]
    fn test_round_trip_within_width() {
        for ticker in ["DANGCEM", "X", "NESTLE"] {
            assert_eq!(key_to_symbol(&symbol_to_key(ticker)), ticker);
        }
        assert_eq!(key_to_symbol(&symbol_to_key("")), "");
    }
}
