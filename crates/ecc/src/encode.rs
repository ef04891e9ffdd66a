use num_bigint::BigUint;

/// Fixed-width rendering of a base field component: `0x` followed by exactly
/// 64 uppercase hex digits, zero-padded. Components are reduced below the
/// 254-bit modulus and never need more digits.
pub fn encode_component(value: &BigUint) -> String {
    format!("0x{:064X}", value)
}
