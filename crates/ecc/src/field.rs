use halo2curves_axiom::bn256::Fq;
use hex_literal::hex;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{Num, Zero};

use crate::error::G2AddError;

lazy_static! {
    /// BN254 base field modulus.
    pub static ref BN254_MODULUS: BigUint = BigUint::from_bytes_be(&hex!(
        "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
    ));
}

/// Parses an unsigned big integer, selecting the radix from the literal's
/// prefix: `0x` for 16, `0o` for 8, `0b` for 2, none for 10.
pub fn parse_biguint(literal: &str) -> Result<BigUint, G2AddError> {
    let (radix, digits) = match literal.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &literal[2..]),
        [b'0', b'o' | b'O', ..] => (8, &literal[2..]),
        [b'0', b'b' | b'B', ..] => (2, &literal[2..]),
        _ => (10, literal),
    };
    BigUint::from_str_radix(digits, radix).map_err(|_| G2AddError::MalformedLiteral {
        literal: literal.to_string(),
        radix,
    })
}

/// Parses a base field element from a radix-prefixed literal. Values at or
/// above the modulus are reduced; a leading `-` takes the modular negation of
/// the magnitude.
pub fn fq_from_str(literal: &str) -> Result<Fq, G2AddError> {
    let (negative, magnitude) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    let mut value = parse_biguint(magnitude)? % &*BN254_MODULUS;
    if negative && !value.is_zero() {
        value = &*BN254_MODULUS - value;
    }
    fq_from_biguint(&value)
}

/// Reduces an integer modulo the base field and converts it into `Fq`
/// through the canonical little-endian byte representation.
pub fn fq_from_biguint(value: &BigUint) -> Result<Fq, G2AddError> {
    let le = (value % &*BN254_MODULUS).to_bytes_le();
    let mut repr = [0u8; 32];
    repr[..le.len()].copy_from_slice(&le);
    Option::from(Fq::from_bytes(&repr)).ok_or(G2AddError::NonCanonicalFieldElement)
}

pub fn fq_to_biguint(fq: &Fq) -> BigUint {
    BigUint::from_bytes_le(&fq.to_bytes())
}
