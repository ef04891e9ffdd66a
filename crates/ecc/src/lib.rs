//! Adapter around BN254 G2 point addition.
//!
//! The curve arithmetic itself is delegated to `halo2curves`; this crate only
//! marshals numeric strings into affine G2 points, adds them, and decomposes
//! the sum back into its four base field components.

pub mod encode;
pub mod error;
pub mod field;
pub mod point;

pub use encode::encode_component;
pub use error::G2AddError;
pub use field::{fq_from_biguint, fq_from_str, fq_to_biguint, parse_biguint, BN254_MODULUS};
/// Re-export of the underlying curve library for downstream crates and tests.
pub use halo2curves_axiom as halo2curves;
pub use point::{add_affine, components, g2_from_coords, Component};
