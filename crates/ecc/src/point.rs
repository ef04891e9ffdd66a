use std::str::FromStr;

use halo2curves_axiom::{
    bn256::{Fq, Fq2, G2, G2Affine},
    CurveAffine,
};
use num_bigint::BigUint;

use crate::{error::G2AddError, field::fq_to_biguint};

/// Builds an affine G2 point from its four base field coordinates, rejecting
/// pairs that do not satisfy the curve equation. The all-zero tuple is the
/// library's affine encoding of the point at infinity and is accepted.
pub fn g2_from_coords(x_c0: Fq, x_c1: Fq, y_c0: Fq, y_c1: Fq) -> Result<G2Affine, G2AddError> {
    let x = Fq2 { c0: x_c0, c1: x_c1 };
    let y = Fq2 { c0: y_c0, c1: y_c1 };
    Option::from(G2Affine::from_xy(x, y)).ok_or(G2AddError::NotOnCurve)
}

/// Group-law addition of two affine points, normalized back to affine form.
/// Doubling (P = Q) and cancellation (P = -Q) are handled by the projective
/// formulas.
pub fn add_affine(p: &G2Affine, q: &G2Affine) -> G2Affine {
    (G2::from(*p) + G2::from(*q)).into()
}

/// Decomposes a point into its base field components `[x.c0, x.c1, y.c0, y.c1]`.
pub fn components(p: &G2Affine) -> [BigUint; 4] {
    [
        fq_to_biguint(&p.x.c0),
        fq_to_biguint(&p.x.c1),
        fq_to_biguint(&p.y.c0),
        fq_to_biguint(&p.y.c1),
    ]
}

/// Which base field component of the sum to print, as selected by the last
/// command-line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    XC0,
    XC1,
    YC0,
    YC1,
}

impl Component {
    pub fn index(&self) -> usize {
        match self {
            Component::XC0 => 0,
            Component::XC1 => 1,
            Component::YC0 => 2,
            Component::YC1 => 3,
        }
    }
}

impl FromStr for Component {
    type Err = G2AddError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Component::XC0),
            "2" => Ok(Component::XC1),
            "3" => Ok(Component::YC0),
            "4" => Ok(Component::YC1),
            _ => Err(G2AddError::InvalidSelector(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use halo2curves_axiom::ff::Field;

    use super::*;
    use crate::field::fq_from_biguint;

    #[test]
    fn generator_coordinates_round_trip() {
        let g = G2Affine::generator();
        let [x_c0, x_c1, y_c0, y_c1] = components(&g);
        let rebuilt = g2_from_coords(
            fq_from_biguint(&x_c0).unwrap(),
            fq_from_biguint(&x_c1).unwrap(),
            fq_from_biguint(&y_c0).unwrap(),
            fq_from_biguint(&y_c1).unwrap(),
        )
        .unwrap();
        assert_eq!(rebuilt, g);
    }

    #[test]
    fn all_zero_coordinates_are_the_identity() {
        let inf = g2_from_coords(Fq::ZERO, Fq::ZERO, Fq::ZERO, Fq::ZERO).unwrap();
        let g = G2Affine::generator();
        assert_eq!(add_affine(&inf, &g), g);
        assert_eq!(add_affine(&g, &inf), g);
    }

    #[test]
    fn off_curve_coordinates_are_rejected() {
        // (0, 1) is neither on the curve nor the identity encoding.
        let err = g2_from_coords(Fq::ZERO, Fq::ZERO, Fq::ONE, Fq::ZERO);
        assert!(matches!(err, Err(G2AddError::NotOnCurve)));
    }

    #[test]
    fn opposite_points_cancel() {
        let g = G2Affine::generator();
        let minus_g = {
            let mut p = g;
            p.y = -p.y;
            p
        };
        let sum = add_affine(&g, &minus_g);
        for component in components(&sum) {
            assert_eq!(component, BigUint::from(0u32));
        }
    }

    #[test]
    fn selector_strings_map_to_components() {
        for (s, index) in [("1", 0), ("2", 1), ("3", 2), ("4", 3)] {
            assert_eq!(Component::from_str(s).unwrap().index(), index);
        }
        for s in ["0", "5", "x", ""] {
            assert!(matches!(
                Component::from_str(s),
                Err(G2AddError::InvalidSelector(_))
            ));
        }
    }
}
