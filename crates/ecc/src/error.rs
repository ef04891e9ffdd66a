use thiserror::Error;

#[derive(Error, Debug)]
pub enum G2AddError {
    #[error("invalid numeric literal {literal:?} for radix {radix}")]
    MalformedLiteral { literal: String, radix: u32 },

    #[error("value is not a canonical base field element")]
    NonCanonicalFieldElement,

    #[error("coordinates do not satisfy the curve equation")]
    NotOnCurve,

    #[error("invalid component selector {0:?} (expected 1-4)")]
    InvalidSelector(String),
}
