use ark_std::{error, fmt, string::String};
use qapsnark_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, QapError>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum QapError {
    /// Algebra error
    Algebra(AlgebraError),
    /// Error with message
    Message(String),
    /// The evaluation points are not pairwise distinct.
    DegenerateSet,
    /// Matrix, point-set, witness or coefficient dimensions disagree.
    ShapeMismatch,
    /// The secret point coincides with an evaluation point.
    SingularEvaluationPoint,
    /// Inversion of zero.
    NotInvertible,
    /// The witness does not satisfy the constraint system.
    WitnessInconsistent,
    /// The pairing check failed.
    ProofRejected,
}

impl fmt::Display for QapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use QapError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            Message(e) => f.write_str(e),
            DegenerateSet => f.write_str("Evaluation points are not pairwise distinct."),
            ShapeMismatch => f.write_str("Dimensions do not match."),
            SingularEvaluationPoint => {
                f.write_str("The evaluation point is a root of the vanishing polynomial.")
            }
            NotInvertible => f.write_str("Zero is not invertible."),
            WitnessInconsistent => f.write_str("The witness does not satisfy the constraints."),
            ProofRejected => f.write_str("The pairing check failed."),
        }
    }
}

impl error::Error for QapError {}

impl From<AlgebraError> for QapError {
    fn from(e: AlgebraError) -> QapError {
        match e {
            AlgebraError::InversionError => QapError::NotInvertible,
            e => QapError::Algebra(e),
        }
    }
}
