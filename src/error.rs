use crate::linsystheory::PseudoInverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// A block needed by the pseudo-inverse of `[A B; C D]` could not be inverted,
    /// i.e. the augmented system matrix is rank deficient.
    #[error("{branch:?} pseudo-inverse of the augmented system is singular ({block} not invertible)")]
    SingularMatrix {
        branch: PseudoInverse,
        block: &'static str,
    },
}
