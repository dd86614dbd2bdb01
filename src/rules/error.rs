/// Errors raised by dice and the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The die has never been rolled while unfrozen, so it has no face yet.
    #[error("die has not been rolled")]
    UnrolledDie,

    /// A raw face value outside 1..=6.
    #[error("face value {0} is not between 1 and 6")]
    InvalidFace(u32),

    /// A hand position outside 0..=4.
    #[error("no die at position {0}, a hand holds five dice")]
    InvalidPosition(usize),
}
