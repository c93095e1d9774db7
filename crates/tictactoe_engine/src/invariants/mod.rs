//! First-class invariants over [`GameState`].
//!
//! Each invariant is a zero-sized type with a check and a description.
//! The engine checks the full set after every applied move and falls
//! into [`Phase::Error`](crate::Phase::Error) when one fails.

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod history_consistent;
pub mod move_count;
pub mod turn_balance;
pub mod winning_line;

pub use history_consistent::HistoryConsistentInvariant;
pub use move_count::MoveCountInvariant;
pub use turn_balance::TurnBalanceInvariant;
pub use winning_line::WinningLineInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    MoveCountInvariant,
    TurnBalanceInvariant,
    WinningLineInvariant,
    HistoryConsistentInvariant,
);
