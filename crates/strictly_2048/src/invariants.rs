//! First-class invariants for 2048.
//!
//! Invariants are logical properties every game reachable through `init`,
//! moves and spawns satisfies. They are testable independently and the
//! frontend checks them in debug builds.

use crate::game::Game;
use crate::types::{EMPTY, SPAWN_VALUE};

/// A property of a state `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// Checks the property against `state`.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A failed invariant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    pub description: &'static str,
}

impl InvariantViolation {
    /// Records a failure of `I`.
    pub fn of<S, I: Invariant<S>>() -> Self {
        Self {
            description: I::description(),
        }
    }
}

/// Several invariants checked as one.
///
/// Implemented for tuples of one to four [`Invariant`]s. Checks run in
/// tuple order and every failure is reported, not just the first.
pub trait InvariantSet<S> {
    /// Appends a violation for every member that does not hold.
    fn collect_violations(state: &S, violations: &mut Vec<InvariantViolation>);

    /// Checks every member, returning all violations if any fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        Self::collect_violations(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

macro_rules! tuple_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn collect_violations(state: &S, violations: &mut Vec<InvariantViolation>) {
                $(
                    if !$member::holds(state) {
                        violations.push(InvariantViolation::of::<S, $member>());
                    }
                )+
            }
        }
    };
}

tuple_invariant_set!(A);
tuple_invariant_set!(A, B);
tuple_invariant_set!(A, B, C);
tuple_invariant_set!(A, B, C, D);

/// Invariant: every tile is a power of two no smaller than a spawned tile.
pub struct PowerOfTwoTiles;

impl Invariant<Game> for PowerOfTwoTiles {
    fn holds(game: &Game) -> bool {
        game.board()
            .rows()
            .iter()
            .flatten()
            .all(|&v| v == EMPTY || (v.is_power_of_two() && v >= SPAWN_VALUE))
    }

    fn description() -> &'static str {
        "Every tile is a power of two >= 2"
    }
}

/// Invariant: the score is exactly what the tiles on the board earned.
///
/// Every tile starts life as a 2, so a tile of value `2^k` took `k - 1`
/// rounds of merging to build and scored `v * (k - 1)` along the way.
/// Merging never removes value from the board, which makes the score a
/// function of the board alone.
pub struct ScoreMatchesTiles;

impl ScoreMatchesTiles {
    /// Score earned building a tile of `value` from spawned tiles.
    pub fn earned_by(value: u32) -> u64 {
        if value <= SPAWN_VALUE {
            return 0;
        }
        u64::from(value) * u64::from(value.ilog2() - 1)
    }
}

impl Invariant<Game> for ScoreMatchesTiles {
    fn holds(game: &Game) -> bool {
        let earned: u64 = game
            .board()
            .rows()
            .iter()
            .flatten()
            .map(|&v| Self::earned_by(v))
            .sum();
        earned == u64::from(game.score())
    }

    fn description() -> &'static str {
        "Score equals the merge value built into the tiles on the board"
    }
}

/// All 2048 invariants as a composable set.
pub type GameInvariants = (PowerOfTwoTiles, ScoreMatchesTiles);
