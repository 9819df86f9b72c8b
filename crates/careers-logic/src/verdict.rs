//! Eligibility verdicts.
//!
//! A [`Verdict`] pairs the pass/fail decision with a display message and a
//! typed [`Denial`] so callers can branch without parsing text. The
//! message is empty exactly when the verdict is eligible.

use serde::{Deserialize, Serialize};

pub const UNKNOWN_PROFESSION: &str = "unknown profession requirement";
pub const NO_ACTIVE_LEADERBOARD: &str = "no active damage leaderboard";

/// Why a player was found ineligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Denial {
    /// No rule is registered under the requested name.
    UnknownProfession,
    /// A boss-scoped rule found no active boss to count against.
    NoActiveLeaderboard,
    /// A counted or summed value fell short of its threshold.
    BelowThreshold { current: u64, required: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub eligible: bool,
    /// Empty when eligible; otherwise the unmet condition.
    pub reason: String,
    pub denial: Option<Denial>,
}

impl Verdict {
    pub fn eligible() -> Self {
        Self {
            eligible: true,
            reason: String::new(),
            denial: None,
        }
    }

    pub fn unknown_profession() -> Self {
        Self {
            eligible: false,
            reason: UNKNOWN_PROFESSION.to_string(),
            denial: Some(Denial::UnknownProfession),
        }
    }

    pub fn no_active_leaderboard() -> Self {
        Self {
            eligible: false,
            reason: NO_ACTIVE_LEADERBOARD.to_string(),
            denial: Some(Denial::NoActiveLeaderboard),
        }
    }

    /// Compare `current` against an inclusive minimum.
    ///
    /// `what` names the measured quantity; the message reads
    /// `"<what> is <current>, requires at least <required>"`.
    pub fn at_least(what: &str, current: u64, required: u64) -> Self {
        if current >= required {
            return Self::eligible();
        }
        Self {
            eligible: false,
            reason: format!("{} is {}, requires at least {}", what, current, required),
            denial: Some(Denial::BelowThreshold { current, required }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(Verdict::at_least("mining yield", 500, 500).eligible);
        assert!(!Verdict::at_least("mining yield", 499, 500).eligible);
    }

    #[test]
    fn reason_embeds_values() {
        let v = Verdict::at_least("PK wins", 0, 20);
        assert_eq!(v.reason, "PK wins is 0, requires at least 20");
        assert_eq!(
            v.denial,
            Some(Denial::BelowThreshold {
                current: 0,
                required: 20
            })
        );
    }

    #[test]
    fn eligible_has_empty_reason() {
        let v = Verdict::at_least("tasks", 9, 4);
        assert!(v.reason.is_empty());
        assert!(v.denial.is_none());
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(Verdict::unknown_profession().reason, UNKNOWN_PROFESSION);
        assert_eq!(Verdict::no_active_leaderboard().reason, NO_ACTIVE_LEADERBOARD);
        assert!(!Verdict::no_active_leaderboard().eligible);
    }
}
