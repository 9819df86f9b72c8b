//! Player record types and the store contract the rule engine reads from.
//!
//! The engine owns none of this data. Each evaluation borrows a
//! [`PlayerRecords`] implementation and re-reads whatever slices its rule
//! needs. Absent optional records come back as `None` or an empty list and
//! the rules fold them to zero; only infrastructure failures are errors.

use crate::constants::boss_kinds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossKind {
    Raider,
    Overlord,
}

impl BossKind {
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            boss_kinds::RAIDER => Some(Self::Raider),
            boss_kinds::OVERLORD => Some(Self::Overlord),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            BossKind::Raider => boss_kinds::RAIDER,
            BossKind::Overlord => boss_kinds::OVERLORD,
        }
    }
}

/// Sign-in streak for the current month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRecord {
    pub monthly_count: u32,
}

/// The player's current profession assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub profession: String,
    pub track: u8,
}

/// A boss encounter. At most one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossRecord {
    pub id: u64,
    pub name: String,
    pub kind: BossKind,
    pub active: bool,
}

/// One player's contribution row against a boss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossDamage {
    pub boss_id: u64,
    pub attacks: u32,
    pub damage: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedWeapon {
    /// Reference-catalog weapon type.
    pub weapon_id: u32,
    pub level: u32,
    pub mods_installed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseItem {
    /// Reference-catalog item type.
    pub item_id: u32,
    /// Signed: stores may leave zero or negative rows behind after trades.
    pub quantity: i64,
    pub upgrades: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningRecord {
    pub total_yield: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationRecord {
    pub successful_returns: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task_id: u32,
    pub completions: u32,
}

/// Player-vs-player combat profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkProfile {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationTech {
    pub tech_id: u32,
    pub level: u32,
}

/// Store access failures. Business outcomes never use this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordsError {
    #[error("player store unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt {kind} record: {detail}")]
    Corrupt { kind: &'static str, detail: String },
}

/// Read-only access to player aggregates, keyed by player handle.
///
/// Every method is an independent point-in-time read; a rule issuing
/// several reads may observe state that changed between them.
pub trait PlayerRecords {
    fn sign_in(&self, player: &str) -> Result<Option<SignInRecord>, RecordsError>;

    fn career(&self, player: &str) -> Result<Option<CareerRecord>, RecordsError>;

    /// The active boss, optionally restricted to one kind.
    fn active_boss(&self, kind: Option<BossKind>) -> Result<Option<BossRecord>, RecordsError>;

    fn boss_damage(&self, player: &str, boss_id: u64) -> Result<Vec<BossDamage>, RecordsError>;

    /// Owned weapons with `level >= min_level`.
    fn weapons(&self, player: &str, min_level: u32) -> Result<Vec<OwnedWeapon>, RecordsError>;

    fn warehouse(&self, player: &str) -> Result<Vec<WarehouseItem>, RecordsError>;

    fn mining(&self, player: &str) -> Result<Option<MiningRecord>, RecordsError>;

    fn explorations(&self, player: &str) -> Result<Vec<ExplorationRecord>, RecordsError>;

    fn tasks(&self, player: &str) -> Result<Vec<TaskRecord>, RecordsError>;

    fn pk_profile(&self, player: &str) -> Result<Option<PkProfile>, RecordsError>;

    fn station_tech(&self, player: &str) -> Result<Vec<StationTech>, RecordsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boss_kind_codes() {
        for kind in [BossKind::Raider, BossKind::Overlord] {
            assert_eq!(BossKind::from_u8(kind.as_u8()), Some(kind));
        }
        assert_eq!(BossKind::from_u8(7), None);
    }

    #[test]
    fn store_errors_display() {
        let err = RecordsError::Corrupt {
            kind: "boss",
            detail: "unknown kind 7".into(),
        };
        assert_eq!(err.to_string(), "corrupt boss record: unknown kind 7");
    }
}
