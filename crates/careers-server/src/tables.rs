//! SpacetimeDB table definitions for player careers.
//!
//! Each player-record table mirrors a record type from careers-logic,
//! keyed by player handle, and stored here for persistence and multiplayer
//! sync. Enum-like columns are stored as `u8` codes from
//! `careers_logic::constants`.

use spacetimedb::{table, Identity, Timestamp};

// ============================================================================
// PLAYERS
// ============================================================================

/// Connected player session
#[table(name = connected_player, public)]
pub struct ConnectedPlayer {
    #[primary_key]
    pub identity: Identity,
    /// Bound by `register_player`; `None` until then.
    pub handle: Option<String>,
    pub connected_at: Timestamp,
}

/// Handle registry (one identity per handle)
#[table(name = player, public)]
pub struct Player {
    #[primary_key]
    pub handle: String,
    pub identity: Identity,
    pub registered_at: Timestamp,
}

/// Current profession assignment
#[table(name = career, public)]
pub struct Career {
    #[primary_key]
    pub player: String,
    pub profession: String,
    pub track: u8, // tracks::*
}

// ============================================================================
// PLAYER RECORDS
// ============================================================================

/// Sign-in count for the current month
#[table(name = sign_in, public)]
pub struct SignIn {
    #[primary_key]
    pub player: String,
    pub monthly_count: u32,
}

/// Boss encounter; at most one has `active` set
#[table(name = boss, public)]
#[derive(Clone)]
pub struct Boss {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub name: String,
    pub kind: u8, // boss_kinds::*
    pub active: bool,
}

/// Per-player contribution against a boss
#[table(name = boss_damage, public)]
pub struct BossDamageRow {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub boss_id: u64,
    pub player: String,
    pub attacks: u32,
    pub damage: u64,
}

#[table(name = weapon, public)]
pub struct Weapon {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub player: String,
    pub weapon_id: u32, // weapon_ids::*
    pub level: u32,
    pub mods_installed: u32,
}

#[table(name = warehouse_item, public)]
pub struct WarehouseItemRow {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub player: String,
    pub item_id: u32, // item_ids::*
    pub quantity: i64,
    pub upgrades: u32,
}

#[table(name = mining, public)]
pub struct Mining {
    #[primary_key]
    pub player: String,
    pub total_yield: u64,
}

#[table(name = exploration, public)]
pub struct Exploration {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub player: String,
    pub successful_returns: u32,
}

#[table(name = task_progress, public)]
pub struct TaskProgress {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub player: String,
    pub task_id: u32,
    pub completions: u32,
}

#[table(name = pk_profile, public)]
pub struct PkProfileRow {
    #[primary_key]
    pub player: String,
    pub wins: u32,
    pub losses: u32,
}

#[table(name = station_tech, public)]
pub struct StationTechRow {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub player: String,
    pub tech_id: u32,
    pub level: u32,
}

// ============================================================================
// CATALOG & VERDICTS
// ============================================================================

/// Read-only listing of the profession catalog for clients to render
#[table(name = profession_listing, public)]
pub struct ProfessionListing {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub name: String, // unique per track only
    pub track: u8,    // tracks::*
    pub position: u32, // order within the track
    pub effect: String,
    pub requirement: String,
    pub is_transfer: bool,
    pub cost: u32,
    pub currency: u8, // currencies::*
}

/// Latest eligibility verdict per (player, profession)
#[table(name = profession_verdict, public)]
pub struct ProfessionVerdict {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub player: String,
    pub profession: String,
    pub eligible: bool,
    pub reason: String,
    pub checked_at: Timestamp,
}
