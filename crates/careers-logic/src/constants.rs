//! Game constants — tracks, currencies, boss kinds, weapon and item identifiers.
//!
//! These are simple integer constants with no database dependency.
//! Both the SpacetimeDB server tables and the native simtest use these.

pub mod tracks {
    pub const STATION: u8 = 0;
    pub const SYNDICATE: u8 = 1;
}

pub mod currencies {
    /// Station-track currency.
    pub const CREDITS: u8 = 0;
    /// Syndicate-track currency.
    pub const BOUNTY: u8 = 1;
}

pub mod boss_kinds {
    /// Standard raid target.
    pub const RAIDER: u8 = 0;
    /// Overlord encounter, the only kind guard captains can qualify on.
    pub const OVERLORD: u8 = 1;
}

/// Weapon-type identifiers in the reference catalog.
pub mod weapon_ids {
    // Kinetic
    pub const SIDEARM: u32 = 100;
    pub const SCOUT_RIFLE: u32 = 101;
    pub const AUTOCANNON: u32 = 102;
    pub const RAILGUN: u32 = 103;
    // Energy
    pub const PULSE_PISTOL: u32 = 200;
    pub const ION_CARBINE: u32 = 201;
    pub const PLASMA_LANCE: u32 = 202;
    // Thermal
    pub const FLAMER: u32 = 300;
    pub const THERMAL_PROJECTOR: u32 = 301;
    pub const MAGMA_CANNON: u32 = 302;
    // Melee
    pub const SHOCK_BATON: u32 = 400;
    pub const VIBRO_BLADE: u32 = 401;
}

/// Item identifiers in the reference catalog.
pub mod item_ids {
    // Materials
    pub const ORE_CHUNK: u32 = 1000;
    pub const ALLOY_PLATE: u32 = 1001;
    // Consumables
    pub const MED_PATCH: u32 = 1100;
    pub const RATION_PACK: u32 = 1101;
    // Explosives
    pub const BREACH_CHARGE: u32 = 1200;
    pub const FRAG_GRENADE: u32 = 1201;
    pub const SALVAGED_MINE: u32 = 1202;
    // Devices and tools
    pub const HACKING_RIG: u32 = 1300;
    pub const SIGNAL_JAMMER: u32 = 1301;
    pub const CRACKED_DATAPAD: u32 = 1302;
}
