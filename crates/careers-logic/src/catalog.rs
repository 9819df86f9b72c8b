//! Profession catalog — the two career tracks and their descriptors.
//!
//! Each track is an ordered list of professions. Acquiring a profession
//! costs the track's currency: credits on the station track, bounty on the
//! syndicate track. The requirement text is display-only; the authoritative
//! thresholds live in [`crate::rules`].
//!
//! ```
//! use careers_logic::catalog::{ProfessionCatalog, Track};
//!
//! let catalog = ProfessionCatalog::standard();
//! let (miner, track) = catalog.find("Deep-space miner").unwrap();
//! assert_eq!(track, Track::Station);
//! assert_eq!(miner.cost_label(), "800 credits");
//! ```

use crate::constants::{currencies, tracks};
use serde::{Deserialize, Serialize};

/// Requirement text for professions that have no eligibility condition.
pub const NO_REQUIREMENT: &str = "None";

/// One of the two mutually exclusive career affiliations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    /// Station crew.
    Station,
    /// Pirate syndicate.
    Syndicate,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Station, Track::Syndicate];

    /// The currency professions on this track are paid in.
    pub fn currency(self) -> Currency {
        match self {
            Track::Station => Currency::Credits,
            Track::Syndicate => Currency::Bounty,
        }
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            tracks::STATION => Some(Self::Station),
            tracks::SYNDICATE => Some(Self::Syndicate),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Track::Station => tracks::STATION,
            Track::Syndicate => tracks::SYNDICATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Credits,
    Bounty,
}

impl Currency {
    pub fn as_u8(self) -> u8 {
        match self {
            Currency::Credits => currencies::CREDITS,
            Currency::Bounty => currencies::BOUNTY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Currency::Credits => "credits",
            Currency::Bounty => "bounty",
        }
    }
}

/// Static description of a profession.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionDescriptor {
    /// Unique display name, also the rule-dispatch key.
    pub name: String,
    pub effect: String,
    pub requirement: String,
    /// Acquiring this profession switches the player's track affiliation.
    pub is_transfer: bool,
    /// Amount of the owning track's currency.
    pub cost: u32,
    pub currency: Currency,
}

impl ProfessionDescriptor {
    fn new(
        track: Track,
        name: &str,
        effect: &str,
        requirement: &str,
        is_transfer: bool,
        cost: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            effect: effect.to_string(),
            requirement: requirement.to_string(),
            is_transfer,
            cost,
            currency: track.currency(),
        }
    }

    /// Whether the catalog lists no eligibility condition for this profession.
    pub fn is_unconditioned(&self) -> bool {
        self.requirement == NO_REQUIREMENT
    }

    /// Cost formatted for display, e.g. `"800 credits"`.
    pub fn cost_label(&self) -> String {
        format!("{} {}", self.cost, self.currency.label())
    }
}

/// Both track lists. Built once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionCatalog {
    pub station: Vec<ProfessionDescriptor>,
    pub syndicate: Vec<ProfessionDescriptor>,
}

impl ProfessionCatalog {
    /// Build a catalog from explicit lists (substitute catalogs in tests).
    pub fn new(station: Vec<ProfessionDescriptor>, syndicate: Vec<ProfessionDescriptor>) -> Self {
        Self { station, syndicate }
    }

    /// Ordered descriptors for a track.
    pub fn track(&self, track: Track) -> &[ProfessionDescriptor] {
        match track {
            Track::Station => &self.station,
            Track::Syndicate => &self.syndicate,
        }
    }

    /// Every descriptor, station track first, each in catalog order.
    pub fn all(&self) -> impl Iterator<Item = (&ProfessionDescriptor, Track)> {
        Track::ALL
            .into_iter()
            .flat_map(move |t| self.track(t).iter().map(move |d| (d, t)))
    }

    /// Look up a profession by name. Station track wins on a name collision.
    pub fn find(&self, name: &str) -> Option<(&ProfessionDescriptor, Track)> {
        self.all().find(|(d, _)| d.name == name)
    }

    /// The default profession of a track (first entry).
    pub fn starter(&self, track: Track) -> Option<&ProfessionDescriptor> {
        self.track(track).first()
    }

    /// The compiled-in catalog.
    pub fn standard() -> Self {
        use Track::{Station as St, Syndicate as Sy};
        let d = ProfessionDescriptor::new;
        Self {
            station: vec![
                d(St, "Station recruit", "Basic station access", NO_REQUIREMENT, true, 0),
                d(St, "Medic", "Healing items restore 10% more", NO_REQUIREMENT, false, 300),
                d(St, "Deep-space miner", "+15% mining yield", "Mine 500 ore in total", false, 800),
                d(St, "Chief engineer", "+10% exploration return chance", "Return from 4 explorations", false, 1000),
                d(St, "Guard captain", "+10% damage against overlords", "Attack the active overlord 4 times", false, 1500),
                d(St, "Guard corporal", "+5% damage against bosses", "Deal 100 damage to the active boss", false, 1200),
                d(St, "Weapons sergeant", "+5% weapon experience", "Own a weapon at level 6", false, 1200),
                d(St, "Captain", "+1 daily task slot", "Complete 4 tasks", false, 2000),
                d(St, "Intelligence officer", "Reveals boss weak points", "Own station tech at level 5", false, 1800),
                d(St, "Energy-weapons specialist", "+10% energy weapon damage", "Own a level 3+ energy weapon", false, 1500),
                d(St, "Armorer", "Weapon mods cost 10% less", "Install 3 mods on one weapon", false, 1500),
                d(St, "Computer specialist", "+10% device success rate", "Hold a purchasable device or tool", false, 1600),
                d(St, "Commander", "+5% crew morale", "Upgrade a stored item 5 times", false, 2500),
            ],
            syndicate: vec![
                d(Sy, "Drifter", "Basic syndicate access", NO_REQUIREMENT, true, 0),
                d(Sy, "Smuggler", "Sell loot 5% higher", NO_REQUIREMENT, false, 200),
                d(Sy, "Gunslinger", "+5% critical chance", "Own a weapon at level 6", false, 900),
                d(Sy, "Pyromaniac", "+10% thermal weapon damage", "Own a level 3+ thermal weapon", false, 1100),
                d(Sy, "Crimson killer", "+10% PK damage", "Own a scout rifle", false, 1300),
                d(Sy, "Saboteur", "Explosives deal 10% more damage", "Store an explosive", false, 1000),
                d(Sy, "Recruiter", "Syndicate invites cost nothing", "Win 20 PK fights", false, 1400),
                d(Sy, "Cleaner", "Boss loot +5%", "Attack the active boss 4 times", false, 1200),
                d(Sy, "Syndicate treasurer", "+10% bounty income", "Sign in 14 days this month", false, 1600),
            ],
        }
    }
}

impl Default for ProfessionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_unique_within_each_track() {
        let catalog = ProfessionCatalog::standard();
        for track in Track::ALL {
            let list = catalog.track(track);
            let names: HashSet<_> = list.iter().map(|d| d.name.as_str()).collect();
            assert_eq!(names.len(), list.len(), "duplicate name in {:?}", track);
        }
    }

    #[test]
    fn tracks_are_disjoint() {
        let catalog = ProfessionCatalog::standard();
        let station: HashSet<_> = catalog.station.iter().map(|d| &d.name).collect();
        assert!(catalog.syndicate.iter().all(|d| !station.contains(&d.name)));
    }

    #[test]
    fn currency_follows_track() {
        let catalog = ProfessionCatalog::standard();
        assert!(catalog.station.iter().all(|d| d.currency == Currency::Credits));
        assert!(catalog.syndicate.iter().all(|d| d.currency == Currency::Bounty));
    }

    #[test]
    fn starters_are_free_transfers() {
        let catalog = ProfessionCatalog::standard();
        for track in Track::ALL {
            let starter = catalog.starter(track).unwrap();
            assert_eq!(starter.cost, 0);
            assert!(starter.is_transfer);
            assert!(starter.is_unconditioned());
        }
    }

    #[test]
    fn find_reports_track() {
        let catalog = ProfessionCatalog::standard();
        assert_eq!(catalog.find("Cleaner").map(|(_, t)| t), Some(Track::Syndicate));
        assert_eq!(catalog.find("Captain").map(|(_, t)| t), Some(Track::Station));
        assert!(catalog.find("Space wizard").is_none());
    }

    #[test]
    fn all_preserves_order() {
        let catalog = ProfessionCatalog::standard();
        let names: Vec<_> = catalog.all().map(|(d, _)| d.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Station recruit"));
        assert_eq!(names.last(), Some(&"Syndicate treasurer"));
        assert_eq!(names.len(), catalog.station.len() + catalog.syndicate.len());
    }

    #[test]
    fn track_round_trips_through_u8() {
        for track in Track::ALL {
            assert_eq!(Track::from_u8(track.as_u8()), Some(track));
        }
        assert_eq!(Track::from_u8(9), None);
    }

    #[test]
    fn cost_label_uses_currency() {
        let catalog = ProfessionCatalog::standard();
        let (cleaner, _) = catalog.find("Cleaner").unwrap();
        assert_eq!(cleaner.cost_label(), "1200 bounty");
    }
}
