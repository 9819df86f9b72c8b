//! In-memory [`PlayerRecords`] store.
//!
//! Used by tests and the simtest harness. Deserializes from the same JSON
//! fixture format the harness ships with.

use crate::records::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every record slice for one player. Missing fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSnapshot {
    pub sign_in: Option<SignInRecord>,
    pub career: Option<CareerRecord>,
    pub boss_damage: Vec<BossDamage>,
    pub weapons: Vec<OwnedWeapon>,
    pub warehouse: Vec<WarehouseItem>,
    pub mining: Option<MiningRecord>,
    pub explorations: Vec<ExplorationRecord>,
    pub tasks: Vec<TaskRecord>,
    pub pk: Option<PkProfile>,
    pub station_tech: Vec<StationTech>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryRecords {
    pub bosses: Vec<BossRecord>,
    pub players: HashMap<String, PlayerSnapshot>,
}

impl MemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a player's snapshot.
    pub fn with_player(mut self, handle: &str, snapshot: PlayerSnapshot) -> Self {
        self.players.insert(handle.to_string(), snapshot);
        self
    }

    pub fn with_boss(mut self, boss: BossRecord) -> Self {
        self.bosses.push(boss);
        self
    }

    pub fn player_mut(&mut self, handle: &str) -> &mut PlayerSnapshot {
        self.players.entry(handle.to_string()).or_default()
    }

    fn player(&self, handle: &str) -> Option<&PlayerSnapshot> {
        self.players.get(handle)
    }

    fn list<T: Clone>(&self, handle: &str, slice: impl Fn(&PlayerSnapshot) -> &Vec<T>) -> Vec<T> {
        self.player(handle).map(|p| slice(p).clone()).unwrap_or_default()
    }
}

impl PlayerRecords for MemoryRecords {
    fn sign_in(&self, player: &str) -> Result<Option<SignInRecord>, RecordsError> {
        Ok(self.player(player).and_then(|p| p.sign_in.clone()))
    }

    fn career(&self, player: &str) -> Result<Option<CareerRecord>, RecordsError> {
        Ok(self.player(player).and_then(|p| p.career.clone()))
    }

    fn active_boss(&self, kind: Option<BossKind>) -> Result<Option<BossRecord>, RecordsError> {
        Ok(self
            .bosses
            .iter()
            .find(|b| b.active && kind.map_or(true, |k| b.kind == k))
            .cloned())
    }

    fn boss_damage(&self, player: &str, boss_id: u64) -> Result<Vec<BossDamage>, RecordsError> {
        let mut rows = self.list(player, |p| &p.boss_damage);
        rows.retain(|d| d.boss_id == boss_id);
        Ok(rows)
    }

    fn weapons(&self, player: &str, min_level: u32) -> Result<Vec<OwnedWeapon>, RecordsError> {
        let mut rows = self.list(player, |p| &p.weapons);
        rows.retain(|w| w.level >= min_level);
        Ok(rows)
    }

    fn warehouse(&self, player: &str) -> Result<Vec<WarehouseItem>, RecordsError> {
        Ok(self.list(player, |p| &p.warehouse))
    }

    fn mining(&self, player: &str) -> Result<Option<MiningRecord>, RecordsError> {
        Ok(self.player(player).and_then(|p| p.mining.clone()))
    }

    fn explorations(&self, player: &str) -> Result<Vec<ExplorationRecord>, RecordsError> {
        Ok(self.list(player, |p| &p.explorations))
    }

    fn tasks(&self, player: &str) -> Result<Vec<TaskRecord>, RecordsError> {
        Ok(self.list(player, |p| &p.tasks))
    }

    fn pk_profile(&self, player: &str) -> Result<Option<PkProfile>, RecordsError> {
        Ok(self.player(player).and_then(|p| p.pk.clone()))
    }

    fn station_tech(&self, player: &str) -> Result<Vec<StationTech>, RecordsError> {
        Ok(self.list(player, |p| &p.station_tech))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss(id: u64, kind: BossKind, active: bool) -> BossRecord {
        BossRecord {
            id,
            name: format!("boss-{}", id),
            kind,
            active,
        }
    }

    #[test]
    fn unknown_player_reads_empty() {
        let store = MemoryRecords::new();
        assert_eq!(store.mining("ghost").unwrap(), None);
        assert!(store.weapons("ghost", 0).unwrap().is_empty());
    }

    #[test]
    fn weapons_filter_by_min_level() {
        let mut store = MemoryRecords::new();
        store.player_mut("ava").weapons = vec![
            OwnedWeapon { weapon_id: 1, level: 2, mods_installed: 0 },
            OwnedWeapon { weapon_id: 2, level: 3, mods_installed: 0 },
        ];
        let rows = store.weapons("ava", 3).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].weapon_id, 2);
    }

    #[test]
    fn active_boss_respects_kind() {
        let store = MemoryRecords::new()
            .with_boss(boss(1, BossKind::Overlord, false))
            .with_boss(boss(2, BossKind::Raider, true));
        assert_eq!(store.active_boss(None).unwrap().map(|b| b.id), Some(2));
        assert!(store.active_boss(Some(BossKind::Overlord)).unwrap().is_none());
    }

    #[test]
    fn boss_damage_scoped_to_boss() {
        let mut store = MemoryRecords::new();
        store.player_mut("ava").boss_damage = vec![
            BossDamage { boss_id: 1, attacks: 2, damage: 10 },
            BossDamage { boss_id: 2, attacks: 5, damage: 50 },
        ];
        let rows = store.boss_damage("ava", 2).unwrap();
        assert_eq!(rows, vec![BossDamage { boss_id: 2, attacks: 5, damage: 50 }]);
    }
}
