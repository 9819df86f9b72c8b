//! `PlayerRecords` over the module's tables.
//!
//! Reads happen inside the calling reducer's transaction, so one
//! evaluation sees a consistent view even though the rule engine does not
//! require it.

use crate::tables::*;
use careers_logic::records::{
    BossDamage, BossKind, BossRecord, CareerRecord, ExplorationRecord, MiningRecord, OwnedWeapon,
    PkProfile, PlayerRecords, RecordsError, SignInRecord, StationTech, TaskRecord, WarehouseItem,
};
use spacetimedb::{ReducerContext, Table};

pub struct DbRecords<'a> {
    ctx: &'a ReducerContext,
}

impl<'a> DbRecords<'a> {
    pub fn new(ctx: &'a ReducerContext) -> Self {
        Self { ctx }
    }
}

fn boss_record(row: Boss) -> Result<BossRecord, RecordsError> {
    let kind = BossKind::from_u8(row.kind).ok_or_else(|| RecordsError::Corrupt {
        kind: "boss",
        detail: format!("boss {} has unknown kind {}", row.id, row.kind),
    })?;
    Ok(BossRecord {
        id: row.id,
        name: row.name,
        kind,
        active: row.active,
    })
}

/// First active row of the wanted kind. Kinds are compared as stored codes,
/// so a corrupt row only fails lookups that would have selected it.
fn pick_active_boss(
    rows: impl Iterator<Item = Boss>,
    kind: Option<BossKind>,
) -> Result<Option<BossRecord>, RecordsError> {
    rows.filter(|b| b.active)
        .find(|b| kind.map_or(true, |k| b.kind == k.as_u8()))
        .map(boss_record)
        .transpose()
}

impl PlayerRecords for DbRecords<'_> {
    fn sign_in(&self, player: &str) -> Result<Option<SignInRecord>, RecordsError> {
        Ok(self
            .ctx
            .db
            .sign_in()
            .iter()
            .find(|s| s.player == player)
            .map(|s| SignInRecord {
                monthly_count: s.monthly_count,
            }))
    }

    fn career(&self, player: &str) -> Result<Option<CareerRecord>, RecordsError> {
        Ok(self
            .ctx
            .db
            .career()
            .iter()
            .find(|c| c.player == player)
            .map(|c| CareerRecord {
                profession: c.profession,
                track: c.track,
            }))
    }

    fn active_boss(&self, kind: Option<BossKind>) -> Result<Option<BossRecord>, RecordsError> {
        pick_active_boss(self.ctx.db.boss().iter(), kind)
    }

    fn boss_damage(&self, player: &str, boss_id: u64) -> Result<Vec<BossDamage>, RecordsError> {
        Ok(self
            .ctx
            .db
            .boss_damage()
            .iter()
            .filter(|d| d.boss_id == boss_id && d.player == player)
            .map(|d| BossDamage {
                boss_id: d.boss_id,
                attacks: d.attacks,
                damage: d.damage,
            })
            .collect())
    }

    fn weapons(&self, player: &str, min_level: u32) -> Result<Vec<OwnedWeapon>, RecordsError> {
        Ok(self
            .ctx
            .db
            .weapon()
            .iter()
            .filter(|w| w.player == player && w.level >= min_level)
            .map(|w| OwnedWeapon {
                weapon_id: w.weapon_id,
                level: w.level,
                mods_installed: w.mods_installed,
            })
            .collect())
    }

    fn warehouse(&self, player: &str) -> Result<Vec<WarehouseItem>, RecordsError> {
        Ok(self
            .ctx
            .db
            .warehouse_item()
            .iter()
            .filter(|i| i.player == player)
            .map(|i| WarehouseItem {
                item_id: i.item_id,
                quantity: i.quantity,
                upgrades: i.upgrades,
            })
            .collect())
    }

    fn mining(&self, player: &str) -> Result<Option<MiningRecord>, RecordsError> {
        Ok(self
            .ctx
            .db
            .mining()
            .iter()
            .find(|m| m.player == player)
            .map(|m| MiningRecord {
                total_yield: m.total_yield,
            }))
    }

    fn explorations(&self, player: &str) -> Result<Vec<ExplorationRecord>, RecordsError> {
        Ok(self
            .ctx
            .db
            .exploration()
            .iter()
            .filter(|e| e.player == player)
            .map(|e| ExplorationRecord {
                successful_returns: e.successful_returns,
            })
            .collect())
    }

    fn tasks(&self, player: &str) -> Result<Vec<TaskRecord>, RecordsError> {
        Ok(self
            .ctx
            .db
            .task_progress()
            .iter()
            .filter(|t| t.player == player)
            .map(|t| TaskRecord {
                task_id: t.task_id,
                completions: t.completions,
            })
            .collect())
    }

    fn pk_profile(&self, player: &str) -> Result<Option<PkProfile>, RecordsError> {
        Ok(self
            .ctx
            .db
            .pk_profile()
            .iter()
            .find(|p| p.player == player)
            .map(|p| PkProfile {
                wins: p.wins,
                losses: p.losses,
            }))
    }

    fn station_tech(&self, player: &str) -> Result<Vec<StationTech>, RecordsError> {
        Ok(self
            .ctx
            .db
            .station_tech()
            .iter()
            .filter(|t| t.player == player)
            .map(|t| StationTech {
                tech_id: t.tech_id,
                level: t.level,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careers_logic::constants::boss_kinds;

    fn row(id: u64, kind: u8, active: bool) -> Boss {
        Boss {
            id,
            name: format!("boss {}", id),
            kind,
            active,
        }
    }

    #[test]
    fn corrupt_row_does_not_hide_overlord() {
        let rows = vec![
            row(1, 9, true),
            row(2, boss_kinds::RAIDER, false),
            row(3, boss_kinds::OVERLORD, true),
        ];
        let boss = pick_active_boss(rows.into_iter(), Some(BossKind::Overlord))
            .unwrap()
            .unwrap();
        assert_eq!(boss.id, 3);
        assert_eq!(boss.kind, BossKind::Overlord);
    }

    #[test]
    fn corrupt_row_fails_when_selected() {
        let rows = vec![row(1, 9, true), row(2, boss_kinds::OVERLORD, true)];
        let err = pick_active_boss(rows.into_iter(), None).unwrap_err();
        assert!(matches!(err, RecordsError::Corrupt { kind: "boss", .. }));
    }

    #[test]
    fn inactive_bosses_are_skipped() {
        let rows = vec![row(1, boss_kinds::RAIDER, false)];
        assert_eq!(pick_active_boss(rows.into_iter(), None), Ok(None));
    }
}
