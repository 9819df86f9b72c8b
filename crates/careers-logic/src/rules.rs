//! Per-profession eligibility rules.
//!
//! Each rule is a plain function over a [`RuleContext`]: it reads only the
//! record slices it needs, folds them to a single number (sum, count, or
//! existence), and compares that against a fixed inclusive threshold. The
//! thresholds below are authoritative; catalog requirement text is never
//! parsed.
//!
//! Rules are registered by name in [`crate::engine::RuleRegistry`] but can
//! be called directly, which is how the tests below exercise them.
//!
//! | Rule | Reads | Condition |
//! |------|-------|-----------|
//! | [`deep_space_miner`] | mining | yield ≥ 500 |
//! | [`chief_engineer`] | explorations | Σ returns ≥ 4 |
//! | [`guard_captain`] | active overlord, damage | Σ attacks ≥ 4 |
//! | [`guard_corporal`] | active boss, damage | Σ damage ≥ 100 |
//! | [`weapons_sergeant`] | weapons | any level ≥ 6 |
//! | [`captain`] | tasks | Σ completions ≥ 4 |
//! | [`intelligence_officer`] | station tech | any level ≥ 5 |
//! | [`energy_weapons_specialist`] | weapons (level ≥ 3) | any energy |
//! | [`pyromaniac`] | weapons (level ≥ 3) | any thermal |
//! | [`crimson_killer`] | weapons | owns scout rifle |
//! | [`saboteur`] | warehouse | any explosive row, whatever its quantity |
//! | [`armorer`] | weapons | any with ≥ 3 mods |
//! | [`recruiter`] | PK profile | wins ≥ 20 |
//! | [`cleaner`] | active boss, damage | Σ attacks ≥ 4 |
//! | [`syndicate_treasurer`] | sign-in | monthly count ≥ 14 |
//! | [`computer_specialist`] | warehouse | any purchasable device, quantity > 0 |
//! | [`commander`] | warehouse | any with ≥ 5 upgrades |

use crate::constants::weapon_ids;
use crate::records::{BossKind, PlayerRecords, RecordsError};
use crate::reference::{ItemType, ReferenceCatalog, WeaponCategory};
use crate::verdict::Verdict;

pub const MINING_YIELD_REQUIRED: u64 = 500;
pub const EXPLORATION_RETURNS_REQUIRED: u64 = 4;
pub const OVERLORD_ATTACKS_REQUIRED: u64 = 4;
pub const BOSS_DAMAGE_REQUIRED: u64 = 100;
pub const BOSS_ATTACKS_REQUIRED: u64 = 4;
pub const SERGEANT_WEAPON_LEVEL: u32 = 6;
pub const TASK_COMPLETIONS_REQUIRED: u64 = 4;
pub const STATION_TECH_LEVEL: u32 = 5;
/// Weapons below this level are ignored by category rules.
pub const CATEGORY_WEAPON_MIN_LEVEL: u32 = 3;
pub const ARMORER_MODS_REQUIRED: u32 = 3;
pub const PK_WINS_REQUIRED: u64 = 20;
pub const MONTHLY_SIGN_INS_REQUIRED: u64 = 14;
pub const COMMANDER_UPGRADES_REQUIRED: u32 = 5;

/// What a rule may read during one evaluation.
pub struct RuleContext<'a> {
    pub player: &'a str,
    pub records: &'a dyn PlayerRecords,
    pub reference: &'a ReferenceCatalog,
}

/// A registered eligibility rule.
pub type Rule = fn(&RuleContext<'_>) -> Result<Verdict, RecordsError>;

/// Professions with no listed requirement.
pub fn always_eligible(_: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    Ok(Verdict::eligible())
}

pub fn deep_space_miner(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let total = ctx
        .records
        .mining(ctx.player)?
        .map_or(0, |m| m.total_yield);
    Ok(Verdict::at_least(
        "lifetime mining yield",
        total,
        MINING_YIELD_REQUIRED,
    ))
}

pub fn chief_engineer(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let returns: u64 = ctx
        .records
        .explorations(ctx.player)?
        .iter()
        .map(|e| u64::from(e.successful_returns))
        .sum();
    Ok(Verdict::at_least(
        "successful exploration returns",
        returns,
        EXPLORATION_RETURNS_REQUIRED,
    ))
}

pub fn guard_captain(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let Some(boss) = ctx.records.active_boss(Some(BossKind::Overlord))? else {
        return Ok(Verdict::no_active_leaderboard());
    };
    let attacks = total_attacks(ctx, boss.id)?;
    Ok(Verdict::at_least(
        "attacks on the active overlord",
        attacks,
        OVERLORD_ATTACKS_REQUIRED,
    ))
}

pub fn guard_corporal(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let Some(boss) = ctx.records.active_boss(None)? else {
        return Ok(Verdict::no_active_leaderboard());
    };
    let damage: u64 = ctx
        .records
        .boss_damage(ctx.player, boss.id)?
        .iter()
        .map(|d| d.damage)
        .sum();
    Ok(Verdict::at_least(
        "damage dealt to the active boss",
        damage,
        BOSS_DAMAGE_REQUIRED,
    ))
}

/// Also registered for the syndicate gunslinger.
pub fn weapons_sergeant(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let count = ctx
        .records
        .weapons(ctx.player, 0)?
        .iter()
        .filter(|w| w.level >= SERGEANT_WEAPON_LEVEL)
        .count();
    Ok(Verdict::at_least(
        "weapons at level 6 or higher",
        count as u64,
        1,
    ))
}

pub fn captain(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let completions: u64 = ctx
        .records
        .tasks(ctx.player)?
        .iter()
        .map(|t| u64::from(t.completions))
        .sum();
    Ok(Verdict::at_least(
        "completed tasks",
        completions,
        TASK_COMPLETIONS_REQUIRED,
    ))
}

pub fn intelligence_officer(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let count = ctx
        .records
        .station_tech(ctx.player)?
        .iter()
        .filter(|t| t.level >= STATION_TECH_LEVEL)
        .count();
    Ok(Verdict::at_least(
        "station tech at level 5 or higher",
        count as u64,
        1,
    ))
}

pub fn energy_weapons_specialist(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    owns_weapon_category(ctx, WeaponCategory::Energy)
}

pub fn pyromaniac(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    owns_weapon_category(ctx, WeaponCategory::Thermal)
}

pub fn crimson_killer(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let count = ctx
        .records
        .weapons(ctx.player, 0)?
        .iter()
        .filter(|w| w.weapon_id == weapon_ids::SCOUT_RIFLE)
        .count();
    Ok(Verdict::at_least("scout rifles owned", count as u64, 1))
}

/// Row presence is enough: the quantity is never consulted.
pub fn saboteur(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let explosives = ctx
        .reference
        .items_where(|i| i.item_type == ItemType::Explosive);
    let count = ctx
        .records
        .warehouse(ctx.player)?
        .iter()
        .filter(|i| explosives.contains(&i.item_id))
        .count();
    Ok(Verdict::at_least("explosives in warehouse", count as u64, 1))
}

pub fn armorer(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let count = ctx
        .records
        .weapons(ctx.player, 0)?
        .iter()
        .filter(|w| w.mods_installed >= ARMORER_MODS_REQUIRED)
        .count();
    Ok(Verdict::at_least(
        "weapons with 3 or more mods installed",
        count as u64,
        1,
    ))
}

pub fn recruiter(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let wins = ctx.records.pk_profile(ctx.player)?.map_or(0, |p| p.wins);
    Ok(Verdict::at_least("PK wins", u64::from(wins), PK_WINS_REQUIRED))
}

pub fn cleaner(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let Some(boss) = ctx.records.active_boss(None)? else {
        return Ok(Verdict::no_active_leaderboard());
    };
    let attacks = total_attacks(ctx, boss.id)?;
    Ok(Verdict::at_least(
        "attacks on the active boss",
        attacks,
        BOSS_ATTACKS_REQUIRED,
    ))
}

pub fn syndicate_treasurer(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let count = ctx
        .records
        .sign_in(ctx.player)?
        .map_or(0, |s| s.monthly_count);
    Ok(Verdict::at_least(
        "sign-ins this month",
        u64::from(count),
        MONTHLY_SIGN_INS_REQUIRED,
    ))
}

pub fn computer_specialist(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let devices = ctx
        .reference
        .items_where(|i| i.item_type == ItemType::Device && i.cost > 0);
    let count = ctx
        .records
        .warehouse(ctx.player)?
        .iter()
        .filter(|i| devices.contains(&i.item_id) && i.quantity > 0)
        .count();
    Ok(Verdict::at_least(
        "purchasable devices in warehouse",
        count as u64,
        1,
    ))
}

pub fn commander(ctx: &RuleContext<'_>) -> Result<Verdict, RecordsError> {
    let count = ctx
        .records
        .warehouse(ctx.player)?
        .iter()
        .filter(|i| i.upgrades >= COMMANDER_UPGRADES_REQUIRED)
        .count();
    Ok(Verdict::at_least(
        "items upgraded 5 or more times",
        count as u64,
        1,
    ))
}

fn total_attacks(ctx: &RuleContext<'_>, boss_id: u64) -> Result<u64, RecordsError> {
    Ok(ctx
        .records
        .boss_damage(ctx.player, boss_id)?
        .iter()
        .map(|d| u64::from(d.attacks))
        .sum())
}

/// Weapons with no catalog entry never match.
fn owns_weapon_category(
    ctx: &RuleContext<'_>,
    category: WeaponCategory,
) -> Result<Verdict, RecordsError> {
    let count = ctx
        .records
        .weapons(ctx.player, CATEGORY_WEAPON_MIN_LEVEL)?
        .iter()
        .filter(|w| ctx.reference.weapon_category(w.weapon_id) == Some(category))
        .count();
    Ok(Verdict::at_least(
        &format!("level 3+ {}s owned", category.label()),
        count as u64,
        1,
    ))
}
