//! Integration tests for catalog → registry → rule evaluation.
//!
//! Exercises the engine end to end against the shared sample fixture and
//! checks the dispatch-level properties every profession must honour.
//!
//! All tests are pure logic — no SpacetimeDB.

use careers_logic::catalog::Track;
use careers_logic::engine::{Catalogs, Engine};
use careers_logic::memory::MemoryRecords;
use careers_logic::records::*;
use careers_logic::verdict::{Denial, NO_ACTIVE_LEADERBOARD, UNKNOWN_PROFESSION};
use proptest::prelude::*;
use serde::Deserialize;

const FIXTURE_JSON: &str = include_str!("../../../data/sample_players.json");

#[derive(Debug, Deserialize)]
struct Expectation {
    player: String,
    profession: String,
    eligible: bool,
}

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(flatten)]
    records: MemoryRecords,
    expectations: Vec<Expectation>,
}

// ── Helpers ────────────────────────────────────────────────────────────

fn fixture() -> Fixture {
    serde_json::from_str(FIXTURE_JSON).expect("fixture parses")
}

fn player(records: &mut MemoryRecords, build: impl FnOnce(&mut careers_logic::memory::PlayerSnapshot)) {
    build(records.player_mut("ava"));
}

// ── Fixture ────────────────────────────────────────────────────────────

#[test]
fn fixture_expectations_hold() {
    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let fixture = fixture();

    for exp in &fixture.expectations {
        let v = engine
            .evaluate(&fixture.records, &exp.profession, &exp.player)
            .unwrap();
        assert_eq!(
            v.eligible, exp.eligible,
            "{} / {}: {}",
            exp.player, exp.profession, v.reason
        );
    }
}

#[test]
fn reason_empty_iff_eligible() {
    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let fixture = fixture();

    for handle in fixture.records.players.keys() {
        for (d, _) in catalogs.professions.all() {
            let v = engine.evaluate(&fixture.records, &d.name, handle).unwrap();
            assert_eq!(v.reason.is_empty(), v.eligible, "{} / {}", handle, d.name);
        }
    }
}

// ── Boundaries ─────────────────────────────────────────────────────────

#[test]
fn miner_boundary() {
    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let mut records = MemoryRecords::new();

    player(&mut records, |p| p.mining = Some(MiningRecord { total_yield: 499 }));
    let v = engine.evaluate(&records, "Deep-space miner", "ava").unwrap();
    assert!(!v.eligible);
    assert!(v.reason.contains("499"));

    player(&mut records, |p| p.mining = Some(MiningRecord { total_yield: 500 }));
    let v = engine.evaluate(&records, "Deep-space miner", "ava").unwrap();
    assert!(v.eligible);
    assert_eq!(v.reason, "");
}

#[test]
fn sergeant_levels() {
    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let mut records = MemoryRecords::new();
    let at = |level| OwnedWeapon {
        weapon_id: 100,
        level,
        mods_installed: 0,
    };

    player(&mut records, |p| p.weapons = vec![at(2), at(5), at(6)]);
    assert!(engine.evaluate(&records, "Weapons sergeant", "ava").unwrap().eligible);

    player(&mut records, |p| p.weapons = vec![at(2), at(5)]);
    assert!(!engine.evaluate(&records, "Weapons sergeant", "ava").unwrap().eligible);
}

#[test]
fn armorer_mods() {
    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let mut records = MemoryRecords::new();
    let modded = |mods_installed| OwnedWeapon {
        weapon_id: 100,
        level: 1,
        mods_installed,
    };

    player(&mut records, |p| p.weapons = vec![modded(3)]);
    assert!(engine.evaluate(&records, "Armorer", "ava").unwrap().eligible);
    player(&mut records, |p| p.weapons = vec![modded(2)]);
    assert!(!engine.evaluate(&records, "Armorer", "ava").unwrap().eligible);
}

#[test]
fn treasurer_sign_ins() {
    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let mut records = MemoryRecords::new();

    player(&mut records, |p| p.sign_in = Some(SignInRecord { monthly_count: 13 }));
    let v = engine.evaluate(&records, "Syndicate treasurer", "ava").unwrap();
    assert!(!v.eligible);
    assert!(v.reason.contains("13"));

    player(&mut records, |p| p.sign_in = Some(SignInRecord { monthly_count: 14 }));
    assert!(engine.evaluate(&records, "Syndicate treasurer", "ava").unwrap().eligible);
}

#[test]
fn boss_rules_without_active_boss() {
    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let mut records = MemoryRecords::new().with_boss(BossRecord {
        id: 1,
        name: "Rust Maw".into(),
        kind: BossKind::Raider,
        active: false,
    });
    player(&mut records, |p| {
        p.boss_damage = vec![BossDamage {
            boss_id: 1,
            attacks: 40,
            damage: 4000,
        }]
    });

    for name in ["Guard corporal", "Cleaner"] {
        let v = engine.evaluate(&records, name, "ava").unwrap();
        assert!(!v.eligible);
        assert_eq!(v.reason, NO_ACTIVE_LEADERBOARD);
        assert_eq!(v.denial, Some(Denial::NoActiveLeaderboard));
    }
}

#[test]
fn eligible_listing_for_fixture_player() {
    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let fixture = fixture();

    let names: Vec<_> = engine
        .eligible_professions(&fixture.records, Track::Station, "kestrel")
        .unwrap()
        .into_iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Station recruit",
            "Medic",
            "Deep-space miner",
            "Weapons sergeant",
            "Intelligence officer",
            "Computer specialist",
        ]
    );
}

// ── Properties ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unknown_names_always_rejected(name in "[a-z ]{1,24}", handle in "[a-z]{1,8}") {
        let catalogs = Catalogs::standard();
        let engine = Engine::new(&catalogs);
        prop_assume!(catalogs.professions.find(&name).is_none());
        let v = engine.evaluate(&fixture().records, &name, &handle).unwrap();
        prop_assert!(!v.eligible);
        prop_assert_eq!(v.reason, UNKNOWN_PROFESSION);
    }

    #[test]
    fn evaluation_is_idempotent(
        yield_total in 0u64..1000,
        wins in 0u32..40,
        sign_ins in 0u32..31,
        levels in proptest::collection::vec(0u32..10, 0..5),
    ) {
        let catalogs = Catalogs::standard();
        let engine = Engine::new(&catalogs);
        let mut records = MemoryRecords::new();
        player(&mut records, |p| {
            p.mining = Some(MiningRecord { total_yield: yield_total });
            p.pk = Some(PkProfile { wins, losses: 0 });
            p.sign_in = Some(SignInRecord { monthly_count: sign_ins });
            p.weapons = levels
                .iter()
                .map(|&level| OwnedWeapon { weapon_id: 200, level, mods_installed: level / 2 })
                .collect();
        });

        for (d, _) in catalogs.professions.all() {
            let first = engine.evaluate(&records, &d.name, "ava").unwrap();
            let second = engine.evaluate(&records, &d.name, "ava").unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
