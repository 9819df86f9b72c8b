//! Station Careers Headless Eligibility Harness
//!
//! Validates profession catalogs and eligibility rules without SpacetimeDB.
//! Runs entirely in-process — no DB, no networking.
//!
//! Usage:
//!   cargo run -p careers-simtest
//!   cargo run -p careers-simtest -- --verbose
//!   cargo run -p careers-simtest -- --fixture path/to/players.json

use careers_logic::catalog::{Track, NO_REQUIREMENT};
use careers_logic::engine::{Catalogs, Engine};
use careers_logic::memory::{MemoryRecords, PlayerSnapshot};
use careers_logic::records::{
    BossDamage, BossKind, BossRecord, ExplorationRecord, MiningRecord, OwnedWeapon, PkProfile,
    SignInRecord, StationTech, TaskRecord, WarehouseItem,
};
use careers_logic::verdict::{Denial, UNKNOWN_PROFESSION};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

// ── Sample players (same JSON the logic tests use) ──────────────────────
const FIXTURE_JSON: &str = include_str!("../../../data/sample_players.json");

/// Random players generated for the consistency sweep.
const SWEEP_PLAYERS: usize = 200;
const SWEEP_SEED: u64 = 42;

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
    #[serde(default)]
    expectations: Vec<Expectation>,
}

#[derive(Debug, Error)]
enum FixtureError {
    #[error("cannot read fixture {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("fixture JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

fn load_fixture(path: Option<&str>) -> Result<Fixture, FixtureError> {
    let json = match path {
        Some(p) => std::fs::read_to_string(p).map_err(|source| FixtureError::Io {
            path: p.to_string(),
            source,
        })?,
        None => FIXTURE_JSON.to_string(),
    };
    Ok(serde_json::from_str(&json)?)
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let fixture_path = args
        .iter()
        .position(|a| a == "--fixture")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str);
    println!("=== Station Careers Eligibility Harness ===\n");

    let catalogs = Catalogs::standard();
    let engine = Engine::new(&catalogs);
    let mut results = Vec::new();

    // 1. Catalog consistency
    results.extend(validate_catalog(&catalogs, &engine, verbose));

    // 2. Fixture expectations
    match load_fixture(fixture_path) {
        Ok(fixture) => results.extend(validate_fixture(&engine, &fixture, verbose)),
        Err(e) => results.push(TestResult {
            name: "fixture_load".into(),
            passed: false,
            detail: e.to_string(),
        }),
    }

    // 3. Random-player consistency sweep
    results.extend(validate_sweep(&catalogs, &engine, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(catalogs: &Catalogs, engine: &Engine, verbose: bool) -> Vec<TestResult> {
    println!("--- Profession Catalog ---");
    let mut results = Vec::new();
    let professions = &catalogs.professions;

    for track in Track::ALL {
        let list = professions.track(track);
        let unique: HashSet<_> = list.iter().map(|d| d.name.as_str()).collect();
        results.push(TestResult {
            name: format!("catalog_{:?}_unique_names", track).to_lowercase(),
            passed: unique.len() == list.len(),
            detail: format!("{} professions, {} unique", list.len(), unique.len()),
        });

        let wrong_currency: Vec<_> = list
            .iter()
            .filter(|d| d.currency != track.currency())
            .map(|d| d.name.as_str())
            .collect();
        results.push(TestResult {
            name: format!("catalog_{:?}_currency", track).to_lowercase(),
            passed: wrong_currency.is_empty(),
            detail: if wrong_currency.is_empty() {
                format!("all priced in {}", track.currency().label())
            } else {
                format!("wrong currency: {}", wrong_currency.join(", "))
            },
        });

        if verbose {
            for d in list {
                println!("  [{:?}] {:<28} {:>14}  {}", track, d.name, d.cost_label(), d.requirement);
            }
        }
    }

    let unregistered: Vec<_> = professions
        .all()
        .filter(|(d, _)| !engine.registry().contains(&d.name))
        .map(|(d, _)| d.name.as_str())
        .collect();
    results.push(TestResult {
        name: "catalog_all_registered".into(),
        passed: unregistered.is_empty(),
        detail: if unregistered.is_empty() {
            format!("{} rules registered", engine.registry().names().len())
        } else {
            format!("no rule for: {}", unregistered.join(", "))
        },
    });

    let starters_ok = Track::ALL.iter().all(|&t| {
        professions
            .starter(t)
            .is_some_and(|d| d.cost == 0 && d.requirement == NO_REQUIREMENT)
    });
    results.push(TestResult {
        name: "catalog_free_starters".into(),
        passed: starters_ok,
        detail: "both tracks open with a free, unconditioned profession".into(),
    });

    results
}

// ── 2. Fixture ──────────────────────────────────────────────────────────

fn validate_fixture(engine: &Engine, fixture: &Fixture, verbose: bool) -> Vec<TestResult> {
    println!("--- Sample Players ---");
    let mut results = Vec::new();

    for exp in &fixture.expectations {
        let name = format!("{}_{}", exp.player, exp.profession.replace(' ', "_")).to_lowercase();
        match engine.evaluate(&fixture.records, &exp.profession, &exp.player) {
            Ok(v) => results.push(TestResult {
                name,
                passed: v.eligible == exp.eligible,
                detail: if v.eligible {
                    "eligible".into()
                } else {
                    v.reason
                },
            }),
            Err(e) => results.push(TestResult {
                name,
                passed: false,
                detail: e.to_string(),
            }),
        }
    }

    if verbose {
        let mut handles: Vec<_> = fixture.records.players.keys().collect();
        handles.sort();
        for handle in handles {
            let Ok(career) = engine.current_career(&fixture.records, handle) else {
                continue;
            };
            let Ok(open) = engine.eligible_professions(&fixture.records, Track::Station, handle)
            else {
                continue;
            };
            println!(
                "  {} ({}): {} station professions open",
                handle,
                career.profession,
                open.len()
            );
        }
    }

    results
}

// ── 3. Sweep ────────────────────────────────────────────────────────────

fn random_player(rng: &mut StdRng, catalogs: &Catalogs) -> PlayerSnapshot {
    let weapon_ids: Vec<u32> = catalogs.reference.weapons.iter().map(|w| w.id).collect();
    let item_ids: Vec<u32> = catalogs.reference.items.iter().map(|i| i.id).collect();

    PlayerSnapshot {
        sign_in: rng.gen_bool(0.8).then(|| SignInRecord {
            monthly_count: rng.gen_range(0..=31),
        }),
        career: None,
        boss_damage: (0..rng.gen_range(0..3))
            .map(|_| BossDamage {
                boss_id: rng.gen_range(1..=2),
                attacks: rng.gen_range(0..6),
                damage: rng.gen_range(0..200),
            })
            .collect(),
        weapons: (0..rng.gen_range(0..4))
            .map(|_| OwnedWeapon {
                weapon_id: weapon_ids[rng.gen_range(0..weapon_ids.len())],
                level: rng.gen_range(0..10),
                mods_installed: rng.gen_range(0..5),
            })
            .collect(),
        warehouse: (0..rng.gen_range(0..4))
            .map(|_| WarehouseItem {
                item_id: item_ids[rng.gen_range(0..item_ids.len())],
                quantity: rng.gen_range(-1..5),
                upgrades: rng.gen_range(0..7),
            })
            .collect(),
        mining: rng.gen_bool(0.7).then(|| MiningRecord {
            total_yield: rng.gen_range(0..1000),
        }),
        explorations: (0..rng.gen_range(0..4))
            .map(|_| ExplorationRecord {
                successful_returns: rng.gen_range(0..3),
            })
            .collect(),
        tasks: (0..rng.gen_range(0..4))
            .map(|i| TaskRecord {
                task_id: i,
                completions: rng.gen_range(0..3),
            })
            .collect(),
        pk: rng.gen_bool(0.6).then(|| PkProfile {
            wins: rng.gen_range(0..40),
            losses: rng.gen_range(0..40),
        }),
        station_tech: (0..rng.gen_range(0..3))
            .map(|i| StationTech {
                tech_id: i,
                level: rng.gen_range(0..8),
            })
            .collect(),
    }
}

fn validate_sweep(catalogs: &Catalogs, engine: &Engine, verbose: bool) -> Vec<TestResult> {
    println!("--- Random Player Sweep ---");
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED);
    let mut records = MemoryRecords::new().with_boss(BossRecord {
        id: 2,
        name: "Hollow King".into(),
        kind: BossKind::Overlord,
        active: rng.gen_bool(0.5),
    });
    for i in 0..SWEEP_PLAYERS {
        let snapshot = random_player(&mut rng, catalogs);
        records = records.with_player(&format!("p{:03}", i), snapshot);
    }

    let mut evaluations = 0usize;
    let mut eligible = 0usize;
    let mut store_errors = 0usize;
    let mut reason_mismatch = 0usize;
    let mut nondeterministic = 0usize;
    let mut leaderboard_denials = 0usize;

    for handle in records.players.keys() {
        for (d, _) in catalogs.professions.all() {
            let (Ok(first), Ok(second)) = (
                engine.evaluate(&records, &d.name, handle),
                engine.evaluate(&records, &d.name, handle),
            ) else {
                store_errors += 1;
                continue;
            };
            evaluations += 1;
            if first.eligible {
                eligible += 1;
            }
            if first.reason.is_empty() != first.eligible {
                reason_mismatch += 1;
            }
            if first != second {
                nondeterministic += 1;
            }
            if first.denial == Some(Denial::NoActiveLeaderboard) {
                leaderboard_denials += 1;
            }
        }
    }

    if verbose {
        println!(
            "  {} evaluations, {} eligible, {} no-leaderboard denials",
            evaluations, eligible, leaderboard_denials
        );
    }

    let unknown = engine.evaluate(&records, "Quantum bard", "p000");
    let unknown_ok = matches!(&unknown, Ok(v) if !v.eligible && v.reason == UNKNOWN_PROFESSION);

    vec![
        TestResult {
            name: "sweep_no_store_errors".into(),
            passed: store_errors == 0,
            detail: format!("{} store errors", store_errors),
        },
        TestResult {
            name: "sweep_reason_iff_ineligible".into(),
            passed: reason_mismatch == 0,
            detail: format!("{}/{} verdicts consistent", evaluations - reason_mismatch, evaluations),
        },
        TestResult {
            name: "sweep_deterministic".into(),
            passed: nondeterministic == 0,
            detail: format!("{} differing repeat evaluations", nondeterministic),
        },
        TestResult {
            name: "sweep_unknown_profession".into(),
            passed: unknown_ok,
            detail: "unrecognized names are rejected with a fixed reason".into(),
        },
    ]
}
