//! Client-facing reducers for registration and eligibility checks.

use crate::store::DbRecords;
use crate::tables::*;
use careers_logic::catalog::{ProfessionCatalog, Track};
use careers_logic::engine::{Catalogs, Engine};
use careers_logic::verdict::Verdict;
use spacetimedb::{reducer, ReducerContext, Table};
use std::sync::OnceLock;

/// Compiled-in catalogs, built on first use.
fn catalogs() -> &'static Catalogs {
    static CATALOGS: OnceLock<Catalogs> = OnceLock::new();
    CATALOGS.get_or_init(Catalogs::standard)
}

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Publish the profession catalog for clients to render
#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    let professions = &catalogs().professions;
    for row in listing_rows(professions) {
        ctx.db.profession_listing().insert(row);
    }
    log::info!(
        "Profession catalog published: {} station, {} syndicate",
        professions.station.len(),
        professions.syndicate.len()
    );
}

/// One listing row per catalog entry, in track order. Names may repeat
/// across tracks; the auto-incremented id keys each row.
fn listing_rows(professions: &ProfessionCatalog) -> Vec<ProfessionListing> {
    Track::ALL
        .into_iter()
        .flat_map(move |track| {
            professions
                .track(track)
                .iter()
                .enumerate()
                .map(move |(position, d)| ProfessionListing {
                    id: 0,
                    name: d.name.clone(),
                    track: track.as_u8(),
                    position: position as u32,
                    effect: d.effect.clone(),
                    requirement: d.requirement.clone(),
                    is_transfer: d.is_transfer,
                    cost: d.cost,
                    currency: d.currency.as_u8(),
                })
        })
        .collect()
}

/// Called when a client connects
#[reducer(client_connected)]
pub fn client_connected(ctx: &ReducerContext) {
    log::info!("Client connected: {:?}", ctx.sender);
    let handle = ctx
        .db
        .player()
        .iter()
        .find(|p| p.identity == ctx.sender)
        .map(|p| p.handle);
    ctx.db.connected_player().insert(ConnectedPlayer {
        identity: ctx.sender,
        handle,
        connected_at: ctx.timestamp,
    });
}

/// Called when a client disconnects
#[reducer(client_disconnected)]
pub fn client_disconnected(ctx: &ReducerContext) {
    log::info!("Client disconnected: {:?}", ctx.sender);
    if let Some(player) = ctx.db.connected_player().identity().find(ctx.sender) {
        ctx.db.connected_player().identity().delete(player.identity);
    }
}

// ============================================================================
// PLAYER REDUCERS
// ============================================================================

/// Bind the caller to a player handle
#[reducer]
pub fn register_player(ctx: &ReducerContext, handle: String) {
    let handle = handle.trim().to_string();
    if handle.is_empty() {
        log::warn!("Rejected empty handle from {:?}", ctx.sender);
        return;
    }
    if ctx.db.player().iter().any(|p| p.handle == handle) {
        log::warn!("Handle {:?} already taken", handle);
        return;
    }
    if ctx.db.player().iter().any(|p| p.identity == ctx.sender) {
        log::warn!("Player already registered!");
        return;
    }

    ctx.db.player().insert(Player {
        handle: handle.clone(),
        identity: ctx.sender,
        registered_at: ctx.timestamp,
    });

    if let Some(mut session) = ctx.db.connected_player().identity().find(ctx.sender) {
        session.handle = Some(handle.clone());
        ctx.db.connected_player().identity().update(session);
    }

    log::info!("Player registered as {}", handle);
}

/// Evaluate one profession for the caller and record the verdict
#[reducer]
pub fn check_profession(ctx: &ReducerContext, profession: String) {
    let Some(handle) = caller_handle(ctx) else {
        log::warn!("Eligibility check from unregistered caller {:?}", ctx.sender);
        return;
    };

    let engine = Engine::new(catalogs());
    match engine.evaluate(&DbRecords::new(ctx), &profession, &handle) {
        Ok(verdict) => record_verdict(ctx, &handle, &profession, &verdict),
        Err(e) => log::error!("Eligibility check for {} failed: {}", handle, e),
    }
}

/// Evaluate every profession of a track for the caller
#[reducer]
pub fn check_track(ctx: &ReducerContext, track: u8) {
    let Some(handle) = caller_handle(ctx) else {
        log::warn!("Eligibility check from unregistered caller {:?}", ctx.sender);
        return;
    };
    let Some(track) = Track::from_u8(track) else {
        log::warn!("Unknown track {}", track);
        return;
    };

    let engine = Engine::new(catalogs());
    match engine.evaluate_track(&DbRecords::new(ctx), track, &handle) {
        Ok(verdicts) => {
            let eligible = verdicts.iter().filter(|(_, v)| v.eligible).count();
            for (d, verdict) in &verdicts {
                record_verdict(ctx, &handle, &d.name, verdict);
            }
            log::info!(
                "{} qualifies for {}/{} {:?} professions",
                handle,
                eligible,
                verdicts.len(),
                track
            );
        }
        Err(e) => log::error!("Track check for {} failed: {}", handle, e),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn caller_handle(ctx: &ReducerContext) -> Option<String> {
    ctx.db
        .connected_player()
        .identity()
        .find(ctx.sender)
        .and_then(|p| p.handle)
}

/// Replace any earlier verdict for the same (player, profession)
fn record_verdict(ctx: &ReducerContext, player: &str, profession: &str, verdict: &Verdict) {
    let stale: Vec<u64> = ctx
        .db
        .profession_verdict()
        .iter()
        .filter(|v| v.player == player && v.profession == profession)
        .map(|v| v.id)
        .collect();
    for id in stale {
        ctx.db.profession_verdict().id().delete(id);
    }

    ctx.db.profession_verdict().insert(ProfessionVerdict {
        id: 0,
        player: player.to_string(),
        profession: profession.to_string(),
        eligible: verdict.eligible,
        reason: verdict.reason.clone(),
        checked_at: ctx.timestamp,
    });

    if verdict.eligible {
        log::info!("{} is eligible for {}", player, profession);
    } else {
        log::info!("{} is not eligible for {}: {}", player, profession, verdict.reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_covers_both_tracks_in_order() {
        let professions = ProfessionCatalog::standard();
        let rows = listing_rows(&professions);
        assert_eq!(rows.len(), professions.station.len() + professions.syndicate.len());
        assert_eq!(rows[0].name, "Station recruit");
        assert_eq!(rows[0].position, 0);
        let drifter = rows.iter().find(|r| r.name == "Drifter").unwrap();
        assert_eq!(drifter.track, Track::Syndicate.as_u8());
        assert_eq!(drifter.position, 0);
    }

    #[test]
    fn shared_name_across_tracks_yields_two_rows() {
        let standard = ProfessionCatalog::standard();
        let medic = standard.find("Medic").unwrap().0.clone();
        let professions = ProfessionCatalog::new(vec![medic.clone()], vec![medic]);
        let rows = listing_rows(&professions);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].track, Track::Station.as_u8());
        assert_eq!(rows[1].track, Track::Syndicate.as_u8());
        assert!(rows.iter().all(|r| r.id == 0 && r.name == "Medic"));
    }
}
