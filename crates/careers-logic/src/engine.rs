//! Eligibility rule engine — name-keyed dispatch over [`crate::rules`].
//!
//! The engine holds no player state. Every call re-reads the store it is
//! handed, so concurrent evaluations need no synchronization and repeated
//! calls against unchanged records return identical verdicts.
//!
//! ```
//! use careers_logic::engine::{Catalogs, Engine};
//! use careers_logic::memory::MemoryRecords;
//! use careers_logic::records::MiningRecord;
//!
//! let catalogs = Catalogs::standard();
//! let engine = Engine::new(&catalogs);
//! let mut store = MemoryRecords::new();
//! store.player_mut("ava").mining = Some(MiningRecord { total_yield: 640 });
//!
//! let verdict = engine.evaluate(&store, "Deep-space miner", "ava").unwrap();
//! assert!(verdict.eligible);
//! ```

use crate::catalog::{ProfessionCatalog, ProfessionDescriptor, Track};
use crate::records::{CareerRecord, PlayerRecords, RecordsError};
use crate::reference::ReferenceCatalog;
use crate::rules::{self, Rule, RuleContext};
use crate::verdict::Verdict;
use std::collections::HashMap;

/// Process-wide static configuration: built once, passed by reference.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub professions: ProfessionCatalog,
    pub reference: ReferenceCatalog,
}

impl Catalogs {
    pub fn new(professions: ProfessionCatalog, reference: ReferenceCatalog) -> Self {
        Self {
            professions,
            reference,
        }
    }

    pub fn standard() -> Self {
        Self::new(ProfessionCatalog::standard(), ReferenceCatalog::standard())
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::standard()
    }
}

/// Mapping from profession name to its rule.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for every profession `catalog` lists: the built-in rule for
    /// conditioned names, always-eligible for those with no requirement.
    /// Built-in rules whose name the catalog lacks are not registered.
    pub fn standard(catalog: &ProfessionCatalog) -> Self {
        const BUILT_IN: [(&str, Rule); 18] = [
            ("Deep-space miner", rules::deep_space_miner),
            ("Chief engineer", rules::chief_engineer),
            ("Guard captain", rules::guard_captain),
            ("Guard corporal", rules::guard_corporal),
            ("Weapons sergeant", rules::weapons_sergeant),
            ("Gunslinger", rules::weapons_sergeant),
            ("Captain", rules::captain),
            ("Intelligence officer", rules::intelligence_officer),
            ("Energy-weapons specialist", rules::energy_weapons_specialist),
            ("Pyromaniac", rules::pyromaniac),
            ("Crimson killer", rules::crimson_killer),
            ("Saboteur", rules::saboteur),
            ("Armorer", rules::armorer),
            ("Recruiter", rules::recruiter),
            ("Cleaner", rules::cleaner),
            ("Syndicate treasurer", rules::syndicate_treasurer),
            ("Computer specialist", rules::computer_specialist),
            ("Commander", rules::commander),
        ];

        let mut registry = Self::new();
        for (descriptor, _) in catalog.all() {
            if descriptor.is_unconditioned() {
                registry.register(&descriptor.name, rules::always_eligible);
            }
        }
        for (name, rule) in BUILT_IN {
            if catalog.find(name).is_some() {
                registry.register(name, rule);
            }
        }
        registry
    }

    /// Add or replace the rule for `name`.
    pub fn register(&mut self, name: &str, rule: Rule) -> &mut Self {
        self.rules.insert(name.to_string(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<Rule> {
        self.rules.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

pub struct Engine<'a> {
    catalogs: &'a Catalogs,
    registry: RuleRegistry,
}

impl<'a> Engine<'a> {
    /// Engine with the standard registry for `catalogs`.
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self::with_registry(catalogs, RuleRegistry::standard(&catalogs.professions))
    }

    pub fn with_registry(catalogs: &'a Catalogs, registry: RuleRegistry) -> Self {
        Self { catalogs, registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Decide whether `player` may take `profession`.
    ///
    /// An unregistered name is an ineligible verdict, not an error. Only
    /// store failures surface as `Err`.
    pub fn evaluate(
        &self,
        records: &dyn PlayerRecords,
        profession: &str,
        player: &str,
    ) -> Result<Verdict, RecordsError> {
        let Some(rule) = self.registry.get(profession) else {
            log::debug!("no rule for profession {:?}", profession);
            return Ok(Verdict::unknown_profession());
        };
        let ctx = RuleContext {
            player,
            records,
            reference: &self.catalogs.reference,
        };
        let verdict = rule(&ctx)?;
        log::debug!(
            "{} -> {}: eligible={} {}",
            player,
            profession,
            verdict.eligible,
            verdict.reason
        );
        Ok(verdict)
    }

    /// Evaluate every profession of a track, in catalog order.
    pub fn evaluate_track(
        &self,
        records: &dyn PlayerRecords,
        track: Track,
        player: &str,
    ) -> Result<Vec<(&'a ProfessionDescriptor, Verdict)>, RecordsError> {
        self.catalogs
            .professions
            .track(track)
            .iter()
            .map(|d| -> Result<_, RecordsError> {
                Ok((d, self.evaluate(records, &d.name, player)?))
            })
            .collect()
    }

    /// Professions of a track the player currently qualifies for.
    pub fn eligible_professions(
        &self,
        records: &dyn PlayerRecords,
        track: Track,
        player: &str,
    ) -> Result<Vec<&'a ProfessionDescriptor>, RecordsError> {
        Ok(self
            .evaluate_track(records, track, player)?
            .into_iter()
            .filter(|(_, v)| v.eligible)
            .map(|(d, _)| d)
            .collect())
    }

    /// The player's career record, or the station starter when none exists.
    pub fn current_career(
        &self,
        records: &dyn PlayerRecords,
        player: &str,
    ) -> Result<CareerRecord, RecordsError> {
        if let Some(career) = records.career(player)? {
            return Ok(career);
        }
        let profession = self
            .catalogs
            .professions
            .starter(Track::Station)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        Ok(CareerRecord {
            profession,
            track: Track::Station.as_u8(),
        })
    }
}
