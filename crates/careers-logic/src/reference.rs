//! Weapon and item reference data.
//!
//! Static classification tables consulted by rules that need to know what
//! kind of weapon or item a player owns. Entries are matched by value and
//! never mutated; an identifier with no entry simply matches nothing.

use crate::constants::{item_ids, weapon_ids};
use serde::{Deserialize, Serialize};

/// Weapon classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    Kinetic,
    Energy,
    Thermal,
    Melee,
}

impl WeaponCategory {
    /// Display label used in verdict messages.
    pub fn label(self) -> &'static str {
        match self {
            WeaponCategory::Kinetic => "kinetic weapon",
            WeaponCategory::Energy => "energy weapon",
            WeaponCategory::Thermal => "thermal weapon",
            WeaponCategory::Melee => "melee weapon",
        }
    }
}

/// Item classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Material,
    Consumable,
    Explosive,
    /// Devices and tools.
    Device,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponDef {
    pub id: u32,
    pub name: String,
    pub category: WeaponCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: u32,
    pub name: String,
    pub item_type: ItemType,
    /// Shop price in credits. Zero means the item cannot be bought.
    pub cost: u32,
}

/// Weapon and item definitions, queried by value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    pub weapons: Vec<WeaponDef>,
    pub items: Vec<ItemDef>,
}

impl ReferenceCatalog {
    pub fn new(weapons: Vec<WeaponDef>, items: Vec<ItemDef>) -> Self {
        Self { weapons, items }
    }

    pub fn weapon(&self, id: u32) -> Option<&WeaponDef> {
        self.weapons.iter().find(|w| w.id == id)
    }

    pub fn item(&self, id: u32) -> Option<&ItemDef> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Category of a weapon type, or `None` for an unknown identifier.
    pub fn weapon_category(&self, id: u32) -> Option<WeaponCategory> {
        self.weapon(id).map(|w| w.category)
    }

    /// Identifiers of every item satisfying `pred`, in catalog order.
    pub fn items_where(&self, pred: impl Fn(&ItemDef) -> bool) -> Vec<u32> {
        self.items.iter().filter(|i| pred(i)).map(|i| i.id).collect()
    }

    /// The compiled-in reference tables.
    pub fn standard() -> Self {
        use ItemType as It;
        use WeaponCategory as Wc;

        let weapon = |id: u32, name: &str, category: WeaponCategory| WeaponDef {
            id,
            name: name.to_string(),
            category,
        };
        let item = |id: u32, name: &str, item_type: ItemType, cost: u32| ItemDef {
            id,
            name: name.to_string(),
            item_type,
            cost,
        };

        Self {
            weapons: vec![
                weapon(weapon_ids::SIDEARM, "Sidearm", Wc::Kinetic),
                weapon(weapon_ids::SCOUT_RIFLE, "Scout rifle", Wc::Kinetic),
                weapon(weapon_ids::AUTOCANNON, "Autocannon", Wc::Kinetic),
                weapon(weapon_ids::RAILGUN, "Railgun", Wc::Kinetic),
                weapon(weapon_ids::PULSE_PISTOL, "Pulse pistol", Wc::Energy),
                weapon(weapon_ids::ION_CARBINE, "Ion carbine", Wc::Energy),
                weapon(weapon_ids::PLASMA_LANCE, "Plasma lance", Wc::Energy),
                weapon(weapon_ids::FLAMER, "Flamer", Wc::Thermal),
                weapon(weapon_ids::THERMAL_PROJECTOR, "Thermal projector", Wc::Thermal),
                weapon(weapon_ids::MAGMA_CANNON, "Magma cannon", Wc::Thermal),
                weapon(weapon_ids::SHOCK_BATON, "Shock baton", Wc::Melee),
                weapon(weapon_ids::VIBRO_BLADE, "Vibro blade", Wc::Melee),
            ],
            items: vec![
                item(item_ids::ORE_CHUNK, "Ore chunk", It::Material, 5),
                item(item_ids::ALLOY_PLATE, "Alloy plate", It::Material, 40),
                item(item_ids::MED_PATCH, "Med patch", It::Consumable, 25),
                item(item_ids::RATION_PACK, "Ration pack", It::Consumable, 10),
                item(item_ids::BREACH_CHARGE, "Breach charge", It::Explosive, 120),
                item(item_ids::FRAG_GRENADE, "Frag grenade", It::Explosive, 60),
                item(item_ids::SALVAGED_MINE, "Salvaged mine", It::Explosive, 0),
                item(item_ids::HACKING_RIG, "Hacking rig", It::Device, 300),
                item(item_ids::SIGNAL_JAMMER, "Signal jammer", It::Device, 180),
                item(item_ids::CRACKED_DATAPAD, "Cracked datapad", It::Device, 0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scout_rifle_is_catalogued() {
        let reference = ReferenceCatalog::standard();
        let rifle = reference.weapon(weapon_ids::SCOUT_RIFLE).unwrap();
        assert_eq!(rifle.name, "Scout rifle");
        assert_eq!(reference.item(item_ids::HACKING_RIG).map(|i| i.cost), Some(300));
    }

    #[test]
    fn unknown_weapon_has_no_category() {
        let reference = ReferenceCatalog::standard();
        assert_eq!(reference.weapon_category(9999), None);
        assert_eq!(
            reference.weapon_category(weapon_ids::FLAMER),
            Some(WeaponCategory::Thermal)
        );
    }

    #[test]
    fn explosive_set_includes_free_items() {
        let reference = ReferenceCatalog::standard();
        let explosives = reference.items_where(|i| i.item_type == ItemType::Explosive);
        assert_eq!(explosives.len(), 3);
        assert!(explosives.contains(&item_ids::SALVAGED_MINE));
    }

    #[test]
    fn purchasable_devices_exclude_zero_cost() {
        let reference = ReferenceCatalog::standard();
        let devices = reference.items_where(|i| i.item_type == ItemType::Device && i.cost > 0);
        assert_eq!(devices, vec![item_ids::HACKING_RIG, item_ids::SIGNAL_JAMMER]);
    }
}
