//! The standard AstroMage card set.
//!
//! Three families, one per resource:
//!
//! - **Defense** (material): hull, repairs, material economy.
//! - **Offense** (ammunition): damage, attacks on the opponent's economy.
//! - **Power** (energy): production, status effects, big swings.

use super::definition::{CardDefinition, CardId};
use super::registry::CardRegistry;
use crate::core::Resource::{Ammunition, Energy, Material};
use crate::core::Stat::{
    Ammunition as Ammo, AmmunitionProd, Energy as En, EnergyProd, Health, Hull, Material as Mat,
    MaterialProd,
};
use crate::core::{Resource, StatusEffect, StatusKind};
use crate::effects::{CardEffect, Target};

/// Build the standard catalog.
#[must_use]
pub fn standard_catalog() -> CardRegistry {
    let mut registry = CardRegistry::new();
    let mut next_id = 0u32;
    let mut add = |name: &str, resource: Resource, cost: i64, effect: CardEffect| {
        next_id += 1;
        registry.register(
            CardDefinition::new(CardId::new(next_id), name, resource, cost).with_effect(effect),
        );
    };

    let fx = CardEffect::new;
    let status = |kind, magnitude, rounds| StatusEffect::new(kind, magnitude, rounds);

    // Defense
    add("Reinforce Hull", Material, 2, fx().caster(Hull, 4));
    add("Matter Conversion", Material, 0, fx().caster(Mat, 2).caster(En, -1));
    add("Auto-Repair", Material, 3, fx().grant(Target::Caster, status(StatusKind::Repair, 2, 3)));
    add("Prioritize Critical Systems", Material, 4, fx().caster(Health, 3).caster(Hull, -2));
    add("Ghost Ship Salvage", Material, 2, fx().caster(Mat, 3).caster(Ammo, 2));
    add("Unionize Workers", Material, 5, fx().caster(MaterialProd, 1));
    add("Sabotage Mining", Material, 4, fx().opponent(MaterialProd, -1));
    add("Space Welders", Material, 6, fx().caster(Hull, 9));
    add(
        "Matter Accumulation",
        Material,
        3,
        fx().grant(Target::Caster, status(StatusKind::Boost(Material), 2, 3)),
    );
    add("Arclight Torches", Material, 5, fx().caster(Hull, 5).damage(3));
    add("Recycle Material", Material, 1, fx().caster(Mat, 3).caster(Hull, -1));
    add("Radioactive Deposits", Material, 7, fx().caster(MaterialProd, 2).caster(Health, -3));
    add("Elemental Discoveries", Material, 8, fx().caster(Mat, 4).caster(En, 4).caster(Ammo, 4));
    add(
        "Steal Industry Secrets",
        Material,
        9,
        fx().caster(MaterialProd, 1).opponent(MaterialProd, -1),
    );
    add("Rare Ore Asteroid Mining Facility", Material, 14, fx().caster(MaterialProd, 3));

    // Offense
    add("Pulse Beam", Ammunition, 1, fx().damage(3));
    add("Kinetic Shot", Ammunition, 2, fx().damage(5));
    add("Missile Barrage", Ammunition, 6, fx().damage(10));
    add(
        "2-Stage Charge",
        Ammunition,
        4,
        fx().damage(4).grant(Target::Opponent, status(StatusKind::Corrosion, 2, 2)),
    );
    add("Recruit Pacifists", Ammunition, 3, fx().caster(AmmunitionProd, -1).caster(Health, 5));
    add("Laser Factory", Ammunition, 5, fx().caster(AmmunitionProd, 1));
    add(
        "Magnetic Accelerators",
        Ammunition,
        4,
        fx().grant(Target::Caster, status(StatusKind::Boost(Ammunition), 2, 3)),
    );
    add("Rebel Mercs", Ammunition, 5, fx().damage(6).opponent(Ammo, -2));
    add("Incinerate", Ammunition, 6, fx().grant(Target::Opponent, status(StatusKind::Burn, 2, 3)));
    add("Jam Systems", Ammunition, 4, fx().opponent(En, -4).opponent(Ammo, -2));
    add("Attack Supply Lines", Ammunition, 7, fx().opponent(Mat, -5).opponent(AmmunitionProd, -1));
    add("Advanced Weaponry", Ammunition, 9, fx().caster(AmmunitionProd, 2));
    add("Ram", Ammunition, 6, fx().damage(12).caster(Hull, -4));
    add("Photon Torpedo", Ammunition, 8, fx().opponent(Health, -6));
    add(
        "Cyber Attack",
        Ammunition,
        7,
        fx().opponent(EnergyProd, -1)
            .grant(Target::Opponent, status(StatusKind::Drain(Energy), 2, 2)),
    );
    add("Fleet General", Ammunition, 10, fx().damage(8).caster(Ammo, 4));
    add("Ultra-Marine Assault", Ammunition, 13, fx().damage(18));
    add("Titan War Engine", Ammunition, 18, fx().damage(20).opponent(MaterialProd, -1));

    // Power
    add("Quantum Generator", Energy, 5, fx().caster(EnergyProd, 1));
    add("Sensor Array", Energy, 1, fx().caster(En, 3).caster(Ammo, 1));
    add("Enhanced Logistics", Energy, 3, fx().caster(Mat, 2).caster(En, 2).caster(Ammo, 2));
    add("Force Field", Energy, 4, fx().caster(Hull, 6));
    add("Overload Reactor", Energy, 2, fx().caster(En, 8).caster(Health, -2));
    add("Life Support Systems", Energy, 4, fx().caster(Health, 4));
    add("Psy-Scout Prospecting", Energy, 6, fx().caster(Mat, 6).opponent(Mat, -2));
    add("Targeted Discharge", Energy, 5, fx().opponent(Health, -4));
    add(
        "Android Hospital",
        Energy,
        7,
        fx().grant(Target::Caster, status(StatusKind::Repair, 3, 3)).caster(Health, 2),
    );
    add("Theseus System", Energy, 8, fx().caster(Hull, 6).caster(Health, 3));
    add("Energy Weapons", Energy, 6, fx().damage(7));
    add("Sacrifice", Energy, 0, fx().caster(Health, -5).caster(En, 6).caster(Mat, 3));
    add("Ancient Knowledge", Energy, 9, fx().caster(EnergyProd, 2));
    add("Energy Leeches", Energy, 5, fx().opponent(En, -5).caster(En, 3));
    add(
        "Cosmic Dragon",
        Energy,
        16,
        fx().damage(14).grant(Target::Opponent, status(StatusKind::Burn, 3, 2)),
    );
    add("Reality Warp", Energy, 12, fx().caster(Health, 8).opponent(Health, -4));
    add(
        "E.M.P",
        Energy,
        10,
        fx().opponent(EnergyProd, -1).opponent(AmmunitionProd, -1).opponent(En, -3),
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_every_family() {
        let catalog = standard_catalog();

        assert_eq!(catalog.len(), 50);
        assert_eq!(catalog.find_by_resource(Material).count(), 15);
        assert_eq!(catalog.find_by_resource(Ammunition).count(), 18);
        assert_eq!(catalog.find_by_resource(Energy).count(), 17);
    }

    #[test]
    fn test_catalog_costs_non_negative() {
        assert!(standard_catalog().iter().all(|c| c.cost >= 0));
    }

    #[test]
    fn test_catalog_names_unique() {
        let catalog = standard_catalog();
        let mut names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_known_card() {
        let catalog = standard_catalog();
        let ram = catalog.find_by_name("Ram").unwrap();

        assert_eq!(ram.resource, Ammunition);
        assert_eq!(ram.cost, 6);
        assert_eq!(ram.effect.damage, 12);
    }
}
