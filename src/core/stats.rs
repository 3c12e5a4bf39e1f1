//! Stocks, production rates, and the resource pool.
//!
//! A `ResourcePool` holds eight numbers: `health` and `hull`, the three
//! tradable stocks (`material`, `energy`, `ammunition`), and one production
//! rate per tradable stock. All values are `i64`.
//!
//! The pool itself never clamps. Whether a change floors at zero is decided
//! per field by `Stat::floored` and applied by `ResourcePool::apply_delta`,
//! which is what card effects and status effects go through.

use serde::{Deserialize, Serialize};

use crate::cards::CardDefinition;

/// The three tradable resource categories.
///
/// A card's type names the stock that pays for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Material,
    Energy,
    Ammunition,
}

impl Resource {
    /// All tradable resources, in production order.
    pub const ALL: [Resource; 3] = [Resource::Material, Resource::Energy, Resource::Ammunition];

    /// The stock this resource is held in.
    #[must_use]
    pub const fn stock(self) -> Stat {
        match self {
            Resource::Material => Stat::Material,
            Resource::Energy => Stat::Energy,
            Resource::Ammunition => Stat::Ammunition,
        }
    }

    /// The production rate feeding this resource's stock.
    #[must_use]
    pub const fn production(self) -> Stat {
        match self {
            Resource::Material => Stat::MaterialProd,
            Resource::Energy => Stat::EnergyProd,
            Resource::Ammunition => Stat::AmmunitionProd,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Resource::Material => "material",
            Resource::Energy => "energy",
            Resource::Ammunition => "ammunition",
        })
    }
}

/// One numeric field of a `ResourcePool`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Health,
    Hull,
    Material,
    Energy,
    Ammunition,
    MaterialProd,
    EnergyProd,
    AmmunitionProd,
}

impl Stat {
    /// Every stat, in display order.
    pub const ALL: [Stat; 8] = [
        Stat::Health,
        Stat::Hull,
        Stat::Material,
        Stat::Energy,
        Stat::Ammunition,
        Stat::MaterialProd,
        Stat::EnergyProd,
        Stat::AmmunitionProd,
    ];

    /// Stocks checked against the win threshold.
    pub const THRESHOLD_STOCKS: [Stat; 4] =
        [Stat::Health, Stat::Material, Stat::Energy, Stat::Ammunition];

    /// Whether changes to this stat stop at zero.
    ///
    /// Health is the only unclamped field: a value at or below zero is the
    /// defeat signal and must survive until the win check sees it.
    #[must_use]
    pub const fn floored(self) -> bool {
        !matches!(self, Stat::Health)
    }

    /// Field name as used in card text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stat::Health => "health",
            Stat::Hull => "hull",
            Stat::Material => "material",
            Stat::Energy => "energy",
            Stat::Ammunition => "ammunition",
            Stat::MaterialProd => "materialProd",
            Stat::EnergyProd => "energyProd",
            Stat::AmmunitionProd => "ammunitionProd",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stocks and production rates for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePool {
    pub health: i64,
    pub hull: i64,
    pub material: i64,
    pub energy: i64,
    pub ammunition: i64,
    pub material_prod: i64,
    pub energy_prod: i64,
    pub ammunition_prod: i64,
}

impl ResourcePool {
    /// Read one field.
    #[must_use]
    pub fn get(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Health => self.health,
            Stat::Hull => self.hull,
            Stat::Material => self.material,
            Stat::Energy => self.energy,
            Stat::Ammunition => self.ammunition,
            Stat::MaterialProd => self.material_prod,
            Stat::EnergyProd => self.energy_prod,
            Stat::AmmunitionProd => self.ammunition_prod,
        }
    }

    /// Mutable access to one field. No clamping.
    pub fn get_mut(&mut self, stat: Stat) -> &mut i64 {
        match stat {
            Stat::Health => &mut self.health,
            Stat::Hull => &mut self.hull,
            Stat::Material => &mut self.material,
            Stat::Energy => &mut self.energy,
            Stat::Ammunition => &mut self.ammunition,
            Stat::MaterialProd => &mut self.material_prod,
            Stat::EnergyProd => &mut self.energy_prod,
            Stat::AmmunitionProd => &mut self.ammunition_prod,
        }
    }

    /// Overwrite one field. No clamping.
    pub fn set(&mut self, stat: Stat, value: i64) {
        *self.get_mut(stat) = value;
    }

    /// Add `delta` to a field, flooring at zero for floored stats.
    ///
    /// Returns the change actually applied.
    pub fn apply_delta(&mut self, stat: Stat, delta: i64) -> i64 {
        let field = self.get_mut(stat);
        let before = *field;
        let mut after = before.saturating_add(delta);
        if stat.floored() && delta < 0 {
            // Already-negative floored values are left alone rather than raised.
            after = after.max(before.min(0));
        }
        *field = after;
        after - before
    }

    /// Deal damage: hull absorbs first, the remainder comes off health.
    ///
    /// Returns `(hull_lost, health_lost)`.
    pub fn take_damage(&mut self, amount: i64) -> (i64, i64) {
        if amount <= 0 {
            return (0, 0);
        }
        let absorbed = amount.min(self.hull.max(0));
        self.hull -= absorbed;
        let through = amount - absorbed;
        self.health -= through;
        (absorbed, through)
    }

    /// Current stock of a tradable resource.
    #[must_use]
    pub fn stock(&self, resource: Resource) -> i64 {
        self.get(resource.stock())
    }

    /// Production rate of a tradable resource.
    #[must_use]
    pub fn production(&self, resource: Resource) -> i64 {
        self.get(resource.production())
    }

    /// Affordability: the card's cost does not exceed the stock its type selects.
    #[must_use]
    pub fn can_afford(&self, card: &CardDefinition) -> bool {
        card.cost <= self.stock(card.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn pool() -> ResourcePool {
        ResourcePool {
            health: 20,
            hull: 5,
            material: 4,
            energy: 3,
            ammunition: 2,
            material_prod: 1,
            energy_prod: 2,
            ammunition_prod: 3,
        }
    }

    #[test]
    fn test_get_and_set_every_stat() {
        let mut stats = pool();
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            stats.set(stat, 100 + i as i64);
        }
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            assert_eq!(stats.get(stat), 100 + i as i64);
        }
    }

    #[test]
    fn test_resource_mapping() {
        assert_eq!(Resource::Material.stock(), Stat::Material);
        assert_eq!(Resource::Energy.production(), Stat::EnergyProd);

        let stats = pool();
        assert_eq!(stats.stock(Resource::Ammunition), 2);
        assert_eq!(stats.production(Resource::Ammunition), 3);
    }

    #[test]
    fn test_apply_delta_floors_resources() {
        let mut stats = pool();

        let applied = stats.apply_delta(Stat::Material, -10);
        assert_eq!(applied, -4);
        assert_eq!(stats.material, 0);

        let applied = stats.apply_delta(Stat::EnergyProd, -5);
        assert_eq!(applied, -2);
        assert_eq!(stats.energy_prod, 0);
    }

    #[test]
    fn test_apply_delta_health_unclamped() {
        let mut stats = pool();
        let applied = stats.apply_delta(Stat::Health, -25);
        assert_eq!(applied, -25);
        assert_eq!(stats.health, -5);
    }

    #[test]
    fn test_take_damage_hull_first() {
        let mut stats = pool();

        assert_eq!(stats.take_damage(3), (3, 0));
        assert_eq!(stats.hull, 2);
        assert_eq!(stats.health, 20);

        assert_eq!(stats.take_damage(6), (2, 4));
        assert_eq!(stats.hull, 0);
        assert_eq!(stats.health, 16);

        assert_eq!(stats.take_damage(0), (0, 0));
    }

    #[test]
    fn test_can_afford_boundary() {
        let stats = pool();
        let exact = CardDefinition::new(CardId::new(1), "Exact", Resource::Material, 4);
        let over = CardDefinition::new(CardId::new(2), "Over", Resource::Material, 5);

        assert!(stats.can_afford(&exact));
        assert!(!stats.can_afford(&over));
    }

    #[test]
    fn test_resource_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Resource::Ammunition).unwrap(), "\"ammunition\"");
        let back: Resource = serde_json::from_str("\"material\"").unwrap();
        assert_eq!(back, Resource::Material);
    }

    #[test]
    fn test_pool_serializes_camel_case() {
        let json = serde_json::to_string(&pool()).unwrap();
        assert!(json.contains("\"materialProd\":1"));

        let back: ResourcePool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pool());
    }
}
