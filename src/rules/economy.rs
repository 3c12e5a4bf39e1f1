//! Resource economy: per-round production.

use crate::core::{Resource, ResourcePool};

/// Add each production rate to its stock.
///
/// Purely additive: calling it twice adds the production twice. Negative
/// rates are applied as-is.
pub fn update_resources(stats: &mut ResourcePool) {
    for resource in Resource::ALL {
        let produced = stats.production(resource);
        *stats.get_mut(resource.stock()) += produced;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_adds_production() {
        let mut stats = GameConfig::DEFAULT_STARTING_STATS;
        stats.energy_prod = 4;

        update_resources(&mut stats);

        assert_eq!(stats.material, 7);
        assert_eq!(stats.energy, 9);
        assert_eq!(stats.ammunition, 7);
        assert_eq!(stats.health, 25);
        assert_eq!(stats.hull, 10);
    }

    #[test]
    fn test_twice_doubles_delta() {
        let start = GameConfig::DEFAULT_STARTING_STATS;
        let mut stats = start;

        update_resources(&mut stats);
        update_resources(&mut stats);

        for resource in Resource::ALL {
            assert_eq!(
                stats.stock(resource) - start.stock(resource),
                2 * start.production(resource)
            );
        }
    }

    #[test]
    fn test_no_clamping() {
        let mut stats = ResourcePool {
            material: -3,
            material_prod: 1,
            ..ResourcePool::default()
        };

        update_resources(&mut stats);
        assert_eq!(stats.material, -2);
    }
}
