//! Run configuration for the store model.

use serde::{Deserialize, Serialize};

use crate::model::ModelError;

/// Tunable parameters for one simulated store.
///
/// A driver normally varies `refill_factor` (and sometimes `days_to_run`)
/// between runs while leaving the store constants at their defaults. A new
/// configuration is applied through [`crate::SimpleShopModel::configure`],
/// which only accepts it between a reset and the next run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Restocking aggressiveness: the stock target is `rating * refill_factor`.
    pub refill_factor: f64,
    /// Length of one simulated run, in days.
    pub days_to_run: u32,
    /// Reputation the store opens with, in stars on the 1-5 scale.
    pub rating: f64,
    /// Number of boxes on the shelf. Never resized during a model's lifetime.
    pub boxes_count: usize,
    /// Units one box holds when full.
    pub box_capacity: u32,
    /// Days a refilled box lasts before its contents spoil.
    pub shelf_life: u32,
    /// What we pay per unit.
    pub item_cost: i64,
    /// What we charge per unit.
    pub item_price: i64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            refill_factor: 1.0,
            days_to_run: 100,
            rating: 5.0,
            boxes_count: 5,
            box_capacity: 10,
            shelf_life: 3,
            item_cost: 100,
            item_price: 150,
        }
    }
}

impl ShopConfig {
    /// Default store constants with the two knobs a driver usually turns.
    pub fn with_factor(refill_factor: f64, days_to_run: u32) -> Self {
        ShopConfig {
            refill_factor,
            days_to_run,
            ..ShopConfig::default()
        }
    }

    /// Cost of restocking one whole box.
    pub fn box_cost(&self) -> i64 {
        i64::from(self.box_capacity) * self.item_cost
    }

    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.refill_factor.is_finite() || self.refill_factor < 0.0 {
            return Err(ModelError::InvalidConfig {
                field: "refill_factor",
                reason: "must be finite and non-negative",
            });
        }
        if self.days_to_run == 0 {
            return Err(ModelError::InvalidConfig {
                field: "days_to_run",
                reason: "must be at least 1",
            });
        }
        if !(1.0..=5.0).contains(&self.rating) {
            return Err(ModelError::InvalidConfig {
                field: "rating",
                reason: "must lie in [1, 5]",
            });
        }
        if self.boxes_count == 0 {
            return Err(ModelError::InvalidConfig {
                field: "boxes_count",
                reason: "must be at least 1",
            });
        }
        if self.box_capacity == 0 {
            return Err(ModelError::InvalidConfig {
                field: "box_capacity",
                reason: "must be at least 1",
            });
        }
        if self.shelf_life == 0 {
            return Err(ModelError::InvalidConfig {
                field: "shelf_life",
                reason: "must be at least 1",
            });
        }
        if self.item_cost <= 0 {
            return Err(ModelError::InvalidConfig {
                field: "item_cost",
                reason: "must be positive",
            });
        }
        if self.item_price <= 0 {
            return Err(ModelError::InvalidConfig {
                field: "item_price",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        assert!(ShopConfig::default().validate().is_ok());
    }

    #[test]
    fn with_factor_keeps_store_constants() {
        let config = ShopConfig::with_factor(6.0, 10);
        assert_eq!(config.refill_factor, 6.0);
        assert_eq!(config.days_to_run, 10);
        assert_eq!(config.boxes_count, 5);
        assert_eq!(config.box_capacity, 10);
        assert_eq!(config.shelf_life, 3);
        assert_eq!(config.box_cost(), 1_000);
    }

    #[test]
    fn out_of_domain_fields_are_rejected() {
        let cases: Vec<(&str, ShopConfig)> = vec![
            (
                "refill_factor",
                ShopConfig {
                    refill_factor: f64::NAN,
                    ..ShopConfig::default()
                },
            ),
            (
                "refill_factor",
                ShopConfig {
                    refill_factor: -1.0,
                    ..ShopConfig::default()
                },
            ),
            (
                "days_to_run",
                ShopConfig {
                    days_to_run: 0,
                    ..ShopConfig::default()
                },
            ),
            (
                "rating",
                ShopConfig {
                    rating: 0.5,
                    ..ShopConfig::default()
                },
            ),
            (
                "rating",
                ShopConfig {
                    rating: 5.5,
                    ..ShopConfig::default()
                },
            ),
            (
                "boxes_count",
                ShopConfig {
                    boxes_count: 0,
                    ..ShopConfig::default()
                },
            ),
            (
                "box_capacity",
                ShopConfig {
                    box_capacity: 0,
                    ..ShopConfig::default()
                },
            ),
            (
                "shelf_life",
                ShopConfig {
                    shelf_life: 0,
                    ..ShopConfig::default()
                },
            ),
            (
                "item_cost",
                ShopConfig {
                    item_cost: 0,
                    ..ShopConfig::default()
                },
            ),
            (
                "item_price",
                ShopConfig {
                    item_price: -150,
                    ..ShopConfig::default()
                },
            ),
        ];

        for (expected_field, config) in cases {
            match config.validate() {
                Err(ModelError::InvalidConfig { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected {expected_field} rejection, got {other:?}"),
            }
        }
    }
}
