//! Statistics over repeated seeded runs of one configuration.

use serde::Serialize;

use crate::config::ShopConfig;
use crate::model::{Model, ModelError};
use crate::shop::SimpleShopModel;

/// Revenue spread across a batch of trials.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueStats {
    pub trials: usize,
    pub mean_revenue: f64,
    pub std_dev_revenue: f64,
    pub min_revenue: i64,
    pub max_revenue: i64,
}

/// Run one configuration once per seed and summarize the revenue spread.
///
/// Every trial gets a fresh model, so trials are independent and the whole
/// batch is reproducible from the seed list alone.
pub fn run_revenue_trials(config: &ShopConfig, seeds: &[u64]) -> Result<RevenueStats, ModelError> {
    let mut revenues = Vec::with_capacity(seeds.len());
    for &seed in seeds {
        let mut shop = SimpleShopModel::with_seed(config.clone(), seed)?;
        shop.run()?;
        revenues.push(shop.revenue());
    }

    if revenues.is_empty() {
        return Ok(RevenueStats {
            trials: 0,
            mean_revenue: 0.0,
            std_dev_revenue: 0.0,
            min_revenue: 0,
            max_revenue: 0,
        });
    }

    let count = revenues.len() as f64;
    let mean_revenue = revenues.iter().sum::<i64>() as f64 / count;
    let variance = revenues
        .iter()
        .map(|revenue| {
            let diff = *revenue as f64 - mean_revenue;
            diff * diff
        })
        .sum::<f64>()
        / count;

    Ok(RevenueStats {
        trials: revenues.len(),
        mean_revenue,
        std_dev_revenue: variance.sqrt(),
        min_revenue: revenues.iter().copied().min().unwrap_or(0),
        max_revenue: revenues.iter().copied().max().unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trials_are_reproducible_from_the_seed_list() {
        let config = ShopConfig::with_factor(6.0, 10);
        let seeds: Vec<u64> = (0..20).collect();
        let first = run_revenue_trials(&config, &seeds).unwrap();
        let second = run_revenue_trials(&config, &seeds).unwrap();
        assert_eq!(first.trials, 20);
        assert_eq!(first.mean_revenue, second.mean_revenue);
        assert_eq!(first.std_dev_revenue, second.std_dev_revenue);
        assert_eq!(first.min_revenue, second.min_revenue);
        assert_eq!(first.max_revenue, second.max_revenue);
    }

    #[test]
    fn summary_brackets_the_mean() {
        let config = ShopConfig::with_factor(4.0, 15);
        let seeds: Vec<u64> = (100..130).collect();
        let stats = run_revenue_trials(&config, &seeds).unwrap();
        assert!(stats.min_revenue as f64 <= stats.mean_revenue);
        assert!(stats.mean_revenue <= stats.max_revenue as f64);
        assert!(stats.std_dev_revenue >= 0.0);
    }

    #[test]
    fn empty_seed_list_yields_an_empty_summary() {
        let config = ShopConfig::default();
        let stats = run_revenue_trials(&config, &[]).unwrap();
        assert_eq!(stats.trials, 0);
        assert_eq!(stats.mean_revenue, 0.0);
    }
}
