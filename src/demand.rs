//! Reputation-driven customer traffic.
//!
//! The store's rating sets the ceiling on how many customers can show up;
//! the day-by-day count is a uniform draw under that ceiling.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Largest possible number of customers in one day at the given rating.
///
/// Even a one-star store sees at least one customer a day.
pub fn max_traffic(rating: f64) -> u32 {
    ((rating * 10.0).round() as u32).max(1)
}

/// Draw one day's customer count, uniform on `[1, max_traffic(rating)]`
/// inclusive.
pub fn daily_traffic<R: Rng + ?Sized>(rng: &mut R, rating: f64) -> u32 {
    let traffic = Uniform::new_inclusive(1, max_traffic(rating));
    traffic.sample(rng)
}
