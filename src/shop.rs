//! The store model: day loop, rating feedback and restocking policy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::boxes::StockBox;
use crate::config::ShopConfig;
use crate::demand;
use crate::model::{Model, ModelError};

/// Direction of a reputation adjustment.
#[derive(Clone, Copy)]
enum RatingShift {
    Up,
    Down,
}

/// A single store with perishable stock and a reputation-driven customer
/// stream.
///
/// The model owns its random stream. Seed it (at construction or via
/// [`reseed`](SimpleShopModel::reseed)) and identical pre-run state yields
/// an identical profit/expenses/rating trajectory, which is what lets a
/// driver compare runs against each other.
pub struct SimpleShopModel {
    config: ShopConfig,
    rating: f64,
    profit: i64,
    expenses: i64,
    customers_served: u64,
    customers_lost: u64,
    boxes: Vec<StockBox>,
    rng: ChaCha8Rng,
}

impl SimpleShopModel {
    /// Build a store from a validated configuration with an entropy-seeded
    /// random stream.
    pub fn new(config: ShopConfig) -> Result<Self, ModelError> {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Build a store whose random stream starts from a fixed seed.
    pub fn with_seed(config: ShopConfig, seed: u64) -> Result<Self, ModelError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Default store constants, varying only the two knobs a driver
    /// usually turns.
    pub fn with_factor(refill_factor: f64, days_to_run: u32) -> Result<Self, ModelError> {
        Self::new(ShopConfig::with_factor(refill_factor, days_to_run))
    }

    fn with_rng(config: ShopConfig, rng: ChaCha8Rng) -> Result<Self, ModelError> {
        config.validate()?;
        let boxes = (0..config.boxes_count)
            .map(|_| StockBox::new(config.box_capacity, config.shelf_life))
            .collect();
        Ok(SimpleShopModel {
            rating: config.rating,
            profit: 0,
            expenses: 0,
            customers_served: 0,
            customers_lost: 0,
            boxes,
            rng,
            config,
        })
    }

    /// Replace the random stream with one seeded from `seed`.
    ///
    /// Reseeding to the same value before each run is how a driver makes
    /// consecutive `reset()` + `run()` cycles face the same customer
    /// stream.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Swap in a new configuration between runs.
    ///
    /// Refused unless the ledger and every box are clear, so parameter
    /// changes can only land between `reset()` and the next `run()`. The
    /// configured `rating` overwrites the carried-over one.
    pub fn configure(&mut self, config: ShopConfig) -> Result<(), ModelError> {
        config.validate()?;
        if self.profit != 0 || self.expenses != 0 || self.total_stock() != 0 {
            return Err(ModelError::DirtyState);
        }
        self.rating = config.rating;
        self.boxes = (0..config.boxes_count)
            .map(|_| StockBox::new(config.box_capacity, config.shelf_life))
            .collect();
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Current reputation, in stars on the 1-5 scale.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Money taken at the till so far.
    pub fn profit(&self) -> i64 {
        self.profit
    }

    /// Restocking cost paid so far.
    pub fn expenses(&self) -> i64 {
        self.expenses
    }

    /// Net outcome of the run: profit minus expenses.
    pub fn revenue(&self) -> i64 {
        self.profit - self.expenses
    }

    /// Ceiling on one day's customer count at the current rating.
    pub fn max_traffic(&self) -> u32 {
        demand::max_traffic(self.rating)
    }

    /// Units on the shelf across all boxes.
    pub fn total_stock(&self) -> u32 {
        self.boxes.iter().map(StockBox::level).sum()
    }

    /// Customers served over the run so far.
    pub fn customers_served(&self) -> u64 {
        self.customers_served
    }

    /// Customers turned away over the run so far.
    pub fn customers_lost(&self) -> u64 {
        self.customers_lost
    }

    /// Read-only view of the boxes, for inspection and tests.
    pub fn boxes(&self) -> &[StockBox] {
        &self.boxes
    }

    fn update_rating(&mut self, shift: RatingShift) {
        let step = match shift {
            RatingShift::Up => 0.5,
            RatingShift::Down => -0.5,
        };
        self.rating = (self.rating + step).clamp(1.0, 5.0);
    }

    /// Order boxes emptiest first. Sales then drain the lowest box and
    /// restocking tops the lowest boxes up, consolidating remaining shelf
    /// life in fewer boxes.
    fn sort_boxes(&mut self) {
        self.boxes.sort_by_key(StockBox::level);
    }

    /// Restock toward `rating * refill_factor` units, whole boxes at a
    /// time, emptiest boxes first. Stops as soon as the shortfall is
    /// covered; since partial top-ups are not supported, the actual stock
    /// increase may overshoot the target.
    fn refill(&mut self) {
        let current_stock = i64::from(self.total_stock());
        let needed_level = (self.rating * self.config.refill_factor).round() as i64;
        if current_stock >= needed_level {
            return;
        }
        self.sort_boxes();
        let box_cost = self.config.box_cost();
        let mut shortfall = needed_level - current_stock;
        let mut boxes_refilled = 0u32;
        for stock_box in &mut self.boxes {
            stock_box.refill();
            self.expenses += box_cost;
            boxes_refilled += 1;
            shortfall -= i64::from(self.config.box_capacity);
            if shortfall <= 0 {
                break;
            }
        }
        debug!(
            target: "shop.refill",
            boxes_refilled,
            stock = self.total_stock(),
            expenses = self.expenses,
            "restocked"
        );
    }

    fn run_day(&mut self, day: u32) {
        let day_traffic = demand::daily_traffic(&mut self.rng, self.rating);
        let mut remaining = day_traffic;
        let mut all_served = true;
        self.sort_boxes();
        while remaining > 0 {
            // Serve from the first non-empty box in emptiest-first order;
            // an unserved customer costs reputation instead.
            match self.boxes.iter_mut().find(|b| !b.is_empty()) {
                Some(stock_box) => {
                    self.profit += self.config.item_price;
                    stock_box.consume();
                    self.customers_served += 1;
                }
                None => {
                    self.update_rating(RatingShift::Down);
                    self.customers_lost += 1;
                    all_served = false;
                }
            }
            remaining -= 1;
        }
        if all_served {
            self.update_rating(RatingShift::Up);
        }
        for stock_box in &mut self.boxes {
            stock_box.tick();
        }
        self.refill();
        debug!(
            target: "shop.day",
            day,
            traffic = day_traffic,
            rating = self.rating,
            stock = self.total_stock(),
            revenue = self.revenue(),
            "day closed"
        );
    }
}

impl Model for SimpleShopModel {
    /// Run the full simulation: one opening restock, then `days_to_run`
    /// days of serving, aging and restocking.
    fn run(&mut self) -> Result<(), ModelError> {
        self.refill();
        for day in 1..=self.config.days_to_run {
            self.run_day(day);
        }
        Ok(())
    }

    /// Clear the ledger, the service counters and every box. The rating
    /// is intentionally carried over: reputation outlives a reset.
    fn reset(&mut self) -> Result<(), ModelError> {
        self.profit = 0;
        self.expenses = 0;
        self.customers_served = 0;
        self.customers_lost = 0;
        for stock_box in &mut self.boxes {
            stock_box.clear();
        }
        Ok(())
    }
}
