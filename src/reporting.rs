//! Console output and result presentation for the demo driver.

use serde::Serialize;

use crate::stats::RevenueStats;

/// Outcome of one run in a refill-factor sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub refill_factor: f64,
    pub revenue: i64,
    pub profit: i64,
    pub expenses: i64,
    pub final_rating: f64,
    pub customers_served: u64,
    pub customers_lost: u64,
}

/// Display every sweep row, ranked by revenue.
pub fn display_sweep_results(rows: &[SweepRow]) {
    println!("\n╔═══════════════════════════════════════════════════════════════════╗");
    println!("║                REFILL FACTOR SWEEP - ALL OUTCOMES                 ║");
    println!("╚═══════════════════════════════════════════════════════════════════╝\n");

    let mut ranked: Vec<&SweepRow> = rows.iter().collect();
    ranked.sort_by_key(|row| std::cmp::Reverse(row.revenue));

    for (rank, row) in ranked.iter().enumerate() {
        println!(
            "{}. factor {:.0} | revenue {:>7} | profit {:>7} | expenses {:>7}",
            rank + 1,
            row.refill_factor,
            row.revenue,
            row.profit,
            row.expenses,
        );
        println!(
            "   served {:>5} | lost {:>5} | closing rating {:.1}\n",
            row.customers_served, row.customers_lost, row.final_rating,
        );
    }
}

/// Display the best sweep outcome in detail.
pub fn display_best_row(row: &SweepRow) {
    println!("╔═══════════════════════════════════════════════════════════════════╗");
    println!("║                 BEST REFILL FACTOR (HIGHEST REVENUE)              ║");
    println!("╚═══════════════════════════════════════════════════════════════════╝\n");

    println!("Refill factor:   {:.0}", row.refill_factor);
    println!("Revenue:         {}", row.revenue);
    println!("  Profit:        {}", row.profit);
    println!("  Expenses:      {}", row.expenses);
    println!("Customers:       {} served, {} lost", row.customers_served, row.customers_lost);
    println!("Closing rating:  {:.1} stars", row.final_rating);
}

/// Display the revenue spread of a multi-seed trial batch.
pub fn display_trial_stats(factor: f64, stats: &RevenueStats) {
    println!(
        "\nFactor {:.0} over {} seeded trials: mean {:.2} ± {:.2} | range [{}, {}]",
        factor,
        stats.trials,
        stats.mean_revenue,
        stats.std_dev_revenue,
        stats.min_revenue,
        stats.max_revenue,
    );
}
