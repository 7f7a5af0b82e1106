//! Result Assembler (C10): turns the packers' raw open-stock list into the
//! public [`OptimizationResult`], assigning stable per-stock-type indices and
//! computing aggregate waste statistics.

use std::time::Duration;

use fnv::FnvHashMap;

use crate::model::{Algorithm, CutPlan, OpenStock, OptimizationResult, Part};

/// Converts `open_stocks` (in the order they were consumed) and
/// `parts_not_placed` into a finished [`OptimizationResult`] tagged with
/// `algorithm`.
pub(crate) fn assemble(
    algorithm: Algorithm,
    open_stocks: Vec<OpenStock>,
    parts_not_placed: Vec<Part>,
    elapsed: Duration,
) -> OptimizationResult {
    let mut stock_counts: FnvHashMap<String, u32> = FnvHashMap::default();
    let mut total_stock_length = 0.0;
    let mut total_waste = 0.0;

    let plans: Vec<CutPlan> = open_stocks
        .into_iter()
        .map(|open| {
            let count = stock_counts.entry(open.stock_id.clone()).or_insert(0);
            let stock_index = *count;
            *count += 1;

            total_stock_length += open.stock_length;
            total_waste += open.remaining;

            CutPlan {
                stock_id: open.stock_id,
                stock_length: open.stock_length,
                cuts: open.cuts,
                waste: round_to(open.remaining, 1),
                stock_index,
            }
        })
        .collect();

    let waste_percentage = if total_stock_length > 0.0 {
        total_waste / total_stock_length * 100.0
    } else {
        0.0
    };

    OptimizationResult {
        algorithm,
        total_stocks_used: plans.len(),
        plans,
        total_waste: round_to(total_waste, 1),
        waste_percentage: round_to(waste_percentage, 2),
        parts_not_placed,
        computation_time_ms: round_to(elapsed.as_secs_f64() * 1000.0, 2),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cut;

    #[test]
    fn assigns_sequential_indices_per_stock_id() {
        let open_stocks = vec![
            OpenStock {
                stock_id: "s".into(),
                stock_length: 3000.0,
                remaining: 500.0,
                cuts: vec![Cut { id: "a".into(), length: 2500.0 }],
            },
            OpenStock {
                stock_id: "s".into(),
                stock_length: 3000.0,
                remaining: 1000.0,
                cuts: vec![Cut { id: "b".into(), length: 2000.0 }],
            },
        ];
        let result = assemble(Algorithm::Ffd, open_stocks, Vec::new(), Duration::from_millis(5));
        assert_eq!(result.plans[0].stock_index, 0);
        assert_eq!(result.plans[1].stock_index, 1);
        assert_eq!(result.total_stocks_used, 2);
    }

    #[test]
    fn waste_percentage_zero_when_no_stock_used() {
        let result = assemble(Algorithm::Ffd, Vec::new(), Vec::new(), Duration::from_millis(0));
        assert_eq!(result.waste_percentage, 0.0);
        assert_eq!(result.total_stocks_used, 0);
    }
}
