//! Exact Solver (C9): Gilmore-Gomory pattern-based integer program.
//!
//! Patterns are enumerated once per distinct stock length by
//! [`crate::patterns`], then handed to a single direct integer program (no
//! column-generation pricing loop, since the pattern set is enumerated up
//! front rather than generated lazily): minimize the number of patterns used
//! subject to demand and per-stock-type quantity constraints.
//!
//! Behind the `exact-solver` feature this is backed by the SCIP binding
//! `russcip`; with the feature off, [`solve`] always returns `None` and
//! [`crate::optimize`] falls back to [`crate::hybrid`].

use crate::model::{OpenStock, Part, Stock};
use crate::patterns;

#[cfg(feature = "exact-solver")]
mod scip_backend {
    use super::*;
    use russcip::prelude::*;

    pub(super) fn solve(
        placeable: &[Part],
        stocks: &[Stock],
        pattern_cap: usize,
        kerf: f64,
    ) -> Option<(Vec<OpenStock>, Vec<Part>)> {
        let groups = patterns::group_by_length(placeable);
        if groups.is_empty() {
            return Some((Vec::new(), Vec::new()));
        }
        let lengths: Vec<f64> = groups.iter().map(|g| g.length).collect();
        let demands: Vec<usize> = groups.iter().map(|g| g.ids.len()).collect();

        struct PatternEntry {
            stock_idx: usize,
            counts: Vec<u32>,
        }
        let mut entries: Vec<PatternEntry> = Vec::new();
        for (stock_idx, stock) in stocks.iter().enumerate() {
            let per_stock = patterns::generate_patterns(&lengths, stock.length, kerf, pattern_cap);
            for counts in per_stock {
                entries.push(PatternEntry { stock_idx, counts });
            }
        }
        if entries.is_empty() {
            return None;
        }

        let mut model = Model::default().hide_output().minimize();

        let vars: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, _)| model.add(var().int(0..).obj(1.0).name(&format!("pattern_{i}"))))
            .collect();

        for (j, &demand) in demands.iter().enumerate() {
            let coefs = entries
                .iter()
                .zip(vars.iter())
                .filter(|(e, _)| e.counts[j] > 0)
                .map(|(e, v)| (v, e.counts[j] as f64));
            model.add(cons().name(&format!("demand_{j}")).ge(demand as f64).expr(coefs));
        }

        for (stock_idx, stock) in stocks.iter().enumerate() {
            if let crate::model::StockQuantity::Bounded(limit) = stock.quantity {
                let coefs = entries
                    .iter()
                    .zip(vars.iter())
                    .filter(|(e, _)| e.stock_idx == stock_idx)
                    .map(|(_, v)| (v, 1.0));
                model.add(cons().name(&format!("qty_{stock_idx}")).le(limit as f64).expr(coefs));
            }
        }

        let solved = model.solve();
        if solved.status() != Status::Optimal {
            tracing::warn!(status = ?solved.status(), "exact solver: no optimal solution");
            return None;
        }

        let sol = solved.best_sol()?;
        // Reversed so `.pop()` yields ids in original input order (front of
        // the per-length pool first), matching how the packers assign ids.
        let mut remaining_ids: Vec<Vec<String>> = groups
            .iter()
            .map(|g| {
                let mut ids = g.ids.clone();
                ids.reverse();
                ids
            })
            .collect();
        let mut open_stocks = Vec::new();

        for (entry, var) in entries.iter().zip(vars.iter()) {
            let count = sol.val(var).round() as i64;
            for _ in 0..count {
                let stock = &stocks[entry.stock_idx];
                let mut open = OpenStock::new(stock);
                for (j, &num) in entry.counts.iter().enumerate() {
                    for _ in 0..num {
                        if let Some(id) = remaining_ids[j].pop() {
                            let part = Part::new(id, lengths[j], 1);
                            open.place(&part, kerf);
                        }
                    }
                }
                open_stocks.push(open);
            }
        }

        Some((open_stocks, Vec::new()))
    }
}

/// Attempts an exact solve. Returns `None` when the solver backend is
/// unavailable (feature off), produced no patterns, or returned a
/// non-optimal status; callers should then fall back to
/// [`crate::hybrid::pack`].
pub(crate) fn solve(
    placeable: &[Part],
    stocks: &[Stock],
    pattern_cap: usize,
    kerf: f64,
) -> Option<(Vec<OpenStock>, Vec<Part>)> {
    #[cfg(feature = "exact-solver")]
    {
        scip_backend::solve(placeable, stocks, pattern_cap, kerf)
    }
    #[cfg(not(feature = "exact-solver"))]
    {
        let _ = (placeable, stocks, pattern_cap, kerf);
        None
    }
}
