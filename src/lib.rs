#![deny(missing_docs)]

//! An optimizer for cutting linear pieces ("parts") from linear stock (bars,
//! rails, laths) — the one-dimensional cutting-stock problem.
//!
//! [`optimize`] is the single entry point. It validates its input, then
//! dispatches to one of five strategies selected by
//! [`OptimizeParams::algorithm`]: a fast greedy packer
//! ([`Algorithm::Ffd`]/[`Algorithm::OrtoolsFast`]), a two-phase best-fit
//! packer ([`Algorithm::Hybrid`]), a split-aware packer
//! ([`Algorithm::SmartSplit`]), and an exact pattern-based integer program
//! ([`Algorithm::OrtoolsOptimal`]) that falls back to [`Algorithm::Hybrid`]
//! when its solver backend is unavailable or inconclusive.

mod assemble;
mod error;
mod exact;
mod expand;
mod ffd;
mod hybrid;
mod inventory;
mod model;
mod patterns;
mod smart_split;
mod split;


use std::time::Instant;

pub use error::OptimizeError;
pub use model::{
    Algorithm, CutPlan, OptimizationResult, OptimizeParams, Part, Stock, StockQuantity,
};

use model::EPS;

/// Optimizes a cutting plan for `parts` against `stocks` under `params`.
///
/// Returns [`OptimizeError`] only for malformed input; the returned
/// [`OptimizationResult`] otherwise always succeeds, with any parts that
/// could not be placed recorded in
/// [`OptimizationResult::parts_not_placed`].
pub fn optimize(
    parts: &[Part],
    stocks: &[Stock],
    params: &OptimizeParams,
) -> Result<OptimizationResult, OptimizeError> {
    validate(parts, stocks, params)?;

    let start = Instant::now();
    let expanded = expand::expand_demand(parts);
    let max_stock_length = stocks.iter().fold(0.0_f64, |m, s| m.max(s.length));

    let (placeable, not_placed) = match params.algorithm {
        Algorithm::SmartSplit => (expanded, Vec::new()),
        _ => split::split_parts(
            expanded,
            max_stock_length,
            params.kerf,
            params.max_split_parts,
            params.joint_allowance,
        ),
    };

    let (open_stocks, mut still_not_placed, algorithm_used) = match params.algorithm {
        Algorithm::Ffd | Algorithm::OrtoolsFast => {
            let (plans, np) = ffd::pack(&placeable, stocks, params.kerf);
            (plans, np, params.algorithm)
        }
        Algorithm::Hybrid => {
            let (plans, np) = hybrid::pack(&placeable, stocks, params.kerf);
            (plans, np, Algorithm::Hybrid)
        }
        Algorithm::SmartSplit => {
            let (plans, np) = smart_split::pack(
                &placeable,
                stocks,
                params.kerf,
                params.max_split_parts,
                params.joint_allowance,
            );
            (plans, np, Algorithm::SmartSplit)
        }
        Algorithm::OrtoolsOptimal => {
            match exact::solve(&placeable, stocks, params.pattern_cap, params.kerf) {
                Some((plans, np)) => (plans, np, Algorithm::OrtoolsOptimal),
                None => {
                    tracing::warn!("exact solver unavailable or inconclusive, falling back to hybrid");
                    let (plans, np) = hybrid::pack(&placeable, stocks, params.kerf);
                    (plans, np, Algorithm::Hybrid)
                }
            }
        }
    };

    let mut all_not_placed = not_placed;
    all_not_placed.append(&mut still_not_placed);

    Ok(assemble::assemble(algorithm_used, open_stocks, all_not_placed, start.elapsed()))
}

fn validate(parts: &[Part], stocks: &[Stock], params: &OptimizeParams) -> Result<(), OptimizeError> {
    if parts.is_empty() {
        return Err(OptimizeError::EmptyParts);
    }
    if stocks.is_empty() {
        return Err(OptimizeError::EmptyStocks);
    }
    for part in parts {
        if part.length <= EPS {
            return Err(OptimizeError::NonPositivePartLength {
                id: part.id.clone(),
                length: part.length,
            });
        }
        if part.quantity == 0 {
            return Err(OptimizeError::ZeroPartQuantity { id: part.id.clone() });
        }
    }
    for stock in stocks {
        if stock.length <= EPS {
            return Err(OptimizeError::NonPositiveStockLength {
                id: stock.id.clone(),
                length: stock.length,
            });
        }
    }
    if params.kerf < 0.0 {
        return Err(OptimizeError::NegativeKerf(params.kerf));
    }
    if params.max_split_parts == 0 {
        return Err(OptimizeError::ZeroMaxSplitParts(params.max_split_parts));
    }
    if params.joint_allowance < 0.0 {
        return Err(OptimizeError::NegativeJointAllowance(params.joint_allowance));
    }
    Ok(())
}
