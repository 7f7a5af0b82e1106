//! Two-phase large-then-small best-fit packer (C6).
//!
//! Parts at or above half the longest stock length are placed first-fit,
//! longest first, same as [`crate::ffd`]. The remainder are then placed
//! best-fit: each goes into whichever open stock instance leaves the least
//! remaining space after it fits, falling back to opening a new, smallest-
//! fitting instance.

use crate::inventory::InventoryTracker;
use crate::model::{OpenStock, Part, Stock};

/// Packs `parts` against `stocks` using the two-phase hybrid strategy.
pub(crate) fn pack(parts: &[Part], stocks: &[Stock], kerf: f64) -> (Vec<OpenStock>, Vec<Part>) {
    let max_stock_length = stocks.iter().fold(0.0_f64, |m, s| m.max(s.length));
    let threshold = max_stock_length * 0.5;

    let mut sorted_parts: Vec<&Part> = parts.iter().collect();
    sorted_parts.sort_by(|a, b| b.length.partial_cmp(&a.length).unwrap());

    let (large, small): (Vec<&Part>, Vec<&Part>) =
        sorted_parts.into_iter().partition(|p| p.length >= threshold);

    let mut inventory = InventoryTracker::new(stocks);
    let mut open_stocks: Vec<OpenStock> = Vec::new();
    let mut not_placed = Vec::new();

    // Phase 1: large parts, first-fit into whatever is already open.
    for part in large {
        if let Some(open) = open_stocks.iter_mut().find(|o| o.fits(part.length, kerf)) {
            open.place(part, kerf);
            continue;
        }
        open_new_or_reject(part, &mut inventory, &mut open_stocks, &mut not_placed, kerf);
    }

    // Phase 2: small parts, best-fit (smallest remaining space that still
    // fits, ties broken by the order stocks were opened).
    for part in small {
        let best = open_stocks
            .iter_mut()
            .filter(|o| o.fits(part.length, kerf))
            .min_by(|a, b| a.remaining.partial_cmp(&b.remaining).unwrap());

        match best {
            Some(open) => open.place(part, kerf),
            None => open_new_or_reject(part, &mut inventory, &mut open_stocks, &mut not_placed, kerf),
        }
    }

    (open_stocks, not_placed)
}

fn open_new_or_reject<'a>(
    part: &'a Part,
    inventory: &mut InventoryTracker,
    open_stocks: &mut Vec<OpenStock>,
    not_placed: &mut Vec<Part>,
    kerf: f64,
) {
    match inventory.available_for(part.length) {
        Some(stock) => {
            inventory.consume(&stock.id);
            let mut open = OpenStock::new(stock);
            open.place(part, kerf);
            open_stocks.push(open);
        }
        None => {
            tracing::debug!(part = %part.id, length = part.length, "hybrid: no stock available");
            not_placed.push(part.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockQuantity;

    #[test]
    fn large_parts_placed_before_small_fill_gaps() {
        let parts = vec![
            Part::new("big", 2500.0, 1),
            Part::new("small", 400.0, 1),
        ];
        let stocks = vec![Stock::new("s", 3000.0, StockQuantity::Unbounded)];
        let (plans, not_placed) = pack(&parts, &stocks, 3.0);
        assert!(not_placed.is_empty());
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].cuts.len(), 2);
    }

    #[test]
    fn small_part_best_fit_prefers_tightest_remaining() {
        let parts = vec![
            Part::new("big-a", 2600.0, 1),
            Part::new("big-b", 2000.0, 1),
            Part::new("fill", 300.0, 1),
        ];
        let stocks = vec![Stock::new("s", 3000.0, StockQuantity::Unbounded)];
        let (plans, _) = pack(&parts, &stocks, 3.0);
        let fill_plan = plans
            .iter()
            .find(|p| p.cuts.iter().any(|c| c.id == "fill"))
            .unwrap();
        assert!(fill_plan.cuts.iter().any(|c| c.id == "big-a"));
    }

    #[test]
    fn tracks_unplaceable_parts() {
        let parts = vec![Part::new("a", 1000.0, 1), Part::new("b", 1000.0, 1)];
        let stocks = vec![Stock::new("s", 1000.0, StockQuantity::Bounded(1))];
        let (plans, not_placed) = pack(&parts, &stocks, 3.0);
        assert_eq!(plans.len(), 1);
        assert_eq!(not_placed.len(), 1);
    }
}
