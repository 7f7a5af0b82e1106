//! Split-aware best-fit packer (C7).
//!
//! Unlike [`crate::ffd`] and [`crate::hybrid`], this strategy never calls the
//! shared [`crate::split`] splitter. Instead it performs its own single-level
//! split: an overlength part becomes one head segment at exactly the longest
//! available stock length plus one parked remainder (original length minus
//! that head, plus the joint allowance). The remainder is not itself
//! recursively split, regardless of `max_split_parts`. The one place
//! `max_split_parts` does apply is the `K=1` special case: with splitting
//! disallowed entirely, an overlength part is left whole and unplaceable
//! rather than split.
//!
//! Phases:
//! 1. Split overlength parts into a head (placed immediately) and a parked
//!    remainder (filled in last), or mark them unplaceable when splitting is
//!    disallowed.
//! 2. Place heads and whole parts, longest first, best-fit into open stock.
//! 3. Fill remaining gaps with parked remainders, longest first, best-fit.

use crate::inventory::InventoryTracker;
use crate::model::{OpenStock, Part, Stock};

/// Packs `parts` using the split-aware best-fit strategy. When
/// `max_split_parts <= 1`, overlength parts are never split and instead
/// returned in `not_placed` directly.
pub(crate) fn pack(
    parts: &[Part],
    stocks: &[Stock],
    kerf: f64,
    max_split_parts: u32,
    joint_allowance: f64,
) -> (Vec<OpenStock>, Vec<Part>) {
    let max_stock_length = stocks.iter().fold(0.0_f64, |m, s| m.max(s.length));

    let mut sorted_input: Vec<&Part> = parts.iter().collect();
    sorted_input.sort_by(|a, b| b.length.partial_cmp(&a.length).unwrap());

    let mut main_parts: Vec<Part> = Vec::new();
    let mut parked_parts: Vec<Part> = Vec::new();
    let mut not_placed: Vec<Part> = Vec::new();

    for part in sorted_input {
        if part.length <= max_stock_length {
            main_parts.push(part.clone());
            continue;
        }

        if max_split_parts <= 1 {
            not_placed.push(part.clone());
            continue;
        }

        main_parts.push(Part {
            id: format!("{}_d1", part.id),
            length: max_stock_length,
            quantity: 1,
            label: format!("{} (deel 1)", part.label),
        });

        let rest_length = part.length - max_stock_length + joint_allowance;
        if rest_length > 0.0 {
            parked_parts.push(Part {
                id: format!("{}_d2", part.id),
                length: rest_length,
                quantity: 1,
                label: format!("{} (deel 2)", part.label),
            });
            tracing::debug!(
                part = %part.id,
                head = max_stock_length,
                rest = rest_length,
                "smart_split: parked remainder"
            );
        }
    }

    main_parts.sort_by(|a, b| b.length.partial_cmp(&a.length).unwrap());

    let mut inventory = InventoryTracker::new(stocks);
    let mut open_stocks: Vec<OpenStock> = Vec::new();

    for part in &main_parts {
        place_best_fit(part, &mut inventory, &mut open_stocks, &mut not_placed, kerf);
    }

    let mut fill_parts = parked_parts;
    fill_parts.sort_by(|a, b| b.length.partial_cmp(&a.length).unwrap());

    for part in &fill_parts {
        place_best_fit(part, &mut inventory, &mut open_stocks, &mut not_placed, kerf);
    }

    (open_stocks, not_placed)
}

fn place_best_fit(
    part: &Part,
    inventory: &mut InventoryTracker,
    open_stocks: &mut Vec<OpenStock>,
    not_placed: &mut Vec<Part>,
    kerf: f64,
) {
    let best = open_stocks
        .iter_mut()
        .filter(|o| o.fits(part.length, kerf))
        .min_by(|a, b| a.remaining.partial_cmp(&b.remaining).unwrap());

    if let Some(open) = best {
        open.place(part, kerf);
        return;
    }

    match inventory.available_for(part.length) {
        Some(stock) => {
            inventory.consume(&stock.id);
            let mut open = OpenStock::new(stock);
            open.place(part, kerf);
            open_stocks.push(open);
        }
        None => {
            tracing::debug!(part = %part.id, length = part.length, "smart_split: no stock available");
            not_placed.push(part.clone());
        }
    }
}
