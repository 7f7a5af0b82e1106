//! First-Fit-Decreasing packer (C5): parts are sorted longest first; each is
//! placed in the first already-open stock instance it fits, or else opens a
//! new, smallest-fitting stock instance. Simple and fast, not optimal.

use crate::inventory::InventoryTracker;
use crate::model::{OpenStock, Part, Stock};

/// Packs `parts` against `stocks` using first-fit-decreasing. Returns
/// `(plans, not_placed)`. `plans` omits stock indices; callers assign those
/// during assembly.
pub(crate) fn pack(parts: &[Part], stocks: &[Stock], kerf: f64) -> (Vec<OpenStock>, Vec<Part>) {
    let mut sorted_parts: Vec<&Part> = parts.iter().collect();
    sorted_parts.sort_by(|a, b| b.length.partial_cmp(&a.length).unwrap());

    let mut inventory = InventoryTracker::new(stocks);
    let mut open_stocks: Vec<OpenStock> = Vec::new();
    let mut not_placed = Vec::new();

    for part in sorted_parts {
        if let Some(open) = open_stocks.iter_mut().find(|o| o.fits(part.length, kerf)) {
            open.place(part, kerf);
            continue;
        }

        match inventory.available_for(part.length) {
            Some(stock) => {
                inventory.consume(&stock.id);
                let mut open = OpenStock::new(stock);
                open.place(part, kerf);
                open_stocks.push(open);
            }
            None => {
                tracing::debug!(part = %part.id, length = part.length, "ffd: no stock available");
                not_placed.push(part.clone());
            }
        }
    }

    (open_stocks, not_placed)
}
