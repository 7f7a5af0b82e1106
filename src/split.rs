//! Splitter (C4): divides overlength demands into at most `K` segments with
//! joint-allowance overlap, or marks them unplaceable.

use crate::model::{Part, EPS};

/// Splits each part in `parts` against `max_stock_length`. Returns
/// `(placeable, unplaceable)`. Parts that already fit whole are passed
/// through unchanged; parts that are overlength are carved into segments
/// named `<orig>_d<k>`, or, if they cannot be made to fit within `K`
/// segments, returned unchanged in the second list.
pub(crate) fn split_parts(
    parts: Vec<Part>,
    max_stock_length: f64,
    kerf: f64,
    max_split_parts: u32,
    joint_allowance: f64,
) -> (Vec<Part>, Vec<Part>) {
    let mut placeable = Vec::with_capacity(parts.len());
    let mut unplaceable = Vec::new();

    for part in parts {
        if part.length + kerf <= max_stock_length + EPS {
            placeable.push(part);
            continue;
        }

        if max_split_parts <= 1 {
            unplaceable.push(part);
            continue;
        }

        match carve(&part, max_stock_length, max_split_parts, joint_allowance) {
            Some(segments) => placeable.extend(segments),
            None => unplaceable.push(part),
        }
    }

    (placeable, unplaceable)
}

/// Carves `part` into up to `max_split_parts` segments. Returns `None` if
/// the part could not be fully consumed within that many segments, in which
/// case the partial split is discarded.
fn carve(part: &Part, max_stock_length: f64, max_split_parts: u32, joint_allowance: f64) -> Option<Vec<Part>> {
    let mut segments = Vec::new();
    let mut remaining = part.length;

    for k in 1..=max_split_parts {
        if remaining <= max_stock_length + EPS {
            let bonus = if k > 1 { joint_allowance } else { 0.0 };
            let mut seg_len = remaining + bonus;
            if seg_len > max_stock_length + EPS {
                // The joint-allowance bonus would overflow the stock; drop
                // it rather than reject the segment (see DESIGN.md O2).
                seg_len = remaining;
            }
            segments.push(seg_len);
            remaining = 0.0;
            break;
        } else {
            segments.push(max_stock_length);
            remaining -= max_stock_length - joint_allowance;
        }
    }

    if remaining > EPS {
        return None;
    }

    Some(
        segments
            .into_iter()
            .enumerate()
            .map(|(i, length)| {
                let k = i + 1;
                Part {
                    id: format!("{}_d{k}", part.id),
                    length,
                    quantity: 1,
                    label: format!("{} (deel {k})", part.label),
                }
            })
            .collect(),
    )
}
