//! Pattern Enumerator (C8): the Gilmore-Gomory cutting-pattern generation
//! step. For each distinct stock length, exhaustively enumerates every
//! combination of distinct demanded lengths ("a pattern") that fits on one
//! instance of that stock, up to a per-length-group cap. Patterns feed the
//! integer program in [`crate::exact`].

use crate::model::{Part, EPS};

/// One distinct demanded length, the number of pieces at that length still
/// needed, and the ids those pieces came from (consumed in order as the
/// exact solver's solution is translated back into cuts).
#[derive(Debug, Clone)]
pub(crate) struct LengthGroup {
    pub(crate) length: f64,
    pub(crate) ids: Vec<String>,
}

/// Groups `parts` by length, tolerating `EPS` differences. Order of the
/// returned groups matches first occurrence in `parts`.
pub(crate) fn group_by_length(parts: &[Part]) -> Vec<LengthGroup> {
    let mut groups: Vec<LengthGroup> = Vec::new();
    for part in parts {
        match groups.iter_mut().find(|g| (g.length - part.length).abs() < EPS) {
            Some(g) => g.ids.push(part.id.clone()),
            None => groups.push(LengthGroup {
                length: part.length,
                ids: vec![part.id.clone()],
            }),
        }
    }
    groups
}

/// Enumerates every cutting pattern for a single stock length: each pattern
/// is a vector parallel to `lengths`, giving how many of that length are cut
/// from one stock instance. Stops once `cap` patterns have been produced.
pub(crate) fn generate_patterns(lengths: &[f64], stock_length: f64, kerf: f64, cap: usize) -> Vec<Vec<u32>> {
    let mut patterns = Vec::new();
    let mut current = Vec::with_capacity(lengths.len());
    generate(lengths, stock_length, kerf, cap, 0, stock_length, &mut current, &mut patterns);
    patterns
}

#[allow(clippy::too_many_arguments)]
fn generate(
    lengths: &[f64],
    _stock_length: f64,
    kerf: f64,
    cap: usize,
    idx: usize,
    remaining: f64,
    current: &mut Vec<u32>,
    patterns: &mut Vec<Vec<u32>>,
) {
    if patterns.len() >= cap {
        return;
    }

    if idx == lengths.len() {
        if current.iter().any(|&c| c > 0) {
            patterns.push(current.clone());
        }
        return;
    }

    let is_first_piece = current.iter().all(|&c| c == 0);
    let max_count = if is_first_piece {
        (remaining / lengths[idx]).floor().max(0.0) as u32
    } else {
        (remaining / (lengths[idx] + kerf)).floor().max(0.0) as u32
    };

    for count in 0..=max_count {
        current.push(count);
        let used = if count == 0 {
            0.0
        } else if current[..current.len() - 1].iter().all(|&c| c == 0) {
            count as f64 * lengths[idx] + (count - 1) as f64 * kerf
        } else {
            count as f64 * (lengths[idx] + kerf)
        };
        generate(lengths, _stock_length, kerf, cap, idx + 1, remaining - used, current, patterns);
        current.pop();
        if patterns.len() >= cap {
            return;
        }
    }
}
