//! Demand Expander (C3): explodes `quantity > 1` demands into uniquely
//! identified singletons.

use crate::model::Part;

/// Explodes every `Part` with `quantity > 1` into `quantity` singletons,
/// each with `quantity == 1`. A `Part` with `quantity == 1` keeps its id
/// unchanged; otherwise ids are suffixed `_1`..`_n`.
pub(crate) fn expand_demand(parts: &[Part]) -> Vec<Part> {
    let mut out = Vec::with_capacity(parts.len());
    for part in parts {
        if part.quantity == 1 {
            out.push(Part {
                id: part.id.clone(),
                length: part.length,
                quantity: 1,
                label: part.label.clone(),
            });
        } else {
            for i in 1..=part.quantity {
                out.push(Part {
                    id: format!("{}_{}", part.id, i),
                    length: part.length,
                    quantity: 1,
                    label: part.label.clone(),
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_one_keeps_id() {
        let parts = vec![Part::new("a", 100.0, 1)];
        let expanded = expand_demand(&parts);
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].id, "a");
    }

    #[test]
    fn quantity_n_suffixes_ids() {
        let parts = vec![Part::new("a", 100.0, 3)];
        let expanded = expand_demand(&parts);
        let ids: Vec<&str> = expanded.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a_1", "a_2", "a_3"]);
        assert!(expanded.iter().all(|p| p.quantity == 1));
    }

    #[test]
    fn label_is_inherited() {
        let parts = vec![Part::new("a", 100.0, 2).with_label("Shelf rail")];
        let expanded = expand_demand(&parts);
        assert!(expanded.iter().all(|p| p.label == "Shelf rail"));
    }
}
