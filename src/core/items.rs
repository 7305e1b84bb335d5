//! Item model and board fill planning.
//!
//! Items are the matchable tokens placed on the board. Identity is the `id`;
//! two items match when their kinds are equal. The fill plan divides the board
//! across the kind enumeration so every kind's count stays a multiple of the
//! match size, which keeps every item eventually clearable.

use crate::types::ItemKind;

/// A single matchable token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: u32, kind: ItemKind) -> Self {
        Self { id, kind }
    }

    /// Two items are "the same" for matching iff their kinds are equal.
    pub fn is_same_kind(&self, other: &Item) -> bool {
        self.kind == other.kind
    }
}

/// Per-kind counts covering `total_cells` board cells.
///
/// Every kind receives `total / kinds` rounded down to a multiple of
/// `match_min`; the remainder is handed out in `match_min`-sized chunks, one
/// pass over the enumeration. A residue smaller than one chunk is dropped,
/// so the counts may best-effort undershoot `total_cells`.
pub fn plan_kind_counts(total_cells: usize, match_min: usize) -> [usize; ItemKind::COUNT] {
    let chunk = match_min.max(1);
    let mut per_kind = total_cells / ItemKind::COUNT;
    per_kind -= per_kind % chunk;

    let mut remaining = total_cells - per_kind * ItemKind::COUNT;
    let mut counts = [per_kind; ItemKind::COUNT];
    for count in counts.iter_mut() {
        if remaining >= chunk {
            *count += chunk;
            remaining -= chunk;
        }
    }
    counts
}

/// Build the item multiset for a fill, assigning ids from `next_id` upward.
///
/// Returns the items in enumeration order; the caller shuffles.
pub fn build_items(counts: &[usize; ItemKind::COUNT], next_id: &mut u32) -> Vec<Item> {
    let mut items = Vec::with_capacity(counts.iter().sum());
    for (kind, &count) in ItemKind::ALL.iter().zip(counts.iter()) {
        for _ in 0..count {
            items.push(Item::new(*next_id, *kind));
            *next_id += 1;
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_counts_default_board() {
        // 4x6 = 24 cells across 7 kinds: 3 each, remainder 3 goes to the first kind.
        let counts = plan_kind_counts(24, 3);
        assert_eq!(counts[0], 6);
        for &count in &counts[1..] {
            assert_eq!(count, 3);
        }
        assert_eq!(counts.iter().sum::<usize>(), 24);
    }

    #[test]
    fn test_plan_counts_multiples_of_match_min() {
        for total in [12usize, 21, 24, 42, 63, 120] {
            let counts = plan_kind_counts(total, 3);
            for &count in &counts {
                assert_eq!(count % 3, 0, "count {} not a multiple of 3", count);
            }
            assert!(counts.iter().sum::<usize>() <= total);
        }
    }

    #[test]
    fn test_plan_counts_best_effort_residue() {
        // 25 cells: 3 per kind = 21, remainder 4 covers one chunk of 3,
        // the final cell is dropped.
        let counts = plan_kind_counts(25, 3);
        assert_eq!(counts.iter().sum::<usize>(), 24);
    }

    #[test]
    fn test_build_items_sequential_ids() {
        let counts = plan_kind_counts(24, 3);
        let mut next_id = 1;
        let items = build_items(&counts, &mut next_id);
        assert_eq!(items.len(), 24);
        assert_eq!(next_id, 25);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id, 1 + i as u32);
        }
    }

    #[test]
    fn test_same_kind() {
        let a = Item::new(1, ItemKind::Amber);
        let b = Item::new(2, ItemKind::Amber);
        let c = Item::new(3, ItemKind::Jade);
        assert!(a.is_same_kind(&b));
        assert!(!a.is_same_kind(&c));
        assert_ne!(a, b);
    }
}
