//! Board module - manages the game grid and the tray
//!
//! The grid is a width x height array of cells, each holding at most one
//! item, stored row-major in a flat vector. The tray is a short ordered row
//! of slots with no adjacency; items are staged there to form matches.
//! Coordinates: (x, y) with x ranging left to right and y top to bottom.
//!
//! While an item sits in the tray the board remembers the grid coordinate it
//! vacated, so the move can be retracted.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::core::items::{build_items, plan_kind_counts, Item};
use crate::core::rng::SimpleRng;
use crate::types::{Dir, GameSettings, ItemKind, TRAY_CELLS_MAX};

/// The game board - grid cells plus the tray staging row
#[derive(Debug, Clone)]
pub struct Board {
    width: u8,
    height: u8,
    match_min: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Option<Item>>,
    /// Tray slots, scanned left to right for the first empty one
    tray: ArrayVec<Option<Item>, TRAY_CELLS_MAX>,
    /// Grid coordinate each trayed item vacated, keyed by item id.
    /// An entry exists only while that item occupies a tray slot.
    origins: HashMap<u32, (u8, u8)>,
    next_item_id: u32,
}

impl Board {
    /// Create a new empty board from settings
    pub fn new(settings: &GameSettings) -> Self {
        let width = settings.board_size_x;
        let height = settings.board_size_y;
        let tray_len = (settings.tray_cells as usize).clamp(1, TRAY_CELLS_MAX);

        let mut tray = ArrayVec::new();
        for _ in 0..tray_len {
            tray.push(None);
        }

        Self {
            width,
            height,
            match_min: settings.matches_min.max(1),
            cells: vec![None; width as usize * height as usize],
            tray,
            origins: HashMap::new(),
            next_item_id: 1,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: u8, y: u8) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of tray slots
    pub fn tray_len(&self) -> usize {
        self.tray.len()
    }

    /// Minimum group size for a match
    pub fn match_min(&self) -> u8 {
        self.match_min
    }

    /// Get cell contents at (x, y); returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<Option<Item>> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if a grid cell holds an item (out of bounds counts as empty)
    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// 4-directional neighbour coordinate; None at the board edge.
    /// Tray slots have no neighbours.
    pub fn neighbour(&self, x: u8, y: u8, dir: Dir) -> Option<(u8, u8)> {
        self.index(x, y)?;
        let (nx, ny) = match dir {
            Dir::Up => (x, y.checked_sub(1)?),
            Dir::Down => (x, y + 1),
            Dir::Left => (x.checked_sub(1)?, y),
            Dir::Right => (x + 1, y),
        };
        self.index(nx, ny).map(|_| (nx, ny))
    }

    /// Populate every grid cell with a newly created item.
    ///
    /// Counts per kind follow the fill plan (multiples of the match size,
    /// remainder redistributed in chunks); the multiset is shuffled and
    /// placed row-major. If the plan undershoots the cell count the trailing
    /// cells stay empty.
    pub fn fill(&mut self, rng: &mut SimpleRng) {
        let total = self.cells.len();
        let counts = plan_kind_counts(total, self.match_min as usize);
        let mut items = build_items(&counts, &mut self.next_item_id);
        rng.shuffle(&mut items);

        for (cell, item) in self.cells.iter_mut().zip(items.into_iter()) {
            *cell = Some(item);
        }
    }

    /// Raw grid cells, row-major
    pub fn cells(&self) -> &[Option<Item>] {
        &self.cells
    }

    /// Iterate occupied grid cells in row-major order
    pub fn iter_occupied(&self) -> impl Iterator<Item = (u8, u8, Item)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|item| ((idx % width) as u8, (idx / width) as u8, item))
        })
    }

    /// True iff every grid cell is empty (tray state is irrelevant)
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// True iff every tray slot holds an item
    pub fn is_tray_full(&self) -> bool {
        self.tray.iter().all(|slot| slot.is_some())
    }

    /// True iff no tray slot holds an item
    pub fn is_tray_empty(&self) -> bool {
        self.tray.iter().all(|slot| slot.is_none())
    }

    /// Tray slots in order
    pub fn tray(&self) -> &[Option<Item>] {
        &self.tray
    }

    /// Item in a tray slot, if any
    pub fn tray_item(&self, slot: usize) -> Option<Item> {
        self.tray.get(slot).copied().flatten()
    }

    /// True iff some trayed item has this kind
    pub fn tray_has_kind(&self, kind: ItemKind) -> bool {
        self.tray
            .iter()
            .flatten()
            .any(|item| item.kind == kind)
    }

    /// Recorded origin coordinate for a trayed item
    pub fn origin_of(&self, item: &Item) -> Option<(u8, u8)> {
        self.origins.get(&item.id).copied()
    }

    /// Move the item at a grid cell into the first empty tray slot.
    ///
    /// Records the vacated coordinate for retraction and returns the slot
    /// index. Returns None, leaving the grid untouched, when the cell is
    /// empty or every tray slot is occupied; callers treat that as a no-op.
    pub fn move_to_tray(&mut self, x: u8, y: u8) -> Option<usize> {
        let slot = self.tray.iter().position(|s| s.is_none())?;
        let idx = self.index(x, y)?;
        let item = self.cells[idx].take()?;

        self.origins.insert(item.id, (x, y));
        self.tray[slot] = Some(item);
        Some(slot)
    }

    /// Group occupied tray slots by kind and return every group that reached
    /// the match minimum, concatenated group by group in slot order.
    ///
    /// Bucketing is first-seen-kind: a group opens the first time a kind
    /// appears and later same-kind slots join it, so the result is fully
    /// determined by the tray contents. Does not mutate state.
    pub fn find_tray_matches(&self) -> ArrayVec<usize, TRAY_CELLS_MAX> {
        let mut seen: ArrayVec<ItemKind, TRAY_CELLS_MAX> = ArrayVec::new();
        for item in self.tray.iter().flatten() {
            if !seen.contains(&item.kind) {
                seen.push(item.kind);
            }
        }

        let mut matches = ArrayVec::new();
        for kind in &seen {
            let mut group: ArrayVec<usize, TRAY_CELLS_MAX> = ArrayVec::new();
            for (slot, cell) in self.tray.iter().enumerate() {
                if let Some(item) = cell {
                    if item.kind == *kind {
                        group.push(slot);
                    }
                }
            }
            if group.len() >= self.match_min as usize {
                matches.extend(group);
            }
        }
        matches
    }

    /// Return a trayed item to the grid cell it vacated.
    ///
    /// No-op (false) when the slot is empty, no origin is recorded, or the
    /// origin cell is occupied; the tray slot is left untouched in all of
    /// those cases.
    pub fn move_from_tray_to_origin(&mut self, slot: usize) -> bool {
        let Some(item) = self.tray_item(slot) else {
            return false;
        };
        let Some(&(x, y)) = self.origins.get(&item.id) else {
            return false;
        };
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if self.cells[idx].is_some() {
            return false;
        }

        self.tray[slot] = None;
        self.origins.remove(&item.id);
        self.cells[idx] = Some(item);
        true
    }

    /// Free a tray slot and drop its origin record, returning the item.
    /// Used when a matched item leaves play.
    pub fn take_tray(&mut self, slot: usize) -> Option<Item> {
        let item = self.tray.get_mut(slot)?.take()?;
        self.origins.remove(&item.id);
        Some(item)
    }

    /// Free every tray slot and the whole origin mapping
    pub fn clear_tray(&mut self) {
        for slot in self.tray.iter_mut() {
            *slot = None;
        }
        self.origins.clear();
    }

    /// Place an item directly on a grid cell.
    /// Fails (false) when the cell is out of bounds or already occupied.
    pub fn put(&mut self, x: u8, y: u8, item: Item) -> bool {
        match self.index(x, y) {
            Some(idx) if self.cells[idx].is_none() => {
                self.cells[idx] = Some(item);
                true
            }
            _ => false,
        }
    }

    /// Remove and return the item from a grid cell
    pub fn take(&mut self, x: u8, y: u8) -> Option<Item> {
        let idx = self.index(x, y)?;
        self.cells[idx].take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        Board::new(&GameSettings {
            board_size_x: 3,
            board_size_y: 2,
            tray_cells: 3,
            ..GameSettings::default()
        })
    }

    #[test]
    fn test_index_bounds() {
        let board = small_board();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(2, 0), Some(2));
        assert_eq!(board.index(0, 1), Some(3));
        assert_eq!(board.index(2, 1), Some(5));
        assert_eq!(board.index(3, 0), None);
        assert_eq!(board.index(0, 2), None);
    }

    #[test]
    fn test_neighbour_links() {
        let board = small_board();
        assert_eq!(board.neighbour(1, 0, Dir::Left), Some((0, 0)));
        assert_eq!(board.neighbour(1, 0, Dir::Right), Some((2, 0)));
        assert_eq!(board.neighbour(1, 0, Dir::Down), Some((1, 1)));
        assert_eq!(board.neighbour(1, 0, Dir::Up), None);
        assert_eq!(board.neighbour(0, 0, Dir::Left), None);
        assert_eq!(board.neighbour(2, 1, Dir::Right), None);
        assert_eq!(board.neighbour(2, 1, Dir::Down), None);
        // Out-of-bounds start has no neighbours at all.
        assert_eq!(board.neighbour(9, 9, Dir::Up), None);
    }

    #[test]
    fn test_move_to_tray_full_is_noop() {
        let mut board = small_board();
        for (i, kind) in [ItemKind::Amber, ItemKind::Beryl, ItemKind::Coral]
            .into_iter()
            .enumerate()
        {
            board.put(i as u8, 0, Item::new(100 + i as u32, kind));
            assert_eq!(board.move_to_tray(i as u8, 0), Some(i));
        }
        assert!(board.is_tray_full());

        // A fourth placement must leave the grid untouched.
        let item = Item::new(200, ItemKind::Jade);
        board.put(0, 1, item);
        assert_eq!(board.move_to_tray(0, 1), None);
        assert_eq!(board.get(0, 1), Some(Some(item)));
    }

    #[test]
    fn test_move_to_tray_empty_cell_is_noop() {
        let mut board = small_board();
        assert_eq!(board.move_to_tray(0, 0), None);
        assert!(board.is_tray_empty());
    }

    #[test]
    fn test_retraction_restores_origin() {
        let mut board = small_board();
        let item = Item::new(1, ItemKind::Opal);
        board.put(2, 1, item);

        let slot = board.move_to_tray(2, 1).unwrap();
        assert_eq!(board.get(2, 1), Some(None));
        assert_eq!(board.origin_of(&item), Some((2, 1)));

        assert!(board.move_from_tray_to_origin(slot));
        assert_eq!(board.get(2, 1), Some(Some(item)));
        assert_eq!(board.tray_item(slot), None);
        assert_eq!(board.origin_of(&item), None);
    }

    #[test]
    fn test_retraction_noop_without_origin() {
        let mut board = small_board();
        assert!(!board.move_from_tray_to_origin(0));
        assert!(!board.move_from_tray_to_origin(99));
    }

    #[test]
    fn test_take_tray_drops_origin() {
        let mut board = small_board();
        let item = Item::new(5, ItemKind::Ruby);
        board.put(0, 0, item);
        let slot = board.move_to_tray(0, 0).unwrap();

        assert_eq!(board.take_tray(slot), Some(item));
        assert_eq!(board.origin_of(&item), None);
        assert!(board.is_tray_empty());
    }

    #[test]
    fn test_clear_tray_drains_everything() {
        let mut board = small_board();
        board.put(0, 0, Item::new(1, ItemKind::Amber));
        board.put(1, 0, Item::new(2, ItemKind::Beryl));
        board.move_to_tray(0, 0);
        board.move_to_tray(1, 0);

        board.clear_tray();
        assert!(board.is_tray_empty());
        assert_eq!(board.origin_of(&Item::new(1, ItemKind::Amber)), None);
    }

    #[test]
    fn test_fill_occupies_everything() {
        let mut board = Board::new(&GameSettings::default());
        let mut rng = SimpleRng::new(42);
        board.fill(&mut rng);

        assert_eq!(board.iter_occupied().count(), 24);
        assert!(!board.is_cleared());
        assert!(board.is_tray_empty());
    }
}
