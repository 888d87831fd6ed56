/// Flip and selection state for the displayed cards.
///
/// Rebuilt whenever a new set replaces the old one, so indices always match
/// the current set.
#[derive(Debug, Clone, Default)]
pub struct DeckView {
    flipped: Vec<bool>,
    selected: usize,
}

impl DeckView {
    pub fn new(card_count: usize) -> Self {
        Self {
            flipped: vec![false; card_count],
            selected: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flipped.is_empty()
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn flip(&mut self, index: usize) {
        if let Some(flipped) = self.flipped.get_mut(index) {
            *flipped = !*flipped;
            self.selected = index;
        }
    }

    pub fn flip_selected(&mut self) {
        self.flip(self.selected);
    }

    /// Show every definition, or every term again when all are already flipped
    pub fn flip_all(&mut self) {
        let target = !self.flipped.iter().all(|f| *f);
        self.flipped.iter_mut().for_each(|f| *f = target);
    }

    pub fn reset(&mut self) {
        self.flipped.iter_mut().for_each(|f| *f = false);
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.flipped.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// How many cards of `card_width` fit side by side in `available_width`
pub fn grid_columns(available_width: f32, card_width: f32, spacing: f32) -> usize {
    ((available_width + spacing) / (card_width + spacing))
        .floor()
        .max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_toggles_and_selects() {
        let mut deck = DeckView::new(3);
        assert!(!deck.is_flipped(1));
        deck.flip(1);
        assert!(deck.is_flipped(1));
        assert_eq!(deck.selected(), 1);
        deck.flip(1);
        assert!(!deck.is_flipped(1));
    }

    #[test]
    fn test_out_of_range_flip_is_ignored() {
        let mut deck = DeckView::new(2);
        deck.flip(5);
        assert!(!deck.is_flipped(5));
        assert_eq!(deck.selected(), 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut deck = DeckView::new(2);
        deck.select_previous();
        assert_eq!(deck.selected(), 0);
        deck.select_next();
        deck.select_next();
        assert_eq!(deck.selected(), 1);
        deck.flip_selected();
        assert!(deck.is_flipped(1));

        let mut empty = DeckView::new(0);
        empty.select_next();
        empty.flip_selected();
        assert_eq!(empty.selected(), 0);
    }

    #[test]
    fn test_flip_all_then_reset() {
        let mut deck = DeckView::new(3);
        deck.flip(0);
        deck.flip_all();
        assert!((0..3).all(|i| deck.is_flipped(i)));
        deck.flip_all();
        assert!((0..3).all(|i| !deck.is_flipped(i)));
        deck.flip(2);
        deck.reset();
        assert!(!deck.is_flipped(2));
        assert_eq!(deck.selected(), 0);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(700.0, 220.0, 12.0), 3);
        assert_eq!(grid_columns(463.0, 220.0, 12.0), 2);
        assert_eq!(grid_columns(100.0, 220.0, 12.0), 1);
    }
}
