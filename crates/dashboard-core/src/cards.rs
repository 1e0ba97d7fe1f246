//! Card Expansion
//!
//! At most one dashboard card is expanded at a time.

pub type CardId = &'static str;

/// Cards whose state changed in one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardChange {
    pub collapsed: Option<CardId>,
    /// Charts inside this card need a resize
    pub expanded: Option<CardId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardExpansion {
    expanded: Option<CardId>,
}

impl CardExpansion {
    pub fn expanded(&self) -> Option<CardId> {
        self.expanded
    }

    pub fn is_expanded(&self, card: CardId) -> bool {
        self.expanded == Some(card)
    }

    /// Collapse `card` if it is open; otherwise open it and collapse the
    /// previously open card.
    pub fn toggle(&mut self, card: CardId) -> CardChange {
        if self.is_expanded(card) {
            self.expanded = None;
            return CardChange { collapsed: Some(card), expanded: None };
        }
        let previous = self.expanded.replace(card);
        CardChange { collapsed: previous, expanded: Some(card) }
    }

    /// Close control: always leaves `card` collapsed.
    pub fn close(&mut self, card: CardId) -> CardChange {
        if self.is_expanded(card) {
            self.expanded = None;
            CardChange { collapsed: Some(card), expanded: None }
        } else {
            CardChange::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [CardId; 4] = ["stock", "location", "supplier", "forecast"];

    #[test]
    fn test_toggle_expands_and_collapses() {
        let mut cards = CardExpansion::default();
        let change = cards.toggle("stock");
        assert_eq!(change, CardChange { collapsed: None, expanded: Some("stock") });
        assert!(cards.is_expanded("stock"));

        let change = cards.toggle("stock");
        assert_eq!(change, CardChange { collapsed: Some("stock"), expanded: None });
        assert_eq!(cards.expanded(), None);
    }

    #[test]
    fn test_toggle_other_collapses_previous() {
        let mut cards = CardExpansion::default();
        cards.toggle("stock");
        let change = cards.toggle("location");
        assert_eq!(change, CardChange { collapsed: Some("stock"), expanded: Some("location") });
        assert!(!cards.is_expanded("stock"));
    }

    #[test]
    fn test_close_never_expands() {
        let mut cards = CardExpansion::default();
        assert_eq!(cards.close("stock"), CardChange::default());
        assert_eq!(cards.expanded(), None);

        cards.toggle("stock");
        assert_eq!(cards.close("location"), CardChange::default());
        assert!(cards.is_expanded("stock"));
        cards.close("stock");
        assert_eq!(cards.expanded(), None);
    }

    #[test]
    fn test_at_most_one_expanded_over_long_sequence() {
        let mut cards = CardExpansion::default();
        let mut seed: u32 = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let card = CARDS[(seed >> 16) as usize % CARDS.len()];
            if seed & 1 == 0 {
                cards.toggle(card);
            } else {
                cards.close(card);
            }
            let open = CARDS.iter().filter(|c| cards.is_expanded(**c)).count();
            assert!(open <= 1);
        }
    }
}
