use crate::config::{HIDDEN_OFFSET_Y, REVEAL_TRANSITION};

/// Category that matches every course.
pub const ALL: &str = "All";

/// Case-sensitive substring match so multi-tag labels like
/// `"Web Development, Design"` match each of their tags.
pub fn matches(category: &str, label: &str) -> bool {
    category == ALL || label.contains(category)
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    active_category: String,
    generation: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL.to_string(),
            generation: 0,
        }
    }
}

impl FilterState {
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active_category == category
    }

    /// Id of the current filter pass; timers from older passes are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn select(&mut self, category: &str) -> u64 {
        self.active_category = category.to_string();
        self.generation += 1;
        self.generation
    }
}

/// Display and transition state of one course card.
///
/// `visible` is the card's layout presence (`display`). It only turns false
/// through [`CardVisibility::collapse`], after the card has faded out.
#[derive(Clone, Debug, PartialEq)]
pub struct CardVisibility {
    pub matches_filter: bool,
    pub visible: bool,
    pub opacity: f64,
    pub offset_y: f64,
    revealed: bool,
}

impl Default for CardVisibility {
    fn default() -> Self {
        Self {
            matches_filter: true,
            visible: true,
            opacity: 0.0,
            offset_y: HIDDEN_OFFSET_Y,
            revealed: false,
        }
    }
}

impl CardVisibility {
    /// Puts a matching card back in the layout; it fades in on [`settle`](Self::settle).
    pub fn show(&mut self) {
        self.matches_filter = true;
        self.visible = true;
    }

    pub fn settle(&mut self) {
        if self.matches_filter {
            self.opacity = 1.0;
            self.offset_y = 0.0;
        }
    }

    pub fn fade_out(&mut self) {
        self.matches_filter = false;
        self.opacity = 0.0;
        self.offset_y = HIDDEN_OFFSET_Y;
    }

    pub fn collapse(&mut self) {
        if !self.matches_filter {
            self.visible = false;
        }
    }

    /// Scroll reveal. Never brings back a card the filter is hiding.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        if self.matches_filter && self.visible {
            self.opacity = 1.0;
            self.offset_y = 0.0;
        }
        true
    }

    pub fn style(&self) -> String {
        format!(
            "display: {}; opacity: {}; transform: translateY({}px); transition: {};",
            if self.visible { "block" } else { "none" },
            self.opacity,
            self.offset_y,
            REVEAL_TRANSITION,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        assert!(matches(ALL, "Marketing"));
        assert!(matches(ALL, ""));
    }

    #[test]
    fn multi_tag_labels_match_each_tag() {
        let label = "Web Development, Design";
        assert!(matches("Design", label));
        assert!(matches("Web Development", label));
        assert!(!matches("Marketing", label));
        assert!(!matches("design", label));
    }

    #[test]
    fn hidden_card_fades_before_leaving_layout() {
        let mut card = CardVisibility::default();
        card.reveal();

        card.fade_out();
        assert_eq!(card.opacity, 0.0);
        assert_eq!(card.offset_y, HIDDEN_OFFSET_Y);
        assert!(card.visible);

        card.collapse();
        assert!(!card.visible);
        assert!(card.style().starts_with("display: none;"));
    }

    #[test]
    fn shown_card_fades_in_on_settle() {
        let mut card = CardVisibility::default();
        card.fade_out();
        card.collapse();

        card.show();
        assert!(card.visible);
        assert_eq!(card.opacity, 0.0);

        card.settle();
        assert_eq!(card.opacity, 1.0);
        assert_eq!(card.offset_y, 0.0);
    }

    #[test]
    fn collapse_keeps_a_card_that_matches_again() {
        let mut card = CardVisibility::default();
        card.fade_out();
        card.show();
        card.collapse();
        assert!(card.visible);
    }

    #[test]
    fn reveal_happens_once_and_respects_the_filter() {
        let mut card = CardVisibility::default();
        card.fade_out();
        assert!(card.reveal());
        assert_eq!(card.opacity, 0.0);
        assert!(!card.reveal());
    }

    #[test]
    fn selecting_a_category_starts_a_new_generation() {
        let mut filter = FilterState::default();
        assert!(filter.is_active(ALL));

        let first = filter.select("Design");
        let second = filter.select("Marketing");
        assert!(second > first);
        assert_eq!(filter.active_category(), "Marketing");
        assert_eq!(filter.generation(), second);
    }
}
