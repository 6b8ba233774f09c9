//! View state of the landing page, free of any DOM access.
//!
//! [`ViewState`] owns the navigation, filter and per-card records and applies
//! every transition; the `LearnHub` component feeds it events and timer ticks.

pub mod action;
pub mod filter;
pub mod navigation;
pub mod parallax;
pub mod reveal;

use filter::{CardVisibility, FilterState};
use navigation::NavigationState;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub navigation: NavigationState,
    pub filter: FilterState,
    card_categories: Vec<String>,
    cards: Vec<CardVisibility>,
}

impl ViewState {
    pub fn new(card_categories: Vec<String>) -> Self {
        let cards = vec![CardVisibility::default(); card_categories.len()];
        Self {
            navigation: NavigationState::default(),
            filter: FilterState::default(),
            card_categories,
            cards,
        }
    }

    pub fn cards(&self) -> &[CardVisibility] {
        &self.cards
    }

    pub fn toggle_menu(&mut self) {
        self.navigation.toggle_menu();
    }

    /// Resolves `href` through `locate` (anchor id -> section top). On success
    /// activates the link, closes the menu and returns the scroll target.
    /// Unresolvable links leave the state untouched.
    pub fn navigate<F>(&mut self, href: &str, locate: F) -> Option<f64>
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        let id = navigation::section_id(href)?;
        let top = locate(id)?;
        self.navigation.activate(href);
        Some(navigation::scroll_target(top))
    }

    /// Starts a filter pass and returns its generation. Matching cards rejoin
    /// the layout, the rest start fading out.
    pub fn filter(&mut self, category: &str) -> u64 {
        let generation = self.filter.select(category);
        for (card, label) in self.cards.iter_mut().zip(&self.card_categories) {
            if filter::matches(category, label) {
                card.show();
            } else {
                card.fade_out();
            }
        }
        generation
    }

    /// Frame tick after [`filter`](Self::filter): matching cards fade in.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.filter.generation() {
            return false;
        }
        self.cards.iter_mut().for_each(CardVisibility::settle);
        true
    }

    /// Fade-out finished: non-matching cards leave the layout.
    pub fn collapse(&mut self, generation: u64) -> bool {
        if generation != self.filter.generation() {
            return false;
        }
        self.cards.iter_mut().for_each(CardVisibility::collapse);
        true
    }

    pub fn reveal_card(&mut self, index: usize) -> bool {
        self.cards.get_mut(index).is_some_and(CardVisibility::reveal)
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| card.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::filter::ALL;
    use super::*;

    fn catalog_state() -> ViewState {
        ViewState::new(vec![
            "Web Development, Design".to_string(),
            "Marketing".to_string(),
            "Data Science".to_string(),
        ])
    }

    fn run_filter(state: &mut ViewState, category: &str) {
        let generation = state.filter(category);
        state.settle(generation);
        state.collapse(generation);
    }

    fn locate_known(id: &str) -> Option<f64> {
        match id {
            "home" => Some(0.0),
            "courses" => Some(640.0),
            _ => None,
        }
    }

    #[test]
    fn navigating_to_a_section_activates_only_that_link() {
        let mut state = catalog_state();
        state.navigate("#home", locate_known);
        let target = state.navigate("#courses", locate_known);

        assert_eq!(target, Some(560.0));
        assert!(state.navigation.is_active("#courses"));
        assert!(!state.navigation.is_active("#home"));
    }

    #[test]
    fn unresolvable_links_change_nothing() {
        let mut state = catalog_state();
        state.navigate("#home", locate_known);
        state.toggle_menu();
        let before = state.clone();

        assert_eq!(state.navigate("#missing", locate_known), None);
        assert_eq!(state.navigate("courses", locate_known), None);
        assert_eq!(state, before);
    }

    #[test]
    fn navigating_closes_an_open_menu() {
        let mut state = catalog_state();
        state.toggle_menu();
        state.navigate("#home", locate_known);
        assert!(!state.navigation.menu_open());
    }

    #[test]
    fn filtering_by_all_shows_every_card() {
        let mut state = catalog_state();
        run_filter(&mut state, "Marketing");
        run_filter(&mut state, ALL);

        assert_eq!(state.visible_count(), 3);
        assert!(state.cards().iter().all(|card| card.opacity == 1.0));
    }

    #[test]
    fn filtering_keeps_only_substring_matches() {
        let mut state = catalog_state();
        run_filter(&mut state, "Design");

        let visible: Vec<bool> = state.cards().iter().map(|card| card.visible).collect();
        assert_eq!(visible, [true, false, false]);
        assert!(state.filter.is_active("Design"));
    }

    #[test]
    fn hidden_card_fades_before_collapse() {
        let mut state = catalog_state();
        let generation = state.filter("Marketing");

        let card = state.cards()[0].clone();
        assert_eq!(card.opacity, 0.0);
        assert!(card.visible);

        state.settle(generation);
        assert!(state.collapse(generation));
        assert!(!state.cards()[0].visible);
    }

    #[test]
    fn no_matches_hides_every_card() {
        let mut state = catalog_state();
        run_filter(&mut state, "Cooking");
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn stale_timers_are_ignored() {
        let mut state = catalog_state();
        let stale = state.filter("Marketing");
        let current = state.filter(ALL);

        assert!(!state.collapse(stale));
        assert_eq!(state.visible_count(), 3);
        assert!(state.settle(current));
    }

    #[test]
    fn card_reveal_is_one_shot() {
        let mut state = catalog_state();
        assert!(state.reveal_card(1));
        assert!(!state.reveal_card(1));
        assert!(!state.reveal_card(42));
        assert_eq!(state.cards()[1].opacity, 1.0);
    }
}
