use crate::config::{HIDDEN_OFFSET_Y, REVEAL_TRANSITION};

/// Element groups that fade in on scroll, each with its own stagger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    CourseCards,
    FeatureCards,
    StatItems,
}

impl RevealGroup {
    pub fn stagger_ms(self) -> u32 {
        match self {
            Self::CourseCards | Self::StatItems => 100,
            Self::FeatureCards => 150,
        }
    }

    /// Delay before the element at `index` is handed to the observer.
    pub fn delay_for(self, index: usize) -> u32 {
        self.stagger_ms()
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Feeds one observer notification. Returns true only on the
    /// `Hidden -> Visible` transition; leaving the viewport never hides.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == Self::Hidden {
            *self = Self::Visible;
            return true;
        }
        false
    }

    pub fn style(self) -> String {
        let (opacity, offset) = match self {
            Self::Hidden => (0.0, HIDDEN_OFFSET_Y),
            Self::Visible => (1.0, 0.0),
        };
        format!("opacity: {opacity}; transform: translateY({offset}px); transition: {REVEAL_TRANSITION};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_proportional_to_index() {
        assert_eq!(RevealGroup::CourseCards.delay_for(0), 0);
        assert_eq!(RevealGroup::CourseCards.delay_for(3), 300);
        assert_eq!(RevealGroup::FeatureCards.delay_for(2), 300);
        assert_eq!(RevealGroup::StatItems.delay_for(4), 400);
    }

    #[test]
    fn reveal_fires_once_and_never_reverts() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert_eq!(state, RevealState::Visible);
        assert!(state.style().starts_with("opacity: 1; transform: translateY(0px);"));
    }

    #[test]
    fn hidden_elements_sit_below_their_slot() {
        assert!(RevealState::Hidden
            .style()
            .starts_with("opacity: 0; transform: translateY(20px);"));
    }
}
