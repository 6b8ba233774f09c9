use crate::config::{ENROLL_DELAY_MS, PREVIEW_DELAY_MS};

pub const SIGN_UP_MESSAGE: &str = "Redirecting to sign up page...";

const SUCCESS_STYLE: &str = "background-color: #2ecc71; border-color: #2ecc71;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Enroll,
    Preview,
}

impl ActionKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Enroll => "primary-btn",
            Self::Preview => "outline-btn",
        }
    }

    pub fn label(self, phase: ButtonPhase) -> &'static str {
        match (self, phase) {
            (Self::Enroll, ButtonPhase::Idle) => "Enroll Now",
            (Self::Enroll, ButtonPhase::Busy) => "Enrolling...",
            (Self::Enroll, ButtonPhase::Done) => "Enrolled!",
            (Self::Preview, ButtonPhase::Idle) => "Preview",
            (Self::Preview, ButtonPhase::Busy) => "Loading...",
            (Self::Preview, ButtonPhase::Done) => "Preview Opened",
        }
    }

    /// Simulated latency between `Busy` and `Done`.
    pub fn delay_ms(self) -> u32 {
        match self {
            Self::Enroll => ENROLL_DELAY_MS,
            Self::Preview => PREVIEW_DELAY_MS,
        }
    }

    pub fn message(self, course_title: &str) -> String {
        match self {
            Self::Enroll => format!(
                "Enrollment initiated for: {course_title}\n\nRedirecting to checkout..."
            ),
            Self::Preview => format!(
                "Preview mode activated for: {course_title}\n\nThis will open a demo lesson."
            ),
        }
    }

    fn disabled_in(self, phase: ButtonPhase) -> bool {
        match self {
            Self::Enroll => phase != ButtonPhase::Idle,
            Self::Preview => phase == ButtonPhase::Done,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Busy,
    Done,
}

/// Simulated enroll/preview button: `Idle -> Busy -> Done`, terminal at `Done`.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionButton {
    kind: ActionKind,
    phase: ButtonPhase,
}

impl ActionButton {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            phase: ButtonPhase::Idle,
        }
    }

    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    pub fn press(&mut self) -> bool {
        if self.phase != ButtonPhase::Idle {
            return false;
        }
        self.phase = ButtonPhase::Busy;
        true
    }

    pub fn complete(&mut self) -> bool {
        if self.phase != ButtonPhase::Busy {
            return false;
        }
        self.phase = ButtonPhase::Done;
        true
    }

    pub fn label(&self) -> &'static str {
        self.kind.label(self.phase)
    }

    pub fn disabled(&self) -> bool {
        self.kind.disabled_in(self.phase)
    }

    pub fn style(&self) -> Option<&'static str> {
        (self.kind == ActionKind::Enroll && self.phase == ButtonPhase::Done).then_some(SUCCESS_STYLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enroll_runs_idle_busy_done_once() {
        let mut button = ActionButton::new(ActionKind::Enroll);
        let mut labels = vec![button.label()];

        assert!(button.press());
        labels.push(button.label());
        assert!(button.disabled());

        assert!(button.complete());
        labels.push(button.label());
        assert!(button.disabled());
        assert_eq!(button.style(), Some(SUCCESS_STYLE));

        assert!(!button.press());
        assert!(!button.complete());
        assert_eq!(labels, ["Enroll Now", "Enrolling...", "Enrolled!"]);
        assert_eq!(button.label(), "Enrolled!");
    }

    #[test]
    fn preview_disables_only_when_opened() {
        let mut button = ActionButton::new(ActionKind::Preview);
        button.press();
        assert_eq!(button.label(), "Loading...");
        assert!(!button.disabled());

        button.complete();
        assert_eq!(button.label(), "Preview Opened");
        assert!(button.disabled());
        assert_eq!(button.style(), None);
    }

    #[test]
    fn complete_before_press_is_ignored() {
        let mut button = ActionButton::new(ActionKind::Preview);
        assert!(!button.complete());
        assert_eq!(button.phase(), ButtonPhase::Idle);
    }

    #[test]
    fn messages_name_the_course() {
        assert_eq!(
            ActionKind::Enroll.message("Rust Basics"),
            "Enrollment initiated for: Rust Basics\n\nRedirecting to checkout..."
        );
        assert!(ActionKind::Preview.message("Rust Basics").contains("Rust Basics"));
        assert_eq!(ActionKind::Enroll.delay_ms(), 1500);
        assert_eq!(ActionKind::Preview.delay_ms(), 1000);
    }
}
