use crate::config::HEADER_OFFSET;

const BARS_OPEN: [&str; 3] = [
    "transform: rotate(45deg) translate(5px, 5px);",
    "opacity: 0;",
    "transform: rotate(-45deg) translate(7px, -6px);",
];

const BARS_CLOSED: [&str; 3] = [
    "transform: rotate(0);",
    "opacity: 1;",
    "transform: rotate(0);",
];

/// Mobile menu and active nav link.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    active_link: Option<String>,
    menu_open: bool,
}

impl NavigationState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// The toggle shows the "X" glyph exactly while the menu is open.
    pub fn toggle_animated(&self) -> bool {
        self.menu_open
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.active_link.as_deref() == Some(href)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Marks `href` as the only active link and closes the mobile menu.
    pub fn activate(&mut self, href: &str) {
        self.active_link = Some(href.to_string());
        self.close_menu();
    }

    pub fn bar_styles(&self) -> [&'static str; 3] {
        toggle_bar_styles(self.toggle_animated())
    }
}

pub fn toggle_bar_styles(open: bool) -> [&'static str; 3] {
    if open {
        BARS_OPEN
    } else {
        BARS_CLOSED
    }
}

/// Anchor id referenced by an in-page href (`"#courses"` -> `"courses"`).
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Viewport scroll position that puts a section's top just below the fixed header.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_OFFSET
}
