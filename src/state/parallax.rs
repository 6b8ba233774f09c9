use crate::config::PARALLAX_SPEED;

pub fn background_offset(scroll_y: f64) -> f64 {
    -(scroll_y * PARALLAX_SPEED)
}

/// Value for the hero's `background-position-y`.
pub fn background_position(scroll_y: f64) -> String {
    format!("{}px", background_offset(scroll_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_moves_at_half_speed() {
        assert_eq!(background_offset(200.0), -100.0);
        assert_eq!(background_position(200.0), "-100px");
    }

    #[test]
    fn top_of_page_has_no_offset() {
        assert_eq!(background_offset(0.0), 0.0);
    }
}
