use portfolio_core::viewport::ScrollState;

/// Inline style for the fixed progress bar.
#[must_use]
pub fn progress_style(state: &ScrollState) -> String {
    format!("width: {:.2}%;", state.progress_percent())
}

/// Entrance animation class for an observed section.
#[must_use]
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "section-visible"
    } else {
        "section-hidden"
    }
}

#[must_use]
pub fn footer_line(year: i32, brand: &str) -> String {
    format!("© {year} {brand}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_progress_bar_is_empty() {
        assert_eq!(progress_style(&ScrollState::default()), "width: 0.00%;");
    }

    #[test]
    fn footer_mentions_year_and_brand() {
        assert_eq!(
            footer_line(2023, "DevPortfolio"),
            "© 2023 DevPortfolio. All rights reserved."
        );
    }
}
