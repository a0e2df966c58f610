//! Show/hide state of the explanation panel on experiment pages.

/// Collapsible explanation panel, collapsed until clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TogglePanel {
    open: bool,
}

impl TogglePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip visibility, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn button_label(self) -> &'static str {
        if self.open {
            "Hide Explanation"
        } else {
            "Show Explanation"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut panel = TogglePanel::new();
        assert!(!panel.is_open());
        assert_eq!(panel.button_label(), "Show Explanation");
        assert!(panel.toggle());
        assert_eq!(panel.button_label(), "Hide Explanation");
        assert!(!panel.toggle());
    }
}
