use crate::cell::CellKey;

/// State of the single shared tooltip overlay. Mutated only by cell
/// enter/leave handlers; the event queue serializes all access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub text: String,
    /// Year of the hovered record, exposed as `data-year` on the overlay.
    pub year: i32,
    hovered: Option<CellKey>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a cell: show the tooltip with that cell's text.
    /// A later enter always wins over an earlier one.
    pub fn show(&mut self, key: CellKey, year: i32, text: String) {
        self.visible = true;
        self.text = text;
        self.year = year;
        self.hovered = Some(key);
    }

    /// Pointer left a cell. Only hides the tooltip if that cell is still
    /// the one being shown, so a stale leave racing a newer enter cannot
    /// blank the tooltip.
    pub fn hide(&mut self, key: CellKey) {
        if self.hovered == Some(key) {
            self.visible = false;
            self.hovered = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL_A: CellKey = (1900, 0);
    const CELL_B: CellKey = (1900, 1);

    #[test]
    fn test_show_then_hide() {
        let mut tooltip = TooltipState::new();
        tooltip.show(CELL_A, 1900, "1900 January - 8.5 (0.5)".into());
        assert!(tooltip.visible);
        assert_eq!(tooltip.year, 1900);

        tooltip.hide(CELL_A);
        assert!(!tooltip.visible);
    }

    #[test]
    fn test_last_enter_wins_over_stale_leave() {
        let mut tooltip = TooltipState::new();
        tooltip.show(CELL_A, 1900, "cell a".into());
        tooltip.show(CELL_B, 1900, "cell b".into());
        // Stale leave from the first cell arrives after the second enter.
        tooltip.hide(CELL_A);
        assert!(tooltip.visible);
        assert_eq!(tooltip.text, "cell b");

        tooltip.hide(CELL_B);
        assert!(!tooltip.visible);
    }

    #[test]
    fn test_hidden_by_default() {
        let tooltip = TooltipState::new();
        assert!(!tooltip.visible);
        assert!(tooltip.text.is_empty());
    }
}
