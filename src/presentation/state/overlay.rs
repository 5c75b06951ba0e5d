//! Open/closed state for transient overlays with outside-press dismissal.

use ratatui::layout::{Position, Rect};

/// State of one transient overlay: a dropdown menu, modal or slide-out panel.
///
/// The owning screen registers the overlay's bounding region (and the region
/// of the control that toggles it) while rendering; on every left
/// pointer-down the screen calls [`Overlay::dismiss_on_outside_press`]
/// before routing the event anywhere else. A press outside both regions
/// closes the overlay; a press on the toggle control is left to that
/// control's own handler so the overlay is not dismissed and immediately
/// reopened.
///
/// The dismissal check is a pure function of the press position and the
/// registered regions. It holds no document-level listener: it is active
/// exactly while the overlay is open and disappears with the owning screen.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    open: bool,
    region: Rect,
    toggle_region: Rect,
}

impl Overlay {
    /// Creates a closed overlay with no registered regions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the overlay.
    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Hides the overlay.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Flips the open state. Calling twice restores the original state.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Registers the overlay's bounding region, set during render.
    pub const fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    /// Registers the toggle control's region, set during render.
    pub const fn set_toggle_region(&mut self, region: Rect) {
        self.toggle_region = region;
    }

    /// The registered bounding region.
    #[must_use]
    pub const fn region(&self) -> Rect {
        self.region
    }

    /// Whether a position falls inside the overlay's bounding region.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.region.contains(position)
    }

    /// Whether a position falls on the registered toggle control.
    #[must_use]
    pub fn on_toggle(&self, position: Position) -> bool {
        self.toggle_region.contains(position)
    }

    /// Outside-interaction dismissal.
    ///
    /// Must run for every left pointer-down before the event is routed to
    /// any other handler, so that a press which both lands outside the
    /// overlay and activates something else closes the overlay first.
    /// Returns `true` when the overlay closed in response to this press.
    pub fn dismiss_on_outside_press(&mut self, position: Position) -> bool {
        if !self.open {
            return false;
        }
        if self.region.contains(position) || self.toggle_region.contains(position) {
            return false;
        }
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_at(x: u16, y: u16, w: u16, h: u16) -> Overlay {
        let mut overlay = Overlay::new();
        overlay.set_region(Rect::new(x, y, w, h));
        overlay
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut overlay = Overlay::new();
        assert!(!overlay.is_open());
        overlay.toggle();
        overlay.toggle();
        assert!(!overlay.is_open());

        overlay.open();
        overlay.toggle();
        overlay.toggle();
        assert!(overlay.is_open());
    }

    #[test]
    fn test_outside_press_closes() {
        let mut overlay = overlay_at(10, 10, 20, 5);
        overlay.open();

        assert!(overlay.dismiss_on_outside_press(Position::new(0, 0)));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_inside_press_keeps_open() {
        let mut overlay = overlay_at(10, 10, 20, 5);
        overlay.open();

        assert!(!overlay.dismiss_on_outside_press(Position::new(15, 12)));
        assert!(overlay.is_open());
    }

    #[test]
    fn test_press_on_toggle_control_does_not_dismiss() {
        let mut overlay = overlay_at(10, 10, 20, 5);
        overlay.set_toggle_region(Rect::new(10, 8, 10, 1));
        overlay.open();

        // The toggle control's own handler owns flipping the state; the
        // dismissal pass must not race it.
        assert!(!overlay.dismiss_on_outside_press(Position::new(12, 8)));
        assert!(overlay.is_open());
    }

    #[test]
    fn test_closed_overlay_ignores_presses() {
        let mut overlay = overlay_at(10, 10, 20, 5);
        assert!(!overlay.dismiss_on_outside_press(Position::new(0, 0)));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_empty_region_never_contains() {
        let overlay = Overlay::new();
        assert!(!overlay.contains(Position::new(0, 0)));
    }
}
