pub const DRAGGING_CLASS: &str = "dragging";

const PRIMARY_BUTTON: i16 = 0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragOrigin {
    start_x: f64,
    scroll_left: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragScroll {
    origin: Option<DragOrigin>,
    moved: bool,
    swallow_click: bool,
}

impl DragScroll {
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn begin(&mut self, button: i16, x: f64, scroll_left: f64) -> bool {
        if button != PRIMARY_BUTTON {
            return false;
        }
        self.origin = Some(DragOrigin {
            start_x: x,
            scroll_left,
        });
        self.moved = false;
        self.swallow_click = false;
        true
    }

    /// Dragging right moves the content right.
    pub fn scroll_for(&self, x: f64) -> Option<f64> {
        let origin = self.origin?;
        Some(origin.scroll_left - (x - origin.start_x))
    }

    pub fn move_to(&mut self, x: f64) -> Option<f64> {
        let scroll_left = self.scroll_for(x)?;
        if self.origin.is_some_and(|origin| origin.start_x != x) {
            self.moved = true;
        }
        Some(scroll_left)
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub fn end(&mut self) -> bool {
        if self.origin.take().is_none() {
            return false;
        }
        self.swallow_click = std::mem::take(&mut self.moved);
        true
    }

    /// `true` once for the click that follows a drag which scrolled.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.swallow_click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_primary_button_starts_a_drag() {
        let mut drag = DragScroll::default();

        assert!(!drag.begin(2, 10.0, 0.0));
        assert!(!drag.is_dragging());
        assert!(drag.begin(0, 10.0, 0.0));
        assert!(drag.is_dragging());
    }

    #[test]
    fn moves_are_ignored_until_drag_starts() {
        let mut drag = DragScroll::default();

        assert_eq!(drag.scroll_for(50.0), None);
        assert_eq!(drag.move_to(50.0), None);
        assert!(!drag.has_moved());
    }

    #[test]
    fn scroll_offset_is_inverse_of_pointer_delta() {
        let mut drag = DragScroll::default();
        drag.begin(0, 100.0, 40.0);

        assert_eq!(drag.move_to(130.0), Some(10.0));
        assert_eq!(drag.move_to(60.0), Some(80.0));
        assert_eq!(drag.move_to(100.0), Some(40.0));
    }

    #[test]
    fn ending_discards_the_gesture() {
        let mut drag = DragScroll::default();
        drag.begin(0, 5.0, 0.0);

        assert!(drag.end());
        assert!(!drag.end());
        assert_eq!(drag.scroll_for(20.0), None);
    }

    #[test]
    fn press_without_movement_keeps_the_click() {
        let mut drag = DragScroll::default();
        drag.begin(0, 30.0, 0.0);
        drag.move_to(30.0);

        assert!(!drag.has_moved());
        assert!(drag.end());
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn drag_that_scrolled_swallows_exactly_one_click() {
        let mut drag = DragScroll::default();
        drag.begin(0, 30.0, 0.0);
        drag.move_to(12.0);
        assert!(drag.has_moved());

        assert!(drag.end());
        assert!(!drag.has_moved());
        assert!(drag.take_click_suppression());
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn new_press_clears_a_pending_suppression() {
        let mut drag = DragScroll::default();
        drag.begin(0, 0.0, 0.0);
        drag.move_to(25.0);
        drag.end();

        drag.begin(0, 25.0, 0.0);
        drag.end();
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn containers_do_not_share_state() {
        let mut tags = DragScroll::default();
        let other = DragScroll::default();
        tags.begin(0, 0.0, 0.0);

        assert!(tags.is_dragging());
        assert!(!other.is_dragging());
    }
}
