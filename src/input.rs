use egui::{Context, Pos2, Rect, Response};

/// Pointer messages the editor understands, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button went down over the canvas
    Press(Pos2),
    /// Pointer moved while the button is held
    Move(Pos2),
    /// Primary button came up
    Release(Pos2),
}

/// Converts raw egui pointer input over the canvas into `PointerEvent`s.
///
/// Only gestures that start on the canvas are reported; once a gesture has
/// started, moves and the release are followed even outside the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last reported position while the button is held
    pressed_at: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop an active gesture without reporting a release
    pub fn reset(&mut self) {
        self.pressed_at = None;
    }

    /// Process this frame's pointer input for the canvas at `canvas_rect`
    pub fn process_input(
        &mut self,
        ctx: &Context,
        response: &Response,
        canvas_rect: Rect,
    ) -> Vec<PointerEvent> {
        let (pressed, released, down, pos) = ctx.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.primary_down(),
                input.pointer.interact_pos(),
            )
        });
        let pos = pos.map(|pos| pos - canvas_rect.min.to_vec2());

        self.translate(pressed && response.hovered(), down, released, pos)
    }

    /// The platform-independent half of `process_input`.
    ///
    /// `pos` is already in canvas coordinates. Without a position, an active
    /// gesture continues from where it was last seen.
    pub fn translate(
        &mut self,
        pressed: bool,
        down: bool,
        released: bool,
        pos: Option<Pos2>,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let Some(pos) = pos.or(self.pressed_at) else {
            return events;
        };

        if pressed && self.pressed_at.is_none() {
            events.push(PointerEvent::Press(pos));
            self.pressed_at = Some(pos);
        }

        if let Some(last) = self.pressed_at {
            if down && pos != last {
                events.push(PointerEvent::Move(pos));
                self.pressed_at = Some(pos);
            }
            if released {
                events.push(PointerEvent::Release(pos));
                self.pressed_at = None;
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_click_in_one_frame() {
        let mut handler = InputHandler::new();
        let events = handler.translate(true, false, true, Some(pos2(3.0, 4.0)));
        assert_eq!(
            events,
            vec![PointerEvent::Press(pos2(3.0, 4.0)), PointerEvent::Release(pos2(3.0, 4.0))]
        );

        // The gesture is over, so a button still held reports nothing
        assert!(handler.translate(false, true, false, Some(pos2(8.0, 8.0))).is_empty());
    }

    #[test]
    fn test_drag_across_frames() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.translate(true, true, false, Some(pos2(0.0, 0.0))),
            vec![PointerEvent::Press(pos2(0.0, 0.0))]
        );

        // No movement, no event
        assert!(handler.translate(false, true, false, Some(pos2(0.0, 0.0))).is_empty());

        assert_eq!(
            handler.translate(false, true, false, Some(pos2(5.0, 0.0))),
            vec![PointerEvent::Move(pos2(5.0, 0.0))]
        );
        assert_eq!(
            handler.translate(false, false, true, Some(pos2(5.0, 0.0))),
            vec![PointerEvent::Release(pos2(5.0, 0.0))]
        );
    }

    #[test]
    fn test_moves_without_press_are_dropped() {
        let mut handler = InputHandler::new();
        assert!(handler.translate(false, true, false, Some(pos2(9.0, 9.0))).is_empty());
        assert!(handler.translate(false, false, true, Some(pos2(9.0, 9.0))).is_empty());
        assert!(handler.translate(false, false, true, None).is_empty());
    }

    #[test]
    fn test_release_without_position_ends_gesture() {
        let mut handler = InputHandler::new();
        handler.translate(true, true, false, Some(pos2(1.0, 1.0)));
        handler.translate(false, true, false, Some(pos2(6.0, 2.0)));

        // Pointer left the window as the button came up
        assert_eq!(
            handler.translate(false, false, true, None),
            vec![PointerEvent::Release(pos2(6.0, 2.0))]
        );

        assert_eq!(
            handler.translate(true, true, false, Some(pos2(9.0, 9.0))),
            vec![PointerEvent::Press(pos2(9.0, 9.0))]
        );
    }
}
