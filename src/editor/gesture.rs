//! The pointer gesture state machine of the canvas editor.
//!
//! A gesture is one press, any number of moves, and one release.
//!
//! ```text
//!              press (new shape or Select)
//!   ┌──────┐ ─────────────────────────────► ┌───────────┐
//!   │      │ ◄───────────────────────────── │  Drawing  │
//!   │ Idle │            release             └───────────┘
//!   │      │ ─────────────────────────────► ┌───────────┐
//!   │      │ ◄───────────────────────────── │  Moving   │
//!   └──────┘   press on selected / release  └───────────┘
//! ```
//!
//! Both active states carry the anchor (the press position, advanced on
//! every move step while moving) and whether any move happened since the
//! press. A release with no move is a click.

use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No button held
    #[default]
    Idle,
    /// Creating or resizing the last shape, or scrubbing a selection
    Drawing { anchor: Pos2, dragged: bool },
    /// Dragging the selected shape
    Moving { anchor: Pos2, dragged: bool },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Gesture::Moving { .. })
    }

    /// The anchor point, if a gesture is active
    pub fn anchor(&self) -> Option<Pos2> {
        match self {
            Gesture::Idle => None,
            Gesture::Drawing { anchor, .. } | Gesture::Moving { anchor, .. } => Some(*anchor),
        }
    }

    /// Whether any move happened since the press
    pub fn was_dragged(&self) -> bool {
        match self {
            Gesture::Idle => false,
            Gesture::Drawing { dragged, .. } | Gesture::Moving { dragged, .. } => *dragged,
        }
    }

    /// Record a move; the anchor is replaced only when `new_anchor` is given
    pub(crate) fn mark_dragged(&mut self, new_anchor: Option<Pos2>) {
        match self {
            Gesture::Idle => {}
            Gesture::Drawing { anchor, dragged } | Gesture::Moving { anchor, dragged } => {
                *dragged = true;
                if let Some(pos) = new_anchor {
                    *anchor = pos;
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "Idle",
            Gesture::Drawing { .. } => "Drawing",
            Gesture::Moving { .. } => "Moving",
        }
    }
}
