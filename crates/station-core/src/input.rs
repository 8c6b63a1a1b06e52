//! Pointer input types exchanged with the host UI.

use serde::{Deserialize, Serialize};

use crate::element::ElementId;
use crate::handles::HandleKind;

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a pointer-down started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Nothing happened.
    None,
    /// The selection changed without starting a drag.
    Selected,
    /// Selected elements are being dragged.
    Drag,
    /// A transformer handle is being dragged.
    Transform(HandleKind),
    /// A marquee selection started. Released without motion it clears the
    /// selection unless shift is held.
    Marquee,
    /// A line or arrow draft started.
    Draft,
    /// A click-to-place shape was created.
    Placed(ElementId),
    /// The image tool asked the host to load an image.
    ImageRequested(u64),
}

impl PointerAction {
    /// Whether the action leaves a gesture in flight.
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            PointerAction::Drag
                | PointerAction::Transform(_)
                | PointerAction::Marquee
                | PointerAction::Draft
        )
    }
}
