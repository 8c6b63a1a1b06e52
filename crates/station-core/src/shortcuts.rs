//! Keyboard shortcut registry.

use crate::input::Modifiers;
use crate::tools::ToolKind;

/// Something a shortcut asks the scene to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectAll,
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
    Duplicate,
    Delete,
    Cancel,
    LayerUp,
    LayerDown,
    BringToFront,
    SendToBack,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleGrid,
    ToggleSnap,
    Tool(ToolKind),
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    /// Ctrl, or Cmd on macOS.
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub command: Command,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        command: Command,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            command,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Keys compare case-insensitively.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.command()
            && self.shift == modifiers.shift
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("A", true, false, "Select all elements", Command::SelectAll),
            Shortcut::new("Z", true, false, "Undo", Command::Undo),
            Shortcut::new("Z", true, true, "Redo", Command::Redo),
            Shortcut::new("Y", true, false, "Redo", Command::Redo),
            Shortcut::new("C", true, false, "Copy elements", Command::Copy),
            Shortcut::new("X", true, false, "Cut elements", Command::Cut),
            Shortcut::new("V", true, false, "Paste elements", Command::Paste),
            Shortcut::new("D", true, false, "Duplicate selection", Command::Duplicate),
            Shortcut::new("Delete", false, false, "Delete selected elements", Command::Delete),
            Shortcut::new("Backspace", false, false, "Delete selected elements", Command::Delete),
            Shortcut::new("Escape", false, false, "Cancel current action", Command::Cancel),
            Shortcut::new("]", true, false, "Move layer up", Command::LayerUp),
            Shortcut::new("[", true, false, "Move layer down", Command::LayerDown),
            Shortcut::new("]", true, true, "Bring to front", Command::BringToFront),
            Shortcut::new("[", true, true, "Send to back", Command::SendToBack),
            Shortcut::new("=", true, false, "Zoom in", Command::ZoomIn),
            Shortcut::new("-", true, false, "Zoom out", Command::ZoomOut),
            Shortcut::new("0", true, false, "Reset zoom", Command::ResetZoom),
            Shortcut::new("'", true, false, "Toggle grid", Command::ToggleGrid),
            Shortcut::new("'", true, true, "Toggle snap to grid", Command::ToggleSnap),
            Shortcut::new("V", false, false, "Select tool", Command::Tool(ToolKind::Select)),
            Shortcut::new("R", false, false, "Rectangle tool", Command::Tool(ToolKind::Rect)),
            Shortcut::new("O", false, false, "Circle tool", Command::Tool(ToolKind::Circle)),
            Shortcut::new("T", false, false, "Text tool", Command::Tool(ToolKind::Text)),
            Shortcut::new("L", false, false, "Line tool", Command::Tool(ToolKind::Line)),
            Shortcut::new("A", false, false, "Arrow tool", Command::Tool(ToolKind::Arrow)),
            Shortcut::new("S", false, false, "Star tool", Command::Tool(ToolKind::Star)),
            Shortcut::new("P", false, false, "Polygon tool", Command::Tool(ToolKind::Polygon)),
            Shortcut::new("I", false, false, "Image tool", Command::Tool(ToolKind::Image)),
        ]
    }

    /// The command bound to `key` with `modifiers`, if any.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<Command> {
        Self::all()
            .into_iter()
            .find(|s| s.matches(key, modifiers))
            .map(|s| s.command)
    }

    /// One line per shortcut, for help overlays.
    pub fn describe() -> Vec<String> {
        Self::all()
            .iter()
            .map(|s| format!("{:20} {}", s.format(), s.description))
            .collect()
    }
}
