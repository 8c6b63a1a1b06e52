//! Station Core Library
//!
//! Platform-agnostic scene model and editing logic for the Station design
//! canvas. Rendering lives behind the seam in `station-render`.

pub mod align;
pub mod clipboard;
pub mod config;
pub mod element;
pub mod error;
pub mod handles;
pub mod history;
pub mod input;
pub mod scene;
pub mod selection;
pub mod shortcuts;
pub mod snap;
pub mod tools;
pub mod transform;
pub mod viewport;

pub use align::{Alignment, DistributeAxis};
pub use config::{CanvasPreset, EditorConfig};
pub use element::{Color, Element, ElementId, ElementKind, ElementPatch, MIN_ELEMENT_SIZE};
pub use error::{ConfigError, ElementError};
pub use handles::{Handle, HandleKind, TransformerBinding};
pub use history::History;
pub use input::{Modifiers, PointerAction};
pub use scene::{ImageLoad, LayerDirection, Scene};
pub use selection::Selection;
pub use shortcuts::{Command, ShortcutRegistry};
pub use snap::{GridConfig, SnapResult, snap_to_grid};
pub use tools::ToolKind;
pub use transform::NodeTransform;
pub use viewport::Viewport;
