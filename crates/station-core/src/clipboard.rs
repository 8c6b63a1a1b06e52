//! In-memory clipboard of detached element copies.

use kurbo::Vec2;

use crate::element::Element;

/// Default offset applied to pasted copies.
pub const DEFAULT_PASTE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// Holds deep copies of elements. Copies keep their original ids until pasted.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    items: Vec<Element>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with copies of `elements`, keeping their order.
    /// An empty input leaves the previous contents alone.
    pub fn copy<'a>(&mut self, elements: impl IntoIterator<Item = &'a Element>) -> usize {
        let items: Vec<Element> = elements.into_iter().cloned().collect();
        if items.is_empty() {
            return 0;
        }
        self.items = items;
        self.items.len()
    }

    /// Fresh copies ready for insertion: new ids and shifted by `offset`.
    pub fn prepare_paste(&self, offset: Vec2) -> Vec<Element> {
        self.items
            .iter()
            .map(|item| {
                let mut copy = item.clone();
                copy.regenerate_id();
                copy.translate(offset);
                copy
            })
            .collect()
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
