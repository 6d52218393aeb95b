//! In-memory document used by the CLI and by tests
//!
//! Behaves like a browser window for the purposes of scrolling: writes are
//! clamped to the scrollable range and layout can change at any time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ElementId, Viewport};

/// Serializable description of a page, loadable from a JSON fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport_height: i64,
    pub document_height: i64,
    #[serde(default)]
    pub scroll_offset: i64,
    /// Element id -> top edge relative to the document
    #[serde(default)]
    pub elements: BTreeMap<ElementId, i64>,
}

#[derive(Debug, Clone)]
pub struct SimulatedPage {
    viewport_height: i64,
    document_height: i64,
    scroll_offset: i64,
    elements: BTreeMap<ElementId, i64>,
    /// Every offset written through `set_scroll_offset`, after clamping
    history: Vec<i64>,
}

impl SimulatedPage {
    pub fn new(viewport_height: i64, document_height: i64) -> Self {
        Self {
            viewport_height: viewport_height.max(0),
            document_height: document_height.max(0),
            scroll_offset: 0,
            elements: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    pub fn from_layout(layout: PageLayout) -> Self {
        let mut page = Self::new(layout.viewport_height, layout.document_height);
        page.elements = layout.elements;
        page.jump_to(layout.scroll_offset);
        page
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let layout: PageLayout = serde_json::from_str(json)?;
        Ok(Self::from_layout(layout))
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout {
            viewport_height: self.viewport_height,
            document_height: self.document_height,
            scroll_offset: self.scroll_offset,
            elements: self.elements.clone(),
        }
    }

    /// Builder-style element insertion
    pub fn with_element(mut self, id: impl Into<ElementId>, top: i64) -> Self {
        self.insert_element(id, top);
        self
    }

    pub fn insert_element(&mut self, id: impl Into<ElementId>, top: i64) {
        self.elements.insert(id.into(), top);
    }

    /// Returns false if the element did not exist
    pub fn move_element(&mut self, id: &ElementId, top: i64) -> bool {
        match self.elements.get_mut(id) {
            Some(existing) => {
                *existing = top;
                true
            }
            None => false,
        }
    }

    pub fn remove_element(&mut self, id: &ElementId) -> Option<i64> {
        self.elements.remove(id)
    }

    /// Change the document height; the current offset is re-clamped
    pub fn set_document_height(&mut self, height: i64) {
        self.document_height = height.max(0);
        self.scroll_offset = self.scroll_offset.clamp(0, self.max_scroll());
    }

    /// Scroll without recording history, like a user dragging the scrollbar
    pub fn jump_to(&mut self, offset: i64) {
        self.scroll_offset = offset.clamp(0, self.max_scroll());
    }

    /// Offsets written by the engine, oldest first
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Viewport for SimulatedPage {
    fn current_scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> i64 {
        self.viewport_height
    }

    fn document_scroll_height(&self) -> i64 {
        self.document_height
    }

    fn element_top(&self, element: &ElementId) -> Option<i64> {
        self.elements.get(element).copied()
    }

    fn set_scroll_offset(&mut self, offset: i64) {
        self.jump_to(offset);
        self.history.push(self.scroll_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scroll() {
        let page = SimulatedPage::new(800, 3000);
        assert_eq!(page.max_scroll(), 2200);

        let short = SimulatedPage::new(800, 500);
        assert_eq!(short.max_scroll(), 0);
    }

    #[test]
    fn test_writes_are_clamped_and_recorded() {
        let mut page = SimulatedPage::new(800, 3000);
        page.set_scroll_offset(5000);
        page.set_scroll_offset(-20);
        page.set_scroll_offset(1200);

        assert_eq!(page.history(), &[2200, 0, 1200]);
        assert_eq!(page.current_scroll_offset(), 1200);
    }

    #[test]
    fn test_jump_does_not_record_history() {
        let mut page = SimulatedPage::new(800, 3000);
        page.jump_to(300);
        assert_eq!(page.current_scroll_offset(), 300);
        assert!(page.history().is_empty());
    }

    #[test]
    fn test_layout_edits() {
        let mut page = SimulatedPage::new(800, 3000).with_element("head7", 1000);
        let head7 = ElementId::from("head7");

        assert!(page.move_element(&head7, 1100));
        assert_eq!(page.element_top(&head7), Some(1100));

        assert_eq!(page.remove_element(&head7), Some(1100));
        assert_eq!(page.element_top(&head7), None);
        assert!(!page.move_element(&head7, 10));
    }

    #[test]
    fn test_shrinking_document_reclamps_offset() {
        let mut page = SimulatedPage::new(800, 3000);
        page.jump_to(2000);
        page.set_document_height(1000);
        assert_eq!(page.current_scroll_offset(), 200);
    }

    #[test]
    fn test_from_json() {
        let page = SimulatedPage::from_json(
            r#"{
                "viewport_height": 800,
                "document_height": 3000,
                "scroll_offset": 250,
                "elements": { "head7": 1000 }
            }"#,
        )
        .unwrap();

        assert_eq!(page.current_scroll_offset(), 250);
        assert_eq!(page.element_top(&"head7".into()), Some(1000));
        assert!(matches!(
            SimulatedPage::from_json("{"),
            Err(crate::Error::Json(_))
        ));
    }
}
