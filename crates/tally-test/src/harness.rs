//! Test harness for Tally widgets.

use tally_core::{Document, NodeId};
use tally_widgets::{CounterConfig, PageView};
use tally_yaml::Page;

use crate::selector::Selector;

/// Headless page for interacting with mounted widgets.
pub struct Harness {
    /// Document the widgets render into
    doc: Document,
    /// Mounted widgets, in mount order
    view: PageView<NodeId>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// Create a harness with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
            view: PageView::new(),
        }
    }

    /// Create a harness with every widget of `page` mounted.
    ///
    /// # Panics
    ///
    /// Panics if the page cannot be mounted.
    #[must_use]
    pub fn with_page(page: &Page) -> Self {
        let mut harness = Self::new();
        harness.mount_page(page);
        harness
    }

    // === Mounting ===

    /// Mount a counter into a new container with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is taken.
    pub fn mount_counter(&mut self, id: &str, config: &CounterConfig) -> &mut Self {
        let root = self.doc.root();
        if let Err(e) = self.view.mount_counter(id, config, &mut self.doc, &root) {
            panic!("Failed to mount counter '{id}': {e}");
        }
        self
    }

    /// Mount every widget of `page`.
    ///
    /// # Panics
    ///
    /// Panics if any widget fails to mount.
    pub fn mount_page(&mut self, page: &Page) -> &mut Self {
        let root = self.doc.root();
        for spec in &page.widgets {
            if let Err(e) = self.view.mount_widget(spec, &mut self.doc, &root) {
                panic!("Failed to mount widget '{}': {e}", spec.id);
            }
        }
        self
    }

    // === Event Simulation ===

    /// Simulate a click on the first node matching the selector.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(node) = self.query(selector) {
            if let Ok(event) = self.doc.click(node) {
                if let Err(e) = self.view.dispatch(&mut self.doc, &event) {
                    panic!("Click on '{selector}' failed: {e}");
                }
            }
        }
        self
    }

    /// Simulate `times` clicks on the first node matching the selector.
    pub fn click_n(&mut self, selector: &str, times: usize) -> &mut Self {
        for _ in 0..times {
            self.click(selector);
        }
        self
    }

    // === Queries ===

    /// Query for the first node matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// Query for all nodes matching the selector.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<NodeId> {
        Selector::parse(selector).map_or_else(|_| Vec::new(), |sel| sel.query_all(&self.doc))
    }

    /// Text content of the first matching node, empty if none matches.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .and_then(|node| self.doc.text_content(node).ok())
            .unwrap_or_default()
    }

    /// Check if a node exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// HTML of the whole document.
    #[must_use]
    pub fn html(&self) -> String {
        self.doc.to_html(self.doc.root()).unwrap_or_default()
    }

    /// The underlying document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.doc
    }

    /// The mounted widgets.
    #[must_use]
    pub const fn view(&self) -> &PageView<NodeId> {
        &self.view
    }

    // === Assertions ===

    /// Assert that a node exists.
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected node matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a node does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the node exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected node matching '{selector}' to not exist"
        );
        self
    }

    /// Assert that text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert the count of matching nodes.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} nodes matching '{selector}' but found {actual}"
        );
        self
    }
}
