//! CSS-like selector parsing for node queries.
//!
//! Supports:
//! - `"button"` - by tag
//! - `"#main"` - by `id` attribute
//! - `".primary"` - by class
//! - `"[data-testid='login']"` - by attribute
//! - `"#main span"` - descendant combinator
//! - `"#main > button"` - child combinator

use tally_core::{Document, NodeId, Tag};
use thiserror::Error;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by tag name
    Type(String),
    /// Match by ID (e.g., `#my-id`)
    Id(String),
    /// Match by class (e.g., `.my-class`)
    Class(String),
    /// Match by attribute (e.g., `[aria-label='foo']`)
    Attribute {
        /// Attribute name
        name: String,
        /// Expected value
        value: String,
    },
    /// Descendant combinator (e.g., `div span`)
    Descendant(Box<Selector>, Box<Selector>),
    /// Child combinator (e.g., `div > button`)
    Child(Box<Selector>, Box<Selector>),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches `node` in `doc`.
    #[must_use]
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        match self {
            Self::Type(name) => Tag::from_name(name).is_some_and(|tag| doc.tag(node) == Ok(tag)),
            Self::Id(id) => doc
                .attribute(node, "id")
                .is_ok_and(|value| value == Some(id.as_str())),
            Self::Class(class) => doc.attribute(node, "class").is_ok_and(|value| {
                value.is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
            }),
            Self::Attribute { name, value } => doc
                .attribute(node, name)
                .is_ok_and(|actual| actual == Some(value.as_str())),
            Self::Descendant(ancestor, selector) => {
                selector.matches(doc, node) && {
                    let mut current = doc.parent(node).ok().flatten();
                    let mut found = false;
                    while let Some(id) = current {
                        if ancestor.matches(doc, id) {
                            found = true;
                            break;
                        }
                        current = doc.parent(id).ok().flatten();
                    }
                    found
                }
            }
            Self::Child(parent, selector) => {
                selector.matches(doc, node)
                    && doc
                        .parent(node)
                        .ok()
                        .flatten()
                        .is_some_and(|id| parent.matches(doc, id))
            }
        }
    }

    /// Attached nodes of `doc` matching this selector, in document order.
    #[must_use]
    pub fn query_all(&self, doc: &Document) -> Vec<NodeId> {
        doc.descendants(doc.root())
            .unwrap_or_default()
            .into_iter()
            .filter(|id| self.matches(doc, *id))
            .collect()
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();

        if self.peek_char().is_none() {
            return Err(SelectorError::Empty);
        }

        let mut selector = self.parse_simple()?;
        loop {
            let before = self.pos;
            self.skip_whitespace();
            match self.peek_char() {
                None => return Ok(selector),
                Some('>') => {
                    self.advance();
                    self.skip_whitespace();
                    let right = self.parse_simple()?;
                    selector = Selector::Child(Box::new(selector), Box::new(right));
                }
                Some(_) if self.pos > before => {
                    let right = self.parse_simple()?;
                    selector = Selector::Descendant(Box::new(selector), Box::new(right));
                }
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            }
        }
    }

    fn parse_simple(&mut self) -> Result<Selector, SelectorError> {
        let first = self.peek_char().ok_or(SelectorError::ExpectedIdentifier)?;

        match first {
            '#' => self.parse_id(),
            '.' => self.parse_class(),
            '[' => self.parse_attribute(),
            _ if first.is_alphabetic() => self.parse_type(),
            _ => Err(SelectorError::UnexpectedChar(first)),
        }
    }

    fn parse_id(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '#'
        let id = self.read_identifier()?;
        Ok(Selector::Id(id))
    }

    fn parse_class(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '.'
        let class = self.read_identifier()?;
        Ok(Selector::Class(class))
    }

    fn parse_type(&mut self) -> Result<Selector, SelectorError> {
        let name = self.read_identifier()?;
        Ok(Selector::Type(name))
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '['

        let name = self.read_until_any(&['=', ']']);
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }
        self.advance(); // Skip '='

        let quote = self.peek_char().filter(|c| *c == '\'' || *c == '"');
        if quote.is_some() {
            self.advance();
        }

        let value = match quote {
            Some(q) => self.read_until_any(&[q]),
            None => self.read_until_any(&[']']),
        };

        if let Some(q) = quote {
            if self.peek_char() != Some(q) {
                return Err(SelectorError::UnclosedAttribute);
            }
            self.advance();
        }

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        Ok(Selector::Attribute { name, value })
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Expected identifier
    #[error("expected identifier")]
    ExpectedIdentifier,
    /// Invalid attribute syntax
    #[error("invalid attribute syntax")]
    InvalidAttribute,
    /// Unclosed attribute bracket
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
}
