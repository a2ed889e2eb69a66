use scraper::{ElementRef, Html, Selector};

use crate::{Error, Result};

/// A parsed page. Parsing is best-effort, so any byte sequence produces a tree.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses `body` as a full HTML document. Invalid UTF-8 is replaced, not rejected.
    pub fn parse(body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        Self {
            html: Html::parse_document(&text),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Number of element nodes in the tree, including the implied `html`, `head` and `body`.
    pub fn element_count(&self) -> usize {
        self.html
            .tree
            .root()
            .descendants()
            .filter(|node| node.value().is_element())
            .count()
    }

    /// Element names in document order, indented two spaces per level.
    /// Two documents with equal outlines have the same element structure.
    pub fn outline(&self) -> Vec<String> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| {
                let el = node.value().as_element()?;
                // The document node is always the outermost ancestor.
                let depth = node.ancestors().count() - 1;
                Some(format!("{}{}", "  ".repeat(depth), el.name()))
            })
            .collect()
    }

    /// Trimmed text of the first `<title>`, if it has any.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let title = self
            .html
            .select(&selector)
            .next()?
            .text()
            .collect::<String>();
        let title = title.trim();
        (!title.is_empty()).then(|| title.to_string())
    }

    /// All elements matching the CSS selector `sel_str`, in document order.
    pub fn select(&self, sel_str: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = create_selector(sel_str)?;
        Ok(self.html.select(&selector).collect())
    }

    /// Number of recoverable errors html5ever hit while building the tree.
    pub fn parse_error_count(&self) -> usize {
        self.html.errors.len()
    }
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}
