//! Displayable output of a visualization plugin.
//!
//! An [`Element`] is a small, frontend-neutral description of what a plugin
//! wants shown. The core never inspects it; the terminal shell turns it into
//! widgets.

/// A displayable element produced by a plugin renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Heading shown above the body.
    pub title: String,
    pub body: ElementBody,
}

/// The content of an [`Element`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ElementBody {
    #[default]
    Empty,
    /// Plain lines of text.
    Text(Vec<String>),
    /// A table with a header row.
    Table(Table),
    /// Horizontal bars, one per labelled value.
    Bars(Vec<Bar>),
}

/// Tabular content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A labelled bar value.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl Element {
    /// An element with a title and nothing to show.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: ElementBody::Empty,
        }
    }

    /// A text element.
    pub fn text<I, S>(title: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            body: ElementBody::Text(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// A table element.
    pub fn table(title: impl Into<String>, header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.into(),
            body: ElementBody::Table(Table { header, rows }),
        }
    }

    /// A bar chart element.
    pub fn bars(title: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            title: title.into(),
            body: ElementBody::Bars(bars),
        }
    }

    /// Check if the element has no content.
    pub fn is_empty(&self) -> bool {
        match &self.body {
            ElementBody::Empty => true,
            ElementBody::Text(lines) => lines.is_empty(),
            ElementBody::Table(table) => table.rows.is_empty(),
            ElementBody::Bars(bars) => bars.is_empty(),
        }
    }
}
