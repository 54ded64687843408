use crate::options::Indent;
use crate::parse::OutlineSink;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One bookmark: a title, its target, and nested bookmarks.
///
/// `title` and `target` are stored as scanned, so both keep their leading
/// quote and the target has its sigil removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entry>,
}

impl Entry {
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Entry {
            title: title.into(),
            target: target.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Entry>) -> Self {
        self.children = children;
        self
    }
}

/// A parsed bookmark outline.
///
/// # Examples
///
/// ```
/// use djvu_outline::{parse_outline, Indent};
///
/// let outline = parse_outline(r##"(bookmarks ("A" "#1" ("B" "#2")) ("C" "#3"))"##).unwrap();
///
/// assert_eq!(outline.len(), 3);
/// assert_eq!(outline.max_depth(), 1);
/// assert_eq!(outline.entries[0].children[0].title, "\"B");
/// assert_eq!(outline.to_lines(Indent::Spaces(2)), vec!["\"A \"1", "  \"B \"2", "\"C \"3"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub entries: Vec<Entry>,
}

impl Outline {
    /// Total number of entries at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(depth, entry)` pairs in depth-first pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![self.entries.iter()],
        }
    }

    /// Deepest nesting level, `0` for a flat or empty outline.
    pub fn max_depth(&self) -> usize {
        self.iter().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Renders one `<prefix><title> <target>` line per entry.
    pub fn to_lines(&self, indent: Indent) -> Vec<String> {
        let unit = indent.unit();
        self.iter()
            .map(|(depth, entry)| format!("{}{} {}", unit.repeat(depth), entry.title, entry.target))
            .collect()
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_lines(Indent::Tab).join("\n"))
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = (usize, &'a Entry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over an [`Outline`].
pub struct Iter<'a> {
    stack: Vec<std::slice::Iter<'a, Entry>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            match self.stack[depth].next() {
                Some(entry) => {
                    self.stack.push(entry.children.iter());
                    return Some((depth, entry));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Rebuilds the entry tree from the flat stream produced by the parser.
///
/// The depth of each entry is the number of characters its prefix adds to the
/// first entry's prefix, so the parser feeding a `TreeBuilder` must use
/// [`Indent::Tab`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    roots: Vec<Entry>,
    open: Vec<Entry>,
    base: Option<usize>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(mut self) -> Outline {
        self.close_to(0);
        Outline { entries: self.roots }
    }

    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            if let Some(entry) = self.open.pop() {
                match self.open.last_mut() {
                    Some(parent) => parent.children.push(entry),
                    None => self.roots.push(entry),
                }
            }
        }
    }
}

impl OutlineSink for TreeBuilder {
    fn entry(&mut self, prefix: &str, title: &str, target: &str) {
        let width = prefix.chars().count();
        let base = *self.base.get_or_insert(width);
        self.close_to(width.saturating_sub(base));
        self.open.push(Entry::new(title, target));
    }
}
