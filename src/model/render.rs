use serde::Serialize;

use super::handle::DocumentHandle;

/// Style tag for a sidebar row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// The anchor row (front of the MRU list)
    Current,
    /// A document with unsaved changes
    Modified,
    Normal,
}

/// Back-reference from a row to the document it shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderData {
    pub handle: DocumentHandle,
    pub path: String,
}

/// One display-ready sidebar row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderItem {
    pub label: String,
    pub highlight: Highlight,
    pub data: RenderData,
}

/// Ordered rows for the presentation layer, or an explicit "no documents".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderList {
    #[default]
    Empty,
    Items(Vec<RenderItem>),
}

impl RenderList {
    pub fn items(&self) -> &[RenderItem] {
        match self {
            RenderList::Empty => &[],
            RenderList::Items(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Handles in display order
    pub fn handles(&self) -> Vec<DocumentHandle> {
        self.items().iter().map(|item| item.data.handle).collect()
    }

    /// Index of the row tagged as current, if any
    pub fn current_index(&self) -> Option<usize> {
        self.items()
            .iter()
            .position(|item| item.highlight == Highlight::Current)
    }

    pub fn current(&self) -> Option<&RenderItem> {
        self.current_index().map(|i| &self.items()[i])
    }
}

/// Short label for a path: the file name, falling back to the whole path.
pub fn label_for_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => path.to_string(),
    }
}
