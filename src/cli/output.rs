use serde::Serialize;

use crate::host::{Host, SessionHost};
use crate::model::{DocumentHandle, Highlight, RenderItem, RenderList};
use crate::ops::MruController;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct RenderJson<'a> {
    pub empty: bool,
    pub items: &'a [RenderItem],
}

#[derive(Serialize)]
pub struct MruJson {
    pub current: Option<DocumentHandle>,
    pub mru: Vec<DocumentHandle>,
}

#[derive(Serialize)]
pub struct CheckEntryJson {
    pub handle: DocumentHandle,
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub fn render_json(list: &RenderList) -> RenderJson<'_> {
    RenderJson {
        empty: list.is_empty(),
        items: list.items(),
    }
}

pub fn mru_json(controller: &MruController) -> MruJson {
    MruJson {
        current: controller.current(),
        mru: controller.mru().iter().collect(),
    }
}

pub fn check_json(host: &SessionHost) -> Vec<CheckEntryJson> {
    host.all_documents()
        .map(|doc| {
            let reason = host.rules().explain(doc).map(|r| r.to_string());
            CheckEntryJson {
                handle: doc.handle,
                name: doc.name.clone(),
                valid: reason.is_none(),
                reason,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn marker(highlight: Highlight) -> char {
    match highlight {
        Highlight::Current => '>',
        Highlight::Modified => '+',
        Highlight::Normal => ' ',
    }
}

/// One line per row: marker, handle, label, path.
pub fn format_render(list: &RenderList) -> String {
    if list.is_empty() {
        return "No documents".to_string();
    }
    let width = list
        .items()
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0);
    list.items()
        .iter()
        .map(|item| {
            format!(
                "{} {:>4}  {:<width$}  {}",
                marker(item.highlight),
                item.data.handle,
                item.label,
                item.data.path,
                width = width
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_mru(controller: &MruController) -> String {
    let current = controller
        .current()
        .map(|h| h.to_string())
        .unwrap_or_else(|| "-".to_string());
    let order: Vec<String> = controller.mru().iter().map(|h| h.to_string()).collect();
    format!("current: {}\nmru: {}", current, order.join(" "))
}

pub fn format_check(host: &SessionHost) -> String {
    let mut lines = Vec::new();
    for doc in host.all_documents() {
        let verdict = match host.rules().explain(doc) {
            None => "tracked".to_string(),
            Some(reason) => format!("ignored: {}", reason),
        };
        let name = host
            .document_display_path(doc.handle)
            .unwrap_or_else(|| "[No Name]".to_string());
        lines.push(format!("{:>4}  {}  {}", doc.handle, name, verdict));
    }
    if lines.is_empty() {
        return "No documents".to_string();
    }
    lines.join("\n")
}
