use crate::host::Host;
use crate::model::{
    DocumentHandle, Highlight, MruList, RenderData, RenderItem, RenderList, label_for_path,
};

/// Place `anchor` in the middle of `remaining`.
///
/// `remaining` is most-recent-first. The first `len / 2` entries go above
/// the anchor in reverse, so reading upward from the anchor follows repeated
/// backward cycles. The rest go below the anchor, also reversed, so reading
/// downward follows repeated forward cycles and the least recent entry sits
/// directly under the anchor.
///
/// With `remaining = [r1, r2, r3, r4]` the result is `[r2, r1, X, r4, r3]`.
/// The mirror of the cycle operations is approximate; reconciliation during
/// a cycle can shift entries.
pub fn arrange<T: Copy>(anchor: T, remaining: &[T]) -> Vec<T> {
    if remaining.len() <= 1 {
        let mut out = vec![anchor];
        out.extend_from_slice(remaining);
        return out;
    }

    let midpoint = remaining.len() / 2 + 1;
    let mut out = Vec::with_capacity(remaining.len() + 1);
    let mut anchor_at = 0;
    for (idx, &item) in remaining.iter().enumerate() {
        let i = idx + 1;
        if i < midpoint {
            out.insert(0, item);
        } else {
            if i == midpoint {
                out.push(anchor);
                anchor_at = out.len() - 1;
            }
            out.insert(anchor_at + 1, item);
        }
    }
    out
}

fn displayable<H: Host>(host: &H, handle: DocumentHandle) -> Option<String> {
    host.document_display_path(handle).filter(|p| !p.is_empty())
}

fn item<H: Host>(
    host: &H,
    handle: DocumentHandle,
    path: String,
    current: bool,
    show_modified: bool,
) -> RenderItem {
    let highlight = if current {
        Highlight::Current
    } else if show_modified && host.is_modified(handle) {
        Highlight::Modified
    } else {
        Highlight::Normal
    };
    RenderItem {
        label: label_for_path(&path),
        highlight,
        data: RenderData { handle, path },
    }
}

/// Build the sidebar rows for `mru`, centred on its front entry.
pub fn build_render_list<H: Host>(mru: &MruList, host: &H, show_modified: bool) -> RenderList {
    let Some(first) = mru.front() else {
        return RenderList::Empty;
    };
    let Some(first_path) = displayable(host, first) else {
        return RenderList::Empty;
    };

    let remaining: Vec<(DocumentHandle, String)> = mru
        .iter()
        .skip(1)
        .filter(|&h| !host.is_sidebar(h) && host.is_valid_document(h))
        .filter_map(|h| displayable(host, h).map(|p| (h, p)))
        .collect();

    if !host.is_valid_document(first) {
        let items = remaining
            .into_iter()
            .map(|(h, p)| item(host, h, p, false, show_modified))
            .collect();
        return RenderList::Items(items);
    }

    let anchor = item(host, first, first_path, true, show_modified);
    let rows: Vec<RenderItem> = remaining
        .into_iter()
        .map(|(h, p)| item(host, h, p, false, show_modified))
        .collect();
    let order: Vec<Option<usize>> = (0..rows.len()).map(Some).collect();
    let items = arrange(None, &order)
        .into_iter()
        .map(|slot| match slot {
            None => anchor.clone(),
            Some(idx) => rows[idx].clone(),
        })
        .collect();
    RenderList::Items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{SessionHost, ValidityRules};
    use crate::model::{Document, WindowKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn arrange_four_puts_two_on_each_side() {
        assert_eq!(arrange('X', &['1', '2', '3', '4']), vec!['2', '1', 'X', '4', '3']);
    }

    #[test]
    fn arrange_odd_lengths() {
        assert_eq!(arrange('X', &['1', '2', '3']), vec!['1', 'X', '3', '2']);
        assert_eq!(
            arrange('X', &['1', '2', '3', '4', '5']),
            vec!['2', '1', 'X', '5', '4', '3']
        );
    }

    #[test]
    fn arrange_small_inputs() {
        assert_eq!(arrange('X', &[]), vec!['X']);
        assert_eq!(arrange('X', &['1']), vec!['X', '1']);
        assert_eq!(arrange('X', &['1', '2']), vec!['1', 'X', '2']);
    }

    fn session(docs: Vec<Document>) -> SessionHost {
        SessionHost::with_documents(ValidityRules::default(), docs, None)
    }

    fn mru(ns: &[u32]) -> MruList {
        MruList::seeded(ns.iter().map(|&n| DocumentHandle(n)), |_| true)
    }

    #[test]
    fn empty_list_renders_empty() {
        let host = session(vec![]);
        assert_eq!(build_render_list(&MruList::new(), &host, true), RenderList::Empty);
    }

    #[test]
    fn anchor_without_path_renders_empty() {
        let host = session(vec![Document::file(1, ""), Document::file(2, "b.rs")]);
        assert_eq!(build_render_list(&mru(&[1, 2]), &host, true), RenderList::Empty);
    }

    #[test]
    fn render_centres_current() {
        let host = session(
            (1..=5)
                .map(|n| Document::file(n, &format!("src/f{}.rs", n)))
                .collect(),
        );
        let list = build_render_list(&mru(&[1, 2, 3, 4, 5]), &host, true);
        let handles: Vec<u32> = list.handles().iter().map(|h| h.0).collect();
        assert_eq!(handles, vec![3, 2, 1, 5, 4]);
        assert_eq!(list.current_index(), Some(2));
        assert_eq!(list.current().unwrap().label, "f1.rs");
        assert_eq!(list.current().unwrap().data.path, "src/f1.rs");
    }

    #[test]
    fn invalid_entries_drop_from_render_only() {
        let mut qf = Document::file(2, "[quickfix]");
        qf.window = WindowKind::Quickfix;
        let mut side = Document::file(4, "sidebar");
        side.sidebar = true;
        let host = session(vec![
            Document::file(1, "a.rs"),
            qf,
            Document::file(3, "c.rs"),
            side,
        ]);
        let list = mru(&[1, 2, 3, 4]);
        let rendered = build_render_list(&list, &host, true);
        assert_eq!(rendered.handles(), vec![DocumentHandle(1), DocumentHandle(3)]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn invalid_anchor_returns_remaining_in_order() {
        let mut help = Document::file(1, "help.txt");
        help.kind = "help".into();
        let host = session(vec![
            help,
            Document::file(2, "b.rs"),
            Document::file(3, "c.rs"),
            Document::file(4, "d.rs"),
        ]);
        let rendered = build_render_list(&mru(&[1, 2, 3, 4]), &host, true);
        assert_eq!(
            rendered.handles(),
            vec![DocumentHandle(2), DocumentHandle(3), DocumentHandle(4)]
        );
        assert_eq!(rendered.current_index(), None);
    }

    #[test]
    fn modified_tag_follows_config() {
        let mut b = Document::file(2, "b.rs");
        b.modified = true;
        let host = session(vec![Document::file(1, "a.rs"), b]);
        let shown = build_render_list(&mru(&[1, 2]), &host, true);
        assert_eq!(shown.items()[1].highlight, Highlight::Modified);
        let hidden = build_render_list(&mru(&[1, 2]), &host, false);
        assert_eq!(hidden.items()[1].highlight, Highlight::Normal);
    }
}
