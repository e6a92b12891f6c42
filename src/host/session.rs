use std::collections::VecDeque;

use indexmap::IndexMap;

use super::validity::ValidityRules;
use super::{EventQueue, Host, HostEvent};
use crate::model::{Document, DocumentHandle, WindowKind};

/// An in-memory editor: a set of open documents, one of them active, and a
/// queue of events waiting to be delivered to the controller.
#[derive(Debug, Clone, Default)]
pub struct SessionHost {
    documents: IndexMap<DocumentHandle, Document>,
    active: Option<DocumentHandle>,
    rules: ValidityRules,
    events: VecDeque<HostEvent>,
    /// Every handle passed to `request_focus`, oldest first
    focus_requests: Vec<DocumentHandle>,
}

impl SessionHost {
    pub fn new(rules: ValidityRules) -> Self {
        SessionHost {
            rules,
            ..Default::default()
        }
    }

    /// Build a host from documents in host order. No events are queued.
    pub fn with_documents(
        rules: ValidityRules,
        documents: impl IntoIterator<Item = Document>,
        active: Option<DocumentHandle>,
    ) -> Self {
        let mut host = SessionHost::new(rules);
        for doc in documents {
            host.documents.insert(doc.handle, doc);
        }
        host.active = active.filter(|h| host.documents.contains_key(h));
        host
    }

    pub fn rules(&self) -> &ValidityRules {
        &self.rules
    }

    pub fn document(&self, handle: DocumentHandle) -> Option<&Document> {
        self.documents.get(&handle)
    }

    pub fn all_documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn active(&self) -> Option<DocumentHandle> {
        self.active
    }

    pub fn focus_requests(&self) -> &[DocumentHandle] {
        &self.focus_requests
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Open (or replace) a document and focus it.
    pub fn open(&mut self, doc: Document) {
        let handle = doc.handle;
        self.documents.insert(handle, doc);
        self.focus(handle);
    }

    /// Make `handle` the active document. Unknown handles are ignored.
    pub fn focus(&mut self, handle: DocumentHandle) {
        if !self.documents.contains_key(&handle) {
            return;
        }
        if let Some(prev) = self.active
            && prev != handle
            && let Some(doc) = self.documents.get_mut(&prev)
            && doc.window == WindowKind::Normal
        {
            // Single-window model: the previous document leaves the window.
            doc.window = WindowKind::Hidden;
        }
        if let Some(doc) = self.documents.get_mut(&handle)
            && doc.window == WindowKind::Hidden
        {
            doc.window = WindowKind::Normal;
        }
        self.active = Some(handle);
        self.events.push_back(HostEvent::Focus(handle));
    }

    /// Take a document out of its window without closing it.
    pub fn hide(&mut self, handle: DocumentHandle) {
        let Some(doc) = self.documents.get_mut(&handle) else {
            return;
        };
        doc.window = WindowKind::Hidden;
        if self.active == Some(handle) {
            self.active = None;
        }
        self.events.push_back(HostEvent::Hide(handle));
    }

    /// Close a document. Focus moves to the first remaining valid document.
    pub fn close(&mut self, handle: DocumentHandle) {
        if self.documents.shift_remove(&handle).is_none() {
            return;
        }
        self.events.push_back(HostEvent::Close(handle));
        if self.active == Some(handle) {
            self.active = None;
            if let Some(next) = self.documents().into_iter().find(|&h| self.is_valid_document(h)) {
                self.focus(next);
            }
        }
    }

    /// Drop a document from the buffer list while keeping it loaded.
    pub fn unlist(&mut self, handle: DocumentHandle) {
        let Some(doc) = self.documents.get_mut(&handle) else {
            return;
        };
        doc.listed = false;
        doc.loaded = false;
        self.events.push_back(HostEvent::Close(handle));
    }

    /// Queue a cycle request, as a key binding would.
    pub fn press_cycle_forward(&mut self) {
        self.events.push_back(HostEvent::CycleForward);
    }

    pub fn press_cycle_backward(&mut self) {
        self.events.push_back(HostEvent::CycleBackward);
    }

    /// Replace the document set with a freshly loaded session, queueing a
    /// close for every document that disappeared and a focus for a changed
    /// active document.
    pub fn replace_documents(
        &mut self,
        documents: impl IntoIterator<Item = Document>,
        active: Option<DocumentHandle>,
    ) {
        let fresh: IndexMap<DocumentHandle, Document> =
            documents.into_iter().map(|d| (d.handle, d)).collect();
        let gone: Vec<DocumentHandle> = self
            .documents
            .keys()
            .filter(|h| !fresh.contains_key(*h))
            .copied()
            .collect();
        self.documents = fresh;
        for handle in gone {
            self.events.push_back(HostEvent::Close(handle));
        }
        let active = active.filter(|h| self.documents.contains_key(h));
        if active != self.active {
            self.active = None;
            if let Some(handle) = active {
                self.focus(handle);
            }
        }
    }
}

impl EventQueue for SessionHost {
    fn next_event(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }
}

impl Host for SessionHost {
    fn is_valid_document(&self, handle: DocumentHandle) -> bool {
        self.documents
            .get(&handle)
            .is_some_and(|doc| self.rules.is_valid(doc))
    }

    fn current_active_document(&self) -> Option<DocumentHandle> {
        self.active
    }

    fn document_display_path(&self, handle: DocumentHandle) -> Option<String> {
        self.documents
            .get(&handle)
            .map(|doc| doc.name.clone())
            .filter(|name| !name.is_empty())
    }

    fn request_focus(&mut self, handle: DocumentHandle) {
        self.focus_requests.push(handle);
        self.focus(handle);
    }

    fn documents(&self) -> Vec<DocumentHandle> {
        self.documents.keys().copied().collect()
    }

    fn is_sidebar(&self, handle: DocumentHandle) -> bool {
        self.documents.get(&handle).is_some_and(|doc| doc.sidebar)
    }

    fn is_modified(&self, handle: DocumentHandle) -> bool {
        self.documents.get(&handle).is_some_and(|doc| doc.modified)
    }
}
