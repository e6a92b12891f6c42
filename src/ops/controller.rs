use tracing::{debug, trace};

use crate::host::{EventQueue, Host, HostEvent};
use crate::model::{DocumentHandle, MruList, RenderList};

use super::windower::build_render_list;

/// Owns the MRU list and turns host events into list mutations.
///
/// One controller per sidebar. Every entry point takes `&mut self`, so
/// events are applied one at a time and run to completion.
#[derive(Debug, Clone)]
pub struct MruController {
    mru: MruList,
    /// Last focused valid document. Kept apart from the list front so a
    /// focus on an untracked window leaves the list alone.
    current: Option<DocumentHandle>,
    render: RenderList,
    show_modified: bool,
}

impl Default for MruController {
    fn default() -> Self {
        MruController::new(true)
    }
}

impl MruController {
    pub fn new(show_modified: bool) -> Self {
        MruController {
            mru: MruList::new(),
            current: None,
            render: RenderList::Empty,
            show_modified,
        }
    }

    pub fn mru(&self) -> &MruList {
        &self.mru
    }

    pub fn current(&self) -> Option<DocumentHandle> {
        self.current
    }

    /// Latest rows for the sidebar.
    pub fn render(&self) -> &RenderList {
        &self.render
    }

    /// Seed from the host's open documents, then focus its active one.
    pub fn initialise<H: Host>(&mut self, host: &H) {
        self.mru = MruList::seeded(host.documents(), |h| host.is_valid_document(h));
        self.current = None;
        debug!(tracked = self.mru.len(), "seeded MRU list");
        self.regenerate(host);
        if let Some(active) = host.current_active_document() {
            self.on_focus(host, active);
        }
    }

    pub fn on_focus<H: Host>(&mut self, host: &H, handle: DocumentHandle) {
        if !host.is_valid_document(handle) {
            trace!(%handle, "focus on untracked document ignored");
            return;
        }
        self.current = Some(handle);
        self.mru.promote_to_front(handle);
        debug!(%handle, tracked = self.mru.len(), "focused");
        self.regenerate(host);
    }

    /// Hidden documents are kept; a later close reconciles anything that
    /// really went away.
    pub fn on_hide(&mut self, handle: DocumentHandle) {
        trace!(%handle, "hide");
    }

    pub fn on_close<H: Host>(&mut self, host: &H) {
        let dropped = self.mru.reconcile(|h| host.is_valid_document(h));
        if !dropped.is_empty() {
            debug!(?dropped, tracked = self.mru.len(), "reconciled");
        }
        if self.current.is_some_and(|h| !self.mru.contains(h)) {
            self.current = None;
        }
        self.regenerate(host);
    }

    /// Rotate the least recent document to the front and ask the host to
    /// focus it. The host's focus event redraws.
    pub fn on_cycle_forward<H: Host>(&mut self, host: &mut H) -> Option<DocumentHandle> {
        let target = self.mru.cycle_forward(|h| host.is_valid_document(h))?;
        debug!(%target, "cycle forward");
        host.request_focus(target);
        Some(target)
    }

    /// Demote the current document to the back and ask the host to focus
    /// the new front.
    pub fn on_cycle_backward<H: Host>(&mut self, host: &mut H) -> Option<DocumentHandle> {
        let live = host.current_active_document();
        let target = self
            .mru
            .cycle_backward(self.current, live, |h| host.is_valid_document(h))?;
        debug!(%target, "cycle backward");
        host.request_focus(target);
        Some(target)
    }

    /// Apply one host event.
    pub fn handle_event<H: Host>(&mut self, host: &mut H, event: HostEvent) {
        match event {
            HostEvent::Focus(h) => self.on_focus(host, h),
            HostEvent::Hide(h) => self.on_hide(h),
            HostEvent::Close(h) => {
                trace!(handle = %h, "close");
                self.on_close(host);
            }
            HostEvent::CycleForward => {
                self.on_cycle_forward(host);
            }
            HostEvent::CycleBackward => {
                self.on_cycle_backward(host);
            }
        }
    }

    /// Deliver queued host events in order, including the focus events that
    /// cycling produces. Returns how many were handled.
    pub fn pump<H: Host + EventQueue>(&mut self, host: &mut H) -> usize {
        let mut handled = 0;
        while let Some(event) = host.next_event() {
            self.handle_event(host, event);
            handled += 1;
        }
        handled
    }

    fn regenerate<H: Host>(&mut self, host: &H) {
        self.render = build_render_list(&self.mru, host, self.show_modified);
    }
}
