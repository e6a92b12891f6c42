//! The capabilities the MRU core needs from the editor that embeds it.

pub mod session;
pub mod validity;

pub use session::SessionHost;
pub use validity::{Rejection, ValidityRules, matches_any};

use crate::model::DocumentHandle;

/// Editor-side queries and commands used by [`crate::ops::MruController`].
pub trait Host {
    /// Whether the handle currently counts as a trackable document.
    fn is_valid_document(&self, handle: DocumentHandle) -> bool;

    /// The document the host considers focused right now.
    fn current_active_document(&self) -> Option<DocumentHandle>;

    /// Human-readable path. `None` or an empty string hides the document
    /// from the render list.
    fn document_display_path(&self, handle: DocumentHandle) -> Option<String>;

    /// Ask the host to switch focus to `handle`. The host reports the switch
    /// back as a focus event.
    fn request_focus(&mut self, handle: DocumentHandle);

    /// Every open document, in host order.
    fn documents(&self) -> Vec<DocumentHandle>;

    /// Whether the handle is the sidebar's own surface.
    fn is_sidebar(&self, _handle: DocumentHandle) -> bool {
        false
    }

    /// Whether the document has unsaved changes.
    fn is_modified(&self, _handle: DocumentHandle) -> bool {
        false
    }
}

/// A host that buffers events until the controller asks for them.
pub trait EventQueue {
    fn next_event(&mut self) -> Option<HostEvent>;
}

/// Events a host delivers to the controller, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Focus(DocumentHandle),
    Hide(DocumentHandle),
    /// A document was closed or unlisted; the handle is informational only.
    Close(DocumentHandle),
    CycleForward,
    CycleBackward,
}
