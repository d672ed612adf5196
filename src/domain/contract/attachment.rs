//! Attachment entity owned by a Contract.

use crate::domain::foundation::AttachmentId;

/// A reference from a contract to a document, with its acknowledgement flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    id: AttachmentId,
    seen: bool,
}

impl Attachment {
    /// Creates an attachment that has not been seen yet.
    pub fn unseen(id: AttachmentId) -> Self {
        Self { id, seen: false }
    }

    /// Rebuilds an attachment from storage.
    pub fn reconstitute(id: AttachmentId, seen: bool) -> Self {
        Self { id, seen }
    }

    pub fn id(&self) -> &AttachmentId {
        &self.id
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub(super) fn mark_seen(&mut self) {
        self.seen = true;
    }

    pub(super) fn mark_unseen(&mut self) {
        self.seen = false;
    }
}
