//! Contract aggregate - a bundle of document attachments that can be signed.
//!
//! A contract can only be signed once every attachment is seen. Signing is
//! terminal for unseeing; `sign` and `see_attachment` remain callable on a
//! signed contract and succeed without effect.
//!
//! Every mutation is idempotent with respect to its target state: reaching
//! a state that already holds succeeds and records no event.

use std::collections::HashSet;

use crate::domain::foundation::{AttachmentId, ContractId, EventId, Timestamp};

use super::{
    Attachment, ContractBecameSignable, ContractBecameUnsignable, ContractError, ContractEvent,
    ContractSigned,
};

/// The Contract aggregate root.
#[derive(Debug, Clone)]
pub struct Contract {
    id: ContractId,
    created_at: Timestamp,
    updated_at: Timestamp,
    is_signed: bool,
    attachments: Vec<Attachment>,
    domain_events: Vec<ContractEvent>,
}

impl Contract {
    /// Creates an unsigned contract with every attachment unseen.
    ///
    /// Repeated attachment ids collapse to their first occurrence.
    pub fn create(attachment_ids: impl IntoIterator<Item = AttachmentId>) -> Self {
        let now = Timestamp::now();
        let mut seen_ids = HashSet::new();
        let attachments = attachment_ids
            .into_iter()
            .filter(|id| seen_ids.insert(id.clone()))
            .map(Attachment::unseen)
            .collect();

        Self {
            id: ContractId::new(),
            created_at: now,
            updated_at: now,
            is_signed: false,
            attachments,
            domain_events: Vec::new(),
        }
    }

    /// Reconstitutes a contract from persisted data without recording events.
    pub fn reconstitute(
        id: ContractId,
        created_at: Timestamp,
        updated_at: Timestamp,
        is_signed: bool,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            is_signed,
            attachments,
            domain_events: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Last modification time as loaded from storage.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn is_signed(&self) -> bool {
        self.is_signed
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn has_attachment_with_id(&self, attachment_id: &AttachmentId) -> bool {
        self.attachments.iter().any(|a| a.id() == attachment_id)
    }

    /// True when every attachment has been seen.
    pub fn all_attachments_seen(&self) -> bool {
        self.attachments.iter().all(Attachment::is_seen)
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    /// Signs the contract.
    ///
    /// # Errors
    ///
    /// - `CannotSignWithUnseenAttachments` if any attachment is unseen
    pub fn sign(&mut self) -> Result<(), ContractError> {
        if self.is_signed {
            return Ok(());
        }

        if !self.all_attachments_seen() {
            return Err(ContractError::CannotSignWithUnseenAttachments(self.id));
        }

        self.is_signed = true;
        self.record_event(ContractEvent::Signed(ContractSigned {
            event_id: EventId::new(),
            contract_id: self.id,
            signed_at: Timestamp::now(),
        }));

        Ok(())
    }

    /// Marks an attachment as seen.
    ///
    /// Records `BecameSignable` when this was the last unseen attachment.
    ///
    /// # Errors
    ///
    /// - `AttachmentNotFound` if the contract has no such attachment
    pub fn see_attachment(&mut self, attachment_id: &AttachmentId) -> Result<(), ContractError> {
        let id = self.id;
        let attachment = self.attachment_mut(attachment_id)?;

        if attachment.is_seen() {
            return Ok(());
        }
        attachment.mark_seen();

        if self.all_attachments_seen() {
            self.record_event(ContractEvent::BecameSignable(ContractBecameSignable {
                event_id: EventId::new(),
                contract_id: id,
                occurred_at: Timestamp::now(),
            }));
        }

        Ok(())
    }

    /// Marks an attachment as unseen.
    ///
    /// # Errors
    ///
    /// - `CannotUnseeAttachmentOfSignedContract` if signed, checked before existence
    /// - `AttachmentNotFound` if the contract has no such attachment
    pub fn unsee_attachment(&mut self, attachment_id: &AttachmentId) -> Result<(), ContractError> {
        if self.is_signed {
            return Err(ContractError::CannotUnseeAttachmentOfSignedContract(self.id));
        }

        let id = self.id;
        let attachment = self.attachment_mut(attachment_id)?;

        if !attachment.is_seen() {
            return Ok(());
        }
        attachment.mark_unseen();

        self.record_event(ContractEvent::BecameUnsignable(ContractBecameUnsignable {
            event_id: EventId::new(),
            contract_id: id,
            attachment_id: attachment_id.clone(),
            occurred_at: Timestamp::now(),
        }));

        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Events
    // ───────────────────────────────────────────────────────────────

    pub fn pending_events(&self) -> &[ContractEvent] {
        &self.domain_events
    }

    /// Drains pending events. Call only after the contract has been persisted.
    pub fn take_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.domain_events)
    }

    fn record_event(&mut self, event: ContractEvent) {
        self.domain_events.push(event);
    }

    fn attachment_mut(&mut self, attachment_id: &AttachmentId) -> Result<&mut Attachment, ContractError> {
        let contract_id = self.id;
        self.attachments
            .iter_mut()
            .find(|a| a.id() == attachment_id)
            .ok_or_else(|| ContractError::attachment_not_found(contract_id, attachment_id.clone()))
    }
}
