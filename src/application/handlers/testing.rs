//! Mock ports shared by handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::contract::Contract;
use crate::domain::document::Document;
use crate::domain::foundation::{ContractId, DocumentId, DomainError, EventEnvelope};
use crate::ports::{ContractRepository, DocumentRepository, EventPublisher};

/// Publisher that records envelopes, optionally failing every call.
pub struct RecordingPublisher {
    published: Mutex<Vec<EventEnvelope>>,
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn published(&self) -> Vec<EventEnvelope> {
        self.published.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<String> {
        self.published().into_iter().map(|e| e.event_type).collect()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.publish_all(vec![event]).await
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::broker("Simulated publish failure"));
        }
        self.published.lock().unwrap().extend(events);
        Ok(())
    }
}

/// Document repository backed by a map, counting persists.
pub struct MockDocumentRepository {
    documents: Mutex<HashMap<DocumentId, Document>>,
    persisted: AtomicUsize,
    fail_persist: bool,
}

impl MockDocumentRepository {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            persisted: AtomicUsize::new(0),
            fail_persist: false,
        }
    }

    pub fn with_document(mut document: Document) -> Self {
        document.take_events();
        let repo = Self::new();
        repo.documents.lock().unwrap().insert(document.id(), document);
        repo
    }

    pub fn failing_persist(mut self) -> Self {
        self.fail_persist = true;
        self
    }

    pub fn stored(&self, id: &DocumentId) -> Option<Document> {
        self.documents.lock().unwrap().get(id).cloned()
    }

    pub fn persist_count(&self) -> usize {
        self.persisted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentRepository for MockDocumentRepository {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, DomainError> {
        Ok(self.stored(id))
    }

    async fn persist(&self, document: &Document) -> Result<(), DomainError> {
        if self.fail_persist {
            return Err(DomainError::database("Simulated persist failure"));
        }
        self.persisted.fetch_add(1, Ordering::SeqCst);
        let mut stored = document.clone();
        stored.take_events();
        self.documents.lock().unwrap().insert(document.id(), stored);
        Ok(())
    }
}

/// Contract repository backed by a map, counting persists.
pub struct MockContractRepository {
    contracts: Mutex<HashMap<ContractId, Contract>>,
    persisted: AtomicUsize,
    fail_persist: bool,
}

impl MockContractRepository {
    pub fn new() -> Self {
        Self {
            contracts: Mutex::new(HashMap::new()),
            persisted: AtomicUsize::new(0),
            fail_persist: false,
        }
    }

    pub fn with_contracts(contracts: impl IntoIterator<Item = Contract>) -> Self {
        let repo = Self::new();
        for mut contract in contracts {
            contract.take_events();
            repo.contracts.lock().unwrap().insert(contract.id(), contract);
        }
        repo
    }

    pub fn failing_persist(mut self) -> Self {
        self.fail_persist = true;
        self
    }

    pub fn stored(&self, id: &ContractId) -> Option<Contract> {
        self.contracts.lock().unwrap().get(id).cloned()
    }

    pub fn persist_count(&self) -> usize {
        self.persisted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContractRepository for MockContractRepository {
    async fn find_by_id(&self, id: &ContractId) -> Result<Option<Contract>, DomainError> {
        Ok(self.stored(id))
    }

    async fn persist(&self, contract: &Contract) -> Result<(), DomainError> {
        if self.fail_persist {
            return Err(DomainError::database("Simulated persist failure"));
        }
        self.persisted.fetch_add(1, Ordering::SeqCst);
        let mut stored = contract.clone();
        stored.take_events();
        self.contracts.lock().unwrap().insert(contract.id(), stored);
        Ok(())
    }

    async fn find_all_unsigned_ids(&self) -> Result<Vec<ContractId>, DomainError> {
        Ok(self
            .contracts
            .lock()
            .unwrap()
            .values()
            .filter(|c| !c.is_signed())
            .map(Contract::id)
            .collect())
    }
}
