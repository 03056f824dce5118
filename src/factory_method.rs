//! Factory Method: the framework decides *when* a document is created and what
//! happens to it afterwards, the injected creator decides *which* document.

use crate::error::PatternError;
use crate::transcript::{Event, Transcript};
use std::fmt;
use tracing::{debug, info};

/// Base type the framework works with.
pub trait Document: fmt::Debug {
    fn name(&self) -> &str;

    /// Concrete type label used in the transcript.
    fn kind(&self) -> &str;

    fn open(&self) -> Event {
        Event::DocumentOpened {
            kind: self.kind().to_string(),
            name: self.name().to_string(),
        }
    }

    fn close(&self) -> Event {
        Event::DocumentClosed {
            kind: self.kind().to_string(),
            name: self.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyDocument {
    name: String,
}

impl MyDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Document for MyDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        "MyDocument"
    }
}

/// The extension point. `create_document` is the only method a client has to
/// supply; any `Fn(&str) -> Box<dyn Document>` qualifies.
pub trait DocumentCreator {
    fn create_document(&self, name: &str) -> Box<dyn Document>;

    fn creator_name(&self) -> &str {
        "DocumentCreator"
    }
}

impl<F> DocumentCreator for F
where
    F: Fn(&str) -> Box<dyn Document>,
{
    fn create_document(&self, name: &str) -> Box<dyn Document> {
        self(name)
    }
}

/// Client customisation that produces [`MyDocument`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct MyApplication;

impl DocumentCreator for MyApplication {
    fn create_document(&self, name: &str) -> Box<dyn Document> {
        Box::new(MyDocument::new(name))
    }

    fn creator_name(&self) -> &str {
        "MyApplication"
    }
}

pub struct Application<C: DocumentCreator> {
    creator: C,
    docs: Vec<Box<dyn Document>>,
    capacity: Option<usize>,
}

impl<C: DocumentCreator> Application<C> {
    pub fn new(creator: C, transcript: &mut Transcript) -> Self {
        transcript.record(Event::ApplicationConstructed);
        transcript.record(Event::CreatorConstructed {
            creator: creator.creator_name().to_string(),
        });
        Self {
            creator,
            docs: Vec::new(),
            capacity: None,
        }
    }

    /// Caps the number of stored documents. Without a cap the store grows freely.
    pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Asks the creator for a new document, opens it and stores it.
    pub fn new_document(
        &mut self,
        name: &str,
        transcript: &mut Transcript,
    ) -> Result<&dyn Document, PatternError> {
        if let Some(capacity) = self.capacity {
            if self.docs.len() >= capacity {
                return Err(PatternError::CapacityExceeded { capacity });
            }
        }

        transcript.record(Event::NewDocumentRequested {
            name: name.to_string(),
        });
        transcript.record(Event::DocumentCreated {
            creator: self.creator.creator_name().to_string(),
            name: name.to_string(),
        });
        let doc = self.creator.create_document(name);
        debug!(name, kind = doc.kind(), "document created");
        transcript.record(doc.open());

        let index = self.docs.len();
        self.docs.push(doc);
        Ok(self.docs[index].as_ref())
    }

    /// Opens a previously created document again.
    pub fn open_document(
        &self,
        name: &str,
        transcript: &mut Transcript,
    ) -> Result<&dyn Document, PatternError> {
        let doc = self
            .docs
            .iter()
            .find(|doc| doc.name() == name)
            .ok_or_else(|| PatternError::unknown_document(name))?;
        transcript.record(doc.open());
        Ok(doc.as_ref())
    }

    pub fn report_docs(&self, transcript: &mut Transcript) -> Vec<&str> {
        let names = self.document_names();
        transcript.record(Event::DocsReported {
            names: names.iter().map(|name| name.to_string()).collect(),
        });
        names
    }

    pub fn document_names(&self) -> Vec<&str> {
        self.docs.iter().map(|doc| doc.name()).collect()
    }

    /// Closes every document in creation order and empties the store.
    pub fn close_all(&mut self, transcript: &mut Transcript) -> usize {
        let closed = self.docs.len();
        for doc in self.docs.drain(..) {
            transcript.record(doc.close());
        }
        info!(closed, "documents closed");
        closed
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn creator(&self) -> &C {
        &self.creator
    }
}
