//! # Parser Handle
//!
//! Shared reference to a host parser and its mutable options.
//!
//! Every option change bumps the handle's revision. Consumers that cache
//! output derived from a parser compare [`ParserIdentity`] values instead of
//! deep-comparing parser state.

use crate::document::StyleDocument;
use crate::options::{ParserOptions, UnitOfMeasure};
use crate::parser::{ParserOutput, StyleParser};
use crate::result::ParserResult;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Instance identity plus option revision of a [`ParserHandle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserIdentity {
    pub id: u64,
    pub revision: u64,
}

/// Cheaply clonable handle to a parser instance
#[derive(Clone)]
pub struct ParserHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    id: u64,
    parser: Arc<dyn StyleParser>,
    options: RwLock<ParserOptions>,
    revision: AtomicU64,
}

impl ParserHandle {
    pub fn new(parser: impl StyleParser + 'static) -> Self {
        Self::from_arc(Arc::new(parser))
    }

    pub fn from_arc(parser: Arc<dyn StyleParser>) -> Self {
        Self::with_options(parser, ParserOptions::default())
    }

    pub fn with_options(parser: Arc<dyn StyleParser>, options: ParserOptions) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                id: NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed),
                parser,
                options: RwLock::new(options),
                revision: AtomicU64::new(0),
            }),
        }
    }

    pub fn title(&self) -> &str {
        self.inner.parser.title()
    }

    pub fn version(&self) -> Option<&str> {
        self.inner.parser.version()
    }

    pub fn is_xml(&self) -> bool {
        self.inner.parser.is_xml()
    }

    pub fn identity(&self) -> ParserIdentity {
        ParserIdentity {
            id: self.inner.id,
            revision: self.inner.revision.load(Ordering::Acquire),
        }
    }

    /// Snapshot of the current options
    pub fn options(&self) -> ParserOptions {
        self.inner.options.read().clone()
    }

    pub fn unit_of_measure(&self) -> UnitOfMeasure {
        self.inner.options.read().unit_of_measure
    }

    /// Change the unit in place. Returns false if it was already set.
    pub fn set_unit_of_measure(&self, unit: UnitOfMeasure) -> bool {
        let mut options = self.inner.options.write();
        if options.unit_of_measure == unit {
            return false;
        }
        options.unit_of_measure = unit;
        self.inner.revision.fetch_add(1, Ordering::AcqRel);
        true
    }

    /// Mutate options in place; always counts as a change
    pub fn update_options(&self, update: impl FnOnce(&mut ParserOptions)) {
        let mut options = self.inner.options.write();
        update(&mut options);
        self.inner.revision.fetch_add(1, Ordering::AcqRel);
    }

    /// Whether both handles point at the same parser instance
    pub fn same_instance(&self, other: &ParserHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub async fn write_style(&self, style: &StyleDocument) -> ParserResult<ParserOutput<String>> {
        let options = self.options();
        self.inner.parser.write_style(style, &options).await
    }

    pub async fn read_style(&self, text: &str) -> ParserResult<ParserOutput<StyleDocument>> {
        let options = self.options();
        self.inner.parser.read_style(text, &options).await
    }
}

impl fmt::Debug for ParserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserHandle")
            .field("title", &self.title())
            .field("id", &self.inner.id)
            .field("revision", &self.inner.revision.load(Ordering::Relaxed))
            .finish()
    }
}
