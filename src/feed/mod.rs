//! Consumers of the alive-turtles feed.
//!
//! The spawner hands every published snapshot to each registered
//! [`FeedSink`]. Delivery is best effort: a failing sink is logged and
//! skipped.

pub mod jsonl;

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

pub use jsonl::JsonlFeed;

use crate::model::AliveTurtles;

pub trait FeedSink: Send + Sync {
    fn publish(&mut self, snapshot: &AliveTurtles) -> io::Result<()>;
}

/// Keeps every snapshot it receives. Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingFeed {
    snapshots: Arc<Mutex<Vec<AliveTurtles>>>,
}

impl RecordingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<AliveTurtles> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last(&self) -> Option<AliveTurtles> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl FeedSink for RecordingFeed {
    fn publish(&mut self, snapshot: &AliveTurtles) -> io::Result<()> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        Ok(())
    }
}

/// Logs each snapshot's turtle names at `info`.
#[derive(Debug, Default)]
pub struct LogFeed;

impl FeedSink for LogFeed {
    fn publish(&mut self, snapshot: &AliveTurtles) -> io::Result<()> {
        tracing::info!(
            count = snapshot.len(),
            "Alive turtles: [{}]",
            snapshot.names().join(", ")
        );
        Ok(())
    }
}
