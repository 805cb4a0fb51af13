//! Diagnostic events emitted during a collection run.
//!
//! The collector never logs directly; it reports to a [`DiagnosticSink`].
//! [`TracingSink`] forwards to `tracing`, [`NullSink`] drops everything, and
//! an unbounded `tokio` channel sender can be used to receive the events.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

pub use crate::listing::CollectionKind;
use uprofile_core::{ProfileSource, UserIdentifier};

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionEvent {
    InvalidProfileUrl {
        url: String,
    },
    IdentifierExtracted {
        identifier: UserIdentifier,
    },
    ProfileParsed {
        identifier: UserIdentifier,
        source: ProfileSource,
    },
    ProfileFailed {
        identifier: UserIdentifier,
        error: String,
    },
    CollectionFetched {
        identifier: UserIdentifier,
        kind: CollectionKind,
        items: usize,
    },
    CollectionFailed {
        identifier: UserIdentifier,
        kind: CollectionKind,
        error: String,
    },
    Paused {
        kind: CollectionKind,
        pause: Duration,
    },
}

/// Destination for [`CollectionEvent`]s.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: CollectionEvent);
}

/// Forwards events to `tracing`: failures at `warn`, progress at `info`/`debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, event: CollectionEvent) {
        match event {
            CollectionEvent::InvalidProfileUrl { url } => {
                tracing::warn!(url = %url, "profile URL has no /user/<name> segment");
            }
            CollectionEvent::IdentifierExtracted { identifier } => {
                tracing::info!(user = %identifier, "collecting user data");
            }
            CollectionEvent::ProfileParsed { identifier, source } => {
                tracing::debug!(user = %identifier, ?source, "parsed profile page");
            }
            CollectionEvent::ProfileFailed { identifier, error } => {
                tracing::warn!(user = %identifier, error = %error, "profile fetch failed");
            }
            CollectionEvent::CollectionFetched {
                identifier,
                kind,
                items,
            } => {
                tracing::info!(user = %identifier, %kind, items, "fetched listing");
            }
            CollectionEvent::CollectionFailed {
                identifier,
                kind,
                error,
            } => {
                tracing::warn!(user = %identifier, %kind, error = %error, "listing fetch failed");
            }
            CollectionEvent::Paused { kind, pause } => {
                tracing::debug!(%kind, ?pause, "paused after listing fetch");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _event: CollectionEvent) {}
}

/// Sends each event down the channel; events are dropped once the
/// receiver is gone.
impl DiagnosticSink for UnboundedSender<CollectionEvent> {
    fn emit(&self, event: CollectionEvent) {
        let _ = self.send(event);
    }
}
