//! The form state store: an observable container for the invoice draft.
//!
//! All mutations go through explicit operations. Each successful mutation is
//! published to subscribers (best-effort fan-out, dead subscribers dropped
//! while publishing); no-op mutations against unknown ids publish nothing.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use invoicekit_core::LineItemId;

use crate::header::{HeaderField, InvoiceHeader};
use crate::line_item::{LineItem, LineItemPatch};

/// The complete exportable state: header plus line items in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub header: InvoiceHeader,
    pub items: Vec<LineItem>,
}

/// Change event published after each successful store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftChanged {
    HeaderChanged(HeaderField),
    ItemAdded(LineItemId),
    ItemUpdated(LineItemId),
    ItemRemoved(LineItemId),
}

/// A subscription to store change events.
///
/// Designed for single-threaded consumption by a rendering layer: drain
/// pending events on each frame, re-render if anything arrived.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<DraftChanged>,
}

impl Subscription {
    /// Try to receive the next change without blocking.
    pub fn try_recv(&self) -> Result<DraftChanged, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain all pending change events.
    pub fn drain(&self) -> Vec<DraftChanged> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Observable draft store.
///
/// Single-threaded by design: the event-driven UI serializes all mutations,
/// so the store needs no interior locking.
#[derive(Debug, Default)]
pub struct DraftStore {
    draft: Draft,
    subscribers: Vec<mpsc::Sender<DraftChanged>>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &InvoiceHeader {
        &self.draft.header
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.draft.items
    }

    /// Cloned state for export; the exporter never borrows the live store.
    pub fn snapshot(&self) -> Draft {
        self.draft.clone()
    }

    /// Subscribe to change events published after each mutation.
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        Subscription { receiver: rx }
    }

    /// Replace one header attribute. Always succeeds, no validation.
    pub fn set_header_field(&mut self, field: HeaderField, value: impl Into<String>) {
        self.draft.header.set(field, value.into());
        self.publish(DraftChanged::HeaderChanged(field));
    }

    /// Append a fresh empty item to the end of the sequence.
    pub fn add_line_item(&mut self) -> LineItemId {
        let item = LineItem::empty();
        let id = item.id;
        self.draft.items.push(item);
        self.publish(DraftChanged::ItemAdded(id));
        id
    }

    /// Apply a single-field edit to the item with the given id.
    ///
    /// Unknown ids are silently ignored: the store is left unchanged and no
    /// change event is published.
    pub fn update_line_item(&mut self, id: LineItemId, patch: LineItemPatch) {
        match self.draft.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.apply(patch);
                self.publish(DraftChanged::ItemUpdated(id));
            }
            None => debug!(%id, "update for unknown line item ignored"),
        }
    }

    /// Remove the item with the given id. No-op when absent.
    pub fn remove_line_item(&mut self, id: LineItemId) {
        let before = self.draft.items.len();
        self.draft.items.retain(|item| item.id != id);
        if self.draft.items.len() < before {
            self.publish(DraftChanged::ItemRemoved(id));
        } else {
            debug!(%id, "remove for unknown line item ignored");
        }
    }

    fn publish(&mut self, event: DraftChanged) {
        // Drop any dead subscribers while publishing.
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
