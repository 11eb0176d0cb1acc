//! One invoice editing session.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use invoicekit_core::DomainResult;
use invoicekit_draft::{DraftStore, validate};
use invoicekit_export::{GeneratedDocument, export_invoice};
use invoicekit_notify::{NotificationKind, NotificationQueue};

const EXPORT_SUCCESS_MESSAGE: &str = "Invoice exported successfully";

/// A draft store paired with the shared notification queue, exposing the
/// export trigger.
///
/// The whole flow is stateless request/response: the draft is the only
/// state, there is no submitted/locked state, and export always re-derives
/// everything from the current (possibly since-edited) draft.
pub struct InvoiceSession {
    store: DraftStore,
    notifications: Arc<Mutex<NotificationQueue>>,
}

impl InvoiceSession {
    pub fn new() -> Self {
        Self {
            store: DraftStore::new(),
            notifications: Arc::new(Mutex::new(NotificationQueue::new())),
        }
    }

    /// Share the queue with a sweeper or a presentation layer.
    pub fn notifications(&self) -> Arc<Mutex<NotificationQueue>> {
        Arc::clone(&self.notifications)
    }

    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DraftStore {
        &mut self.store
    }

    /// The export trigger.
    ///
    /// On validation failure an error notification carrying the first
    /// violated rule's message is pushed and no document is produced. On
    /// success the document is rendered first, then a success notification
    /// is pushed. Re-exporting is always permitted.
    pub fn export(&mut self) -> DomainResult<GeneratedDocument> {
        if let Err(err) = validate(self.store.header(), self.store.items()) {
            warn!(reason = err.reason(), "export blocked by validation");
            self.push(err.reason(), NotificationKind::Error);
            return Err(err);
        }

        let document = export_invoice(&self.store.snapshot());
        info!(
            filename = %document.filename,
            size = document.bytes.len(),
            "export complete"
        );
        self.push(EXPORT_SUCCESS_MESSAGE, NotificationKind::Success);
        Ok(document)
    }

    fn push(&self, message: &str, kind: NotificationKind) {
        if let Ok(mut queue) = self.notifications.lock() {
            queue.push(message, kind);
        }
    }
}

impl Default for InvoiceSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicekit_draft::{HeaderField, LineItemPatch, Totals};

    const TOLERANCE: f64 = 1e-9;

    fn fill_header(session: &mut InvoiceSession) {
        let store = session.store_mut();
        store.set_header_field(HeaderField::CompanyName, "Acme");
        store.set_header_field(HeaderField::CustomerName, "Bob");
        store.set_header_field(HeaderField::InvoiceNumber, "INV-001");
        store.set_header_field(HeaderField::InvoiceDate, "2024-01-01");
    }

    fn add_widget(session: &mut InvoiceSession) {
        let store = session.store_mut();
        let id = store.add_line_item();
        store.update_line_item(id, LineItemPatch::Description("Widget".into()));
        store.update_line_item(id, LineItemPatch::Quantity(2.0));
        store.update_line_item(id, LineItemPatch::UnitPrice(10.0));
    }

    fn messages(session: &InvoiceSession) -> Vec<(String, NotificationKind)> {
        session
            .notifications()
            .lock()
            .unwrap()
            .visible()
            .iter()
            .map(|entry| (entry.message.clone(), entry.kind))
            .collect()
    }

    #[test]
    fn valid_draft_exports_and_pushes_one_success_notification() {
        let mut session = InvoiceSession::new();
        fill_header(&mut session);
        add_widget(&mut session);

        let totals = Totals::compute(session.store().items());
        assert!((totals.subtotal - 20.0).abs() < TOLERANCE);
        assert!((totals.tax - 2.0).abs() < TOLERANCE);
        assert!((totals.total - 22.0).abs() < TOLERANCE);

        let document = session.export().expect("export succeeds");
        assert_eq!(document.filename, "invoice.pdf");
        assert!(document.bytes.starts_with(b"%PDF-"));

        assert_eq!(
            messages(&session),
            vec![(
                "Invoice exported successfully".to_string(),
                NotificationKind::Success
            )]
        );
    }

    #[test]
    fn export_without_items_is_blocked() {
        let mut session = InvoiceSession::new();
        fill_header(&mut session);

        assert!(session.export().is_err());
        assert_eq!(
            messages(&session),
            vec![(
                "At least one item is required".to_string(),
                NotificationKind::Error
            )]
        );
    }

    #[test]
    fn export_with_zero_quantity_item_is_blocked() {
        let mut session = InvoiceSession::new();
        fill_header(&mut session);
        let id = session.store_mut().add_line_item();
        session
            .store_mut()
            .update_line_item(id, LineItemPatch::Description("Widget".into()));

        assert!(session.export().is_err());
        assert_eq!(
            messages(&session),
            vec![(
                "All items must have a quantity greater than 0".to_string(),
                NotificationKind::Error
            )]
        );
    }

    #[test]
    fn re_export_of_unchanged_draft_is_independent_and_identical() {
        let mut session = InvoiceSession::new();
        fill_header(&mut session);
        add_widget(&mut session);

        let first = session.export().expect("first export");
        let second = session.export().expect("second export");

        assert_eq!(first.bytes, second.bytes);
        let pushed = messages(&session);
        assert_eq!(pushed.len(), 2);
        assert!(
            pushed
                .iter()
                .all(|(message, kind)| message == "Invoice exported successfully"
                    && *kind == NotificationKind::Success)
        );
    }

    #[test]
    fn failed_export_then_fix_then_export_succeeds() {
        let mut session = InvoiceSession::new();
        add_widget(&mut session);

        assert!(session.export().is_err());

        fill_header(&mut session);
        assert!(session.export().is_ok());

        let pushed = messages(&session);
        assert_eq!(pushed.len(), 2);
        assert_eq!(pushed[0].0, "Company name is required");
        assert_eq!(pushed[1].0, "Invoice exported successfully");
    }
}
