use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use cqrs_es::{DomainEvent, EventEnvelope, Query};
use tracing::info;

use crate::domain::ledger::{aggregate::Ledger, event::LedgerEvent};

/// Logs every committed ledger event.
#[derive(Clone, Default)]
pub struct LedgerAuditLog {
    committed: Arc<AtomicUsize>,
}

impl LedgerAuditLog {
    pub fn committed(&self) -> usize {
        self.committed.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Query<Ledger> for LedgerAuditLog {
    async fn dispatch(&self, aggregate_id: &str, events: &[EventEnvelope<Ledger>]) {
        for event in events {
            self.committed.fetch_add(1, Ordering::Relaxed);
            info!(
                aggregate_id,
                sequence = event.sequence,
                event_type = %event.payload.event_type(),
                "{}",
                describe(&event.payload)
            );
        }
    }
}

fn describe(event: &LedgerEvent) -> String {
    match event {
        LedgerEvent::LedgerSeeded(p) => format!(
            "seeded account {} with balance {}",
            p.snapshot.account.account_number, p.snapshot.account.balance
        ),
        LedgerEvent::MoneySent(p) => format!(
            "sent {} to {}",
            p.transaction.amount, p.transaction.name
        ),
        LedgerEvent::InvoiceCreated(p) => format!(
            "invoiced {} for {}",
            p.payment_request.name, p.payment_request.amount
        ),
        LedgerEvent::ContactAdded(p) => format!("added contact {}", p.contact.id),
    }
}
