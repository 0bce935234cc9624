use cqrs_es::DomainEvent;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Contact, Notification, PaymentRequest, Transaction},
    ledger::aggregate::Ledger,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LedgerEvent {
    LedgerSeeded(LedgerSeededPayload),
    MoneySent(MoneySentPayload),
    InvoiceCreated(InvoiceCreatedPayload),
    ContactAdded(ContactAddedPayload),
}

impl DomainEvent for LedgerEvent {
    fn event_type(&self) -> String {
        let event_type: &str = match self {
            LedgerEvent::LedgerSeeded(_) => "LedgerSeeded",
            LedgerEvent::MoneySent(_) => "MoneySent",
            LedgerEvent::InvoiceCreated(_) => "InvoiceCreated",
            LedgerEvent::ContactAdded(_) => "ContactAdded",
        };
        event_type.to_string()
    }

    fn event_version(&self) -> String {
        "1.0".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerSeededPayload {
    pub snapshot: Box<Ledger>,
}

// Events carry fully built records so that applying them stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoneySentPayload {
    pub transaction: Transaction,
    pub notification: Notification,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceCreatedPayload {
    pub payment_request: PaymentRequest,
    pub notification: Notification,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactAddedPayload {
    pub contact: Contact,
}
