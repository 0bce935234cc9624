use serde::Deserialize;

use crate::domain::{
    entities::InvoiceLineItem,
    ledger::aggregate::Ledger,
    props::{Amount, ContactId},
};

#[derive(Debug, Clone, Deserialize)]
pub enum LedgerCommand {
    SeedLedger(SeedLedgerPayload),
    SendMoney(SendMoneyPayload),
    CreateInvoice(CreateInvoicePayload),
    AddContact(AddContactPayload),
}

/// The actions a screen may dispatch to the store.
#[derive(Debug, Clone, Deserialize)]
pub enum Action {
    SendMoney(SendMoneyPayload),
    CreateInvoice(CreateInvoicePayload),
    AddContact(AddContactPayload),
}

impl From<Action> for LedgerCommand {
    fn from(action: Action) -> Self {
        match action {
            Action::SendMoney(p) => LedgerCommand::SendMoney(p),
            Action::CreateInvoice(p) => LedgerCommand::CreateInvoice(p),
            Action::AddContact(p) => LedgerCommand::AddContact(p),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedLedgerPayload {
    pub snapshot: Box<Ledger>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMoneyPayload {
    pub contact_id: ContactId,
    pub contact_name: String,
    pub contact_initials: String,
    pub contact_color: String,
    pub amount: Amount,
    pub memo: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoicePayload {
    pub contact_id: ContactId,
    pub contact_name: String,
    pub contact_initials: String,
    pub contact_color: String,
    pub amount: Amount,
    pub line_items: Vec<InvoiceLineItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub notes: Option<String>,
}
