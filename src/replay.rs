use std::sync::Arc;

use color_eyre::eyre::{OptionExt, Result, eyre};
use rust_decimal::Decimal;

use crate::{
    csv::{ActionType, CsvActionRecord},
    domain::{
        entities::{Contact, InvoiceLineItem},
        ledger::{
            aggregate::Ledger,
            command::{Action, AddContactPayload, CreateInvoicePayload, SendMoneyPayload},
        },
        props::{Amount, ContactId},
    },
    store::Store,
};

// Plays the part of the screens: resolves the contact a row refers to,
// builds the action payload and hands it to the store.
pub struct Replay<'a> {
    store: &'a Store,
}

impl<'a> Replay<'a> {
    pub fn new(store: &'a Store) -> Self {
        Replay { store }
    }

    pub async fn handle(&self, r: CsvActionRecord) -> Result<Arc<Ledger>> {
        match r.action_type {
            ActionType::SendMoney => self.handle_send_money(r).await,
            ActionType::CreateInvoice => self.handle_create_invoice(r).await,
            ActionType::AddContact => self.handle_add_contact(r).await,
        }
    }

    pub async fn handle_send_money(&self, r: CsvActionRecord) -> Result<Arc<Ledger>> {
        let amount = require_amount(r.amount, "send_money")?;
        let contact = self.require_contact(r.contact_id.as_deref())?;

        self.dispatch(Action::SendMoney(SendMoneyPayload {
            contact_name: contact.full_name(),
            contact_id: contact.id,
            contact_initials: contact.initials,
            contact_color: contact.color,
            amount: Amount(amount),
            memo: r.note.unwrap_or_default(),
        }))
        .await
    }

    pub async fn handle_create_invoice(&self, r: CsvActionRecord) -> Result<Arc<Ledger>> {
        let amount = require_amount(r.amount, "create_invoice")?;
        let contact = self.require_contact(r.contact_id.as_deref())?;

        let line_items = r
            .note
            .map(|description| {
                vec![InvoiceLineItem {
                    id: "1".to_owned(),
                    description,
                    amount,
                }]
            })
            .unwrap_or_default();

        self.dispatch(Action::CreateInvoice(CreateInvoicePayload {
            contact_name: contact.full_name(),
            contact_id: contact.id,
            contact_initials: contact.initials,
            contact_color: contact.color,
            amount: Amount(amount),
            line_items,
        }))
        .await
    }

    pub async fn handle_add_contact(&self, r: CsvActionRecord) -> Result<Arc<Ledger>> {
        self.dispatch(Action::AddContact(AddContactPayload {
            first_name: r.first_name.unwrap_or_default(),
            last_name: r.last_name.unwrap_or_default(),
            email: None,
            account_number: None,
            routing_number: None,
            notes: r.note,
        }))
        .await
    }

    fn require_contact(&self, contact_id: Option<&str>) -> Result<Contact> {
        let contact_id = contact_id.ok_or_eyre("No contact found in row")?;
        let state = self.store.state().map_err(|e| eyre!(e))?;

        state
            .contact(&ContactId(contact_id.to_owned()))
            .cloned()
            .ok_or_eyre(format!("Unknown contact {}", contact_id))
    }

    async fn dispatch(&self, action: Action) -> Result<Arc<Ledger>> {
        self.store.dispatch(action).await.map_err(|e| eyre!(e))
    }
}

fn require_amount(amount_opt: Option<Decimal>, action: &str) -> Result<Decimal> {
    amount_opt.ok_or_eyre(format!("No amount found in row for {}", action))
}
