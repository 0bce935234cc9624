use async_trait::async_trait;
use chrono::NaiveDateTime;
use cqrs_es::Aggregate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    entities::{
        Account, Card, Contact, DebitCard, Notification, PaymentRequest, Transaction,
    },
    ledger::{
        command::{
            AddContactPayload, CreateInvoicePayload, LedgerCommand, SeedLedgerPayload,
            SendMoneyPayload,
        },
        error::LedgerError,
        event::{
            ContactAddedPayload, InvoiceCreatedPayload, LedgerEvent, LedgerSeededPayload,
            MoneySentPayload,
        },
    },
    props::{
        Amount, Category, ContactId, IconKind, PaymentStatus, TransactionId, TxType, round_cents,
    },
    services::{IdKind, LedgerServices},
};

pub const CONTACT_PALETTE: [&str; 11] = [
    "#56CCFF", "#FF9757", "#A78BFA", "#FF56AD", "#5ADF8D", "#FFD857", "#60A5FA", "#8956FF",
    "#2DD4BF", "#F472B6", "#ABFF57",
];

const JUST_NOW: &str = "Just now";

// Aggregate
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub(crate) seeded: bool,
    pub account: Account,
    pub transactions: Vec<Transaction>,
    pub payment_requests: Vec<PaymentRequest>,
    pub scheduled_payments: Vec<PaymentRequest>,
    pub contacts: Vec<Contact>,
    pub notifications: Vec<Notification>,
    pub cards: Vec<Card>,
    pub debit_cards: Vec<DebitCard>,
}

#[async_trait]
impl Aggregate for Ledger {
    type Command = LedgerCommand;
    type Event = LedgerEvent;
    type Error = LedgerError;
    type Services = LedgerServices;

    fn aggregate_type() -> String {
        "Ledger".to_string()
    }

    async fn handle(
        &self,
        command: Self::Command,
        services: &Self::Services,
    ) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LedgerCommand::SeedLedger(p) => self.seed(p).await,
            LedgerCommand::SendMoney(p) => self.send_money(p, services).await,
            LedgerCommand::CreateInvoice(p) => self.create_invoice(p, services).await,
            LedgerCommand::AddContact(p) => self.add_contact(p, services).await,
        }
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            LedgerEvent::LedgerSeeded(p) => {
                *self = *p.snapshot;
                self.seeded = true;
            }
            LedgerEvent::MoneySent(p) => {
                self.account.balance = round_cents(self.account.balance - p.transaction.amount);
                self.transactions.insert(0, p.transaction);
                self.notifications.insert(0, p.notification);
            }
            LedgerEvent::InvoiceCreated(p) => {
                self.payment_requests.insert(0, p.payment_request);
                self.notifications.insert(0, p.notification);
            }
            LedgerEvent::ContactAdded(p) => {
                self.contacts.insert(0, p.contact);
            }
        }
    }
}

impl Ledger {
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    async fn seed(
        &self,
        p: SeedLedgerPayload,
    ) -> Result<Vec<<Ledger as Aggregate>::Event>, <Ledger as Aggregate>::Error> {
        debug!(
            "Seeding ledger {} with {} transactions",
            p.snapshot.account.account_number,
            p.snapshot.transactions.len()
        );

        if self.seeded {
            return Err(LedgerError::AlreadySeeded);
        }

        Ok(vec![LedgerEvent::LedgerSeeded(LedgerSeededPayload {
            snapshot: p.snapshot,
        })])
    }

    async fn send_money(
        &self,
        p: SendMoneyPayload,
        services: &LedgerServices,
    ) -> Result<Vec<<Ledger as Aggregate>::Event>, <Ledger as Aggregate>::Error> {
        debug!("Sending {} to {}", p.amount, p.contact_id);

        require_seeded(self)?;
        require_positive_amount(&p.amount)?;
        require_known_contact(self, &p.contact_id)?;

        let now = services.clock.now();
        let seq = services.ids.next_id(IdKind::Transaction);

        let transaction = Transaction {
            id: TransactionId(seq.to_string()),
            icon: p.contact_initials,
            icon_kind: IconKind::Initials,
            color: p.contact_color,
            name: p.contact_name.clone(),
            category: Category::Transfer,
            amount: *p.amount,
            date: now.date(),
            tx_type: TxType::Debit,
            time: Some(time_label(&now)),
            card_last4: None,
            card_name: None,
            reference: Some(transaction_reference(&now, seq)),
            note: non_blank(Some(p.memo)),
            receipt: None,
        };

        let notification = Notification {
            id: services.ids.next_id(IdKind::Notification).to_string(),
            title: "Money Sent".to_string(),
            message: format!("You sent ${:.2} to {}", *p.amount, p.contact_name),
            time: JUST_NOW.to_string(),
            read: false,
        };

        Ok(vec![LedgerEvent::MoneySent(MoneySentPayload {
            transaction,
            notification,
        })])
    }

    async fn create_invoice(
        &self,
        p: CreateInvoicePayload,
        services: &LedgerServices,
    ) -> Result<Vec<<Ledger as Aggregate>::Event>, <Ledger as Aggregate>::Error> {
        debug!(
            "Invoicing {} for {} with {} line items",
            p.contact_id,
            p.amount,
            p.line_items.len()
        );

        require_seeded(self)?;
        require_non_negative_amount(&p.amount)?;
        require_known_contact(self, &p.contact_id)?;

        let payment_request = PaymentRequest {
            id: services.ids.next_id(IdKind::PaymentRequest).to_string(),
            name: p.contact_name.clone(),
            initials: p.contact_initials,
            color: p.contact_color,
            amount: *p.amount,
            status: PaymentStatus::Open,
            contact_id: Some(p.contact_id),
            line_items: p.line_items,
            created_at: Some(services.clock.now().date()),
        };

        let notification = Notification {
            id: services.ids.next_id(IdKind::Notification).to_string(),
            title: "Invoice Sent".to_string(),
            message: format!("Invoice for ${:.2} sent to {}", *p.amount, p.contact_name),
            time: JUST_NOW.to_string(),
            read: false,
        };

        Ok(vec![LedgerEvent::InvoiceCreated(InvoiceCreatedPayload {
            payment_request,
            notification,
        })])
    }

    async fn add_contact(
        &self,
        p: AddContactPayload,
        services: &LedgerServices,
    ) -> Result<Vec<<Ledger as Aggregate>::Event>, <Ledger as Aggregate>::Error> {
        debug!("Adding contact {} {}", p.first_name, p.last_name);

        require_seeded(self)?;

        let first_name = require_name(&p.first_name)?;
        let last_name = require_name(&p.last_name)?;

        let initials: String = first_name
            .chars()
            .take(1)
            .chain(last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect();

        let n = services.ids.next_id(IdKind::Contact);
        let color = CONTACT_PALETTE[(n % CONTACT_PALETTE.len() as u64) as usize];

        Ok(vec![LedgerEvent::ContactAdded(ContactAddedPayload {
            contact: Contact {
                id: ContactId(format!("c{}", n)),
                first_name,
                last_name,
                initials,
                color: color.to_string(),
                email: non_blank(p.email),
                account_number: non_blank(p.account_number),
                routing_number: non_blank(p.routing_number),
                notes: non_blank(p.notes),
            },
        })])
    }
}

fn require_seeded(ledger: &Ledger) -> Result<(), <Ledger as Aggregate>::Error> {
    if !ledger.seeded {
        return Err(LedgerError::NotSeeded);
    }

    Ok(())
}

fn require_positive_amount(amount: &Amount) -> Result<(), <Ledger as Aggregate>::Error> {
    if amount.0 <= Decimal::ZERO {
        return Err(LedgerError::IllegalAmount);
    }

    require_cents(amount)
}

fn require_non_negative_amount(amount: &Amount) -> Result<(), <Ledger as Aggregate>::Error> {
    if amount.0 < Decimal::ZERO {
        return Err(LedgerError::IllegalAmount);
    }

    require_cents(amount)
}

// Fractions of a cent are not representable on the account.
fn require_cents(amount: &Amount) -> Result<(), <Ledger as Aggregate>::Error> {
    if amount.normalize().scale() > 2 {
        return Err(LedgerError::IllegalAmount);
    }

    Ok(())
}

fn require_known_contact(
    ledger: &Ledger,
    contact_id: &ContactId,
) -> Result<(), <Ledger as Aggregate>::Error> {
    ledger
        .contact(contact_id)
        .map(|_| ())
        .ok_or(LedgerError::UnknownContact)
}

fn require_name(name: &str) -> Result<String, <Ledger as Aggregate>::Error> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::BlankName);
    }

    Ok(trimmed.to_owned())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn time_label(now: &NaiveDateTime) -> String {
    now.format("%-I:%M %P").to_string()
}

fn transaction_reference(now: &NaiveDateTime, seq: u64) -> String {
    format!("TXN-{}-{:03}", now.format("%Y%m%d"), seq)
}

pub fn ledger_aggregate_id(account_number: &str) -> String {
    format!("Ledger-{}", account_number.replace(' ', ""))
}
