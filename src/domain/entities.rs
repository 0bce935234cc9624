use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::props::{
    CardColor, CardNetwork, Category, ContactId, IconKind, PaymentStatus, TransactionId, TxType,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub account_number: String,
    pub routing_number: String,
    pub balance: Decimal,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub icon: String,
    pub icon_kind: IconKind,
    pub color: String,
    pub name: String,
    pub category: Category,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub tx_type: TxType,
    pub time: Option<String>,
    pub card_last4: Option<String>,
    pub card_name: Option<String>,
    /// Human facing reference, e.g. `TXN-20251231-001`.
    pub reference: Option<String>,
    pub note: Option<String>,
    pub receipt: Option<String>,
}

impl Transaction {
    /// Amount with the sign it contributes to the balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.tx_type {
            TxType::Credit => self.amount,
            TxType::Debit => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
    pub color: String,
    pub email: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub notes: Option<String>,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceLineItem {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
}

impl InvoiceLineItem {
    pub fn total(items: &[InvoiceLineItem]) -> Decimal {
        items.iter().map(|i| i.amount).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRequest {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub color: String,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub contact_id: Option<ContactId>,
    pub line_items: Vec<InvoiceLineItem>,
    pub created_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: String,
    pub network: CardNetwork,
    pub last4: String,
    pub holder: String,
    pub expiry: String,
    pub color: CardColor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebitCard {
    pub id: String,
    pub name: String,
    pub last4: String,
    pub spent_today: Decimal,
}

// Static catalogue records, never part of the ledger state.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryInfo {
    pub id: String,
    pub label: String,
    pub color: String,
    /// `None` stands for the "All" pseudo category.
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub id: String,
    pub label: String,
    pub month: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatementSection {
    pub title: String,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employer {
    pub name: String,
    pub role: String,
    pub pay_schedule: String,
    pub last_pay: String,
    pub next_pay: String,
    pub last_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, dec};

    use crate::{domain::entities::InvoiceLineItem, seed};

    #[test]
    fn line_item_total() {
        let items = vec![
            InvoiceLineItem {
                id: "1".to_owned(),
                description: "Design".to_owned(),
                amount: dec!(120.50),
            },
            InvoiceLineItem {
                id: "2".to_owned(),
                description: "Hosting".to_owned(),
                amount: dec!(29.50),
            },
        ];

        assert_eq!(InvoiceLineItem::total(&items), dec!(150.00));
        assert_eq!(InvoiceLineItem::total(&[]), Decimal::ZERO);
    }

    #[test]
    fn contact_full_name() {
        let contacts = seed::contacts();

        assert_eq!(contacts[0].full_name(), "Adam White");
    }
}
