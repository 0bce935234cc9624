use std::io;

use color_eyre::eyre::{Result, eyre};
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::ledger::aggregate::Ledger,
    query::{sections::group_by_date, summary::summarize},
};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountView {
    pub name: String,
    #[serde(rename = "account")]
    pub account_number: String,
    pub balance: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
    pub transactions: usize,
    pub notifications: usize,
    #[serde(rename = "requests")]
    pub payment_requests: usize,
    pub contacts: usize,
}

impl From<&Ledger> for AccountView {
    fn from(ledger: &Ledger) -> Self {
        let summary = summarize(&ledger.transactions);
        AccountView {
            name: ledger.account.name.clone(),
            account_number: ledger.account.account_number.clone(),
            balance: ledger.account.balance,
            income: summary.income,
            expenses: summary.expenses,
            transactions: ledger.transactions.len(),
            notifications: ledger.notifications.len(),
            payment_requests: ledger.payment_requests.len(),
            contacts: ledger.contacts.len(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
struct DailyRow {
    date: String,
    label: String,
    daily_total: Decimal,
    transactions: usize,
}

pub fn write_account_csv<W: io::Write>(writer: W, ledger: &Ledger) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer
        .serialize(AccountView::from(ledger))
        .map_err(|e| eyre!(e))?;
    csv_writer.flush()?;

    Ok(())
}

pub fn write_daily_csv<W: io::Write>(writer: W, ledger: &Ledger) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    for section in group_by_date(&ledger.transactions) {
        csv_writer
            .serialize(DailyRow {
                date: section.date.format("%Y-%m-%d").to_string(),
                label: section.label,
                daily_total: section.daily_total,
                transactions: section.transactions.len(),
            })
            .map_err(|e| eyre!(e))?;
    }
    csv_writer.flush()?;

    Ok(())
}
