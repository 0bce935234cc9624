use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    entities::Transaction,
    props::{TxType, round_cents},
};

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct TransactionSummary {
    pub income: Decimal,
    pub expenses: Decimal,
}

impl TransactionSummary {
    pub fn net(&self) -> Decimal {
        self.income - self.expenses
    }
}

pub fn summarize(transactions: &[Transaction]) -> TransactionSummary {
    let (income, expenses) =
        transactions
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| match t.tx_type {
                TxType::Credit => (inc + t.amount, exp),
                TxType::Debit => (inc, exp + t.amount),
            });

    TransactionSummary {
        income: round_cents(income),
        expenses: round_cents(expenses),
    }
}
