use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shrinkwraprs::Shrinkwrap;

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct ContactId(pub String);

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct TransactionId(pub String);

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct Amount(pub Decimal);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[display("food")]
    Food,
    #[display("transport")]
    Transport,
    #[display("transfer")]
    Transfer,
    #[display("income")]
    Income,
    #[display("other")]
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Emoji,
    Initials,
    Image,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Open,
    Filled,
    Declined,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardNetwork {
    Visa,
    Mastercard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardColor {
    Blue,
    Red,
    Black,
}

/// Rounds a money value to cents, half away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
