use derive_more::Display;

#[derive(Debug, PartialEq, Display)]
pub enum LedgerError {
    IllegalAmount,
    UnknownContact,
    BlankName,
    NotSeeded,
    AlreadySeeded,
}

impl std::error::Error for LedgerError {}
