pub mod entities;
pub mod ledger;
pub mod props;
pub mod services;
