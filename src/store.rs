use std::sync::Arc;

use cqrs_es::{AggregateError, CqrsFramework};
use tokio::sync::Mutex;

use crate::{
    domain::{
        ledger::{
            aggregate::{Ledger, ledger_aggregate_id},
            command::{Action, LedgerCommand, SeedLedgerPayload},
            error::LedgerError,
        },
        services::LedgerServices,
    },
    journal::Journal,
    query::audit::LedgerAuditLog,
    seed,
};

pub type StoreError = AggregateError<LedgerError>;

// Single authoritative state container for one ledger.
// Every dispatch goes through the aggregate, so a rejected action leaves the state untouched.
pub struct Store {
    aggregate_id: String,
    cqrs: CqrsFramework<Ledger, Journal>,
    journal: Journal,
    audit: LedgerAuditLog,
    dispatching: Mutex<()>,
}

impl Store {
    pub async fn new(snapshot: Ledger, services: LedgerServices) -> Result<Self, StoreError> {
        let journal = Journal::default();
        let audit = LedgerAuditLog::default();
        let cqrs = CqrsFramework::new(journal.clone(), vec![Box::new(audit.clone())], services);
        let aggregate_id = ledger_aggregate_id(&snapshot.account.account_number);

        cqrs.execute(
            &aggregate_id,
            LedgerCommand::SeedLedger(SeedLedgerPayload {
                snapshot: Box::new(snapshot),
            }),
        )
        .await?;

        Ok(Store {
            aggregate_id,
            cqrs,
            journal,
            audit,
            dispatching: Mutex::new(()),
        })
    }

    /// Store over the built-in seed data, with the system clock.
    pub async fn with_seed_data() -> Result<Self, StoreError> {
        Store::new(seed::ledger(), LedgerServices::default()).await
    }

    /// Applies one action and returns the ledger exactly as that action left it.
    ///
    /// Dispatches on a shared store are serialized, so no other action can land
    /// between the commit and the returned state.
    pub async fn dispatch(&self, action: Action) -> Result<Arc<Ledger>, StoreError> {
        let _turn = self.dispatching.lock().await;

        self.cqrs
            .execute(&self.aggregate_id, LedgerCommand::from(action))
            .await?;

        self.state()
    }

    pub fn state(&self) -> Result<Arc<Ledger>, StoreError> {
        self.journal.current(&self.aggregate_id)
    }

    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    pub fn audit(&self) -> &LedgerAuditLog {
        &self.audit
    }
}
