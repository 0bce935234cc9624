use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use chrono::{Local, NaiveDateTime};

/// Where "today" comes from when an action stamps a record.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Transaction,
    Notification,
    PaymentRequest,
    Contact,
}

/// Hands out identifiers. Each kind is monotonically increasing and never reused.
pub trait IdSource: Send + Sync {
    fn next_id(&self, kind: IdKind) -> u64;
}

pub struct SequentialIds {
    transaction: AtomicU64,
    notification: AtomicU64,
    payment_request: AtomicU64,
    contact: AtomicU64,
}

impl SequentialIds {
    pub const DEFAULT_START: u64 = 100;

    pub fn starting_at(start: u64) -> Self {
        SequentialIds {
            transaction: AtomicU64::new(start),
            notification: AtomicU64::new(start),
            payment_request: AtomicU64::new(start),
            contact: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds::starting_at(SequentialIds::DEFAULT_START)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self, kind: IdKind) -> u64 {
        let counter = match kind {
            IdKind::Transaction => &self.transaction,
            IdKind::Notification => &self.notification,
            IdKind::PaymentRequest => &self.payment_request,
            IdKind::Contact => &self.contact,
        };
        counter.fetch_add(1, Ordering::Relaxed)
    }
}

// Interface to the outside world: wall clock and id generation.
#[derive(Clone)]
pub struct LedgerServices {
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdSource>,
}

impl LedgerServices {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        LedgerServices { clock, ids }
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        LedgerServices::new(Arc::new(clock), Arc::new(SequentialIds::default()))
    }
}

impl Default for LedgerServices {
    fn default() -> Self {
        LedgerServices::with_clock(SystemClock)
    }
}
