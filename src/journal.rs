use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use async_trait::async_trait;
use cqrs_es::{Aggregate, AggregateContext, AggregateError, EventEnvelope, EventStore};
use tracing::trace;

use crate::domain::ledger::{aggregate::Ledger, error::LedgerError, event::LedgerEvent};

pub type JournalError = AggregateError<LedgerError>;

/// In-memory event log for ledgers.
///
/// Each stream keeps the ledger folded up to its last event next to the
/// events themselves, so loading an aggregate is a pointer copy and a commit
/// only applies the new events.
#[derive(Clone, Default)]
pub struct Journal {
    streams: Arc<RwLock<HashMap<String, Stream>>>,
}

#[derive(Default)]
struct Stream {
    events: Vec<EventEnvelope<Ledger>>,
    ledger: Arc<Ledger>,
}

impl Stream {
    fn sequence(&self) -> usize {
        self.events.last().map_or(0, |e| e.sequence)
    }
}

pub struct JournalContext {
    aggregate_id: String,
    ledger: Arc<Ledger>,
    sequence: usize,
}

impl AggregateContext<Ledger> for JournalContext {
    fn aggregate(&self) -> &Ledger {
        &self.ledger
    }
}

impl Journal {
    /// Ledger as of the last committed event; an unknown stream is an empty ledger.
    pub fn current(&self, aggregate_id: &str) -> Result<Arc<Ledger>, JournalError> {
        let streams = self.streams.read().map_err(poisoned)?;

        Ok(streams
            .get(aggregate_id)
            .map(|s| Arc::clone(&s.ledger))
            .unwrap_or_default())
    }

    pub fn sequence(&self, aggregate_id: &str) -> Result<usize, JournalError> {
        let streams = self.streams.read().map_err(poisoned)?;

        Ok(streams.get(aggregate_id).map_or(0, Stream::sequence))
    }
}

#[async_trait]
impl EventStore<Ledger> for Journal {
    type AC = JournalContext;

    async fn load_events(
        &self,
        aggregate_id: &str,
    ) -> Result<Vec<EventEnvelope<Ledger>>, JournalError> {
        let streams = self.streams.read().map_err(poisoned)?;

        Ok(streams
            .get(aggregate_id)
            .map(|s| s.events.clone())
            .unwrap_or_default())
    }

    async fn load_aggregate(&self, aggregate_id: &str) -> Result<JournalContext, JournalError> {
        let streams = self.streams.read().map_err(poisoned)?;
        let (ledger, sequence) = streams
            .get(aggregate_id)
            .map(|s| (Arc::clone(&s.ledger), s.sequence()))
            .unwrap_or_default();

        Ok(JournalContext {
            aggregate_id: aggregate_id.to_owned(),
            ledger,
            sequence,
        })
    }

    async fn commit(
        &self,
        events: Vec<LedgerEvent>,
        context: JournalContext,
        metadata: HashMap<String, String>,
    ) -> Result<Vec<EventEnvelope<Ledger>>, JournalError> {
        let JournalContext {
            aggregate_id,
            ledger,
            sequence,
        } = context;
        // Release the loaded copy so the stream's ledger can be updated in place.
        drop(ledger);

        if events.is_empty() {
            return Ok(Vec::new());
        }

        let mut streams = self.streams.write().map_err(poisoned)?;
        let stream = streams.entry(aggregate_id.clone()).or_default();

        if stream.sequence() != sequence {
            return Err(AggregateError::AggregateConflict);
        }

        let committed: Vec<EventEnvelope<Ledger>> = events
            .into_iter()
            .zip(sequence + 1..)
            .map(|(payload, sequence)| EventEnvelope {
                aggregate_id: aggregate_id.clone(),
                sequence,
                payload,
                metadata: metadata.clone(),
            })
            .collect();

        let ledger = Arc::make_mut(&mut stream.ledger);
        for envelope in &committed {
            ledger.apply(envelope.payload.clone());
        }
        stream.events.extend(committed.iter().cloned());

        trace!(
            "Committed {} events to {}, now at {}",
            committed.len(),
            aggregate_id,
            stream.sequence()
        );

        Ok(committed)
    }
}

fn poisoned<T>(e: PoisonError<T>) -> JournalError {
    AggregateError::UnexpectedError(e.to_string().into())
}
