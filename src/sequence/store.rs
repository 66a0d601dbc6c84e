//! Authoritative sequence storage with single-writer runs
//!
//! The store hands out at most one [`RunTicket`] at a time. While a ticket is
//! outstanding, [`SequenceStore::replace`] is rejected and only the ticket
//! holder may publish new states through [`SequenceStore::publish`].

use super::Sequence;
use crate::error::StoreError;

/// Proof of exclusive ownership for the duration of a sort run
///
/// Not `Clone`: the only way to release it is [`SequenceStore::finish_run`].
#[derive(Debug, PartialEq, Eq)]
pub struct RunTicket {
    generation: u64,
}

impl RunTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct SequenceStore {
    seed: Sequence,
    current: Sequence,
    active_run: Option<u64>,
    next_generation: u64,
}

impl SequenceStore {
    /// Create a store whose current state starts as a copy of `seed`
    pub fn new(seed: Sequence) -> Self {
        SequenceStore {
            current: seed.clone(),
            seed,
            active_run: None,
            next_generation: 1,
        }
    }

    pub fn current(&self) -> &Sequence {
        &self.current
    }

    pub fn seed(&self) -> &Sequence {
        &self.seed
    }

    pub fn is_running(&self) -> bool {
        self.active_run.is_some()
    }

    /// Swap in a new state; the previous state is returned
    pub fn replace(&mut self, sequence: Sequence) -> Result<Sequence, StoreError> {
        if self.active_run.is_some() {
            return Err(StoreError::Locked);
        }
        Ok(std::mem::replace(&mut self.current, sequence))
    }

    /// Restore the seed values under newly minted ids
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let reseeded = Sequence::from_values(&self.seed.values());
        self.replace(reseeded).map(|_| ())
    }

    /// Claim exclusive ownership for a sort run
    pub fn begin_run(&mut self) -> Result<RunTicket, StoreError> {
        if self.active_run.is_some() {
            return Err(StoreError::Locked);
        }
        let generation = self.next_generation;
        self.next_generation += 1;
        self.active_run = Some(generation);
        Ok(RunTicket { generation })
    }

    /// Publish an intermediate state on behalf of the run owner
    pub fn publish(&mut self, ticket: &RunTicket, sequence: Sequence) -> Result<(), StoreError> {
        self.check_ticket(ticket)?;
        self.current = sequence;
        Ok(())
    }

    /// Release ownership
    pub fn finish_run(&mut self, ticket: RunTicket) -> Result<(), StoreError> {
        self.check_ticket(&ticket)?;
        self.active_run = None;
        Ok(())
    }

    fn check_ticket(&self, ticket: &RunTicket) -> Result<(), StoreError> {
        match self.active_run {
            Some(generation) if generation == ticket.generation => Ok(()),
            _ => Err(StoreError::StaleTicket {
                generation: ticket.generation,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_is_atomic_and_returns_previous() {
        let mut store = SequenceStore::new(Sequence::from_values(&[1, 2]));
        let previous = store
            .replace(Sequence::from_values(&[9]))
            .expect("replace failed");
        assert_eq!(previous.values(), vec![1, 2]);
        assert_eq!(store.current().values(), vec![9]);
    }

    #[test]
    fn test_reset_restores_seed_values() {
        let seed = Sequence::from_values(&[4, 5]);
        let mut store = SequenceStore::new(seed.clone());
        store.replace(Sequence::new()).unwrap();
        store.reset().unwrap();
        assert_eq!(store.current().values(), seed.values());
    }

    #[test]
    fn test_reset_never_revives_removed_ids() {
        let mut store = SequenceStore::new(Sequence::from_values(&[10, 20, 30]));
        let head = store.current().first().map(|e| e.id).unwrap();
        let rest = Sequence::from_elements(store.current().elements()[1..].to_vec());
        store.replace(rest).unwrap();
        store.reset().unwrap();

        assert_eq!(store.current().values(), vec![10, 20, 30]);
        assert!(store.current().iter().all(|e| e.id != head));
    }

    #[test]
    fn test_run_locks_out_other_writers() {
        let mut store = SequenceStore::new(Sequence::from_values(&[3, 1]));
        let ticket = store.begin_run().unwrap();

        assert!(store.is_running());
        assert_eq!(store.replace(Sequence::new()), Err(StoreError::Locked));
        assert_eq!(store.reset(), Err(StoreError::Locked));
        assert_eq!(store.begin_run(), Err(StoreError::Locked));

        store
            .publish(&ticket, Sequence::from_values(&[1, 3]))
            .unwrap();
        assert_eq!(store.current().values(), vec![1, 3]);

        store.finish_run(ticket).unwrap();
        assert!(!store.is_running());
        assert!(store.replace(Sequence::new()).is_ok());
    }

    #[test]
    fn test_stale_ticket_cannot_publish() {
        let mut store = SequenceStore::new(Sequence::from_values(&[1]));
        let first = store.begin_run().unwrap();
        let stale = RunTicket {
            generation: first.generation(),
        };
        store.finish_run(first).unwrap();
        let _second = store.begin_run().unwrap();

        assert!(matches!(
            store.publish(&stale, Sequence::new()),
            Err(StoreError::StaleTicket { .. })
        ));
    }
}
