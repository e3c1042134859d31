//! In-process collective group backed by shared memory.
//!
//! Members exchange buffers through one mailbox per rank and synchronise on an
//! abortable rendezvous. A member that fails a collective, is explicitly
//! aborted, or is dropped while its thread panics tears the whole group down:
//! every blocked or future collective on any member then returns
//! [`TransportError::PeerFailed`] instead of waiting forever.
//!
//! Reductions run as a binomial tree: in the round with stride `s`, rank `r`
//! with `r % 2s == s` posts its buffer and rank `r - s` folds it into its own.
//! After `⌈log2 size⌉` rounds the leader holds the combined buffer.

use std::{
    any::Any,
    num::NonZeroUsize,
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    thread,
};

use tracing::trace;

use crate::error::TransportError;

use super::{Collective, LEADER_RANK};

type Mailbox = Mutex<Option<Box<dyn Any + Send>>>;

struct GroupState {
    rendezvous: Rendezvous,
    mailboxes: Vec<Mailbox>,
}

/// One member of an in-process collective group.
///
/// Each member is meant to be moved onto its own thread.
///
/// # Examples
/// ```
/// use std::{num::NonZeroUsize, thread};
/// use sollin_core::{Collective, SharedMemoryMember};
///
/// let members = SharedMemoryMember::group(NonZeroUsize::new(3).expect("non-zero"));
/// let sums = thread::scope(|scope| {
///     let handles: Vec<_> = members
///         .into_iter()
///         .map(|member| {
///             scope.spawn(move || {
///                 let mut buffer = [member.rank() + 1];
///                 member.reduce_to_leader(&mut buffer, |a, b| a + b)?;
///                 Ok::<_, sollin_core::TransportError>((member.is_leader(), buffer[0]))
///             })
///         })
///         .collect();
///     handles
///         .into_iter()
///         .map(|handle| handle.join().expect("member thread must not panic"))
///         .collect::<Result<Vec<_>, _>>()
/// })?;
/// assert!(sums.contains(&(true, 6)));
/// # Ok::<(), sollin_core::TransportError>(())
/// ```
pub struct SharedMemoryMember {
    rank: usize,
    group: Arc<GroupState>,
}

impl SharedMemoryMember {
    /// Creates a group of `size` members, returned in rank order.
    #[must_use]
    pub fn group(size: NonZeroUsize) -> Vec<Self> {
        let size = size.get();
        let group = Arc::new(GroupState {
            rendezvous: Rendezvous::new(size),
            mailboxes: (0..size).map(|_| Mutex::new(None)).collect(),
        });
        (0..size)
            .map(|rank| Self {
                rank,
                group: Arc::clone(&group),
            })
            .collect()
    }

    /// Tears the group down, releasing every member blocked in a collective.
    pub fn abort(&self) {
        trace!(rank = self.rank, "aborting collective group");
        self.group.rendezvous.abort();
    }

    fn guarded<R>(
        &self,
        operation: impl FnOnce() -> Result<R, TransportError>,
    ) -> Result<R, TransportError> {
        let result = operation();
        if result.is_err() {
            self.abort();
        }
        result
    }

    fn mailbox(
        &self,
        rank: usize,
    ) -> Result<MutexGuard<'_, Option<Box<dyn Any + Send>>>, TransportError> {
        let mailbox = self
            .group
            .mailboxes
            .get(rank)
            .ok_or(TransportError::InvalidRank {
                rank,
                size: self.size(),
            })?;
        mailbox.lock().map_err(|_| TransportError::LockPoisoned {
            resource: "collective mailbox",
        })
    }

    fn post<T: Send + 'static>(&self, payload: Vec<T>) -> Result<(), TransportError> {
        *self.mailbox(self.rank)? = Some(Box::new(payload));
        Ok(())
    }

    fn read_into<T: Clone + 'static>(
        &self,
        from: usize,
        buffer: &mut [T],
    ) -> Result<(), TransportError> {
        let mailbox = self.mailbox(from)?;
        let payload = mailbox
            .as_ref()
            .and_then(|boxed| boxed.downcast_ref::<Vec<T>>())
            .ok_or(TransportError::PayloadMismatch)?;
        check_length(payload.len(), buffer.len())?;
        buffer.clone_from_slice(payload);
        Ok(())
    }

    fn take<T: 'static>(&self, from: usize) -> Result<Vec<T>, TransportError> {
        let boxed = self
            .mailbox(from)?
            .take()
            .ok_or(TransportError::PayloadMismatch)?;
        boxed
            .downcast::<Vec<T>>()
            .map(|payload| *payload)
            .map_err(|_| TransportError::PayloadMismatch)
    }

    fn clear(&self) -> Result<(), TransportError> {
        *self.mailbox(self.rank)? = None;
        Ok(())
    }
}

impl Collective for SharedMemoryMember {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.group.mailboxes.len()
    }

    fn broadcast_from_leader<T>(&self, buffer: &mut [T]) -> Result<(), TransportError>
    where
        T: Clone + Send + 'static,
    {
        self.guarded(|| {
            if self.is_leader() {
                self.post(buffer.to_vec())?;
            }
            self.group.rendezvous.wait()?;
            if !self.is_leader() {
                self.read_into(LEADER_RANK, buffer)?;
            }
            self.group.rendezvous.wait()?;
            if self.is_leader() {
                self.clear()?;
            }
            Ok(())
        })
    }

    fn reduce_to_leader<T, F>(&self, buffer: &mut [T], combine: F) -> Result<(), TransportError>
    where
        T: Clone + Send + 'static,
        F: Fn(&T, &T) -> T,
    {
        self.guarded(|| {
            let size = self.size();
            let mut stride = 1;
            while stride < size {
                let span = stride * 2;
                if self.rank % span == stride {
                    self.post(buffer.to_vec())?;
                }
                self.group.rendezvous.wait()?;

                let peer = self.rank + stride;
                if self.rank % span == 0 && peer < size {
                    let incoming: Vec<T> = self.take(peer)?;
                    check_length(incoming.len(), buffer.len())?;
                    for (mine, theirs) in buffer.iter_mut().zip(&incoming) {
                        *mine = combine(mine, theirs);
                    }
                }
                self.group.rendezvous.wait()?;
                stride = span;
            }
            Ok(())
        })
    }
}

impl Drop for SharedMemoryMember {
    fn drop(&mut self) {
        if thread::panicking() {
            self.abort();
        }
    }
}

const fn check_length(expected: usize, found: usize) -> Result<(), TransportError> {
    if expected == found {
        Ok(())
    } else {
        Err(TransportError::LengthMismatch { expected, found })
    }
}

/// Reusable barrier that can be torn down.
struct Rendezvous {
    size: usize,
    state: Mutex<RendezvousState>,
    signal: Condvar,
}

#[derive(Default)]
struct RendezvousState {
    arrived: usize,
    generation: u64,
    aborted: bool,
}

impl Rendezvous {
    fn new(size: usize) -> Self {
        Self {
            size,
            state: Mutex::new(RendezvousState::default()),
            signal: Condvar::new(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RendezvousState>, TransportError> {
        self.state.lock().map_err(|_| TransportError::LockPoisoned {
            resource: "collective rendezvous",
        })
    }

    fn wait(&self) -> Result<(), TransportError> {
        let mut state = self.lock()?;
        if state.aborted {
            return Err(TransportError::PeerFailed);
        }

        let generation = state.generation;
        state.arrived += 1;
        if state.arrived == self.size {
            state.arrived = 0;
            state.generation = generation.wrapping_add(1);
            drop(state);
            self.signal.notify_all();
            return Ok(());
        }

        while state.generation == generation && !state.aborted {
            state = self
                .signal
                .wait(state)
                .map_err(|_| TransportError::LockPoisoned {
                    resource: "collective rendezvous",
                })?;
        }

        if state.generation == generation {
            Err(TransportError::PeerFailed)
        } else {
            Ok(())
        }
    }

    fn abort(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.aborted = true;
        drop(state);
        self.signal.notify_all();
    }
}
