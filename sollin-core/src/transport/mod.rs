//! Collective transport used by the workers.
//!
//! The engine needs exactly two blocking collectives: a broadcast from the
//! leader and an elementwise reduction to the leader. [`Collective`] is the
//! seam for any substrate that can provide them; [`SharedMemoryMember`] is the
//! in-process implementation used by [`crate::Sollin`].

mod shared;

use crate::error::TransportError;

pub use self::shared::SharedMemoryMember;

/// Rank of the worker that owns the authoritative state.
pub const LEADER_RANK: usize = 0;

/// Blocking collective operations over a fixed group of workers.
///
/// Every member must call the same collectives in the same order with
/// buffers of the same length. A call returns only once every member has
/// reached it, or with an error once the group can no longer complete it.
pub trait Collective {
    /// Returns this member's rank in `0..size()`.
    fn rank(&self) -> usize;

    /// Returns the number of members in the group.
    fn size(&self) -> usize;

    /// Returns `true` for the member at [`LEADER_RANK`].
    fn is_leader(&self) -> bool {
        self.rank() == LEADER_RANK
    }

    /// Overwrites `buffer` on every member with the leader's contents.
    ///
    /// # Errors
    /// Returns a [`TransportError`] when a peer fails or contributes a
    /// mismatched buffer.
    fn broadcast_from_leader<T>(&self, buffer: &mut [T]) -> Result<(), TransportError>
    where
        T: Clone + Send + 'static;

    /// Folds every member's `buffer` into the leader's buffer, one `combine`
    /// per position.
    ///
    /// `combine` must be associative and commutative. After the call only the
    /// leader's buffer is meaningful; other members must not read theirs.
    ///
    /// # Errors
    /// Returns a [`TransportError`] when a peer fails or contributes a
    /// mismatched buffer.
    fn reduce_to_leader<T, F>(&self, buffer: &mut [T], combine: F) -> Result<(), TransportError>
    where
        T: Clone + Send + 'static,
        F: Fn(&T, &T) -> T;
}
