//! In-memory roster store.
//!
//! The store is the sole owner of admitted members and is volatile: all
//! members are lost when the session ends. Mutation happens only through
//! append, replace and remove; reads are full enumeration for rendering.

use crate::models::Member;

/// Ordered sequence of admitted members.
///
/// Order is insertion order, except that a replace keeps the record's
/// position and a remove shifts every later record down by one.
#[derive(Debug, Default)]
pub struct RosterStore {
    members: Vec<Member>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member to the end of the roster and return its position.
    ///
    /// No uniqueness constraint applies; duplicate names and parties are
    /// permitted.
    pub fn append(&mut self, member: Member) -> usize {
        self.members.push(member);
        let index = self.members.len() - 1;
        tracing::debug!("Appended member at {} ({} total)", index, self.members.len());
        index
    }

    /// Replace the member at `index`, returning the displaced one.
    ///
    /// Callers must release the displaced member's photo binding. `index`
    /// must be a currently valid position; the form controller only edits
    /// indices it previously loaded.
    pub fn replace_at(&mut self, index: usize, member: Member) -> Member {
        let displaced = std::mem::replace(&mut self.members[index], member);
        tracing::debug!("Replaced member at {}", index);
        displaced
    }

    /// Remove and return the member at `index`; later members shift down.
    ///
    /// Callers must release the removed member's photo binding and must not
    /// reuse positions cached before the removal.
    pub fn remove_at(&mut self, index: usize) -> Member {
        let removed = self.members.remove(index);
        tracing::debug!("Removed member at {} ({} left)", index, self.members.len());
        removed
    }

    pub fn get(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }
}
