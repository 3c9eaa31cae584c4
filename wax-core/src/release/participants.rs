//! Ordered participant list with stable identities and positional reordering.
//!
//! Display order is the persisted order; there is no hidden sort. Index
//! arguments refer to current positions; calling with stale indices is a
//! caller bug and comes back as [`ParticipantError::IndexOutOfRange`].

use crate::release::record::{Participant, ParticipantRole};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParticipantError {
    #[error("Participant index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("No participant with id {0}")]
    UnknownParticipant(Uuid),
}

/// Partial update for a participant. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantPatch {
    pub display_name: Option<String>,
    pub role: Option<ParticipantRole>,
}

/// The ordered credits of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantList(Vec<Participant>);

impl ParticipantList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.0.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&Participant> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Append a participant and return its freshly assigned id.
    pub fn add(&mut self, display_name: impl Into<String>, role: ParticipantRole) -> Uuid {
        let id = Uuid::new_v4();
        self.0.push(Participant {
            id,
            display_name: display_name.into(),
            role,
        });
        id
    }

    /// Remove by id, shifting subsequent positions up by one.
    pub fn remove(&mut self, id: Uuid) -> Result<Participant, ParticipantError> {
        let index = self
            .0
            .iter()
            .position(|p| p.id == id)
            .ok_or(ParticipantError::UnknownParticipant(id))?;
        Ok(self.0.remove(index))
    }

    /// Apply a field patch in place. Position is unchanged.
    pub fn update(&mut self, id: Uuid, patch: ParticipantPatch) -> Result<(), ParticipantError> {
        let participant = self
            .0
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ParticipantError::UnknownParticipant(id))?;
        if let Some(display_name) = patch.display_name {
            participant.display_name = display_name;
        }
        if let Some(role) = patch.role {
            participant.role = role;
        }
        Ok(())
    }

    /// Move the participant at `from` so it ends up at index `to`.
    ///
    /// Single-element reinsertion: the element is removed and reinserted into
    /// the shortened list, every other element shifts by at most one to close
    /// the gap. `from == to` is a no-op. Both indices are checked against the
    /// current length.
    pub fn move_participant(&mut self, from: usize, to: usize) -> Result<(), ParticipantError> {
        let len = self.0.len();
        if from >= len {
            return Err(ParticipantError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(ParticipantError::IndexOutOfRange { index: to, len });
        }
        if from != to {
            let participant = self.0.remove(from);
            self.0.insert(to, participant);
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ParticipantList {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
