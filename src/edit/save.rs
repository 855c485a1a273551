use thiserror::Error;

use crate::domain::client::UpdateClient;
use crate::domain::types::ClientId;
use crate::repository::ClientWriter;
use crate::repository::errors::RepositoryError;

/// Lifecycle of one save attempt within an edit session.
///
/// `Idle -> Saving -> Idle` on failure, `Idle -> Saving -> Closed` on
/// success. `Closed` is terminal for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Closed,
}

#[derive(Debug, Error)]
pub enum SaveError {
    /// A submit was dispatched while another one is outstanding.
    #[error("a save is already in flight")]
    SubmitInFlight,
    /// The session already closed after a successful save.
    #[error("the edit session is closed")]
    SessionClosed,
    /// The storage update failed; the draft is kept and may be resubmitted.
    #[error(transparent)]
    Update(#[from] RepositoryError),
}

/// Orchestrates submission of a draft: gates concurrent submits, performs
/// the update exactly once per accepted submit, and signals closure on
/// success.
#[derive(Debug)]
pub struct SaveController {
    state: SaveState,
}

impl SaveController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SaveState::Idle,
        }
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    pub fn is_saving(&self) -> bool {
        self.state == SaveState::Saving
    }

    pub fn is_closed(&self) -> bool {
        self.state == SaveState::Closed
    }

    /// The at-most-one-in-flight gate: only an `Idle` controller may enter
    /// `Saving`.
    pub fn begin(&mut self) -> Result<(), SaveError> {
        match self.state {
            SaveState::Idle => {
                self.state = SaveState::Saving;
                Ok(())
            }
            SaveState::Saving => Err(SaveError::SubmitInFlight),
            SaveState::Closed => Err(SaveError::SessionClosed),
        }
    }

    /// Submits the draft update through the repository.
    ///
    /// On success the controller closes and `on_close` runs once; on failure
    /// the controller returns to `Idle`, the error is logged and surfaced,
    /// and nothing is closed or rolled back.
    pub fn submit<R, F>(
        &mut self,
        repo: &R,
        client_id: ClientId,
        updates: &UpdateClient,
        on_close: F,
    ) -> Result<(), SaveError>
    where
        R: ClientWriter + ?Sized,
        F: FnOnce(),
    {
        self.begin()?;

        match repo.update_client(client_id, updates) {
            Ok(_) => {
                self.state = SaveState::Closed;
                on_close();
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to update client {client_id}: {err}");
                self.state = SaveState::Idle;
                Err(SaveError::Update(err))
            }
        }
    }
}

impl Default for SaveController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_while_saving() {
        let mut controller = SaveController::new();
        controller.begin().unwrap();
        assert_eq!(controller.state(), SaveState::Saving);
        assert!(matches!(
            controller.begin(),
            Err(SaveError::SubmitInFlight)
        ));
    }

    #[test]
    fn begin_refuses_after_close() {
        let mut controller = SaveController::new();
        controller.state = SaveState::Closed;
        assert!(matches!(controller.begin(), Err(SaveError::SessionClosed)));
    }
}
