use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::domain::client::{Client, UpdateClient};
use crate::domain::types::{ClientId, TypeConstraintError};
use crate::edit::draft::{ClientDraft, ClientField, DraftError};
use crate::edit::save::{SaveController, SaveError, SaveState};
use crate::repository::ClientWriter;

/// Revocable flag tied to the owning view of a session.
///
/// The owner revokes the token when the view goes away; a save completion
/// that lands afterwards still settles the state machine but no longer
/// invokes the close callback.
#[derive(Clone, Debug)]
pub struct LivenessToken(Arc<AtomicBool>);

impl LivenessToken {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn revoke(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Error)]
pub enum EditError {
    /// The form is locked while a save is in flight.
    #[error("the form is locked while saving")]
    Locked,
    /// The session already closed; a new one must be opened.
    #[error("the edit session is closed")]
    Closed,
    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// One open-edit-close cycle over a single client record.
///
/// Binds the draft store, the status presentation and the save controller
/// together. The session owns the draft exclusively; sharing one across
/// threads requires an explicit mutex around the whole session.
#[derive(Debug)]
pub struct EditSession {
    client_id: ClientId,
    draft: ClientDraft,
    save: SaveController,
    liveness: LivenessToken,
}

impl EditSession {
    /// Opens a session over a copy of the canonical record.
    pub fn open(record: &Client) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            client_id: ClientId::new(record.id)?,
            draft: ClientDraft::new(record),
            save: SaveController::new(),
            liveness: LivenessToken::new(),
        })
    }

    /// Starts a fresh session in place when the canonical record changes
    /// identity: new draft, `Idle` save state, new liveness token.
    pub fn reset(&mut self, record: &Client) -> Result<(), TypeConstraintError> {
        self.client_id = ClientId::new(record.id)?;
        self.draft.initialize(record);
        self.save = SaveController::new();
        self.liveness = LivenessToken::new();
        Ok(())
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn state(&self) -> SaveState {
        self.save.state()
    }

    /// Borrow the current draft record.
    pub fn draft(&self) -> &Client {
        self.draft.record()
    }

    /// Token handle for the owning view.
    pub fn liveness(&self) -> LivenessToken {
        self.liveness.clone()
    }

    /// Routes one raw field value into the draft; refused while a save is
    /// in flight and after the session closed.
    pub fn set_field(&mut self, field: ClientField, raw: &str) -> Result<(), EditError> {
        match self.save.state() {
            SaveState::Saving => return Err(EditError::Locked),
            SaveState::Closed => return Err(EditError::Closed),
            SaveState::Idle => {}
        }
        self.draft.set_field(field, raw)?;
        Ok(())
    }

    /// Hands the full draft to the save controller.
    ///
    /// `on_close` is invoked at most once, only on success and only while
    /// the liveness token has not been revoked. On failure the session
    /// stays open with the draft intact.
    pub fn submit<R, F>(&mut self, repo: &R, on_close: F) -> Result<(), SaveError>
    where
        R: ClientWriter + ?Sized,
        F: FnOnce(),
    {
        let updates = UpdateClient::from(self.draft.record());
        let liveness = self.liveness.clone();
        self.save.submit(repo, self.client_id, &updates, move || {
            if liveness.is_live() {
                on_close();
            }
        })
    }

    /// Discards the draft unconditionally and signals closure without any
    /// remote call.
    pub fn cancel<F>(self, on_close: F)
    where
        F: FnOnce(),
    {
        if self.liveness.is_live() {
            on_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::client::{NewClient, SubscriptionStatus};
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    /// In-memory stand-in for the update collaborator, recording every call.
    struct RecordingWriter {
        calls: RefCell<Vec<UpdateClient>>,
        fail: bool,
    }

    impl RecordingWriter {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl ClientWriter for RecordingWriter {
        fn create_clients(&self, _new_clients: &[NewClient]) -> RepositoryResult<usize> {
            Ok(0)
        }

        fn update_client(
            &self,
            _client_id: ClientId,
            updates: &UpdateClient,
        ) -> RepositoryResult<Client> {
            self.calls.borrow_mut().push(updates.clone());
            if self.fail {
                Err(RepositoryError::DatabaseError("disk is full".to_string()))
            } else {
                Ok(sample_client())
            }
        }

        fn delete_client(&self, _client_id: ClientId) -> RepositoryResult<()> {
            Ok(())
        }
    }

    fn sample_client() -> Client {
        let now = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Client {
            id: 3,
            name: "Carlos Lima".to_string(),
            tax_id: "52998224725".to_string(),
            email: Some("carlos@example.com".to_string()),
            phone: None,
            address: None,
            plan_name: "Família".to_string(),
            monthly_fee: 89.9,
            status: SubscriptionStatus::Pending,
            created_at: now,
            updated_at: now,
            dependents: Vec::new(),
        }
    }

    #[test]
    fn successful_submit_closes_and_signals_once() {
        let record = sample_client();
        let mut session = EditSession::open(&record).unwrap();
        session.set_field(ClientField::Name, "Carlos A. Lima").unwrap();

        let writer = RecordingWriter::succeeding();
        let closed = RefCell::new(0usize);

        session.submit(&writer, || *closed.borrow_mut() += 1).unwrap();

        assert_eq!(session.state(), SaveState::Closed);
        assert_eq!(*closed.borrow(), 1);
        assert_eq!(writer.call_count(), 1);
        assert_eq!(writer.calls.borrow()[0].name, "Carlos A. Lima");
    }

    #[test]
    fn failed_submit_keeps_the_session_open_and_resubmittable() {
        let record = sample_client();
        let mut session = EditSession::open(&record).unwrap();
        session.set_field(ClientField::MonthlyFee, "99.9").unwrap();
        let draft_before = session.draft().clone();

        let writer = RecordingWriter::failing();
        let closed = RefCell::new(0usize);

        let err = session
            .submit(&writer, || *closed.borrow_mut() += 1)
            .unwrap_err();

        assert!(matches!(err, SaveError::Update(_)));
        assert_eq!(session.state(), SaveState::Idle);
        assert_eq!(*closed.borrow(), 0);
        assert_eq!(session.draft(), &draft_before);

        // The user keeps their edits and may retry.
        let retry_writer = RecordingWriter::succeeding();
        session.submit(&retry_writer, || ()).unwrap();
        assert_eq!(retry_writer.call_count(), 1);
        assert_eq!(retry_writer.calls.borrow()[0].monthly_fee, 99.9);
    }

    #[test]
    fn closed_session_refuses_further_submits_and_edits() {
        let mut session = EditSession::open(&sample_client()).unwrap();
        let writer = RecordingWriter::succeeding();
        session.submit(&writer, || ()).unwrap();

        assert!(matches!(
            session.submit(&writer, || ()),
            Err(SaveError::SessionClosed)
        ));
        assert_eq!(writer.call_count(), 1);
        assert!(matches!(
            session.set_field(ClientField::Name, "x"),
            Err(EditError::Closed)
        ));
    }

    #[test]
    fn revoked_liveness_suppresses_the_close_signal() {
        let mut session = EditSession::open(&sample_client()).unwrap();
        session.liveness().revoke();

        let writer = RecordingWriter::succeeding();
        let closed = RefCell::new(0usize);
        session.submit(&writer, || *closed.borrow_mut() += 1).unwrap();

        assert_eq!(session.state(), SaveState::Closed);
        assert_eq!(writer.call_count(), 1);
        assert_eq!(*closed.borrow(), 0);
    }

    #[test]
    fn cancel_discards_without_any_remote_call() {
        let record = sample_client();
        let mut session = EditSession::open(&record).unwrap();
        session.set_field(ClientField::Name, "Alterado").unwrap();

        let closed = RefCell::new(0usize);
        session.cancel(|| *closed.borrow_mut() += 1);
        assert_eq!(*closed.borrow(), 1);
    }

    #[test]
    fn reset_starts_a_fresh_session_for_a_new_record() {
        let first = sample_client();
        let mut session = EditSession::open(&first).unwrap();
        let writer = RecordingWriter::succeeding();
        session.submit(&writer, || ()).unwrap();
        assert_eq!(session.state(), SaveState::Closed);

        let second = Client {
            id: 9,
            name: "Ana Paula".to_string(),
            ..first
        };
        session.reset(&second).unwrap();

        assert_eq!(session.state(), SaveState::Idle);
        assert_eq!(session.client_id().get(), 9);
        assert_eq!(session.draft().name, "Ana Paula");
    }
}
