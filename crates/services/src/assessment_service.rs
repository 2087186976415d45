use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use checklist_core::Clock;
use checklist_core::model::{Catalog, QuestionId, Score, SessionState, Snapshot, Summary};
use storage::repository::KeyValueStore;
use tracing::{debug, info, warn};

use crate::error::AssessmentError;
use crate::persistence::{StorageKeys, decode_answers, encode_answers};

/// Question shown to the user before clearing a session.
pub const RESET_PROMPT: &str = "Clear all answers?";

//
// ─── CONFIRMATION ─────────────────────────────────────────────────────────────
//

/// Yes/no gate consulted before destructive operations.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

//
// ─── OUTCOMES ─────────────────────────────────────────────────────────────────
//

/// Result of mirroring a mutation into storage.
///
/// In-memory state is updated regardless; `Unsaved` is a warning, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum WriteStatus {
    Saved,
    /// The call was ignored and nothing changed.
    Skipped,
    Unsaved { reason: String },
}

impl WriteStatus {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, WriteStatus::Saved)
    }

    /// Message to surface to the user, if persistence failed.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        match self {
            WriteStatus::Unsaved { reason } => Some(reason),
            WriteStatus::Saved | WriteStatus::Skipped => None,
        }
    }

    fn merge(self, other: WriteStatus) -> WriteStatus {
        match (self, other) {
            (unsaved @ WriteStatus::Unsaved { .. }, _) | (_, unsaved @ WriteStatus::Unsaved { .. }) => {
                unsaved
            }
            (WriteStatus::Saved, _) | (_, WriteStatus::Saved) => WriteStatus::Saved,
            (WriteStatus::Skipped, WriteStatus::Skipped) => WriteStatus::Skipped,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ResetOutcome {
    Declined,
    Cleared(WriteStatus),
}

//
// ─── SERVICE ──────────────────────────────────────────────────────────────────
//

/// Owns the answers and notes of the running session and mirrors them to storage.
///
/// Every mutation updates memory first and then persists; a failed write never
/// rolls memory back. Writes are serialized so storage observes mutations in
/// the order they were applied.
pub struct AssessmentService {
    clock: Clock,
    catalog: Arc<Catalog>,
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
    state: Mutex<SessionState>,
    write_gate: tokio::sync::Mutex<()>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            clock,
            catalog,
            store,
            keys: StorageKeys::default(),
            state: Mutex::new(SessionState::default()),
            write_gate: tokio::sync::Mutex::new(()),
        }
    }

    #[must_use]
    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Restore answers and notes from storage.
    ///
    /// Missing, unreadable or malformed data starts a fresh session; nothing is surfaced.
    pub async fn initialize(&self) {
        let _gate = self.write_gate.lock().await;

        let answers = match self.store.get(&self.keys.answers).await {
            Ok(Some(raw)) => decode_answers(&raw, &self.catalog),
            Ok(None) => Default::default(),
            Err(err) => {
                warn!(error = %err, "could not read persisted answers, starting fresh");
                Default::default()
            }
        };
        let notes = match self.store.get(&self.keys.notes).await {
            Ok(notes) => notes.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "could not read persisted notes, starting fresh");
                String::new()
            }
        };

        info!(answered = answers.len(), "session restored");
        *self.lock() = SessionState::new(answers, notes);
    }

    /// Record `score` for `id`, replacing any previous answer, and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownQuestion` if `id` is not in the catalog.
    pub async fn set_answer(
        &self,
        id: QuestionId,
        score: Score,
    ) -> Result<WriteStatus, AssessmentError> {
        self.apply_answer(id, score)?;
        Ok(self.persist_answers().await)
    }

    /// Like `set_answer`, but takes a raw value and ignores anything outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownQuestion` if `id` is not in the catalog.
    pub async fn set_answer_value(
        &self,
        id: QuestionId,
        value: u8,
    ) -> Result<WriteStatus, AssessmentError> {
        if self.apply_answer_value(id, value)? {
            Ok(self.persist_answers().await)
        } else {
            Ok(WriteStatus::Skipped)
        }
    }

    /// Update the in-memory answer without touching storage.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownQuestion` if `id` is not in the catalog.
    pub fn apply_answer(&self, id: QuestionId, score: Score) -> Result<(), AssessmentError> {
        if !self.catalog.contains(id) {
            return Err(AssessmentError::UnknownQuestion(id));
        }
        let previous = self.lock().answers.set(id, score);
        debug!(%id, score = score.value(), ?previous, "answer set");
        Ok(())
    }

    /// Raw-value form of `apply_answer`; `Ok(false)` means the value was out of range and ignored.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownQuestion` if `id` is not in the catalog.
    pub fn apply_answer_value(&self, id: QuestionId, value: u8) -> Result<bool, AssessmentError> {
        match Score::try_from(value) {
            Ok(score) => self.apply_answer(id, score).map(|()| true),
            Err(err) => {
                debug!(%id, error = %err, "ignoring out-of-range answer");
                Ok(false)
            }
        }
    }

    /// Write the current answers to storage.
    ///
    /// Always writes the latest in-memory map, so storage ends up matching memory
    /// whichever order pending writes complete in.
    pub async fn persist_answers(&self) -> WriteStatus {
        let _gate = self.write_gate.lock().await;
        let encoded = encode_answers(&self.lock().answers);
        self.write(&self.keys.answers, &encoded).await
    }

    /// Replace the notes verbatim and persist them.
    pub async fn set_notes(&self, text: impl Into<String>) -> WriteStatus {
        self.apply_notes(text);
        self.persist_notes().await
    }

    /// Replace the in-memory notes without touching storage.
    pub fn apply_notes(&self, text: impl Into<String>) {
        self.lock().notes = text.into();
    }

    /// Write the current notes to storage.
    pub async fn persist_notes(&self) -> WriteStatus {
        let _gate = self.write_gate.lock().await;
        let notes = self.notes();
        self.write(&self.keys.notes, &notes).await
    }

    /// Clear answers and notes, in memory and in storage, once `confirm` agrees.
    pub async fn reset(&self, confirm: impl Confirm) -> ResetOutcome {
        if !confirm.confirm(RESET_PROMPT) {
            debug!("reset declined");
            return ResetOutcome::Declined;
        }

        let _gate = self.write_gate.lock().await;
        *self.lock() = SessionState::default();

        let answers = self.erase(&self.keys.answers).await;
        let notes = self.erase(&self.keys.notes).await;
        info!("session cleared");
        ResetOutcome::Cleared(answers.merge(notes))
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.catalog, &self.lock().answers)
    }

    #[must_use]
    pub fn export_snapshot(&self) -> Snapshot {
        let state = self.state();
        Snapshot::build(&self.catalog, &state, self.clock.now())
    }

    /// Copy of the current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lock().clone()
    }

    #[must_use]
    pub fn answer(&self, id: QuestionId) -> Option<Score> {
        self.lock().answers.get(id)
    }

    #[must_use]
    pub fn notes(&self) -> String {
        self.lock().notes.clone()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn write(&self, key: &str, value: &str) -> WriteStatus {
        match self.store.set(key, value).await {
            Ok(()) => WriteStatus::Saved,
            Err(err) => {
                warn!(key, error = %err, "could not persist session state");
                WriteStatus::Unsaved {
                    reason: err.to_string(),
                }
            }
        }
    }

    async fn erase(&self, key: &str) -> WriteStatus {
        match self.store.remove(key).await {
            Ok(()) => WriteStatus::Saved,
            Err(err) => {
                warn!(key, error = %err, "could not erase persisted session state");
                WriteStatus::Unsaved {
                    reason: err.to_string(),
                }
            }
        }
    }
}
