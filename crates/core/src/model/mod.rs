mod answers;
mod band;
mod catalog;
mod ids;
pub mod resources;
mod score;
mod snapshot;
mod summary;

pub use answers::{AnswerMap, SessionState};
pub use band::Band;
pub use catalog::{Catalog, Category, Question};
pub use ids::{ParseQuestionIdError, QuestionId};
pub use score::{Score, ScoreError};
pub use snapshot::{Snapshot, SnapshotAnswer};
pub use summary::Summary;
