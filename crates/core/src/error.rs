use thiserror::Error;

use crate::model::{ParseQuestionIdError, ScoreError};

/// Errors raised while turning raw input into domain values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    QuestionId(#[from] ParseQuestionIdError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}
