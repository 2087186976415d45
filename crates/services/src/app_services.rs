use std::path::PathBuf;
use std::sync::Arc;

use checklist_core::model::Catalog;
use storage::repository::Storage;

use crate::Clock;
use crate::assessment_service::AssessmentService;
use crate::error::AppServicesError;
use crate::export_service::ExportService;

/// Assembles app-facing services around an initialized session.
#[derive(Clone)]
pub struct AppServices {
    assessment: Arc<AssessmentService>,
    exporter: Arc<ExportService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        export_dir: impl Into<PathBuf>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, export_dir).await)
    }

    /// Build services backed by a throwaway in-memory store.
    pub async fn in_memory(clock: Clock, export_dir: impl Into<PathBuf>) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, export_dir).await
    }

    /// Build services over existing storage, restoring any persisted session.
    pub async fn from_storage(
        storage: &Storage,
        clock: Clock,
        export_dir: impl Into<PathBuf>,
    ) -> Self {
        let catalog = Arc::new(Catalog::reference());
        let assessment = Arc::new(AssessmentService::new(
            clock,
            catalog,
            Arc::clone(&storage.kv),
        ));
        assessment.initialize().await;
        let exporter = Arc::new(ExportService::new(export_dir));

        Self {
            assessment,
            exporter,
        }
    }

    #[must_use]
    pub fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    #[must_use]
    pub fn exporter(&self) -> Arc<ExportService> {
        Arc::clone(&self.exporter)
    }
}
