use std::sync::Arc;

use services::{AssessmentService, ExportService};

pub trait UiApp: Send + Sync {
    fn assessment(&self) -> Arc<AssessmentService>;
    fn exporter(&self) -> Arc<ExportService>;
}

#[derive(Clone)]
pub struct AppContext {
    assessment: Arc<AssessmentService>,
    exporter: Arc<ExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            assessment: app.assessment(),
            exporter: app.exporter(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
