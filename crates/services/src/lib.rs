#![forbid(unsafe_code)]

pub mod app_services;
pub mod assessment_service;
pub mod error;
pub mod export_service;
pub mod persistence;
pub mod report;

pub use checklist_core::Clock;

pub use app_services::AppServices;
pub use assessment_service::{AssessmentService, Confirm, RESET_PROMPT, ResetOutcome, WriteStatus};
pub use error::{AppServicesError, AssessmentError, ExportError};
pub use export_service::{EXPORT_FILE_NAME, ExportService};
pub use persistence::StorageKeys;
pub use report::render_print_report;
