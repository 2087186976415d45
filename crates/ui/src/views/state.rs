use services::WriteStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    ExportFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::ExportFailed => "Could not save the results file.",
        }
    }
}

/// Non-blocking message shown above the checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Unsaved(String),
    Exported(String),
    Error(ViewError),
}

impl Banner {
    /// Banner for a persistence result; `None` means nothing worth showing.
    #[must_use]
    pub fn from_write(status: &WriteStatus) -> Option<Self> {
        status
            .warning()
            .map(|reason| Banner::Unsaved(format!("Changes are kept for now but could not be saved: {reason}")))
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Banner::Unsaved(_) | Banner::Error(_) => "banner banner--warning",
            Banner::Exported(_) => "banner banner--info",
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Banner::Unsaved(message) => message.clone(),
            Banner::Exported(path) => format!("Results saved to {path}"),
            Banner::Error(err) => err.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_writes_need_no_banner() {
        assert_eq!(Banner::from_write(&WriteStatus::Saved), None);
        assert_eq!(Banner::from_write(&WriteStatus::Skipped), None);
    }

    #[test]
    fn unsaved_writes_warn_without_blocking() {
        let banner = Banner::from_write(&WriteStatus::Unsaved {
            reason: "disk full".into(),
        })
        .unwrap();
        assert_eq!(banner.class(), "banner banner--warning");
        assert!(banner.text().ends_with("disk full"));
    }
}
