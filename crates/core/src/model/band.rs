use serde::Serialize;

/// Severity band for a total score.
///
/// Variants are ordered from least to most severe. Upper bounds are inclusive:
/// 80 is `Healthy`, 120 is `WarningSigns`, 160 is `CultLike`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Band {
    Healthy,
    WarningSigns,
    CultLike,
    HighControl,
}

impl Band {
    /// Every band, least severe first.
    pub const ALL: [Band; 4] = [
        Band::Healthy,
        Band::WarningSigns,
        Band::CultLike,
        Band::HighControl,
    ];

    #[must_use]
    pub fn for_score(total_score: u32) -> Self {
        if total_score <= 80 {
            Band::Healthy
        } else if total_score <= 120 {
            Band::WarningSigns
        } else if total_score <= 160 {
            Band::CultLike
        } else {
            Band::HighControl
        }
    }

    /// Display label of the score range.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Band::Healthy => "40–80",
            Band::WarningSigns => "81–120",
            Band::CultLike => "121–160",
            Band::HighControl => "161–200",
        }
    }

    #[must_use]
    pub fn interpretation(self) -> &'static str {
        match self {
            Band::Healthy => "Likely a healthy group with normal challenges.",
            Band::WarningSigns => "Some warning signs of high control. Watch carefully.",
            Band::CultLike => "Strong evidence of cult-like tendencies. Proceed with caution.",
            Band::HighControl => {
                "You are likely in a cult or high-control group. Consider seeking outside help."
            }
        }
    }

    /// Presentation-neutral severity key.
    #[must_use]
    pub fn tone(self) -> &'static str {
        match self {
            Band::Healthy => "healthy",
            Band::WarningSigns => "warning",
            Band::CultLike => "caution",
            Band::HighControl => "danger",
        }
    }
}
