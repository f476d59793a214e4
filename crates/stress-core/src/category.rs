//! Stress categories and the fixed code table
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer code emitted by the upstream classifier
pub type ClassificationCode = i64;

/// The supported stress types, in classifier code order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressKind {
    Acute,
    Episodic,
    Chronic,
}

/// Descriptive text shown for a stress type
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StressCategory {
    pub kind: StressKind,
    /// Display name
    pub label: &'static str,
    pub description: &'static str,
    /// Ordered, never empty
    pub recommendations: &'static [&'static str],
    /// Color token used to badge the category
    pub severity_color: &'static str,
}

static ACUTE: StressCategory = StressCategory {
    kind: StressKind::Acute,
    label: "Acute Stress",
    description: "Short-term stress from specific events or situations.",
    recommendations: &[
        "Practice deep breathing exercises.",
        "Take short walks regularly.",
        "Break tasks into manageable steps.",
    ],
    severity_color: "#22c55e",
};

static EPISODIC: StressCategory = StressCategory {
    kind: StressKind::Episodic,
    label: "Episodic Stress",
    description: "Frequent stress from recurring challenges or pressures.",
    recommendations: &[
        "Set a consistent daily routine.",
        "Try mindfulness or journaling.",
        "Seek support from friends or a counselor.",
    ],
    severity_color: "#f97316",
};

static CHRONIC: StressCategory = StressCategory {
    kind: StressKind::Chronic,
    label: "Chronic Stress",
    description: "Ongoing, long-term stress from life circumstances.",
    recommendations: &[
        "Talk to a mental health professional.",
        "Improve sleep habits and routine.",
        "Incorporate yoga or relaxation into daily life.",
    ],
    severity_color: "#ef4444",
};

impl StressKind {
    /// Every kind, ordered by code
    pub const ALL: [StressKind; 3] = [StressKind::Acute, StressKind::Episodic, StressKind::Chronic];

    /// Look up the kind for a classifier code
    pub fn from_code(code: ClassificationCode) -> Option<Self> {
        match code {
            0 => Some(Self::Acute),
            1 => Some(Self::Episodic),
            2 => Some(Self::Chronic),
            _ => None,
        }
    }

    pub fn code(self) -> ClassificationCode {
        match self {
            Self::Acute => 0,
            Self::Episodic => 1,
            Self::Chronic => 2,
        }
    }

    /// Stable identifier (also the key used in probability payloads)
    pub fn id(self) -> &'static str {
        match self {
            Self::Acute => "acute",
            Self::Episodic => "episodic",
            Self::Chronic => "chronic",
        }
    }

    pub fn category(self) -> &'static StressCategory {
        match self {
            Self::Acute => &ACUTE,
            Self::Episodic => &EPISODIC,
            Self::Chronic => &CHRONIC,
        }
    }
}

impl fmt::Display for StressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StressKind {
    type Err = String;

    /// Accepts an id (`"chronic"`) or a code (`"2"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<ClassificationCode>() {
            return Self::from_code(code).ok_or_else(|| format!("unknown stress code: {}", code));
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown stress kind: {}", s))
    }
}

/// All categories in code order
pub fn catalog() -> impl Iterator<Item = &'static StressCategory> {
    StressKind::ALL.into_iter().map(StressKind::category)
}
