use std::fmt;
use std::str::FromStr;

/// Message tier. Each tier maps to one attachment color and one emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Color + icon pair rendered for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub color: &'static str,
    pub icon: &'static str,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    pub const fn presentation(self) -> Presentation {
        match self {
            Severity::Success => Presentation {
                color: "#00b600",
                icon: "white_check_mark",
            },
            Severity::Info => Presentation {
                color: "#7799b9",
                icon: "information_source",
            },
            Severity::Warning => Presentation {
                color: "#ffce03",
                icon: "warning",
            },
            Severity::Error => Presentation {
                color: "#ef0000",
                icon: "x",
            },
        }
    }

    /// Hex color of the attachment side bar.
    pub const fn color(self) -> &'static str {
        self.presentation().color
    }

    /// Emoji name, without the surrounding colons.
    pub const fn icon(self) -> &'static str {
        self.presentation().icon
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown severity `{0}`")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" | "ok" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "err" => Ok(Severity::Error),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}
