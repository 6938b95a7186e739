use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One raw attendance row as typed by the user: start and end as `HH:MM`,
/// either of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl RawEntry {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    /// Start time, treating a blank field as missing.
    pub fn start(&self) -> Option<&str> {
        non_blank(&self.start)
    }

    /// End time, treating a blank field as missing.
    pub fn end(&self) -> Option<&str> {
        non_blank(&self.end)
    }

    /// `HH:MM-` : still working.
    pub fn is_open(&self) -> bool {
        self.start().is_some() && self.end().is_none()
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Parses the CLI shorthand `HH:MM-HH:MM`, `HH:MM-` or `-HH:MM`.
///
/// Only the shape is checked here; the times themselves are validated by
/// the normalizer.
impl FromStr for RawEntry {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| AppError::InvalidEntry(s.to_string()))?;

        let start = start.trim();
        let end = end.trim();
        if start.is_empty() && end.is_empty() {
            return Err(AppError::InvalidEntry(s.to_string()));
        }

        let field = |v: &str| (!v.is_empty()).then(|| v.to_string());
        Ok(Self {
            start: field(start),
            end: field(end),
        })
    }
}
