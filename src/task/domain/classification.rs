//! Category and urgency labels attached to each help request.

use super::{ParseCategoryError, ParseUrgencyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of help being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, meals, and food banks.
    Food,
    /// Lessons and reviews.
    Tutoring,
    /// Rides, pharmacy runs, and check-ins for seniors.
    #[serde(rename = "Elderly Care")]
    ElderlyCare,
    /// Small jobs and deliveries.
    Errands,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Tutoring,
        Self::ElderlyCare,
        Self::Errands,
        Self::Other,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Tutoring => "Tutoring",
            Self::ElderlyCare => "Elderly Care",
            Self::Errands => "Errands",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ParseCategoryError(value.to_owned()))
    }
}

/// How soon the requester needs help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    /// Whenever convenient.
    Low,
    /// Within the next few days.
    Medium,
    /// As soon as possible.
    High,
}

impl Urgency {
    /// Every urgency level, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Urgency {
    type Error = ParseUrgencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|urgency| urgency.as_str() == value)
            .ok_or_else(|| ParseUrgencyError(value.to_owned()))
    }
}
