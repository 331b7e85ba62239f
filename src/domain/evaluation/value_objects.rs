use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity_store::{Entity, RecordId};

use super::errors::EvaluationError;

// ============================================================================
// Evaluation Value Objects
// ============================================================================

/// Client satisfaction on a 0-5 scale, 0 meaning not rated yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Satisfaction(u8);

impl Satisfaction {
    pub const NOT_RATED: Self = Self(0);
    pub const DISSATISFIED: Self = Self(1);
    pub const SOMEWHAT_SATISFIED: Self = Self(2);
    pub const NEUTRAL: Self = Self(3);
    pub const SATISFIED: Self = Self(4);
    pub const VERY_SATISFIED: Self = Self(5);

    pub fn new(score: u8) -> Result<Self, EvaluationError> {
        if score > Self::VERY_SATISFIED.0 {
            return Err(EvaluationError::InvalidSatisfaction(score));
        }
        Ok(Self(score))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u8> for Satisfaction {
    type Error = EvaluationError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<Satisfaction> for u8 {
    fn from(satisfaction: Satisfaction) -> Self {
        satisfaction.0
    }
}

/// Sales results of one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPerformance {
    #[serde(alias = "event")]
    pub event_id: RecordId,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub products_sold: u32,
    #[serde(default)]
    pub client_satisfaction: Satisfaction,
    #[serde(default)]
    pub notes: String,
}

impl EventPerformance {
    pub fn new(event_id: RecordId, revenue: f64, products_sold: u32) -> Self {
        Self {
            event_id,
            revenue,
            products_sold,
            client_satisfaction: Satisfaction::NOT_RATED,
            notes: String::new(),
        }
    }

    pub fn rated(mut self, satisfaction: Satisfaction) -> Self {
        self.client_satisfaction = satisfaction;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl Entity for EventPerformance {
    const KIND: &'static str = "event performance";

    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        Vec::new()
    }
}

/// A calendar month, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, EvaluationError> {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(_) => Ok(Self { year, month }),
            None => Err(EvaluationError::InvalidMonth(format!("{year}-{month:02}"))),
        }
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl FromStr for Month {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EvaluationError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
