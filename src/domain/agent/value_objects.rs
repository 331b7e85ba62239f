use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity_store::{is_present, Entity};

use super::errors::AgentError;

// ============================================================================
// Agent Value Objects
// ============================================================================

/// Maximum number of photos kept on an agent profile
pub const MAX_PHOTOS: usize = 4;

/// Agent phone number
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhoneNumber(pub String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A field agent, as listed on the roster and shown on the profile page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Agent {
    #[serde(alias = "nom")]
    pub last_name: String,
    #[serde(alias = "prenom")]
    pub first_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default, alias = "localisation")]
    pub location: String,
    #[serde(default, alias = "telephone")]
    pub phone: PhoneNumber,
    #[serde(default, alias = "mensurations")]
    pub measurements: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Agent {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = PhoneNumber::new(phone);
        self
    }

    pub fn with_measurements(mut self, measurements: impl Into<String>) -> Self {
        self.measurements = measurements.into();
        self
    }

    /// "First Last", the form used by payroll and attendance listings
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn can_add_photo(&self) -> bool {
        self.photos.len() < MAX_PHOTOS
    }
}

impl Entity for Agent {
    const KIND: &'static str = "agent";

    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("last_name", is_present(&self.last_name)),
            ("first_name", is_present(&self.first_name)),
        ]
    }
}

/// Editable profile fields, one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileField {
    LastName,
    FirstName,
    Age,
    Location,
    Phone,
    Measurements,
}

impl ProfileField {
    /// Apply a raw form value to this field of `agent`.
    pub fn apply(self, mut agent: Agent, value: String) -> Result<Agent, AgentError> {
        match self {
            Self::LastName => agent.last_name = value,
            Self::FirstName => agent.first_name = value,
            Self::Age => {
                agent.age = value
                    .trim()
                    .parse()
                    .map_err(|_| AgentError::InvalidAge(value.clone()))?;
            }
            Self::Location => agent.location = value,
            Self::Phone => agent.phone = PhoneNumber(value),
            Self::Measurements => agent.measurements = value,
        }
        Ok(agent)
    }
}

impl FromStr for ProfileField {
    type Err = AgentError;

    // Accepts the form keys used by the profile page as well as English names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last_name" | "nom" => Ok(Self::LastName),
            "first_name" | "prenom" => Ok(Self::FirstName),
            "age" => Ok(Self::Age),
            "location" | "localisation" => Ok(Self::Location),
            "phone" | "telephone" => Ok(Self::Phone),
            "measurements" | "mensurations" => Ok(Self::Measurements),
            other => Err(AgentError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LastName => "last_name",
            Self::FirstName => "first_name",
            Self::Age => "age",
            Self::Location => "location",
            Self::Phone => "phone",
            Self::Measurements => "measurements",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
