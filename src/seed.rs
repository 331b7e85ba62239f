use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::agent::Agent;
use crate::domain::attendance::{AttendanceEntry, AttendanceStatus};
use crate::domain::evaluation::{EventPerformance, Satisfaction};
use crate::domain::event::Event;
use crate::domain::message::Message;
use crate::domain::notification::Notification;
use crate::domain::payroll::PayrollEntry;
use crate::domain::wallet::WalletTransaction;
use crate::entity_store::{Record, RecordId};

// ============================================================================
// Seed Data - Initial Contents of Every Store
// ============================================================================
//
// `SeedData::default()` is the demo data set the back office starts with.
// A JSON file with the same shape replaces it; lists missing from the file
// start empty.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub agents: Vec<Record<Agent>>,
    #[serde(default)]
    pub events: Vec<Record<Event>>,
    #[serde(default)]
    pub payroll: Vec<Record<PayrollEntry>>,
    #[serde(default)]
    pub attendance: Vec<Record<AttendanceEntry>>,
    #[serde(default)]
    pub notifications: Vec<Record<Notification>>,
    #[serde(default)]
    pub messages: Vec<Record<Message>>,
    #[serde(default)]
    pub wallet: Vec<Record<WalletTransaction>>,
    #[serde(default)]
    pub performances: Vec<Record<EventPerformance>>,
}

impl SeedData {
    pub fn empty() -> Self {
        Self {
            agents: Vec::new(),
            events: Vec::new(),
            payroll: Vec::new(),
            attendance: Vec::new(),
            notifications: Vec::new(),
            messages: Vec::new(),
            wallet: Vec::new(),
            performances: Vec::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse seed data")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed = Self::from_json_str(&json)
            .with_context(|| format!("Invalid seed file {}", path.display()))?;

        tracing::info!(path = %path.display(), agents = seed.agents.len(), "seed data loaded");
        Ok(seed)
    }
}

// Fixture dates are literals below; an invalid one is a typo in this file.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month:02}-{day:02}"))
}

fn ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    ymd(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| panic!("invalid fixture time {hour:02}:{minute:02}"))
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            agents: vec![
                Record::new(
                    1,
                    Agent::new("Dupont", "Jean")
                        .with_age(30)
                        .with_location("Paris")
                        .with_phone("0123456789")
                        .with_measurements("180cm/75kg"),
                ),
                Record::new(
                    2,
                    Agent::new("Martin", "Marie")
                        .with_age(28)
                        .with_location("Lyon")
                        .with_phone("0987654321")
                        .with_measurements("165cm/60kg"),
                ),
            ],
            events: vec![
                Record::new(
                    1,
                    Event::new("Paris", "Société A", "Alpha")
                        .with_agents(["Jean Dupont", "Marie Martin"])
                        .on(ymd(2023, 6, 15)),
                ),
                Record::new(
                    2,
                    Event::new("Lyon", "Société B", "Beta")
                        .with_agents(["Pierre Durand"])
                        .on(ymd(2023, 6, 20)),
                ),
            ],
            payroll: vec![
                Record::new(1, PayrollEntry::new(RecordId(1), "Jean Dupont", 20, 2000.0)),
                Record::new(2, PayrollEntry::new(RecordId(2), "Marie Martin", 22, 2200.0)),
            ],
            attendance: vec![
                Record::new(
                    1,
                    AttendanceEntry::declared(RecordId(1), "Jean Dupont", ymd(2023, 6, 1)),
                ),
                Record::new(
                    2,
                    AttendanceEntry::declared(RecordId(2), "Marie Martin", ymd(2023, 6, 1))
                        .with_status(AttendanceStatus::Validated),
                ),
            ],
            notifications: vec![
                Record::new(
                    1,
                    Notification::unread(
                        "Nouvel événement ajouté à votre agenda",
                        ymd_hm(2023, 6, 14, 9, 0),
                    ),
                ),
                Record::new(
                    2,
                    Notification::unread(
                        "Rappel : événement demain à 10h",
                        ymd_hm(2023, 6, 14, 15, 0),
                    )
                    .mark_read(),
                ),
            ],
            messages: vec![
                Record::new(
                    1,
                    Message {
                        from: "Admin".to_string(),
                        to: "Moi".to_string(),
                        content: "Bonjour, n'oubliez pas l'événement de demain.".to_string(),
                        sent_at: ymd_hm(2023, 6, 14, 10, 0),
                    },
                ),
                Record::new(
                    2,
                    Message {
                        from: "Moi".to_string(),
                        to: "Admin".to_string(),
                        content: "Merci pour le rappel, je serai présent.".to_string(),
                        sent_at: ymd_hm(2023, 6, 14, 10, 5),
                    },
                ),
            ],
            wallet: vec![
                Record::new(
                    1,
                    WalletTransaction::new(ymd(2023, 6, 1), 1000.0, "Paiement pour mai 2023"),
                ),
                Record::new(
                    2,
                    WalletTransaction::new(ymd(2023, 6, 15), 500.0, "Bonus événement spécial"),
                ),
            ],
            performances: vec![
                Record::new(
                    1,
                    EventPerformance::new(RecordId(1), 1200.0, 30).rated(Satisfaction::SATISFIED),
                ),
                Record::new(
                    2,
                    EventPerformance::new(RecordId(2), 800.0, 15).rated(Satisfaction::NEUTRAL),
                ),
            ],
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
