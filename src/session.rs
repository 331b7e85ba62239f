use chrono::{Local, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::domain::agent::AgentCommandHandler;
use crate::domain::attendance::AttendanceCommandHandler;
use crate::domain::evaluation::{EvaluationCommandHandler, Month, MonthlyReport, ReportSources};
use crate::domain::event::{EventCommandHandler, EventStatus};
use crate::domain::message::MessageCommandHandler;
use crate::domain::notification::NotificationCommandHandler;
use crate::domain::payroll::PayrollCommandHandler;
use crate::domain::wallet::WalletCommandHandler;
use crate::entity_store::{EntityStore, StoreError};
use crate::seed::SeedData;

// ============================================================================
// Session - Owner of Every Entity Store
// ============================================================================
//
// One session per signed-in user. Each page receives the handler it needs
// from here; nothing is kept in global state. Everything is dropped with the
// session.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    pub agents: AgentCommandHandler,
    pub events: EventCommandHandler,
    pub payroll: PayrollCommandHandler,
    pub attendance: AttendanceCommandHandler,
    pub notifications: NotificationCommandHandler,
    pub messages: MessageCommandHandler,
    pub wallet: WalletCommandHandler,
    pub evaluation: EvaluationCommandHandler,
}

/// Headline counters for the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_agents: usize,
    pub scheduled_events: usize,
    pub upcoming_events: usize,
    pub ongoing_events: usize,
    pub payroll_entries: usize,
    pub pending_attendance: usize,
    pub unread_notifications: usize,
    pub wallet_balance: f64,
}

impl Session {
    /// Build every store from seed data. Fails if any seed list is invalid.
    pub fn start(config: &AppConfig, seed: SeedData) -> Result<Self, StoreError> {
        let session = Self {
            id: Uuid::new_v4(),
            agents: AgentCommandHandler::new(EntityStore::seeded(seed.agents)?),
            events: EventCommandHandler::new(EntityStore::seeded(seed.events)?),
            payroll: PayrollCommandHandler::new(EntityStore::seeded(seed.payroll)?),
            attendance: AttendanceCommandHandler::new(EntityStore::seeded(seed.attendance)?),
            notifications: NotificationCommandHandler::new(EntityStore::seeded(
                seed.notifications,
            )?),
            messages: MessageCommandHandler::new(
                EntityStore::seeded(seed.messages)?,
                config.current_user.clone(),
            ),
            wallet: WalletCommandHandler::new(
                EntityStore::seeded(seed.wallet)?,
                config.opening_balance,
            ),
            evaluation: EvaluationCommandHandler::new(EntityStore::seeded(seed.performances)?),
        };

        tracing::info!(
            session_id = %session.id,
            user = %config.current_user,
            agents = session.agents.store().len(),
            events = session.events.store().len(),
            "session started"
        );
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn dashboard(&self) -> DashboardStats {
        self.dashboard_on(Local::now().date_naive())
    }

    /// Dashboard counters with event statuses taken relative to `today`
    pub fn dashboard_on(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats {
            total_agents: self.agents.store().len(),
            scheduled_events: self.events.store().len(),
            upcoming_events: self.events.count_with_status(EventStatus::Upcoming, today),
            ongoing_events: self.events.count_with_status(EventStatus::Ongoing, today),
            payroll_entries: self.payroll.store().len(),
            pending_attendance: self.attendance.pending().len(),
            unread_notifications: self.notifications.unread_count(),
            wallet_balance: self.wallet.balance(),
        }
    }

    /// Per-agent evaluation for one month, ranked by score
    pub fn monthly_report(&self, month: Month) -> MonthlyReport {
        self.evaluation.monthly_report(
            month,
            ReportSources {
                agents: self.agents.store(),
                events: self.events.store(),
                attendance: self.attendance.store(),
                payroll: self.payroll.store(),
            },
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
