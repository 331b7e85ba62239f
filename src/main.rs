use anyhow::Context;
use chrono::Local;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nva_agents::config::AppConfig;
use nva_agents::domain::agent::{Agent, AgentCommand, ProfileField};
use nva_agents::domain::attendance::AttendanceCommand;
use nva_agents::domain::evaluation::{EvaluationCommand, EventPerformance, Month, Satisfaction};
use nva_agents::domain::event::{Event, EventCommand};
use nva_agents::domain::message::MessageCommand;
use nva_agents::domain::notification::NotificationCommand;
use nva_agents::domain::wallet::{WalletCommand, WalletTransaction};
use nva_agents::entity_store::RecordId;
use nva_agents::seed::SeedData;
use nva_agents::session::Session;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Structured logging, RUST_LOG overrides the configured filter
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Starting agent back office session");

    let seed = match &config.seed_path {
        Some(path) => SeedData::from_json_file(path)?,
        None => SeedData::default(),
    };
    let mut session = Session::start(&config, seed)?;

    // === Roster: remove an agent, then register a new one ===
    session.agents.handle(AgentCommand::Remove { agent_id: RecordId(1) })?;
    if let Some(agent) = session.agents.handle(AgentCommand::Register {
        agent: Agent::new("Durand", "Pierre").with_location("Marseille"),
    })? {
        tracing::info!(id = %agent.id, name = %agent.fields.full_name(), "agent registered");
    }

    // A form submitted without a first name is rejected and nothing changes
    if let Err(e) = session.agents.handle(AgentCommand::Register {
        agent: Agent::new("Bernard", ""),
    }) {
        tracing::info!(error = %e, "draft kept, roster unchanged");
    }

    session.agents.handle(AgentCommand::UpdateProfile {
        agent_id: RecordId(2),
        field: ProfileField::Location,
        value: "Bordeaux".to_string(),
    })?;

    // === Events ===
    session.events.handle(EventCommand::Schedule {
        event: Event::new("Marseille", "Société C", "Gamma")
            .with_agents(["Pierre Durand"])
            .on(Local::now().date_naive()),
    })?;
    for event in session.events.agenda() {
        tracing::info!(
            id = %event.id,
            code = %event.fields.code_name,
            date = ?event.fields.date,
            "agenda"
        );
    }

    // === Attendance review ===
    let reviewed = session
        .attendance
        .handle(AttendanceCommand::Validate { entry_id: RecordId(1) })?;
    tracing::info!(id = %reviewed.id, status = ?reviewed.fields.status, "attendance reviewed");

    // === Inbox ===
    session
        .notifications
        .handle(NotificationCommand::MarkAsRead { notification_id: RecordId(1) })?;
    session.messages.handle(MessageCommand::Send {
        to: "Admin".to_string(),
        content: "Bien reçu, merci.".to_string(),
        sent_at: Local::now().naive_local(),
    })?;
    tracing::info!(
        messages = session.messages.conversation_with("Admin").len(),
        "conversation with Admin"
    );

    // === Wallet ===
    session.wallet.handle(WalletCommand::Credit {
        transaction: WalletTransaction::new(Local::now().date_naive(), 250.0, "Prime Gamma"),
    })?;

    // === Evaluation ===
    let today = Local::now().date_naive();
    if let Some(gamma) = session.events.agenda().into_iter().find(|e| e.fields.date == Some(today)) {
        session.evaluation.handle(
            EvaluationCommand::Record {
                performance: EventPerformance::new(gamma.id, 640.0, 12).rated(Satisfaction::SATISFIED),
            },
            session.events.store(),
        )?;
    }
    for ranking in session.monthly_report(Month::of(today)).rankings() {
        tracing::info!(
            agent_id = %ranking.agent_id,
            month = %ranking.month,
            score = ranking.score,
            rank = ranking.rank,
            "monthly ranking"
        );
    }

    let dashboard = serde_json::to_string(&session.dashboard())?;
    tracing::info!(
        session_id = %session.id(),
        %dashboard,
        payroll_total = session.payroll.grand_total(),
        "session summary"
    );

    Ok(())
}
