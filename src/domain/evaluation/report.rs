use serde::Serialize;
use std::collections::HashSet;

use crate::domain::agent::Agent;
use crate::domain::attendance::{AttendanceEntry, AttendanceStatus};
use crate::domain::event::Event;
use crate::domain::payroll::PayrollEntry;
use crate::entity_store::{EntityStore, RecordId};

use super::command_handler::EvaluationCommandHandler;
use super::value_objects::Month;

// ============================================================================
// Monthly Evaluation Report
// ============================================================================
//
// Read-only view over the agent, event, attendance and payroll stores plus
// the recorded event performances. Nothing here is stored; the report is
// recomputed on every call.
//
// Score weights per agent and month:
//   10 per distinct client, 4 per product sold, 5 per event,
//   0.5 per point of presence rate, 0.01 per unit of revenue
//
// ============================================================================

const POINTS_PER_CLIENT: f64 = 10.0;
const POINTS_PER_PRODUCT: f64 = 4.0;
const POINTS_PER_EVENT: f64 = 5.0;
const POINTS_PER_PRESENCE_PERCENT: f64 = 0.5;
const POINTS_PER_REVENUE_UNIT: f64 = 0.01;

/// Stores the report reads from
#[derive(Debug, Clone, Copy)]
pub struct ReportSources<'a> {
    pub agents: &'a EntityStore<Agent>,
    pub events: &'a EntityStore<Event>,
    pub attendance: &'a EntityStore<AttendanceEntry>,
    pub payroll: &'a EntityStore<PayrollEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentMonthSummary {
    pub agent_id: RecordId,
    pub name: String,
    pub events: usize,
    /// Distinct companies among the month's events
    pub clients: usize,
    pub products: u32,
    pub revenue: f64,
    /// Validated attendance over declared attendance, in percent
    pub presence_rate: f64,
    /// Running total of every payment to the agent, all months included
    pub total_paid: f64,
    pub score: f64,
    /// 1 is best
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamTotals {
    pub clients: usize,
    pub products: u32,
    pub events: usize,
    pub revenue: f64,
    pub average_presence: f64,
}

/// One agent's place in a month's ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRanking {
    pub agent_id: RecordId,
    pub month: Month,
    pub score: f64,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub month: Month,
    /// In roster order
    pub agents: Vec<AgentMonthSummary>,
    pub team: TeamTotals,
}

impl MonthlyReport {
    /// Rankings, best first
    pub fn rankings(&self) -> Vec<MonthlyRanking> {
        let mut rankings: Vec<MonthlyRanking> = self
            .agents
            .iter()
            .map(|a| MonthlyRanking {
                agent_id: a.agent_id,
                month: self.month,
                score: a.score,
                rank: a.rank,
            })
            .collect();
        rankings.sort_by_key(|r| r.rank);
        rankings
    }

    pub fn for_agent(&self, agent_id: RecordId) -> Option<&AgentMonthSummary> {
        self.agents.iter().find(|a| a.agent_id == agent_id)
    }
}

impl EvaluationCommandHandler {
    pub fn monthly_report(&self, month: Month, sources: ReportSources<'_>) -> MonthlyReport {
        let mut agents: Vec<AgentMonthSummary> = sources
            .agents
            .iter()
            .map(|agent| self.summarize(month, agent.id, &agent.fields, sources))
            .collect();

        // Stable sort: equal scores keep roster order.
        let mut order: Vec<usize> = (0..agents.len()).collect();
        order.sort_by(|&a, &b| agents[b].score.total_cmp(&agents[a].score));
        for (position, index) in order.into_iter().enumerate() {
            agents[index].rank = position + 1;
        }

        let team = TeamTotals {
            clients: agents.iter().map(|a| a.clients).sum(),
            products: agents.iter().map(|a| a.products).sum(),
            events: agents.iter().map(|a| a.events).sum(),
            revenue: agents.iter().map(|a| a.revenue).sum(),
            average_presence: if agents.is_empty() {
                0.0
            } else {
                round2(agents.iter().map(|a| a.presence_rate).sum::<f64>() / agents.len() as f64)
            },
        };

        tracing::debug!(%month, agents = agents.len(), team_events = team.events, "monthly report computed");
        MonthlyReport { month, agents, team }
    }

    fn summarize(
        &self,
        month: Month,
        agent_id: RecordId,
        agent: &Agent,
        sources: ReportSources<'_>,
    ) -> AgentMonthSummary {
        let name = agent.full_name();

        let events: Vec<_> = sources
            .events
            .iter()
            .filter(|r| r.fields.is_staffed_by(&name))
            .filter(|r| r.fields.date.is_some_and(|date| month.contains(date)))
            .collect();
        let clients: HashSet<&str> = events.iter().map(|r| r.fields.company.as_str()).collect();

        let (revenue, products) = events
            .iter()
            .filter_map(|r| self.for_event(r.id))
            .fold((0.0, 0), |(revenue, products), p| {
                (revenue + p.fields.revenue, products + p.fields.products_sold)
            });

        let declared: Vec<_> = sources
            .attendance
            .iter()
            .filter(|r| r.fields.agent_id == agent_id && month.contains(r.fields.date))
            .collect();
        let presence_rate = if declared.is_empty() {
            0.0
        } else {
            let validated = declared
                .iter()
                .filter(|r| r.fields.status == AttendanceStatus::Validated)
                .count();
            validated as f64 / declared.len() as f64 * 100.0
        };

        let total_paid: f64 = sources
            .payroll
            .iter()
            .filter(|r| r.fields.agent_id == agent_id)
            .map(|r| r.fields.amount)
            .sum();

        let score = clients.len() as f64 * POINTS_PER_CLIENT
            + f64::from(products) * POINTS_PER_PRODUCT
            + events.len() as f64 * POINTS_PER_EVENT
            + presence_rate * POINTS_PER_PRESENCE_PERCENT
            + revenue * POINTS_PER_REVENUE_UNIT;

        AgentMonthSummary {
            agent_id,
            name,
            events: events.len(),
            clients: clients.len(),
            products,
            revenue,
            presence_rate: round2(presence_rate),
            total_paid,
            score: round2(score),
            rank: 0,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::EventPerformance;
    use crate::entity_store::Record;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        agents: EntityStore<Agent>,
        events: EntityStore<Event>,
        attendance: EntityStore<AttendanceEntry>,
        payroll: EntityStore<PayrollEntry>,
        evaluations: EvaluationCommandHandler,
    }

    impl Fixture {
        fn new() -> Self {
            let agents = EntityStore::seeded(vec![
                Record::new(1, Agent::new("Dupont", "Jean")),
                Record::new(2, Agent::new("Martin", "Marie")),
            ])
            .unwrap();
            let events = EntityStore::seeded(vec![
                Record::new(
                    1,
                    Event::new("Paris", "Société A", "Alpha")
                        .with_agents(["Jean Dupont", "Marie Martin"])
                        .on(date(2023, 6, 15)),
                ),
                Record::new(
                    2,
                    Event::new("Lyon", "Société B", "Beta")
                        .with_agents(["Jean Dupont"])
                        .on(date(2023, 6, 20)),
                ),
                Record::new(
                    3,
                    Event::new("Nice", "Société A", "Gamma")
                        .with_agents(["Jean Dupont"])
                        .on(date(2023, 7, 1)),
                ),
            ])
            .unwrap();
            let attendance = EntityStore::seeded(vec![
                Record::new(
                    1,
                    AttendanceEntry::declared(RecordId(1), "Jean Dupont", date(2023, 6, 1))
                        .with_status(AttendanceStatus::Validated),
                ),
                Record::new(
                    2,
                    AttendanceEntry::declared(RecordId(1), "Jean Dupont", date(2023, 6, 2))
                        .with_status(AttendanceStatus::Refused),
                ),
                Record::new(
                    3,
                    AttendanceEntry::declared(RecordId(2), "Marie Martin", date(2023, 6, 1))
                        .with_status(AttendanceStatus::Validated),
                ),
            ])
            .unwrap();
            let payroll = EntityStore::seeded(vec![
                Record::new(1, PayrollEntry::new(RecordId(1), "Jean Dupont", 20, 2000.0)),
                Record::new(2, PayrollEntry::new(RecordId(1), "Jean Dupont", 5, 500.0)),
            ])
            .unwrap();
            let evaluations = EvaluationCommandHandler::new(
                EntityStore::seeded(vec![
                    Record::new(1, EventPerformance::new(RecordId(1), 1000.0, 10)),
                    Record::new(2, EventPerformance::new(RecordId(2), 500.0, 5)),
                ])
                .unwrap(),
            );

            Self {
                agents,
                events,
                attendance,
                payroll,
                evaluations,
            }
        }

        fn report(&self, month: &str) -> MonthlyReport {
            self.evaluations.monthly_report(
                month.parse().unwrap(),
                ReportSources {
                    agents: &self.agents,
                    events: &self.events,
                    attendance: &self.attendance,
                    payroll: &self.payroll,
                },
            )
        }
    }

    #[test]
    fn test_monthly_summary_per_agent() {
        let report = Fixture::new().report("2023-06");

        let jean = report.for_agent(RecordId(1)).unwrap();
        assert_eq!(jean.name, "Jean Dupont");
        assert_eq!(jean.events, 2);
        assert_eq!(jean.clients, 2);
        assert_eq!(jean.products, 15);
        assert_eq!(jean.revenue, 1500.0);
        assert_eq!(jean.presence_rate, 50.0);
        assert_eq!(jean.total_paid, 2500.0);
        assert_eq!(jean.score, 130.0);

        let marie = report.for_agent(RecordId(2)).unwrap();
        assert_eq!(marie.events, 1);
        assert_eq!(marie.presence_rate, 100.0);
        assert_eq!(marie.total_paid, 0.0);
        assert_eq!(marie.score, 115.0);
    }

    #[test]
    fn test_rankings_best_first() {
        let report = Fixture::new().report("2023-06");

        let ranked: Vec<(RecordId, usize)> =
            report.rankings().iter().map(|r| (r.agent_id, r.rank)).collect();
        assert_eq!(ranked, vec![(RecordId(1), 1), (RecordId(2), 2)]);

        // roster order is kept in the summary list
        assert_eq!(report.agents[0].agent_id, RecordId(1));
    }

    #[test]
    fn test_team_totals() {
        let report = Fixture::new().report("2023-06");

        assert_eq!(
            report.team,
            TeamTotals {
                clients: 3,
                products: 25,
                events: 3,
                revenue: 2500.0,
                average_presence: 75.0,
            }
        );
    }

    #[test]
    fn test_event_without_performance_counts_but_earns_nothing() {
        let report = Fixture::new().report("2023-07");

        let jean = report.for_agent(RecordId(1)).unwrap();
        assert_eq!(jean.events, 1);
        assert_eq!(jean.revenue, 0.0);
        assert_eq!(jean.presence_rate, 0.0);
        assert_eq!(jean.score, 15.0);
        assert_eq!(jean.rank, 1);
        assert_eq!(report.for_agent(RecordId(2)).unwrap().score, 0.0);
    }

    #[test]
    fn test_equal_scores_keep_roster_order() {
        let report = Fixture::new().report("2022-01");

        let ranked: Vec<RecordId> = report.rankings().iter().map(|r| r.agent_id).collect();
        assert_eq!(ranked, vec![RecordId(1), RecordId(2)]);
        assert_eq!(report.team.average_presence, 0.0);
    }

    #[test]
    fn test_empty_roster() {
        let fixture = Fixture::new();
        let report = fixture.evaluations.monthly_report(
            Month::new(2023, 6).unwrap(),
            ReportSources {
                agents: &EntityStore::new(),
                events: &fixture.events,
                attendance: &fixture.attendance,
                payroll: &fixture.payroll,
            },
        );

        assert!(report.agents.is_empty());
        assert_eq!(report.team.average_presence, 0.0);
    }
}
