use crate::domain::event::Event;
use crate::entity_store::{EntityStore, Record, RecordId};

use super::commands::EvaluationCommand;
use super::errors::EvaluationError;
use super::value_objects::EventPerformance;

// ============================================================================
// Evaluation Command Handler
// ============================================================================
//
// Orchestrates: Command → Validation (event exists, one record per event)
//               → Entity Store
//
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct EvaluationCommandHandler {
    store: EntityStore<EventPerformance>,
}

impl EvaluationCommandHandler {
    pub fn new(store: EntityStore<EventPerformance>) -> Self {
        Self { store }
    }

    /// Handle a command; `events` is the store performances must point into.
    pub fn handle(
        &mut self,
        command: EvaluationCommand,
        events: &EntityStore<Event>,
    ) -> Result<Option<Record<EventPerformance>>, EvaluationError> {
        match command {
            EvaluationCommand::Record { performance } => {
                check_revenue(performance.revenue)?;
                if !events.contains(performance.event_id) {
                    return Err(EvaluationError::UnknownEvent(performance.event_id));
                }
                if self.for_event(performance.event_id).is_some() {
                    return Err(EvaluationError::DuplicatePerformance(performance.event_id));
                }
                Ok(Some(self.store.create(performance)?))
            }
            EvaluationCommand::Revise {
                performance_id,
                revenue,
                products_sold,
                client_satisfaction,
            } => {
                check_revenue(revenue)?;
                let record = self.store.patch(performance_id, |performance| EventPerformance {
                    revenue,
                    products_sold,
                    client_satisfaction,
                    ..performance
                })?;
                tracing::debug!(%performance_id, event_id = %record.fields.event_id, "performance revised");
                Ok(Some(record))
            }
            EvaluationCommand::Remove { performance_id } => {
                self.store.delete(performance_id);
                Ok(None)
            }
        }
    }

    pub fn for_event(&self, event_id: RecordId) -> Option<&Record<EventPerformance>> {
        self.store.iter().find(|r| r.fields.event_id == event_id)
    }

    pub fn list(&self) -> Vec<Record<EventPerformance>> {
        self.store.list()
    }

    pub fn store(&self) -> &EntityStore<EventPerformance> {
        &self.store
    }
}

fn check_revenue(revenue: f64) -> Result<(), EvaluationError> {
    if revenue < 0.0 || revenue.is_nan() {
        return Err(EvaluationError::NegativeRevenue(revenue));
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::Satisfaction;

    fn events() -> EntityStore<Event> {
        EntityStore::seeded(vec![
            Record::new(1, Event::new("Paris", "Société A", "Alpha")),
            Record::new(2, Event::new("Lyon", "Société B", "Beta")),
        ])
        .unwrap()
    }

    fn evaluations() -> EvaluationCommandHandler {
        let store = EntityStore::seeded(vec![Record::new(
            1,
            EventPerformance::new(RecordId(1), 1200.0, 30).rated(Satisfaction::SATISFIED),
        )])
        .unwrap();
        EvaluationCommandHandler::new(store)
    }

    #[test]
    fn test_record_performance() {
        let mut handler = evaluations();

        let recorded = handler
            .handle(
                EvaluationCommand::Record {
                    performance: EventPerformance::new(RecordId(2), 800.0, 15),
                },
                &events(),
            )
            .unwrap()
            .unwrap();

        assert_eq!(recorded.id, RecordId(2));
        assert_eq!(handler.for_event(RecordId(2)), Some(&recorded));
    }

    #[test]
    fn test_record_for_unknown_event_fails() {
        let mut handler = evaluations();

        let result = handler.handle(
            EvaluationCommand::Record {
                performance: EventPerformance::new(RecordId(7), 100.0, 1),
            },
            &events(),
        );

        assert!(matches!(result, Err(EvaluationError::UnknownEvent(RecordId(7)))));
        assert_eq!(handler.list().len(), 1);
    }

    #[test]
    fn test_second_record_for_same_event_fails() {
        let mut handler = evaluations();

        let result = handler.handle(
            EvaluationCommand::Record {
                performance: EventPerformance::new(RecordId(1), 50.0, 2),
            },
            &events(),
        );

        assert!(matches!(
            result,
            Err(EvaluationError::DuplicatePerformance(RecordId(1)))
        ));
    }

    #[test]
    fn test_negative_revenue_rejected() {
        let mut handler = evaluations();

        let result = handler.handle(
            EvaluationCommand::Revise {
                performance_id: RecordId(1),
                revenue: -10.0,
                products_sold: 3,
                client_satisfaction: Satisfaction::NEUTRAL,
            },
            &events(),
        );

        assert!(matches!(result, Err(EvaluationError::NegativeRevenue(_))));
        assert_eq!(handler.list()[0].fields.revenue, 1200.0);
    }

    #[test]
    fn test_revise_keeps_event_and_notes() {
        let store = EntityStore::seeded(vec![Record::new(
            4,
            EventPerformance::new(RecordId(2), 800.0, 15).with_notes("stand près de l'entrée"),
        )])
        .unwrap();
        let mut handler = EvaluationCommandHandler::new(store);

        let revised = handler
            .handle(
                EvaluationCommand::Revise {
                    performance_id: RecordId(4),
                    revenue: 950.0,
                    products_sold: 18,
                    client_satisfaction: Satisfaction::VERY_SATISFIED,
                },
                &events(),
            )
            .unwrap()
            .unwrap();

        assert_eq!(revised.id, RecordId(4));
        assert_eq!(revised.fields.event_id, RecordId(2));
        assert_eq!(revised.fields.notes, "stand près de l'entrée");
        assert_eq!(revised.fields.products_sold, 18);
    }

    #[test]
    fn test_revise_missing_performance_fails() {
        let mut handler = evaluations();

        let result = handler.handle(
            EvaluationCommand::Revise {
                performance_id: RecordId(9),
                revenue: 1.0,
                products_sold: 1,
                client_satisfaction: Satisfaction::NEUTRAL,
            },
            &events(),
        );

        assert!(matches!(result, Err(EvaluationError::Store(e)) if e.is_not_found()));
    }

    #[test]
    fn test_remove_then_record_again() {
        let mut handler = evaluations();

        handler
            .handle(EvaluationCommand::Remove { performance_id: RecordId(1) }, &events())
            .unwrap();
        let recorded = handler
            .handle(
                EvaluationCommand::Record {
                    performance: EventPerformance::new(RecordId(1), 300.0, 4),
                },
                &events(),
            )
            .unwrap()
            .unwrap();

        assert_eq!(recorded.id, RecordId(2));
    }
}
