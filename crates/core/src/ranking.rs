//! Ranking of scored action candidates.

use std::cmp::Ordering;

use crate::context::OrchestratorContext;
use crate::domain::action::ActionCandidate;
use crate::scoring::{ScoreEngine, ScoringWeights};

/// Applies the score engine to every candidate and orders the result by
/// total score, highest first. Side-effect-free beyond the returned
/// sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ranker {
    engine: ScoreEngine,
}

impl Ranker {
    pub fn new() -> Self {
        Self { engine: ScoreEngine::new() }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { engine: ScoreEngine::with_weights(weights) }
    }

    /// Score and sort. The sort is stable: candidates with equal totals
    /// keep their input order.
    pub fn rank(
        &self,
        ctx: &OrchestratorContext,
        candidates: Vec<ActionCandidate>,
    ) -> Vec<ActionCandidate> {
        let mut ranked: Vec<ActionCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let breakdown = self.engine.score(ctx, &candidate);
                candidate.with_score(breakdown)
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score_total().partial_cmp(&a.score_total()).unwrap_or(Ordering::Equal)
        });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::action::META_CONTEXT_FIT;
    use crate::domain::event::{DomainEvent, EventPayload, TicketId, TicketOutcome};

    fn context() -> OrchestratorContext {
        OrchestratorContext::new(DomainEvent::new(
            "evt-1",
            Utc::now(),
            None,
            EventPayload::TicketOutcome {
                ticket_id: TicketId("t1".to_owned()),
                outcome: TicketOutcome::NotWorthRepairing,
            },
        ))
    }

    fn candidate(id: &str, confidence: f64) -> ActionCandidate {
        ActionCandidate::new(id, format!("candidate {id}"), "rules", confidence)
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let ranker = Ranker::new();
        assert!(ranker.rank(&context(), Vec::new()).is_empty());
    }

    #[test]
    fn ranking_attaches_scores_and_orders_descending() {
        let ranker = Ranker::new();
        let ranked = ranker.rank(
            &context(),
            vec![candidate("low", 0.1), candidate("high", 0.9), candidate("mid", 0.5)],
        );

        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|c| c.score.is_some()));
        let ids: Vec<&str> = ranked.iter().map(|c| c.id.0.as_str()).collect();
        assert_eq!(ids, ["high", "mid", "low"]);
        assert!(ranked.windows(2).all(|pair| pair[0].score_total() >= pair[1].score_total()));
    }

    #[test]
    fn equal_totals_keep_input_order() {
        let ranker = Ranker::new();
        let ranked = ranker.rank(
            &context(),
            vec![candidate("first", 0.5), candidate("second", 0.5), candidate("third", 0.5)],
        );

        let ids: Vec<&str> = ranked.iter().map(|c| c.id.0.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn ranking_an_already_ranked_sequence_is_idempotent() {
        let ranker = Ranker::new();
        let ctx = context();
        let first = ranker.rank(
            &ctx,
            vec![
                candidate("a", 0.2).with_metadata(META_CONTEXT_FIT, 0.9),
                candidate("b", 0.8),
                candidate("c", 0.8),
            ],
        );
        let second = ranker.rank(&ctx, first.clone());

        assert_eq!(first, second);
    }
}
