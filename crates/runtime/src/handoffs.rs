//! Default hand-off planner: routes sufficiently strong candidates to a
//! human for approval.

use std::sync::Arc;

use async_trait::async_trait;
use orchestrina_core::{
    ActionCandidate, CollaboratorError, Handoff, HandoffPlanner, IdGenerator,
};

const DEFAULT_THRESHOLD: f64 = 0.65;

pub struct ApprovalHandoffPlanner {
    ids: Arc<dyn IdGenerator>,
    threshold: f64,
}

impl ApprovalHandoffPlanner {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids, threshold: DEFAULT_THRESHOLD }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn target_role(candidate: &ActionCandidate) -> &'static str {
        if candidate.title.contains("payment reminder") {
            "back-office"
        } else {
            "store-manager"
        }
    }
}

#[async_trait]
impl HandoffPlanner for ApprovalHandoffPlanner {
    async fn derive(&self, ranked: &[ActionCandidate]) -> Result<Vec<Handoff>, CollaboratorError> {
        Ok(ranked
            .iter()
            .filter(|candidate| candidate.score_total() >= self.threshold)
            .map(|candidate| {
                Handoff::new(
                    self.ids.next("handoff"),
                    candidate.id.clone(),
                    Self::target_role(candidate),
                    format!(
                        "score {:.4} at or above hand-off threshold {:.2}",
                        candidate.score_total(),
                        self.threshold
                    ),
                )
            })
            .collect())
    }
}
