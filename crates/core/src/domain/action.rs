use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::customer::Channel;
use crate::domain::offer::OfferId;
use crate::scoring::ScoreBreakdown;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub String);

/// Metadata key carrying a rule-supplied context-fit hint.
pub const META_CONTEXT_FIT: &str = "contextFit";
/// Metadata key carrying a rule-supplied profile-fit hint.
pub const META_PROFILE_FIT: &str = "profileFit";

/// A proposed business action, produced unscored by the rule layer.
/// The ranker attaches `score`; nothing else mutates a candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionCandidate {
    pub id: ActionId,
    pub title: String,
    /// Name of the component that proposed the action.
    pub agent: String,
    pub offer_id: Option<OfferId>,
    pub channel: Option<Channel>,
    pub confidence: f64,
    /// Named float hints consumed by the score engine.
    pub metadata: BTreeMap<String, f64>,
    pub score: Option<ScoreBreakdown>,
}

impl ActionCandidate {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        agent: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            id: ActionId(id.into()),
            title: title.into(),
            agent: agent.into(),
            offer_id: None,
            channel: None,
            confidence,
            metadata: BTreeMap::new(),
            score: None,
        }
    }

    pub fn with_offer(mut self, offer_id: OfferId) -> Self {
        self.offer_id = Some(offer_id);
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn with_score(mut self, score: ScoreBreakdown) -> Self {
        self.score = Some(score);
        self
    }

    /// Total score, or 0 when the candidate has not been ranked yet.
    pub fn score_total(&self) -> f64 {
        self.score.as_ref().map(|score| score.total).unwrap_or(0.0)
    }
}
