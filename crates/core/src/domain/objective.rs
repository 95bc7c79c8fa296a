use serde::{Deserialize, Serialize};

use crate::domain::offer::OfferId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectiveId(pub String);

/// A commercial objective set by a manager, steering candidate scoring
/// toward a preferred set of offers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManagerObjective {
    pub id: ObjectiveId,
    pub title: String,
    pub preferred_offer_ids: Vec<OfferId>,
    pub weight: f64,
    pub active: bool,
}

impl ManagerObjective {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ObjectiveId(id.into()),
            title: title.into(),
            preferred_offer_ids: Vec::new(),
            weight: 1.0,
            active: true,
        }
    }

    pub fn with_preferred_offer(mut self, offer_id: impl Into<String>) -> Self {
        self.preferred_offer_ids.push(OfferId(offer_id.into()));
        self
    }

    pub fn prefers(&self, offer_id: &OfferId) -> bool {
        self.preferred_offer_ids.contains(offer_id)
    }
}
