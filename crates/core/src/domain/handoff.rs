use serde::{Deserialize, Serialize};

use crate::domain::action::ActionId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandoffId(pub String);

/// A request to route a ranked action to a human or external workflow.
/// Opaque to the run loop beyond being recorded in the audit trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Handoff {
    pub id: HandoffId,
    pub action_id: ActionId,
    pub target_role: String,
    pub reason: String,
    pub requires_approval: bool,
}

impl Handoff {
    pub fn new(
        id: impl Into<String>,
        action_id: ActionId,
        target_role: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: HandoffId(id.into()),
            action_id,
            target_role: target_role.into(),
            reason: reason.into(),
            requires_approval: true,
        }
    }
}
