//! Business agents and their registry.
//!
//! An agent is a domain-specific policy module: it declares which event
//! kinds it reacts to (`supports`) and, for a qualifying run, emits tasks
//! and communication drafts (`execute`). Agents are stateless across runs
//! and never observe each other's results within one run.

pub mod assistance;
pub mod compliance;
pub mod content;
pub mod customer_care;
pub mod energy;
pub mod hardware;
pub mod preventivi;
pub mod telephony;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::context::OrchestratorContext;
use crate::domain::action::ActionCandidate;
use crate::domain::draft::CommunicationDraft;
use crate::domain::event::EventKind;
use crate::domain::task::TaskItem;
use crate::errors::AgentError;
use crate::ids::IdGenerator;

pub use assistance::AssistanceAgent;
pub use compliance::ComplianceAgent;
pub use content::ContentAgent;
pub use customer_care::CustomerCareAgent;
pub use energy::EnergyAgent;
pub use hardware::HardwareAgent;
pub use preventivi::PreventiviAgent;
pub use telephony::TelephonyAgent;

/// Injected facilities an agent may use during one `execute` call.
#[derive(Clone)]
pub struct AgentServices {
    pub ids: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl AgentServices {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }
}

/// Everything one agent produced during one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentExecutionResult {
    pub agent: String,
    pub actions: Vec<ActionCandidate>,
    pub tasks: Vec<TaskItem>,
    pub drafts: Vec<CommunicationDraft>,
    pub notes: Vec<String>,
}

impl AgentExecutionResult {
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            actions: Vec::new(),
            tasks: Vec::new(),
            drafts: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: TaskItem) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn with_draft(mut self, draft: CommunicationDraft) -> Self {
        self.drafts.push(draft);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// A domain-specific policy module reacting to qualifying event kinds.
#[async_trait]
pub trait BusinessAgent: Send + Sync {
    fn name(&self) -> &'static str;

    /// Pure predicate over the event kind; no side effects.
    fn supports(&self, kind: EventKind) -> bool;

    /// Produce tasks/drafts for one run. Reads the shared context only;
    /// ids and timestamps come from the injected services.
    async fn execute(
        &self,
        ctx: &OrchestratorContext,
        services: &AgentServices,
    ) -> Result<AgentExecutionResult, AgentError>;
}

/// Fixed, ordered set of agents configured once at process start.
#[derive(Clone)]
pub struct AgentRegistry {
    agents: Vec<Arc<dyn BusinessAgent>>,
}

impl AgentRegistry {
    pub fn new(agents: Vec<Arc<dyn BusinessAgent>>) -> Self {
        Self { agents }
    }

    /// Agents whose `supports` matches, in registration order.
    pub fn select(&self, kind: EventKind) -> Vec<Arc<dyn BusinessAgent>> {
        self.agents.iter().filter(|agent| agent.supports(kind)).cloned().collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.agents.iter().map(|agent| agent.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_preserves_registration_order() {
        let registry = AgentRegistry::new(vec![
            Arc::new(ComplianceAgent),
            Arc::new(CustomerCareAgent),
            Arc::new(PreventiviAgent),
        ]);

        let selected = registry.select(EventKind::InboundMessage);
        let names: Vec<&str> = selected.iter().map(|agent| agent.name()).collect();
        assert_eq!(names, ["compliance", "customer-care", "preventivi"]);
    }

    #[test]
    fn selection_is_empty_when_no_agent_supports_the_kind() {
        let registry = AgentRegistry::new(vec![Arc::new(AssistanceAgent)]);
        assert!(registry.select(EventKind::PromoActivated).is_empty());
    }
}
