//! Process wiring: registry construction, pipeline assembly, tracing.

use std::sync::Arc;

use orchestrina_core::{
    AgentRegistry, AssistanceAgent, ComplianceAgent, ContentAgent, CustomerCareAgent, DomainEvent,
    EnergyAgent, HardwareAgent, IdGenerator, OrchestrationError, Orchestrator, OrchestratorConfig,
    OrchestratorOutput, PreventiviAgent, TelephonyAgent, UuidIds,
};
use tracing::info;

use crate::context::ContextAssembler;
use crate::handoffs::ApprovalHandoffPlanner;
use crate::repositories::{InMemoryCustomers, InMemoryObjectives, InMemoryOffers};
use crate::rules::RuleBook;

/// All eight business agents in their fixed registration order.
pub fn default_registry() -> AgentRegistry {
    AgentRegistry::new(vec![
        Arc::new(AssistanceAgent),
        Arc::new(ComplianceAgent),
        Arc::new(ContentAgent),
        Arc::new(CustomerCareAgent),
        Arc::new(EnergyAgent),
        Arc::new(HardwareAgent),
        Arc::new(PreventiviAgent),
        Arc::new(TelephonyAgent),
    ])
}

/// Install the global tracing subscriber with env-filter support.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Fully wired decision pipeline: repositories, context assembly, default
/// collaborators, and the orchestrator.
pub struct Pipeline {
    pub customers: InMemoryCustomers,
    pub offers: InMemoryOffers,
    pub objectives: InMemoryObjectives,
    assembler: ContextAssembler,
    orchestrator: Orchestrator,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_registry(default_registry())
    }

    pub fn with_registry(registry: AgentRegistry) -> Self {
        Self::assemble(registry, Arc::new(UuidIds), OrchestratorConfig::default())
    }

    pub fn with_registry_and_config(registry: AgentRegistry, config: OrchestratorConfig) -> Self {
        Self::assemble(registry, Arc::new(UuidIds), config)
    }

    fn assemble(
        registry: AgentRegistry,
        ids: Arc<dyn IdGenerator>,
        config: OrchestratorConfig,
    ) -> Self {
        let customers = InMemoryCustomers::default();
        let offers = InMemoryOffers::default();
        let objectives = InMemoryObjectives::default();
        let assembler =
            ContextAssembler::new(customers.clone(), offers.clone(), objectives.clone());
        let orchestrator = Orchestrator::new(
            registry,
            Arc::new(RuleBook::new(ids.clone())),
            Arc::new(ApprovalHandoffPlanner::new(ids.clone())),
        )
        .with_config(config)
        .with_ids(ids);

        info!(event_name = "pipeline.assembled", "decision pipeline assembled");
        Self { customers, offers, objectives, assembler, orchestrator }
    }

    /// Assemble the context snapshot for one event and run the full
    /// decision pipeline over it.
    pub async fn handle_event(
        &self,
        event: DomainEvent,
    ) -> Result<OrchestratorOutput, OrchestrationError> {
        let ctx = self.assembler.assemble(event);
        self.orchestrator.run(ctx).await
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
