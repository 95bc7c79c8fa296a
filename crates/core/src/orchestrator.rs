//! Orchestration run loop.
//!
//! One run turns a domain event plus its assembled context into ranked
//! actions, hand-offs, aggregated agent output, and a full audit trail.
//! Phases are strictly sequential; agent invocations within the agent
//! phase are fanned out onto the task runtime and joined back in
//! selection order, so observable output is independent of completion
//! order.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::agents::{AgentExecutionResult, AgentRegistry, AgentServices, BusinessAgent};
use crate::audit::{AuditKind, AuditRecord, AuditTrail};
use crate::clock::{Clock, SystemClock};
use crate::config::{FailurePolicy, OrchestratorConfig};
use crate::context::OrchestratorContext;
use crate::domain::action::ActionCandidate;
use crate::domain::draft::CommunicationDraft;
use crate::domain::event::DomainEvent;
use crate::domain::handoff::Handoff;
use crate::domain::offer::ProductOffer;
use crate::domain::task::TaskItem;
use crate::errors::{AgentError, CollaboratorError, OrchestrationError};
use crate::ids::{IdGenerator, UuidIds};
use crate::ranking::Ranker;

const ACTOR: &str = "orchestrator";

/// Rule-candidate generation. Turns a raw event plus the active offers
/// into unscored action candidates. On internal failure it must fail the
/// whole call rather than return partial output.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn generate(
        &self,
        event: &DomainEvent,
        active_offers: &[ProductOffer],
    ) -> Result<Vec<ActionCandidate>, CollaboratorError>;
}

/// Hand-off derivation over the ranked candidates.
#[async_trait]
pub trait HandoffPlanner: Send + Sync {
    async fn derive(&self, ranked: &[ActionCandidate]) -> Result<Vec<Handoff>, CollaboratorError>;
}

/// The sole result of one orchestration run; owned by the caller once
/// returned, with no further core-held state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorOutput {
    pub ranked_actions: Vec<ActionCandidate>,
    pub tasks: Vec<TaskItem>,
    pub drafts: Vec<CommunicationDraft>,
    pub handoffs: Vec<Handoff>,
    pub audit_records: Vec<AuditRecord>,
}

/// Composes the ranker, the agent registry, and the external rule and
/// hand-off collaborators into one end-to-end decision per event.
/// Re-entrant: runs for different events may execute concurrently.
pub struct Orchestrator {
    registry: AgentRegistry,
    candidates: Arc<dyn CandidateSource>,
    handoffs: Arc<dyn HandoffPlanner>,
    ranker: Ranker,
    config: OrchestratorConfig,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl Orchestrator {
    pub fn new(
        registry: AgentRegistry,
        candidates: Arc<dyn CandidateSource>,
        handoffs: Arc<dyn HandoffPlanner>,
    ) -> Self {
        let config = OrchestratorConfig::default();
        Self {
            registry,
            candidates,
            handoffs,
            ranker: Ranker::with_weights(config.weights),
            config,
            ids: Arc::new(UuidIds),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_config(mut self, config: OrchestratorConfig) -> Self {
        self.ranker = Ranker::with_weights(config.weights);
        self.config = config;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run the full decision pipeline for one event.
    ///
    /// Candidate-generation and hand-off failures abort the run with no
    /// partial output; agent failures follow the configured
    /// [`FailurePolicy`].
    pub async fn run(
        &self,
        ctx: OrchestratorContext,
    ) -> Result<OrchestratorOutput, OrchestrationError> {
        let mut trail = AuditTrail::new(self.ids.clone(), self.clock.clone());
        info!(
            event_name = "orchestration.run.start",
            event_kind = %ctx.event.kind,
            event_id = %ctx.event.id.0,
            "starting orchestration run"
        );
        trail.record(
            ACTOR,
            AuditKind::EventReceived,
            json!({ "eventType": ctx.event.kind.as_str(), "eventId": ctx.event.id.0 }),
        );

        let candidates = self
            .candidates
            .generate(&ctx.event, &ctx.active_offers)
            .await
            .map_err(OrchestrationError::CandidateGeneration)?;
        debug!(event_name = "orchestration.candidates_generated", count = candidates.len());
        trail.record(ACTOR, AuditKind::CandidatesGenerated, json!({ "count": candidates.len() }));

        let ranked = self.ranker.rank(&ctx, candidates);
        let top = ranked.first();
        trail.record(
            ACTOR,
            AuditKind::ActionsRanked,
            json!({
                "topAction": top.map(|candidate| candidate.title.clone()),
                "topScore": top.map(|candidate| candidate.score_total()),
                "count": ranked.len(),
            }),
        );

        let handoffs = self
            .handoffs
            .derive(&ranked)
            .await
            .map_err(OrchestrationError::HandoffDerivation)?;
        trail.record(ACTOR, AuditKind::HandoffsDerived, json!({ "handoffs": handoffs }));

        let selected = self.registry.select(ctx.event.kind);
        let names: Vec<&str> = selected.iter().map(|agent| agent.name()).collect();
        debug!(event_name = "orchestration.agents_selected", agents = ?names);
        trail.record(ACTOR, AuditKind::AgentsExecuted, json!({ "agents": names }));

        let outcomes = self.execute_agents(&ctx, &selected).await;

        let mut tasks = Vec::new();
        let mut drafts = Vec::new();
        for (agent, outcome) in outcomes {
            match outcome {
                Ok(result) => {
                    trail.record(
                        ACTOR,
                        AuditKind::AgentNotes,
                        json!({ "agent": result.agent, "notes": result.notes }),
                    );
                    tasks.extend(result.tasks);
                    drafts.extend(result.drafts);
                }
                Err(source) => match self.config.failure_policy {
                    FailurePolicy::FailFast => {
                        return Err(OrchestrationError::Agent { agent, source });
                    }
                    FailurePolicy::Isolate => {
                        trail.record(
                            ACTOR,
                            AuditKind::AgentFailed,
                            json!({ "agent": agent, "error": source.to_string() }),
                        );
                    }
                },
            }
        }

        for candidate in &ranked {
            trail.record(
                ACTOR,
                AuditKind::CandidateScored,
                json!({
                    "actionId": candidate.id.0,
                    "title": candidate.title,
                    "agent": candidate.agent,
                    "score": candidate.score_total(),
                }),
            );
        }

        info!(
            event_name = "orchestration.run.complete",
            event_id = %ctx.event.id.0,
            ranked = ranked.len(),
            tasks = tasks.len(),
            drafts = drafts.len(),
            "orchestration run complete"
        );
        Ok(OrchestratorOutput {
            ranked_actions: ranked,
            tasks,
            drafts,
            handoffs,
            audit_records: trail.into_records(),
        })
    }

    /// Fan selected agents out onto the runtime, bound each invocation by
    /// the per-agent timeout, and join results back in selection order.
    async fn execute_agents(
        &self,
        ctx: &OrchestratorContext,
        selected: &[Arc<dyn BusinessAgent>],
    ) -> Vec<(String, Result<AgentExecutionResult, AgentError>)> {
        let shared = Arc::new(ctx.clone());
        let services = AgentServices::new(self.ids.clone(), self.clock.clone());

        let mut handles = Vec::with_capacity(selected.len());
        for agent in selected {
            let agent = Arc::clone(agent);
            let ctx = Arc::clone(&shared);
            let services = services.clone();
            let timeout = self.config.agent_timeout;
            handles.push(tokio::spawn(async move {
                match tokio::time::timeout(timeout, agent.execute(&ctx, &services)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(AgentError::TimedOut { timeout_ms: timeout.as_millis() as u64 }),
                }
            }));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (agent, handle) in selected.iter().zip(handles) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => Err(AgentError::Failed(join_error.to_string())),
            };
            outcomes.push((agent.name().to_owned(), outcome));
        }
        outcomes
    }
}
