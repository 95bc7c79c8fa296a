//! Decision core for the orchestrina business-automation platform.
//!
//! Given a domain event and its assembled context, the core generates
//! (via an external rule collaborator), scores, and ranks candidate
//! business actions, derives hand-offs, runs the matching business
//! agents, and returns the aggregated tasks, drafts, and audit trail of
//! the run. Transport, persistence, and channel adapters live outside
//! this crate.

pub mod agents;
pub mod audit;
pub mod clock;
pub mod config;
pub mod context;
pub mod domain;
pub mod errors;
pub mod ids;
pub mod orchestrator;
pub mod ranking;
pub mod scoring;

pub use agents::{
    AgentExecutionResult, AgentRegistry, AgentServices, AssistanceAgent, BusinessAgent,
    ComplianceAgent, ContentAgent, CustomerCareAgent, EnergyAgent, HardwareAgent, PreventiviAgent,
    TelephonyAgent,
};
pub use audit::{AuditKind, AuditRecord, AuditTrail};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{FailurePolicy, OrchestratorConfig};
pub use context::OrchestratorContext;
pub use domain::action::{ActionCandidate, ActionId, META_CONTEXT_FIT, META_PROFILE_FIT};
pub use domain::customer::{Channel, CustomerId, CustomerProfile};
pub use domain::draft::{Audience, CommunicationDraft, DraftId};
pub use domain::event::{
    ContractId, DomainEvent, EventId, EventKind, EventPayload, ServiceLine, TicketId,
    TicketOutcome,
};
pub use domain::handoff::{Handoff, HandoffId};
pub use domain::objective::{ManagerObjective, ObjectiveId};
pub use domain::offer::{OfferId, ProductOffer};
pub use domain::task::{TaskId, TaskItem, TaskStatus};
pub use errors::{AgentError, CollaboratorError, OrchestrationError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use orchestrator::{CandidateSource, HandoffPlanner, Orchestrator, OrchestratorOutput};
pub use ranking::Ranker;
pub use scoring::{ScoreBreakdown, ScoreEngine, ScoringWeights, DEFAULT_WEIGHTS};
