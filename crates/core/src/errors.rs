use thiserror::Error;

/// Failure inside a single business agent's `execute`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("agent execution failed: {0}")]
    Failed(String),
    #[error("agent timed out after {timeout_ms} ms")]
    TimedOut { timeout_ms: u64 },
}

/// Failure in an external collaborator (rule-candidate generation or
/// hand-off derivation).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("integration failure: {0}")]
    Integration(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failure of one orchestration run. The caller observes "the run did not
/// complete" and decides whether to re-deliver the originating event;
/// the core never retries anything itself.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OrchestrationError {
    #[error("candidate generation failed: {0}")]
    CandidateGeneration(#[source] CollaboratorError),
    #[error("hand-off derivation failed: {0}")]
    HandoffDerivation(#[source] CollaboratorError),
    #[error("agent {agent} failed: {source}")]
    Agent {
        agent: String,
        #[source]
        source: AgentError,
    },
}
