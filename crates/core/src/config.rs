use std::time::Duration;

use crate::scoring::ScoringWeights;

/// What to do when one agent's `execute` fails mid-run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// First agent failure aborts the whole run with no partial output.
    FailFast,
    /// A failed agent is recorded in the audit trail and the run
    /// continues with the remaining agents' results.
    Isolate,
}

/// Per-orchestrator configuration, fixed at wiring time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrchestratorConfig {
    /// Deadline applied to each agent invocation individually.
    pub agent_timeout: Duration,
    pub failure_policy: FailurePolicy,
    pub weights: ScoringWeights,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            agent_timeout: Duration::from_secs(30),
            failure_policy: FailurePolicy::Isolate,
            weights: ScoringWeights::default(),
        }
    }
}
