//! Runtime wiring for the orchestrina decision core.
//!
//! The core never queries a repository or installs a subscriber itself;
//! this crate provides the glue around it:
//! - in-memory repositories for customers, offers, and objectives
//! - context assembly (joining repositories into one run context)
//! - the default rule-candidate generator and hand-off planner
//! - registry construction and tracing bootstrap

pub mod bootstrap;
pub mod context;
pub mod handoffs;
pub mod repositories;
pub mod rules;

pub use bootstrap::{default_registry, init_tracing, Pipeline};
pub use context::ContextAssembler;
pub use handoffs::ApprovalHandoffPlanner;
pub use repositories::{InMemoryCustomers, InMemoryObjectives, InMemoryOffers};
pub use rules::RuleBook;
