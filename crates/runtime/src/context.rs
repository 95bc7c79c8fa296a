//! Joining repositories into one immutable run context.

use orchestrina_core::{DomainEvent, OrchestratorContext};

use crate::repositories::{InMemoryCustomers, InMemoryObjectives, InMemoryOffers};

/// Assembles the full decision input for one run. The snapshot is taken
/// once per event; later repository mutations do not affect a running
/// orchestration.
#[derive(Clone)]
pub struct ContextAssembler {
    customers: InMemoryCustomers,
    offers: InMemoryOffers,
    objectives: InMemoryObjectives,
}

impl ContextAssembler {
    pub fn new(
        customers: InMemoryCustomers,
        offers: InMemoryOffers,
        objectives: InMemoryObjectives,
    ) -> Self {
        Self { customers, offers, objectives }
    }

    pub fn assemble(&self, event: DomainEvent) -> OrchestratorContext {
        let customer = event.customer_id.as_ref().and_then(|id| self.customers.get(id));
        OrchestratorContext {
            event,
            customer,
            active_offers: self.offers.list_active(),
            active_objectives: self.objectives.list_active(),
        }
    }
}
