use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerProfile;
use crate::domain::event::DomainEvent;
use crate::domain::objective::ManagerObjective;
use crate::domain::offer::{OfferId, ProductOffer};

/// The full decision input for one orchestration run. Assembled by the
/// caller from its repositories and treated as an immutable snapshot for
/// the run's duration; the core never re-reads backing stores mid-run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorContext {
    pub event: DomainEvent,
    pub customer: Option<CustomerProfile>,
    pub active_offers: Vec<ProductOffer>,
    pub active_objectives: Vec<ManagerObjective>,
}

impl OrchestratorContext {
    pub fn new(event: DomainEvent) -> Self {
        Self { event, customer: None, active_offers: Vec::new(), active_objectives: Vec::new() }
    }

    pub fn with_customer(mut self, customer: CustomerProfile) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_offers(mut self, offers: Vec<ProductOffer>) -> Self {
        self.active_offers = offers;
        self
    }

    pub fn with_objectives(mut self, objectives: Vec<ManagerObjective>) -> Self {
        self.active_objectives = objectives;
        self
    }

    pub fn find_offer(&self, offer_id: &OfferId) -> Option<&ProductOffer> {
        self.active_offers.iter().find(|offer| &offer.id == offer_id)
    }
}
