//! Key-indexed in-memory stores. Uniqueness by id is the only invariant;
//! insertion order is preserved so assembled contexts are deterministic.

use std::sync::{Arc, Mutex};

use orchestrina_core::{CustomerId, CustomerProfile, ManagerObjective, ObjectiveId, ProductOffer};

#[derive(Clone, Default)]
pub struct InMemoryCustomers {
    customers: Arc<Mutex<Vec<CustomerProfile>>>,
}

impl InMemoryCustomers {
    pub fn upsert(&self, customer: CustomerProfile) {
        let mut customers = match self.customers.lock() {
            Ok(customers) => customers,
            Err(poisoned) => poisoned.into_inner(),
        };
        match customers.iter_mut().find(|existing| existing.id == customer.id) {
            Some(existing) => *existing = customer,
            None => customers.push(customer),
        }
    }

    pub fn get(&self, id: &CustomerId) -> Option<CustomerProfile> {
        let customers = match self.customers.lock() {
            Ok(customers) => customers,
            Err(poisoned) => poisoned.into_inner(),
        };
        customers.iter().find(|customer| &customer.id == id).cloned()
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOffers {
    offers: Arc<Mutex<Vec<ProductOffer>>>,
}

impl InMemoryOffers {
    pub fn upsert(&self, offer: ProductOffer) {
        let mut offers = match self.offers.lock() {
            Ok(offers) => offers,
            Err(poisoned) => poisoned.into_inner(),
        };
        match offers.iter_mut().find(|existing| existing.id == offer.id) {
            Some(existing) => *existing = offer,
            None => offers.push(offer),
        }
    }

    pub fn list_active(&self) -> Vec<ProductOffer> {
        let offers = match self.offers.lock() {
            Ok(offers) => offers,
            Err(poisoned) => poisoned.into_inner(),
        };
        offers.iter().filter(|offer| offer.active).cloned().collect()
    }
}

#[derive(Clone, Default)]
pub struct InMemoryObjectives {
    objectives: Arc<Mutex<Vec<ManagerObjective>>>,
}

impl InMemoryObjectives {
    pub fn upsert(&self, objective: ManagerObjective) {
        let mut objectives = match self.objectives.lock() {
            Ok(objectives) => objectives,
            Err(poisoned) => poisoned.into_inner(),
        };
        match objectives.iter_mut().find(|existing| existing.id == objective.id) {
            Some(existing) => *existing = objective,
            None => objectives.push(objective),
        }
    }

    pub fn get(&self, id: &ObjectiveId) -> Option<ManagerObjective> {
        let objectives = match self.objectives.lock() {
            Ok(objectives) => objectives,
            Err(poisoned) => poisoned.into_inner(),
        };
        objectives.iter().find(|objective| &objective.id == id).cloned()
    }

    pub fn list_active(&self) -> Vec<ManagerObjective> {
        let objectives = match self.objectives.lock() {
            Ok(objectives) => objectives,
            Err(poisoned) => poisoned.into_inner(),
        };
        objectives.iter().filter(|objective| objective.active).cloned().collect()
    }
}
