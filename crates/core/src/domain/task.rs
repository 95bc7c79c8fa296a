use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerId;
use crate::domain::event::TicketId;
use crate::domain::offer::OfferId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Open,
    Approved,
    Completed,
    Dismissed,
}

/// A unit of work for a human or downstream workflow. The core only
/// creates tasks; lifecycle after creation belongs to an external system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub kind: String,
    pub title: String,
    pub assignee_role: String,
    pub priority: u8,
    pub customer_id: Option<CustomerId>,
    pub ticket_id: Option<TicketId>,
    pub offer_id: Option<OfferId>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl TaskItem {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        title: impl Into<String>,
        assignee_role: impl Into<String>,
        priority: u8,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TaskId(id.into()),
            kind: kind.into(),
            title: title.into(),
            assignee_role: assignee_role.into(),
            priority,
            customer_id: None,
            ticket_id: None,
            offer_id: None,
            status: TaskStatus::Open,
            created_at,
        }
    }

    pub fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn with_ticket(mut self, ticket_id: TicketId) -> Self {
        self.ticket_id = Some(ticket_id);
        self
    }

    pub fn with_offer(mut self, offer_id: OfferId) -> Self {
        self.offer_id = Some(offer_id);
        self
    }
}
