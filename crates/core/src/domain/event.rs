use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::customer::{Channel, CustomerId};
use crate::domain::offer::OfferId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub String);

/// Closed set of event kinds the orchestrator understands.
///
/// The dotted string form is the wire-level discriminator used by the
/// ingestion layer and by agent `supports` predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "invoice.ingested")]
    InvoiceIngested,
    #[serde(rename = "message.inbound")]
    InboundMessage,
    #[serde(rename = "assistance.ticket.outcome")]
    TicketOutcome,
    #[serde(rename = "promo.activated")]
    PromoActivated,
    #[serde(rename = "contract.expiring")]
    ContractExpiring,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvoiceIngested => "invoice.ingested",
            Self::InboundMessage => "message.inbound",
            Self::TicketOutcome => "assistance.ticket.outcome",
            Self::PromoActivated => "promo.activated",
            Self::ContractExpiring => "contract.expiring",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketOutcome {
    Repaired,
    NotWorthRepairing,
    AwaitingParts,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLine {
    Telephony,
    Energy,
    Connectivity,
}

/// Event payload, resolved into a typed variant once at the ingestion
/// boundary. Each variant corresponds to exactly one [`EventKind`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventPayload {
    InvoiceIngested { invoice_id: String, amount: f64, overdue: bool },
    InboundMessage { channel: Channel, from_ref: String, text: String },
    TicketOutcome { ticket_id: TicketId, outcome: TicketOutcome },
    PromoActivated { offer_id: OfferId },
    ContractExpiring { contract_id: ContractId, service: ServiceLine, expires_at: DateTime<Utc> },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::InvoiceIngested { .. } => EventKind::InvoiceIngested,
            Self::InboundMessage { .. } => EventKind::InboundMessage,
            Self::TicketOutcome { .. } => EventKind::TicketOutcome,
            Self::PromoActivated { .. } => EventKind::PromoActivated,
            Self::ContractExpiring { .. } => EventKind::ContractExpiring,
        }
    }
}

/// A typed occurrence fed into the orchestrator. Immutable once created;
/// produced by external ingestion and consumed read-only by the core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub id: EventId,
    pub kind: EventKind,
    pub occurred_at: DateTime<Utc>,
    pub customer_id: Option<CustomerId>,
    pub payload: EventPayload,
}

impl DomainEvent {
    pub fn new(
        id: impl Into<String>,
        occurred_at: DateTime<Utc>,
        customer_id: Option<CustomerId>,
        payload: EventPayload,
    ) -> Self {
        Self { id: EventId(id.into()), kind: payload.kind(), occurred_at, customer_id, payload }
    }
}
