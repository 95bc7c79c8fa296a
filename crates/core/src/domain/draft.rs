use serde::{Deserialize, Serialize};

use crate::domain::customer::{Channel, CustomerId};
use crate::domain::offer::OfferId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    OneToOne,
    OneToMany,
}

/// An unsent candidate communication. `needs_approval` gates whether a
/// downstream publisher may auto-send it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommunicationDraft {
    pub id: DraftId,
    pub customer_id: Option<CustomerId>,
    pub channel: Channel,
    pub audience: Audience,
    pub subject: Option<String>,
    pub body: String,
    pub related_offer_id: Option<OfferId>,
    pub needs_approval: bool,
    pub reason: String,
    pub recipient_ref: Option<String>,
}

impl CommunicationDraft {
    pub fn one_to_one(
        id: impl Into<String>,
        channel: Channel,
        body: impl Into<String>,
        needs_approval: bool,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: DraftId(id.into()),
            customer_id: None,
            channel,
            audience: Audience::OneToOne,
            subject: None,
            body: body.into(),
            related_offer_id: None,
            needs_approval,
            reason: reason.into(),
            recipient_ref: None,
        }
    }

    pub fn broadcast(
        id: impl Into<String>,
        channel: Channel,
        body: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: DraftId(id.into()),
            customer_id: None,
            channel,
            audience: Audience::OneToMany,
            subject: None,
            body: body.into(),
            related_offer_id: None,
            needs_approval: true,
            reason: reason.into(),
            recipient_ref: None,
        }
    }

    pub fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_related_offer(mut self, offer_id: OfferId) -> Self {
        self.related_offer_id = Some(offer_id);
        self
    }

    pub fn with_recipient_ref(mut self, recipient_ref: impl Into<String>) -> Self {
        self.recipient_ref = Some(recipient_ref.into());
        self
    }
}
