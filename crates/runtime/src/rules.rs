//! Default rule-candidate generator.
//!
//! Deterministic given its inputs: each event kind maps to a fixed set of
//! unscored candidates derived from the payload and the active offers.

use std::sync::Arc;

use async_trait::async_trait;
use orchestrina_core::{
    ActionCandidate, CandidateSource, Channel, CollaboratorError, DomainEvent, EventPayload,
    IdGenerator, ProductOffer, TicketOutcome, META_CONTEXT_FIT,
};

const AGENT_NAME: &str = "rules";

pub struct RuleBook {
    ids: Arc<dyn IdGenerator>,
}

impl RuleBook {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    fn candidate(&self, title: impl Into<String>, confidence: f64) -> ActionCandidate {
        ActionCandidate::new(self.ids.next("act"), title, AGENT_NAME, confidence)
    }
}

#[async_trait]
impl CandidateSource for RuleBook {
    async fn generate(
        &self,
        event: &DomainEvent,
        active_offers: &[ProductOffer],
    ) -> Result<Vec<ActionCandidate>, CollaboratorError> {
        let mut candidates = Vec::new();

        match &event.payload {
            EventPayload::TicketOutcome { outcome: TicketOutcome::NotWorthRepairing, .. } => {
                let hardware: Vec<&ProductOffer> = active_offers
                    .iter()
                    .filter(|offer| offer.active && offer.category == "hardware")
                    .collect();
                if hardware.is_empty() {
                    candidates.push(
                        self.candidate("Propose device replacement", 0.8)
                            .with_channel(Channel::Whatsapp)
                            .with_metadata(META_CONTEXT_FIT, 0.9),
                    );
                } else {
                    for offer in hardware {
                        candidates.push(
                            self.candidate(format!("Propose replacement: {}", offer.name), 0.8)
                                .with_offer(offer.id.clone())
                                .with_channel(Channel::Whatsapp)
                                .with_metadata(META_CONTEXT_FIT, 0.9),
                        );
                    }
                }
            }
            EventPayload::TicketOutcome { outcome: TicketOutcome::Repaired, .. } => {
                candidates.push(
                    self.candidate("Notify repair pickup", 0.9)
                        .with_channel(Channel::Whatsapp)
                        .with_metadata(META_CONTEXT_FIT, 0.8),
                );
            }
            EventPayload::TicketOutcome { outcome: TicketOutcome::AwaitingParts, .. } => {
                candidates.push(self.candidate("Schedule spare-part follow-up", 0.6));
            }
            EventPayload::InboundMessage { channel, text, .. } => {
                let lowered = text.to_lowercase();
                if lowered.contains("preventivo") || lowered.contains("quotazione") {
                    candidates.push(
                        self.candidate("Prepare quote", 0.7)
                            .with_channel(*channel)
                            .with_metadata(META_CONTEXT_FIT, 0.8),
                    );
                }
                candidates.push(self.candidate("Reply to customer", 0.6).with_channel(*channel));
            }
            EventPayload::PromoActivated { offer_id } => {
                let promo_name = active_offers
                    .iter()
                    .find(|offer| &offer.id == offer_id)
                    .map(|offer| offer.name.clone())
                    .unwrap_or_else(|| offer_id.0.clone());
                candidates.push(
                    self.candidate(format!("Push promo: {promo_name}"), 0.65)
                        .with_offer(offer_id.clone())
                        .with_channel(Channel::Social)
                        .with_metadata(META_CONTEXT_FIT, 0.7),
                );
            }
            EventPayload::ContractExpiring { contract_id, .. } => {
                candidates.push(
                    self.candidate(format!("Offer renewal for contract {}", contract_id.0), 0.75)
                        .with_channel(Channel::Email)
                        .with_metadata(META_CONTEXT_FIT, 0.75),
                );
            }
            EventPayload::InvoiceIngested { invoice_id, overdue: true, .. } => {
                candidates.push(
                    self.candidate(format!("Send payment reminder for {invoice_id}"), 0.85)
                        .with_channel(Channel::Email),
                );
            }
            EventPayload::InvoiceIngested { overdue: false, .. } => {}
        }

        Ok(candidates)
    }
}
