//! Repair-shop assistance agent.
//!
//! Reacts to ticket outcomes: proposes a replacement device when a repair
//! is not worth it, notifies the customer when the device is ready, and
//! schedules a follow-up while parts are on order.

use std::cmp::Ordering;

use async_trait::async_trait;

use crate::agents::{AgentExecutionResult, AgentServices, BusinessAgent};
use crate::context::OrchestratorContext;
use crate::domain::customer::Channel;
use crate::domain::draft::CommunicationDraft;
use crate::domain::event::{EventKind, EventPayload, TicketOutcome};
use crate::domain::offer::ProductOffer;
use crate::domain::task::TaskItem;
use crate::errors::AgentError;

#[derive(Clone, Copy, Debug, Default)]
pub struct AssistanceAgent;

impl AssistanceAgent {
    fn best_replacement<'a>(&self, ctx: &'a OrchestratorContext) -> Option<&'a ProductOffer> {
        ctx.active_offers.iter().filter(|offer| offer.active).max_by(|a, b| {
            a.margin_pct
                .unwrap_or(0.0)
                .partial_cmp(&b.margin_pct.unwrap_or(0.0))
                .unwrap_or(Ordering::Equal)
        })
    }
}

#[async_trait]
impl BusinessAgent for AssistanceAgent {
    fn name(&self) -> &'static str {
        "assistance"
    }

    fn supports(&self, kind: EventKind) -> bool {
        matches!(kind, EventKind::TicketOutcome)
    }

    async fn execute(
        &self,
        ctx: &OrchestratorContext,
        services: &AgentServices,
    ) -> Result<AgentExecutionResult, AgentError> {
        let EventPayload::TicketOutcome { ticket_id, outcome } = &ctx.event.payload else {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note("event payload carries no ticket outcome"));
        };

        let mut result = AgentExecutionResult::new(self.name());
        match outcome {
            TicketOutcome::NotWorthRepairing => {
                let replacement = self.best_replacement(ctx);

                let mut task = TaskItem::new(
                    services.ids.next("task"),
                    "approval",
                    format!("Approve device replacement for ticket {}", ticket_id.0),
                    "store-manager",
                    9,
                    services.clock.now(),
                )
                .with_ticket(ticket_id.clone());
                if let Some(customer) = &ctx.customer {
                    task = task.with_customer(customer.id.clone());
                }
                if let Some(offer) = replacement {
                    task = task.with_offer(offer.id.clone());
                }

                let body = match replacement {
                    Some(offer) => format!(
                        "Your device (ticket {}) is unfortunately not worth repairing. \
                         We can offer you a {} as a replacement; reply here and we will \
                         prepare everything.",
                        ticket_id.0, offer.name
                    ),
                    None => format!(
                        "Your device (ticket {}) is unfortunately not worth repairing. \
                         Reply here and we will propose a replacement.",
                        ticket_id.0
                    ),
                };
                let mut draft = CommunicationDraft::one_to_one(
                    services.ids.next("draft"),
                    Channel::Whatsapp,
                    body,
                    true,
                    "replacement proposal after a not-worth-repairing outcome",
                );
                if let Some(customer) = &ctx.customer {
                    draft = draft.with_customer(customer.id.clone());
                    if let Some(phone) = &customer.phone {
                        draft = draft.with_recipient_ref(phone.clone());
                    }
                }
                if let Some(offer) = replacement {
                    draft = draft.with_related_offer(offer.id.clone());
                }

                result = result.with_task(task).with_draft(draft).with_note(format!(
                    "ticket {} closed as not worth repairing; replacement routed for approval",
                    ticket_id.0
                ));
            }
            TicketOutcome::Repaired => {
                let channel = ctx
                    .customer
                    .as_ref()
                    .and_then(|customer| customer.preferred_channel)
                    .unwrap_or(Channel::Whatsapp);
                let consented = ctx
                    .customer
                    .as_ref()
                    .map(|customer| customer.has_consent(channel))
                    .unwrap_or(false);

                let mut draft = CommunicationDraft::one_to_one(
                    services.ids.next("draft"),
                    channel,
                    format!("Good news: the device on ticket {} is repaired and ready for pickup.", ticket_id.0),
                    !consented,
                    "pickup notification after repair",
                );
                if let Some(customer) = &ctx.customer {
                    draft = draft.with_customer(customer.id.clone());
                }

                result = result
                    .with_draft(draft)
                    .with_note(format!("ticket {} repaired; pickup notification drafted", ticket_id.0));
            }
            TicketOutcome::AwaitingParts => {
                let mut task = TaskItem::new(
                    services.ids.next("task"),
                    "follow-up",
                    format!("Check spare-part order for ticket {}", ticket_id.0),
                    "assistance-desk",
                    4,
                    services.clock.now(),
                )
                .with_ticket(ticket_id.clone());
                if let Some(customer) = &ctx.customer {
                    task = task.with_customer(customer.id.clone());
                }

                result = result
                    .with_task(task)
                    .with_note(format!("ticket {} waiting on parts; follow-up scheduled", ticket_id.0));
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::customer::CustomerProfile;
    use crate::domain::event::{DomainEvent, TicketId};
    use crate::ids::SequentialIds;

    fn services() -> AgentServices {
        let instant = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).single().expect("valid instant");
        AgentServices::new(Arc::new(SequentialIds::new()), Arc::new(FixedClock(instant)))
    }

    fn ticket_context(outcome: TicketOutcome) -> OrchestratorContext {
        OrchestratorContext::new(DomainEvent::new(
            "evt-1",
            Utc::now(),
            None,
            EventPayload::TicketOutcome { ticket_id: TicketId("t1".to_owned()), outcome },
        ))
    }

    #[test]
    fn supports_only_ticket_outcomes() {
        let agent = AssistanceAgent;
        assert!(agent.supports(EventKind::TicketOutcome));
        assert!(!agent.supports(EventKind::InboundMessage));
        assert!(!agent.supports(EventKind::PromoActivated));
    }

    #[tokio::test]
    async fn not_worth_repairing_emits_approval_task_and_whatsapp_draft() {
        let agent = AssistanceAgent;
        let ctx = ticket_context(TicketOutcome::NotWorthRepairing)
            .with_customer(CustomerProfile::new("c1", "Rossi SRL", "smb").with_phone("+39333000111"));

        let result = agent.execute(&ctx, &services()).await.expect("execute");

        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.tasks[0].kind, "approval");
        assert_eq!(result.tasks[0].priority, 9);
        assert_eq!(result.tasks[0].assignee_role, "store-manager");
        assert_eq!(result.tasks[0].ticket_id.as_ref().map(|t| t.0.as_str()), Some("t1"));

        assert_eq!(result.drafts.len(), 1);
        assert!(result.drafts[0].needs_approval);
        assert_eq!(result.drafts[0].channel, Channel::Whatsapp);
        assert_eq!(result.drafts[0].recipient_ref.as_deref(), Some("+39333000111"));
        assert!(!result.notes.is_empty());
    }

    #[tokio::test]
    async fn replacement_proposal_picks_the_highest_margin_offer() {
        use crate::domain::offer::ProductOffer;

        let agent = AssistanceAgent;
        let ctx = ticket_context(TicketOutcome::NotWorthRepairing).with_offers(vec![
            ProductOffer::new("off-low", "Budget phone", "hardware").with_margin_pct(12.0),
            ProductOffer::new("off-high", "Flagship phone", "hardware").with_margin_pct(35.0),
        ]);

        let result = agent.execute(&ctx, &services()).await.expect("execute");

        assert_eq!(result.tasks[0].offer_id.as_ref().map(|o| o.0.as_str()), Some("off-high"));
        assert_eq!(
            result.drafts[0].related_offer_id.as_ref().map(|o| o.0.as_str()),
            Some("off-high")
        );
        assert!(result.drafts[0].body.contains("Flagship phone"));
    }

    #[tokio::test]
    async fn repaired_outcome_drafts_pickup_notification_without_approval_when_consented() {
        let agent = AssistanceAgent;
        let ctx = ticket_context(TicketOutcome::Repaired).with_customer(
            CustomerProfile::new("c1", "Rossi SRL", "smb")
                .with_preferred_channel(Channel::Telegram)
                .with_consent(Channel::Telegram, true),
        );

        let result = agent.execute(&ctx, &services()).await.expect("execute");

        assert!(result.tasks.is_empty());
        assert_eq!(result.drafts.len(), 1);
        assert_eq!(result.drafts[0].channel, Channel::Telegram);
        assert!(!result.drafts[0].needs_approval);
    }

    #[tokio::test]
    async fn awaiting_parts_schedules_a_follow_up() {
        let agent = AssistanceAgent;
        let ctx = ticket_context(TicketOutcome::AwaitingParts);

        let result = agent.execute(&ctx, &services()).await.expect("execute");

        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.tasks[0].kind, "follow-up");
        assert_eq!(result.tasks[0].priority, 4);
        assert!(result.drafts.is_empty());
    }
}
