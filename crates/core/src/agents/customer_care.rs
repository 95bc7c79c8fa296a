//! Customer-care agent: every inbound message gets a follow-up task and
//! a reply draft on the same channel.

use async_trait::async_trait;

use crate::agents::{AgentExecutionResult, AgentServices, BusinessAgent};
use crate::context::OrchestratorContext;
use crate::domain::draft::CommunicationDraft;
use crate::domain::event::{EventKind, EventPayload};
use crate::domain::task::TaskItem;
use crate::errors::AgentError;

#[derive(Clone, Copy, Debug, Default)]
pub struct CustomerCareAgent;

fn looks_urgent(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains("urgente") || lowered.contains("subito")
}

#[async_trait]
impl BusinessAgent for CustomerCareAgent {
    fn name(&self) -> &'static str {
        "customer-care"
    }

    fn supports(&self, kind: EventKind) -> bool {
        matches!(kind, EventKind::InboundMessage)
    }

    async fn execute(
        &self,
        ctx: &OrchestratorContext,
        services: &AgentServices,
    ) -> Result<AgentExecutionResult, AgentError> {
        let EventPayload::InboundMessage { channel, from_ref, text } = &ctx.event.payload else {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note("event payload carries no inbound message"));
        };

        let urgent = looks_urgent(text);
        let priority = if urgent { 8 } else { 6 };

        let mut task = TaskItem::new(
            services.ids.next("task"),
            "follow-up",
            format!("Follow up inbound {channel} message"),
            "customer-care",
            priority,
            services.clock.now(),
        );
        if let Some(customer) = &ctx.customer {
            task = task.with_customer(customer.id.clone());
        }

        let consented = ctx
            .customer
            .as_ref()
            .map(|customer| customer.has_consent(*channel))
            .unwrap_or(false);
        let mut draft = CommunicationDraft::one_to_one(
            services.ids.next("draft"),
            *channel,
            "Thanks for reaching out! We received your message and will get back to you shortly.",
            !consented,
            "acknowledgement of an inbound message",
        )
        .with_recipient_ref(from_ref.clone());
        if let Some(customer) = &ctx.customer {
            draft = draft.with_customer(customer.id.clone());
        }

        let note = if urgent {
            "inbound message looks urgent; follow-up raised to priority 8"
        } else {
            "inbound message acknowledged; follow-up scheduled"
        };

        Ok(AgentExecutionResult::new(self.name()).with_task(task).with_draft(draft).with_note(note))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::customer::{Channel, CustomerProfile};
    use crate::domain::event::DomainEvent;
    use crate::ids::SequentialIds;

    fn services() -> AgentServices {
        let instant = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).single().expect("valid instant");
        AgentServices::new(Arc::new(SequentialIds::new()), Arc::new(FixedClock(instant)))
    }

    fn message_context(text: &str) -> OrchestratorContext {
        OrchestratorContext::new(DomainEvent::new(
            "evt-1",
            Utc::now(),
            None,
            EventPayload::InboundMessage {
                channel: Channel::Whatsapp,
                from_ref: "+39333000111".to_owned(),
                text: text.to_owned(),
            },
        ))
    }

    #[tokio::test]
    async fn inbound_message_gets_follow_up_and_reply_draft() {
        let agent = CustomerCareAgent;
        let result =
            agent.execute(&message_context("quando riapre il negozio?"), &services()).await.expect("execute");

        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.tasks[0].kind, "follow-up");
        assert_eq!(result.tasks[0].priority, 6);

        assert_eq!(result.drafts.len(), 1);
        assert_eq!(result.drafts[0].channel, Channel::Whatsapp);
        assert_eq!(result.drafts[0].recipient_ref.as_deref(), Some("+39333000111"));
        assert!(result.drafts[0].needs_approval);
    }

    #[tokio::test]
    async fn urgent_wording_raises_priority() {
        let agent = CustomerCareAgent;
        let result = agent
            .execute(&message_context("Ho bisogno di aiuto SUBITO"), &services())
            .await
            .expect("execute");

        assert_eq!(result.tasks[0].priority, 8);
    }

    #[tokio::test]
    async fn consent_on_the_inbound_channel_allows_auto_send() {
        let agent = CustomerCareAgent;
        let ctx = message_context("info").with_customer(
            CustomerProfile::new("c1", "Rossi SRL", "smb").with_consent(Channel::Whatsapp, true),
        );

        let result = agent.execute(&ctx, &services()).await.expect("execute");
        assert!(!result.drafts[0].needs_approval);
    }
}
