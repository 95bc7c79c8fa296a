//! Preventivi agent: spots quote requests in inbound messages and starts
//! the estimate workflow.

use async_trait::async_trait;

use crate::agents::{AgentExecutionResult, AgentServices, BusinessAgent};
use crate::context::OrchestratorContext;
use crate::domain::draft::CommunicationDraft;
use crate::domain::event::{EventKind, EventPayload};
use crate::domain::task::TaskItem;
use crate::errors::AgentError;

#[derive(Clone, Copy, Debug, Default)]
pub struct PreventiviAgent;

fn asks_for_quote(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains("preventivo") || lowered.contains("quotazione")
}

#[async_trait]
impl BusinessAgent for PreventiviAgent {
    fn name(&self) -> &'static str {
        "preventivi"
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

        if !asks_for_quote(text) {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note("inbound message is not a quote request"));
        }

        let mut task = TaskItem::new(
            services.ids.next("task"),
            "quote-draft",
            "Prepare a quote for an inbound request",
            "sales",
            8,
            services.clock.now(),
        );
        if let Some(customer) = &ctx.customer {
            task = task.with_customer(customer.id.clone());
        }

        let mut draft = CommunicationDraft::one_to_one(
            services.ids.next("draft"),
            *channel,
            "Thanks for your request! We are preparing your quote and will send it over shortly.",
            true,
            "acknowledgement of a quote request",
        )
        .with_recipient_ref(from_ref.clone());
        if let Some(customer) = &ctx.customer {
            draft = draft.with_customer(customer.id.clone());
        }

        Ok(AgentExecutionResult::new(self.name())
            .with_task(task)
            .with_draft(draft)
            .with_note("quote request detected; estimate workflow started"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::customer::Channel;
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
                channel: Channel::Telegram,
                from_ref: "@rossi".to_owned(),
                text: text.to_owned(),
            },
        ))
    }

    #[tokio::test]
    async fn quote_request_starts_the_estimate_workflow() {
        let agent = PreventiviAgent;
        let result = agent
            .execute(&message_context("Buongiorno, vorrei un preventivo per 10 router"), &services())
            .await
            .expect("execute");

        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.tasks[0].kind, "quote-draft");
        assert_eq!(result.tasks[0].priority, 8);
        assert_eq!(result.drafts.len(), 1);
        assert_eq!(result.drafts[0].channel, Channel::Telegram);
        assert!(result.drafts[0].needs_approval);
    }

    #[tokio::test]
    async fn ordinary_message_is_ignored_with_a_note() {
        let agent = PreventiviAgent;
        let result =
            agent.execute(&message_context("a che ora chiudete?"), &services()).await.expect("execute");

        assert!(result.tasks.is_empty());
        assert!(result.drafts.is_empty());
        assert_eq!(result.notes, ["inbound message is not a quote request"]);
    }
}
