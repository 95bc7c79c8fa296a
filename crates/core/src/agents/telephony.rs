//! Telephony agent: retention workflow for expiring telephony contracts.

use async_trait::async_trait;

use crate::agents::{AgentExecutionResult, AgentServices, BusinessAgent};
use crate::context::OrchestratorContext;
use crate::domain::customer::Channel;
use crate::domain::draft::CommunicationDraft;
use crate::domain::event::{EventKind, EventPayload, ServiceLine};
use crate::domain::task::TaskItem;
use crate::errors::AgentError;

#[derive(Clone, Copy, Debug, Default)]
pub struct TelephonyAgent;

#[async_trait]
impl BusinessAgent for TelephonyAgent {
    fn name(&self) -> &'static str {
        "telephony"
    }

    fn supports(&self, kind: EventKind) -> bool {
        matches!(kind, EventKind::ContractExpiring)
    }

    async fn execute(
        &self,
        ctx: &OrchestratorContext,
        services: &AgentServices,
    ) -> Result<AgentExecutionResult, AgentError> {
        let EventPayload::ContractExpiring { contract_id, service, .. } = &ctx.event.payload
        else {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note("event payload carries no expiring contract"));
        };

        if *service != ServiceLine::Telephony {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note(format!("contract {} is not a telephony contract", contract_id.0)));
        }

        let mut task = TaskItem::new(
            services.ids.next("task"),
            "retention",
            format!("Call customer before telephony contract {} expires", contract_id.0),
            "telephony-desk",
            8,
            services.clock.now(),
        );
        if let Some(customer) = &ctx.customer {
            task = task.with_customer(customer.id.clone());
        }

        let channel = ctx
            .customer
            .as_ref()
            .and_then(|customer| customer.preferred_channel)
            .unwrap_or(Channel::Whatsapp);
        let mut draft = CommunicationDraft::one_to_one(
            services.ids.next("draft"),
            channel,
            format!(
                "Your telephony plan (contract {}) is about to expire. We have a better rate \
                 ready for you; can we call you to go through it?",
                contract_id.0
            ),
            true,
            "win-back proposal before telephony contract expiry",
        );
        if let Some(customer) = &ctx.customer {
            draft = draft.with_customer(customer.id.clone());
        }

        Ok(AgentExecutionResult::new(self.name())
            .with_task(task)
            .with_draft(draft)
            .with_note(format!("telephony contract {} expiring; retention started", contract_id.0)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::event::{ContractId, DomainEvent};
    use crate::ids::SequentialIds;

    fn services() -> AgentServices {
        let instant = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).single().expect("valid instant");
        AgentServices::new(Arc::new(SequentialIds::new()), Arc::new(FixedClock(instant)))
    }

    fn contract_context(service: ServiceLine) -> OrchestratorContext {
        let expires_at =
            Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).single().expect("valid instant");
        OrchestratorContext::new(DomainEvent::new(
            "evt-1",
            Utc::now(),
            None,
            EventPayload::ContractExpiring {
                contract_id: ContractId("ctr-9".to_owned()),
                service,
                expires_at,
            },
        ))
    }

    #[tokio::test]
    async fn expiring_telephony_contract_starts_retention() {
        let agent = TelephonyAgent;
        let result = agent
            .execute(&contract_context(ServiceLine::Telephony), &services())
            .await
            .expect("execute");

        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.tasks[0].kind, "retention");
        assert_eq!(result.tasks[0].priority, 8);
        assert_eq!(result.drafts.len(), 1);
        assert!(result.drafts[0].needs_approval);
    }

    #[tokio::test]
    async fn energy_contract_is_left_to_the_energy_agent() {
        let agent = TelephonyAgent;
        let result =
            agent.execute(&contract_context(ServiceLine::Energy), &services()).await.expect("execute");

        assert!(result.tasks.is_empty());
        assert!(result.drafts.is_empty());
    }
}
