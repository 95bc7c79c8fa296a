//! Energy agent: renewal workflow for expiring energy contracts.

use async_trait::async_trait;

use crate::agents::{AgentExecutionResult, AgentServices, BusinessAgent};
use crate::context::OrchestratorContext;
use crate::domain::customer::Channel;
use crate::domain::draft::CommunicationDraft;
use crate::domain::event::{EventKind, EventPayload, ServiceLine};
use crate::domain::task::TaskItem;
use crate::errors::AgentError;

#[derive(Clone, Copy, Debug, Default)]
pub struct EnergyAgent;

#[async_trait]
impl BusinessAgent for EnergyAgent {
    fn name(&self) -> &'static str {
        "energy"
    }

    fn supports(&self, kind: EventKind) -> bool {
        matches!(kind, EventKind::ContractExpiring)
    }

    async fn execute(
        &self,
        ctx: &OrchestratorContext,
        services: &AgentServices,
    ) -> Result<AgentExecutionResult, AgentError> {
        let EventPayload::ContractExpiring { contract_id, service, expires_at } =
            &ctx.event.payload
        else {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note("event payload carries no expiring contract"));
        };

        if *service != ServiceLine::Energy {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note(format!("contract {} is not an energy contract", contract_id.0)));
        }

        let mut task = TaskItem::new(
            services.ids.next("task"),
            "renewal",
            format!("Prepare energy renewal for contract {}", contract_id.0),
            "energy-desk",
            7,
            services.clock.now(),
        );
        if let Some(customer) = &ctx.customer {
            task = task.with_customer(customer.id.clone());
        }

        let channel = ctx
            .customer
            .as_ref()
            .and_then(|customer| customer.preferred_channel)
            .unwrap_or(Channel::Email);
        let mut draft = CommunicationDraft::one_to_one(
            services.ids.next("draft"),
            channel,
            format!(
                "Your energy contract {} expires on {}. We prepared a renewal with updated \
                 rates; shall we walk you through it?",
                contract_id.0,
                expires_at.format("%Y-%m-%d")
            ),
            true,
            "energy renewal proposal before contract expiry",
        );
        if let Some(customer) = &ctx.customer {
            draft = draft.with_customer(customer.id.clone());
        }

        Ok(AgentExecutionResult::new(self.name())
            .with_task(task)
            .with_draft(draft)
            .with_note(format!("energy contract {} expiring; renewal prepared", contract_id.0)))
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
    async fn expiring_energy_contract_yields_renewal_task_and_draft() {
        let agent = EnergyAgent;
        let result =
            agent.execute(&contract_context(ServiceLine::Energy), &services()).await.expect("execute");

        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.tasks[0].kind, "renewal");
        assert_eq!(result.tasks[0].priority, 7);
        assert_eq!(result.drafts.len(), 1);
        assert!(result.drafts[0].needs_approval);
        assert!(result.drafts[0].body.contains("2026-06-30"));
    }

    #[tokio::test]
    async fn non_energy_contract_is_left_to_other_agents() {
        let agent = EnergyAgent;
        let result = agent
            .execute(&contract_context(ServiceLine::Telephony), &services())
            .await
            .expect("execute");

        assert!(result.tasks.is_empty());
        assert!(result.drafts.is_empty());
        assert_eq!(result.notes.len(), 1);
    }
}
