//! Content agent: turns an activated promo into a broadcast draft and a
//! content-calendar task.

use async_trait::async_trait;

use crate::agents::{AgentExecutionResult, AgentServices, BusinessAgent};
use crate::context::OrchestratorContext;
use crate::domain::customer::Channel;
use crate::domain::draft::CommunicationDraft;
use crate::domain::event::{EventKind, EventPayload};
use crate::domain::task::TaskItem;
use crate::errors::AgentError;

#[derive(Clone, Copy, Debug, Default)]
pub struct ContentAgent;

#[async_trait]
impl BusinessAgent for ContentAgent {
    fn name(&self) -> &'static str {
        "content"
    }

    fn supports(&self, kind: EventKind) -> bool {
        matches!(kind, EventKind::PromoActivated)
    }

    async fn execute(
        &self,
        ctx: &OrchestratorContext,
        services: &AgentServices,
    ) -> Result<AgentExecutionResult, AgentError> {
        let EventPayload::PromoActivated { offer_id } = &ctx.event.payload else {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note("event payload carries no promo"));
        };

        let offer = ctx.find_offer(offer_id);
        let promo_name =
            offer.map(|offer| offer.name.clone()).unwrap_or_else(|| offer_id.0.clone());

        let draft = CommunicationDraft::broadcast(
            services.ids.next("draft"),
            Channel::Social,
            format!("New promo in store: {promo_name}. Come and find out more!"),
            "broadcast announcement for an activated promo",
        )
        .with_subject(format!("Promo: {promo_name}"))
        .with_related_offer(offer_id.clone());

        let task = TaskItem::new(
            services.ids.next("task"),
            "content-calendar",
            format!("Plan social coverage for promo {promo_name}"),
            "marketing",
            3,
            services.clock.now(),
        )
        .with_offer(offer_id.clone());

        Ok(AgentExecutionResult::new(self.name())
            .with_draft(draft)
            .with_task(task)
            .with_note(format!("broadcast drafted for promo {promo_name}")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::draft::Audience;
    use crate::domain::event::DomainEvent;
    use crate::domain::offer::{OfferId, ProductOffer};
    use crate::ids::SequentialIds;

    fn services() -> AgentServices {
        let instant = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).single().expect("valid instant");
        AgentServices::new(Arc::new(SequentialIds::new()), Arc::new(FixedClock(instant)))
    }

    fn promo_context() -> OrchestratorContext {
        OrchestratorContext::new(DomainEvent::new(
            "evt-1",
            Utc::now(),
            None,
            EventPayload::PromoActivated { offer_id: OfferId("off-promo".to_owned()) },
        ))
        .with_offers(vec![ProductOffer::new("off-promo", "Fibra Casa 2.5G", "connectivity")])
    }

    #[test]
    fn supports_only_promo_activation() {
        let agent = ContentAgent;
        assert!(agent.supports(EventKind::PromoActivated));
        assert!(!agent.supports(EventKind::InboundMessage));
    }

    #[tokio::test]
    async fn promo_yields_broadcast_draft_needing_approval() {
        let agent = ContentAgent;
        let result = agent.execute(&promo_context(), &services()).await.expect("execute");

        assert_eq!(result.drafts.len(), 1);
        assert_eq!(result.drafts[0].audience, Audience::OneToMany);
        assert_eq!(result.drafts[0].channel, Channel::Social);
        assert!(result.drafts[0].needs_approval);
        assert!(result.drafts[0].body.contains("Fibra Casa 2.5G"));

        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.tasks[0].kind, "content-calendar");
        assert_eq!(result.tasks[0].priority, 3);
    }
}
