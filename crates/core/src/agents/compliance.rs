//! Compliance agent: flags overdue invoices and missing marketing consent.

use async_trait::async_trait;

use crate::agents::{AgentExecutionResult, AgentServices, BusinessAgent};
use crate::context::OrchestratorContext;
use crate::domain::event::{EventKind, EventPayload};
use crate::domain::task::TaskItem;
use crate::errors::AgentError;

#[derive(Clone, Copy, Debug, Default)]
pub struct ComplianceAgent;

#[async_trait]
impl BusinessAgent for ComplianceAgent {
    fn name(&self) -> &'static str {
        "compliance"
    }

    fn supports(&self, kind: EventKind) -> bool {
        matches!(kind, EventKind::InvoiceIngested | EventKind::InboundMessage)
    }

    async fn execute(
        &self,
        ctx: &OrchestratorContext,
        services: &AgentServices,
    ) -> Result<AgentExecutionResult, AgentError> {
        let mut result = AgentExecutionResult::new(self.name());

        if let EventPayload::InvoiceIngested { invoice_id, amount, overdue: true } =
            &ctx.event.payload
        {
            let mut task = TaskItem::new(
                services.ids.next("task"),
                "compliance-review",
                format!("Review overdue invoice {invoice_id} ({amount:.2} EUR)"),
                "back-office",
                7,
                services.clock.now(),
            );
            if let Some(customer) = &ctx.customer {
                task = task.with_customer(customer.id.clone());
            }
            result = result
                .with_task(task)
                .with_note(format!("invoice {invoice_id} is overdue; review task opened"));
        }

        if let Some(customer) = &ctx.customer {
            if !customer.has_any_consent() {
                let task = TaskItem::new(
                    services.ids.next("task"),
                    "consent-review",
                    format!("Collect marketing consent for {}", customer.name),
                    "back-office",
                    5,
                    services.clock.now(),
                )
                .with_customer(customer.id.clone());
                result = result
                    .with_task(task)
                    .with_note("customer has no marketing consent on any channel");
            }
        }

        if result.tasks.is_empty() {
            result = result.with_note("no compliance findings");
        }
        Ok(result)
    }
}
