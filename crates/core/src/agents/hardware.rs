//! Hardware agent: keeps an eye on hardware stock whenever commercial
//! activity (promos, invoices) touches the catalog.

use async_trait::async_trait;

use crate::agents::{AgentExecutionResult, AgentServices, BusinessAgent};
use crate::context::OrchestratorContext;
use crate::domain::event::EventKind;
use crate::domain::task::TaskItem;
use crate::errors::AgentError;

const LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Clone, Copy, Debug, Default)]
pub struct HardwareAgent;

#[async_trait]
impl BusinessAgent for HardwareAgent {
    fn name(&self) -> &'static str {
        "hardware"
    }

    fn supports(&self, kind: EventKind) -> bool {
        matches!(kind, EventKind::PromoActivated | EventKind::InvoiceIngested)
    }

    async fn execute(
        &self,
        ctx: &OrchestratorContext,
        services: &AgentServices,
    ) -> Result<AgentExecutionResult, AgentError> {
        let low_stock: Vec<&str> = ctx
            .active_offers
            .iter()
            .filter(|offer| {
                offer.active
                    && offer.category == "hardware"
                    && offer.stock_qty.is_some_and(|qty| qty < LOW_STOCK_THRESHOLD)
            })
            .map(|offer| offer.name.as_str())
            .collect();

        if low_stock.is_empty() {
            return Ok(AgentExecutionResult::new(self.name())
                .with_note("hardware stock levels are healthy"));
        }

        let task = TaskItem::new(
            services.ids.next("task"),
            "restock-review",
            format!("Review restock for: {}", low_stock.join(", ")),
            "warehouse",
            5,
            services.clock.now(),
        );

        Ok(AgentExecutionResult::new(self.name())
            .with_task(task)
            .with_note(format!("{} hardware offer(s) below stock threshold", low_stock.len())))
    }
}
