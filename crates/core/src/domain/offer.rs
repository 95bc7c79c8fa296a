use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId(pub String);

/// A product or service the business can currently propose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductOffer {
    pub id: OfferId,
    pub name: String,
    pub category: String,
    pub margin_pct: Option<f64>,
    pub stock_qty: Option<u32>,
    pub active: bool,
}

impl ProductOffer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: OfferId(id.into()),
            name: name.into(),
            category: category.into(),
            margin_pct: None,
            stock_qty: None,
            active: true,
        }
    }

    pub fn with_margin_pct(mut self, margin_pct: f64) -> Self {
        self.margin_pct = Some(margin_pct);
        self
    }

    pub fn with_stock_qty(mut self, stock_qty: u32) -> Self {
        self.stock_qty = Some(stock_qty);
        self
    }
}
