use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

/// Outbound communication channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Whatsapp,
    Telegram,
    Social,
    Phone,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
            Self::Telegram => "telegram",
            Self::Social => "social",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub name: String,
    pub segment: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Per-channel marketing consent. Absent channels count as no consent.
    pub consents: BTreeMap<Channel, bool>,
    /// How saturated the customer already is with commercial contact,
    /// on a 0..=100 scale.
    pub commercial_saturation_score: f64,
    pub preferred_channel: Option<Channel>,
}

impl CustomerProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, segment: impl Into<String>) -> Self {
        Self {
            id: CustomerId(id.into()),
            name: name.into(),
            segment: segment.into(),
            phone: None,
            email: None,
            consents: BTreeMap::new(),
            commercial_saturation_score: 0.0,
            preferred_channel: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_consent(mut self, channel: Channel, granted: bool) -> Self {
        self.consents.insert(channel, granted);
        self
    }

    pub fn with_saturation(mut self, score: f64) -> Self {
        self.commercial_saturation_score = score;
        self
    }

    pub fn with_preferred_channel(mut self, channel: Channel) -> Self {
        self.preferred_channel = Some(channel);
        self
    }

    pub fn has_consent(&self, channel: Channel) -> bool {
        self.consents.get(&channel).copied().unwrap_or(false)
    }

    pub fn has_any_consent(&self) -> bool {
        self.consents.values().any(|granted| *granted)
    }
}
