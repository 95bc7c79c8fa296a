//! Multi-factor scoring for action candidates.
//!
//! Pure and deterministic: the same `(context, candidate)` pair always
//! produces the same breakdown. Missing inputs degrade to documented
//! defaults, never to an error.

use serde::{Deserialize, Serialize};

use crate::context::OrchestratorContext;
use crate::domain::action::{ActionCandidate, META_CONTEXT_FIT, META_PROFILE_FIT};

/// Default weights applied to each score component.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    context_fit: 0.20,
    profile_fit: 0.20,
    objective_boost: 0.15,
    margin: 0.10,
    stock: 0.10,
    channel_consent: 0.10,
    saturation: 0.05,
    confidence: 0.10,
};

/// Boost applied when an active objective prefers the candidate's offer.
const OBJECTIVE_BOOST: f64 = 0.25;

/// Weights for scoring components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub context_fit: f64,
    pub profile_fit: f64,
    pub objective_boost: f64,
    pub margin: f64,
    pub stock: f64,
    pub channel_consent: f64,
    /// Applied to the inverse of the saturation penalty.
    pub saturation: f64,
    pub confidence: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Named components and total of a candidate's fitness score.
/// Components are in `[0, 1]`; `total` is the weighted sum rounded to
/// four decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub context_fit: f64,
    pub profile_fit: f64,
    pub objective_boost: f64,
    pub margin_score: f64,
    pub stock_score: f64,
    pub channel_consent_score: f64,
    pub saturation_penalty: f64,
    pub confidence_score: f64,
    pub total: f64,
}

/// Score calculator for action candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEngine {
    weights: ScoringWeights,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Compute the full breakdown for one candidate against the run
    /// context. Defaults when inputs are missing: context fit 0.6,
    /// profile fit 0.5, margin 0.3, stock 0.2, channel consent 0.4,
    /// saturation penalty 0.1.
    pub fn score(&self, ctx: &OrchestratorContext, candidate: &ActionCandidate) -> ScoreBreakdown {
        let context_fit = clamp(candidate.metadata.get(META_CONTEXT_FIT).copied().unwrap_or(0.6));
        let profile_fit = clamp(candidate.metadata.get(META_PROFILE_FIT).copied().unwrap_or(0.5));

        let objective_boost = match &candidate.offer_id {
            Some(offer_id)
                if ctx
                    .active_objectives
                    .iter()
                    .any(|objective| objective.active && objective.prefers(offer_id)) =>
            {
                OBJECTIVE_BOOST
            }
            _ => 0.0,
        };

        let offer = candidate.offer_id.as_ref().and_then(|offer_id| ctx.find_offer(offer_id));

        let margin_score = offer
            .and_then(|offer| offer.margin_pct)
            .map(|margin_pct| clamp(margin_pct / 40.0))
            .unwrap_or(0.3);

        let stock_score = offer
            .and_then(|offer| offer.stock_qty)
            .map(|stock_qty| clamp((f64::from(stock_qty) / 20.0).min(1.0)))
            .unwrap_or(0.2);

        let channel_consent_score = match (candidate.channel, &ctx.customer) {
            (Some(channel), Some(customer)) => {
                if customer.has_consent(channel) {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.4,
        };

        let saturation_penalty = ctx
            .customer
            .as_ref()
            .map(|customer| clamp(customer.commercial_saturation_score / 100.0))
            .unwrap_or(0.1);

        let confidence_score = clamp(candidate.confidence);

        let total = context_fit * self.weights.context_fit
            + profile_fit * self.weights.profile_fit
            + objective_boost * self.weights.objective_boost
            + margin_score * self.weights.margin
            + stock_score * self.weights.stock
            + channel_consent_score * self.weights.channel_consent
            + (1.0 - saturation_penalty) * self.weights.saturation
            + confidence_score * self.weights.confidence;

        ScoreBreakdown {
            context_fit,
            profile_fit,
            objective_boost,
            margin_score,
            stock_score,
            channel_consent_score,
            saturation_penalty,
            confidence_score,
            total: round4(total),
        }
    }
}

fn clamp(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
