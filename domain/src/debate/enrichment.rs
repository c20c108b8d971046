//! Optional text enrichment of deterministic arguments.
//!
//! An enrichment service may reword an argument's reasoning and cite extra
//! evidence. It never changes position or confidence: a reply that argues
//! a different stance is discarded whole.
//!
//! # Accepted shape
//!
//! ```json
//! {"position": "RELIEF", "reasoning": "...", "evidence": ["..."], "confidence": 80}
//! ```
//!
//! `vote` is accepted in place of `position`. The object may be wrapped in
//! prose or a code fence; the first `{` through the last `}` is parsed.

use super::argument::AgentArgument;
use super::stance::RoleStance;
use serde_json::Value;

/// A parsed enrichment reply
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub stance: RoleStance,
    pub reasoning: String,
    pub evidence: Vec<String>,
    pub confidence: f64,
}

impl Enrichment {
    /// Merge into `argument`, or `None` if the reply argues a different stance
    pub fn apply(self, argument: &AgentArgument) -> Option<AgentArgument> {
        if self.stance != argument.position {
            return None;
        }

        let mut evidence = argument.evidence.clone();
        for item in self.evidence {
            if !evidence.contains(&item) {
                evidence.push(item);
            }
        }

        Some(AgentArgument {
            reasoning: self.reasoning,
            evidence,
            ..argument.clone()
        })
    }
}

/// Parse an enrichment reply. Anything that does not fit the shape is `None`.
pub fn parse_enrichment_response(response: &str) -> Option<Enrichment> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end < start {
        return None;
    }

    let parsed: Value = serde_json::from_str(&response[start..=end]).ok()?;

    let stance = parsed
        .get("position")
        .or_else(|| parsed.get("vote"))
        .and_then(Value::as_str)?
        .parse::<RoleStance>()
        .ok()?;

    let reasoning = parsed.get("reasoning").and_then(Value::as_str)?.trim();
    if reasoning.is_empty() {
        return None;
    }

    let confidence = parsed.get("confidence").and_then(Value::as_f64)?;
    if !(0.0..=100.0).contains(&confidence) {
        return None;
    }

    let evidence = match parsed.get("evidence") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?,
        Some(_) => return None,
    };

    Some(Enrichment {
        stance,
        reasoning: reasoning.to_string(),
        evidence,
        confidence,
    })
}
