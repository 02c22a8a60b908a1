//! Generative workload narration backed by an external text-generation API
//!
//! The external service is treated as an opaque prompt-in/text-out call with
//! a bounded timeout and a single attempt. Every failure path degrades to
//! the heuristic narrator; narration errors never reach the schedule
//! contract.

use super::{prompts, AdviceContext, HeuristicNarrator, NarrationSource, Narrator, WorkloadSummary};
use crate::core::config::NarratorConfig;
use crate::core::error::NarrationError;
use crate::core::models::Catalog;
use crate::core::planner::ScheduleSlot;
use log::warn;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

/// Workload analysis as requested from the model
#[derive(Debug, Deserialize)]
struct RawSummary {
    difficulty_rating: u8,
    weekly_hours: String,
    tips: Tips,
    balance: String,
}

/// Models sometimes return a single tip string instead of an array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Tips {
    One(String),
    Many(Vec<String>),
}

impl Tips {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(tip) => vec![tip],
            Self::Many(tips) => tips,
        }
    }
}

/// Narrator that calls the external text-generation service
pub struct GenerativeNarrator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    fallback: HeuristicNarrator,
}

impl GenerativeNarrator {
    /// Create a narrator from a resolved credential and configuration
    ///
    /// # Errors
    /// Returns [`NarrationError::ServiceUnavailable`] if the HTTP client
    /// cannot be constructed
    pub fn new(api_key: String, config: &NarratorConfig) -> Result<Self, NarrationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            fallback: HeuristicNarrator::default(),
        })
    }

    /// Send a prompt to the text-generation endpoint and return the reply text
    ///
    /// One attempt, bounded by the client timeout. No retries: the fallback
    /// narrator is cheaper than a second network round trip.
    fn generate(&self, prompt: &str) -> Result<String, NarrationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NarrationError::ServiceUnavailable(format!(
                "status {status}: {body}"
            )));
        }

        let reply: GenerateResponse = response
            .json()
            .map_err(|e| NarrationError::InvalidResponse(e.to_string()))?;

        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| NarrationError::InvalidResponse("empty candidate list".to_string()))
    }
}

impl Narrator for GenerativeNarrator {
    fn narrate(&self, catalog: &Catalog, slot: &ScheduleSlot) -> WorkloadSummary {
        let prompt = prompts::workload_prompt(catalog, slot);
        match self.generate(&prompt).and_then(|text| parse_summary(&text)) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("semester {} narration degraded to heuristic: {e}", slot.semester);
                self.fallback.narrate(catalog, slot)
            }
        }
    }

    fn advice(
        &self,
        catalog: &Catalog,
        slot: &ScheduleSlot,
        ctx: &AdviceContext<'_>,
    ) -> Option<String> {
        let prompt = prompts::advice_prompt(catalog, slot, ctx);
        match self.generate(&prompt) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Err(e) => {
                warn!("semester {} guidance skipped: {e}", slot.semester);
                None
            }
        }
    }
}

/// Parse the model's reply into a workload summary
///
/// The reply must be a JSON object (optionally wrapped in code fences) with
/// the keys requested by the prompt.
fn parse_summary(text: &str) -> Result<WorkloadSummary, NarrationError> {
    let body = strip_code_fences(text);
    let raw: RawSummary =
        serde_json::from_str(body).map_err(|e| NarrationError::InvalidResponse(e.to_string()))?;

    let mut tips: Vec<String> = raw
        .tips
        .into_vec()
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .collect();
    if tips.is_empty() {
        return Err(NarrationError::InvalidResponse(
            "no study tips in response".to_string(),
        ));
    }
    tips.truncate(3);

    Ok(WorkloadSummary {
        difficulty: raw.difficulty_rating.clamp(1, 10),
        weekly_hours: raw.weekly_hours,
        tips,
        balance: raw.balance,
        source: NarrationSource::Generative,
    })
}

/// Remove a surrounding Markdown code fence, with or without a language tag
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip an optional language tag on the opening fence line
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let rest = rest.trim_start();
    rest.strip_suffix("```").map_or(rest, str::trim_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Level};

    const REPLY: &str = r#"{
        "difficulty_rating": 7,
        "weekly_hours": "20-25 hours",
        "tips": ["Start early", "Join a study group"],
        "balance": "A demanding but manageable semester."
    }"#;

    #[test]
    fn test_parse_summary() {
        let summary = parse_summary(REPLY).expect("should parse");

        assert_eq!(summary.difficulty, 7);
        assert_eq!(summary.weekly_hours, "20-25 hours");
        assert_eq!(summary.tips.len(), 2);
        assert_eq!(summary.source, NarrationSource::Generative);
    }

    #[test]
    fn test_parse_summary_fenced() {
        let fenced = format!("```json\n{REPLY}\n```");
        let summary = parse_summary(&fenced).expect("should parse fenced reply");
        assert_eq!(summary.difficulty, 7);
    }

    #[test]
    fn test_parse_summary_single_tip_string() {
        let reply = r#"{"difficulty_rating": 4, "weekly_hours": "12 hours", "tips": "Pace yourself", "balance": "Light."}"#;
        let summary = parse_summary(reply).unwrap();
        assert_eq!(summary.tips, vec!["Pace yourself".to_string()]);
    }

    #[test]
    fn test_parse_summary_clamps_difficulty() {
        let reply = r#"{"difficulty_rating": 99, "weekly_hours": "40 hours", "tips": ["Sleep"], "balance": "Overloaded."}"#;
        let summary = parse_summary(reply).unwrap();
        assert_eq!(summary.difficulty, 10);
    }

    #[test]
    fn test_parse_summary_truncates_tips() {
        let reply = r#"{"difficulty_rating": 5, "weekly_hours": "15 hours", "tips": ["a", "b", "c", "d", "e"], "balance": "Fine."}"#;
        let summary = parse_summary(reply).unwrap();
        assert_eq!(summary.tips.len(), 3);
    }

    #[test]
    fn test_parse_summary_rejects_prose() {
        let result = parse_summary("This semester looks pretty hard, good luck!");
        assert!(matches!(result, Err(NarrationError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_summary_rejects_empty_tips() {
        let reply = r#"{"difficulty_rating": 5, "weekly_hours": "15 hours", "tips": [], "balance": "Fine."}"#;
        let result = parse_summary(reply);
        assert!(matches!(result, Err(NarrationError::InvalidResponse(_))));
    }

    #[test]
    fn test_unreachable_service_degrades_to_heuristic() {
        // Nothing listens on port 1; the connection is refused immediately
        let config = NarratorConfig {
            api_key: String::new(),
            model: "test-model".to_string(),
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        };
        let narrator =
            GenerativeNarrator::new("test-key".to_string(), &config).expect("client builds");

        let mut catalog = Catalog::new();
        catalog.add_course(
            "CS101".to_string(),
            Course::new("Intro to Programming".to_string(), Level::Freshman, 4),
        );
        let mut slot = ScheduleSlot::new(1);
        slot.add_course("CS101".to_string(), 4);
        slot.under_filled = true;

        // Narration still succeeds, via the heuristic fallback
        let summary = narrator.narrate(&catalog, &slot);
        assert_eq!(summary.source, NarrationSource::Heuristic);
        assert!((1..=10).contains(&summary.difficulty));
        assert!(!summary.tips.is_empty());
        assert!(!summary.balance.is_empty());

        // Guidance is skipped, not an error
        let ctx = AdviceContext {
            career: None,
            interests: "",
            completed: &[],
            remaining_semesters: 7,
        };
        assert!(narrator.advice(&catalog, &slot, &ctx).is_none());
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
    }
}
