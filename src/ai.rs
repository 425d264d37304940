use std::time::Duration;

use color_eyre::eyre::OptionExt;
use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::analysis::QuizAnalysis;
use crate::models::QuizResponse;
use crate::services::assessment::InsightGenerator;

const COMPLETIONS_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const SYSTEM_PROMPT: &str = "You rewrite self-assessment results to feel personally addressed. \
You receive the quiz slug, the computed analysis as JSON, and the raw answers. \
Reply with JSON only, using exactly the fields of the analysis you were given \
(score, band, bandDescription, keyInsights, personalizedMessage, recommendedActions, nextSteps). \
Keep the same bands and the same factual claims; improve specificity and warmth.";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Rewrites a deterministic analysis with a language model when an API
/// key is configured. Every failure is reported as an error and the
/// caller serves the deterministic analysis instead, so this client is
/// never on the critical path.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl CompletionClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }
}

impl InsightGenerator for CompletionClient {
    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn personalize(
        &self,
        slug: &str,
        analysis: &QuizAnalysis,
        responses: &[QuizResponse],
    ) -> Result<QuizAnalysis> {
        let Some(api_key) = &self.api_key else {
            color_eyre::eyre::bail!("insight generation is not configured");
        };

        let prompt = format!(
            "Quiz: {slug}\n\nComputed analysis:\n{}\n\nAnswers:\n{}",
            serde_json::to_string(analysis)?,
            serde_json::to_string(responses)?,
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: 0.7,
        };

        let resp = self
            .client
            .post(COMPLETIONS_ENDPOINT)
            .bearer_auth(api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("completions API error: {status} - {text}");
            color_eyre::eyre::bail!("completions API returned {status}");
        }

        let completion: ChatResponse = resp.json().await?;
        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_eyre("completion had no choices")?;

        let mut enriched: QuizAnalysis = serde_json::from_str(strip_code_fence(content))?;

        // The model rewrites copy; the computed score stays authoritative.
        enriched.score = analysis.score;

        Ok(enriched)
    }
}

/// Models often wrap JSON in a markdown fence despite instructions.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
