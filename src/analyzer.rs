use crate::config::AnalyzerConfig;
use crate::error::Error;
use crate::results::{Analysis, ProductRecord};
use serde_json::json;
use std::time::Duration;

/// Attempts per request, with exponential backoff between them
const MAX_RETRIES: u32 = 3;

/// Remote calls can be slow; allow a full minute per attempt
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const SYSTEM_PROMPT: &str = "你是一个帮助分析产品信息的智能助手。";

/// Line prefixes the model is asked to answer with
const FEATURES_PREFIX: &str = "特点：";
const APPLICATIONS_PREFIX: &str = "应用场景：";

/// Client for the remote summarization endpoint.
///
/// Sends one chat-completion request per product and parses the two-line
/// answer back into an [`Analysis`].
pub struct Analyzer {
    client: reqwest::Client,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, config })
    }

    /// Summarize one product. Failures are logged and produce an empty
    /// analysis; the pipeline never aborts on the analyzer's account.
    pub async fn analyze(&self, record: &ProductRecord) -> Analysis {
        match self.request_summary(&build_prompt(record)).await {
            Ok(analysis) => analysis,
            Err(e) => {
                ::log::error!("Analysis of {} failed: {}", record.name, e);
                Analysis {
                    features: String::new(),
                    applications: String::new(),
                }
            }
        }
    }

    async fn request_summary(&self, prompt: &str) -> Result<Analysis, Error> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "temperature": 0.7,
            "max_tokens": 500
        });

        let mut backoff = Duration::from_secs(1);
        let mut last_error: Option<Error> = None;

        for attempt in 1..=MAX_RETRIES {
            if attempt > 1 {
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            ::log::debug!("Analyzer request attempt {}/{}", attempt, MAX_RETRIES);

            match self.call_api(&payload).await {
                Ok(content) => return Ok(parse_answer(&content)),
                Err(e) => {
                    ::log::warn!("Analyzer attempt {}/{} failed: {}", attempt, MAX_RETRIES, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| Error::AnalyzerResponse("no attempts were made".to_string())))
    }

    async fn call_api(&self, payload: &serde_json::Value) -> Result<String, Error> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        body["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::AnalyzerResponse(body.to_string()))
    }
}

/// Build the two-task prompt from the record's extracted fields
fn build_prompt(record: &ProductRecord) -> String {
    format!(
        "请分析以下无人机产品信息，并完成两个任务：\n\
         1. 用一句话总结该产品的特点\n\
         2. 用一句话描述该产品的主要应用场景\n\n\
         产品名称：{}\n\n\
         产品描述：\n{}\n\n\
         技术规格：\n{}\n\n\
         请按照以下格式回答：\n\
         {}[一句话总结产品特点]\n\
         {}[一句话描述主要应用场景]",
        record.name,
        record.description,
        record.tech_specs.to_text(),
        FEATURES_PREFIX,
        APPLICATIONS_PREFIX,
    )
}

/// Pick the two expected lines out of the model's reply; unmatched lines
/// are ignored, missing lines stay empty
fn parse_answer(reply: &str) -> Analysis {
    let mut features = String::new();
    let mut applications = String::new();

    for line in reply.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(FEATURES_PREFIX) {
            features = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(APPLICATIONS_PREFIX) {
            applications = rest.trim().to_string();
        }
    }

    Analysis {
        features,
        applications,
    }
}
