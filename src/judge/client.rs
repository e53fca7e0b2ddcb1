use std::future::Future;
use std::time::Duration;

use genai::chat::{ChatMessage, ChatOptions, ChatRequest, ReasoningEffort};
use genai::resolver::{AuthData, AuthResolver};
use genai::{Client, ModelIden};
use tracing::{debug, error};

use crate::config::GateConfig;

use super::error::{JudgeError, JudgeResult};
use super::prompt::{system_prompt, user_prompt};
use super::types::JudgeRequest;

/// Transport to the external judgment service.
pub trait JudgeClient: Send + Sync {
    /// Sends one batch and returns the raw model output.
    fn judge(&self, request: &JudgeRequest) -> impl Future<Output = JudgeResult<String>> + Send;
}

/// Judge backed by any chat provider `genai` supports.
pub struct GenaiJudgeClient {
    client: Client,
    model: String,
    timeout: Duration,
    options: ChatOptions,
}

impl std::fmt::Debug for GenaiJudgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiJudgeClient")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GenaiJudgeClient {
    /// Builds a client from gate configuration.
    ///
    /// An explicit `api_key` overrides the provider's own environment variable.
    pub fn from_config(config: &GateConfig) -> Self {
        let client = match config.credential() {
            Some(key) => {
                let key = key.to_string();
                let auth_resolver = AuthResolver::from_resolver_fn(
                    move |_model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                        Ok(Some(AuthData::from_single(key.clone())))
                    },
                );
                Client::builder().with_auth_resolver(auth_resolver).build()
            }
            None => Client::default(),
        };

        let options = ChatOptions::default()
            .with_temperature(0.0)
            .with_max_tokens(config.max_tokens)
            .with_reasoning_effort(reasoning_effort(&config.reasoning_effort));

        Self {
            client,
            model: config.model.clone(),
            timeout: config.timeout,
            options,
        }
    }
}

impl JudgeClient for GenaiJudgeClient {
    async fn judge(&self, request: &JudgeRequest) -> JudgeResult<String> {
        let chat_req = ChatRequest::new(vec![
            ChatMessage::system(system_prompt(&request.criteria, &request.brief_rules)),
            ChatMessage::user(user_prompt(request)?),
        ]);

        debug!(
            model = %self.model,
            items = request.items.len(),
            "Sending judge batch"
        );

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .exec_chat(&self.model, chat_req, Some(&self.options)),
        )
        .await
        .map_err(|_| JudgeError::Timeout {
            timeout: self.timeout,
        })?
        .map_err(|e| {
            error!("Judge provider error: {}", e);
            JudgeError::Provider {
                reason: e.to_string(),
            }
        })?;

        Ok(response.first_text().unwrap_or_default().to_string())
    }
}

fn reasoning_effort(level: &str) -> ReasoningEffort {
    match level {
        "high" => ReasoningEffort::High,
        "medium" => ReasoningEffort::Medium,
        _ => ReasoningEffort::Low,
    }
}
