use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::{
        entities::{ChatMessage, ImageInput, ToolSchema},
        ports::LLMClient,
    },
};

/// Client for an OpenAI-compatible chat-completions gateway.
#[derive(Debug, Clone)]
pub struct GatewayLLMClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<RequestMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<Value>,
}

#[derive(Debug, Serialize)]
struct RequestMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: FunctionDeclaration,
}

#[derive(Debug, Serialize)]
struct FunctionDeclaration {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    #[allow(dead_code)]
    name: String,
    arguments: String,
}

impl From<ChatMessage> for RequestMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            role: message.role.as_str(),
            content: MessageContent::Text(message.content),
        }
    }
}

impl From<ToolSchema> for Tool {
    fn from(tool: ToolSchema) -> Self {
        Self {
            kind: "function",
            function: FunctionDeclaration {
                name: tool.name,
                description: tool.description,
                parameters: tool.parameters,
            },
        }
    }
}

impl CompletionResponse {
    fn content(self) -> Result<String, CoreError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                tracing::error!("Gateway response has no message content");
                CoreError::ExternalServiceError("No response from LLM".to_string())
            })
    }

    fn tool_arguments(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.tool_calls)
            .and_then(|calls| calls.into_iter().next())
            .map(|call| call.function.arguments)
    }
}

impl GatewayLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.api_key().map(str::to_string),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            client: Client::new(),
        }
    }

    fn request(&self, messages: Vec<RequestMessage>) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages,
            tools: None,
            tool_choice: None,
        }
    }

    async fn call_gateway(&self, request: CompletionRequest) -> Result<CompletionResponse, CoreError> {
        let api_key = self.api_key.as_deref().ok_or(CoreError::MissingCredential)?;
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %request.model, messages = request.messages.len(), "Calling LLM gateway");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("LLM gateway request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("AI API error: {} - {}", status, error_text);
            return Err(CoreError::Upstream {
                status: status.as_u16(),
            });
        }

        response.json::<CompletionResponse>().await.map_err(|e| {
            tracing::error!("Failed to parse gateway response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }
}

impl LLMClient for GatewayLLMClient {
    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate_text(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
        let request = self.request(messages.into_iter().map(RequestMessage::from).collect());
        self.call_gateway(request).await?.content()
    }

    async fn generate_with_tool(
        &self,
        messages: Vec<ChatMessage>,
        tool: ToolSchema,
    ) -> Result<Option<String>, CoreError> {
        let tool_choice = json!({ "type": "function", "function": { "name": tool.name } });

        let mut request = self.request(messages.into_iter().map(RequestMessage::from).collect());
        request.tools = Some(vec![Tool::from(tool)]);
        request.tool_choice = Some(tool_choice);

        Ok(self.call_gateway(request).await?.tool_arguments())
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImageInput,
    ) -> Result<String, CoreError> {
        let message = RequestMessage {
            role: "user",
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: prompt },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_url(),
                    },
                },
            ]),
        };

        self.call_gateway(self.request(vec![message])).await?.content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> LLMConfig {
        LLMConfig {
            api_key: api_key.map(str::to_string),
            base_url: "http://127.0.0.1:9/v1/".to_string(),
            model: "google/gemini-2.5-flash".to_string(),
        }
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(!GatewayLLMClient::new(config(Some("  "))).has_credentials());
        assert!(GatewayLLMClient::new(config(Some("key"))).has_credentials());
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let client = GatewayLLMClient::new(config(None));
        let err = client
            .generate_text(vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::MissingCredential);
    }

    #[test]
    fn test_tool_request_shape() {
        let client = GatewayLLMClient::new(config(Some("key")));
        let mut request = client.request(vec![RequestMessage::from(ChatMessage::system("sys"))]);
        request.tools = Some(vec![Tool::from(ToolSchema {
            name: "create_diet_guide".to_string(),
            description: "guide".to_string(),
            parameters: json!({ "type": "object" }),
        })]);
        request.tool_choice = Some(json!({ "type": "function", "function": { "name": "create_diet_guide" } }));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "google/gemini-2.5-flash");
        assert_eq!(body["messages"][0], json!({ "role": "system", "content": "sys" }));
        assert_eq!(body["tools"][0]["type"], "function");
        assert_eq!(body["tools"][0]["function"]["name"], "create_diet_guide");
        assert_eq!(body["tool_choice"]["function"]["name"], "create_diet_guide");
    }

    #[test]
    fn test_image_part_shape() {
        let part = ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: "data:image/png;base64,AAAA".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&part).unwrap(),
            json!({ "type": "image_url", "image_url": { "url": "data:image/png;base64,AAAA" } })
        );
    }

    #[test]
    fn test_plain_request_omits_tools() {
        let client = GatewayLLMClient::new(config(Some("key")));
        let body = serde_json::to_value(client.request(Vec::new())).unwrap();
        assert!(body.get("tools").is_none());
        assert!(body.get("tool_choice").is_none());
    }

    #[test]
    fn test_response_extraction() {
        let with_tool: CompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": {
                "content": null,
                "tool_calls": [{ "id": "1", "type": "function",
                    "function": { "name": "suggest_enhancements", "arguments": "{\"additions\":[]}" } }]
            } }]
        }))
        .unwrap();
        assert_eq!(with_tool.tool_arguments().as_deref(), Some("{\"additions\":[]}"));

        let text_only: CompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Pasta" } }]
        }))
        .unwrap();
        assert_eq!(text_only.tool_arguments(), None);

        let empty: CompletionResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(empty.content().is_err());
    }
}
