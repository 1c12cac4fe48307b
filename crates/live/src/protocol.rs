//! Types for the live session wire format.
//!
//! These types match the JSON messages exchanged with a multimodal live
//! model session: a one-time `setup`, inbound tool calls, and outbound
//! tool responses. Field names are camelCase on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LiveError;

// =============================================================================
// Session configuration
// =============================================================================

/// The configuration submitted once when a session is set up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Model identifier (e.g., "models/gemini-2.0-flash-exp").
    pub model: String,
    /// Output modality and voice.
    pub generation_config: GenerationConfig,
    /// Natural-language instruction for the whole session.
    pub system_instruction: Content,
    /// Callable functions and auxiliary capabilities.
    pub tools: Vec<Tool>,
}

/// Generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Modality the model responds in.
    pub response_modalities: ResponseModality,
    /// Voice selection for audio responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

/// Modality of model responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseModality {
    #[default]
    Audio,
    Text,
}

impl std::fmt::Display for ResponseModality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for ResponseModality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audio" => Ok(Self::Audio),
            "text" => Ok(Self::Text),
            other => Err(format!("invalid response modality: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// Name of a voice offered by the model host (e.g., "Aoede").
    pub voice_name: String,
}

impl SpeechConfig {
    /// Speech configuration selecting a prebuilt voice.
    #[must_use]
    pub fn prebuilt(voice_name: impl Into<String>) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice_name.into(),
                },
            },
        }
    }
}

/// Multi-part content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A text part of some content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    /// Content consisting of a single text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A tool entry in the session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tool {
    /// Lets the model ground answers with web search.
    GoogleSearch {
        #[serde(rename = "googleSearch")]
        google_search: GoogleSearch,
    },
    /// Functions the model may call.
    FunctionDeclarations {
        #[serde(rename = "functionDeclarations")]
        function_declarations: Vec<FunctionDeclaration>,
    },
}

/// Marker object enabling the search capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// A function the model may call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Unique function name.
    pub name: String,
    /// What the function does, for the model.
    pub description: String,
    /// Object schema describing the arguments.
    pub parameters: ParameterSchema,
}

/// Object schema of a function's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    pub properties: BTreeMap<String, PropertySchema>,
    pub required: Vec<String>,
}

/// Schema of one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    pub description: String,
}

/// JSON schema types used by function declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    String,
    Boolean,
}

// =============================================================================
// Tool calls and responses
// =============================================================================

/// Identifier correlating a function call with its response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallId(String);

impl CallId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A batch of function invocations requested by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    #[serde(default)]
    pub function_calls: Vec<FunctionCall>,
}

/// One function invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the called function.
    pub name: String,
    /// Free-form arguments; absent or null when the model sent none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Map<String, serde_json::Value>>,
    /// Correlation id for the response.
    pub id: CallId,
}

impl FunctionCall {
    /// Look up one argument.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&serde_json::Value> {
        self.args.as_ref().and_then(|args| args.get(key))
    }
}

/// Calls the session has withdrawn before they were answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallCancellation {
    #[serde(default)]
    pub ids: Vec<CallId>,
}

/// Answers to a batch of function invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub function_responses: Vec<FunctionResponse>,
}

impl ToolResponse {
    /// A response acknowledging every id as successful, in order.
    #[must_use]
    pub fn success_for(ids: impl IntoIterator<Item = CallId>) -> Self {
        Self {
            function_responses: ids.into_iter().map(FunctionResponse::success).collect(),
        }
    }

    /// Ids answered by this response, in order.
    pub fn ids(&self) -> impl Iterator<Item = &CallId> {
        self.function_responses.iter().map(|r| &r.id)
    }
}

/// Answer to one function invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub response: ResponseBody,
    pub id: CallId,
}

impl FunctionResponse {
    #[must_use]
    pub const fn success(id: CallId) -> Self {
        Self {
            response: ResponseBody {
                output: ResponseOutput { success: true },
            },
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub output: ResponseOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOutput {
    pub success: bool,
}

// =============================================================================
// Envelopes
// =============================================================================

/// Messages sent from the client to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientMessage {
    Setup(SessionConfig),
    ToolResponse(ToolResponse),
}

/// Messages received from the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    SetupComplete,
    ToolCall(ToolCall),
    ToolCallCancellation(ToolCallCancellation),
    /// Model output (audio, text, turn markers); not interpreted here.
    ServerContent(serde_json::Value),
}

/// Raw server envelope. The session may attach extra keys (usage metadata)
/// next to the payload, so fields are optional rather than an enum tag.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawServerMessage {
    setup_complete: Option<serde_json::Value>,
    tool_call: Option<ToolCall>,
    tool_call_cancellation: Option<ToolCallCancellation>,
    server_content: Option<serde_json::Value>,
}

impl ServerMessage {
    /// Parse one server message.
    ///
    /// Returns `Ok(None)` for well-formed messages carrying none of the
    /// known payloads.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or a known payload
    /// has the wrong shape.
    pub fn from_json(raw: &str) -> Result<Option<Self>, LiveError> {
        let raw: RawServerMessage = serde_json::from_str(raw)?;
        let message = if let Some(tool_call) = raw.tool_call {
            Some(Self::ToolCall(tool_call))
        } else if let Some(cancellation) = raw.tool_call_cancellation {
            Some(Self::ToolCallCancellation(cancellation))
        } else if raw.setup_complete.is_some() {
            Some(Self::SetupComplete)
        } else {
            raw.server_content.map(Self::ServerContent)
        };
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_setup_message_shape() {
        let config = SessionConfig {
            model: "models/test".to_string(),
            generation_config: GenerationConfig {
                response_modalities: ResponseModality::Audio,
                speech_config: Some(SpeechConfig::prebuilt("Aoede")),
            },
            system_instruction: Content::text("Be helpful."),
            tools: vec![Tool::GoogleSearch {
                google_search: GoogleSearch {},
            }],
        };

        let value = serde_json::to_value(ClientMessage::Setup(config)).expect("serialize");
        assert_eq!(
            value,
            json!({
                "setup": {
                    "model": "models/test",
                    "generationConfig": {
                        "responseModalities": "audio",
                        "speechConfig": {
                            "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Aoede" } }
                        }
                    },
                    "systemInstruction": { "parts": [{ "text": "Be helpful." }] },
                    "tools": [{ "googleSearch": {} }]
                }
            })
        );
    }

    #[test]
    fn test_tool_untagged_roundtrip() {
        let raw = json!([
            { "googleSearch": {} },
            { "functionDeclarations": [{
                "name": "f",
                "description": "d",
                "parameters": {
                    "type": "object",
                    "properties": { "x": { "type": "string", "description": "x" } },
                    "required": ["x"]
                }
            }]}
        ]);
        let tools: Vec<Tool> = serde_json::from_value(raw.clone()).expect("deserialize");
        assert!(matches!(tools[0], Tool::GoogleSearch { .. }));
        assert!(
            matches!(&tools[1], Tool::FunctionDeclarations { function_declarations } if function_declarations.len() == 1)
        );
        assert_eq!(serde_json::to_value(&tools).expect("serialize"), raw);
    }

    #[test]
    fn test_parse_tool_call() {
        let raw = r#"{"toolCall":{"functionCalls":[
            {"name":"upsert_product_property_color","args":{"color":"Red"},"id":"1"}
        ]}}"#;
        let message = ServerMessage::from_json(raw).expect("parse").expect("message");
        let ServerMessage::ToolCall(call) = message else {
            panic!("expected tool call");
        };
        assert_eq!(call.function_calls.len(), 1);
        assert_eq!(call.function_calls[0].id, CallId::from("1"));
        assert_eq!(call.function_calls[0].arg("color"), Some(&json!("Red")));
    }

    #[test]
    fn test_parse_tool_call_without_args() {
        let raw = r#"{"toolCall":{"functionCalls":[{"name":"f","args":null,"id":"a"},{"name":"g","id":"b"}]}}"#;
        let Some(ServerMessage::ToolCall(call)) = ServerMessage::from_json(raw).expect("parse")
        else {
            panic!("expected tool call");
        };
        assert!(call.function_calls.iter().all(|c| c.args.is_none()));
    }

    #[test]
    fn test_parse_cancellation_and_setup_complete() {
        let cancel = ServerMessage::from_json(r#"{"toolCallCancellation":{"ids":["1","2"]}}"#)
            .expect("parse");
        assert_eq!(
            cancel,
            Some(ServerMessage::ToolCallCancellation(ToolCallCancellation {
                ids: vec![CallId::from("1"), CallId::from("2")],
            }))
        );

        let setup = ServerMessage::from_json(r#"{"setupComplete":{}}"#).expect("parse");
        assert_eq!(setup, Some(ServerMessage::SetupComplete));
    }

    #[test]
    fn test_parse_ignores_extra_keys() {
        let raw = r#"{"serverContent":{"turnComplete":true},"usageMetadata":{"totalTokenCount":3}}"#;
        let message = ServerMessage::from_json(raw).expect("parse");
        assert_eq!(
            message,
            Some(ServerMessage::ServerContent(json!({"turnComplete": true})))
        );
        assert_eq!(ServerMessage::from_json("{}").expect("parse"), None);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(ServerMessage::from_json("not json").is_err());
    }

    #[test]
    fn test_tool_response_shape() {
        let response = ToolResponse::success_for([CallId::from("1"), CallId::from("2")]);
        let value = serde_json::to_value(ClientMessage::ToolResponse(response)).expect("serialize");
        assert_eq!(
            value,
            json!({
                "toolResponse": {
                    "functionResponses": [
                        { "response": { "output": { "success": true } }, "id": "1" },
                        { "response": { "output": { "success": true } }, "id": "2" }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_response_modality_parse() {
        assert_eq!("Audio".parse::<ResponseModality>(), Ok(ResponseModality::Audio));
        assert_eq!("text".parse::<ResponseModality>(), Ok(ResponseModality::Text));
        assert!("video".parse::<ResponseModality>().is_err());
    }
}
