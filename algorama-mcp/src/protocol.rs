//! JSON-RPC 2.0 framing and MCP lifecycle methods

use crate::tools::FunctionServer;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "algorama";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON-RPC error codes
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAMS, message)
    }
}

impl McpResponse {
    fn reply(id: Option<JsonValue>, outcome: Result<JsonValue, McpError>) -> Self {
        let (result, error) = match outcome {
            Ok(r) => (Some(r), None),
            Err(e) => (None, Some(e)),
        };
        Self { jsonrpc: "2.0".to_string(), id, result, error }
    }
}

/// Handle one input line. `None` means nothing is written back.
pub fn process_line(server: &FunctionServer, line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<McpRequest>(line) {
        Ok(request) => {
            tracing::debug!(method = %request.method, "processing request");
            let response = handle_request(server, &request);
            // Notifications never get a response
            if request.id.is_none() {
                tracing::debug!(method = %request.method, "notification processed");
                return None;
            }
            response
        }
        Err(e) => {
            tracing::warn!(error = %e, "unparseable request");
            McpResponse::reply(None, Err(McpError::new(codes::PARSE_ERROR, format!("Parse error: {}", e))))
        }
    };

    Some(encode(&response))
}

fn encode(response: &McpResponse) -> String {
    match serde_json::to_string(response) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "failed to encode response");
            let fallback = McpResponse::reply(
                response.id.clone(),
                Err(McpError::new(codes::INTERNAL_ERROR, "Failed to encode response")),
            );
            serde_json::to_string(&fallback).unwrap_or_default()
        }
    }
}

pub fn handle_request(server: &FunctionServer, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => Ok(json!({ "tools": FunctionServer::definitions() })),
        "tools/call" => handle_tool_call(server, &request.params),

        _ => Err(McpError::new(
            codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )),
    };

    McpResponse::reply(request.id.clone(), result)
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    tracing::info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Catalog of activation functions with evaluation, derivatives and sampling"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_functions or list_categories to browse the catalog, then evaluate, derivative or sample a function by name or numeric ID."
    }))
}

fn handle_tool_call(server: &FunctionServer, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    server.call(name, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> FunctionServer {
        FunctionServer::standard(Default::default())
    }

    fn roundtrip(server: &FunctionServer, request: JsonValue) -> JsonValue {
        let line = process_line(server, &request.to_string()).expect("response expected");
        serde_json::from_str(&line).unwrap()
    }

    #[test]
    fn test_parse_error() {
        let server = server();
        let line = process_line(&server, "{not json").unwrap();
        let response: JsonValue = serde_json::from_str(&line).unwrap();
        assert_eq!(response["error"]["code"], -32700);
        assert!(response.get("id").is_none());
    }

    #[test]
    fn test_blank_lines_ignored() {
        assert!(process_line(&server(), "   ").is_none());
    }

    #[test]
    fn test_notification_gets_no_response() {
        let server = server();
        let request = json!({"jsonrpc": "2.0", "method": "initialized"});
        assert!(process_line(&server, &request.to_string()).is_none());
    }

    #[test]
    fn test_unknown_method() {
        let response = roundtrip(&server(), json!({"jsonrpc": "2.0", "id": 7, "method": "resources/list"}));
        assert_eq!(response["id"], 7);
        assert_eq!(response["error"]["code"], -32601);
    }

    #[test]
    fn test_initialize_echoes_protocol() {
        let response = roundtrip(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {"protocolVersion": "2024-11-05", "clientInfo": {"name": "test"}}
            }),
        );
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], "algorama");
    }

    #[test]
    fn test_tools_list() {
        let response = roundtrip(&server(), json!({"jsonrpc": "2.0", "id": "a", "method": "tools/list"}));
        let tools = response["result"]["tools"].as_array().unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["list_functions", "describe", "list_categories", "evaluate", "derivative", "sample", "export_names"]
        );
    }

    #[test]
    fn test_tool_call_round_trip() {
        let response = roundtrip(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": {"name": "evaluate", "arguments": {"function": "Sigmoid", "x": 0.0}}
            }),
        );
        assert_eq!(response["result"]["isError"], false);
        assert_eq!(response["result"]["structuredContent"]["y"], 0.5);
    }

    #[test]
    fn test_tool_call_without_name() {
        let response = roundtrip(
            &server(),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {}}),
        );
        assert_eq!(response["error"]["code"], -32602);
    }
}
