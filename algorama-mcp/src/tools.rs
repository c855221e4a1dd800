//! Tool surface: catalog queries and evaluation exposed as MCP tools
//!
//! Bad arguments are protocol errors (`-32602`). Catalog failures such as an
//! unknown name are ordinary tool results flagged with `isError`, so the
//! client sees the structured error and its suggestions.

use crate::config::ServerConfig;
use crate::protocol::McpError;
use algorama_catalog::{Evaluator, FunctionCatalog, FunctionSummary, PlotPoint, Sweep, Transform};
use algorama_core::{CatalogError, Category, FunctionId, Real};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

/// Upper bound on sweep resolution accepted from a client
pub const MAX_SAMPLES: usize = 100_000;

/// A function named by the client, either way
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FunctionRef {
    Id(i64),
    /// Integers above `i64::MAX`; never a valid ID
    LargeId(u64),
    Name(String),
}

fn one() -> Real {
    1.0
}

#[derive(Debug, Deserialize)]
struct ListArgs {
    category: Option<String>,
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DescribeArgs {
    name: Option<String>,
    id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct PointArgs {
    function: FunctionRef,
    x: Real,
    #[serde(default = "one")]
    amplitude: Real,
    #[serde(default = "one")]
    frequency: Real,
    step: Option<Real>,
}

#[derive(Debug, Deserialize)]
struct SampleArgs {
    function: FunctionRef,
    x_min: Option<Real>,
    x_max: Option<Real>,
    samples: Option<usize>,
    #[serde(default = "one")]
    amplitude: Real,
    #[serde(default = "one")]
    frequency: Real,
    #[serde(default)]
    derivative: bool,
    step: Option<Real>,
}

enum ToolError {
    Protocol(McpError),
    Catalog(CatalogError),
}

impl From<McpError> for ToolError {
    fn from(e: McpError) -> Self {
        Self::Protocol(e)
    }
}

impl From<CatalogError> for ToolError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

type ToolResult = Result<JsonValue, ToolError>;

/// Serves tool calls against one shared catalog
pub struct FunctionServer {
    evaluator: Evaluator,
    config: ServerConfig,
}

impl FunctionServer {
    pub fn new(catalog: Arc<FunctionCatalog>, config: ServerConfig) -> Self {
        Self { evaluator: Evaluator::new(catalog), config }
    }

    /// Server over the standard library
    pub fn standard(config: ServerConfig) -> Self {
        Self::new(Arc::new(algorama_std::standard_catalog()), config)
    }

    pub fn catalog(&self) -> &FunctionCatalog {
        self.evaluator.catalog()
    }

    /// Dispatch a `tools/call`
    pub fn call(&self, name: &str, args: JsonValue) -> Result<JsonValue, McpError> {
        let outcome = match name {
            "list_functions" => self.list_functions(args),
            "describe" => self.describe(args),
            "list_categories" => self.list_categories(),
            "evaluate" => self.evaluate(args),
            "derivative" => self.derivative(args),
            "sample" => self.sample(args),
            "export_names" => self.export_names(),
            _ => return Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        };

        match outcome {
            Ok(result) => Ok(result),
            Err(ToolError::Catalog(e)) => {
                tracing::debug!(tool = name, code = e.code(), "tool call failed");
                Ok(catalog_failure(&e))
            }
            Err(ToolError::Protocol(e)) => Err(e),
        }
    }

    fn list_functions(&self, args: JsonValue) -> ToolResult {
        let args: ListArgs = parse_args(args)?;
        let category = match args.category.as_deref() {
            Some(raw) => raw.parse::<Category>()?,
            None => Category::All,
        };

        let catalog = self.catalog();
        let ids = catalog.search(args.search.as_deref().unwrap_or(""), category);
        let functions = ids
            .into_iter()
            .map(|id| catalog.describe_id(id))
            .collect::<Result<Vec<_>, _>>()?;

        let mut text = format!("{} functions in {}", functions.len(), category.label());
        for f in &functions {
            text.push('\n');
            text.push_str(&summary_line(f));
        }

        Ok(success(text, json!({ "category": category, "count": functions.len(), "functions": functions })))
    }

    fn describe(&self, args: JsonValue) -> ToolResult {
        let args: DescribeArgs = parse_args(args)?;
        let catalog = self.catalog();
        let summary = match (args.name, args.id) {
            (Some(name), None) => catalog.describe(&name)?,
            (None, Some(raw)) => catalog.describe_id(catalog.checked_id(raw)?)?,
            (None, None) => return Err(McpError::invalid_params("describe needs a name or an id").into()),
            (Some(_), Some(_)) => {
                return Err(McpError::invalid_params("describe takes a name or an id, not both").into())
            }
        };

        let text = summary_line(&summary);
        Ok(success(text, json!(summary)))
    }

    fn list_categories(&self) -> ToolResult {
        let categories = self.catalog().categories();
        let text = categories
            .iter()
            .map(|c| format!("{} ({}): {}", c.label, c.category.key(), c.count))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(success(text, json!({ "categories": categories })))
    }

    fn evaluate(&self, args: JsonValue) -> ToolResult {
        let args: PointArgs = parse_args(args)?;
        let id = self.resolve(&args.function)?;
        let name = self.catalog().describe_id(id)?.name;
        let y = self.evaluator.evaluate(id, args.x, args.amplitude, args.frequency)?;

        Ok(success(
            format!("{}({}) = {}", name, args.x, y),
            json!({
                "id": id,
                "name": name,
                "x": args.x,
                "y": y,
                "amplitude": args.amplitude,
                "frequency": args.frequency,
            }),
        ))
    }

    fn derivative(&self, args: JsonValue) -> ToolResult {
        let args: PointArgs = parse_args(args)?;
        let id = self.resolve(&args.function)?;
        let name = self.catalog().describe_id(id)?.name;
        let step = args.step.unwrap_or(self.config.derivative_step);
        let dy = self
            .evaluator
            .approximate_derivative_with_step(id, args.x, args.amplitude, args.frequency, step)?;

        Ok(success(
            format!("d/dx {}({}) ~ {}", name, args.x, dy),
            json!({
                "id": id,
                "name": name,
                "x": args.x,
                "dy": dy,
                "step": step,
                "amplitude": args.amplitude,
                "frequency": args.frequency,
            }),
        ))
    }

    fn sample(&self, args: JsonValue) -> ToolResult {
        let args: SampleArgs = parse_args(args)?;
        let defaults = self.config.sweep;
        let samples = args.samples.unwrap_or(defaults.samples());
        if samples > MAX_SAMPLES {
            return Err(McpError::invalid_params(format!("samples must not exceed {}", MAX_SAMPLES)).into());
        }

        let id = self.resolve(&args.function)?;
        let name = self.catalog().describe_id(id)?.name;
        let sweep = Sweep::new(
            args.x_min.unwrap_or(defaults.x_min()),
            args.x_max.unwrap_or(defaults.x_max()),
            samples,
        )?;
        let transform = Transform::new(args.amplitude, args.frequency);

        let points: Vec<PlotPoint> = if args.derivative {
            let step = args.step.unwrap_or(self.config.derivative_step);
            self.evaluator.sample_derivative(id, &sweep, transform, step)?
        } else {
            self.evaluator.sample(id, &sweep, transform)?
        };
        let gaps = points.iter().filter(|p| !p.is_finite()).count();

        Ok(success(
            format!(
                "Sampled {} points of {}{} over [{}, {}], {} non-finite",
                points.len(),
                if args.derivative { "d/dx " } else { "" },
                name,
                sweep.x_min(),
                sweep.x_max(),
                gaps
            ),
            json!({
                "id": id,
                "name": name,
                "derivative": args.derivative,
                "sweep": sweep,
                "transform": transform,
                "points": points,
            }),
        ))
    }

    fn export_names(&self) -> ToolResult {
        let packed = self.catalog().export_names_packed();
        let names: Vec<String> = packed
            .split(|&b| b == 0)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();

        Ok(success(
            names.join("\n"),
            json!({ "count": names.len(), "bytes": packed.len(), "names": names }),
        ))
    }

    fn resolve(&self, function: &FunctionRef) -> Result<FunctionId, CatalogError> {
        match function {
            FunctionRef::Id(raw) => self.catalog().checked_id(*raw),
            FunctionRef::LargeId(_) => Err(CatalogError::out_of_range(i64::MAX, self.catalog().len())),
            FunctionRef::Name(name) => self.catalog().resolve_id(name),
        }
    }

    /// Tool definitions for `tools/list`
    pub fn definitions() -> JsonValue {
        let function = json!({
            "oneOf": [{ "type": "string" }, { "type": "integer", "minimum": 0 }],
            "description": "Function name (case-insensitive) or numeric ID"
        });
        let amplitude = json!({ "type": "number", "description": "Output scale (default: 1)", "default": 1.0 });
        let frequency = json!({ "type": "number", "description": "Input scale (default: 1)", "default": 1.0 });
        let step = json!({ "type": "number", "description": "Half-width of the centered difference" });

        json!([
            {
                "name": "list_functions",
                "description": "List catalog functions in ID order, optionally filtered by category and a case-insensitive name substring.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category key or label, e.g. 'relu_family' or 'ReLU Family'"
                        },
                        "search": { "type": "string", "description": "Name substring" }
                    }
                }
            },
            {
                "name": "describe",
                "description": "Metadata for one function: ID, name, category and formula. Pass either name or id.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Function name" },
                        "id": { "type": "integer", "description": "Function ID" }
                    }
                }
            },
            {
                "name": "list_categories",
                "description": "All categories with their member counts.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "evaluate",
                "description": "Compute amplitude * f(frequency * x).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "function": function,
                        "x": { "type": "number" },
                        "amplitude": amplitude,
                        "frequency": frequency
                    },
                    "required": ["function", "x"]
                }
            },
            {
                "name": "derivative",
                "description": "Centered finite-difference derivative of amplitude * f(frequency * x).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "function": function,
                        "x": { "type": "number" },
                        "amplitude": amplitude,
                        "frequency": frequency,
                        "step": step
                    },
                    "required": ["function", "x"]
                }
            },
            {
                "name": "sample",
                "description": "Sample a function (or its derivative) over an evenly spaced range, endpoints included. Non-finite values are returned as null.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "function": function,
                        "x_min": { "type": "number" },
                        "x_max": { "type": "number" },
                        "samples": { "type": "integer", "minimum": 1, "maximum": MAX_SAMPLES, "description": "Number of segments" },
                        "amplitude": amplitude,
                        "frequency": frequency,
                        "derivative": { "type": "boolean", "default": false },
                        "step": step
                    },
                    "required": ["function"]
                }
            },
            {
                "name": "export_names",
                "description": "All function names in ID order.",
                "inputSchema": { "type": "object", "properties": {} }
            }
        ])
    }
}

fn parse_args<T: DeserializeOwned>(args: JsonValue) -> Result<T, McpError> {
    serde_json::from_value(args).map_err(|e| McpError::invalid_params(format!("Invalid arguments: {}", e)))
}

fn summary_line(f: &FunctionSummary) -> String {
    if f.description.is_empty() {
        format!("{}: {} [{}]", f.id, f.name, f.category_label)
    } else {
        format!("{}: {} [{}] {}", f.id, f.name, f.category_label, f.description)
    }
}

fn success(text: String, data: JsonValue) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": data,
        "isError": false
    })
}

fn catalog_failure(error: &CatalogError) -> JsonValue {
    let mut text = format!("[{}] {}", error.code(), error);
    if let Some(hint) = error.suggestion() {
        text.push('\n');
        text.push_str(&hint);
    }
    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": { "code": error.code(), "error": error },
        "isError": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> FunctionServer {
        FunctionServer::standard(ServerConfig::default())
    }

    fn data(result: &JsonValue) -> &JsonValue {
        &result["structuredContent"]
    }

    #[test]
    fn test_evaluate_by_name_and_id() {
        let server = server();
        let by_name = server.call("evaluate", json!({"function": "sigmoid", "x": 0.0})).unwrap();
        let by_id = server.call("evaluate", json!({"function": 0, "x": 0.0})).unwrap();
        assert_eq!(data(&by_name)["y"], 0.5);
        assert_eq!(data(&by_id)["y"], 0.5);
        assert_eq!(data(&by_name)["name"], "Sigmoid");
    }

    #[test]
    fn test_evaluate_transform() {
        let server = server();
        let result = server
            .call("evaluate", json!({"function": "Identity", "x": 3.0, "amplitude": 2.0, "frequency": 0.5}))
            .unwrap();
        assert_eq!(data(&result)["y"], 3.0);
    }

    #[test]
    fn test_non_finite_serializes_as_null() {
        let server = server();
        let result = server.call("evaluate", json!({"function": "Exponential", "x": 1000.0})).unwrap();
        assert_eq!(result["isError"], false);
        assert!(data(&result)["y"].is_null());
    }

    #[test]
    fn test_unknown_function_is_tool_error() {
        let server = server();
        let result = server.call("evaluate", json!({"function": "sigmiod", "x": 0.0})).unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(data(&result)["code"], "NOT_FOUND");
        assert_eq!(data(&result)["error"]["kind"], "not_found");
        let suggestions = data(&result)["error"]["suggestions"].as_array().unwrap();
        assert!(suggestions.iter().any(|s| s == "sigmoid"));
    }

    #[test]
    fn test_id_out_of_range_is_tool_error() {
        let server = server();
        for raw in [-1, 113, 999_999] {
            let result = server.call("evaluate", json!({"function": raw, "x": 0.0})).unwrap();
            assert_eq!(data(&result)["code"], "OUT_OF_RANGE", "id {}", raw);
        }
    }

    #[test]
    fn test_id_beyond_i64_is_out_of_range() {
        let server = server();
        let args: JsonValue = serde_json::from_str(r#"{"function": 18446744073709551615, "x": 0.0}"#).unwrap();
        let result = server.call("evaluate", args).unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(data(&result)["code"], "OUT_OF_RANGE");
    }

    #[test]
    fn test_describe_rejects_name_and_id_together() {
        let server = server();
        let err = server.call("describe", json!({"name": "GELU", "id": 0})).unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_bad_arguments_are_protocol_errors() {
        let server = server();
        let err = server.call("evaluate", json!({"function": "Sigmoid"})).unwrap_err();
        assert_eq!(err.code, -32602);
        let err = server.call("describe", json!({})).unwrap_err();
        assert_eq!(err.code, -32602);
        let err = server.call("no_such_tool", json!({})).unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_derivative_default_and_explicit_step() {
        let server = server();
        let result = server.call("derivative", json!({"function": "Identity", "x": 2.0})).unwrap();
        assert!((data(&result)["dy"].as_f64().unwrap() - 1.0).abs() < 1e-6);
        assert_eq!(data(&result)["step"], 1e-4);

        let result = server
            .call("derivative", json!({"function": "Square", "x": 3.0, "step": 0.5}))
            .unwrap();
        assert!((data(&result)["dy"].as_f64().unwrap() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_includes_endpoints() {
        let server = server();
        let result = server
            .call("sample", json!({"function": "ReLU", "x_min": -1.0, "x_max": 1.0, "samples": 4}))
            .unwrap();
        let points = data(&result)["points"].as_array().unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0]["x"], -1.0);
        assert_eq!(points[4]["x"], 1.0);
        assert_eq!(points[4]["y"], 1.0);
    }

    #[test]
    fn test_sample_uses_configured_defaults() {
        let config = ServerConfig { sweep: Sweep::new(0.0, 1.0, 10).unwrap(), derivative_step: 1e-3 };
        let server = FunctionServer::standard(config);
        let result = server.call("sample", json!({"function": "Tanh", "derivative": true})).unwrap();
        assert_eq!(data(&result)["points"].as_array().unwrap().len(), 11);
        assert_eq!(data(&result)["derivative"], true);
    }

    #[test]
    fn test_invalid_sweep_is_tool_error() {
        let server = server();
        let result = server
            .call("sample", json!({"function": "Tanh", "x_min": 2.0, "x_max": 1.0}))
            .unwrap();
        assert_eq!(data(&result)["code"], "INVALID_SWEEP");

        let err = server
            .call("sample", json!({"function": "Tanh", "samples": MAX_SAMPLES + 1}))
            .unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_list_functions_filters() {
        let server = server();
        let result = server.call("list_functions", json!({"category": "gaussian"})).unwrap();
        assert_eq!(data(&result)["count"], 7);

        let result = server.call("list_functions", json!({"search": "RELU"})).unwrap();
        let names: Vec<&str> = data(&result)["functions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"ReLU"));
        assert!(names.contains(&"StarReLU"));
        assert!(names.iter().all(|n| n.to_lowercase().contains("relu")));

        let result = server.call("list_functions", json!({})).unwrap();
        assert_eq!(data(&result)["count"], 113);
    }

    #[test]
    fn test_unknown_category_is_tool_error() {
        let result = server().call("list_functions", json!({"category": "bogus"})).unwrap();
        assert_eq!(data(&result)["code"], "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_describe() {
        let server = server();
        let result = server.call("describe", json!({"name": "GELU"})).unwrap();
        assert_eq!(data(&result)["category"], "relu_family");
        let by_id = server.call("describe", json!({"id": 0})).unwrap();
        assert_eq!(data(&by_id)["name"], "Sigmoid");
    }

    #[test]
    fn test_list_categories() {
        let result = server().call("list_categories", json!({})).unwrap();
        let categories = data(&result)["categories"].as_array().unwrap();
        assert_eq!(categories.len(), Category::ALL_CATEGORIES.len());
        assert_eq!(categories[0]["category"], "all");
        assert_eq!(categories[0]["count"], 113);
    }

    #[test]
    fn test_export_names() {
        let result = server().call("export_names", json!({})).unwrap();
        let names = data(&result)["names"].as_array().unwrap();
        assert_eq!(names.len(), 113);
        assert_eq!(names[0], "sigmoid");
    }
}
