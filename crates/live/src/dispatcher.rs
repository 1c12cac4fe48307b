//! Tool-call decoding and dispatch.
//!
//! Each invocation in a tool-call batch is logged, decoded into a
//! [`ToolInvocation`], and applied to the product classification. Only the
//! functions declared for the session are acted on; any other name decodes
//! as [`ToolInvocation::Unknown`]. Invalid arguments fail closed: the
//! invocation is skipped with a warning, but its id is still acknowledged.

use garderobe_core::{ClassificationProperty, ProductClassification};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::declarations::FunctionName;
use crate::protocol::{CallId, FunctionCall, ToolCall};

/// Errors from decoding an invocation's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("invalid arguments for {name}: {reason}")]
    InvalidArguments { name: String, reason: String },
}

/// A decoded function invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolInvocation {
    /// Display a chart.
    RenderChart { json_graph: String },
    /// Set one property of the product.
    UpsertProperty {
        property: ClassificationProperty,
        value: String,
    },
    /// Finish the classification.
    CompleteClassification { success: bool },
    /// A function that was not declared for the session.
    Unknown { name: String },
}

impl ToolInvocation {
    /// Decode one function call against the declared functions.
    ///
    /// # Errors
    ///
    /// Returns `InvocationError::InvalidArguments` if the required argument
    /// of a declared function is missing, has the wrong type, or is blank.
    pub fn decode(
        call: &FunctionCall,
        declared: &[FunctionName],
    ) -> Result<Self, InvocationError> {
        let Some(function) =
            FunctionName::from_name(&call.name).filter(|function| declared.contains(function))
        else {
            return Ok(Self::Unknown {
                name: call.name.clone(),
            });
        };

        let argument = function.argument();
        let invalid = |reason: &str| InvocationError::InvalidArguments {
            name: call.name.clone(),
            reason: reason.to_string(),
        };
        let value = call
            .arg(argument)
            .ok_or_else(|| invalid(&format!("missing required argument `{argument}`")))?;

        match function {
            FunctionName::CompleteClassification => value
                .as_bool()
                .map(|success| Self::CompleteClassification { success })
                .ok_or_else(|| invalid(&format!("`{argument}` must be a boolean"))),
            FunctionName::RenderChart | FunctionName::UpsertProperty(_) => {
                let text = value
                    .as_str()
                    .ok_or_else(|| invalid(&format!("`{argument}` must be a string")))?;
                if text.trim().is_empty() {
                    return Err(invalid(&format!("`{argument}` must not be empty")));
                }
                Ok(match function {
                    FunctionName::UpsertProperty(property) => Self::UpsertProperty {
                        property,
                        value: text.trim().to_string(),
                    },
                    _ => Self::RenderChart {
                        json_graph: text.to_string(),
                    },
                })
            }
        }
    }
}

/// Format an invocation as `Function: name(key: value, key: value)`.
///
/// String arguments are printed without quotes; other values as JSON.
#[must_use]
pub fn describe_call(call: &FunctionCall) -> String {
    let args = call
        .args
        .iter()
        .flatten()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{key}: {text}"),
            other => format!("{key}: {other}"),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Function: {}({args})", call.name)
}

/// What a dispatched batch changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Chart payload of the first valid render invocation, if any.
    pub chart_payload: Option<String>,
    /// Number of property upserts applied.
    pub upserts: usize,
    /// Outcome of the last completion in the batch, if any.
    pub completed: Option<bool>,
    /// Invocations skipped for invalid arguments.
    pub rejected: Vec<InvocationError>,
    /// Every call id of the batch, in batch order.
    pub acknowledge: Vec<CallId>,
}

/// Apply a tool-call batch to the classification.
///
/// Calls to functions outside `declared` are ignored. Every invocation id is
/// returned for acknowledgment, including unknown and rejected ones.
#[instrument(skip_all, fields(calls = call.function_calls.len()))]
pub fn dispatch(
    call: &ToolCall,
    declared: &[FunctionName],
    classification: &mut ProductClassification,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    for function_call in &call.function_calls {
        info!("{}", describe_call(function_call));
        outcome.acknowledge.push(function_call.id.clone());

        match ToolInvocation::decode(function_call, declared) {
            Ok(ToolInvocation::RenderChart { json_graph }) => {
                if outcome.chart_payload.is_none() {
                    outcome.chart_payload = Some(json_graph);
                } else {
                    info!(id = %function_call.id, "ignoring additional render_altair in batch");
                }
            }
            Ok(ToolInvocation::UpsertProperty { property, value }) => {
                let previous = classification.upsert(property, value);
                info!(
                    %property,
                    value = classification.get(property).map_or("", |v| v.value.as_str()),
                    replaced = previous.is_some(),
                    "property updated"
                );
                outcome.upserts += 1;
            }
            Ok(ToolInvocation::CompleteClassification { success }) => {
                classification.complete(success);
                info!(success, "classification completed");
                outcome.completed = Some(success);
            }
            Ok(ToolInvocation::Unknown { name }) => {
                warn!(%name, id = %function_call.id, "ignoring call to undeclared function");
            }
            Err(e) => {
                warn!(error = %e, id = %function_call.id, "ignoring invocation");
                outcome.rejected.push(e);
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use garderobe_core::{CatalogId, ClassificationStatus};
    use serde_json::json;

    use super::*;
    use crate::declarations::declared_functions;

    fn all() -> Vec<FunctionName> {
        declared_functions(true)
    }

    fn call(name: &str, args: Option<Value>, id: &str) -> FunctionCall {
        FunctionCall {
            name: name.to_string(),
            args: args.and_then(|v| v.as_object().cloned()),
            id: CallId::from(id),
        }
    }

    fn batch(calls: Vec<FunctionCall>) -> ToolCall {
        ToolCall {
            function_calls: calls,
        }
    }

    #[test]
    fn test_decode_render_chart() {
        let invocation = ToolInvocation::decode(
            &call(
                "render_altair",
                Some(json!({"json_graph": "{\"mark\":\"bar\"}"})),
                "2",
            ),
            &all(),
        )
        .expect("decode");
        assert_eq!(
            invocation,
            ToolInvocation::RenderChart {
                json_graph: "{\"mark\":\"bar\"}".to_string()
            }
        );
    }

    #[test]
    fn test_decode_upsert_uses_field_name() {
        let invocation = ToolInvocation::decode(
            &call(
                "upsert_product_property_product_category",
                Some(json!({"product_category": " Jeans "})),
                "1",
            ),
            &all(),
        )
        .expect("decode");
        assert_eq!(
            invocation,
            ToolInvocation::UpsertProperty {
                property: ClassificationProperty::Category,
                value: "Jeans".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_rejects_bad_arguments() {
        let cases = [
            call("render_altair", None, "1"),
            call("render_altair", Some(json!({"json_graph": {"mark": "bar"}})), "2"),
            call("render_altair", Some(json!({"json_graph": ""})), "3"),
            call("upsert_product_property_color", Some(json!({"colour": "Red"})), "4"),
            call("complete_product_classification", Some(json!({"success": "yes"})), "5"),
        ];
        for case in &cases {
            let err = ToolInvocation::decode(case, &all()).expect_err("invalid");
            assert!(matches!(err, InvocationError::InvalidArguments { ref name, .. } if *name == case.name));
        }
    }

    #[test]
    fn test_decode_unknown_function() {
        let invocation =
            ToolInvocation::decode(&call("get_weather", None, "1"), &all()).expect("decode");
        assert_eq!(
            invocation,
            ToolInvocation::Unknown {
                name: "get_weather".to_string()
            }
        );
    }

    #[test]
    fn test_decode_undeclared_function_is_unknown() {
        let render = call("render_altair", Some(json!({"json_graph": "{}"})), "1");
        let invocation =
            ToolInvocation::decode(&render, &declared_functions(false)).expect("decode");
        assert_eq!(
            invocation,
            ToolInvocation::Unknown {
                name: "render_altair".to_string()
            }
        );
    }

    #[test]
    fn test_describe_call() {
        let described = describe_call(&call(
            "complete_product_classification",
            Some(json!({"success": true})),
            "1",
        ));
        assert_eq!(described, "Function: complete_product_classification(success: true)");

        let described = describe_call(&call(
            "upsert_product_property_color",
            Some(json!({"color": "Red"})),
            "1",
        ));
        assert_eq!(described, "Function: upsert_product_property_color(color: Red)");

        assert_eq!(describe_call(&call("f", None, "1")), "Function: f()");
    }

    #[test]
    fn test_dispatch_first_render_wins() {
        let mut classification = ProductClassification::new();
        let outcome = dispatch(
            &batch(vec![
                call("render_altair", Some(json!({"json_graph": "{}"})), "1"),
                call("render_altair", Some(json!({"json_graph": "{\"mark\":\"line\"}"})), "2"),
            ]),
            &all(),
            &mut classification,
        );
        assert_eq!(outcome.chart_payload.as_deref(), Some("{}"));
        assert_eq!(outcome.acknowledge, vec![CallId::from("1"), CallId::from("2")]);
    }

    #[test]
    fn test_dispatch_skips_invalid_render_and_uses_next() {
        let mut classification = ProductClassification::new();
        let outcome = dispatch(
            &batch(vec![
                call("render_altair", Some(json!({"json_graph": 5})), "1"),
                call("render_altair", Some(json!({"json_graph": "{}"})), "2"),
            ]),
            &all(),
            &mut classification,
        );
        assert_eq!(outcome.chart_payload.as_deref(), Some("{}"));
        assert_eq!(outcome.rejected.len(), 1);
    }

    #[test]
    fn test_dispatch_updates_classification() {
        let mut classification = ProductClassification::new();
        let outcome = dispatch(
            &batch(vec![
                call("upsert_product_property_color", Some(json!({"color": "Röd"})), "1"),
                call("upsert_product_property_brand", Some(json!({"brand": "Acme"})), "2"),
                call("complete_product_classification", Some(json!({"success": true})), "3"),
                call("unknown_function", None, "4"),
            ]),
            &all(),
            &mut classification,
        );

        assert_eq!(outcome.chart_payload, None);
        assert_eq!(outcome.upserts, 2);
        assert_eq!(outcome.completed, Some(true));
        assert_eq!(outcome.acknowledge.len(), 4);
        assert_eq!(
            classification
                .get(ClassificationProperty::Color)
                .and_then(|v| v.catalog_id),
            Some(CatalogId::new(32))
        );
        assert_eq!(
            classification.status(),
            ClassificationStatus::Completed { success: true }
        );
    }

    #[test]
    fn test_dispatch_ignores_render_when_charts_disabled() {
        let mut classification = ProductClassification::new();
        let outcome = dispatch(
            &batch(vec![
                call("render_altair", Some(json!({"json_graph": "{\"mark\":\"bar\"}"})), "1"),
                call("upsert_product_property_size", Some(json!({"size": "M"})), "2"),
            ]),
            &declared_functions(false),
            &mut classification,
        );
        assert_eq!(outcome.chart_payload, None);
        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.upserts, 1);
        assert_eq!(outcome.acknowledge, vec![CallId::from("1"), CallId::from("2")]);
    }

    #[test]
    fn test_dispatch_empty_batch() {
        let mut classification = ProductClassification::new();
        let outcome = dispatch(&ToolCall::default(), &all(), &mut classification);
        assert_eq!(outcome, DispatchOutcome::default());
    }
}
