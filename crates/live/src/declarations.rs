//! Function declarations offered to the live model.
//!
//! Every function the dispatcher acts on is named by a [`FunctionName`], and
//! the declarations are generated from the same enum, so a dispatcher branch
//! can never reference an undeclared function.

use std::collections::BTreeMap;

use garderobe_core::ClassificationProperty;

use crate::protocol::{FunctionDeclaration, ParameterSchema, PropertySchema, SchemaType};

const UPSERT_PREFIX: &str = "upsert_product_property_";
const COMPLETE_NAME: &str = "complete_product_classification";
const RENDER_CHART_NAME: &str = "render_altair";

/// Argument carrying the chart specification of `render_altair`.
pub const JSON_GRAPH_ARG: &str = "json_graph";
/// Argument carrying the outcome of `complete_product_classification`.
pub const SUCCESS_ARG: &str = "success";

/// A function the model may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    /// `upsert_product_property_<field>`: set one property of the product.
    UpsertProperty(ClassificationProperty),
    /// `complete_product_classification`: the user is done.
    CompleteClassification,
    /// `render_altair`: display a chart.
    RenderChart,
}

impl FunctionName {
    /// Parse a function name as it appears in a tool call.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            COMPLETE_NAME => Some(Self::CompleteClassification),
            RENDER_CHART_NAME => Some(Self::RenderChart),
            _ => {
                let field = name.strip_prefix(UPSERT_PREFIX)?;
                ClassificationProperty::ALL
                    .into_iter()
                    .find(|p| p.field_name() == field)
                    .map(Self::UpsertProperty)
            }
        }
    }

    /// Name of the single required argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::UpsertProperty(property) => property.field_name(),
            Self::CompleteClassification => SUCCESS_ARG,
            Self::RenderChart => JSON_GRAPH_ARG,
        }
    }
}

impl std::fmt::Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpsertProperty(property) => write!(f, "{UPSERT_PREFIX}{}", property.field_name()),
            Self::CompleteClassification => f.write_str(COMPLETE_NAME),
            Self::RenderChart => f.write_str(RENDER_CHART_NAME),
        }
    }
}

/// Declaration of one function.
#[must_use]
pub fn declaration(function: FunctionName) -> FunctionDeclaration {
    match function {
        FunctionName::UpsertProperty(property) => {
            let language = if property == ClassificationProperty::Size {
                ""
            } else {
                " in english"
            };
            single_argument(
                function,
                format!(
                    "Sets or updates the {} property of the product.",
                    property.display_name()
                ),
                SchemaType::String,
                format!(
                    "STRING value of the {}{language}. Must be a string, not a json object",
                    property.display_name()
                ),
            )
        }
        FunctionName::CompleteClassification => single_argument(
            function,
            "Called when the user is done with classifying the product.".to_string(),
            SchemaType::Boolean,
            "A true or false value indicating if the classification was successful.".to_string(),
        ),
        FunctionName::RenderChart => single_argument(
            function,
            "Displays an altair graph in json format.".to_string(),
            SchemaType::String,
            "JSON STRING representation of the graph to render. Must be a string, not a json object"
                .to_string(),
        ),
    }
}

/// Every declared function, in submission order.
///
/// Property upserts come first (brand, category, color, condition, material,
/// pattern, size), then completion, then chart rendering when enabled.
#[must_use]
pub fn declared_functions(include_chart: bool) -> Vec<FunctionName> {
    let mut functions: Vec<FunctionName> = ClassificationProperty::ALL
        .into_iter()
        .map(FunctionName::UpsertProperty)
        .collect();
    functions.push(FunctionName::CompleteClassification);
    if include_chart {
        functions.push(FunctionName::RenderChart);
    }
    functions
}

/// Declarations for every declared function.
#[must_use]
pub fn function_declarations(include_chart: bool) -> Vec<FunctionDeclaration> {
    declared_functions(include_chart)
        .into_iter()
        .map(declaration)
        .collect()
}

fn single_argument(
    function: FunctionName,
    description: String,
    schema_type: SchemaType,
    argument_description: String,
) -> FunctionDeclaration {
    let argument = function.argument().to_string();
    FunctionDeclaration {
        name: function.to_string(),
        description,
        parameters: ParameterSchema {
            schema_type: SchemaType::Object,
            properties: BTreeMap::from([(
                argument.clone(),
                PropertySchema {
                    schema_type,
                    description: argument_description,
                },
            )]),
            required: vec![argument],
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_declaration_count() {
        assert_eq!(function_declarations(true).len(), 9);
        assert_eq!(function_declarations(false).len(), 8);
    }

    #[test]
    fn test_declaration_names_in_order() {
        let names: Vec<String> = function_declarations(true)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "upsert_product_property_brand",
                "upsert_product_property_product_category",
                "upsert_product_property_color",
                "upsert_product_property_condition",
                "upsert_product_property_material",
                "upsert_product_property_pattern",
                "upsert_product_property_size",
                "complete_product_classification",
                "render_altair",
            ]
        );
    }

    #[test]
    fn test_names_roundtrip() {
        for function in declared_functions(true) {
            assert_eq!(FunctionName::from_name(&function.to_string()), Some(function));
        }
        assert_eq!(FunctionName::from_name("upsert_product_property_weight"), None);
        assert_eq!(FunctionName::from_name("upsert_product_property_category"), None);
        assert_eq!(FunctionName::from_name("unknown"), None);
    }

    #[test]
    fn test_every_declaration_has_one_required_argument() {
        for declaration in function_declarations(true) {
            assert_eq!(declaration.parameters.schema_type, SchemaType::Object);
            assert_eq!(declaration.parameters.required.len(), 1);
            let required = &declaration.parameters.required[0];
            assert!(declaration.parameters.properties.contains_key(required));
        }
    }

    #[test]
    fn test_upsert_category_shape() {
        let value = serde_json::to_value(declaration(FunctionName::UpsertProperty(
            ClassificationProperty::Category,
        )))
        .expect("serialize");
        assert_eq!(
            value,
            json!({
                "name": "upsert_product_property_product_category",
                "description": "Sets or updates the product category property of the product.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "product_category": {
                            "type": "string",
                            "description": "STRING value of the product category in english. Must be a string, not a json object"
                        }
                    },
                    "required": ["product_category"]
                }
            })
        );
    }

    #[test]
    fn test_size_description_has_no_language() {
        let declaration = declaration(FunctionName::UpsertProperty(ClassificationProperty::Size));
        let description = &declaration.parameters.properties["size"].description;
        assert!(!description.contains("english"));
    }

    #[test]
    fn test_completion_takes_boolean() {
        let declaration = declaration(FunctionName::CompleteClassification);
        assert_eq!(
            declaration.parameters.properties[SUCCESS_ARG].schema_type,
            SchemaType::Boolean
        );
    }
}
