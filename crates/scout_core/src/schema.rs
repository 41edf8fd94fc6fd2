use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Primitive type of a declared extraction field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
}

impl FieldKind {
    /// JSON Schema `type` keyword for this kind.
    pub fn json_type(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_type())
    }
}

/// One row of a static field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

/// Ordered description of the fields the remote service should extract.
///
/// Only ever sent to the remote side as an instruction payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSchema {
    title: &'static str,
    description: Option<&'static str>,
    fields: Vec<FieldSpec>,
}

impl ExtractionSchema {
    pub fn new(title: &'static str, fields: &[FieldSpec]) -> Self {
        Self {
            title,
            description: None,
            fields: fields.to_vec(),
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Render as a JSON Schema object, every field required.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            properties.insert(
                field.name.to_string(),
                json!({
                    "description": field.description,
                    "title": property_title(field.name),
                    "type": field.kind.json_type(),
                }),
            );
        }
        let required: Vec<&str> = self.fields.iter().map(|field| field.name).collect();

        let mut schema = Map::new();
        if let Some(description) = self.description {
            schema.insert("description".into(), Value::from(description));
        }
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(required));
        schema.insert("title".into(), Value::from(self.title));
        schema.insert("type".into(), Value::from("object"));
        Value::Object(schema)
    }
}

/// A plain record type the remote service can fill in.
///
/// Implementors pair their serde shape with a static field table; the two
/// must list the same fields.
pub trait ExtractionTarget: Serialize + DeserializeOwned {
    const TITLE: &'static str;
    const DESCRIPTION: Option<&'static str> = None;
    const FIELDS: &'static [FieldSpec];

    fn schema() -> ExtractionSchema {
        let schema = ExtractionSchema::new(Self::TITLE, Self::FIELDS);
        match Self::DESCRIPTION {
            Some(description) => schema.with_description(description),
            None => schema,
        }
    }
}

/// Company facts pulled from a landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_mission: String,
    pub supports_sso: bool,
    pub is_open_source: bool,
    pub is_in_yc: bool,
}

impl ExtractionTarget for CompanyProfile {
    const TITLE: &'static str = "ExtractSchema";
    const DESCRIPTION: Option<&'static str> =
        Some("Simple schema for company information extraction");
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "company_mission",
            kind: FieldKind::String,
            description: "The company's mission statement",
        },
        FieldSpec {
            name: "supports_sso",
            kind: FieldKind::Boolean,
            description: "Whether the company supports Single Sign-On",
        },
        FieldSpec {
            name: "is_open_source",
            kind: FieldKind::Boolean,
            description: "Whether the company's product is open source",
        },
        FieldSpec {
            name: "is_in_yc",
            kind: FieldKind::Boolean,
            description: "Whether the company is part of Y Combinator",
        },
    ];
}

// "company_mission" -> "Company Mission"
fn property_title(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_titles_are_title_cased() {
        assert_eq!(property_title("company_mission"), "Company Mission");
        assert_eq!(property_title("is_in_yc"), "Is In Yc");
        assert_eq!(property_title("_x__y"), "X Y");
    }
}
