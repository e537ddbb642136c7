//! Static description of the pull request data source.
//!
//! Hosts that present the query as a table or form read this descriptor to
//! learn which inputs exist and what each output row looks like. It is built
//! on demand and never mutated.

use serde::Serialize;

use super::filter::{LABEL_PATTERN_FIELD, TITLE_PATTERN_FIELD};

/// Name under which the data source is published.
///
/// Field names follow the configuration keys (`repo`, `label_regexp`) and the
/// serialised record (`labels`).
pub const DATA_SOURCE_NAME: &str = "pullsift_pull_requests";

/// State used when the caller does not choose one.
pub const DEFAULT_STATE: &str = "open";

/// Value shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free text.
    String,
    /// Ordered list of strings.
    StringList,
    /// Ordered list of records described by nested fields.
    RecordList,
}

/// How a field gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Presence {
    /// Caller must supply the value.
    Required,
    /// Caller may supply the value.
    Optional {
        /// Value used when omitted.
        default: Option<&'static str>,
    },
    /// Produced by the query.
    Computed,
}

/// One input or output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: &'static str,
    /// Value shape.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Origin of the value.
    pub presence: Presence,
    /// Whether the value must compile as a regular expression.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub regex: bool,
    /// Nested fields for [`FieldType::RecordList`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

impl FieldDescriptor {
    const fn scalar(name: &'static str, field_type: FieldType, presence: Presence) -> Self {
        Self {
            name,
            field_type,
            presence,
            regex: false,
            fields: Vec::new(),
        }
    }

    const fn pattern(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            presence: Presence::Optional { default: None },
            regex: true,
            fields: Vec::new(),
        }
    }

    const fn computed(name: &'static str) -> Self {
        Self::scalar(name, FieldType::String, Presence::Computed)
    }

    /// Returns true for fields produced by the query.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self.presence, Presence::Computed)
    }
}

/// Immutable descriptor of the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSourceSchema {
    /// Published name.
    pub name: &'static str,
    /// Inputs followed by outputs.
    pub fields: Vec<FieldDescriptor>,
}

impl DataSourceSchema {
    /// Looks up a top-level field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields the caller supplies.
    pub fn inputs(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| !field.is_computed())
    }

    /// Fields the query produces.
    pub fn outputs(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.is_computed())
    }
}

/// Builds the descriptor of the pull request data source.
#[must_use]
pub fn data_source_schema() -> DataSourceSchema {
    let record_fields = vec![
        FieldDescriptor::computed("number"),
        FieldDescriptor::computed("state"),
        FieldDescriptor::computed("title"),
        FieldDescriptor::computed("user_login"),
        FieldDescriptor::computed("head_label"),
        FieldDescriptor::computed("head_ref"),
        FieldDescriptor::computed("head_sha"),
        FieldDescriptor::computed("head_repo_name"),
        FieldDescriptor::computed("base_label"),
        FieldDescriptor::computed("base_ref"),
        FieldDescriptor::computed("base_sha"),
        FieldDescriptor::computed("base_repo_name"),
        FieldDescriptor::scalar("labels", FieldType::StringList, Presence::Computed),
    ];

    DataSourceSchema {
        name: DATA_SOURCE_NAME,
        fields: vec![
            FieldDescriptor::scalar("repo", FieldType::String, Presence::Required),
            FieldDescriptor::scalar(
                "state",
                FieldType::String,
                Presence::Optional {
                    default: Some(DEFAULT_STATE),
                },
            ),
            FieldDescriptor::pattern(LABEL_PATTERN_FIELD),
            FieldDescriptor::pattern(TITLE_PATTERN_FIELD),
            FieldDescriptor::computed("id"),
            FieldDescriptor {
                name: "pulls",
                field_type: FieldType::RecordList,
                presence: Presence::Computed,
                regex: false,
                fields: record_fields,
            },
        ],
    }
}
