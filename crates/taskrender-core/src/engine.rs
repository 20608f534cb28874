//! The render pipeline: validate, locate, coerce, merge.
//!
//! The document is moved through the pipeline and edited in place. Only the
//! located container and its one property are touched; the container is
//! located before anything is modified, so a failed lookup changes nothing.

use serde_json::Value;
use taskrender_common::error::Result;

use crate::coercer::coerce;
use crate::document::ValidDocument;
use crate::merger::merge_property;

/// A single property edit on a single container definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyUpdate {
    /// Name of the container definition to edit.
    pub container_name: String,
    /// Property to set on that container.
    pub property_name: String,
    /// Untyped value text, coerced before it is stored.
    pub raw_value: String,
}

impl PropertyUpdate {
    /// Creates a new update.
    #[must_use]
    pub fn new(
        container_name: impl Into<String>,
        property_name: impl Into<String>,
        raw_value: impl Into<String>,
    ) -> Self {
        Self {
            container_name: container_name.into(),
            property_name: property_name.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// Validates a parsed task definition and applies `update` to it.
///
/// # Errors
///
/// Returns `InvalidFormat` if the document has no `containerDefinitions`
/// array, or `ContainerNotFound` if no container carries the requested name.
pub fn render(document: Value, update: &PropertyUpdate) -> Result<ValidDocument> {
    let document = ValidDocument::parse(document)?;
    apply(document, update)
}

/// Applies `update` to an already validated task definition.
///
/// # Errors
///
/// Returns `ContainerNotFound` if no container carries the requested name.
pub fn apply(mut document: ValidDocument, update: &PropertyUpdate) -> Result<ValidDocument> {
    let container = document.container_mut(&update.container_name)?;

    let coerced = coerce(&update.raw_value);
    let literal = coerced.is_literal();
    let previous = merge_property(container, &update.property_name, coerced.into_value());

    tracing::info!(
        container = %update.container_name,
        property = %update.property_name,
        literal,
        created = previous.is_none(),
        "updated container definition"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use taskrender_common::error::RenderError;

    use super::*;

    fn two_containers() -> Value {
        json!({
            "family": "task-def-family",
            "containerDefinitions": [
                { "name": "web", "essential": false },
                { "name": "sidecar", "essential": false }
            ]
        })
    }

    #[test]
    fn render_updates_boolean_property() {
        let update = PropertyUpdate::new("web", "essential", "true");
        let rendered = render(two_containers(), &update).expect("should render");
        assert_eq!(
            rendered.into_value(),
            json!({
                "family": "task-def-family",
                "containerDefinitions": [
                    { "name": "web", "essential": true },
                    { "name": "sidecar", "essential": false }
                ]
            })
        );
    }

    #[test]
    fn render_updates_string_property() {
        let doc = json!({
            "family": "task-def-family",
            "containerDefinitions": [{ "name": "web", "image": "postgres" }]
        });
        let rendered = render(doc, &PropertyUpdate::new("web", "image", r#""nginx""#))
            .expect("should render");
        assert_eq!(rendered.containers()[0], json!({ "name": "web", "image": "nginx" }));
    }

    #[test]
    fn render_updates_array_property() {
        let doc = json!({ "containerDefinitions": [{ "name": "web", "command": [] }] });
        let update = PropertyUpdate::new("web", "command", r#"["npm", "run", "serve"]"#);
        let rendered = render(doc, &update).expect("should render");
        assert_eq!(rendered.containers()[0]["command"], json!(["npm", "run", "serve"]));
    }

    #[test]
    fn render_updates_object_property() {
        let doc = json!({ "containerDefinitions": [{ "name": "web", "healthcheck": {} }] });
        let update = PropertyUpdate::new(
            "web",
            "healthcheck",
            r#"{ "command": [ "ls" ], "interval": 5 }"#,
        );
        let rendered = render(doc, &update).expect("should render");
        assert_eq!(
            rendered.containers()[0]["healthcheck"],
            json!({ "command": ["ls"], "interval": 5 })
        );
    }

    #[test]
    fn render_stores_bare_word_as_string() {
        let doc = json!({ "containerDefinitions": [{ "name": "web" }] });
        let rendered = render(doc, &PropertyUpdate::new("web", "image", "nginx"))
            .expect("should render");
        assert_eq!(rendered.containers()[0]["image"], json!("nginx"));
    }

    #[test]
    fn render_creates_missing_property() {
        let doc = json!({ "family": "task-def-family", "containerDefinitions": [{ "name": "web" }] });
        let rendered = render(doc, &PropertyUpdate::new("web", "image", r#""nginx""#))
            .expect("should render");
        assert_eq!(
            rendered.into_value(),
            json!({
                "family": "task-def-family",
                "containerDefinitions": [{ "name": "web", "image": "nginx" }]
            })
        );
    }

    #[test]
    fn render_updates_first_of_duplicate_names() {
        let doc = json!({
            "containerDefinitions": [
                { "name": "web", "cpu": 1 },
                { "name": "web", "cpu": 2 }
            ]
        });
        let rendered = render(doc, &PropertyUpdate::new("web", "cpu", "64")).expect("should render");
        assert_eq!(
            rendered.containers(),
            &[json!({ "name": "web", "cpu": 64 }), json!({ "name": "web", "cpu": 2 })]
        );
    }

    #[test]
    fn render_is_idempotent() {
        let update = PropertyUpdate::new("sidecar", "command", r#"["run"]"#);
        let once = render(two_containers(), &update).expect("first render");
        let twice = apply(once.clone(), &update).expect("second render");
        assert_eq!(once, twice);
    }

    #[test]
    fn render_leaves_other_containers_and_fields_alone() {
        let doc = json!({
            "family": "f",
            "taskRoleArn": "arn:aws:iam::123456789012:role/app",
            "containerDefinitions": [
                { "name": "a", "environment": [{ "name": "X", "value": "1" }] },
                { "name": "b", "image": "b:1" },
                { "name": "c", "portMappings": [{ "containerPort": 80 }] }
            ],
            "volumes": []
        });
        let rendered = render(doc.clone(), &PropertyUpdate::new("b", "image", r#""b:2""#))
            .expect("should render");
        assert_eq!(rendered.containers()[0], doc["containerDefinitions"][0]);
        assert_eq!(rendered.containers()[2], doc["containerDefinitions"][2]);
        for key in ["family", "taskRoleArn", "volumes"] {
            assert_eq!(rendered.field(key), doc.get(key));
        }
    }

    #[test]
    fn render_rejects_object_container_definitions_before_lookup() {
        let doc = json!({ "containerDefinitions": { "web": { "name": "web" } } });
        let err = render(doc, &PropertyUpdate::new("web", "essential", "true")).unwrap_err();
        assert!(matches!(err, RenderError::InvalidFormat), "got: {err}");
    }

    #[test]
    fn render_rejects_non_object_document() {
        let err = render(json!("hello"), &PropertyUpdate::new("web", "essential", "true"))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidFormat), "got: {err}");
    }

    #[test]
    fn render_fails_for_unknown_container() {
        let doc = json!({ "containerDefinitions": [{ "name": "main", "essential": false }] });
        let mut validated = ValidDocument::parse(doc.clone()).expect("should validate");
        let err = validated.container_mut("web").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid task definition: Could not find container definition with matching name"
        );
        assert_eq!(validated.clone().into_value(), doc);

        let err = apply(validated, &PropertyUpdate::new("web", "essential", "true")).unwrap_err();
        assert!(matches!(err, RenderError::ContainerNotFound { .. }));
    }
}
