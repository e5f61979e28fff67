//! Item request/response models and the item projection

use crate::db::models::{ItemRecord, NewItemRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body of `POST /items`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<ItemPayload> for NewItemRecord {
    fn from(payload: ItemPayload) -> Self {
        Self {
            name: payload.name,
            price: payload.price,
            description: payload.description,
        }
    }
}

/// Query string shared by the item lookup routes
///
/// `q` must be present (it may be empty); a request without it is rejected
/// by the `Query` extractor.
#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub q: String,
}

/// Anything that can be projected into an [`ItemView`]
pub trait ItemSource {
    fn name(&self) -> &str;
    fn price(&self) -> f64;
    fn description(&self) -> Option<&str>;
}

impl ItemSource for ItemRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl ItemSource for ItemPayload {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Client-facing item representation
///
/// `created_at` is the moment the view was built, not a stored value. A
/// missing or null description is left out of the JSON entirely; an empty
/// string is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ItemView {
    /// Project `source` with an explicit timestamp
    pub fn project<S: ItemSource + ?Sized>(source: &S, created_at: DateTime<Utc>) -> Self {
        Self {
            name: source.name().to_string(),
            price: source.price(),
            description: source.description().map(str::to_string),
            created_at,
        }
    }

    /// Project `source`, stamping it with the current time
    pub fn stamp<S: ItemSource + ?Sized>(source: &S) -> Self {
        Self::project(source, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(description: Option<&str>) -> ItemRecord {
        ItemRecord {
            id: 1,
            name: "Widget".to_string(),
            price: 9.99,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_projection_copies_fields() {
        let at = Utc::now();
        let view = ItemView::project(&record(Some("blue")), at);

        assert_eq!(view.name, "Widget");
        assert_eq!(view.price, 9.99);
        assert_eq!(view.description.as_deref(), Some("blue"));
        assert_eq!(view.created_at, at);
    }

    #[test]
    fn test_stamp_uses_current_time() {
        let before = Utc::now();
        let view = ItemView::stamp(&record(None));
        assert!(view.created_at >= before);
        assert!(view.created_at <= Utc::now());
    }

    #[test]
    fn test_projection_does_not_touch_source() {
        let source = record(Some("blue"));
        let copy = source.clone();
        let _ = ItemView::stamp(&source);
        assert_eq!(source, copy);
    }

    #[test]
    fn test_null_description_omitted() {
        let json = serde_json::to_value(ItemView::stamp(&record(None))).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("description"));
        assert_eq!(object["name"], "Widget");
        assert_eq!(object["price"], 9.99);
        assert!(object["created_at"].is_string());
    }

    #[test]
    fn test_empty_description_kept() {
        let json = serde_json::to_value(ItemView::stamp(&record(Some("")))).unwrap();
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_payload_description_defaults_to_none() {
        let absent: ItemPayload =
            serde_json::from_str(r#"{"name":"Widget","price":9.99}"#).unwrap();
        let null: ItemPayload =
            serde_json::from_str(r#"{"name":"Widget","price":9.99,"description":null}"#).unwrap();

        assert_eq!(absent.description, None);
        assert_eq!(null.description, None);
        assert!(serde_json::to_value(ItemView::stamp(&null))
            .unwrap()
            .get("description")
            .is_none());
    }

    #[test]
    fn test_payload_requires_name_and_price() {
        assert!(serde_json::from_str::<ItemPayload>(r#"{"price":1.0}"#).is_err());
        assert!(serde_json::from_str::<ItemPayload>(r#"{"name":"x"}"#).is_err());
    }

    proptest! {
        #[test]
        fn description_key_present_iff_set(
            name in "[a-zA-Z0-9 ]{0,16}",
            description in proptest::option::of("[a-z ]{0,8}"),
        ) {
            let payload = ItemPayload { name: name.clone(), price: 1.5, description: description.clone() };
            let json = serde_json::to_value(ItemView::stamp(&payload)).unwrap();

            prop_assert_eq!(json.get("description").is_some(), description.is_some());
            prop_assert_eq!(json["name"].as_str(), Some(name.as_str()));
            if let Some(text) = description {
                prop_assert_eq!(json["description"].as_str(), Some(text.as_str()));
            }
        }
    }
}
