use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape tag of a plant's leaves.
///
/// The backend currently emits `round`, `sharp` and `heart`. `pointed` is
/// drawn like `sharp` but keeps its own spelling in captions and when
/// serialized; any other tag is carried verbatim in [`LeafType::Other`] so
/// the UI can still render it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeafType {
    Round,
    Sharp,
    Pointed,
    Heart,
    Other(String),
}

impl LeafType {
    pub fn as_str(&self) -> &str {
        match self {
            LeafType::Round => "round",
            LeafType::Sharp => "sharp",
            LeafType::Pointed => "pointed",
            LeafType::Heart => "heart",
            LeafType::Other(tag) => tag,
        }
    }

    /// Whether leaves of this kind are drawn with a pointed tip.
    pub fn is_sharp(&self) -> bool {
        matches!(self, LeafType::Sharp | LeafType::Pointed)
    }
}

impl From<String> for LeafType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "round" => LeafType::Round,
            "sharp" => LeafType::Sharp,
            "pointed" => LeafType::Pointed,
            "heart" => LeafType::Heart,
            _ => LeafType::Other(tag),
        }
    }
}

impl From<&str> for LeafType {
    fn from(tag: &str) -> Self {
        LeafType::from(tag.to_owned())
    }
}

impl From<LeafType> for String {
    fn from(kind: LeafType) -> Self {
        match kind {
            LeafType::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for LeafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One garden entry as stored by the backend.
///
/// The renderer only reads it. `color` is kept as the raw CSS string so a
/// value the backend sends is rendered as given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Stem height in pixels.
    pub height: f32,
    pub branches: u32,
    pub leaf_type: LeafType,
    pub color: String,
    #[serde(default)]
    pub created_at: String,
}

impl Plant {
    pub fn new(height: f32, branches: u32, leaf_type: impl Into<LeafType>, color: &str) -> Self {
        Self {
            id: None,
            user_id: None,
            height,
            branches,
            leaf_type: leaf_type.into(),
            color: color.to_owned(),
            created_at: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_type_maps_known_tags_and_keeps_unknown_ones() {
        assert_eq!(LeafType::from("round"), LeafType::Round);
        assert_eq!(LeafType::from("pointed"), LeafType::Pointed);
        assert_eq!(LeafType::from("sharp"), LeafType::Sharp);
        assert_eq!(LeafType::from("heart"), LeafType::Heart);
        assert_eq!(
            LeafType::from("fern"),
            LeafType::Other("fern".to_owned())
        );
        assert_eq!(LeafType::from("fern").as_str(), "fern");
        assert!(LeafType::Pointed.is_sharp());
        assert!(!LeafType::from("fern").is_sharp());
    }

    #[test]
    fn plant_deserializes_backend_row() {
        let row = r##"{
            "id": 17,
            "user_id": "a1b2",
            "height": 245,
            "branches": 3,
            "leaf_type": "heart",
            "color": "#4a7c2c",
            "created_at": "2025-03-05T14:30:00+00:00"
        }"##;

        let plant: Plant = serde_json::from_str(row).unwrap();

        assert_eq!(plant.height, 245.0);
        assert_eq!(plant.branches, 3);
        assert_eq!(plant.leaf_type, LeafType::Heart);
        assert_eq!(plant.color, "#4a7c2c");
        assert_eq!(plant.user_id.as_deref(), Some("a1b2"));
    }

    #[test]
    fn plant_without_optional_fields_is_accepted() {
        let row = r##"{"height": 100, "branches": 0, "leaf_type": "round", "color": "#00ff00"}"##;
        let plant: Plant = serde_json::from_str(row).unwrap();

        assert!(plant.id.is_none());
        assert!(plant.created_at.is_empty());
        assert_eq!(plant, Plant::new(100.0, 0, "round", "#00ff00"));
    }

    #[test]
    fn leaf_type_serializes_back_to_its_tag() {
        let plant = Plant::new(50.0, 1, "fern", "#123456");
        let json = serde_json::to_value(&plant).unwrap();
        assert_eq!(json["leaf_type"], "fern");
    }

    #[test]
    fn pointed_tag_survives_a_round_trip() {
        let plant = Plant::new(10.0, 1, "pointed", "#ff0000");
        let json = serde_json::to_value(&plant).unwrap();
        assert_eq!(json["leaf_type"], "pointed");

        let back: Plant = serde_json::from_value(json).unwrap();
        assert_eq!(back.leaf_type, LeafType::Pointed);
        assert!(back.leaf_type.is_sharp());
    }
}
