//! Plain-data form of a saved layout.
//!
//! ```json
//! { "version": 1,
//!   "root": {"type": "splitter", "horizontal": true, "pos": 0.4,
//!            "pane0": {"type": "frame", ...}, "pane1": {"type": "center"}},
//!   "floating": [ ... ] }
//! ```
//!
//! `null` in a panel's `max_size` stands for an unbounded component.

use dockyard_common::{LayoutError, Vec2};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::panel::Scrollable;

/// Current snapshot format version.
pub const LAYOUT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub version: u32,
    pub root: NodeSnapshot,
    #[serde(default)]
    pub floating: Vec<FrameSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeSnapshot {
    Splitter(SplitterSnapshot),
    Frame(FrameSnapshot),
    /// The permanent center frame; its synthetic panel is recreated.
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterSnapshot {
    pub horizontal: bool,
    /// Ratio of pane0.
    pub pos: f64,
    pub pane0: Box<NodeSnapshot>,
    pub pane1: Box<NodeSnapshot>,
    /// `pos` is still the placeholder and is refitted on the next layout.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pending: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub floating: bool,
    pub pos: Vec2,
    pub size: Vec2,
    pub tab: i32,
    pub panels: Vec<PanelSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub panel_type: String,
    pub title: String,
    pub size: Vec2,
    pub min_size: Vec2,
    #[serde(
        serialize_with = "serialize_unbounded",
        deserialize_with = "deserialize_unbounded"
    )]
    pub max_size: Vec2,
    pub scrollable: Scrollable,
    pub moveable: bool,
    pub closeable: bool,
}

#[derive(Serialize, Deserialize)]
struct MaybeBounded {
    x: Option<f64>,
    y: Option<f64>,
}

fn serialize_unbounded<S: Serializer>(v: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
    let finite = |c: f64| c.is_finite().then_some(c);
    MaybeBounded {
        x: finite(v.x),
        y: finite(v.y),
    }
    .serialize(serializer)
}

fn deserialize_unbounded<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
    let raw = MaybeBounded::deserialize(deserializer)?;
    Ok(Vec2::new(
        raw.x.unwrap_or(f64::INFINITY),
        raw.y.unwrap_or(f64::INFINITY),
    ))
}

impl NodeSnapshot {
    /// Number of center tags in this subtree.
    pub fn center_count(&self) -> usize {
        match self {
            NodeSnapshot::Center => 1,
            NodeSnapshot::Frame(_) => 0,
            NodeSnapshot::Splitter(s) => s.pane0.center_count() + s.pane1.center_count(),
        }
    }
}

impl LayoutSnapshot {
    /// Structural checks run before a restore touches anything.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.version != LAYOUT_VERSION {
            return Err(LayoutError::UnsupportedVersion(self.version));
        }
        match self.root.center_count() {
            0 => Err(LayoutError::MissingCenter),
            1 => Ok(()),
            _ => Err(LayoutError::DuplicateCenter),
        }
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        serde_json::to_string_pretty(self).map_err(|e| LayoutError::Serialize(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(json).map_err(|e| LayoutError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(panel_type: &str) -> PanelSnapshot {
        PanelSnapshot {
            panel_type: panel_type.into(),
            title: "Console".into(),
            size: Vec2::new(300.0, -1.0),
            min_size: Vec2::new(50.0, 50.0),
            max_size: Vec2::new(f64::INFINITY, 600.0),
            scrollable: Scrollable { x: false, y: true },
            moveable: true,
            closeable: true,
        }
    }

    fn frame(panels: Vec<PanelSnapshot>) -> FrameSnapshot {
        FrameSnapshot {
            floating: false,
            pos: Vec2::new(0.5, 0.5),
            size: Vec2::ZERO,
            tab: 0,
            panels,
        }
    }

    fn sample() -> LayoutSnapshot {
        LayoutSnapshot {
            version: LAYOUT_VERSION,
            root: NodeSnapshot::Splitter(SplitterSnapshot {
                horizontal: true,
                pos: 0.4,
                pane0: Box::new(NodeSnapshot::Frame(frame(vec![panel("console")]))),
                pane1: Box::new(NodeSnapshot::Center),
                pending: false,
            }),
            floating: vec![],
        }
    }

    #[test]
    fn node_tags() {
        let json = serde_json::to_value(&sample()).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["root"]["type"], "splitter");
        assert_eq!(json["root"]["horizontal"], true);
        assert_eq!(json["root"]["pane0"]["type"], "frame");
        assert_eq!(json["root"]["pane0"]["tab"], 0);
        assert_eq!(json["root"]["pane1"]["type"], "center");
        assert!(json["root"].get("pending").is_none());
    }

    #[test]
    fn pending_fit_survives_json() {
        let mut snapshot = sample();
        if let NodeSnapshot::Splitter(root) = &mut snapshot.root {
            root.pending = true;
        }
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"pending\": true"));
        assert_eq!(LayoutSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn unbounded_max_size_is_null() {
        let json = serde_json::to_value(&sample()).unwrap();
        let max = &json["root"]["pane0"]["panels"][0]["max_size"];
        assert!(max["x"].is_null());
        assert_eq!(max["y"], 600.0);
        let scroll = &json["root"]["pane0"]["panels"][0]["scrollable"];
        assert_eq!(scroll["y"], true);
    }

    #[test]
    fn json_round_trip() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        let parsed = LayoutSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn missing_floating_list_defaults_empty() {
        let parsed = LayoutSnapshot::from_json(r#"{"version":1,"root":{"type":"center"}}"#).unwrap();
        assert!(parsed.floating.is_empty());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_structure() {
        let mut snapshot = sample();
        snapshot.version = 2;
        assert!(matches!(
            snapshot.validate(),
            Err(LayoutError::UnsupportedVersion(2))
        ));

        let mut snapshot = sample();
        snapshot.root = NodeSnapshot::Frame(frame(vec![]));
        assert!(matches!(snapshot.validate(), Err(LayoutError::MissingCenter)));

        let mut snapshot = sample();
        snapshot.root = NodeSnapshot::Splitter(SplitterSnapshot {
            horizontal: false,
            pos: 0.5,
            pane0: Box::new(NodeSnapshot::Center),
            pane1: Box::new(NodeSnapshot::Center),
            pending: false,
        });
        assert!(matches!(snapshot.validate(), Err(LayoutError::DuplicateCenter)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = LayoutSnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
        let err = LayoutSnapshot::from_json(r#"{"version":1,"root":{"type":"bogus"}}"#).unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
    }
}
