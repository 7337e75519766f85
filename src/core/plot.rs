//! Plot descriptors as served by the `/api/plots` endpoint
//!
//! The payload is a JSON array; each entry describes one chart section.
//! Unknown type tags and positions are kept rather than rejected so that a
//! single odd entry never hides the rest of the dashboard.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::error::FetchError;

/// Renderer selected by the descriptor's `type` tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlotKind {
    Pie,
    Bar,
    /// Pie and bar side by side, plus an optional description panel
    Combo,
    /// Unrecognised tag; renders no chart body
    Other(String),
}

impl From<String> for PlotKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "pie" => PlotKind::Pie,
            "bar" => PlotKind::Bar,
            "combo" => PlotKind::Combo,
            _ => PlotKind::Other(tag),
        }
    }
}

impl PlotKind {
    pub fn tag(&self) -> &str {
        match self {
            PlotKind::Pie => "pie",
            PlotKind::Bar => "bar",
            PlotKind::Combo => "combo",
            PlotKind::Other(tag) => tag,
        }
    }
}

/// Side of a combo plot on which the description panel is drawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Position {
    Left,
    Right,
    Other(String),
}

impl From<String> for Position {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "left" => Position::Left,
            "right" => Position::Right,
            _ => Position::Other(tag),
        }
    }
}

/// One `{name, value}` pair of a chart series
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Build a point from one series entry
    ///
    /// Non-object entries are dropped. A missing or non-numeric `value` reads
    /// as 0; numeric strings are accepted.
    fn from_value(entry: &Value) -> Option<Self> {
        let Value::Object(fields) = entry else {
            return None;
        };

        let name = match fields.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        let value = match fields.get("value") {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0),
            _ => 0.0,
        };

        Some(Self::new(name, value))
    }
}

/// A single chart to render
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlotDescriptor {
    #[serde(rename = "type", default = "missing_kind", deserialize_with = "deserialize_kind")]
    pub kind: PlotKind,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_data")]
    pub data: Vec<DataPoint>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_position")]
    pub position: Option<Position>,
}

impl PlotDescriptor {
    pub fn new(kind: PlotKind, title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            kind,
            title: title.into(),
            data,
            description: None,
            position: None,
        }
    }

    #[cfg(test)]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[cfg(test)]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// True when there is description text to show
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Description split into paragraph lines, in order
    ///
    /// Absent or empty descriptions yield no lines. A trailing newline
    /// produces a trailing empty line.
    pub fn description_lines(&self) -> Vec<&str> {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => desc.split('\n').collect(),
            _ => Vec::new(),
        }
    }
}

fn missing_kind() -> PlotKind {
    PlotKind::Other(String::new())
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<PlotKind, D::Error>
where
    D: Deserializer<'de>,
{
    // Non-string tags are treated like any other unknown tag
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(tag) => PlotKind::from(tag),
        other => PlotKind::Other(other.to_string()),
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn deserialize_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_text(deserializer)?.unwrap_or_default())
}

fn deserialize_data<'de, D>(deserializer: D) -> Result<Vec<DataPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries.iter().filter_map(DataPoint::from_value).collect(),
        _ => Vec::new(),
    })
}

fn deserialize_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_text(deserializer)?.map(Position::from))
}

/// Parse the `/api/plots` response body
pub fn parse_plots(body: &str) -> Result<Vec<PlotDescriptor>, FetchError> {
    trace!(len = body.len(), "Parsing plots payload");

    // Decode entry by entry so one malformed record keeps its slot (and the
    // anchors of the records after it) instead of failing the whole payload
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let plots: Vec<PlotDescriptor> = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            PlotDescriptor::deserialize(entry).unwrap_or_else(|e| {
                warn!(index, error = %e, "Malformed plot entry, rendering it empty");
                PlotDescriptor::new(missing_kind(), "", Vec::new())
            })
        })
        .collect();

    debug!(count = plots.len(), "Parsed plot descriptors");
    Ok(plots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_kinds() {
        let body = r#"[
            {"type": "pie", "title": "Top 10 EV Makes", "data": [{"name": "TESLA", "value": 52}]},
            {"type": "bar", "title": "Models", "data": [{"name": "MODEL Y", "value": 12.5}]},
            {"type": "combo", "title": "Type", "data": [], "description": "x", "position": "left"},
            {"type": "line", "title": "Trend", "data": []}
        ]"#;

        let plots = parse_plots(body).unwrap();
        assert_eq!(plots.len(), 4);
        assert_eq!(plots[0].kind, PlotKind::Pie);
        assert_eq!(plots[0].data[0], DataPoint::new("TESLA", 52.0));
        assert_eq!(plots[1].kind, PlotKind::Bar);
        assert_eq!(plots[2].kind, PlotKind::Combo);
        assert_eq!(plots[2].position, Some(Position::Left));
        assert_eq!(plots[3].kind, PlotKind::Other("line".to_string()));
        assert_eq!(plots[3].kind.tag(), "line");
    }

    #[test]
    fn test_optional_fields_default() {
        let plots = parse_plots(r#"[{"type": "pie"}]"#).unwrap();
        assert_eq!(plots[0].title, "");
        assert!(plots[0].data.is_empty());
        assert_eq!(plots[0].description, None);
        assert_eq!(plots[0].position, None);
    }

    #[test]
    fn test_missing_type_is_other() {
        let plots = parse_plots(r#"[{"title": "untyped", "description": "d"}]"#).unwrap();
        assert_eq!(plots[0].kind, PlotKind::Other(String::new()));
        assert!(plots[0].has_description());
    }

    #[test]
    fn test_non_string_description_is_absent() {
        let plots =
            parse_plots(r#"[{"type": "bar", "description": 42, "position": null}]"#).unwrap();
        assert_eq!(plots[0].description, None);
        assert_eq!(plots[0].position, None);
    }

    #[test]
    fn test_unknown_position_kept() {
        let plots = parse_plots(r#"[{"type": "combo", "position": "center"}]"#).unwrap();
        assert_eq!(plots[0].position, Some(Position::Other("center".to_string())));
    }

    #[test]
    fn test_duplicate_names_kept() {
        let plots = parse_plots(
            r#"[{"type": "bar", "data": [{"name": "A", "value": 1}, {"name": "A", "value": 2}]}]"#,
        )
        .unwrap();
        assert_eq!(plots[0].data.len(), 2);
    }

    #[test]
    fn test_null_title_and_data_keep_other_entries() {
        let plots = parse_plots(
            r#"[
                {"type": "pie", "title": null, "data": null},
                {"type": "bar", "title": "ok", "data": [{"name": "A", "value": 1}]}
            ]"#,
        )
        .unwrap();
        assert_eq!(plots.len(), 2);
        assert_eq!(plots[0].kind, PlotKind::Pie);
        assert_eq!(plots[0].title, "");
        assert!(plots[0].data.is_empty());
        assert_eq!(plots[1].title, "ok");
        assert_eq!(plots[1].data, vec![DataPoint::new("A", 1.0)]);
    }

    #[test]
    fn test_lenient_data_points() {
        let plots = parse_plots(
            r#"[
                {"type": "pie", "title": 7, "data": [
                    {"name": "null", "value": null},
                    {"name": "text", "value": "12"},
                    {"name": "junk", "value": "n/a"},
                    {"name": 2019, "value": 4},
                    {"value": 1},
                    "not a point"
                ]},
                {"type": "bar", "data": {"name": "A"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(plots[0].title, "");
        assert_eq!(
            plots[0].data,
            vec![
                DataPoint::new("null", 0.0),
                DataPoint::new("text", 12.0),
                DataPoint::new("junk", 0.0),
                DataPoint::new("2019", 4.0),
                DataPoint::new("", 1.0),
            ]
        );
        assert!(plots[1].data.is_empty());
    }

    #[test]
    fn test_non_object_entry_keeps_its_slot() {
        let plots = parse_plots(r#"[null, {"type": "bar", "title": "second"}]"#).unwrap();
        assert_eq!(plots.len(), 2);
        assert_eq!(plots[0].kind, PlotKind::Other(String::new()));
        assert!(plots[0].data.is_empty());
        assert_eq!(plots[1].title, "second");
    }

    #[test]
    fn test_non_array_payload_rejected() {
        let err = parse_plots(r#"{"plots": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(parse_plots("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_description_lines() {
        let plot = PlotDescriptor::new(PlotKind::Pie, "t", vec![]).with_description("a\nb\nc");
        assert_eq!(plot.description_lines(), vec!["a", "b", "c"]);

        let plot = PlotDescriptor::new(PlotKind::Pie, "t", vec![]).with_description("a\n");
        assert_eq!(plot.description_lines(), vec!["a", ""]);

        let plot = PlotDescriptor::new(PlotKind::Pie, "t", vec![]).with_description("");
        assert!(plot.description_lines().is_empty());
        assert!(!plot.has_description());

        let plot = PlotDescriptor::new(PlotKind::Pie, "t", vec![]);
        assert!(plot.description_lines().is_empty());
    }
}
