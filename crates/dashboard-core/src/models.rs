//! Dashboard Models
//!
//! Data structures matching the server API payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{DashboardError, DashboardResult};

/// Inventory item as listed by `get_dashboard_data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub supplier: String,
    pub location: String,
}

impl InventoryItem {
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
            supplier: self.supplier.clone(),
            location: self.location.clone(),
        }
    }
}

/// Item fields without the id (add body, `get_item` response)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub supplier: String,
    pub location: String,
}

impl ItemFields {
    /// Build from raw form inputs. Quantity and price must parse.
    pub fn from_form(
        name: &str,
        quantity: &str,
        price: &str,
        supplier: &str,
        location: &str,
    ) -> DashboardResult<Self> {
        let quantity = quantity
            .trim()
            .parse::<i32>()
            .map_err(|_| DashboardError::Parse(format!("quantity '{}' is not a whole number", quantity)))?;
        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|_| DashboardError::Parse(format!("price '{}' is not a number", price)))?;
        Ok(Self {
            name: name.trim().to_string(),
            quantity,
            price,
            supplier: supplier.trim().to_string(),
            location: location.trim().to_string(),
        })
    }
}

/// One complete dashboard payload. Chart fields hold serialized figures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub total_items: u64,
    /// Django encodes `Decimal` sums as strings, and `0` when there are no items
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_value: f64,
    #[serde(rename = "stock_chart_data", default)]
    pub stock_chart: Option<String>,
    #[serde(rename = "location_chart_data", default)]
    pub location_chart: Option<String>,
    #[serde(rename = "supplier_chart_data", default)]
    pub supplier_chart: Option<String>,
    #[serde(rename = "forecast_chart_data", default)]
    pub forecast_chart: Option<String>,
    #[serde(rename = "anomalies_chart_data", default)]
    pub anomalies_chart: Option<String>,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n.as_f64().unwrap_or_default()),
        Value::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!("expected number, got {}", other))),
    }
}

/// Element ids carrying chart JSON inside the `/insights/` fragment
pub const INSIGHTS_FORECAST_ID: &str = "forecast-chart-data";
pub const INSIGHTS_ANOMALIES_ID: &str = "anomalies-chart-data";
pub const INSIGHTS_STOCK_TREND_ID: &str = "stock-trend-data";

/// Charts extracted from the insights page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsightsSnapshot {
    pub forecast: Option<ChartSpec>,
    pub anomalies: Option<ChartSpec>,
    pub stock_trend: Option<ChartSpec>,
}

impl InsightsSnapshot {
    /// Build from the raw text content of each embedded data element.
    pub fn from_fragments(
        forecast: Option<&str>,
        anomalies: Option<&str>,
        stock_trend: Option<&str>,
    ) -> DashboardResult<Self> {
        let parse = |raw: Option<&str>| match raw {
            Some(raw) => ChartSpec::parse(raw),
            None => Ok(None),
        };
        Ok(Self {
            forecast: parse(forecast)?,
            anomalies: parse(anomalies)?,
            stock_trend: parse(stock_trend)?,
        })
    }
}

/// Opaque chart description handed to the charting library
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub data: Value,
    pub layout: Value,
}

impl ChartSpec {
    /// Parse a serialized figure.
    ///
    /// Accepts a full figure (`{"data": [...], "layout": {...}}`) or a bare
    /// trace array. Blank input, `null` and figures without traces are absent.
    pub fn parse(raw: &str) -> DashboardResult<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(raw)?;
        let (data, layout) = match value {
            Value::Null => return Ok(None),
            Value::Array(traces) => (Value::Array(traces), Value::Object(Default::default())),
            Value::Object(mut figure) => {
                let data = figure.remove("data").unwrap_or(Value::Array(Vec::new()));
                let layout = figure
                    .remove("layout")
                    .unwrap_or(Value::Object(Default::default()));
                (data, layout)
            }
            other => {
                return Err(DashboardError::Parse(format!("chart figure must be an object, got {}", other)))
            }
        };
        match &data {
            Value::Array(traces) if traces.is_empty() => Ok(None),
            Value::Array(_) => Ok(Some(Self { data, layout })),
            _ => Err(DashboardError::Parse("chart data must be an array".into())),
        }
    }
}

/// `{"status": "success"}` acknowledgement returned by mutation endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiStatus {
    pub fn into_result(self) -> DashboardResult<()> {
        if self.status == "success" {
            Ok(())
        } else {
            Err(DashboardError::Rejected(
                self.message.unwrap_or_else(|| format!("status '{}'", self.status)),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_server_payload() {
        let body = r#"{
            "total_items": 1,
            "total_value": "2.50",
            "stock_chart_data": "{\"data\":[{\"type\":\"scatter\"}],\"layout\":{\"title\":\"Stock\"}}",
            "location_chart_data": "{\"data\":[],\"layout\":{}}",
            "items": [{"id": 3, "name": "Widget", "quantity": 5, "price": 2.5, "supplier": "Acme", "location": "A1"}]
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].name, "Widget");
        assert_eq!(snapshot.total_value, 2.5);
        assert!(snapshot.forecast_chart.is_none());
        assert!(snapshot.supplier_chart.is_none());
    }

    #[test]
    fn test_total_value_zero_integer() {
        let snapshot: DashboardSnapshot = serde_json::from_str(r#"{"items": [], "total_value": 0}"#).unwrap();
        assert_eq!(snapshot.total_value, 0.0);
    }

    #[test]
    fn test_chart_spec_parse() {
        let spec = ChartSpec::parse(r#"{"data":[{"x":[1]}],"layout":{"title":"T"}}"#)
            .unwrap()
            .unwrap();
        assert_eq!(spec.layout["title"], "T");

        let bare = ChartSpec::parse(r#"[{"x":[1]}]"#).unwrap().unwrap();
        assert!(bare.layout.is_object());
    }

    #[test]
    fn test_chart_spec_absent_forms() {
        assert_eq!(ChartSpec::parse("").unwrap(), None);
        assert_eq!(ChartSpec::parse("null").unwrap(), None);
        assert_eq!(ChartSpec::parse("[]").unwrap(), None);
        assert_eq!(ChartSpec::parse(r#"{"data":[],"layout":{}}"#).unwrap(), None);
        assert!(ChartSpec::parse("42").is_err());
        assert!(ChartSpec::parse("{not json").is_err());
    }

    #[test]
    fn test_item_fields_from_form() {
        let fields = ItemFields::from_form(" Widget ", "5", "2.50", "Acme", "A1").unwrap();
        assert_eq!(fields.name, "Widget");
        assert_eq!(fields.quantity, 5);
        assert_eq!(fields.price, 2.5);
        assert!(ItemFields::from_form("Widget", "five", "2.50", "Acme", "A1").is_err());
    }

    #[test]
    fn test_api_status() {
        let ok: ApiStatus = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(ok.into_result().is_ok());
        let err: ApiStatus = serde_json::from_str(r#"{"status":"error","message":"Location already exists"}"#).unwrap();
        assert_eq!(
            err.into_result(),
            Err(DashboardError::Rejected("Location already exists".into()))
        );
    }
}
