//! Shared data model types for WATTMAP
//!
//! This crate contains the serializable region/energy data model shared
//! between the core engine (wattmap-core) and the frontends. Every leaf of
//! the model is a [`Value`], so "no data" survives serialization as an
//! explicit sentinel instead of collapsing into null or zero.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─────────────────────────────────────────────────────────────────────────────
// Value, the Unknown sentinel
// ─────────────────────────────────────────────────────────────────────────────

/// A single dataset cell: a number, a string, or explicitly unknown.
///
/// `Unknown` is distinct from zero and from the empty string: it marks a
/// field the source dataset had no value for. On the wire it is the literal
/// string `"Unknown"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Unknown,
}

/// String form of [`Value::Unknown`], on the wire and in fact sheets.
pub const UNKNOWN: &str = "Unknown";

impl Value {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Numeric view, if this cell holds a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Unknown
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Unknown => f.write_str(UNKNOWN),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, a string, or null")
            }

            fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
                Ok(Value::Number(n))
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
                Ok(Value::Number(n as f64))
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
                Ok(Value::Number(n as f64))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
                if s == UNKNOWN {
                    Ok(Value::Unknown)
                } else {
                    Ok(Value::Text(s.to_string()))
                }
            }

            fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Unknown)
            }

            fn visit_none<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Unknown)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Breakdown structures
// ─────────────────────────────────────────────────────────────────────────────

/// Non-renewable source split, shared by consumption and production.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonRenewableBreakdown {
    pub coal: Value,
    pub gas: Value,
    pub oil: Value,
    pub nuclear: Value,
}

impl NonRenewableBreakdown {
    /// Declaration-ordered (label, value) pairs for fact-sheet rendering.
    pub fn entries(&self) -> [(&'static str, &Value); 4] {
        [
            ("coal", &self.coal),
            ("gas", &self.gas),
            ("oil", &self.oil),
            ("nuclear", &self.nuclear),
        ]
    }
}

/// Renewable source split on the consumption side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenewableConsumption {
    pub biomass: Value,
    pub geothermal: Value,
    pub hydroelectric: Value,
    pub solar: Value,
    pub wind: Value,
}

impl RenewableConsumption {
    pub fn entries(&self) -> [(&'static str, &Value); 5] {
        [
            ("biomass", &self.biomass),
            ("geothermal", &self.geothermal),
            ("hydroelectric", &self.hydroelectric),
            ("solar", &self.solar),
            ("wind", &self.wind),
        ]
    }
}

/// Renewable source split on the production side.
///
/// `fuel` is populated from the dataset's `fuel_consumption` column; the
/// upstream dataset tracks fuel-ethanol production there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenewableProduction {
    pub biomass: Value,
    pub other: Value,
    pub fuel: Value,
}

impl RenewableProduction {
    pub fn entries(&self) -> [(&'static str, &Value); 3] {
        [
            ("biomass", &self.biomass),
            ("other", &self.other),
            ("fuel", &self.fuel),
        ]
    }
}

/// One region's consumption, split renewable / non-renewable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionBreakdown {
    pub total: Value,
    pub percent_renewable: Value,
    pub percent_non_renewable: Value,
    pub non_renewable: NonRenewableBreakdown,
    pub renewable: RenewableConsumption,
}

/// One region's production, split renewable / non-renewable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionBreakdown {
    pub total: Value,
    pub percent_renewable: Value,
    pub percent_non_renewable: Value,
    pub non_renewable: NonRenewableBreakdown,
    pub renewable: RenewableProduction,
}

/// Everything the dashboard knows about one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionFacts {
    pub full_name: Value,
    pub geometry_id: Value,
    /// Production minus consumption, as precomputed by the dataset.
    pub net_balance: Value,
    pub consumption: ConsumptionBreakdown,
    pub production: ProductionBreakdown,
}

// ─────────────────────────────────────────────────────────────────────────────
// Remote summary wire types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the remote summarization endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Region short code, e.g. "CA".
    pub region: String,
    pub data: RegionFacts,
    /// Which panel this request feeds: "summary" or "recommendation".
    pub id: String,
}

/// Response body from the remote summarization endpoint.
///
/// The endpoint reports its own status inside the JSON body; only
/// `statusCode == 200` carries usable `info` markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub info: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Visualization columns
// ─────────────────────────────────────────────────────────────────────────────

/// Dataset metric columns the map can be colored by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VizColumn {
    #[default]
    PercentRenewableConsumption,
    PercentNonRenewableConsumption,
    PercentRenewableProduction,
    PercentNonRenewableProduction,
    TotalConsumption,
    TotalProduction,
    ProductionConsumptionNet,
}

impl VizColumn {
    pub const ALL: [VizColumn; 7] = [
        VizColumn::PercentRenewableConsumption,
        VizColumn::PercentNonRenewableConsumption,
        VizColumn::PercentRenewableProduction,
        VizColumn::PercentNonRenewableProduction,
        VizColumn::TotalConsumption,
        VizColumn::TotalProduction,
        VizColumn::ProductionConsumptionNet,
    ];

    /// CSV column name in the source dataset.
    pub fn column_name(self) -> &'static str {
        match self {
            VizColumn::PercentRenewableConsumption => "percent_renewable_consumption",
            VizColumn::PercentNonRenewableConsumption => "percent_non_renewable_consumption",
            VizColumn::PercentRenewableProduction => "percent_renewable_production",
            VizColumn::PercentNonRenewableProduction => "percent_non_renewable_production",
            VizColumn::TotalConsumption => "total_consumption",
            VizColumn::TotalProduction => "total_production",
            VizColumn::ProductionConsumptionNet => "production_consumption_net",
        }
    }

    /// Human-readable label for the map title.
    pub fn label(self) -> &'static str {
        match self {
            VizColumn::PercentRenewableConsumption => "Percent Renewable Consumption",
            VizColumn::PercentNonRenewableConsumption => "Percent Non-Renewable Consumption",
            VizColumn::PercentRenewableProduction => "Percent Renewable Production",
            VizColumn::PercentNonRenewableProduction => "Percent Non-Renewable Production",
            VizColumn::TotalConsumption => "Total Consumption",
            VizColumn::TotalProduction => "Total Production",
            VizColumn::ProductionConsumptionNet => "Net Production-Consumption",
        }
    }

    /// Color scale for this column: non-renewable metrics get the blue
    /// palette, everything else green.
    pub fn palette(self) -> Palette {
        if self.column_name().contains("non_renewable") {
            Palette::Blues
        } else {
            Palette::Greens
        }
    }
}

impl FromStr for VizColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VizColumn::ALL
            .into_iter()
            .find(|c| c.column_name() == s)
            .ok_or_else(|| format!("unknown visualization column '{s}'"))
    }
}

impl fmt::Display for VizColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Map color palette, chosen per visualization column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Greens,
    Blues,
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Palette::Greens => f.write_str("Greens"),
            Palette::Blues => f.write_str("Blues"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_serializes_unknown_as_string() {
        let json = serde_json::to_string(&Value::Unknown).unwrap();
        assert_eq!(json, "\"Unknown\"");
        assert_eq!(serde_json::to_string(&Value::Number(10.0)).unwrap(), "10.0");
        assert_eq!(
            serde_json::to_string(&Value::Text("CA".into())).unwrap(),
            "\"CA\""
        );
    }

    #[test]
    fn value_deserializes_null_and_unknown_to_sentinel() {
        assert_eq!(serde_json::from_str::<Value>("null").unwrap(), Value::Unknown);
        assert_eq!(
            serde_json::from_str::<Value>("\"Unknown\"").unwrap(),
            Value::Unknown
        );
        assert_eq!(
            serde_json::from_str::<Value>("12.5").unwrap(),
            Value::Number(12.5)
        );
        assert_eq!(
            serde_json::from_str::<Value>("\"hi\"").unwrap(),
            Value::Text("hi".into())
        );
    }

    #[test]
    fn summary_request_wire_shape() {
        let req = SummaryRequest {
            region: "CA".into(),
            data: RegionFacts::default(),
            id: "summary".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["region"], "CA");
        assert_eq!(json["id"], "summary");
        assert_eq!(json["data"]["consumption"]["non_renewable"]["coal"], "Unknown");
    }

    #[test]
    fn summary_response_status_code_is_camel_case() {
        let res: SummaryResponse =
            serde_json::from_str(r#"{"statusCode": 200, "info": "ok"}"#).unwrap();
        assert_eq!(res.status_code, 200);
        assert_eq!(res.info.as_deref(), Some("ok"));
        // `info` may be absent on error responses
        let err: SummaryResponse = serde_json::from_str(r#"{"statusCode": 429}"#).unwrap();
        assert!(err.info.is_none());
    }

    #[test]
    fn viz_column_round_trips_through_column_name() {
        for col in VizColumn::ALL {
            assert_eq!(col.column_name().parse::<VizColumn>().unwrap(), col);
        }
        assert!("not_a_column".parse::<VizColumn>().is_err());
    }

    #[test]
    fn non_renewable_columns_use_blues() {
        assert_eq!(
            VizColumn::PercentNonRenewableConsumption.palette(),
            Palette::Blues
        );
        assert_eq!(
            VizColumn::PercentRenewableConsumption.palette(),
            Palette::Greens
        );
        assert_eq!(VizColumn::TotalProduction.palette(), Palette::Greens);
    }

    #[test]
    fn breakdown_entries_preserve_declaration_order() {
        let nr = NonRenewableBreakdown::default();
        let names: Vec<&str> = nr.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["coal", "gas", "oil", "nuclear"]);

        let rc = RenewableConsumption::default();
        let names: Vec<&str> = rc.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["biomass", "geothermal", "hydroelectric", "solar", "wind"]
        );
    }
}
