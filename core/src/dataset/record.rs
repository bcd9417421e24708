//! Raw dataset rows
//!
//! One [`RawRecord`] per CSV row, with every cell already normalized to a
//! [`Value`]: empty/missing cells become `Unknown`, numeric text becomes
//! `Number`, anything else stays `Text`. Nothing downstream ever sees an
//! absent field.

use hashbrown::HashMap;
use wattmap_types::Value;

/// Column positions from the dataset's header row.
pub struct Header {
    index: HashMap<String, usize>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        let index = columns
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();
        Self { index }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    fn cell(&self, row: &[String], column: &str) -> Value {
        let Some(&i) = self.index.get(column) else {
            return Value::Unknown;
        };
        let Some(raw) = row.get(i) else {
            return Value::Unknown;
        };
        normalize(raw)
    }
}

/// Missing or blank → `Unknown` (distinct from zero); parseable as f64 →
/// `Number`; otherwise the text itself.
fn normalize(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Unknown;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Text(trimmed.to_string()),
    }
}

/// One row of the source dataset, bound to its header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub state: Value,
    pub state_full: Value,
    pub fips: Value,
    pub production_consumption_net: Value,

    pub total_consumption: Value,
    pub percent_renewable_consumption: Value,
    pub percent_non_renewable_consumption: Value,
    pub coal_consumption: Value,
    pub gas_consumption: Value,
    pub oil_consumption: Value,
    pub nuclear_consumption: Value,
    pub biomass_consumption: Value,
    pub geothermal_consumption: Value,
    pub hydroelectric_consumption: Value,
    pub solar_consumption: Value,
    pub wind_consumption: Value,
    pub fuel_consumption: Value,

    pub total_production: Value,
    pub percent_renewable_production: Value,
    pub percent_non_renewable_production: Value,
    pub coal_production: Value,
    pub gas_production: Value,
    pub oil_production: Value,
    pub nuclear_production: Value,
    pub biomass_production: Value,
    pub other_production: Value,
}

impl RawRecord {
    pub fn from_row(header: &Header, row: &[String]) -> Self {
        Self {
            state: header.cell(row, "state"),
            state_full: header.cell(row, "state_full"),
            fips: header.cell(row, "fips"),
            production_consumption_net: header.cell(row, "production_consumption_net"),

            total_consumption: header.cell(row, "total_consumption"),
            percent_renewable_consumption: header.cell(row, "percent_renewable_consumption"),
            percent_non_renewable_consumption: header
                .cell(row, "percent_non_renewable_consumption"),
            coal_consumption: header.cell(row, "coal_consumption"),
            gas_consumption: header.cell(row, "gas_consumption"),
            oil_consumption: header.cell(row, "oil_consumption"),
            nuclear_consumption: header.cell(row, "nuclear_consumption"),
            biomass_consumption: header.cell(row, "biomass_consumption"),
            geothermal_consumption: header.cell(row, "geothermal_consumption"),
            hydroelectric_consumption: header.cell(row, "hydroelectric_consumption"),
            solar_consumption: header.cell(row, "solar_consumption"),
            wind_consumption: header.cell(row, "wind_consumption"),
            fuel_consumption: header.cell(row, "fuel_consumption"),

            total_production: header.cell(row, "total_production"),
            percent_renewable_production: header.cell(row, "percent_renewable_production"),
            percent_non_renewable_production: header
                .cell(row, "percent_non_renewable_production"),
            coal_production: header.cell(row, "coal_production"),
            gas_production: header.cell(row, "gas_production"),
            oil_production: header.cell(row, "oil_production"),
            nuclear_production: header.cell(row, "nuclear_production"),
            biomass_production: header.cell(row, "biomass_production"),
            other_production: header.cell(row, "other_production"),
        }
    }

    /// Region short code, if this row carries a usable one.
    pub fn short_code(&self) -> Option<&str> {
        match &self.state {
            Value::Text(code) if !code.is_empty() => Some(code),
            _ => None,
        }
    }
}
