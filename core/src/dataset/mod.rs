//! Dataset loading and transformation
//!
//! Fetches the row-oriented energy CSV, normalizes every cell to a
//! [`Value`], and reshapes the rows into the per-region [`FactIndex`] the
//! dashboard reads from. The index is rebuilt from scratch on every load
//! (one load per visualization-mode change) and never mutated afterwards.

mod csv;
mod loader;
mod record;

pub use loader::{DatasetSource, HttpDatasetSource, load};
pub use record::{Header, RawRecord};

use hashbrown::HashMap;
use tracing::warn;
use wattmap_types::{
    ConsumptionBreakdown, NonRenewableBreakdown, ProductionBreakdown, RegionFacts,
    RenewableConsumption, RenewableProduction, Value,
};

use crate::error::DatasetError;

/// Region short code → facts. Includes the aggregate "US" entry when the
/// dataset carries one.
pub type FactIndex = HashMap<String, RegionFacts>;

/// Parse the raw CSV text into records. The first non-empty line is the
/// header and must contain a `state` column.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>, DatasetError> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return Err(DatasetError::MissingHeader);
    };
    let header = Header::new(
        csv::parse_line(header_line)
            .map_err(|reason| DatasetError::Csv { line: 1, reason })?,
    );
    if !header.contains("state") {
        return Err(DatasetError::MissingColumn { column: "state" });
    }

    let mut records = Vec::new();
    for (line_no, line) in lines {
        let row = csv::parse_line(line).map_err(|reason| DatasetError::Csv {
            line: line_no + 1,
            reason,
        })?;
        records.push(RawRecord::from_row(&header, &row));
    }
    Ok(records)
}

/// Reshape raw rows into the per-region fact index.
///
/// Rows without a usable short code are skipped. Duplicate short codes are
/// last-write-wins, matching the upstream source's (unspecified) behavior.
pub fn build_fact_index(records: Vec<RawRecord>) -> FactIndex {
    let mut index = FactIndex::with_capacity(records.len());

    for record in records {
        let Some(code) = record.short_code().map(str::to_string) else {
            warn!(state = ?record.state, "skipping dataset row without a region short code");
            continue;
        };
        index.insert(code, region_facts(record));
    }

    index
}

fn region_facts(r: RawRecord) -> RegionFacts {
    RegionFacts {
        full_name: r.state_full,
        geometry_id: r.fips,
        net_balance: r.production_consumption_net,
        consumption: ConsumptionBreakdown {
            total: r.total_consumption,
            percent_renewable: r.percent_renewable_consumption,
            percent_non_renewable: r.percent_non_renewable_consumption,
            non_renewable: NonRenewableBreakdown {
                coal: r.coal_consumption,
                gas: r.gas_consumption,
                oil: r.oil_consumption,
                nuclear: r.nuclear_consumption,
            },
            renewable: RenewableConsumption {
                biomass: r.biomass_consumption,
                geothermal: r.geothermal_consumption,
                hydroelectric: r.hydroelectric_consumption,
                solar: r.solar_consumption,
                wind: r.wind_consumption,
            },
        },
        production: ProductionBreakdown {
            total: r.total_production,
            percent_renewable: r.percent_renewable_production,
            percent_non_renewable: r.percent_non_renewable_production,
            non_renewable: NonRenewableBreakdown {
                coal: r.coal_production,
                gas: r.gas_production,
                oil: r.oil_production,
                nuclear: r.nuclear_production,
            },
            renewable: RenewableProduction {
                biomass: r.biomass_production,
                other: r.other_production,
                // The dataset tracks fuel-ethanol production in this column.
                fuel: r.fuel_consumption,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
state,state_full,fips,total_consumption,percent_renewable_consumption,coal_consumption,gas_consumption,solar_consumption,wind_consumption,total_production,coal_production,other_production,fuel_consumption,production_consumption_net
CA,California,US06,2500.5,28.1,10,300.25,,120,1800,5,40,22,-700.5
TX,Texas,US48,4200,12.9,400,1100,90,850,5100,320,60,80,900
US,United States,US00,97000,21.3,9000,32000,1600,3800,95500,10500,700,1100,-1500
";

    #[test]
    fn parse_records_reads_every_row() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].short_code(), Some("CA"));
        assert_eq!(records[2].short_code(), Some("US"));
    }

    #[test]
    fn missing_header_and_missing_state_column_are_errors() {
        assert!(matches!(parse_records(""), Err(DatasetError::MissingHeader)));
        assert!(matches!(
            parse_records("a,b\n1,2\n"),
            Err(DatasetError::MissingColumn { column: "state" })
        ));
    }

    #[test]
    fn every_fact_leaf_is_number_text_or_unknown() {
        let index = build_fact_index(parse_records(SAMPLE).unwrap());
        let ca = &index["CA"];
        assert_eq!(ca.consumption.non_renewable.coal, Value::Number(10.0));
        // blank cell stays distinguishable from zero
        assert_eq!(ca.consumption.renewable.solar, Value::Unknown);
        // column absent from this sample's header
        assert_eq!(ca.consumption.non_renewable.oil, Value::Unknown);
        assert_eq!(ca.full_name, Value::Text("California".into()));
        assert_eq!(ca.geometry_id, Value::Text("US06".into()));
        assert_eq!(ca.net_balance, Value::Number(-700.5));
    }

    #[test]
    fn production_fuel_comes_from_fuel_consumption_column() {
        let index = build_fact_index(parse_records(SAMPLE).unwrap());
        assert_eq!(index["CA"].production.renewable.fuel, Value::Number(22.0));
    }

    #[test]
    fn aggregate_row_is_indexed_like_any_region() {
        let index = build_fact_index(parse_records(SAMPLE).unwrap());
        assert_eq!(index["US"].consumption.total, Value::Number(97000.0));
    }

    #[test]
    fn duplicate_short_codes_are_last_write_wins() {
        let text = "\
state,coal_consumption
CA,1
CA,2
";
        let index = build_fact_index(parse_records(text).unwrap());
        assert_eq!(index.len(), 1);
        assert_eq!(index["CA"].consumption.non_renewable.coal, Value::Number(2.0));
    }

    #[test]
    fn rows_without_short_code_are_skipped() {
        let text = "\
state,coal_consumption
,5
CA,1
";
        let index = build_fact_index(parse_records(text).unwrap());
        assert_eq!(index.len(), 1);
        assert!(index.contains_key("CA"));
    }
}
