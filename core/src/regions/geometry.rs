//! Map geometry identifier (FIPS-derived) → region short code

use phf::phf_map;

/// FIPS-style identifiers carried by the clickable map shapes. `US00` is the
/// aggregate pseudo-region; gaps (03, 07, 14, 43, 52) were never assigned.
pub static GEOMETRY_TO_CODE: phf::Map<&'static str, &'static str> = phf_map! {
    "US00" => "US",
    "US01" => "AL",
    "US02" => "AK",
    "US04" => "AZ",
    "US05" => "AR",
    "US06" => "CA",
    "US08" => "CO",
    "US09" => "CT",
    "US10" => "DE",
    "US11" => "DC",
    "US12" => "FL",
    "US13" => "GA",
    "US15" => "HI",
    "US16" => "ID",
    "US17" => "IL",
    "US18" => "IN",
    "US19" => "IA",
    "US20" => "KS",
    "US21" => "KY",
    "US22" => "LA",
    "US23" => "ME",
    "US24" => "MD",
    "US25" => "MA",
    "US26" => "MI",
    "US27" => "MN",
    "US28" => "MS",
    "US29" => "MO",
    "US30" => "MT",
    "US31" => "NE",
    "US32" => "NV",
    "US33" => "NH",
    "US34" => "NJ",
    "US35" => "NM",
    "US36" => "NY",
    "US37" => "NC",
    "US38" => "ND",
    "US39" => "OH",
    "US40" => "OK",
    "US41" => "OR",
    "US42" => "PA",
    "US44" => "RI",
    "US45" => "SC",
    "US46" => "SD",
    "US47" => "TN",
    "US48" => "TX",
    "US49" => "UT",
    "US50" => "VT",
    "US51" => "VA",
    "US53" => "WA",
    "US54" => "WV",
    "US55" => "WI",
    "US56" => "WY",
};
