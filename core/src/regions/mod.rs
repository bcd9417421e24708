//! Static region identification data
//!
//! Two fixed tables: map geometry identifier → region short code, and
//! short code → full name. Loaded at compile time, never mutated.

mod geometry;
mod names;

pub use geometry::GEOMETRY_TO_CODE;
pub use names::CODE_TO_NAME;

/// Short code of the aggregate pseudo-region covering the whole collection.
pub const AGGREGATE_CODE: &str = "US";
/// Full name of the aggregate pseudo-region.
pub const AGGREGATE_NAME: &str = "United States";

/// Resolve a clickable map shape's geometry identifier to a region short
/// code. Unknown identifiers (background clicks, decorations) return `None`
/// and must be treated as "ignore", not as an error.
pub fn lookup(geometry_id: &str) -> Option<&'static str> {
    GEOMETRY_TO_CODE.get(geometry_id).copied()
}

/// Full name for a region short code.
pub fn full_name(code: &str) -> Option<&'static str> {
    CODE_TO_NAME.get(code).copied()
}

/// Reverse lookup: the geometry identifier whose shape selects `code`.
pub fn geometry_for(code: &str) -> Option<&'static str> {
    GEOMETRY_TO_CODE
        .entries()
        .find_map(|(id, c)| (*c == code).then_some(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_states_and_aggregate() {
        assert_eq!(lookup("US06"), Some("CA"));
        assert_eq!(lookup("US00"), Some("US"));
        assert_eq!(lookup("US48"), Some("TX"));
        assert_eq!(lookup("US11"), Some("DC"));
    }

    #[test]
    fn lookup_ignores_unknown_geometry() {
        assert_eq!(lookup("not-a-real-id"), None);
        assert_eq!(lookup(""), None);
        // FIPS 03 was never assigned
        assert_eq!(lookup("US03"), None);
    }

    #[test]
    fn full_names_cover_every_mapped_code() {
        for code in GEOMETRY_TO_CODE.values() {
            assert!(
                full_name(code).is_some(),
                "no full name for short code {code}"
            );
        }
        assert_eq!(full_name("CA"), Some("California"));
        assert_eq!(full_name(AGGREGATE_CODE), Some(AGGREGATE_NAME));
    }

    #[test]
    fn table_covers_fifty_states_dc_and_aggregate() {
        assert_eq!(GEOMETRY_TO_CODE.len(), 52);
    }

    #[test]
    fn geometry_for_inverts_lookup() {
        assert_eq!(geometry_for("CA"), Some("US06"));
        assert_eq!(geometry_for("US"), Some("US00"));
        assert_eq!(geometry_for("ZZ"), None);
    }
}
