//! Selection state machine
//!
//! Tracks which region the dashboard is focused on:
//! - Aggregate: the whole-collection view, selected by default
//! - Region(code): a single region, toggled off by re-selecting it
//!
//! Clicks that resolve to no region (map background) deselect a region but
//! are ignored while already on the aggregate view.

use wattmap_types::RegionFacts;

use crate::regions::{self, AGGREGATE_CODE, AGGREGATE_NAME};

/// Currently selected region. Lives for the process lifetime; mutated only
/// by the view controller in response to clicks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Aggregate,
    Region(String),
}

impl Selection {
    /// Region short code for this selection ("US" for the aggregate view).
    pub fn code(&self) -> &str {
        match self {
            Selection::Aggregate => AGGREGATE_CODE,
            Selection::Region(code) => code,
        }
    }

    /// Region full name, falling back to the short code for codes outside
    /// the static name table.
    pub fn full_name(&self) -> &str {
        match self {
            Selection::Aggregate => AGGREGATE_NAME,
            Selection::Region(code) => regions::full_name(code).unwrap_or(code),
        }
    }

    /// Facts for this selection, if the index has them.
    pub fn facts<'a>(&self, index: &'a crate::FactIndex) -> Option<&'a RegionFacts> {
        index.get(self.code())
    }

    /// Advance the machine for one map click.
    ///
    /// `resolved` is the click's geometry identifier resolved through the
    /// region index (`None` for background clicks). Returns the next state
    /// when a transition fires (every returned state must be rendered), or
    /// `None` when the click changes nothing.
    pub fn apply_click(&self, resolved: Option<&str>) -> Option<Selection> {
        match resolved {
            Some(code) if code == self.code() => Some(Selection::Aggregate),
            Some(code) if code == AGGREGATE_CODE => Some(Selection::Aggregate),
            Some(code) => Some(Selection::Region(code.to_string())),
            None => match self {
                Selection::Aggregate => None,
                Selection::Region(_) => Some(Selection::Aggregate),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_aggregate() {
        assert_eq!(Selection::default(), Selection::Aggregate);
        assert_eq!(Selection::default().code(), "US");
        assert_eq!(Selection::default().full_name(), "United States");
    }

    #[test]
    fn selecting_a_region_then_reselecting_toggles_off() {
        let state = Selection::Aggregate;
        let state = state.apply_click(Some("CA")).unwrap();
        assert_eq!(state, Selection::Region("CA".into()));
        let state = state.apply_click(Some("CA")).unwrap();
        assert_eq!(state, Selection::Aggregate);
    }

    #[test]
    fn selecting_a_different_region_switches_directly() {
        let state = Selection::Region("CA".into());
        let state = state.apply_click(Some("TX")).unwrap();
        assert_eq!(state, Selection::Region("TX".into()));
    }

    #[test]
    fn background_click_is_idempotent_on_aggregate() {
        assert_eq!(Selection::Aggregate.apply_click(None), None);
    }

    #[test]
    fn background_click_deselects_a_region() {
        let state = Selection::Region("CA".into());
        assert_eq!(state.apply_click(None), Some(Selection::Aggregate));
    }

    #[test]
    fn clicking_the_aggregate_shape_rerenders_aggregate() {
        // "US" resolves to the aggregate; the transition fires (and renders)
        // even though the state does not change.
        assert_eq!(
            Selection::Aggregate.apply_click(Some("US")),
            Some(Selection::Aggregate)
        );
    }

    #[test]
    fn region_full_name_resolves_through_table() {
        assert_eq!(Selection::Region("TX".into()).full_name(), "Texas");
        assert_eq!(Selection::Region("ZZ".into()).full_name(), "ZZ");
    }
}
