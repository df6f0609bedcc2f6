//! Filter model for catalog list queries.
//!
//! A [`ListFilter`] is built from an already-deserialized request payload and
//! handed to the query builder in `paddock_db`. Only type coercion happens
//! here; whether a sort column exists is decided against the catalog's
//! allow-list by the query builder.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Tri-state visibility selector.
///
/// `Unset` is not "everything": it selects hidden rows only, which is the
/// behaviour list callers have always relied on. Use [`Visibility::Any`] to
/// drop the predicate entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Unset,
    Only(bool),
    Any,
}

impl Visibility {
    /// Build a visibility selector from the two request flags.
    ///
    /// `any_visibility = true` combined with an explicit `visible` value is
    /// contradictory and rejected.
    pub fn from_request(visible: Option<bool>, any_visibility: bool) -> Result<Self, CoreError> {
        match (visible, any_visibility) {
            (Some(_), true) => Err(CoreError::InvalidFilter(
                "`visible` cannot be combined with `any_visibility`".to_string(),
            )),
            (None, true) => Ok(Self::Any),
            (Some(v), false) => Ok(Self::Only(v)),
            (None, false) => Ok(Self::Unset),
        }
    }

    /// Value bound to the `visible = ?` predicate, `None` when no predicate applies.
    pub fn predicate_value(self) -> Option<bool> {
        match self {
            Self::Unset => Some(false),
            Self::Only(v) => Some(v),
            Self::Any => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(CoreError::InvalidFilter(format!(
                "unknown sort direction '{s}', expected 'asc' or 'desc'"
            )))
        }
    }
}

/// Requested ordering. The column is unvalidated until it meets a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Combine the `column` / `order_by` request fields.
    ///
    /// Both must be present and non-blank for a sort to apply; a partial spec
    /// yields `Ok(None)`. An unrecognised direction is an error.
    pub fn from_parts(
        column: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Option<Self>, CoreError> {
        let column = column.map(str::trim).filter(|c| !c.is_empty());
        let direction = direction.map(str::trim).filter(|d| !d.is_empty());

        match (column, direction) {
            (Some(column), Some(direction)) => Ok(Some(Self::new(column, direction.parse()?))),
            _ => Ok(None),
        }
    }
}

// ---------------------------------------------------------------------------
// ListFilter
// ---------------------------------------------------------------------------

/// Everything a caller may ask of a catalog list query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub id: Option<DbId>,
    pub visibility: Visibility,
    /// Grouping ids (race meetings). `Some(vec![])` matches nothing.
    pub group_ids: Option<Vec<DbId>>,
    pub sort: Option<SortSpec>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter for a single record regardless of visibility.
    pub fn by_id(id: DbId) -> Self {
        Self {
            id: Some(id),
            visibility: Visibility::Any,
            ..Self::default()
        }
    }

    /// Ids are positive; zero or negative means "no id filter".
    pub fn with_id(mut self, id: Option<DbId>) -> Self {
        self.id = id.filter(|id| *id > 0);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_group_ids(mut self, group_ids: Option<Vec<DbId>>) -> Self {
        self.group_ids = group_ids;
        self
    }

    pub fn with_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Visibility ----------------------------------------------------------

    #[test]
    fn unset_visibility_defaults_to_hidden_rows() {
        assert_eq!(Visibility::Unset.predicate_value(), Some(false));
    }

    #[test]
    fn any_visibility_has_no_predicate() {
        assert_eq!(Visibility::Any.predicate_value(), None);
    }

    #[test]
    fn visibility_from_request_flags() {
        assert_eq!(Visibility::from_request(None, false), Ok(Visibility::Unset));
        assert_eq!(
            Visibility::from_request(Some(true), false),
            Ok(Visibility::Only(true))
        );
        assert_eq!(Visibility::from_request(None, true), Ok(Visibility::Any));
    }

    #[test]
    fn visible_with_any_visibility_is_rejected() {
        let err = Visibility::from_request(Some(false), true).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilter(_)));
    }

    // -- SortDirection -------------------------------------------------------

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!(" Desc ".parse::<SortDirection>(), Ok(SortDirection::Desc));
    }

    #[test]
    fn unknown_direction_is_invalid_filter() {
        let err = "sideways".parse::<SortDirection>().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidFilter(
                "unknown sort direction 'sideways', expected 'asc' or 'desc'".to_string()
            )
        );
    }

    // -- SortSpec ------------------------------------------------------------

    #[test]
    fn full_sort_spec() {
        let spec = SortSpec::from_parts(Some("advertised_start_time"), Some("desc")).unwrap();
        assert_eq!(
            spec,
            Some(SortSpec::new("advertised_start_time", SortDirection::Desc))
        );
    }

    #[test]
    fn partial_sort_spec_means_no_sort() {
        assert_eq!(SortSpec::from_parts(Some("name"), None), Ok(None));
        assert_eq!(SortSpec::from_parts(None, Some("asc")), Ok(None));
        assert_eq!(SortSpec::from_parts(Some(""), Some("asc")), Ok(None));
        // Direction is not validated when the spec is partial.
        assert_eq!(SortSpec::from_parts(None, Some("bogus")), Ok(None));
    }

    #[test]
    fn full_sort_spec_with_bad_direction_fails() {
        assert!(SortSpec::from_parts(Some("name"), Some("up")).is_err());
    }

    // -- ListFilter ----------------------------------------------------------

    #[test]
    fn non_positive_id_is_ignored() {
        assert_eq!(ListFilter::new().with_id(Some(0)).id, None);
        assert_eq!(ListFilter::new().with_id(Some(-3)).id, None);
        assert_eq!(ListFilter::new().with_id(Some(68)).id, Some(68));
    }

    #[test]
    fn by_id_ignores_visibility() {
        let filter = ListFilter::by_id(57);
        assert_eq!(filter.id, Some(57));
        assert_eq!(filter.visibility, Visibility::Any);
        assert!(filter.group_ids.is_none());
        assert!(filter.sort.is_none());
    }
}
