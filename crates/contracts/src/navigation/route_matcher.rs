//! Maps a location path to the active section and submenu.
//!
//! Patterns are tested in table order and the first hit wins, so a specific
//! prefix (`/admin/events/calendar`) must come before the shorter prefix that
//! also covers it (`/admin/events`). [`RouteTable::validate`] checks that rule.

use super::catalog::{SectionId, SubmenuId, ROUTE_PATTERNS};
use thiserror::Error;

/// Path predicate of a [`RoutePattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatch {
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathMatch {
    /// An empty literal never matches.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatch::Exact(s) => !s.is_empty() && path == *s,
            PathMatch::Prefix(s) => !s.is_empty() && path.starts_with(s),
        }
    }

    pub fn literal(&self) -> &'static str {
        match self {
            PathMatch::Exact(s) | PathMatch::Prefix(s) => s,
        }
    }

    /// True when every path `later` accepts is already accepted by `self`.
    fn shadows(&self, later: &PathMatch) -> bool {
        match (self, later) {
            (PathMatch::Prefix(p), _) => !p.is_empty() && later.literal().starts_with(p),
            (PathMatch::Exact(e), PathMatch::Exact(l)) => !e.is_empty() && e == l,
            (PathMatch::Exact(_), PathMatch::Prefix(_)) => false,
        }
    }
}

impl std::fmt::Display for PathMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathMatch::Exact(s) => write!(f, "exact '{}'", s),
            PathMatch::Prefix(s) => write!(f, "prefix '{}'", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePattern {
    pub matcher: PathMatch,
    pub section: SectionId,
    pub submenu: Option<SubmenuId>,
}

/// Result of matching one path against the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveRoute {
    pub section: Option<SectionId>,
    pub submenu: Option<SubmenuId>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route #{later_index} ({later}) is unreachable: shadowed by route #{earlier_index} ({earlier})")]
    Shadowed {
        earlier_index: usize,
        earlier: PathMatch,
        later_index: usize,
        later: PathMatch,
    },
}

/// Ordered list of route patterns.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    patterns: &'static [RoutePattern],
}

impl RouteTable {
    pub const fn new(patterns: &'static [RoutePattern]) -> Self {
        Self { patterns }
    }

    /// Table compiled from `catalog.json`.
    pub const fn builtin() -> Self {
        Self::new(ROUTE_PATTERNS)
    }

    pub fn patterns(&self) -> &'static [RoutePattern] {
        self.patterns
    }

    pub fn match_section(&self, path: &str) -> Option<SectionId> {
        self.patterns
            .iter()
            .find(|p| p.matcher.matches(path))
            .map(|p| p.section)
    }

    /// Only patterns that carry a submenu take part.
    pub fn match_submenu(&self, path: &str) -> Option<SubmenuId> {
        self.patterns
            .iter()
            .filter_map(|p| p.submenu.map(|submenu| (p, submenu)))
            .find(|(p, _)| p.matcher.matches(path))
            .map(|(_, submenu)| submenu)
    }

    pub fn active(&self, path: &str) -> ActiveRoute {
        ActiveRoute {
            section: self.match_section(path),
            submenu: self.match_submenu(path),
        }
    }

    /// Reports the first pattern that can never win because an earlier one
    /// already matches every path it would match.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        for (earlier_index, earlier) in self.patterns.iter().enumerate() {
            for (offset, later) in self.patterns[earlier_index + 1..].iter().enumerate() {
                if earlier.matcher.shadows(&later.matcher) {
                    return Err(RouteTableError::Shadowed {
                        earlier_index,
                        earlier: earlier.matcher,
                        later_index: earlier_index + 1 + offset,
                        later: later.matcher,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static CALENDAR_FIRST: &[RoutePattern] = &[
        RoutePattern {
            matcher: PathMatch::Prefix("/admin/events/calendar"),
            section: SectionId::Gestion,
            submenu: Some(SubmenuId::Calendario),
        },
        RoutePattern {
            matcher: PathMatch::Prefix("/admin/events"),
            section: SectionId::Gestion,
            submenu: Some(SubmenuId::Eventos),
        },
        RoutePattern {
            matcher: PathMatch::Exact("/admin/finance"),
            section: SectionId::Finance,
            submenu: None,
        },
    ];

    static CALENDAR_LAST: &[RoutePattern] = &[
        RoutePattern {
            matcher: PathMatch::Prefix("/admin/events"),
            section: SectionId::Gestion,
            submenu: Some(SubmenuId::Eventos),
        },
        RoutePattern {
            matcher: PathMatch::Prefix("/admin/events/calendar"),
            section: SectionId::Gestion,
            submenu: Some(SubmenuId::Calendario),
        },
    ];

    static WITH_EMPTY: &[RoutePattern] = &[
        RoutePattern {
            matcher: PathMatch::Prefix(""),
            section: SectionId::Security,
            submenu: Some(SubmenuId::Accesos),
        },
        RoutePattern {
            matcher: PathMatch::Exact(""),
            section: SectionId::Security,
            submenu: None,
        },
    ];

    #[test]
    fn test_visitor_count_scenario() {
        let table = RouteTable::builtin();
        assert_eq!(table.match_submenu("/admin/visitors/count"), Some(SubmenuId::Visitantes));
        assert_eq!(table.match_section("/admin/visitors/count"), Some(SectionId::Gestion));
    }

    #[test]
    fn test_unmatched_paths_have_no_active_section() {
        let table = RouteTable::builtin();
        for path in ["", "/", "/admin", "/admin/", "/login", "/parks", "admin/parks"] {
            assert_eq!(table.active(path), ActiveRoute::default(), "path {:?}", path);
        }
    }

    #[test]
    fn test_specific_prefix_wins() {
        let table = RouteTable::builtin();
        assert_eq!(table.match_submenu("/admin/events/calendar"), Some(SubmenuId::Calendario));
        assert_eq!(table.match_submenu("/admin/events/12"), Some(SubmenuId::Eventos));
        assert_eq!(table.match_submenu("/admin/activities/calendar"), Some(SubmenuId::Calendario));
        assert_eq!(table.match_submenu("/admin/hr/payroll/2024"), Some(SubmenuId::Nomina));
        assert_eq!(table.match_submenu("/admin/hr/employees"), Some(SubmenuId::Empleados));
        assert_eq!(
            table.match_submenu("/admin/finance/accounting/cash-flow"),
            Some(SubmenuId::Contabilidad)
        );
        assert_eq!(table.match_submenu("/admin/finance/budget"), Some(SubmenuId::Presupuestos));
    }

    #[test]
    fn test_exact_pattern_sets_section_without_submenu() {
        let table = RouteTable::builtin();
        assert_eq!(
            table.active("/admin/finance"),
            ActiveRoute {
                section: Some(SectionId::Finance),
                submenu: None,
            }
        );
        assert_eq!(table.active("/admin/operations").section, Some(SectionId::Operations));
        assert_eq!(table.active("/admin/operations/x").section, None);
    }

    #[test]
    fn test_builtin_table_is_valid() {
        assert_eq!(RouteTable::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_overlapping_prefixes_more_specific_first() {
        let table = RouteTable::new(CALENDAR_FIRST);
        assert_eq!(table.validate(), Ok(()));
        for suffix in ["", "/", "/2024-05", "/week/3"] {
            let path = format!("/admin/events/calendar{}", suffix);
            assert_eq!(table.match_submenu(&path), Some(SubmenuId::Calendario), "{}", path);
        }
        assert_eq!(table.match_submenu("/admin/events/new"), Some(SubmenuId::Eventos));
    }

    #[test]
    fn test_shadowed_pattern_is_reported() {
        let table = RouteTable::new(CALENDAR_LAST);
        assert_eq!(
            table.validate(),
            Err(RouteTableError::Shadowed {
                earlier_index: 0,
                earlier: PathMatch::Prefix("/admin/events"),
                later_index: 1,
                later: PathMatch::Prefix("/admin/events/calendar"),
            })
        );
        // misordered table misclassifies the calendar view
        assert_eq!(table.match_submenu("/admin/events/calendar"), Some(SubmenuId::Eventos));
    }

    #[test]
    fn test_empty_literals_never_match() {
        let table = RouteTable::new(WITH_EMPTY);
        assert_eq!(table.active(""), ActiveRoute::default());
        assert_eq!(table.active("/admin/security"), ActiveRoute::default());
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_error_message_names_both_patterns() {
        let err = RouteTable::new(CALENDAR_LAST).validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("prefix '/admin/events'"), "{}", msg);
        assert!(msg.contains("prefix '/admin/events/calendar'"), "{}", msg);
    }
}
