//! Static navigation tree and lookups over it.

use super::catalog::{SectionId, SubmenuId, NAV_SECTIONS};
use super::route_matcher::ActiveRoute;
use super::search::SearchIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSubmenu {
    pub id: SubmenuId,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: &'static [NavItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: &'static str,
    /// Accent color propagated to the section's icons.
    pub color: &'static str,
    pub submenus: &'static [NavSubmenu],
}

pub fn section(id: SectionId) -> Option<&'static NavSection> {
    NAV_SECTIONS.iter().find(|s| s.id == id)
}

pub fn submenu(id: SubmenuId) -> Option<&'static NavSubmenu> {
    section(id.section())?.submenus.iter().find(|m| m.id == id)
}

pub fn items() -> impl Iterator<Item = &'static NavItem> {
    NAV_SECTIONS
        .iter()
        .flat_map(|s| s.submenus.iter())
        .flat_map(|m| m.items.iter())
}

/// Href of the nav item to highlight for `path`.
///
/// Exact match first, otherwise the longest item href that is a whole-segment
/// prefix of the path (`/admin/parks/12/edit` -> `/admin/parks`).
pub fn active_item_href(path: &str) -> Option<&'static str> {
    if let Some(item) = items().find(|i| i.href == path) {
        return Some(item.href);
    }
    items()
        .map(|i| i.href)
        .filter(|href| {
            path.strip_prefix(href)
                .map(|rest| rest.starts_with('/'))
                .unwrap_or(false)
        })
        .max_by_key(|href| href.len())
}

/// Heading for the page at `path`: the search catalog title when the path is a
/// catalog entry, else the label of the highlighted nav item.
pub fn page_title(path: &str) -> Option<&'static str> {
    if let Some(record) = SearchIndex::builtin().find_by_href(path) {
        return Some(record.title);
    }
    let href = active_item_href(path)?;
    items().find(|i| i.href == href).map(|i| i.label)
}

/// Section and submenu labels of the active branch, outermost first.
pub fn breadcrumb(active: ActiveRoute) -> Vec<&'static str> {
    let mut trail = Vec::with_capacity(2);
    if let Some(s) = active.section.and_then(section) {
        trail.push(s.label);
    }
    if let Some(m) = active.submenu.and_then(submenu) {
        trail.push(m.label);
    }
    trail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::route_matcher::RouteTable;

    #[test]
    fn test_exact_item_is_active() {
        assert_eq!(active_item_href("/admin/parks/map"), Some("/admin/parks/map"));
        assert_eq!(active_item_href("/admin/events/calendar"), Some("/admin/events/calendar"));
    }

    #[test]
    fn test_nested_path_highlights_longest_parent() {
        assert_eq!(active_item_href("/admin/parks/12/edit"), Some("/admin/parks"));
        assert_eq!(active_item_href("/admin/events/calendar/2024-05"), Some("/admin/events/calendar"));
        assert_eq!(active_item_href("/admin/hr/employees/7"), Some("/admin/hr/employees"));
    }

    #[test]
    fn test_partial_segment_is_not_a_match() {
        assert_eq!(active_item_href("/admin/parksxyz"), None);
        assert_eq!(active_item_href("/admin"), None);
        assert_eq!(active_item_href("/"), None);
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("/admin/parks"), Some("Gestión de Parques"));
        assert_eq!(page_title("/admin/events/categories"), Some("Categorías de Eventos"));
        assert_eq!(page_title("/admin/parks/12"), Some("Listado de Parques"));
        assert_eq!(page_title("/admin/unknown"), None);
    }

    #[test]
    fn test_breadcrumb() {
        let table = RouteTable::builtin();
        assert_eq!(
            breadcrumb(table.active("/admin/hr/payroll")),
            vec!["Recursos Humanos", "Nómina"]
        );
        assert_eq!(breadcrumb(table.active("/admin/finance")), vec!["Finanzas"]);
        assert!(breadcrumb(table.active("/admin")).is_empty());
    }

    #[test]
    fn test_lookup_helpers() {
        let gestion = section(SectionId::Gestion).expect("gestion section");
        assert_eq!(gestion.label, "Gestión");
        let nomina = submenu(SubmenuId::Nomina).expect("nomina submenu");
        assert!(nomina.items.iter().any(|i| i.href == "/admin/hr/payroll"));
        assert!(items().all(|i| i.href.starts_with('/')));
    }
}
