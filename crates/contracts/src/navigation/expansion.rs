//! Sticky accordion state of the sidebar.
//!
//! Route changes only ever add entries; the only way to collapse a branch is an
//! explicit toggle.

use super::catalog::{SectionId, SubmenuId};
use super::route_matcher::RouteTable;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionKind {
    Section,
    Submenu,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded_sections: HashSet<SectionId>,
    expanded_submenus: HashSet<SubmenuId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_section_expanded(&self, id: SectionId) -> bool {
        self.expanded_sections.contains(&id)
    }

    pub fn is_submenu_expanded(&self, id: SubmenuId) -> bool {
        self.expanded_submenus.contains(&id)
    }

    pub fn expanded_sections(&self) -> &HashSet<SectionId> {
        &self.expanded_sections
    }

    pub fn expanded_submenus(&self) -> &HashSet<SubmenuId> {
        &self.expanded_submenus
    }

    /// Merges the branch implied by `path` into the expanded sets.
    ///
    /// A matched submenu also opens its parent section. Returns `true` when
    /// anything was added; a repeated call with the same path returns `false`.
    pub fn on_route_changed(&mut self, table: &RouteTable, path: &str) -> bool {
        let active = table.active(path);
        let mut changed = false;

        if let Some(section) = active.section {
            changed |= self.expanded_sections.insert(section);
        }
        if let Some(submenu) = active.submenu {
            changed |= self.expanded_sections.insert(submenu.section());
            changed |= self.expanded_submenus.insert(submenu);
        }

        if changed {
            log::debug!(
                "expansion: route '{}' opened section={:?} submenu={:?}",
                path,
                active.section,
                active.submenu
            );
        }
        changed
    }

    pub fn toggle_section(&mut self, id: SectionId) {
        if !self.expanded_sections.remove(&id) {
            self.expanded_sections.insert(id);
        }
    }

    pub fn toggle_submenu(&mut self, id: SubmenuId) {
        if !self.expanded_submenus.remove(&id) {
            self.expanded_submenus.insert(id);
        }
    }

    /// Flips membership of `key` in the set named by `kind`.
    ///
    /// Unknown keys are ignored so the sets never hold identifiers outside the
    /// catalog. Returns whether the key was recognised.
    pub fn toggle(&mut self, kind: ExpansionKind, key: &str) -> bool {
        match kind {
            ExpansionKind::Section => match SectionId::from_key(key) {
                Some(id) => {
                    self.toggle_section(id);
                    true
                }
                None => {
                    log::warn!("expansion: ignoring toggle of unknown section '{}'", key);
                    false
                }
            },
            ExpansionKind::Submenu => match SubmenuId::from_key(key) {
                Some(id) => {
                    self.toggle_submenu(id);
                    true
                }
                None => {
                    log::warn!("expansion: ignoring toggle of unknown submenu '{}'", key);
                    false
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_empty() {
        let state = ExpansionState::new();
        assert!(state.expanded_sections().is_empty());
        assert!(state.expanded_submenus().is_empty());
    }

    #[test]
    fn test_route_change_opens_branch() {
        let mut state = ExpansionState::new();
        assert!(state.on_route_changed(&RouteTable::builtin(), "/admin/visitors/count"));
        assert!(state.is_section_expanded(SectionId::Gestion));
        assert!(state.is_submenu_expanded(SubmenuId::Visitantes));
        assert!(!state.is_submenu_expanded(SubmenuId::Parques));
    }

    #[test]
    fn test_route_change_is_idempotent() {
        let table = RouteTable::builtin();
        for path in ["/admin/hr/employees", "/admin/finance", "/admin", "/admin/events/calendar"] {
            let mut once = ExpansionState::new();
            once.on_route_changed(&table, path);

            let mut many = ExpansionState::new();
            many.on_route_changed(&table, path);
            for _ in 0..5 {
                assert!(!many.on_route_changed(&table, path), "{}", path);
            }
            assert_eq!(once, many);
        }
    }

    #[test]
    fn test_navigation_away_keeps_expanded_entries() {
        let table = RouteTable::builtin();
        let mut state = ExpansionState::new();
        state.on_route_changed(&table, "/admin/parks");
        state.on_route_changed(&table, "/admin/hr/payroll");
        state.on_route_changed(&table, "/admin");

        assert!(state.is_submenu_expanded(SubmenuId::Parques));
        assert!(state.is_submenu_expanded(SubmenuId::Nomina));
        assert!(state.is_section_expanded(SectionId::Gestion));
        assert!(state.is_section_expanded(SectionId::Hr));
    }

    #[test]
    fn test_route_change_keeps_manual_entries() {
        let mut state = ExpansionState::new();
        state.toggle_section(SectionId::Security);
        state.on_route_changed(&RouteTable::builtin(), "/admin/sponsors");
        assert!(state.is_section_expanded(SectionId::Security));
        assert!(state.is_section_expanded(SectionId::Operations));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let table = RouteTable::builtin();
        let mut state = ExpansionState::new();
        state.on_route_changed(&table, "/admin/events");
        let before = state.clone();

        for id in SectionId::ALL {
            state.toggle(ExpansionKind::Section, id.key());
            assert_ne!(state.is_section_expanded(*id), before.is_section_expanded(*id));
            state.toggle(ExpansionKind::Section, id.key());
            assert_eq!(state, before);
        }
        for id in SubmenuId::ALL {
            state.toggle(ExpansionKind::Submenu, id.key());
            state.toggle(ExpansionKind::Submenu, id.key());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_manual_collapse_survives_same_route() {
        let table = RouteTable::builtin();
        let mut state = ExpansionState::new();
        state.on_route_changed(&table, "/admin/events");
        state.toggle_submenu(SubmenuId::Eventos);
        assert!(!state.is_submenu_expanded(SubmenuId::Eventos));

        // a fresh route event re-opens it
        assert!(state.on_route_changed(&table, "/admin/events/new"));
        assert!(state.is_submenu_expanded(SubmenuId::Eventos));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut state = ExpansionState::new();
        assert!(!state.toggle(ExpansionKind::Section, "marketing"));
        assert!(!state.toggle(ExpansionKind::Submenu, "gestion"));
        assert_eq!(state, ExpansionState::new());
        assert!(state.toggle(ExpansionKind::Submenu, "eventos"));
        assert!(state.is_submenu_expanded(SubmenuId::Eventos));
    }
}
