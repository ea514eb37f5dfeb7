//! Sidebar page search.
//!
//! Case-insensitive substring match over title, description and section label.
//! Results keep catalog order and are capped at [`MAX_RESULTS`].

use super::catalog::SEARCH_RECORDS;

/// Upper bound on the number of hits shown in the results panel.
pub const MAX_RESULTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub section_label: &'static str,
    pub icon: &'static str,
}

impl SearchRecord {
    /// Records without an absolute href cannot be navigated to.
    pub fn is_navigable(&self) -> bool {
        self.href.starts_with('/')
    }

    /// `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        [self.title, self.description, self.section_label]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchIndex {
    records: &'static [SearchRecord],
}

impl SearchIndex {
    pub const fn new(records: &'static [SearchRecord]) -> Self {
        Self { records }
    }

    /// Index over the catalog compiled from `catalog.json`.
    pub const fn builtin() -> Self {
        Self::new(SEARCH_RECORDS)
    }

    pub fn records(&self) -> &'static [SearchRecord] {
        self.records
    }

    /// Blank queries return nothing.
    pub fn search(&self, query: &str) -> Vec<&'static SearchRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.records
            .iter()
            .filter(|r| r.is_navigable() && r.matches(&needle))
            .take(MAX_RESULTS)
            .collect()
    }

    pub fn find_by_href(&self, href: &str) -> Option<&'static SearchRecord> {
        self.records.iter().find(|r| r.href == href)
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const fn record(id: &'static str, title: &'static str, href: &'static str) -> SearchRecord {
        SearchRecord {
            id,
            title,
            description: "",
            href,
            section_label: "Pruebas",
            icon: "list",
        }
    }

    static PARKS: &[SearchRecord] = &[
        SearchRecord {
            id: "parks",
            title: "Gestión de Parques",
            description: "Administración de parques",
            href: "/admin/parks",
            section_label: "Gestión",
            icon: "map-pin",
        },
        SearchRecord {
            id: "budget",
            title: "Presupuesto",
            description: "Planeación anual",
            href: "/admin/finance/budget",
            section_label: "Finanzas",
            icon: "bar-chart",
        },
        SearchRecord {
            id: "broken",
            title: "Parque sin enlace",
            description: "",
            href: "",
            section_label: "Gestión",
            icon: "list",
        },
    ];

    static TWELVE_REPORTS: &[SearchRecord] = &[
        record("r1", "Reporte 1", "/r/1"),
        record("r2", "Reporte 2", "/r/2"),
        record("r3", "Reporte 3", "/r/3"),
        record("r4", "Reporte 4", "/r/4"),
        record("r5", "Reporte 5", "/r/5"),
        record("r6", "Reporte 6", "/r/6"),
        record("r7", "Reporte 7", "/r/7"),
        record("r8", "Reporte 8", "/r/8"),
        record("r9", "Reporte 9", "/r/9"),
        record("r10", "Reporte 10", "/r/10"),
        record("r11", "Reporte 11", "/r/11"),
        record("r12", "Reporte 12", "/r/12"),
    ];

    fn ids(results: &[&SearchRecord]) -> Vec<&'static str> {
        results.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        for index in [SearchIndex::builtin(), SearchIndex::new(PARKS), SearchIndex::new(TWELVE_REPORTS)] {
            assert!(index.search("").is_empty());
            assert!(index.search("   ").is_empty());
            assert!(index.search("\t\n").is_empty());
        }
    }

    #[test]
    fn test_parks_scenario() {
        let index = SearchIndex::new(PARKS);
        assert_eq!(ids(&index.search("parque")), vec!["parks"]);
        assert!(index.search("xyzzy").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let index = SearchIndex::new(PARKS);
        assert_eq!(index.search("PARQUE"), index.search("parque"));
        assert_eq!(ids(&index.search("GESTIÓN")), vec!["parks"]);
    }

    #[test]
    fn test_matches_description_and_section() {
        let index = SearchIndex::new(PARKS);
        assert_eq!(ids(&index.search("planeación")), vec!["budget"]);
        assert_eq!(ids(&index.search("finanzas")), vec!["budget"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let index = SearchIndex::new(PARKS);
        assert_eq!(ids(&index.search("  presupuesto  ")), vec!["budget"]);
    }

    #[test]
    fn test_results_capped_in_catalog_order() {
        let index = SearchIndex::new(TWELVE_REPORTS);
        let results = index.search("reporte");
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(ids(&results), vec!["r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8"]);

        // "1" hits r1, r10, r11, r12
        assert_eq!(ids(&index.search("1")), vec!["r1", "r10", "r11", "r12"]);
    }

    #[test]
    fn test_builtin_never_exceeds_limit() {
        let index = SearchIndex::builtin();
        for q in ["a", "e", "de", "admin", "o", "parque", "calendario"] {
            assert!(index.search(q).len() <= MAX_RESULTS, "{}", q);
        }
        assert!(!index.search("empleados").is_empty());
    }

    #[test]
    fn test_builtin_finds_hr_employees() {
        let hits = SearchIndex::builtin().search("empleados");
        assert!(hits.iter().any(|r| r.href == "/admin/hr/employees"));
    }

    #[test]
    fn test_find_by_href() {
        let index = SearchIndex::new(PARKS);
        assert_eq!(index.find_by_href("/admin/parks").map(|r| r.id), Some("parks"));
        assert_eq!(index.find_by_href("/admin/nope"), None);
    }
}
