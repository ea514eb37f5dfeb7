//! Build script for generating the navigation catalog from catalog.json
//!
//! Reads `src/navigation/catalog.json`, validates it and writes
//! `navigation_gen.rs` into `OUT_DIR` with the `SectionId`/`SubmenuId` enums
//! and the static `NAV_SECTIONS`, `ROUTE_PATTERNS` and `SEARCH_RECORDS` tables.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CATALOG_PATH: &str = "src/navigation/catalog.json";

fn main() {
    println!("cargo:rerun-if-changed={}", CATALOG_PATH);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is not set"));
    let output_rs = out_dir.join("navigation_gen.rs");

    if let Err(e) = generate_catalog(Path::new(CATALOG_PATH), &output_rs) {
        panic!("Failed to generate navigation catalog: {}", e);
    }
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogJson {
    schema_version: String,
    sections: Vec<SectionJson>,
    routes: Vec<RouteJson>,
    search: Vec<SearchJson>,
}

#[derive(Debug, Deserialize)]
struct SectionJson {
    id: String,
    label: String,
    icon: String,
    color: String,
    #[serde(default)]
    submenus: Vec<SubmenuJson>,
}

#[derive(Debug, Deserialize)]
struct SubmenuJson {
    id: String,
    label: String,
    icon: String,
    #[serde(default)]
    items: Vec<ItemJson>,
}

#[derive(Debug, Deserialize)]
struct ItemJson {
    label: String,
    href: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct RouteJson {
    exact: Option<String>,
    prefix: Option<String>,
    section: String,
    submenu: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchJson {
    id: String,
    title: String,
    description: String,
    href: String,
    section: String,
    icon: String,
}

/// Route literal after resolving the exact/prefix pair.
enum Literal<'a> {
    Exact(&'a str),
    Prefix(&'a str),
}

impl RouteJson {
    fn literal(&self) -> Result<Literal<'_>, String> {
        match (&self.exact, &self.prefix) {
            (Some(exact), None) => Ok(Literal::Exact(exact)),
            (None, Some(prefix)) => Ok(Literal::Prefix(prefix)),
            _ => Err(format!(
                "route for section '{}' must set exactly one of 'exact' or 'prefix'",
                self.section
            )),
        }
    }
}

impl Literal<'_> {
    fn text(&self) -> &str {
        match self {
            Literal::Exact(s) | Literal::Prefix(s) => s,
        }
    }

    fn describe(&self) -> String {
        match self {
            Literal::Exact(s) => format!("exact '{}'", s),
            Literal::Prefix(s) => format!("prefix '{}'", s),
        }
    }
}

fn generate_catalog(
    json_path: &Path,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let catalog: CatalogJson = serde_json::from_str(&json_content)?;

    validate(&catalog)?;

    let code = generate_rust_code(&catalog);
    fs::write(output_path, code)?;

    println!(
        "cargo:warning=Generated navigation catalog: {} sections, {} routes, {} search records",
        catalog.sections.len(),
        catalog.routes.len(),
        catalog.search.len()
    );
    Ok(())
}

// ============================================================================
// Validation
// ============================================================================

fn validate(catalog: &CatalogJson) -> Result<(), String> {
    let mut section_ids = HashSet::new();
    let mut submenu_parents = std::collections::HashMap::new();

    for section in &catalog.sections {
        if !section_ids.insert(section.id.as_str()) {
            return Err(format!("duplicate section id '{}'", section.id));
        }
        for submenu in &section.submenus {
            if submenu_parents
                .insert(submenu.id.as_str(), section.id.as_str())
                .is_some()
            {
                return Err(format!("duplicate submenu id '{}'", submenu.id));
            }
            for item in &submenu.items {
                if !item.href.starts_with('/') {
                    return Err(format!(
                        "nav item '{}' has non-absolute href '{}'",
                        item.label, item.href
                    ));
                }
            }
        }
    }

    let mut literals = Vec::with_capacity(catalog.routes.len());
    for route in &catalog.routes {
        if !section_ids.contains(route.section.as_str()) {
            return Err(format!("route references unknown section '{}'", route.section));
        }
        if let Some(submenu) = &route.submenu {
            match submenu_parents.get(submenu.as_str()) {
                None => return Err(format!("route references unknown submenu '{}'", submenu)),
                Some(parent) if *parent != route.section => {
                    return Err(format!(
                        "submenu '{}' belongs to section '{}', not '{}'",
                        submenu, parent, route.section
                    ))
                }
                Some(_) => {}
            }
        }
        let literal = route.literal()?;
        if literal.text().is_empty() {
            return Err(format!("route for section '{}' has an empty literal", route.section));
        }
        literals.push(literal);
    }

    // An earlier prefix swallows every path a later, longer pattern would match.
    for (i, earlier) in literals.iter().enumerate() {
        for later in &literals[i + 1..] {
            let shadowed = match earlier {
                Literal::Prefix(p) => later.text().starts_with(*p),
                Literal::Exact(e) => matches!(later, Literal::Exact(l) if l == e),
            };
            if shadowed {
                return Err(format!(
                    "route {} is shadowed by earlier route {}",
                    later.describe(),
                    earlier.describe()
                ));
            }
        }
    }

    let mut search_ids = HashSet::new();
    for record in &catalog.search {
        if !search_ids.insert(record.id.as_str()) {
            return Err(format!("duplicate search record id '{}'", record.id));
        }
    }

    Ok(())
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_rust_code(catalog: &CatalogJson) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM catalog.json (schema {}) - DO NOT EDIT MANUALLY\n\
         // Generated: {}\n\
         // ============================================================================\n\n",
        catalog.schema_version,
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    ));

    code.push_str(&generate_section_enum(&catalog.sections));
    code.push_str("\n");
    code.push_str(&generate_submenu_enum(&catalog.sections));
    code.push_str("\n");
    code.push_str(&generate_nav_sections(&catalog.sections));
    code.push_str("\n");
    code.push_str(&generate_route_patterns(&catalog.routes));
    code.push_str("\n");
    code.push_str(&generate_search_records(&catalog.search));

    code
}

fn generate_section_enum(sections: &[SectionJson]) -> String {
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    let mut code = String::from(
        "/// Top-level navigation section.\n\
         #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n\
         pub enum SectionId {\n",
    );
    for id in &ids {
        code.push_str(&format!("    {},\n", to_pascal_case(id)));
    }
    code.push_str("}\n\nimpl SectionId {\n");
    code.push_str(&generate_all_const("SectionId", &ids));
    code.push_str(&generate_key_fns("SectionId", &ids));
    code.push_str("}\n");
    code
}

fn generate_submenu_enum(sections: &[SectionJson]) -> String {
    let pairs: Vec<(&str, &str)> = sections
        .iter()
        .flat_map(|s| s.submenus.iter().map(move |m| (m.id.as_str(), s.id.as_str())))
        .collect();
    let ids: Vec<&str> = pairs.iter().map(|(id, _)| *id).collect();

    let mut code = String::from(
        "/// Collapsible group nested under a [`SectionId`].\n\
         #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n\
         pub enum SubmenuId {\n",
    );
    for id in &ids {
        code.push_str(&format!("    {},\n", to_pascal_case(id)));
    }
    code.push_str("}\n\nimpl SubmenuId {\n");
    code.push_str(&generate_all_const("SubmenuId", &ids));
    code.push_str(&generate_key_fns("SubmenuId", &ids));

    code.push_str("\n    /// Section this submenu is rendered under.\n");
    code.push_str("    pub const fn section(self) -> SectionId {\n        match self {\n");
    for (id, parent) in &pairs {
        code.push_str(&format!(
            "            SubmenuId::{} => SectionId::{},\n",
            to_pascal_case(id),
            to_pascal_case(parent)
        ));
    }
    code.push_str("        }\n    }\n}\n");
    code
}

fn generate_all_const(ty: &str, ids: &[&str]) -> String {
    let variants = ids
        .iter()
        .map(|id| format!("{}::{}", ty, to_pascal_case(id)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("    pub const ALL: &'static [{ty}] = &[{variants}];\n\n")
}

fn generate_key_fns(ty: &str, ids: &[&str]) -> String {
    let mut code = String::from(
        "    /// Identifier as written in the catalog.\n\
         \x20   pub const fn key(self) -> &'static str {\n\
         \x20       match self {\n",
    );
    for id in ids {
        code.push_str(&format!(
            "            {}::{} => \"{}\",\n",
            ty,
            to_pascal_case(id),
            escape_string(id)
        ));
    }
    code.push_str("        }\n    }\n\n");

    code.push_str(&format!(
        "    pub fn from_key(key: &str) -> Option<{ty}> {{\n        match key {{\n"
    ));
    for id in ids {
        code.push_str(&format!(
            "            \"{}\" => Some({}::{}),\n",
            escape_string(id),
            ty,
            to_pascal_case(id)
        ));
    }
    code.push_str("            _ => None,\n        }\n    }\n");
    code
}

fn generate_nav_sections(sections: &[SectionJson]) -> String {
    let mut code = String::from("/// Navigation tree in render order.\npub static NAV_SECTIONS: &[NavSection] = &[\n");
    for section in sections {
        code.push_str(&format!(
            "    NavSection {{\n\
             \x20       id: SectionId::{},\n\
             \x20       label: \"{}\",\n\
             \x20       icon: \"{}\",\n\
             \x20       color: \"{}\",\n\
             \x20       submenus: &[\n",
            to_pascal_case(&section.id),
            escape_string(&section.label),
            escape_string(&section.icon),
            escape_string(&section.color),
        ));
        for submenu in &section.submenus {
            code.push_str(&format!(
                "            NavSubmenu {{\n\
                 \x20               id: SubmenuId::{},\n\
                 \x20               label: \"{}\",\n\
                 \x20               icon: \"{}\",\n\
                 \x20               items: &[\n",
                to_pascal_case(&submenu.id),
                escape_string(&submenu.label),
                escape_string(&submenu.icon),
            ));
            for item in &submenu.items {
                code.push_str(&format!(
                    "                    NavItem {{ label: \"{}\", href: \"{}\", icon: \"{}\" }},\n",
                    escape_string(&item.label),
                    escape_string(&item.href),
                    escape_string(&item.icon),
                ));
            }
            code.push_str("                ],\n            },\n");
        }
        code.push_str("        ],\n    },\n");
    }
    code.push_str("];\n");
    code
}

fn generate_route_patterns(routes: &[RouteJson]) -> String {
    let mut code = String::from(
        "/// Route patterns, most specific first.\npub static ROUTE_PATTERNS: &[RoutePattern] = &[\n",
    );
    for route in routes {
        // validate() already rejected routes without exactly one literal
        let matcher = match route.literal() {
            Ok(Literal::Exact(s)) => format!("PathMatch::Exact(\"{}\")", escape_string(s)),
            Ok(Literal::Prefix(s)) => format!("PathMatch::Prefix(\"{}\")", escape_string(s)),
            Err(_) => continue,
        };
        let submenu = match &route.submenu {
            Some(id) => format!("Some(SubmenuId::{})", to_pascal_case(id)),
            None => "None".to_string(),
        };
        code.push_str(&format!(
            "    RoutePattern {{ matcher: {}, section: SectionId::{}, submenu: {} }},\n",
            matcher,
            to_pascal_case(&route.section),
            submenu
        ));
    }
    code.push_str("];\n");
    code
}

fn generate_search_records(records: &[SearchJson]) -> String {
    let mut code = String::from(
        "/// Search catalog in display order.\npub static SEARCH_RECORDS: &[SearchRecord] = &[\n",
    );
    for record in records {
        code.push_str(&format!(
            "    SearchRecord {{\n\
             \x20       id: \"{}\",\n\
             \x20       title: \"{}\",\n\
             \x20       description: \"{}\",\n\
             \x20       href: \"{}\",\n\
             \x20       section_label: \"{}\",\n\
             \x20       icon: \"{}\",\n\
             \x20   }},\n",
            escape_string(&record.id),
            escape_string(&record.title),
            escape_string(&record.description),
            escape_string(&record.href),
            escape_string(&record.section),
            escape_string(&record.icon),
        ));
    }
    code.push_str("];\n");
    code
}

// ============================================================================
// Helper functions
// ============================================================================

fn to_pascal_case(s: &str) -> String {
    s.split(|c| c == '_' || c == '-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
