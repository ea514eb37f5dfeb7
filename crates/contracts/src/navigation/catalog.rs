//! Static navigation catalog generated from `catalog.json` by `build.rs`.

use super::route_matcher::{PathMatch, RoutePattern};
use super::search::SearchRecord;
use super::tree::{NavItem, NavSection, NavSubmenu};

include!(concat!(env!("OUT_DIR"), "/navigation_gen.rs"));

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::fmt::Display for SubmenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
