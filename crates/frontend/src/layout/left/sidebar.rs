//! Sidebar navigation tree with route-synchronised accordion sections.
//!
//! Expansion state is sticky: entering a route opens its section and submenu,
//! leaving it keeps them open. Only a click collapses a branch.

use super::sidebar_search::SidebarSearch;
use crate::shared::icons::icon;
use contracts::navigation::tree::active_item_href;
use contracts::navigation::{
    ActiveRoute, ExpansionState, NavSection, NavSubmenu, RouteTable, NAV_SECTIONS,
};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Reactive inputs shared by every branch of the tree.
#[derive(Clone, Copy)]
struct TreeState {
    expansion: RwSignal<ExpansionState>,
    active: Memo<ActiveRoute>,
    active_href: Memo<Option<&'static str>>,
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let table = RouteTable::builtin();
    let expansion = RwSignal::new(ExpansionState::new());

    // Merge the branch of every visited route into the expansion state.
    // Runs on mount too, so deep links open their branch.
    Effect::new(move |_| {
        let path = pathname.get();
        expansion.maybe_update(|state| state.on_route_changed(&table, &path));
    });

    let state = TreeState {
        expansion,
        active: Memo::new(move |_| table.active(&pathname.get())),
        active_href: Memo::new(move |_| active_item_href(&pathname.get())),
    };

    view! {
        <div class="app-sidebar__content">
            <SidebarSearch />
            <nav class="app-sidebar__tree">
                <a
                    href="/admin"
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || {
                        let path = pathname.get();
                        path == "/admin" || path == "/"
                    }
                >
                    <div class="app-sidebar__item-content">
                        {icon("home")}
                        <span>"Panel principal"</span>
                    </div>
                </a>
                {NAV_SECTIONS
                    .iter()
                    .map(|section| view! { <SectionBranch section=section state=state /> })
                    .collect_view()}
            </nav>
        </div>
    }
}

#[component]
fn SectionBranch(section: &'static NavSection, state: TreeState) -> impl IntoView {
    let id = section.id;
    let color = section.color;
    let expansion = state.expansion;
    let is_expanded = move || expansion.with(|s| s.is_section_expanded(id));
    let is_active = move || state.active.get().section == Some(id);

    view! {
        <div class="app-sidebar__section" data-section=id.key()>
            <div
                class="app-sidebar__item app-sidebar__item--section"
                class:app-sidebar__item--active=is_active
                style:padding-left="12px"
                on:click=move |_| {
                    log::debug!("sidebar: toggle section '{}'", id);
                    expansion.update(|s| s.toggle_section(id));
                }
            >
                <div class="app-sidebar__item-content">
                    <span class="app-sidebar__icon" style:color=color>
                        {icon(section.icon)}
                    </span>
                    <span>{section.label}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {section
                        .submenus
                        .iter()
                        .map(|submenu| {
                            view! { <SubmenuBranch submenu=submenu color=color state=state /> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SubmenuBranch(
    submenu: &'static NavSubmenu,
    /// Accent color of the parent section.
    color: &'static str,
    state: TreeState,
) -> impl IntoView {
    let id = submenu.id;
    let expansion = state.expansion;
    let is_expanded = move || expansion.with(|s| s.is_submenu_expanded(id));
    let is_active = move || state.active.get().submenu == Some(id);

    view! {
        <div class="app-sidebar__submenu" data-submenu=id.key()>
            <div
                class="app-sidebar__item app-sidebar__item--submenu"
                class:app-sidebar__item--active=is_active
                style:padding-left="20px"
                on:click=move |_| {
                    log::debug!("sidebar: toggle submenu '{}'", id);
                    expansion.update(|s| s.toggle_submenu(id));
                }
            >
                <div class="app-sidebar__item-content">
                    <span class="app-sidebar__icon" style:color=color>
                        {icon(submenu.icon)}
                    </span>
                    <span>{submenu.label}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {submenu
                        .items
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            view! {
                                <a
                                    href=href
                                    class="app-sidebar__item app-sidebar__item--leaf"
                                    class:app-sidebar__item--active=move || {
                                        state.active_href.get() == Some(href)
                                    }
                                    style:padding-left="32px"
                                >
                                    <div class="app-sidebar__item-content">
                                        <span class="app-sidebar__icon" style:color=color>
                                            {icon(item.icon)}
                                        </span>
                                        <span>{item.label}</span>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
