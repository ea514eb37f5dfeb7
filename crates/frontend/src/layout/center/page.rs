//! Content pages rendered in the center zone.
//!
//! The CRUD screens behind each route are served by the REST backend; here the
//! center zone only frames the current location with its catalog title.

use crate::shared::icons::icon;
use contracts::navigation::tree::{breadcrumb, page_title};
use contracts::navigation::{RouteTable, NAV_SECTIONS};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
fn PageHeader(title: String, trail: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="page__header">
            <nav class="page__breadcrumb">
                {trail
                    .into_iter()
                    .map(|label| view! { <span class="page__breadcrumb-item">{label}</span> })
                    .collect_view()}
            </nav>
            <h1 class="page__title">{title}</h1>
        </div>
    }
}

/// Landing page: one card per section linking to its first entry of each submenu.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page page--dashboard" id="dashboard--main">
            <PageHeader title="Panel principal".to_string() trail=vec![] />
            <div class="page__content dashboard-grid">
                {NAV_SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <div class="dashboard-card" style:border-top-color=section.color>
                                <div class="dashboard-card__header">
                                    <span style:color=section.color>{icon(section.icon)}</span>
                                    <span>{section.label}</span>
                                </div>
                                <ul class="dashboard-card__links">
                                    {section
                                        .submenus
                                        .iter()
                                        .filter_map(|m| m.items.first().map(|item| (m, item)))
                                        .map(|(m, item)| {
                                            view! {
                                                <li>
                                                    <a href=item.href>{m.label}</a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ContentPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let table = RouteTable::builtin();

    view! {
        <div class="page">
            {move || {
                let path = pathname.get();
                let title = page_title(&path).map(str::to_string).unwrap_or_else(|| path.clone());
                let trail = breadcrumb(table.active(&path));
                view! {
                    <PageHeader title=title trail=trail />
                    <div class="page__content">
                        <p class="page__placeholder">
                            "Módulo servido por la API de ParkSys: "
                            <code>{path}</code>
                        </p>
                    </div>
                }
            }}
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Página no encontrada".to_string() trail=vec![] />
            <div class="page__content">
                <a href="/admin">"Volver al panel principal"</a>
            </div>
        </div>
    }
}
