use crate::layout::center::page::{ContentPage, DashboardPage, NotFoundPage};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| {
                view! {
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/admin") view=DashboardPage />
                        <Route path=path!("/admin/*any") view=ContentPage />
                    </Routes>
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
