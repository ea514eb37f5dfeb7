use contracts::navigation::Navigator;
use leptos::prelude::Effect;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// App-wide UI state shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    /// Last navigation requested by the chrome; consumed by the router effect.
    pub nav_request: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            nav_request: RwSignal::new(None),
        }
    }

    /// Forwards navigation requests to the router. Must run under `<Router>`.
    pub fn init_router_integration(&self) {
        let navigate = use_navigate();
        let nav_request = self.nav_request;
        Effect::new(move |_| {
            if let Some(href) = nav_request.get() {
                leptos::logging::log!("🧭 navigate: '{}'", href);
                navigate(&href, Default::default());
            }
        });
    }

    pub fn navigate_to(&self, href: &str) {
        self.nav_request.set(Some(href.to_string()));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for AppGlobalContext {
    fn navigate(&mut self, href: &str) {
        self.navigate_to(href);
    }
}
