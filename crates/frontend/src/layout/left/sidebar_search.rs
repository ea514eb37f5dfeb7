//! Search box at the top of the sidebar.
//!
//! Thin reactive shell over [`SearchBox`]: DOM events are forwarded as state
//! machine events, navigation goes through [`AppGlobalContext`].

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::navigation::{SearchBox, SearchIndex};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[component]
pub fn SidebarSearch() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let search = RwSignal::new(SearchBox::new(SearchIndex::builtin()));
    let container = NodeRef::<leptos::html::Div>::new();

    // Close on any mousedown outside the component. Text is kept.
    // Escape resets the box wherever focus is, even after a click inside the panel.
    Effect::new(move |_| {
        let on_mousedown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(root) = container.get_untracked() else {
                return;
            };
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !root.contains(target.as_ref()) && search.with_untracked(|s| s.is_open()) {
                search.update(|s| s.outside_click());
            }
        }) as Box<dyn FnMut(_)>);

        let on_escape = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && search.with_untracked(|s| s.is_engaged()) {
                    search.update(|s| s.escape());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document.add_event_listener_with_callback(
                "mousedown",
                on_mousedown.as_ref().unchecked_ref(),
            );
            let _ = document
                .add_event_listener_with_callback("keydown", on_escape.as_ref().unchecked_ref());
            on_mousedown.forget();
            on_escape.forget();
        }
    });

    // Escape bubbles to the document listener above.
    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" => {
            ev.prevent_default();
            search.update(|s| s.highlight_next());
        }
        "ArrowUp" => {
            ev.prevent_default();
            search.update(|s| s.highlight_prev());
        }
        "Enter" => {
            let mut navigator = ctx;
            search.update(|s| {
                s.activate_highlighted(&mut navigator);
            });
        }
        _ => {}
    };

    view! {
        <div class="sidebar-search" node_ref=container>
            <div class="sidebar-search__field">
                <span class="sidebar-search__icon">{icon("search")}</span>
                <input
                    type="text"
                    class="sidebar-search__input"
                    placeholder="Buscar módulo..."
                    autocomplete="off"
                    prop:value=move || search.with(|s| s.text().to_string())
                    on:input=move |ev| search.update(|s| s.input(event_target_value(&ev)))
                    on:focus=move |_| search.update(|s| s.focus())
                    on:keydown=on_keydown
                />
                <Show when=move || search.with(|s| !s.text().is_empty())>
                    <button
                        type="button"
                        class="sidebar-search__clear"
                        title="Limpiar"
                        on:click=move |_| search.update(|s| s.escape())
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>

            <Show when=move || search.with(|s| s.is_open())>
                <div class="sidebar-search__panel" role="listbox">
                    {move || {
                        let (results, highlighted) =
                            search.with(|s| (s.results().to_vec(), s.highlighted()));
                        if results.is_empty() {
                            return view! {
                                <div class="sidebar-search__empty">"Sin resultados"</div>
                            }
                            .into_any();
                        }
                        results
                            .into_iter()
                            .enumerate()
                            .map(|(i, record)| {
                                view! {
                                    <button
                                        type="button"
                                        role="option"
                                        class="sidebar-search__result"
                                        class:sidebar-search__result--highlighted={highlighted == Some(i)}
                                        on:click=move |_| {
                                            let mut navigator = ctx;
                                            search.update(|s| s.select(record, &mut navigator));
                                        }
                                    >
                                        <span class="sidebar-search__result-icon">
                                            {icon(record.icon)}
                                        </span>
                                        <span class="sidebar-search__result-text">
                                            <span class="sidebar-search__result-title">
                                                {record.title}
                                            </span>
                                            <span class="sidebar-search__result-desc">
                                                {record.description}
                                            </span>
                                        </span>
                                        <span class="sidebar-search__result-section">
                                            {record.section_label}
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
