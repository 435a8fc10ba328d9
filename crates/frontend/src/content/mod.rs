//! Loads the per-language fragment into the content region and binds its
//! interactive components.

pub mod api;

use crate::interactive::InteractiveHandle;
use crate::shared::icons::icon;
use crate::shared::language::use_language;
use contracts::shared::language::Language;
use contracts::shared::messages;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use web_sys::Element;

/// Delay between injecting markup and binding it, so layout settles first.
const BIND_DELAY_MS: u32 = 50;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LoadStatus {
    Loading,
    Ready,
    /// Failed loading the fragment for this language.
    Failed(Language),
}

#[component]
pub fn ContentLoader() -> impl IntoView {
    let lang_ctx = use_language();
    let status = RwSignal::new(LoadStatus::Loading);
    let container = NodeRef::<html::Div>::new();
    let handle = StoredValue::new_local(None::<InteractiveHandle>);
    // Bumped per request; responses for an older request are dropped.
    let generation = StoredValue::new(0u64);

    let load = move |language: Language| {
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        status.set(LoadStatus::Loading);

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_fragment(language).await;
            if generation.try_get_value() != Some(current) {
                return;
            }

            match result {
                Ok(fragment) => {
                    // old listeners go away with the old subtree
                    handle.set_value(None);
                    let Some(div) = container.get_untracked() else {
                        return;
                    };
                    let root: Element = div.into();
                    root.set_inner_html(&fragment);

                    TimeoutFuture::new(BIND_DELAY_MS).await;
                    if generation.try_get_value() != Some(current) {
                        return;
                    }
                    handle.set_value(Some(InteractiveHandle::bind(
                        root,
                        lang_ctx.language.into(),
                    )));
                    status.set(LoadStatus::Ready);
                }
                Err(err) => {
                    log::error!("Error loading content: {}", err);
                    status.set(LoadStatus::Failed(language));
                }
            }
        });
    };

    Effect::new(move |_| {
        let language = lang_ctx.get();
        load(language);
    });

    let retry = move |_| load(lang_ctx.get_untracked());

    view! {
        <div
            id="loading-indicator"
            class="loading-indicator"
            class:active=move || status.get() == LoadStatus::Loading
        >
            <div class="spinner"></div>
            <p>{move || messages::loading_label(lang_ctx.get())}</p>
        </div>

        <div
            id="error-container"
            class="error-container"
            class:active=move || matches!(status.get(), LoadStatus::Failed(_))
        >
            {move || match status.get() {
                LoadStatus::Failed(failed) => {
                    let current = lang_ctx.get();
                    view! {
                        <h3>{icon("alert-triangle")} " " {messages::error_heading(current)}</h3>
                        <p>{messages::load_error(failed)}</p>
                        <button class="nav-btn retry-btn" on:click=retry>
                            {icon("refresh")} " " {messages::retry_label(current)}
                        </button>
                    }
                    .into_any()
                }
                _ => ().into_any(),
            }}
        </div>

        <div id="content-container" class="content-container" node_ref=container></div>
    }
}
