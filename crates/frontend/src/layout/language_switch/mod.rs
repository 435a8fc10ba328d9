use crate::shared::icons::icon;
use crate::shared::language::use_language;
use contracts::shared::language::Language;
use leptos::prelude::*;

/// One floating button per language; only the one leading away from the
/// current language is shown.
#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let ctx = use_language();

    Language::all()
        .into_iter()
        .map(move |target| {
            let hidden = move || ctx.get() == target;
            view! {
                <button
                    id=format!("floating-{}-btn", target.code())
                    class="floating-lang-btn"
                    lang=target.code()
                    style:display=move || if hidden() { "none" } else { "flex" }
                    on:click=move |_| ctx.switch_to(target)
                >
                    {icon("globe")}
                    <span>{target.native_name()}</span>
                </button>
            }
        })
        .collect_view()
}
