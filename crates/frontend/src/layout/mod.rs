pub mod language_switch;

use language_switch::LanguageSwitch;
use leptos::prelude::*;

/// Page frame: floating language switch, main content, footer.
///
/// ```text
/// +------------------------------------------+
/// |                         [language switch] |
/// |  main (fetched fragment)                  |
/// |  feedback                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C, F>(content: C, footer: F) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
    F: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <LanguageSwitch />
            <main class="app-main">
                {content()}
            </main>
            <footer class="app-footer">
                {footer()}
            </footer>
        </div>
    }
}
