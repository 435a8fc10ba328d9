use crate::content::ContentLoader;
use crate::feedback::FeedbackSection;
use crate::layout::Shell;
use crate::shared::language::LanguageProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <LanguageProvider>
            <Shell
                content=|| view! { <ContentLoader /> }.into_any()
                footer=|| view! { <FeedbackSection /> }.into_any()
            />
        </LanguageProvider>
    }
}
