use crate::shared::icons::icon;
use crate::shared::language::use_language;
use contracts::domain::feedback::{FeedbackError, FeedbackForm};
use contracts::shared::messages;
use leptos::prelude::*;

/// Mailbox receiving page feedback.
pub const FEEDBACK_RECIPIENT: &str = "feedback@epidural-info.org";

/// Feedback form. Submitting opens the visitor's mail client with the
/// message prefilled; nothing is sent by the page itself.
#[component]
pub fn FeedbackSection() -> impl IntoView {
    let lang_ctx = use_language();
    let form = RwSignal::new(FeedbackForm::default());
    let error = RwSignal::new(None::<FeedbackError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let language = lang_ctx.get_untracked();
        match form.get_untracked().mailto_url(FEEDBACK_RECIPIENT, language) {
            Ok(url) => {
                error.set(None);
                if let Some(window) = web_sys::window() {
                    if let Err(err) = window.location().set_href(&url) {
                        log::error!("Could not open mail client: {:?}", err);
                    }
                }
            }
            Err(err) => {
                log::debug!("feedback rejected: {}", err);
                error.set(Some(err));
            }
        }
    };

    let labels = move || messages::feedback_labels(lang_ctx.get());

    view! {
        <section id="feedback" class="feedback-section">
            <h2>{icon("mail")} " " {move || labels().heading}</h2>
            <form class="feedback-form" on:submit=on_submit novalidate=true>
                <label class="form__label">
                    {move || labels().name}
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    {move || labels().email}
                    <input
                        type="email"
                        class="form__input"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    {move || labels().message}
                    <textarea
                        class="form__textarea"
                        rows="5"
                        prop:value=move || form.get().message
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">
                        {move || error.get().map(|e| e.message(lang_ctx.get())).unwrap_or_default()}
                    </p>
                </Show>
                <button type="submit" class="nav-btn">
                    {move || labels().submit}
                </button>
            </form>
        </section>
    }
}
