//! Language context for the whole page.
//!
//! Holds the current [`Language`], mirrors it onto the document (`dir`,
//! `lang`, title) and persists it in localStorage under
//! [`LANGUAGE_STORAGE_KEY`].

use contracts::shared::language::{Language, LANGUAGE_STORAGE_KEY};
use leptos::prelude::*;
use web_sys::window;

/// Load the saved preference. Storage failures fall back to the default.
fn load_language_from_storage() -> Language {
    let storage = match window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => storage,
        Some(Err(err)) => {
            log::warn!("Could not load language preference: {:?}", err);
            return Language::default();
        }
        _ => return Language::default(),
    };
    match storage.get_item(LANGUAGE_STORAGE_KEY) {
        Ok(saved) => Language::from_stored(saved.as_deref()),
        Err(err) => {
            log::warn!("Could not load language preference: {:?}", err);
            Language::default()
        }
    }
}

fn save_language_to_storage(language: Language) {
    let result = match window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => storage.set_item(LANGUAGE_STORAGE_KEY, language.code()),
        Some(Err(err)) => Err(err),
        _ => return,
    };
    if let Err(err) = result {
        log::warn!("Could not save language preference: {:?}", err);
    }
}

/// Apply direction, `lang` and title to the document.
fn apply_language_to_document(language: Language) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(body) = document.body() {
        let _ = body.set_attribute("dir", language.dir());
    }
    if let Some(html) = document.document_element() {
        let _ = html.set_attribute("lang", language.code());
    }
    document.set_title(language.document_title());
}

#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: RwSignal<Language>,
}

impl LanguageContext {
    /// Switch language. Selecting the current language does nothing, so
    /// no reload is triggered.
    pub fn switch_to(&self, language: Language) {
        if self.language.get_untracked() == language {
            return;
        }
        log::info!("switching language to '{}'", language.code());
        apply_language_to_document(language);
        save_language_to_storage(language);
        self.language.set(language);
    }

    pub fn get(&self) -> Language {
        self.language.get()
    }

    /// Current language without subscribing; for event handlers.
    pub fn get_untracked(&self) -> Language {
        self.language.get_untracked()
    }
}

/// Reads the stored preference once and provides [`LanguageContext`].
#[component]
pub fn LanguageProvider(children: Children) -> impl IntoView {
    let initial_language = load_language_from_storage();
    apply_language_to_document(initial_language);

    provide_context(LanguageContext {
        language: RwSignal::new(initial_language),
    });

    children()
}

pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
        .expect("LanguageContext not found. Wrap your app with LanguageProvider.")
}
