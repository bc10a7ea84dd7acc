//! Internationalization (i18n) support for Stargrid
//! Supports multiple languages with easy extensibility
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a settings language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// The other language, for the header toggle
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,
    AppTagline,

    // Header toolbar
    ScrollToTop,
    ScrollToBottom,
    ResetAll,
    ShowList,
    HideList,
    DarkMode,
    LightMode,

    // Counters (templates with {loaded} / {total} / {submitted})
    ItemsLoaded,
    ItemsSubmitted,

    // Rating list
    ListHidden,
    LoadingRow,
    ClearRatings,

    // Rating widget
    Submit,
    Submitted,
    Reset,
    NotRated,

    // Footer
    FooterNote,
    SandboxTitle,

    // Reset dialog
    ResetDialogTitle,
    ResetDialogMessage,
    ResetDialogConfirm,
    Cancel,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// "`loaded` of `total` items loaded"
    pub fn items_loaded(&self, loaded: usize, total: usize) -> String {
        self.get(Key::ItemsLoaded)
            .replace("{loaded}", &loaded.to_string())
            .replace("{total}", &total.to_string())
    }

    /// "`submitted` of `total` submitted"
    pub fn items_submitted(&self, submitted: usize, total: usize) -> String {
        self.get(Key::ItemsSubmitted)
            .replace("{submitted}", &submitted.to_string())
            .replace("{total}", &total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::AppTagline,
        Key::ScrollToTop,
        Key::ScrollToBottom,
        Key::ResetAll,
        Key::ShowList,
        Key::HideList,
        Key::DarkMode,
        Key::LightMode,
        Key::ItemsLoaded,
        Key::ItemsSubmitted,
        Key::ListHidden,
        Key::LoadingRow,
        Key::ClearRatings,
        Key::Submit,
        Key::Submitted,
        Key::Reset,
        Key::NotRated,
        Key::FooterNote,
        Key::SandboxTitle,
        Key::ResetDialogTitle,
        Key::ResetDialogMessage,
        Key::ResetDialogConfirm,
        Key::Cancel,
    ];

    #[test]
    fn every_key_is_translated() {
        for lang in [Language::English, Language::Chinese] {
            for key in ALL_KEYS {
                assert_ne!(t(lang, *key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn loaded_counter_text() {
        let locale = Locale::new(Language::English);
        assert_eq!(locale.items_loaded(10, 100), "10 of 100 items loaded");
    }

    #[test]
    fn reset_prompt_text() {
        assert_eq!(
            t(Language::English, Key::ResetDialogMessage),
            "Are you sure you want to reset all ratings? This action cannot be undone."
        );
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::English, Language::Chinese] {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code("fr"), Language::English);
    }
}
