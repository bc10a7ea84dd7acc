//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Stargrid");
    m.insert(Key::AppTagline, "Rate every item, one row at a time");

    // Header toolbar
    m.insert(Key::ScrollToTop, "Top");
    m.insert(Key::ScrollToBottom, "Bottom");
    m.insert(Key::ResetAll, "Reset all");
    m.insert(Key::ShowList, "Show list");
    m.insert(Key::HideList, "Hide list");
    m.insert(Key::DarkMode, "Dark");
    m.insert(Key::LightMode, "Light");

    // Counters
    m.insert(Key::ItemsLoaded, "{loaded} of {total} items loaded");
    m.insert(Key::ItemsSubmitted, "{submitted} of {total} submitted");

    // Rating list
    m.insert(Key::ListHidden, "The rating list is hidden");
    m.insert(Key::LoadingRow, "Loading…");
    m.insert(Key::ClearRatings, "Clear ratings");

    // Rating widget
    m.insert(Key::Submit, "Submit");
    m.insert(Key::Submitted, "Submitted");
    m.insert(Key::Reset, "Reset");
    m.insert(Key::NotRated, "Not rated");

    // Footer
    m.insert(
        Key::FooterNote,
        "Rows load on demand as you scroll. Ratings live only for this session.",
    );
    m.insert(Key::SandboxTitle, "Standalone widget");

    // Reset dialog
    m.insert(Key::ResetDialogTitle, "Reset all ratings");
    m.insert(
        Key::ResetDialogMessage,
        "Are you sure you want to reset all ratings? This action cannot be undone.",
    );
    m.insert(Key::ResetDialogConfirm, "Reset");
    m.insert(Key::Cancel, "Cancel");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
