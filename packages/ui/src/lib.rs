//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod feed;
pub use feed::FeedState;

mod validate;
pub use validate::{validate, DraftErrors};

mod theme;
pub use theme::{apply_theme, use_theme, Theme, ThemeSignal};

mod navbar;
pub use navbar::Navbar;
