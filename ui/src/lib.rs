//! Shared UI crate for Affluence. The data pipeline and all views live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod charts;
    pub mod download_panel;
    pub mod icons;
    pub mod stat_cards;

    pub use download_panel::DownloadPanel;
    pub use stat_cards::StatCards;
}
