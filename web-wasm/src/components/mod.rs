pub mod analysis_card;
pub mod footer;
pub mod header;
pub mod info_cards;
pub mod loading;
pub mod progress_bar;
pub mod toast;
pub mod upload_area;
