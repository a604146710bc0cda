// Reusable components live here.

pub mod admin_sidebar;
pub mod article_card;
pub mod code_terminal;
pub mod comment_section;
pub mod error_banner;
pub mod footer;
pub mod header;
pub mod hero;
pub mod like_button;
pub mod loading_spinner;
pub mod pagination;
pub mod project_card;
pub mod project_carousel;
pub mod project_modal;
pub mod scroll_button;
pub mod services;
pub mod skills;
pub mod stats_card;
pub mod terminal;
pub mod theme_toggle;
