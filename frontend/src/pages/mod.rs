pub mod admin_add_article;
pub mod admin_add_category;
pub mod admin_dashboard;
pub mod admin_manage_articles;
pub mod article_detail;
pub mod articles;
pub mod category_articles;
pub mod category_list;
pub mod home;
pub mod not_found;
pub mod projects;
