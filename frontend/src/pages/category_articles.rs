use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{pages::articles::ArticleListing, router::Route};

#[derive(Properties, PartialEq)]
pub struct CategoryArticlesPageProps {
    pub category: String,
}

#[function_component(CategoryArticlesPage)]
pub fn category_articles_page(props: &CategoryArticlesPageProps) -> Html {
    let category = urlencoding::decode(&props.category)
        .map(|name| name.into_owned())
        .unwrap_or_else(|_| props.category.clone());

    html! {
        <div class="container mx-auto px-6 py-12">
            <Link<Route> to={Route::CategoryList} classes={classes!("mb-6", "inline-flex", "items-center", "gap-2", "text-sm", "text-[var(--muted)]", "hover:text-[var(--text)]")}>
                <i class="fas fa-arrow-left" aria-hidden="true"></i>
                { "Back to categories" }
            </Link<Route>>
            <h1 class="text-3xl md:text-5xl font-bold mb-10">{ category.clone() }</h1>
            <ArticleListing category={Some(category)} />
        </div>
    }
}
