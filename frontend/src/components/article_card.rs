use folio_shared::{
    articles::{format_date_short, read_time},
    Article,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::ArticleDetail {
        slug: article.slug.clone(),
    };
    let minutes = read_time(&article.description, &article.code);

    html! {
        <Link<Route>
            to={detail_route}
            classes={classes!(
                "group", "flex", "flex-col", "h-full", "rounded-xl", "overflow-hidden",
                "border", "border-[var(--border)]", "bg-[var(--surface)]",
                "transition-all", "duration-200", "hover:-translate-y-1", "hover:shadow-xl"
            )}
        >
            <article class="flex flex-col h-full">
                <div class="relative h-48 overflow-hidden bg-[var(--surface-alt)]">
                    if !article.img.is_empty() {
                        <img
                            src={article.img.clone()}
                            alt={article.title.clone()}
                            loading="lazy"
                            class="h-full w-full object-cover transition-transform duration-300 group-hover:scale-105"
                        />
                    }
                    <span class="absolute top-3 left-3 rounded-full bg-black/60 px-3 py-1 text-xs text-white">
                        { &article.category }
                    </span>
                </div>
                <div class="flex flex-1 flex-col gap-3 p-5">
                    <div class="flex items-center gap-3">
                        if !article.avatar.is_empty() {
                            <img
                                src={article.avatar.clone()}
                                alt={article.category.clone()}
                                class="h-8 w-8 rounded-full object-cover"
                            />
                        }
                        <h3 class="text-lg font-bold line-clamp-2 group-hover:text-[var(--primary)]">
                            { &article.title }
                        </h3>
                    </div>
                    <p class="text-sm text-[var(--muted)] line-clamp-3">{ &article.description }</p>
                    <div class="mt-auto flex flex-wrap items-center gap-4 text-xs text-[var(--muted)]">
                        <span title="Views">
                            <i class="far fa-eye mr-1" aria-hidden="true"></i>{ article.views }
                        </span>
                        <span title="Likes">
                            <i class="far fa-heart mr-1" aria-hidden="true"></i>{ article.likes }
                        </span>
                        <span>
                            <i class="far fa-clock mr-1" aria-hidden="true"></i>{ minutes }
                        </span>
                        <span class="ml-auto">{ format_date_short(&article.created_at) }</span>
                    </div>
                </div>
            </article>
        </Link<Route>>
    }
}
