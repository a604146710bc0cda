use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        admin_sidebar::AdminSidebar, footer::Footer, header::Header, scroll_button::ScrollButton,
    },
    hooks::use_scroll_to_top,
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/articles")]
    Articles,
    #[at("/articles/category")]
    CategoryList,
    #[at("/articles/category/:category")]
    CategoryArticles { category: String },
    #[at("/articles/detail/:slug")]
    ArticleDetail { slug: String },
    #[at("/dashboard")]
    Dashboard,
    #[at("/addcategory")]
    AddCategory,
    #[at("/addarticles")]
    AddArticles,
    #[at("/managearticles")]
    ManageArticles,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Admin routes render inside the sidebar layout.
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::AddCategory | Route::AddArticles | Route::ManageArticles
        )
    }
}

fn switch(route: Route) -> Html {
    let page = match route.clone() {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Projects => html! { <pages::projects::ProjectsPage /> },
        Route::Articles => html! { <pages::articles::ArticlesPage /> },
        Route::CategoryList => html! { <pages::category_list::CategoryListPage /> },
        Route::CategoryArticles {
            category,
        } => {
            html! { <pages::category_articles::CategoryArticlesPage key={category.clone()} category={category.clone()} /> }
        },
        // Keyed so that a new slug remounts the page and counts a new view.
        Route::ArticleDetail {
            slug,
        } => {
            html! { <pages::article_detail::ArticleDetailPage key={slug.clone()} slug={slug.clone()} /> }
        },
        Route::Dashboard => html! { <pages::admin_dashboard::DashboardPage /> },
        Route::AddCategory => html! { <pages::admin_add_category::AddCategoryPage /> },
        Route::AddArticles => html! { <pages::admin_add_article::AddArticlePage /> },
        Route::ManageArticles => html! { <pages::admin_manage_articles::ManageArticlesPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    };

    if route.is_admin() {
        html! {
            <div class="flex min-h-screen bg-[var(--bg)] text-[var(--text)]">
                <AdminSidebar />
                <main class="flex-1 p-6 md:p-10 overflow-x-hidden">{ page }</main>
            </div>
        }
    } else {
        html! {
            <div class="flex flex-col bg-[var(--bg)] text-[var(--text)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <main class="flex-1 pt-20">{ page }</main>
                <Footer />
                <ScrollButton />
            </div>
        }
    }
}

#[function_component(ScrollOnNavigate)]
fn scroll_on_navigate() -> Html {
    use_scroll_to_top();
    Html::default()
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <ScrollOnNavigate />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn paths_resolve_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/articles/category"), Some(Route::CategoryList));
        assert_eq!(
            Route::recognize("/articles/detail/hello-rust"),
            Some(Route::ArticleDetail {
                slug: "hello-rust".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/articles/category/Web"),
            Some(Route::CategoryArticles {
                category: "Web".to_string()
            })
        );
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn admin_routes_are_flagged() {
        assert!(Route::ManageArticles.is_admin());
        assert!(!Route::Articles.is_admin());
        assert_eq!(Route::AddArticles.to_path(), "/addarticles");
    }
}
