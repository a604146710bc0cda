mod api;
mod components;
mod config;
mod data;
pub mod hooks;
mod pages;
mod router;
mod storage;
mod theme_context;
mod user_context;

use theme_context::ThemeProvider;
use user_context::UserProvider;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <UserProvider>
                <router::AppRouter />
            </UserProvider>
        </ThemeProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
