use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    /// Tailwind text colour for the value.
    #[prop_or(AttrValue::Static("text-emerald-600"))]
    pub accent: AttrValue,
    #[prop_or_default]
    pub route: Option<Route>,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let content = html! {
        <>
            <h3 class="text-lg font-semibold mb-2">{ props.title.clone() }</h3>
            <p class={classes!("text-3xl", "font-bold", props.accent.to_string())}>{ props.value.clone() }</p>
        </>
    };
    let card_classes = classes!(
        "block",
        "p-6",
        "rounded-lg",
        "shadow-md",
        "bg-[var(--surface)]",
        "transition-transform",
        "duration-200",
        "hover:-translate-y-1"
    );

    if let Some(route) = &props.route {
        html! {
            <Link<Route> to={route.clone()} classes={card_classes}>
                { content }
            </Link<Route>>
        }
    } else {
        html! {
            <div class={card_classes} role="status">
                { content }
            </div>
        }
    }
}
