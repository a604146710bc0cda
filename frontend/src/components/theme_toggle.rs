use yew::prelude::*;

use crate::theme_context::use_theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Sun/moon button flipping between light and dark mode.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ctx = use_theme();
    let is_dark = ctx.theme.is_dark();

    let onclick = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let label = if is_dark { "Switch to light mode" } else { "Switch to dark mode" };
    let icon_class = if is_dark { "fa-sun" } else { "fa-moon" };

    let button_class = classes!(
        "group",
        "inline-flex",
        "h-10",
        "w-10",
        "items-center",
        "justify-center",
        "rounded-full",
        "border",
        "border-[var(--border)]",
        "bg-transparent",
        "hover:bg-[var(--surface-alt)]",
        "transition-colors",
        "duration-150",
        props.class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={is_dark.to_string()}
        >
            <i
                class={classes!(
                    "fas",
                    icon_class,
                    "text-[var(--text)]",
                    "group-hover:text-[var(--primary)]"
                )}
                aria-hidden="true"
            ></i>
        </button>
    }
}
