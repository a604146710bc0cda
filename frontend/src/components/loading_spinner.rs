use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "h-4 w-4 border-2",
            SpinnerSize::Medium => "h-10 w-10 border-4",
            SpinnerSize::Large => "h-14 w-14 border-4",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Text shown next to the spinner; screen readers always get it.
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Render inline (inside a button) instead of as a centred block.
    #[prop_or(false)]
    pub inline: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let label = props.label.clone().unwrap_or_else(|| AttrValue::from("Loading..."));
    let ring = html! {
        <span
            class={classes!(
                "inline-block",
                "rounded-full",
                "border-[var(--primary)]",
                "border-t-transparent",
                "animate-spin",
                props.size.class()
            )}
            aria-hidden="true"
        />
    };
    let caption = if props.label.is_some() {
        html! { <span>{ label.clone() }</span> }
    } else {
        html! { <span class="sr-only">{ label.clone() }</span> }
    };

    if props.inline {
        html! {
            <span class="inline-flex items-center gap-2" role="status" aria-live="polite">
                { ring }
                { caption }
            </span>
        }
    } else {
        html! {
            <div
                class="flex flex-col items-center justify-center gap-3 py-12 text-[var(--muted)]"
                role="status"
                aria-live="polite"
                aria-busy="true"
            >
                { ring }
                { caption }
            </div>
        }
    }
}
