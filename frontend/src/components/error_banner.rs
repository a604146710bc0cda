use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::config::NOTICE_DISMISS_MS;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_else(|| "Something went wrong".to_string())]
    pub title: String,
    /// Told when the reader or the timer closes the banner.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// The message the banner was closed on. Closing is per message: a different
/// message shows again.
#[derive(Debug, Default, Clone, PartialEq)]
struct ClosedOn(Option<String>);

impl ClosedOn {
    fn hides(&self, message: &str) -> bool {
        self.0.as_deref() == Some(message)
    }
}

fn frame_classes(open: bool) -> Classes {
    let motion = if open {
        "opacity-100 translate-y-0 max-h-48"
    } else {
        "pointer-events-none opacity-0 -translate-y-2 max-h-0"
    };
    classes!(
        "error-banner",
        "flex", "w-full", "max-w-2xl", "items-start", "gap-3", "overflow-hidden",
        "rounded-2xl", "border", "border-red-200", "bg-red-50", "px-5", "py-4", "text-sm", "text-red-800", "shadow-lg",
        "dark:border-red-800", "dark:bg-red-900/40", "dark:text-red-100",
        "transition-all", "duration-300", "ease-out",
        motion
    )
}

/// Transient failure notice with a title and a close button. Hides itself
/// after [`NOTICE_DISMISS_MS`] unless `auto_dismiss` is off; a blank message
/// renders nothing.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let closed_on = use_state(ClosedOn::default);
    let open = !closed_on.hides(&props.message);

    let close = {
        let closed_on = closed_on.clone();
        let message = props.message.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if closed_on.hides(&message) {
                return;
            }
            closed_on.set(ClosedOn(Some(message.clone())));
            if let Some(on_close) = &on_close {
                on_close.emit(());
            }
        })
    };

    let timer = {
        let close = close.clone();
        let delay = if props.auto_dismiss { NOTICE_DISMISS_MS } else { 0 };
        use_timeout(move || close.emit(()), delay)
    };
    use_effect_with(
        (props.message.clone(), props.auto_dismiss, open),
        move |(_, auto_dismiss, open)| {
            if *auto_dismiss && *open {
                timer.reset();
            } else {
                timer.cancel();
            }
        },
    );

    if props.message.trim().is_empty() {
        return Html::default();
    }

    html! {
        <div class={frame_classes(open)} role="alert" aria-live="assertive" aria-hidden={(!open).to_string()}>
            <i class="fas fa-triangle-exclamation mt-0.5 text-xl" aria-hidden="true"></i>
            <div class="flex-1 space-y-1">
                <p class="text-base font-semibold">{ &props.title }</p>
                <p>{ &props.message }</p>
            </div>
            <button
                type="button"
                class="inline-flex h-8 w-8 items-center justify-center rounded-full text-lg hover:bg-black/10 dark:hover:bg-white/15"
                aria-label="Dismiss"
                onclick={close.reform(|_: MouseEvent| ())}
            >
                <i class="fas fa-xmark" aria-hidden="true"></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_hides_only_that_message() {
        let closed = ClosedOn(Some("Network error".to_string()));
        assert!(closed.hides("Network error"));
        assert!(!closed.hides("Server error. Please try again."));
        assert!(!ClosedOn::default().hides("Network error"));
    }
}
