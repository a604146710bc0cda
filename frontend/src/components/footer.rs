use yew::prelude::*;

use crate::hooks::scroll_window_to_top;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    let onclick = Callback::from(|_: MouseEvent| scroll_window_to_top());

    html! {
        <footer class="border-t border-[var(--border)] bg-[var(--surface)]">
            <div class="flex items-center justify-center p-6">
                <button
                    type="button"
                    class="text-sm text-[var(--muted)] hover:text-[var(--text)] transition-colors"
                    {onclick}
                    title="Back to top"
                >
                    { format!("© Copyright 2024 - {year} All Rights Reserved") }
                </button>
            </div>
        </footer>
    }
}
