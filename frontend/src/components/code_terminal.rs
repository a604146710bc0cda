use folio_shared::articles::CodeBlock;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

const COPIED_RESET_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CodeTerminalProps {
    pub block: CodeBlock,
}

/// One code block in a terminal-style frame with a copy button. The green
/// light toggles a fullscreen view.
#[function_component(CodeTerminal)]
pub fn code_terminal(props: &CodeTerminalProps) -> Html {
    let copied = use_state(|| false);
    let maximized = use_state(|| false);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let block = &props.block;

    let on_copy = {
        let copied = copied.clone();
        let code = block.code.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&code);
            let copied = copied.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    web_sys::console::warn_1(&format!("Copy failed: {err:?}").into());
                    return;
                }
                copied.set(true);
                let copied = copied.clone();
                *reset_timer.borrow_mut() =
                    Some(Timeout::new(COPIED_RESET_MS, move || copied.set(false)));
            });
        })
    };

    let toggle_maximized = {
        let maximized = maximized.clone();
        Callback::from(move |_: MouseEvent| maximized.set(!*maximized))
    };

    let title = if block.filename.is_empty() { "bash" } else { block.filename.as_str() };

    html! {
        <div class={classes!("mb-6", "font-mono", maximized.then_some("fixed inset-4 z-50 overflow-auto"))}>
            <div class="rounded-lg overflow-hidden bg-gray-900 text-gray-100 shadow-lg">
                <div class="flex justify-between items-center px-4 pt-4 pb-2">
                    <div class="flex space-x-2">
                        <span class="w-3 h-3 rounded-full bg-red-500"></span>
                        <span class="w-3 h-3 rounded-full bg-yellow-500"></span>
                        <button
                            type="button"
                            class="w-3 h-3 rounded-full bg-green-500"
                            aria-label={if *maximized { "Restore" } else { "Maximize" }}
                            onclick={toggle_maximized}
                        />
                    </div>
                    <div class="flex items-center gap-3">
                        if !block.title.is_empty() {
                            <span class="text-xs text-gray-500">{ &block.title }</span>
                        }
                        <p class="text-sm text-gray-400">{ title }</p>
                        <button
                            type="button"
                            class={classes!(
                                "flex", "items-center", "gap-2", "px-3", "py-1", "rounded", "text-xs", "font-semibold",
                                if *copied { "bg-green-500/20 text-green-400" } else { "bg-gray-800 text-gray-300 hover:bg-gray-700" }
                            )}
                            onclick={on_copy}
                        >
                            <i class={classes!("fas", if *copied { "fa-check" } else { "fa-copy" })} aria-hidden="true"></i>
                            <span>{ if *copied { "Copied!" } else { "Copy" } }</span>
                        </button>
                    </div>
                </div>
                <pre class="px-4 pb-4 overflow-x-auto text-sm leading-relaxed">
                    <code class={format!("language-{}", block.language)}>{ &block.code }</code>
                </pre>
            </div>
        </div>
    }
}
