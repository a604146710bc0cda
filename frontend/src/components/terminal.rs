use folio_shared::typewriter::{TerminalPhase, Typewriter, TypewriterTiming};
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::{config::TYPEWRITER_TICK_MS, data::terminal_commands};

/// Hero terminal that types the bundled command script in a loop.
#[function_component(Terminal)]
pub fn terminal() -> Html {
    let typewriter =
        use_mut_ref(|| Typewriter::new(terminal_commands(), TypewriterTiming::default()));
    let trigger = use_force_update();

    {
        let typewriter = typewriter.clone();
        use_interval(
            move || {
                if typewriter.borrow_mut().tick(u64::from(TYPEWRITER_TICK_MS)) {
                    trigger.force_update();
                }
            },
            TYPEWRITER_TICK_MS,
        );
    }

    let state = typewriter.borrow();
    let cursor = html! {
        <span class="inline-block w-2 h-5 ml-1 align-middle bg-[var(--text)] animate-pulse" aria-hidden="true"></span>
    };

    let body = match state.current() {
        None => html! {
            <p class="text-[var(--muted)]">{ "No commands to show." }</p>
        },
        Some(_) => {
            let phase = state.phase();
            let typing_command = phase == TerminalPhase::TypingCommand;
            let typing_result = phase == TerminalPhase::TypingResult;
            html! {
                <div
                    key={state.index()}
                    class={classes!(
                        "space-y-2", "transition-opacity", "duration-500",
                        if phase == TerminalPhase::Fading { "opacity-0" } else { "opacity-100" }
                    )}
                >
                    <div class="flex items-center gap-2">
                        <span class="text-emerald-500">{ "➜" }</span>
                        <span class="text-[var(--muted)]">{ "~" }</span>
                        <span class="text-emerald-500">{ state.visible_command().to_string() }</span>
                        if typing_command { { cursor.clone() } }
                    </div>
                    if let Some(result) = state.visible_result() {
                        <div class="whitespace-pre-wrap pl-6 leading-relaxed text-[var(--muted)]">
                            { result.to_string() }
                            if typing_result { { cursor } }
                        </div>
                    }
                </div>
            }
        },
    };

    html! {
        <div class="rounded-lg border border-[var(--border)] bg-[var(--surface)] overflow-hidden shadow-xl">
            <div class="flex items-center gap-2 px-4 py-3 border-b border-[var(--border)]">
                <div class="flex-1 text-center font-mono text-sm text-[var(--muted)]">
                    <i class="fas fa-chevron-right text-xs mr-1" aria-hidden="true"></i>
                    { "terminal" }
                </div>
                <div class="flex gap-2" aria-hidden="true">
                    <span class="w-3 h-3 rounded-full bg-red-500"></span>
                    <span class="w-3 h-3 rounded-full bg-yellow-500"></span>
                    <span class="w-3 h-3 rounded-full bg-green-500"></span>
                </div>
            </div>
            <div class="p-4 font-mono text-sm min-h-[320px]">{ body }</div>
        </div>
    }
}
