use folio_shared::Project;
use wasm_bindgen::{closure::Closure, JsCast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

/// Full project details over a backdrop. Closes on backdrop click, the close
/// button or Escape.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let closure = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        on_close.emit(());
                    }
                });
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                (window, closure)
            });

            move || {
                if let Some((window, closure)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let project = &props.project;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-[100] flex items-center justify-center bg-black/70 p-4"
            onclick={close.clone()}
            role="dialog"
            aria-modal="true"
            aria-labelledby="project-modal-title"
        >
            <div
                class="relative w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-xl bg-[var(--surface)] text-[var(--text)] shadow-2xl"
                onclick={stop}
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 h-9 w-9 rounded-full bg-black/50 text-white"
                    aria-label="Close"
                    onclick={close}
                >
                    <i class="fas fa-xmark" aria-hidden="true"></i>
                </button>
                <img src={project.image.clone()} alt={project.title.clone()} class="w-full h-64 object-cover" />
                <div class="p-6 space-y-4">
                    <h2 id="project-modal-title" class="text-2xl font-bold">{ &project.title }</h2>
                    <div class="flex flex-wrap gap-2">
                        { for project.technologies.iter().map(|tech| html! {
                            <span class="px-3 py-1 text-xs rounded-full border border-[var(--border)]">{ tech }</span>
                        }) }
                    </div>
                    <p class="text-[var(--muted)]">
                        { if project.full_description.is_empty() { &project.description } else { &project.full_description } }
                    </p>
                    <div class="flex flex-wrap gap-3">
                        if let Some(github) = project.github.clone() {
                            <a href={github} target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-2 rounded px-4 py-2 border border-[var(--border)]">
                                <i class="fab fa-github" aria-hidden="true"></i>{ "Source" }
                            </a>
                        }
                        if let Some(demo) = project.demo.clone() {
                            <a href={demo} target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-2 rounded px-4 py-2 bg-[var(--primary)] text-white">
                                <i class="fas fa-arrow-up-right-from-square" aria-hidden="true"></i>{ "Live Demo" }
                            </a>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
