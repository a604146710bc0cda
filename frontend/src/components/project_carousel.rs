use folio_shared::Project;
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::{
    api::fetch_projects,
    components::{
        error_banner::ErrorBanner, loading_spinner::LoadingSpinner, project_card::ProjectCard,
        project_modal::ProjectModal,
    },
    config::CAROUSEL_AUTOPLAY_MS,
    hooks::{use_remote, FetchState},
};

/// Step `current` by `delta` around a ring of `len` slides.
fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

/// Home page carousel over `GET /projects`. Autoplays until hovered.
#[function_component(ProjectCarousel)]
pub fn project_carousel() -> Html {
    let remote = use_remote((), |_| fetch_projects());
    let active = use_state(|| 0usize);
    let paused = use_state(|| false);
    let selected = use_state(|| None::<Project>);

    let len = match &remote.state {
        FetchState::Ready(projects) => projects.len(),
        _ => 0,
    };

    {
        let active = active.clone();
        let paused = *paused;
        use_interval(
            move || {
                if !paused && len > 1 {
                    active.set(wrap_index(*active, 1, len));
                }
            },
            CAROUSEL_AUTOPLAY_MS,
        );
    }

    let step = |delta: isize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(wrap_index(*active, delta, len)))
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |project: Project| selected.set(Some(project)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };
    let on_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    let body = match &remote.state {
        FetchState::Loading => html! { <LoadingSpinner label={AttrValue::from("Loading projects...")} /> },
        FetchState::Failed(message) => html! {
            <div class="flex flex-col items-center gap-4">
                <ErrorBanner message={message.clone()} auto_dismiss={false} />
                <button type="button" class="underline" onclick={remote.reload.reform(|_: MouseEvent| ())}>
                    { "Try again" }
                </button>
            </div>
        },
        FetchState::Ready(projects) if projects.is_empty() => html! {
            <div class="text-center py-20">
                <p class="text-2xl text-[var(--muted)] font-medium">{ "Projects coming soon..." }</p>
                <p class="text-[var(--muted)] mt-2">{ "Stay tuned for exciting updates!" }</p>
            </div>
        },
        FetchState::Ready(projects) => {
            let current = (*active).min(projects.len() - 1);
            html! {
                <div class="flex items-center justify-center gap-4" onmouseenter={on_enter} onmouseleave={on_leave}>
                    <button type="button" class="h-10 w-10 rounded-full border border-[var(--border)]" aria-label="Previous project" onclick={step(-1)}>
                        <i class="fas fa-chevron-left" aria-hidden="true"></i>
                    </button>
                    <div class="flex items-stretch gap-6 overflow-hidden">
                        { for [-1isize, 0, 1].iter().filter_map(|offset| {
                            if projects.len() < 3 && *offset != 0 {
                                return None;
                            }
                            let index = wrap_index(current, *offset, projects.len());
                            let project = projects[index].clone();
                            let focus = *offset == 0;
                            Some(html! {
                                <div
                                    key={format!("{}-{offset}", project.id)}
                                    class={classes!(
                                        "w-[300px]", "max-w-[90vw]", "transition-all", "duration-500",
                                        if focus { "scale-100 opacity-100" } else { "hidden md:block scale-90 opacity-50 pointer-events-none" }
                                    )}
                                >
                                    <ProjectCard {project} on_select={on_select.clone()} />
                                </div>
                            })
                        }) }
                    </div>
                    <button type="button" class="h-10 w-10 rounded-full border border-[var(--border)]" aria-label="Next project" onclick={step(1)}>
                        <i class="fas fa-chevron-right" aria-hidden="true"></i>
                    </button>
                </div>
            }
        },
    };

    html! {
        <section id="projects" class="container mx-auto px-6 py-20">
            <h2 class="text-3xl md:text-5xl font-bold mb-12">{ "PROJECTS" }</h2>
            { body }
            if let Some(project) = (*selected).clone() {
                <ProjectModal {project} {on_close} />
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::wrap_index;

    #[test]
    fn carousel_index_wraps_both_ways() {
        assert_eq!(wrap_index(0, -1, 4), 3);
        assert_eq!(wrap_index(3, 1, 4), 0);
        assert_eq!(wrap_index(1, 1, 4), 2);
        assert_eq!(wrap_index(5, 0, 0), 0);
    }
}
