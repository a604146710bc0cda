use folio_shared::Project;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub on_select: Callback<Project>,
    /// Technology chips shown before collapsing the rest into "+n".
    #[prop_or(3)]
    pub max_tech: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let onclick = {
        let on_select = props.on_select.clone();
        let project = project.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(project.clone()))
    };
    let on_button = {
        let onclick = onclick.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            onclick.emit(event);
        })
    };
    let hidden = project.technologies.len().saturating_sub(props.max_tech);

    html! {
        <div
            class="flex flex-col h-full cursor-pointer rounded-lg overflow-hidden border border-[var(--border)] bg-[var(--surface)] shadow-xl transition-transform duration-200 hover:-translate-y-1"
            {onclick}
        >
            <div class="w-full h-48 overflow-hidden bg-[var(--surface-alt)]">
                <img src={project.image.clone()} alt={project.title.clone()} class="object-cover w-full h-full" loading="lazy" />
            </div>
            <div class="flex flex-col p-5 gap-2 flex-grow">
                <h3 class="text-xl font-bold line-clamp-1">{ &project.title }</h3>
                <p class="text-sm text-[var(--muted)] line-clamp-2">{ &project.description }</p>
                <div class="flex flex-wrap gap-2 pt-2">
                    { for project.technologies.iter().take(props.max_tech).map(|tech| html! {
                        <span class="px-2 py-1 text-xs rounded-full border border-[var(--border)] bg-[var(--surface-alt)]">{ tech }</span>
                    }) }
                    if hidden > 0 {
                        <span class="px-2 py-1 text-xs rounded-full bg-[var(--surface-alt)] text-[var(--muted)]">
                            { format!("+{hidden}") }
                        </span>
                    }
                </div>
                <div class="mt-auto pt-4">
                    <button
                        type="button"
                        class="w-full py-2 rounded bg-[var(--text)] text-[var(--bg)] text-sm font-medium"
                        onclick={on_button}
                    >
                        { "View Details" }
                    </button>
                </div>
            </div>
        </div>
    }
}
