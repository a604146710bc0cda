use folio_shared::{
    pagination::{visible_range, PUBLIC_PAGE_SIZE},
    Project,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{pagination::Pagination, project_card::ProjectCard, project_modal::ProjectModal},
    data::bundled_projects,
    hooks::{scroll_window_to_top, use_pagination},
};

/// Searchable, paged grid over the bundled project catalogue.
#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let projects = use_memo((), |_| bundled_projects());
    let query = use_state(String::new);
    let selected = use_state(|| None::<Project>);

    let filtered = projects
        .iter()
        .filter(|project| project.matches(&query))
        .cloned()
        .collect::<Vec<_>>();
    let filtered_len = filtered.len();
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(filtered, PUBLIC_PAGE_SIZE);

    let on_search = {
        let query = query.clone();
        let go_to_page = go_to_page.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(target.value());
                go_to_page.emit(1);
            }
        })
    };
    let on_page_change = Callback::from(move |page: usize| {
        go_to_page.emit(page);
        scroll_window_to_top();
    });
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |project: Project| selected.set(Some(project)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let caption = match visible_range(current_page, PUBLIC_PAGE_SIZE, filtered_len) {
        Some(range) => format!(
            "Showing {}-{} of {} project{}",
            range.start(),
            range.end(),
            filtered_len,
            if filtered_len == 1 { "" } else { "s" }
        ),
        None => String::new(),
    };

    html! {
        <div class="container mx-auto px-6 py-12 space-y-8">
            <div class="space-y-2">
                <h1 class="text-3xl md:text-5xl font-bold">{ "PROJECTS" }</h1>
                <p class="text-[var(--muted)]">{ format!("Explore my collection of {} projects", projects.len()) }</p>
            </div>
            <div class="relative max-w-xl">
                <i class="fas fa-magnifying-glass absolute left-4 top-1/2 -translate-y-1/2 text-[var(--muted)]" aria-hidden="true"></i>
                <input
                    type="search"
                    class="w-full rounded-lg border border-[var(--border)] bg-[var(--surface)] py-3 pl-11 pr-4 focus:outline-none focus:border-[var(--primary)]"
                    placeholder="Search projects by name, description, or technology..."
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </div>
            <p class="text-sm text-[var(--muted)]">{ caption }</p>
            if visible.is_empty() {
                <p class="py-20 text-center text-xl text-[var(--muted)]">{ "No projects match your search." }</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for visible.into_iter().map(|project| html! {
                        <ProjectCard key={project.id.clone()} project={project.clone()} on_select={on_select.clone()} max_tech={4} />
                    }) }
                </div>
            }
            <Pagination {current_page} {total_pages} {on_page_change} />
            if let Some(project) = (*selected).clone() {
                <ProjectModal {project} {on_close} />
            }
        </div>
    }
}
