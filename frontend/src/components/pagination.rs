use folio_shared::pagination::{page_slots, PageLayout, PageSlot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
    #[prop_or_default]
    pub layout: PageLayout,
}

/// Previous/next buttons around a strip of page numbers. Renders nothing for
/// a single page.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = props.total_pages;
    let slots = page_slots(props.current_page, total_pages, props.layout);
    if slots.is_empty() {
        return Html::default();
    }

    let current_page = props.current_page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-[var(--text)]",
        "text-sm",
        "font-semibold",
        "shadow-sm",
        "transition-all",
        "duration-200",
        "hover:-translate-y-[1px]",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed",
        "disabled:hover:translate-y-0"
    );

    html! {
        <nav class="flex flex-wrap items-center justify-center gap-3" aria-label="Pagination">
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={prev_disabled}
                onclick={prev_onclick}
                aria-label="Previous page"
            >
                <i class="fas fa-chevron-left" aria-hidden="true"></i>
            </button>
            <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")}>
                { for slots.into_iter().map(|slot| match slot {
                    PageSlot::Page(page) => {
                        let is_current = page == current_page;
                        let page_classes = classes!(
                            base_btn_classes.clone(),
                            is_current.then_some(
                                "bg-[var(--primary)] text-white border-transparent cursor-default pointer-events-none"
                            )
                        );
                        let onclick = {
                            let on_page_change = on_page_change.clone();
                            Callback::from(move |_| on_page_change.emit(page))
                        };

                        html! {
                            <button
                                key={format!("page-{page}")}
                                type="button"
                                class={page_classes}
                                aria-label={format!("Go to page {page}")}
                                aria-current={is_current.then(|| AttrValue::from("page"))}
                                disabled={is_current}
                                {onclick}
                            >
                                { page }
                            </button>
                        }
                    },
                    PageSlot::Ellipsis(gap) => html! {
                        <span
                            key={format!("ellipsis-{}", gap.as_str())}
                            class={classes!(base_btn_classes.clone(), "select-none", "opacity-60", "pointer-events-none")}
                            aria-hidden="true"
                        >
                            {"..."}
                        </span>
                    },
                }) }
            </div>
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={next_disabled}
                onclick={next_onclick}
                aria-label="Next page"
            >
                <i class="fas fa-chevron-right" aria-hidden="true"></i>
            </button>
        </nav>
    }
}
