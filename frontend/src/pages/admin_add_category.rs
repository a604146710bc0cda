use folio_shared::validation::{CategoryForm, FormErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api::create_category,
    components::{error_banner::ErrorBanner, loading_spinner::{LoadingSpinner, SpinnerSize}},
};

#[derive(Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Saving,
    Saved(String),
    Failed(String),
}

#[function_component(AddCategoryPage)]
pub fn add_category_page() -> Html {
    let name = use_state(String::new);
    let errors = use_state(FormErrors::default);
    let status = use_state(|| SubmitStatus::Idle);

    let on_input = {
        let name = name.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
                if !errors.is_empty() {
                    let mut next = (*errors).clone();
                    next.clear("categoryName");
                    errors.set(next);
                }
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *status == SubmitStatus::Saving {
                return;
            }
            let form = CategoryForm {
                category_name: (*name).clone(),
            };
            let category = match form.validate() {
                Ok(category) => category,
                Err(failed) => {
                    errors.set(failed);
                    return;
                },
            };
            errors.set(FormErrors::default());
            status.set(SubmitStatus::Saving);

            let name = name.clone();
            let status = status.clone();
            spawn_local(async move {
                match create_category(&category).await {
                    Ok(message) => {
                        name.set(String::new());
                        status.set(SubmitStatus::Saved(
                            message.unwrap_or_else(|| "Category added successfully".to_string()),
                        ));
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to create category: {err}").into(),
                        );
                        status.set(SubmitStatus::Failed(err.user_message()));
                    },
                }
            });
        })
    };

    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |_| status.set(SubmitStatus::Idle))
    };

    let saving = *status == SubmitStatus::Saving;
    let field_error = errors.get("categoryName").map(str::to_string);
    let input_border = if field_error.is_some() { "border-red-500" } else { "border-[var(--border)]" };

    html! {
        <div class="max-w-2xl mx-auto mt-12 md:mt-0">
            <h1 class="text-3xl font-bold mb-2">{ "Add Category" }</h1>
            <p class="text-[var(--muted)] mb-8">{ "Create a new category for organizing articles." }</p>

            {
                match &*status {
                    SubmitStatus::Saved(message) => html! {
                        <div class="mb-6 rounded-lg border border-emerald-300 bg-emerald-50 px-4 py-3 text-emerald-800" role="status">
                            <i class="fas fa-circle-check mr-2" aria-hidden="true"></i>
                            { message }
                        </div>
                    },
                    SubmitStatus::Failed(message) => html! {
                        <div class="mb-6">
                            <ErrorBanner message={message.clone()} title="Failed to add category" on_close={on_dismiss.clone()} />
                        </div>
                    },
                    _ => Html::default(),
                }
            }

            <form class="space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6" onsubmit={on_submit} novalidate={true}>
                <div>
                    <label for="categoryName" class="block text-sm font-medium mb-2">{ "Category Name" }</label>
                    <input
                        id="categoryName"
                        type="text"
                        class={classes!(
                            "w-full", "rounded-lg", "border", "bg-transparent", "px-4", "py-2", input_border
                        )}
                        placeholder="e.g. Web Development"
                        value={(*name).clone()}
                        oninput={on_input}
                        disabled={saving}
                    />
                    if let Some(message) = field_error {
                        <p class="mt-1 text-sm text-red-500">{ message }</p>
                    }
                </div>
                <button
                    type="submit"
                    class="inline-flex items-center gap-2 rounded-lg bg-[var(--primary)] px-5 py-2 font-semibold text-white disabled:opacity-60"
                    disabled={saving}
                >
                    if saving {
                        <LoadingSpinner size={SpinnerSize::Small} inline={true} label={AttrValue::from("Adding...")} />
                    } else {
                        { "Add Category" }
                    }
                </button>
            </form>
        </div>
    }
}
