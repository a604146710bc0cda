use std::rc::Rc;

use folio_shared::validation::{
    check_orientation, ArticleDraft, ArticleForm, FieldError, FormErrors, ImageSlot,
};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    File, FormData, HtmlImageElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    Url,
};
use yew::prelude::*;

use crate::{
    api::{create_article, fetch_categories},
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    hooks::{use_remote, FetchState},
};

#[derive(Clone, Copy, PartialEq)]
enum TextField {
    Category,
    Title,
    Description,
    Code,
}

impl TextField {
    fn name(self) -> &'static str {
        match self {
            TextField::Category => "category",
            TextField::Title => "title",
            TextField::Description => "description",
            TextField::Code => "code",
        }
    }
}

#[derive(Clone, Default, PartialEq)]
struct AddArticleState {
    form: ArticleForm,
    errors: FormErrors,
    avatar_preview: Option<String>,
    img_preview: Option<String>,
}

enum AddArticleAction {
    Edit(TextField, String),
    /// Image passed the orientation check; carries its preview URL.
    ImageAccepted(ImageSlot, String),
    ImageRejected(FieldError),
    ImageRemoved(ImageSlot),
    Rejected(FormErrors),
    Reset,
}

impl Reducible for AddArticleState {
    type Action = AddArticleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AddArticleAction::Edit(field, value) => {
                match field {
                    TextField::Category => next.form.category = value,
                    TextField::Title => next.form.title = value,
                    TextField::Description => next.form.description = value,
                    TextField::Code => next.form.code = value,
                }
                next.errors.clear(field.name());
            },
            AddArticleAction::ImageAccepted(slot, preview) => {
                let old = match slot {
                    ImageSlot::Avatar => {
                        next.form.has_avatar = true;
                        next.avatar_preview.replace(preview)
                    },
                    ImageSlot::Cover => {
                        next.form.has_img = true;
                        next.img_preview.replace(preview)
                    },
                };
                revoke(old);
                next.errors.clear(slot.field());
            },
            AddArticleAction::ImageRejected(error) => {
                next.errors.clear(error.field);
                next.errors.push(error);
            },
            AddArticleAction::ImageRemoved(slot) => {
                let old = match slot {
                    ImageSlot::Avatar => {
                        next.form.has_avatar = false;
                        next.avatar_preview.take()
                    },
                    ImageSlot::Cover => {
                        next.form.has_img = false;
                        next.img_preview.take()
                    },
                };
                revoke(old);
                next.errors.clear(slot.field());
            },
            AddArticleAction::Rejected(errors) => next.errors = errors,
            AddArticleAction::Reset => {
                revoke(next.avatar_preview.take());
                revoke(next.img_preview.take());
                next = AddArticleState::default();
            },
        }
        next.into()
    }
}

fn revoke(url: Option<String>) {
    if let Some(url) = url {
        let _ = Url::revoke_object_url(&url);
    }
}

fn first_file(input: &NodeRef) -> Option<File> {
    input
        .cast::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

fn clear_input(input: &NodeRef) {
    if let Some(input) = input.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

/// Decode the picked file off-DOM and check its natural orientation for
/// `slot`. Rejected files are cleared from the input.
fn inspect_image(
    slot: ImageSlot,
    input: NodeRef,
    state: UseReducerHandle<AddArticleState>,
) -> Result<(), JsValue> {
    let Some(file) = first_file(&input) else {
        state.dispatch(AddArticleAction::ImageRemoved(slot));
        return Ok(());
    };
    let url = Url::create_object_url_with_blob(&file)?;
    let image = HtmlImageElement::new()?;

    let onload = {
        let image = image.clone();
        let url = url.clone();
        let input = input.clone();
        let state = state.clone();
        Closure::once(move |_: JsValue| {
            match check_orientation(slot, image.natural_width(), image.natural_height()) {
                Ok(()) => state.dispatch(AddArticleAction::ImageAccepted(slot, url)),
                Err(error) => {
                    let _ = Url::revoke_object_url(&url);
                    clear_input(&input);
                    state.dispatch(AddArticleAction::ImageRejected(error));
                },
            }
        })
    };
    let onerror = {
        let url = url.clone();
        Closure::once(move |_: JsValue| {
            let _ = Url::revoke_object_url(&url);
            clear_input(&input);
            state.dispatch(AddArticleAction::ImageRejected(FieldError::new(
                slot.field(),
                "Failed to load image",
            )));
        })
    };

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();
    image.set_src(&url);
    Ok(())
}

fn build_form_data(
    draft: &ArticleDraft,
    avatar: &File,
    img: &File,
) -> Result<FormData, JsValue> {
    let body = FormData::new()?;
    body.append_with_str("category", &draft.category)?;
    body.append_with_str("title", &draft.title)?;
    body.append_with_str("description", &draft.description)?;
    body.append_with_str("code", &draft.code)?;
    body.append_with_blob("avatar", avatar)?;
    body.append_with_blob("img", img)?;
    Ok(body)
}

#[derive(Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Saving,
    Saved(String),
    Failed(String),
}

#[function_component(AddArticlePage)]
pub fn add_article_page() -> Html {
    let state = use_reducer(AddArticleState::default);
    let status = use_state(|| SubmitStatus::Idle);
    let categories = use_remote((), |_| fetch_categories());
    let avatar_ref = use_node_ref();
    let img_ref = use_node_ref();

    let on_text = |field: TextField| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| event.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()));
            if let Some(value) = value {
                state.dispatch(AddArticleAction::Edit(field, value));
            }
        })
    };
    let on_category = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                state.dispatch(AddArticleAction::Edit(TextField::Category, select.value()));
            }
        })
    };
    let on_image = |slot: ImageSlot, input: NodeRef| {
        let state = state.clone();
        Callback::from(move |_: Event| {
            if let Err(err) = inspect_image(slot, input.clone(), state.clone()) {
                web_sys::console::error_1(&err);
                state.dispatch(AddArticleAction::ImageRejected(FieldError::new(
                    slot.field(),
                    "Failed to load image",
                )));
            }
        })
    };
    let on_remove = |slot: ImageSlot, input: NodeRef| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            clear_input(&input);
            state.dispatch(AddArticleAction::ImageRemoved(slot));
        })
    };

    let on_submit = {
        let state = state.clone();
        let status = status.clone();
        let avatar_ref = avatar_ref.clone();
        let img_ref = img_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *status == SubmitStatus::Saving {
                return;
            }
            let draft = match state.form.validate() {
                Ok(draft) => draft,
                Err(errors) => {
                    state.dispatch(AddArticleAction::Rejected(errors));
                    return;
                },
            };
            let (Some(avatar), Some(img)) = (first_file(&avatar_ref), first_file(&img_ref)) else {
                let mut errors = FormErrors::default();
                errors.push(FieldError::new("avatar", "Avatar is required"));
                errors.push(FieldError::new("img", "Image is required"));
                state.dispatch(AddArticleAction::Rejected(errors));
                return;
            };
            let body = match build_form_data(&draft, &avatar, &img) {
                Ok(body) => body,
                Err(err) => {
                    web_sys::console::error_1(&err);
                    status.set(SubmitStatus::Failed("Failed to add article".to_string()));
                    return;
                },
            };

            status.set(SubmitStatus::Saving);
            let state = state.clone();
            let status = status.clone();
            let avatar_ref = avatar_ref.clone();
            let img_ref = img_ref.clone();
            spawn_local(async move {
                match create_article(body).await {
                    Ok(message) => {
                        clear_input(&avatar_ref);
                        clear_input(&img_ref);
                        state.dispatch(AddArticleAction::Reset);
                        status.set(SubmitStatus::Saved(
                            message.unwrap_or_else(|| "Article added successfully!".to_string()),
                        ));
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to add article: {err}").into());
                        status.set(SubmitStatus::Failed(err.user_message()));
                    },
                }
            });
        })
    };

    let saving = *status == SubmitStatus::Saving;
    let error_for = |field: &str| -> Html {
        match state.errors.get(field) {
            Some(message) => html! { <p class="mt-1 text-sm text-red-500">{ message }</p> },
            None => Html::default(),
        }
    };
    let input_class = |field: &str| {
        classes!(
            "w-full", "rounded-lg", "border", "bg-transparent", "px-4", "py-2",
            if state.errors.get(field).is_some() { "border-red-500" } else { "border-[var(--border)]" }
        )
    };

    let category_options = match &categories.state {
        FetchState::Loading => html! { <option value="" disabled={true}>{ "Loading categories..." }</option> },
        FetchState::Failed(_) => html! { <option value="" disabled={true}>{ "Failed to load categories" }</option> },
        FetchState::Ready(list) => html! {
            <>
                <option value="">{ "Select a category" }</option>
                { for list.iter().map(|category| html! {
                    <option
                        key={category.id.clone()}
                        value={category.name.clone()}
                        selected={state.form.category == category.name}
                    >
                        { &category.name }
                    </option>
                }) }
            </>
        },
    };

    let image_field = |slot: ImageSlot, label: &'static str, hint: &'static str, input: &NodeRef, preview: &Option<String>| {
        let field = slot.field();
        html! {
            <div>
                <label for={field} class="block text-sm font-medium mb-2">
                    { label }<span class="text-red-500">{ " *" }</span>
                </label>
                <input
                    id={field}
                    ref={input.clone()}
                    type="file"
                    accept="image/*"
                    class="block w-full text-sm"
                    onchange={on_image(slot, input.clone())}
                    disabled={saving}
                />
                <p class="mt-1 text-xs text-[var(--muted)]">{ hint }</p>
                { error_for(field) }
                if let Some(url) = preview.clone() {
                    <div class="relative mt-3 inline-block">
                        <img
                            src={url}
                            alt={format!("{label} preview")}
                            class={classes!("rounded-lg", "object-cover", if slot == ImageSlot::Avatar { "h-40 w-28" } else { "h-28 w-48" })}
                        />
                        <button
                            type="button"
                            class="absolute -right-2 -top-2 rounded-full bg-red-500 p-1 text-white"
                            aria-label={format!("Remove {label}")}
                            onclick={on_remove(slot, input.clone())}
                        >
                            <i class="fas fa-xmark" aria-hidden="true"></i>
                        </button>
                    </div>
                }
            </div>
        }
    };

    html! {
        <div class="max-w-4xl mx-auto mt-12 md:mt-0">
            <div class="mb-8">
                <h1 class="text-3xl font-bold mb-2">{ "Add New Article" }</h1>
                <p class="text-[var(--muted)]">{ "Fill in the details below to create a new article" }</p>
            </div>

            {
                match &*status {
                    SubmitStatus::Saved(message) => html! {
                        <div class="mb-6 rounded-lg border border-emerald-300 bg-emerald-50 px-4 py-3 text-emerald-800" role="status">
                            { message }
                        </div>
                    },
                    SubmitStatus::Failed(message) => html! {
                        <div class="mb-6 rounded-lg border border-red-300 bg-red-50 px-4 py-3 text-red-700" role="alert">
                            { message }
                        </div>
                    },
                    _ => Html::default(),
                }
            }

            <form class="space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6 md:p-8" onsubmit={on_submit} novalidate={true}>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <label for="category" class="block text-sm font-medium mb-2">
                            { "Category" }<span class="text-red-500">{ " *" }</span>
                        </label>
                        <select id="category" class={input_class("category")} onchange={on_category} disabled={saving}>
                            { category_options }
                        </select>
                        { error_for("category") }
                    </div>
                    <div>
                        <label for="title" class="block text-sm font-medium mb-2">
                            { "Title" }<span class="text-red-500">{ " *" }</span>
                        </label>
                        <input
                            id="title"
                            type="text"
                            class={input_class("title")}
                            placeholder="Enter article title"
                            value={state.form.title.clone()}
                            oninput={on_text(TextField::Title)}
                            disabled={saving}
                        />
                        { error_for("title") }
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    { image_field(ImageSlot::Avatar, "Avatar", "Portrait images only (height > width)", &avatar_ref, &state.avatar_preview) }
                    { image_field(ImageSlot::Cover, "Image", "Landscape images only (width > height)", &img_ref, &state.img_preview) }
                </div>

                <div>
                    <label for="description" class="block text-sm font-medium mb-2">
                        { "Description" }<span class="text-red-500">{ " *" }</span>
                    </label>
                    <textarea
                        id="description"
                        rows="5"
                        class={input_class("description")}
                        placeholder="Write a short description"
                        value={state.form.description.clone()}
                        oninput={on_text(TextField::Description)}
                        disabled={saving}
                    />
                    { error_for("description") }
                </div>

                <div>
                    <label for="code" class="block text-sm font-medium mb-2">
                        { "Code" }<span class="text-red-500">{ " *" }</span>
                    </label>
                    <textarea
                        id="code"
                        rows="12"
                        class={classes!(input_class("code"), "font-mono", "text-sm")}
                        placeholder="```rust filename=\"main.rs\"\nfn main() {}\n```"
                        value={state.form.code.clone()}
                        oninput={on_text(TextField::Code)}
                        disabled={saving}
                    />
                    { error_for("code") }
                </div>

                <div class="flex justify-end">
                    <button
                        type="submit"
                        class="inline-flex items-center gap-2 rounded-lg bg-[var(--primary)] px-6 py-2 font-semibold text-white disabled:opacity-60"
                        disabled={saving}
                    >
                        if saving {
                            <LoadingSpinner size={SpinnerSize::Small} inline={true} label={AttrValue::from("Submitting...")} />
                        } else {
                            <i class="fas fa-upload" aria-hidden="true"></i>
                            { "Submit Article" }
                        }
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AddArticleState, action: AddArticleAction) -> AddArticleState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn editing_a_field_clears_its_error_only() {
        let mut errors = FormErrors::default();
        errors.push(FieldError::new("title", "Title is required"));
        errors.push(FieldError::new("code", "Code is required"));
        let state = AddArticleState {
            errors,
            ..AddArticleState::default()
        };

        let next = reduce(state, AddArticleAction::Edit(TextField::Title, "Hello Rust".into()));

        assert_eq!(next.form.title, "Hello Rust");
        assert!(next.errors.get("title").is_none());
        assert_eq!(next.errors.get("code"), Some("Code is required"));
    }

    #[test]
    fn rejected_image_replaces_previous_message() {
        let mut errors = FormErrors::default();
        errors.push(FieldError::new("avatar", "Avatar is required"));
        let state = AddArticleState {
            errors,
            ..AddArticleState::default()
        };

        let next = reduce(
            state,
            AddArticleAction::ImageRejected(FieldError::new("avatar", "Avatar must be vertical/portrait shape")),
        );

        assert_eq!(next.errors.get("avatar"), Some("Avatar must be vertical/portrait shape"));
        assert!(!next.form.has_avatar);
    }
}
