use folio_shared::Theme;
use yew::prelude::*;

use crate::storage::LocalStore;

/// Current theme plus the toggle, provided at the root of the app.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Reflect `theme` on the document: `data-theme` on `<html>` and a
/// `dark`/`light` class on `<body>`.
fn apply_to_document(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
        let classes = root.class_list();
        let _ = classes.toggle_with_force("dark", theme.is_dark());
    }
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| Theme::load(&LocalStore));

    use_effect_with(*theme, |theme| {
        apply_to_document(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            if let Err(err) = next.persist(&LocalStore) {
                web_sys::console::warn_1(&format!("Failed to save theme: {err}").into());
            }
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

/// Read the theme context. Outside a provider this yields the default theme
/// and a no-op toggle.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::default(),
        toggle: Callback::noop(),
    })
}
