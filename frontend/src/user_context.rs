use folio_shared::AnonymousUserId;
use yew::prelude::*;

use crate::storage::anonymous_user;

#[derive(Properties, PartialEq)]
pub struct UserProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Resolves the visitor's anonymous id once and hands it down the tree.
#[function_component(UserProvider)]
pub fn user_provider(props: &UserProviderProps) -> Html {
    let user = use_memo((), |_| anonymous_user());

    html! {
        <ContextProvider<AnonymousUserId> context={(*user).clone()}>
            { props.children.clone() }
        </ContextProvider<AnonymousUserId>>
    }
}

/// The id provided by [`UserProvider`]; `None` outside one.
#[hook]
pub fn use_anonymous_user() -> Option<AnonymousUserId> {
    use_context::<AnonymousUserId>()
}
