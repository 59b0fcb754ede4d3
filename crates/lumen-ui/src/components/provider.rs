//! Context providers for themed components.

use yew::prelude::*;

use crate::foundations::a11y::AdvisorHandle;
use crate::foundations::theme::Theme;

/// Props for [`ThemeProvider`].
#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Theme made available to descendants.
    #[prop_or_default]
    pub theme: Theme,
    /// Advisor for accessibility findings; descendants fall back to the
    /// build-dependent default when absent.
    #[prop_or_default]
    pub advisor: Option<AdvisorHandle>,
    /// Subtree receiving the theme.
    #[prop_or_default]
    pub children: Children,
}

/// Injects a [`Theme`] (and optionally an [`AdvisorHandle`]) into context.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let themed = html! {
        <ContextProvider<Theme> context={props.theme.clone()}>
            { for props.children.iter() }
        </ContextProvider<Theme>>
    };
    match &props.advisor {
        Some(advisor) => html! {
            <ContextProvider<AdvisorHandle> context={advisor.clone()}>
                {themed}
            </ContextProvider<AdvisorHandle>>
        },
        None => themed,
    }
}
