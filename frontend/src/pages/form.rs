use yew::prelude::*;
use yew_router::prelude::*;

use crate::wizard::view::FormWizard;
use crate::Route;

/// Shareable `/form` link. Closing the wizard goes back to the landing page.
#[function_component(FormPage)]
pub fn form_page() -> Html {
    let navigator = use_navigator();

    let on_close = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        } else {
            log::warn!("No router available to leave the form page");
        }
    });

    html! {
        <FormWizard {on_close} />
    }
}
