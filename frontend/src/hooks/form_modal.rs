use yew::prelude::*;

/// Page-level "registration form open" flag. The owner hands out only the
/// half each child needs: CTAs get `open`, the wizard gets `close`.
#[derive(Clone, PartialEq)]
pub struct FormModal {
    pub is_open: bool,
    pub open: Callback<()>,
    pub close: Callback<()>,
}

#[hook]
pub fn use_form_modal() -> FormModal {
    let is_open = use_state_eq(|| false);

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_| {
            log::info!("Opening registration form");
            is_open.set(true);
        })
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(false))
    };

    FormModal {
        is_open: *is_open,
        open,
        close,
    }
}
