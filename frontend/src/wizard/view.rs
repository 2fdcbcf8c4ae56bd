use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::wizard::fields::{FieldKind, FieldSpec};
use crate::wizard::state::{FormVariant, PosterType, Role, WizardAction, WizardState, WizardStep};
use crate::wizard::submission::{
    FieldValue, FormSession, FormTransport, FormsResponse, SubmissionStatus, SubmitError, Web3FormsTransport,
};

#[derive(Properties, PartialEq)]
pub struct CardWrapperProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    pub children: Children,
}

#[function_component(CardWrapper)]
fn card_wrapper(props: &CardWrapperProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="wizard-card">
            if let Some(on_back) = props.on_back.clone() {
                <button
                    class="wizard-icon-button wizard-back"
                    aria-label="Go back"
                    onclick={Callback::from(move |_: MouseEvent| on_back.emit(()))}
                >
                    {"←"}
                </button>
            }
            <button class="wizard-icon-button wizard-close" aria-label="Close" onclick={on_close}>
                {"✕"}
            </button>
            <h2 class="wizard-title">{props.title.clone()}</h2>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChoiceProps {
    primary: (AttrValue, Callback<MouseEvent>),
    secondary: (AttrValue, Callback<MouseEvent>),
}

#[function_component(Choice)]
fn choice(props: &ChoiceProps) -> Html {
    html! {
        <div class="wizard-choices">
            <button class="wizard-choice primary" onclick={props.primary.1.clone()}>
                {props.primary.0.clone()}
            </button>
            <button class="wizard-choice secondary" onclick={props.secondary.1.clone()}>
                {props.secondary.0.clone()}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormWizardProps {
    pub on_close: Callback<()>,
}

/// Role → poster type → registration form. State lives only as long as
/// the wizard is mounted.
#[function_component(FormWizard)]
pub fn form_wizard(props: &FormWizardProps) -> Html {
    let wizard = use_reducer(WizardState::default);
    let step = wizard.step();

    let dispatch = |action: fn() -> WizardAction| {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(action()))
    };

    let on_back = {
        let wizard = wizard.clone();
        step.can_go_back()
            .then(|| Callback::from(move |_: ()| wizard.dispatch(WizardAction::GoBack)))
    };

    let body = match step {
        WizardStep::RoleSelect => html! {
            <Choice
                primary={(AttrValue::from("I’m a Job Seeker"), dispatch(|| WizardAction::SelectRole(Role::Employee)))}
                secondary={(AttrValue::from("I’m a Job Poster"), dispatch(|| WizardAction::SelectRole(Role::Employer)))}
            />
        },
        WizardStep::PosterTypeSelect => html! {
            <Choice
                primary={(AttrValue::from("Individual"), dispatch(|| WizardAction::SelectPosterType(PosterType::Individual)))}
                secondary={(AttrValue::from("Company"), dispatch(|| WizardAction::SelectPosterType(PosterType::Company)))}
            />
        },
        WizardStep::EmployeeForm | WizardStep::CompanyForm | WizardStep::IndividualForm => {
            match step.form_variant() {
                Some(variant) => html! {
                    <RegistrationForm key={variant.role_tag()} {variant} />
                },
                None => html! {},
            }
        }
    };

    html! {
        <div class="wizard-overlay">
            <CardWrapper title={step.title()} on_close={props.on_close.clone()} {on_back}>
                { body }
            </CardWrapper>
            <style>
                {r#"
                    .wizard-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(12px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        overflow-y: auto;
                    }
                    .wizard-card {
                        position: relative;
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        width: 100%;
                        max-width: 42rem;
                        margin: auto;
                        padding: 2.5rem 2rem;
                    }
                    .wizard-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #1f2937;
                        text-align: center;
                        margin: 1.5rem 0;
                    }
                    .wizard-icon-button {
                        position: absolute;
                        top: 1rem;
                        padding: 0.5rem 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: #f3f4f6;
                        color: #4b5563;
                        cursor: pointer;
                    }
                    .wizard-back { left: 1rem; }
                    .wizard-close { right: 1rem; }
                    .wizard-choices {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .wizard-choice, .wizard-submit {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.375rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .wizard-choice.primary, .wizard-submit {
                        background: linear-gradient(to bottom right, #0052cc, #0047b3, #003d99);
                        color: #fff;
                    }
                    .wizard-choice.secondary {
                        background: #f3f4f6;
                        color: #1f2937;
                    }
                    .wizard-submit { width: 100%; margin-top: 1rem; }
                    .wizard-submit:disabled { opacity: 0.6; cursor: wait; }
                    .wizard-form.two-columns .wizard-fields {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 1rem;
                    }
                    .wizard-form .wizard-fields { display: grid; gap: 1rem; }
                    .wizard-field.wide { grid-column: 1 / -1; }
                    .wizard-field label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .wizard-field input, .wizard-field select, .wizard-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        padding: 0.5rem 1rem;
                        font-size: 1rem;
                    }
                    .wizard-message {
                        text-align: center;
                        font-size: 0.875rem;
                        color: #374151;
                        margin-top: 0.5rem;
                    }
                "#}
            </style>
        </div>
    }
}

pub enum RegistrationMsg {
    SetText(&'static str, String),
    SetFile(&'static str, Option<web_sys::File>),
    Submit,
    Settled(Result<FormsResponse, SubmitError>),
}

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub variant: FormVariant,
}

pub struct RegistrationForm {
    session: FormSession,
    form_ref: NodeRef,
}

impl RegistrationForm {
    fn seed_defaults(&mut self) {
        for spec in self.session.variant().fields() {
            if let Some(default) = spec.default_text() {
                self.session.set_field(spec.name, FieldValue::Text(default.to_string()));
            }
        }
    }

    fn render_field(&self, ctx: &Context<Self>, spec: &FieldSpec) -> Html {
        let name = spec.name;
        let value = self.session.text(name);
        let on_text = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            RegistrationMsg::SetText(name, input.value())
        });

        let control = match spec.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Number => {
                let input_type = match spec.kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    FieldKind::Number => "number",
                    _ => "text",
                };
                html! {
                    <input type={input_type} {name} placeholder={spec.placeholder} {value} oninput={on_text} />
                }
            }
            FieldKind::TextArea { rows } => html! {
                <textarea
                    {name}
                    rows={rows.to_string()}
                    placeholder={spec.placeholder}
                    {value}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        RegistrationMsg::SetText(name, input.value())
                    })}
                />
            },
            FieldKind::Select(options) => html! {
                <select
                    {name}
                    onchange={ctx.link().callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        RegistrationMsg::SetText(name, select.value())
                    })}
                >
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{*option}</option>
                    }) }
                </select>
            },
            FieldKind::File { accept } => html! {
                <input
                    type="file"
                    {name}
                    {accept}
                    onchange={ctx.link().callback(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let file = input.files().and_then(|files| files.get(0));
                        RegistrationMsg::SetFile(name, file)
                    })}
                />
            },
        };

        html! {
            <div class={classes!("wizard-field", spec.wide.then_some("wide"))}>
                <label>{spec.label}</label>
                { control }
            </div>
        }
    }
}

impl Component for RegistrationForm {
    type Message = RegistrationMsg;
    type Properties = RegistrationFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut form = Self {
            session: FormSession::new(ctx.props().variant),
            form_ref: NodeRef::default(),
        };
        form.seed_defaults();
        form
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegistrationMsg::SetText(name, value) => {
                self.session.set_field(name, FieldValue::Text(value));
                true
            }
            RegistrationMsg::SetFile(name, file) => {
                match file {
                    Some(file) => self.session.set_field(name, FieldValue::File(file)),
                    None => self.session.remove_field(name),
                }
                false
            }
            RegistrationMsg::Submit => {
                if self.session.is_pending() {
                    return false;
                }
                let payload = self.session.begin(config::get_access_key());
                log::info!("Submitting {} registration", self.session.variant().role_tag());
                let transport = Web3FormsTransport::default();
                ctx.link().send_future(async move {
                    RegistrationMsg::Settled(transport.send(payload).await)
                });
                true
            }
            RegistrationMsg::Settled(result) => {
                self.session.settle(result);
                if self.session.status() == SubmissionStatus::Success {
                    if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                    self.seed_defaults();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let variant = self.session.variant();
        let loading = self.session.is_pending();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            RegistrationMsg::Submit
        });

        html! {
            <form
                ref={self.form_ref.clone()}
                class={classes!("wizard-form", variant.two_columns().then_some("two-columns"))}
                {onsubmit}
            >
                <div class="wizard-fields">
                    { for variant.fields().iter().map(|spec| self.render_field(ctx, spec)) }
                </div>
                <button type="submit" class="wizard-submit" disabled={loading}>
                    { if loading { "Submitting..." } else { "Submit" } }
                </button>
                if let Some(message) = self.session.status().message() {
                    <p class="wizard-message">{message}</p>
                }
            </form>
        }
    }
}
