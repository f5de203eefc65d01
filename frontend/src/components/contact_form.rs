use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{self, ContactError, ContactForm, Field, FieldError};

const SUCCESS_RESET_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Editing,
    Sending,
    Sent,
    Failed(&'static str),
}

fn input_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

fn error_for(errors: &[FieldError], field: Field) -> Html {
    match errors.iter().find(|e| e.field == field) {
        Some(err) => html! { <span class="field-error">{err.message}</span> },
        None => html! {},
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let status = use_state(|| Status::Editing);
    let reset = use_mut_ref(|| None::<Timeout>);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        let reset = reset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Sending {
                return;
            }
            if let Err(found) = form.validate() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());
            status.set(Status::Sending);

            let submitted = (*form).clone();
            let form = form.clone();
            let errors = errors.clone();
            let status = status.clone();
            let reset = reset.clone();
            spawn_local(async move {
                match contact::send(&submitted).await {
                    Ok(()) => {
                        status.set(Status::Sent);
                        form.set(ContactForm::default());
                        *reset.borrow_mut() =
                            Some(Timeout::new(SUCCESS_RESET_MS, move || status.set(Status::Editing)));
                    }
                    Err(ContactError::Invalid(found)) => {
                        errors.set(found);
                        status.set(Status::Editing);
                    }
                    Err(err) => status.set(Status::Failed(err.user_message())),
                }
            });
        })
    };

    let field = |field: Field, kind: &'static str| {
        let id = format!("contact-{:?}", field).to_lowercase();
        let input = if field == Field::Message {
            html! {
                <textarea id={id.clone()} rows="6" value={form.get(field).to_string()} oninput={on_input(field)} />
            }
        } else {
            html! {
                <input id={id.clone()} type={kind} value={form.get(field).to_string()} oninput={on_input(field)} />
            }
        };
        html! {
            <div class={classes!("form-group", errors.iter().any(|e| e.field == field).then_some("invalid"))}>
                <label for={id}>{format!("{} *", field.label())}</label>
                { input }
                { error_for(&errors, field) }
            </div>
        }
    };

    let sending = *status == Status::Sending;
    html! {
        <section id="contact" class="contact">
            <h2 class="section-title gradient-text">{"Hablemos"}</h2>
            <p class="section-subtitle">{"Contanos tu idea y te respondemos a la brevedad"}</p>
            <form class="contact-form" {onsubmit} novalidate={true}>
                { field(Field::Name, "text") }
                { field(Field::Email, "email") }
                { field(Field::Subject, "text") }
                { field(Field::Message, "text") }
                <button type="submit" class="submit-button" disabled={sending}>
                    { if sending { "Enviando..." } else { "Enviar mensaje" } }
                </button>
                {
                    match &*status {
                        Status::Sent => html! { <p class="form-success">{"¡Mensaje enviado! Te contactaremos pronto."}</p> },
                        Status::Failed(message) => html! { <p class="form-error">{*message}</p> },
                        _ => html! {},
                    }
                }
            </form>
        </section>
    }
}
