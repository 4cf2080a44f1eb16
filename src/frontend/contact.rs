use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{run_submission, ContactAction, ContactField, ContactForm};
use crate::content::PERSONAL_INFO;
use crate::relay::BrowserRelay;

use super::sections::ExternalLink;

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn event_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| event.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);
    // Held from submit until the success display expires.
    let in_flight = use_mut_ref(|| false);

    let on_edit = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = event_value(&event) {
                dispatcher.dispatch(ContactAction::Edit(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *in_flight.borrow() {
                return;
            }
            *in_flight.borrow_mut() = true;

            let snapshot = (*form).clone();
            let dispatcher = form.dispatcher();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                run_submission(
                    &snapshot,
                    &BrowserRelay,
                    move |action| dispatcher.dispatch(action),
                    |delay| TimeoutFuture::new(delay.as_millis() as u32),
                )
                .await;
                *in_flight.borrow_mut() = false;
            });
        })
    };

    let status = form.status;

    html! {
        <section id="contact" class="section-block" aria-labelledby="contact-heading">
            <h2 id="contact-heading" class="section-title">{"Open Communication Channel"}</h2>
            <div class="contact-grid">
                <ul class="contact-details">
                    <li>
                        <span class="muted">{"Email"}</span>
                        <a class="link" href={format!("mailto:{}", PERSONAL_INFO.email)}>{PERSONAL_INFO.email}</a>
                    </li>
                    <li>
                        <span class="muted">{"Phone"}</span>
                        <a class="link" href={format!("tel:{}", PERSONAL_INFO.phone.replace(' ', ""))}>{PERSONAL_INFO.phone}</a>
                    </li>
                    <li>
                        <span class="muted">{"Base"}</span>
                        {PERSONAL_INFO.location}
                    </li>
                    <li>
                        <span class="muted">{"LinkedIn"}</span>
                        <ExternalLink href={PERSONAL_INFO.linkedin} label="Connect" />
                    </li>
                    <li>
                        <span class="muted">{"GitHub"}</span>
                        <ExternalLink href={PERSONAL_INFO.github} label="Repositories" />
                    </li>
                </ul>

                <form class="contact-form" onsubmit={onsubmit}>
                    <label for={ContactField::Name.as_str()}>{"Name"}</label>
                    <input
                        id={ContactField::Name.as_str()}
                        name={ContactField::Name.as_str()}
                        type="text"
                        required={true}
                        value={form.name.clone()}
                        oninput={on_edit(ContactField::Name)}
                    />
                    <label for={ContactField::Email.as_str()}>{"Email"}</label>
                    <input
                        id={ContactField::Email.as_str()}
                        name={ContactField::Email.as_str()}
                        type="email"
                        required={true}
                        value={form.email.clone()}
                        oninput={on_edit(ContactField::Email)}
                    />
                    <label for={ContactField::Message.as_str()}>{"Message"}</label>
                    <textarea
                        id={ContactField::Message.as_str()}
                        name={ContactField::Message.as_str()}
                        rows="5"
                        required={true}
                        value={form.message.clone()}
                        oninput={on_edit(ContactField::Message)}
                    />
                    <button
                        type="submit"
                        class={classes!("button", "button-primary", status.css_class())}
                        disabled={status.trigger_disabled()}
                    >
                        {status.button_label()}
                    </button>
                </form>
            </div>
        </section>
    }
}
