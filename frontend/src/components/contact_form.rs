use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::flow::{self, ContactForm, FormAction, SubmitGuard};
use crate::contact::intake::Web3FormsIntake;
use crate::contact::request::Field;

fn alert(message: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(message) {
            error!("Failed to show notice: {:?}", e);
        }
    }
}

#[function_component(ContactFormCard)]
pub fn contact_form_card() -> Html {
    let form = use_reducer(ContactForm::default);
    let guard = use_state(SubmitGuard::default);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let guard = (*guard).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(request) = form.try_begin() else {
                return;
            };
            let Some(in_flight) = guard.acquire() else {
                info!("Contact request already in flight, ignoring submit");
                return;
            };

            info!("Submitting contact request");
            form.dispatch(FormAction::Begin);
            let dispatcher = form.dispatcher();
            spawn_local(async move {
                let intake = Web3FormsIntake::default();
                flow::deliver(
                    in_flight,
                    &intake,
                    request,
                    move |action| dispatcher.dispatch(action),
                    alert,
                )
                .await;
            });
        })
    };

    html! {
        <div class="form-card">
            if form.sent {
                <div class="form-sent">
                    <div class="form-title">{"Спасибо! Заявка отправлена."}</div>
                    <p>{"Мы свяжемся с вами в ближайшее время."}</p>
                </div>
            } else {
                <>
                    <div class="form-title">{"Получить подборку"}</div>
                    <p class="form-subtitle">
                        {"Оставьте контакты — вышлем актуальные предложения по «Парусам Мечты»."}
                    </p>
                    <form {onsubmit} class="contact-form">
                        <input
                            name="name"
                            placeholder="Ваше имя"
                            required={true}
                            value={form.fields.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                        <input
                            name="phone"
                            placeholder="Телефон"
                            required={true}
                            value={form.fields.phone.clone()}
                            oninput={on_input(Field::Phone)}
                        />
                        <input
                            name="email"
                            placeholder="Email (по желанию)"
                            value={form.fields.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                        <textarea
                            name="message"
                            placeholder="Комментарий"
                            rows="3"
                            value={form.fields.message.clone()}
                            oninput={on_message}
                        />
                        <button type="submit" class="btn btn-primary btn-block" disabled={form.sending}>
                            { if form.sending { "Отправляем..." } else { "Отправить" } }
                        </button>
                    </form>
                    <a href={config::POLICY_URL} class="form-legal">{"Политика конфиденциальности"}</a>
                    <a href={config::CONSENT_URL} class="form-legal">{"Согласие на обработку ПДн"}</a>
                </>
            }
        </div>
    }
}
