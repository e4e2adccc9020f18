use yew::prelude::*;

use crate::content::FAQ;
use crate::schema::{self, JsonLd};

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let json = use_memo(|_| schema::to_json_ld(&schema::faq_page()), ());

    html! {
        <section id="faq" class="section section-tinted">
            <div class="container">
                <h2 class="section-title">{"Вопросы и ответы"}</h2>
                <div class="faq-grid">
                    { for FAQ.iter().map(|entry| html! {
                        <details key={entry.question} class="faq-item">
                            <summary class="faq-question">{entry.question}</summary>
                            <p class="faq-answer">{entry.answer}</p>
                        </details>
                    }) }
                </div>
            </div>
            <JsonLd json={(*json).clone()} />
        </section>
    }
}
