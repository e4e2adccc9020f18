use log::info;
use yew::prelude::*;

use crate::components::cards::{render_card, InfoCard, Stat, StatProps};
use crate::components::contact_form::ContactFormCard;
use crate::components::faq::FaqSection;
use crate::components::icon::{Icon, IconGlyph};
use crate::components::map::MapEmbed;
use crate::components::nav::Nav;
use crate::components::scroll_top::ScrollTop;
use crate::config;
use crate::content::{self, Bullet};
use crate::head;
use crate::schema::{self, JsonLd};

fn bullet_item(bullet: &Bullet) -> Html {
    html! {
        <li class="bullet">
            <IconGlyph icon={bullet.icon} />
            <span>{bullet.text}</span>
        </li>
    }
}

fn plain_item(icon: Icon, text: &'static str) -> Html {
    html! {
        <li class="bullet">
            <IconGlyph icon={icon} />
            <span>{text}</span>
        </li>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let residence = use_memo(|_| schema::to_json_ld(&schema::residence(&head::page_url())), ());

    {
        use_effect_with_deps(
            move |_| {
                info!("Landing page mounted");
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <div class="decor" aria-hidden="true">
                <div class="decor-gradient"></div>
                <svg class="decor-waves" width="1200" height="240" viewBox="0 0 1200 240" fill="none">
                    <path d="M0,120 C200,180 300,40 500,80 C700,120 800,200 1200,120 L1200,0 L0,0 Z" fill="#BFE0D3" opacity="0.8" />
                    <path d="M0,160 C200,220 300,80 520,120 C740,160 820,220 1200,160 L1200,0 L0,0 Z" fill="#D3EFE5" opacity="0.8" />
                </svg>
            </div>

            <Nav />

            // Hero
            <section class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <h1 class="hero-title">{"«Паруса Мечты» — апартаменты среди моря и сосен"}</h1>
                        <p class="hero-subtitle">
                            {"Три 12‑этажных корпуса в Профессорском уголке Алушты. Панорамы моря и гор, хвойный воздух, инфраструктура для отдыха и жизни: фитнес и SPA, детские и спортивные площадки, стрит‑ритейл. Продажи по ДДУ (214‑ФЗ) с эскроу."}
                        </p>
                        <ul class="hero-bullets">
                            { for content::HERO_BULLETS.iter().map(bullet_item) }
                        </ul>
                        <div class="hero-cta-group">
                            <a href="#cta" class="btn btn-primary btn-large">{"Получить подборку"}</a>
                            <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="btn btn-outline btn-large">
                                {"Связаться в WhatsApp"}
                            </a>
                        </div>
                    </div>
                    <div class="hero-image">
                        <img
                            src={config::HERO_IMAGE}
                            alt="Море рядом с комплексом"
                            loading="eager"
                            fetchpriority="high"
                            width="1600"
                            height="1040"
                        />
                    </div>
                </div>
            </section>

            <section id="benefits" class="section section-compact">
                <div class="container stats-grid">
                    { for content::STATS.iter().map(|item| html! {
                        <Stat ..StatProps::from(item) />
                    }) }
                </div>
            </section>

            <section id="about" class="section">
                <div class="container about-grid">
                    <div class="about-main">
                        <h2 class="section-title">{"О комплексе"}</h2>
                        <p class="section-text">{content::ABOUT_TEXT}</p>
                        <div class="cards-grid cards-2">
                            { for content::ABOUT_CARDS.iter().map(render_card) }
                        </div>
                    </div>
                    <aside class="key-facts">
                        <div class="key-facts-title">
                            <IconGlyph icon={Icon::Eye} />
                            {"Ключевые факты"}
                        </div>
                        <ul>
                            { for content::KEY_FACTS.iter().map(bullet_item) }
                        </ul>
                        <a href="#cta" class="btn btn-primary btn-block">{"Запросить подборку"}</a>
                    </aside>
                </div>
            </section>

            <section id="tech" class="section section-tinted">
                <div class="container two-col">
                    <div>
                        <h2 class="section-title">
                            <IconGlyph icon={Icon::Circuit} />
                            {"Инженерия и общественные пространства"}
                        </h2>
                        <ul class="bullet-list">
                            { for content::TECH_ITEMS.iter().map(bullet_item) }
                        </ul>
                    </div>
                    <div class="panel">
                        <div class="panel-title">
                            <IconGlyph icon={Icon::Waves} />
                            {"Преимущества локации"}
                        </div>
                        <div class="tiles-grid">
                            { for content::LOCATION_ADVANTAGES.iter().map(|text| html! {
                                <div class="tile">{*text}</div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id="plans" class="section">
                <div class="container">
                    <h2 class="section-title">
                        <IconGlyph icon={Icon::Ruler} />
                        {"Планировки"}
                    </h2>
                    <p class="section-text">{content::PLANS_INTRO}</p>
                    <div class="cards-grid cards-3">
                        { for content::PLANS.iter().map(|plan| html! {
                            <InfoCard icon={plan.icon} title={plan.title} text={plan.text}>
                                <a href="#cta" class="card-link">{"Запросить PDF‑каталог планировок"}</a>
                            </InfoCard>
                        }) }
                    </div>
                </div>
            </section>

            <section id="location" class="section section-tinted">
                <div class="container two-col">
                    <div>
                        <h2 class="section-title">
                            <IconGlyph icon={Icon::MapPin} />
                            {"Доступность"}
                        </h2>
                        <ul class="bullet-list">
                            { for content::LOCATION_BULLETS.iter().map(|text| plain_item(Icon::Waves, *text)) }
                        </ul>
                    </div>
                    <MapEmbed />
                </div>
            </section>

            <section id="status" class="section">
                <div class="container">
                    <h2 class="section-title">
                        <IconGlyph icon={Icon::FileText} />
                        {"Сроки и статус"}
                    </h2>
                    <div class="cards-grid cards-4">
                        { for content::STATUS_ITEMS.iter().map(render_card) }
                    </div>
                </div>
            </section>

            <FaqSection />

            <section id="cta" class="section section-cta">
                <div class="container two-col">
                    <div class="cta-copy">
                        <h2 class="section-title">
                            <IconGlyph icon={Icon::Handshake} />
                            {"Оставьте заявку на подбор"}
                        </h2>
                        <p class="section-text">
                            {"Пришлём PDF с планировками и типами видов, действующие цены и условия сделки."}
                        </p>
                        <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="btn btn-outline btn-large">
                            {"Связаться в WhatsApp"}
                        </a>
                    </div>
                    <ContactFormCard />
                </div>
            </section>

            <footer class="footer">
                <div class="container footer-grid">
                    <div class="footer-about">
                        <div class="footer-title">
                            <IconGlyph icon={Icon::Home} />
                            {content::COMPLEX_FULL_NAME}
                        </div>
                        <p>{content::FULL_ADDRESS}</p>
                        <p>{content::DEVELOPER_NOTE}</p>
                    </div>
                    <div class="footer-links">
                        <a href={config::POLICY_URL}>{"Политика конфиденциальности"}</a>
                        <span class="separator">{"•"}</span>
                        <a href={config::CONSENT_URL}>{"Согласие на обработку ПДн"}</a>
                    </div>
                </div>
            </footer>

            <JsonLd json={(*residence).clone()} />
            <ScrollTop />
        </div>
    }
}
