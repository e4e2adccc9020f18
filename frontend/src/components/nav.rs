use web_sys::MouseEvent;
use yew::prelude::*;

use super::icon::{Icon, IconGlyph};
use crate::config;
use crate::content::{self, CONTACTS_LINK, NAV_LINKS};

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, we only fold the menu away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <div class="nav-logo-badge">{"P"}</div>
                    <div class="nav-logo-text">
                        <div class="nav-logo-title">
                            <IconGlyph icon={Icon::Home} />
                            <span>{content::COMPLEX_NAME}</span>
                        </div>
                        <div class="nav-logo-address">
                            <IconGlyph icon={Icon::MapPin} />
                            {content::SHORT_ADDRESS}
                        </div>
                    </div>
                </a>

                <nav class="nav-links" aria-label="Главное меню">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.anchor} href={link.anchor} class="nav-link">{link.label}</a>
                    }) }
                </nav>

                <div class="nav-actions">
                    <div class="nav-buttons">
                        <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                            {"WhatsApp"}
                        </a>
                        <a href="#cta" class="btn btn-primary">{"Подбор"}</a>
                    </div>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Меню">
                        <IconGlyph icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().chain(std::iter::once(&CONTACTS_LINK)).map(|link| html! {
                        <a key={link.anchor} href={link.anchor} onclick={close_menu.clone()} class="mobile-link">
                            {link.label}
                        </a>
                    }) }
                    <div class="mobile-buttons">
                        <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                            {"WhatsApp"}
                        </a>
                        <a href="#cta" class="btn btn-primary">{"Подбор"}</a>
                    </div>
                </div>
            }
        </header>
    }
}
