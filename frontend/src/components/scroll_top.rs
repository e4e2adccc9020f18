use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::icon::{Icon, IconGlyph};
use crate::config;

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TOP_THRESHOLD
}

#[function_component(ScrollTop)]
pub fn scroll_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    if !should_show(scroll_y) {
        return html! {};
    }

    html! {
        <button class="scroll-top" {onclick} aria-label="Наверх">
            <IconGlyph icon={Icon::ArrowUp} />
        </button>
    }
}
