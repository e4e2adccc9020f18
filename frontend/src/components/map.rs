use yew::prelude::*;

use crate::config;

pub fn map_widget_url(address: &str, zoom: u8) -> String {
    format!(
        "{}?text={}&z={}",
        config::MAP_WIDGET_URL,
        urlencoding::encode(address),
        zoom
    )
}

#[function_component(MapEmbed)]
pub fn map_embed() -> Html {
    let src = map_widget_url(config::MAP_ADDRESS, config::MAP_ZOOM);

    html! {
        <div class="map-embed">
            <iframe title="map" {src} loading="lazy"></iframe>
        </div>
    }
}
