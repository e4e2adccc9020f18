use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    MapPin,
    Menu,
    Close,
    Building,
    Parking,
    Ruler,
    FileText,
    Circuit,
    Shield,
    Store,
    Dumbbell,
    Handshake,
    ArrowUp,
    Calendar,
    Waves,
    Mountain,
    Eye,
}

impl Icon {
    fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::MapPin => "📍",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::Building => "🏢",
            Icon::Parking => "🅿",
            Icon::Ruler => "📐",
            Icon::FileText => "📄",
            Icon::Circuit => "⚙",
            Icon::Shield => "🛡",
            Icon::Store => "🏬",
            Icon::Dumbbell => "🏋",
            Icon::Handshake => "🤝",
            Icon::ArrowUp => "↑",
            Icon::Calendar => "📅",
            Icon::Waves => "🌊",
            Icon::Mountain => "⛰",
            Icon::Eye => "👁",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.icon.glyph()}
        </span>
    }
}
