use yew::prelude::*;

use super::icon::{Icon, IconGlyph};
use crate::content::{Card, StatItem};

#[derive(Properties, PartialEq)]
pub struct IconWrapProps {
    pub icon: Icon,
}

#[function_component(IconWrap)]
pub fn icon_wrap(props: &IconWrapProps) -> Html {
    html! {
        <div class="icon-wrap">
            <IconGlyph icon={props.icon} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub sub: Option<AttrValue>,
    pub icon: Icon,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-glow"></div>
            <div class="stat-label"><IconGlyph icon={props.icon} />{props.label.to_string()}</div>
            <div class="stat-value">{props.value.to_string()}</div>
            if let Some(sub) = &props.sub {
                <div class="stat-sub">{sub.to_string()}</div>
            }
        </div>
    }
}

impl From<&StatItem> for StatProps {
    fn from(item: &StatItem) -> Self {
        StatProps {
            value: item.value.into(),
            label: item.label.into(),
            sub: item.sub.map(AttrValue::from),
            icon: item.icon,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub text: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Icon tile on the left, title and text on the right.
#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class="info-card">
            <IconWrap icon={props.icon} />
            <div>
                <div class="info-card-title">{props.title.to_string()}</div>
                <div class="info-card-text">{props.text.to_string()}</div>
                { for props.children.iter() }
            </div>
        </div>
    }
}

pub fn render_card(card: &Card) -> Html {
    html! {
        <InfoCard icon={card.icon} title={card.title} text={card.text} />
    }
}
