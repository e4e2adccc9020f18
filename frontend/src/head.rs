//! Document `<head>` setup: title, SEO and Open Graph meta, canonical link,
//! hero preload and web fonts. Applied once at startup.

use std::sync::Once;

use log::info;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

use crate::config;

pub const TITLE: &str = "Комплекс апартаментов «Паруса Мечты» — Алушта, Профессорский уголок";
const DESCRIPTION: &str = "«Паруса Мечты» в Алуште: апарт‑комплекс в Профессорском уголке, 3 корпуса по 12 этажей, 234 апартамента 36–96 м², подземный паркинг, кладовые, SPA/фитнес и прогулочные зоны. Сдача — I кв. 2027. ДДУ 214‑ФЗ, эскроу.";
const OG_TITLE: &str = "Апартаменты «Паруса Мечты» — Алушта";
const OG_DESCRIPTION: &str = "Морские виды, хвойный лес, инфраструктура для отдыха и жизни. Планировки: студии, 1‑ и 2‑комнатные, опции white box/под ключ.";

static INIT: Once = Once::new();

#[derive(Debug, Error)]
pub enum HeadError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for HeadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        HeadError::Dom(format!("{:?}", value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    fn attr(self) -> (&'static str, &'static str) {
        match self {
            MetaKey::Name(value) => ("name", value),
            MetaKey::Property(value) => ("property", value),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HeadTag {
    Title(&'static str),
    Meta { key: MetaKey, content: String },
    Canonical(String),
    PreloadImage(&'static str),
    /// Font links are always appended, never looked up.
    FontLink {
        rel: &'static str,
        href: &'static str,
        crossorigin: bool,
    },
}

impl HeadTag {
    /// CSS selector of the element this tag reuses, if it reuses one.
    pub fn selector(&self) -> Option<String> {
        match self {
            HeadTag::Title(_) | HeadTag::FontLink { .. } => None,
            HeadTag::Meta { key, .. } => {
                let (attr, value) = key.attr();
                Some(format!("meta[{}=\"{}\"]", attr, value))
            }
            HeadTag::Canonical(_) => Some("link[rel=\"canonical\"]".to_string()),
            HeadTag::PreloadImage(_) => Some("link[rel=\"preload\"][as=\"image\"]".to_string()),
        }
    }
}

/// Everything the page puts into `<head>`, in insertion order.
pub fn head_tags(page_url: &str) -> Vec<HeadTag> {
    let meta = |key, content: &str| HeadTag::Meta {
        key,
        content: content.to_string(),
    };

    vec![
        HeadTag::FontLink { rel: "preconnect", href: config::FONTS_API, crossorigin: false },
        HeadTag::FontLink { rel: "preconnect", href: config::FONTS_STATIC, crossorigin: true },
        HeadTag::FontLink { rel: "stylesheet", href: config::FONTS_STYLESHEET, crossorigin: false },
        HeadTag::Title(TITLE),
        meta(MetaKey::Name("description"), DESCRIPTION),
        meta(MetaKey::Property("og:title"), OG_TITLE),
        meta(MetaKey::Property("og:description"), OG_DESCRIPTION),
        meta(MetaKey::Property("og:type"), "website"),
        meta(MetaKey::Property("og:image"), config::OG_IMAGE),
        meta(MetaKey::Property("og:url"), page_url),
        HeadTag::Canonical(page_url.to_string()),
        HeadTag::PreloadImage(config::HERO_IMAGE),
    ]
}

/// Current page address, or the configured site URL outside a browser.
pub fn page_url() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| config::SITE_URL.to_string())
}

/// Applies `head_tags` to the live document. Runs at most once per process.
pub fn init() -> Result<(), HeadError> {
    let mut result = Ok(());
    INIT.call_once(|| {
        result = apply_all();
    });
    result
}

fn apply_all() -> Result<(), HeadError> {
    let document = window()
        .ok_or(HeadError::NoWindow)?
        .document()
        .ok_or(HeadError::NoDocument)?;

    let tags = head_tags(&page_url());
    for tag in &tags {
        apply(&document, tag)?;
    }

    if let Some(root) = document.document_element() {
        if let Ok(root) = root.dyn_into::<HtmlElement>() {
            root.style().set_property("overflow-x", "hidden")?;
        }
    }
    if let Some(body) = document.body() {
        body.style().set_property("overflow-x", "hidden")?;
    }

    info!("Document head initialised with {} tags", tags.len());
    Ok(())
}

fn apply(document: &Document, tag: &HeadTag) -> Result<(), HeadError> {
    match tag {
        HeadTag::Title(title) => document.set_title(title),
        HeadTag::Meta { key, content } => {
            let (attr, value) = key.attr();
            let el = find_or_create(document, tag, "meta", &[(attr, value)])?;
            el.set_attribute("content", content)?;
        }
        HeadTag::Canonical(href) => {
            let el = find_or_create(document, tag, "link", &[("rel", "canonical")])?;
            el.set_attribute("href", href)?;
        }
        HeadTag::PreloadImage(href) => {
            find_or_create(
                document,
                tag,
                "link",
                &[("rel", "preload"), ("as", "image"), ("href", *href)],
            )?;
        }
        HeadTag::FontLink { rel, href, crossorigin } => {
            let el = append(document, "link", &[("rel", *rel), ("href", *href)])?;
            if *crossorigin {
                el.set_attribute("crossorigin", "")?;
            }
        }
    }
    Ok(())
}

/// Existing elements are returned untouched, `attrs` only seed a new one.
fn find_or_create(
    document: &Document,
    tag: &HeadTag,
    name: &str,
    attrs: &[(&str, &str)],
) -> Result<Element, HeadError> {
    if let Some(selector) = tag.selector() {
        if let Some(existing) = document.query_selector(&selector)? {
            return Ok(existing);
        }
    }
    append(document, name, attrs)
}

fn append(document: &Document, name: &str, attrs: &[(&str, &str)]) -> Result<Element, HeadError> {
    let head = document.head().ok_or(HeadError::NoHead)?;
    let el = document.create_element(name)?;
    for (attr, value) in attrs {
        el.set_attribute(attr, value)?;
    }
    head.append_child(&el)?;
    Ok(el)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const URL: &str = "https://parusa.example/";

    #[test]
    fn single_title_canonical_and_preload() {
        let tags = head_tags(URL);
        let count = |pred: fn(&HeadTag) -> bool| tags.iter().filter(|t| pred(t)).count();

        assert_eq!(count(|t| matches!(t, HeadTag::Title(_))), 1);
        assert_eq!(count(|t| matches!(t, HeadTag::Canonical(_))), 1);
        assert_eq!(count(|t| matches!(t, HeadTag::PreloadImage(_))), 1);
        assert_eq!(count(|t| matches!(t, HeadTag::FontLink { .. })), 3);
    }

    #[test]
    fn meta_keys_are_unique() {
        let tags = head_tags(URL);
        let selectors: Vec<_> = tags.iter().filter_map(HeadTag::selector).collect();
        let unique: HashSet<_> = selectors.iter().collect();
        assert_eq!(selectors.len(), unique.len());
    }

    #[test]
    fn page_url_feeds_og_url_and_canonical() {
        let tags = head_tags(URL);
        assert!(tags.contains(&HeadTag::Canonical(URL.to_string())));
        assert!(tags.contains(&HeadTag::Meta {
            key: MetaKey::Property("og:url"),
            content: URL.to_string(),
        }));
    }

    #[test]
    fn selectors_match_by_name_or_property() {
        let description = HeadTag::Meta {
            key: MetaKey::Name("description"),
            content: String::new(),
        };
        assert_eq!(description.selector().as_deref(), Some("meta[name=\"description\"]"));

        let og = HeadTag::Meta {
            key: MetaKey::Property("og:type"),
            content: String::new(),
        };
        assert_eq!(og.selector().as_deref(), Some("meta[property=\"og:type\"]"));

        assert_eq!(HeadTag::Title(TITLE).selector(), None);
    }
}
