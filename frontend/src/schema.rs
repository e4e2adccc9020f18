//! schema.org JSON-LD blocks for search engines. The page itself never reads them.

use serde::Serialize;
use yew::prelude::*;

use crate::content::{self, FaqEntry};

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Serialize)]
pub struct FaqPage {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub text: &'static str,
}

impl From<&FaqEntry> for Question {
    fn from(entry: &FaqEntry) -> Self {
        Question {
            kind: "Question",
            name: entry.question,
            accepted_answer: Answer {
                kind: "Answer",
                text: entry.schema_answer,
            },
        }
    }
}

pub fn faq_page() -> FaqPage {
    FaqPage {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: content::FAQ.iter().map(Question::from).collect(),
    }
}

#[derive(Serialize)]
pub struct Residence {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: &'static str,
    pub url: String,
    pub address: PostalAddress,
}

#[derive(Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: &'static str,
    #[serde(rename = "addressLocality")]
    pub address_locality: &'static str,
    #[serde(rename = "addressRegion")]
    pub address_region: &'static str,
    #[serde(rename = "addressCountry")]
    pub address_country: &'static str,
}

pub fn residence(page_url: &str) -> Residence {
    Residence {
        context: SCHEMA_CONTEXT,
        kind: "Residence",
        name: content::COMPLEX_FULL_NAME,
        url: page_url.to_string(),
        address: PostalAddress {
            kind: "PostalAddress",
            street_address: "ул. Сусловой, 3",
            address_locality: "Алушта",
            address_region: "Республика Крым",
            address_country: "RU",
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct JsonLdProps {
    pub json: String,
}

#[function_component(JsonLd)]
pub fn json_ld(props: &JsonLdProps) -> Html {
    html! {
        <script type="application/ld+json">{props.json.clone()}</script>
    }
}

/// Serialises a block for `<JsonLd>`, logging instead of failing the render.
pub fn to_json_ld<T: Serialize>(block: &T) -> String {
    match serde_json::to_string(block) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialise JSON-LD: {}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn faq_page_lists_every_question() {
        let value = serde_json::to_value(faq_page()).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "FAQPage");

        let questions = value["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), content::FAQ.len());
        assert_eq!(
            questions[0],
            json!({
                "@type": "Question",
                "name": "Где расположен комплекс?",
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": "Республика Крым, Алушта, пос. Виноградное, ул. Сусловой, 3."
                }
            })
        );
    }

    #[test]
    fn residence_carries_postal_address_and_url() {
        let value: Value = serde_json::to_value(residence("https://parusa.example/")).unwrap();
        assert_eq!(value["@type"], "Residence");
        assert_eq!(value["url"], "https://parusa.example/");
        assert_eq!(value["name"], content::COMPLEX_FULL_NAME);
        assert_eq!(
            value["address"],
            json!({
                "@type": "PostalAddress",
                "streetAddress": "ул. Сусловой, 3",
                "addressLocality": "Алушта",
                "addressRegion": "Республика Крым",
                "addressCountry": "RU"
            })
        );
    }

    #[test]
    fn json_ld_text_is_valid_json() {
        let text = to_json_ld(&faq_page());
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["mainEntity"][5]["name"], "Есть ли паркинг и кладовые?");
    }
}
