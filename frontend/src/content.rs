//! Page copy. Everything here is `'static` and rendered as-is.

use crate::components::icon::Icon;

pub const COMPLEX_NAME: &str = "«Паруса Мечты»";
pub const COMPLEX_FULL_NAME: &str = "Комплекс апартаментов «Паруса Мечты»";
pub const SHORT_ADDRESS: &str = "Алушта · Профессорский уголок, ул. Сусловой, 3";
pub const FULL_ADDRESS: &str = "Республика Крым, г. Алушта, пос. Виноградное, ул. Сусловой, 3";
pub const DEVELOPER_NOTE: &str =
    "ДДУ по 214‑ФЗ, расчёты через эскроу‑счета. Девелопер/оператор: «Перспектива».";

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// Desktop header links. The mobile menu adds `CONTACTS_LINK` at the end.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "О комплексе", anchor: "#about" },
    NavLink { label: "Форматы", anchor: "#plans" },
    NavLink { label: "Инженерия", anchor: "#tech" },
    NavLink { label: "Локация", anchor: "#location" },
    NavLink { label: "Сроки", anchor: "#status" },
    NavLink { label: "FAQ", anchor: "#faq" },
];

pub const CONTACTS_LINK: NavLink = NavLink { label: "Контакты", anchor: "#cta" };

/// Section ids the landing page renders, in page order.
pub const SECTION_IDS: &[&str] = &[
    "benefits", "about", "tech", "plans", "location", "status", "faq", "cta",
];

pub struct Bullet {
    pub icon: Icon,
    pub text: &'static str,
}

pub const HERO_BULLETS: &[Bullet] = &[
    Bullet { icon: Icon::Calendar, text: "I кв. 2027 — сдача" },
    Bullet { icon: Icon::Ruler, text: "234 апартамента · 36–96 м²" },
    Bullet { icon: Icon::Parking, text: "Подземный паркинг (≈78 мест)" },
    Bullet { icon: Icon::Store, text: "Кладовые (≈26) и колясочные" },
];

pub struct StatItem {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub sub: Option<&'static str>,
}

pub const STATS: &[StatItem] = &[
    StatItem { icon: Icon::Building, label: "Состав", value: "3 корпуса", sub: Some("монолит‑каркас, 12 этажей") },
    StatItem { icon: Icon::MapPin, label: "Локация", value: "Проф. уголок", sub: Some("в пешей доступности от моря") },
    StatItem { icon: Icon::Dumbbell, label: "Инфраструктура", value: "SPA/фитнес", sub: Some("детские/спортплощадки, ритейл") },
    StatItem { icon: Icon::Shield, label: "Формат", value: "214‑ФЗ", sub: Some("ДДУ и эскроу‑счета") },
];

/// A titled card with an icon tile, used by several sections.
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

pub const ABOUT_TEXT: &str = "Апарт‑комплекс «Паруса Мечты» расположен в одном из самых зелёных районов Алушты — Профессорском уголке. Хвойный массив и горный рельеф создают особый микроклимат и позволяют наслаждаться морскими видами с разных уровней. Внутри территории — зоны отдыха, детские и спортивные площадки, а также помещения под кафе и сервисы.";

pub const ABOUT_CARDS: &[Card] = &[
    Card { icon: Icon::Ruler, title: "Планировки", text: "Студии, 1‑ и 2‑комнатные решения 36–96 м²; варианты с большими балконами." },
    Card { icon: Icon::Circuit, title: "Инженерия", text: "Современные лифты, системы безопасности и контроля доступа." },
    Card { icon: Icon::Parking, title: "Паркинг", text: "Подземный паркинг с лифтовым доступом; кладовые и колясочные." },
    Card { icon: Icon::Shield, title: "Право и застройщик", text: "ДДУ 214‑ФЗ, эскроу. Девелопер/оператор проекта — «Перспектива»." },
];

pub const KEY_FACTS: &[Bullet] = &[
    Bullet { icon: Icon::MapPin, text: "Алушта, пос. Виноградное, ул. Сусловой, 3" },
    Bullet { icon: Icon::Calendar, text: "Сдача: I квартал 2027" },
    Bullet { icon: Icon::Store, text: "Коммерческие помещения на стилобате" },
];

pub const TECH_ITEMS: &[Bullet] = &[
    Bullet { icon: Icon::Mountain, text: "Панорамное остекление, виды на море и горы" },
    Bullet { icon: Icon::Dumbbell, text: "SPA/фитнес‑зона, прогулочные и зелёные дворы" },
    Bullet { icon: Icon::Shield, text: "Системы безопасности и контроль доступа" },
    Bullet { icon: Icon::Store, text: "Коммерция у дома: кафе и полезные сервисы" },
];

pub const LOCATION_ADVANTAGES: &[&str] = &[
    "Пешком до моря и набережной",
    "Хвойный лес и чистый воздух",
    "Тихий квартал без транзита",
    "Рядом центр Алушты",
];

pub const PLANS_INTRO: &str = "Студии, 1‑ и 2‑комнатные апартаменты с балконами/лоджиями. По запросу — PDF с планировками, этажами и типами видов.";

pub const PLANS: &[Card] = &[
    Card { icon: Icon::Home, title: "Студии", text: "Компактные форматы с продуманными сценариями хранения" },
    Card { icon: Icon::Home, title: "1‑комнатные", text: "Кухни‑гостиные, панорамное остекление, балконы" },
    Card { icon: Icon::Home, title: "2‑комнатные", text: "Просторные гостиные, приватные спальни, угловые виды" },
];

pub const LOCATION_BULLETS: &[&str] = &[
    "Алушта, пос. Виноградное, ул. Сусловой, 3",
    "15–20 минут пешком до набережной и пляжей Профессорского уголка",
    "Поблизости — кафе, магазины, санаторно‑курортная инфраструктура",
];

pub const STATUS_ITEMS: &[Card] = &[
    Card { icon: Icon::Calendar, title: "Срок сдачи", text: "I квартал 2027" },
    Card { icon: Icon::Building, title: "Этажность", text: "12 этажей в каждом корпусе" },
    Card { icon: Icon::Shield, title: "Правовой формат", text: "ДДУ по 214‑ФЗ, расчёты через эскроу" },
    Card { icon: Icon::Parking, title: "Паркинг", text: "Подземный (около 78 мест) + кладовые (около 26)" },
];

/// `schema_answer` is the shorter wording published in the FAQ JSON-LD.
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub schema_answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Где расположен комплекс?",
        answer: "Республика Крым, г. Алушта, пос. Виноградное, ул. Сусловой, 3 (Профессорский уголок).",
        schema_answer: "Республика Крым, Алушта, пос. Виноградное, ул. Сусловой, 3.",
    },
    FaqEntry {
        question: "Какие форматы апартаментов?",
        answer: "Студии, 1‑ и 2‑комнатные решения площадью примерно 36–96 м².",
        schema_answer: "Студии, 1‑ и 2‑комнатные решения 36–96 м².",
    },
    FaqEntry {
        question: "Какая отделка?",
        answer: "White box/без отделки; по запросу — варианты «под ключ».",
        schema_answer: "White box/без отделки; по запросу — «под ключ».",
    },
    FaqEntry {
        question: "Что по инфраструктуре?",
        answer: "SPA/фитнес, детские и спортплощадки, прогулочные зоны, коммерция на первых этажах.",
        schema_answer: "SPA/фитнес, детские и спортивные площадки, прогулочные зоны, коммерция.",
    },
    FaqEntry {
        question: "Какой формат сделки и сроки?",
        answer: "ДДУ (214‑ФЗ) с эскроу; ориентир сдачи — I кв. 2027.",
        schema_answer: "ДДУ (214‑ФЗ) с эскроу; сдача — I кв. 2027.",
    },
    FaqEntry {
        question: "Есть ли паркинг и кладовые?",
        answer: "Да, подземный паркинг (~78 мест) и кладовые (~26).",
        schema_answer: "Подземный паркинг (~78 мест) и кладовые (~26).",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_anchor_points_at_a_rendered_section() {
        for link in NAV_LINKS.iter().chain(std::iter::once(&CONTACTS_LINK)) {
            let id = link.anchor.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&id), "{} has no section", link.anchor);
        }
    }

    #[test]
    fn faq_entries_are_complete() {
        assert_eq!(FAQ.len(), 6);
        for entry in FAQ {
            assert!(entry.question.ends_with('?'));
            assert!(!entry.answer.is_empty());
            assert!(!entry.schema_answer.is_empty());
        }
    }
}
