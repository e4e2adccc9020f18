
/// Web3Forms intake, can be pointed elsewhere at build time for staging.
pub fn intake_url() -> &'static str {
    option_env!("PARUSA_INTAKE_URL").unwrap_or("https://api.web3forms.com/submit")
}

pub const WEB3FORMS_ACCESS_KEY: &str = "af90736e-9a82-429d-9943-30b5852e908a";

pub const WHATSAPP_URL: &str = "https://wa.me/79124530205";

// Used when location.href is unavailable
pub const SITE_URL: &str = "https://example.com/";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=1600&auto=format&fit=crop";
pub const OG_IMAGE: &str = "/og-parusa.jpg";

pub const FONTS_API: &str = "https://fonts.googleapis.com";
pub const FONTS_STATIC: &str = "https://fonts.gstatic.com";
pub const FONTS_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;500;700&family=Prata&display=swap";

pub const MAP_WIDGET_URL: &str = "https://yandex.ru/map-widget/v1/";
pub const MAP_ADDRESS: &str = "Алушта, ул. Сусловой, 3";
pub const MAP_ZOOM: u8 = 15;

pub const POLICY_URL: &str = "/policy.html";
pub const CONSENT_URL: &str = "/consent.html";

/// Scroll offset in px after which the "back to top" button shows up.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

pub const FAILURE_NOTICE: &str =
    "Не удалось отправить форму. Попробуйте ещё раз или напишите в WhatsApp.";
