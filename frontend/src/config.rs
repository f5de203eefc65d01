
/// Tunable animation timings. None of these are contracts; every value can
/// be overridden per component.
#[derive(Clone, Debug, PartialEq)]
pub struct Timing {
    pub team_autoplay_ms: u32,
    pub team_reset_ms: u32,
    pub portfolio_autoplay_ms: u32,
    pub portfolio_reset_ms: u32,
    pub carousel_transition_ms: u32,
    pub refresh_retry_ms: u32,
    pub scroll_idle_ms: u32,
    pub in_view_margin: &'static str,
    pub in_view_amount: f64,
    pub section_duration_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            team_autoplay_ms: 10_000,
            team_reset_ms: 15_000,
            portfolio_autoplay_ms: 5_000,
            portfolio_reset_ms: 15_000,
            carousel_transition_ms: 350,
            refresh_retry_ms: 100,
            scroll_idle_ms: 100,
            in_view_margin: "-100px",
            in_view_amount: 0.1,
            section_duration_ms: 300,
        }
    }
}

pub fn timing() -> Timing {
    Timing::default()
}

pub const BREVO_API_URL: &str = "https://api.brevo.com/v3/smtp/email";
pub const CONTACT_SENDER_NAME: &str = "SurCode Contact Form";

pub fn brevo_api_key() -> Option<&'static str> {
    option_env!("BREVO_API_KEY").filter(|key| !key.is_empty())
}

pub fn contact_sender() -> &'static str {
    option_env!("CONTACT_SENDER").unwrap_or("contacto@surcode.dev")
}

pub fn contact_recipient() -> Option<&'static str> {
    option_env!("CONTACT_RECIPIENT").filter(|email| !email.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
