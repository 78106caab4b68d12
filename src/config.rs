use log::Level;

const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xeorwkgl";

/// Local storage key holding the cookie banner choice.
pub const CONSENT_STORAGE_KEY: &str = "cookieConsent";

/// How long the success message stays up before the waitlist dialog closes.
pub const SUCCESS_CLOSE_DELAY_MS: u32 = 2000;

pub const SITE_VERSION: &str = "V1.13";

/// Formspree endpoint the waitlist form posts to. Can be pointed at a staging
/// form by setting `WAITLIST_FORM_ENDPOINT` when building.
pub fn get_form_endpoint() -> &'static str {
    option_env!("WAITLIST_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_stays_up_for_two_seconds() {
        assert_eq!(SUCCESS_CLOSE_DELAY_MS, 2000);
    }
}
