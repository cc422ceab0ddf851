use log::Level;

pub const SITE_NAME: &str = "Shosh Digital";
pub const TAGLINE: &str = "Digital solutions for real businesses.";

pub const WHATSAPP_URL: &str = "https://wa.me/1234567890";
pub const TELEGRAM_URL: &str = "https://t.me/shoshdigital";
pub const EMAIL: &str = "hello@shoshdigital.com";
pub const PHONE_DISPLAY: &str = "+1 (234) 567-890";
pub const PHONE_NUMBER: &str = "+1234567890";

/// An outbound way to reach the agency. Only ever rendered into links.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactChannel {
    WhatsApp,
    Telegram,
    Email,
    Phone,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 4] = [
        ContactChannel::WhatsApp,
        ContactChannel::Telegram,
        ContactChannel::Email,
        ContactChannel::Phone,
    ];

    pub fn href(&self) -> String {
        match self {
            ContactChannel::WhatsApp => WHATSAPP_URL.to_string(),
            ContactChannel::Telegram => TELEGRAM_URL.to_string(),
            ContactChannel::Email => format!("mailto:{}", EMAIL),
            ContactChannel::Phone => format!("tel:{}", PHONE_NUMBER),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactChannel::WhatsApp => "WhatsApp",
            ContactChannel::Telegram => "Telegram",
            ContactChannel::Email => "Email",
            ContactChannel::Phone => "Phone",
        }
    }

    /// External deep links open in a new tab; mail and phone hand off to the OS.
    pub fn opens_new_tab(&self) -> bool {
        matches!(self, ContactChannel::WhatsApp | ContactChannel::Telegram)
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_links_use_their_schemes() {
        assert_eq!(ContactChannel::WhatsApp.href(), "https://wa.me/1234567890");
        assert_eq!(ContactChannel::Telegram.href(), "https://t.me/shoshdigital");
        assert_eq!(ContactChannel::Email.href(), "mailto:hello@shoshdigital.com");
        assert_eq!(ContactChannel::Phone.href(), "tel:+1234567890");
    }

    #[test]
    fn only_chat_apps_open_new_tabs() {
        let new_tab: Vec<_> = ContactChannel::ALL
            .iter()
            .filter(|c| c.opens_new_tab())
            .map(|c| c.label())
            .collect();
        assert_eq!(new_tab, vec!["WhatsApp", "Telegram"]);
    }
}
