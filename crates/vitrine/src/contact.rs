use regex::Regex;
use std::time::{Duration, Instant};
use url::Url;

/// Pause between accepting a submission and opening the outbound link.
pub const SEND_DELAY: Duration = Duration::from_millis(1000);

pub const FILL_ALL_ALERT: &str = "Please fill in all fields";
pub const INVALID_EMAIL_ALERT: &str = "Please enter a valid email address";
pub const SENT_ALERT: &str = "Message sent! We will contact you soon.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending { since: Instant },
}

/// Contact form state: field buffers, validation, and the delayed
/// hand-off to a WhatsApp link.
///
/// Submission is two-phase. [`ContactForm::submit`] validates and, when
/// accepted, enters a sending state with the submit control disabled;
/// [`ContactForm::tick`] completes it after [`SEND_DELAY`], returning
/// the composed `wa.me` link for the caller to open and resetting the
/// fields. Rejected submissions leave every field untouched.
#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub package: Option<String>,
    pub message: String,
    brand: String,
    whatsapp: String,
    state: SubmitState,
    email_pattern: Regex,
}

impl ContactForm {
    pub fn new(brand: &str, whatsapp: &str) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            package: None,
            message: String::new(),
            brand: brand.to_string(),
            whatsapp: whatsapp.to_string(),
            state: SubmitState::Idle,
            email_pattern: Regex::new(EMAIL_PATTERN).expect("email pattern is valid"),
        }
    }

    /// Pre-select a package, as the booking modal's hand-off does.
    pub fn preselect_package(&mut self, name: &str) {
        self.package = Some(name.to_string());
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, SubmitState::Sending { .. })
    }

    /// Validate and accept the submission. Returns the alert text to
    /// show when validation fails; the form is left untouched in that
    /// case. Re-submitting while already sending is a no-op.
    pub fn submit(&mut self, now: Instant) -> Result<(), &'static str> {
        if self.is_sending() {
            return Ok(());
        }
        let package = self.package.as_deref().unwrap_or("");
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
            || package.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(FILL_ALL_ALERT);
        }
        if !self.email_pattern.is_match(self.email.trim()) {
            return Err(INVALID_EMAIL_ALERT);
        }
        self.state = SubmitState::Sending { since: now };
        Ok(())
    }

    /// Complete a pending submission once the delay has elapsed:
    /// returns the outbound link and resets the form.
    pub fn tick(&mut self, now: Instant) -> Option<Url> {
        let SubmitState::Sending { since } = self.state else {
            return None;
        };
        if now.saturating_duration_since(since) < SEND_DELAY {
            return None;
        }
        let url = self.compose_link();
        self.state = SubmitState::Idle;
        match url {
            Ok(url) => {
                self.reset();
                Some(url)
            }
            Err(e) => {
                tracing::error!("could not build WhatsApp link: {e}");
                None
            }
        }
    }

    fn compose_link(&self) -> anyhow::Result<Url> {
        let text = format!(
            "🌟 *New Contact Form Inquiry* 🌟\n\n\
             👤 *Name:* {name}\n\
             📧 *Email:* {email}\n\
             📱 *Phone:* {phone}\n\
             🎯 *Package:* {package}\n\n\
             💬 *Message:*\n{message}\n\n\
             ---\n\
             Sent from {brand} Website",
            name = self.name.trim(),
            email = self.email.trim(),
            phone = self.phone.trim(),
            package = self.package.as_deref().unwrap_or("").trim(),
            message = self.message.trim(),
            brand = self.brand,
        );
        let mut url = Url::parse(&format!("https://wa.me/{}", self.whatsapp))?;
        url.query_pairs_mut().append_pair("text", &text);
        Ok(url)
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.package = None;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new("Archipelago Tours", "6282110821485");
        form.name = "Alice".to_string();
        form.email = "alice@example.com".to_string();
        form.phone = "+46701234567".to_string();
        form.package = Some("Island Hopper".to_string());
        form.message = "Two people, late September.".to_string();
        form
    }

    #[test]
    fn test_missing_field_blocks_submit() {
        let now = Instant::now();
        let mut form = filled_form();
        form.message.clear();
        assert_eq!(form.submit(now), Err(FILL_ALL_ALERT));
        assert!(!form.is_sending());
        assert_eq!(form.name, "Alice", "rejected submit must not touch fields");
    }

    #[test]
    fn test_whitespace_only_field_blocks_submit() {
        let now = Instant::now();
        let mut form = filled_form();
        form.phone = "   ".to_string();
        assert_eq!(form.submit(now), Err(FILL_ALL_ALERT));
    }

    #[test]
    fn test_no_package_selected_blocks_submit() {
        let now = Instant::now();
        let mut form = filled_form();
        form.package = None;
        assert_eq!(form.submit(now), Err(FILL_ALL_ALERT));
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let now = Instant::now();
        for email in ["not-an-email", "user @example.com", "user@examplecom", "@example.com"] {
            let mut form = filled_form();
            form.email = email.to_string();
            assert_eq!(form.submit(now), Err(INVALID_EMAIL_ALERT), "email: {email}");
        }
    }

    #[test]
    fn test_valid_submit_enters_sending() {
        let now = Instant::now();
        let mut form = filled_form();
        assert_eq!(form.submit(now), Ok(()));
        assert!(form.is_sending());
    }

    #[test]
    fn test_resubmit_while_sending_is_noop() {
        let now = Instant::now();
        let mut form = filled_form();
        form.submit(now).expect("first submit accepted");
        form.email = "broken".to_string();
        assert_eq!(form.submit(now), Ok(()), "disabled submit never validates");
    }

    #[test]
    fn test_tick_waits_for_the_delay() {
        let now = Instant::now();
        let mut form = filled_form();
        form.submit(now).expect("submit accepted");
        assert_eq!(form.tick(now), None);
        assert_eq!(form.tick(now + Duration::from_millis(999)), None);
        assert!(form.tick(now + SEND_DELAY).is_some());
    }

    #[test]
    fn test_tick_builds_link_and_resets() {
        let now = Instant::now();
        let mut form = filled_form();
        form.name = "  Alice  ".to_string();
        form.submit(now).expect("submit accepted");
        let url = form.tick(now + SEND_DELAY).expect("link after delay");

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/6282110821485");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .expect("text parameter present");
        assert_eq!(
            text,
            "🌟 *New Contact Form Inquiry* 🌟\n\n\
             👤 *Name:* Alice\n\
             📧 *Email:* alice@example.com\n\
             📱 *Phone:* +46701234567\n\
             🎯 *Package:* Island Hopper\n\n\
             💬 *Message:*\nTwo people, late September.\n\n\
             ---\n\
             Sent from Archipelago Tours Website"
        );

        assert!(!form.is_sending());
        assert!(form.name.is_empty(), "form resets after send");
        assert!(form.package.is_none());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_tick_fires_once() {
        let now = Instant::now();
        let mut form = filled_form();
        form.submit(now).expect("submit accepted");
        assert!(form.tick(now + SEND_DELAY).is_some());
        assert_eq!(
            form.tick(now + SEND_DELAY + Duration::from_secs(1)),
            None,
            "a completed send must not fire again"
        );
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut form = filled_form();
        assert_eq!(form.tick(Instant::now()), None);
    }

    #[test]
    fn test_preselect_package() {
        let mut form = ContactForm::new("Archipelago Tours", "6282110821485");
        form.preselect_package("Deep Blue");
        assert_eq!(form.package.as_deref(), Some("Deep Blue"));
    }
}
