/// Booking dialog carrying the package it was opened for.
///
/// Closed by its close control, a click outside the panel, or Escape;
/// the caller routes all three here. While open it dims the page and
/// locks scrolling.
#[derive(Debug, Default)]
pub struct BookingModal {
    package: Option<String>,
}

impl BookingModal {
    pub fn open_for(&mut self, package: &str) {
        self.package = Some(package.to_string());
    }

    pub fn close(&mut self) {
        self.package = None;
    }

    pub fn is_open(&self) -> bool {
        self.package.is_some()
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_carries_package_name() {
        let mut modal = BookingModal::default();
        assert!(!modal.is_open());
        modal.open_for("Island Hopper");
        assert!(modal.is_open());
        assert!(modal.locks_scroll());
        assert_eq!(modal.package(), Some("Island Hopper"));
    }

    #[test]
    fn test_close_clears_package() {
        let mut modal = BookingModal::default();
        modal.open_for("Deep Blue");
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.package(), None);
    }

    #[test]
    fn test_reopen_replaces_package() {
        let mut modal = BookingModal::default();
        modal.open_for("Island Hopper");
        modal.open_for("Temple Trail");
        assert_eq!(modal.package(), Some("Temple Trail"));
    }
}
