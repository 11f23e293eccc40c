use crate::content::NavLink;

/// Slide-in navigation drawer with its overlay scrim.
///
/// A drawer without links is inert: toggling logs an error and changes
/// nothing, mirroring a page whose menu markup is missing.
#[derive(Debug)]
pub struct MenuDrawer {
    links: Vec<NavLink>,
    open: bool,
}

impl MenuDrawer {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links, open: false }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_inert(&self) -> bool {
        self.links.is_empty()
    }

    /// Flip the drawer. Drawer links route back through this as well,
    /// keeping the original toggle semantics rather than an explicit
    /// close.
    pub fn toggle(&mut self) {
        if self.is_inert() {
            tracing::error!("navigation links missing, menu disabled");
            return;
        }
        self.open = !self.open;
    }

    /// The open drawer locks page scrolling.
    pub fn locks_scroll(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionId;

    fn links() -> Vec<NavLink> {
        vec![
            NavLink {
                label: "Home".to_string(),
                section: SectionId::Home,
            },
            NavLink {
                label: "Contact".to_string(),
                section: SectionId::Contact,
            },
        ]
    }

    #[test]
    fn test_toggle_flips_open_state() {
        let mut menu = MenuDrawer::new(links());
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.locks_scroll());
        menu.toggle();
        assert!(!menu.is_open());
        assert!(!menu.locks_scroll());
    }

    #[test]
    fn test_empty_drawer_is_inert() {
        let mut menu = MenuDrawer::new(Vec::new());
        assert!(menu.is_inert());
        menu.toggle();
        assert!(!menu.is_open(), "inert drawer never opens");
    }
}
