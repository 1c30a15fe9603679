use super::{ScrollCommand, ScrollController, ScrollSurface, Section, SectionRegistry};

/// Scrolls to a measured section. Sections that have not been laid out yet
/// are ignored without logging, since navigation can legitimately race the
/// first layout pass.
pub fn dispatch<S: ScrollSurface>(
    registry: &SectionRegistry,
    controller: &ScrollController<S>,
    section: Section,
) -> Option<ScrollCommand> {
    let offset = registry.lookup(section)?;
    log::debug!("navigating to {section} at {offset}");
    Some(controller.scroll_to(offset, true))
}

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handles a menu item selection: navigates and closes the menu in the
    /// same gesture.
    pub fn select<F>(&mut self, section: Section, go_to: F) -> Option<ScrollCommand>
    where
        F: FnOnce(Section) -> Option<ScrollCommand>,
    {
        let command = go_to(section);
        self.close();
        command
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingSurface;
    use super::*;

    fn fixture() -> (SectionRegistry, ScrollController<RecordingSurface>, RecordingSurface) {
        let surface = RecordingSurface::mounted();
        let controller = ScrollController::new(surface.clone());
        let mut registry = SectionRegistry::new();
        registry.record(Section::Hero, 0.0);
        registry.record(Section::About, 850.0);
        (registry, controller, surface)
    }

    #[test]
    fn test_dispatch_recorded_section() {
        let (registry, controller, surface) = fixture();

        let command = dispatch(&registry, &controller, Section::About);
        let expected = ScrollCommand {
            offset: 850.0,
            animated: true,
        };
        assert_eq!(command, Some(expected));
        assert_eq!(surface.commands(), vec![expected]);
    }

    #[test]
    fn test_dispatch_unrecorded_section() {
        let (registry, controller, surface) = fixture();

        assert_eq!(dispatch(&registry, &controller, Section::Skills), None);
        assert_eq!(dispatch(&registry, &controller, Section::Skills), None);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_select_always_closes() {
        let (registry, controller, surface) = fixture();
        let go_to = |section| dispatch(&registry, &controller, section);

        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.select(Section::About, go_to).is_some());
        assert!(!menu.is_open());

        // unmeasured target still closes the menu
        menu.toggle();
        assert!(menu.select(Section::Contact, go_to).is_none());
        assert!(!menu.is_open());

        // selecting while already closed leaves it closed
        menu.select(Section::Hero, go_to);
        assert!(!menu.is_open());

        assert_eq!(surface.commands().len(), 2);
    }
}
