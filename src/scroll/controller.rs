/// A request to move the viewport to `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f64,
    pub animated: bool,
}

/// The scrollable element hosting the page content.
///
/// Implementations must silently drop commands while the element is not
/// mounted (server render, before hydration, after unmount).
pub trait ScrollSurface {
    fn scroll_to(&self, command: ScrollCommand);
}

/// Owns the viewport's scroll position and forwards programmatic scrolls to
/// the surface.
#[derive(Debug, Clone)]
pub struct ScrollController<S> {
    surface: S,
    current_offset: f64,
}

impl<S: ScrollSurface> ScrollController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current_offset: 0.0,
        }
    }

    pub fn scroll_to(&self, offset: f64, animated: bool) -> ScrollCommand {
        let command = ScrollCommand { offset, animated };
        self.surface.scroll_to(command);
        command
    }

    pub fn scroll_to_top(&self) -> ScrollCommand {
        self.scroll_to(0.0, true)
    }

    /// Called for every scroll event, whether user or programmatic.
    pub fn on_scroll(&mut self, offset: f64) {
        self.current_offset = offset;
    }

    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingSurface;
    use super::*;

    #[test]
    fn test_scroll_to_forwards_command() {
        let surface = RecordingSurface::mounted();
        let controller = ScrollController::new(surface.clone());

        controller.scroll_to(420.0, false);
        controller.scroll_to_top();

        assert_eq!(
            surface.commands(),
            vec![
                ScrollCommand {
                    offset: 420.0,
                    animated: false
                },
                ScrollCommand {
                    offset: 0.0,
                    animated: true
                },
            ]
        );
    }

    #[test]
    fn test_unmounted_surface_drops_command() {
        let surface = RecordingSurface::unmounted();
        let controller = ScrollController::new(surface.clone());

        controller.scroll_to(100.0, true);
        assert!(surface.commands().is_empty());
        assert_eq!(surface.dropped(), 1);
    }

    #[test]
    fn test_tracks_current_offset() {
        let mut controller = ScrollController::new(RecordingSurface::mounted());
        assert_eq!(controller.current_offset(), 0.0);

        controller.on_scroll(12.5);
        controller.on_scroll(640.0);
        assert_eq!(controller.current_offset(), 640.0);
    }
}
