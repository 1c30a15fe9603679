//! Section-scroll coordination for the portfolio page.
//!
//! Everything here is platform independent: the browser binding lives in
//! `app::page`, which implements [`ScrollSurface`] for the viewport element
//! and owns one [`PageSession`] per mounted home page.

mod controller;
mod gate;
mod navigator;
mod registry;
mod section;

pub use controller::{ScrollCommand, ScrollController, ScrollSurface};
pub use gate::{
    GateState, GateTransition, VisibilityGate, FADE_DURATION_MS, SCROLL_TOP_THRESHOLD,
};
pub use navigator::{dispatch, NavMenu};
pub use registry::SectionRegistry;
pub use section::{Section, SectionError};

/// Per-page scroll state, created when the page mounts and dropped with it.
#[derive(Debug, Clone)]
pub struct PageSession<S> {
    registry: SectionRegistry,
    controller: ScrollController<S>,
    gate: VisibilityGate,
}

impl<S: ScrollSurface> PageSession<S> {
    pub fn new(surface: S) -> Self {
        Self {
            registry: SectionRegistry::new(),
            controller: ScrollController::new(surface),
            gate: VisibilityGate::default(),
        }
    }

    /// Layout callback from a section anchor.
    pub fn record_layout(&mut self, section: Section, offset: f64) {
        self.registry.record(section, offset);
    }

    /// Scroll event from the viewport.
    pub fn on_scroll(&mut self, offset: f64) -> Option<GateTransition> {
        self.controller.on_scroll(offset);
        self.gate.observe(offset)
    }

    pub fn go_to(&self, section: Section) -> Option<ScrollCommand> {
        dispatch(&self.registry, &self.controller, section)
    }

    /// Like [`PageSession::go_to`], for names coming from outside the type
    /// system. Unknown names are a no-op.
    pub fn go_to_named(&self, name: &str) -> Option<ScrollCommand> {
        let section = name.parse::<Section>().ok()?;
        self.go_to(section)
    }

    pub fn scroll_to_top(&self) -> ScrollCommand {
        self.controller.scroll_to_top()
    }

    /// Fade-out animation finished; returns whether the button is now hidden.
    pub fn fade_complete(&mut self) -> bool {
        self.gate.fade_complete()
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn current_offset(&self) -> f64 {
        self.controller.current_offset()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::{ScrollCommand, ScrollSurface};

    /// Surface that records every command it would have performed.
    #[derive(Debug, Clone)]
    pub struct RecordingSurface {
        mounted: bool,
        commands: Rc<RefCell<Vec<ScrollCommand>>>,
        dropped: Rc<Cell<usize>>,
    }

    impl RecordingSurface {
        pub fn mounted() -> Self {
            Self {
                mounted: true,
                commands: Rc::default(),
                dropped: Rc::default(),
            }
        }

        pub fn unmounted() -> Self {
            Self {
                mounted: false,
                ..Self::mounted()
            }
        }

        pub fn commands(&self) -> Vec<ScrollCommand> {
            self.commands.borrow().clone()
        }

        pub fn dropped(&self) -> usize {
            self.dropped.get()
        }
    }

    impl ScrollSurface for RecordingSurface {
        fn scroll_to(&self, command: ScrollCommand) {
            if self.mounted {
                self.commands.borrow_mut().push(command);
            } else {
                self.dropped.set(self.dropped.get() + 1);
            }
        }
    }
}
