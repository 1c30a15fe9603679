use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::use_resize_observer;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::scroll::{
    GateState, GateTransition, PageSession, ScrollCommand, ScrollSurface, Section,
    FADE_DURATION_MS,
};

use super::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navigation::Navigation,
    projects::Projects, skills::Skills,
};

/// The scrollable element holding every section.
#[derive(Clone, Copy)]
pub struct Viewport(NodeRef<html::Div>);

impl ScrollSurface for Viewport {
    fn scroll_to(&self, command: ScrollCommand) {
        let el = if let Some(el) = self.0.get_untracked() {
            el
        } else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(command.offset);
        options.set_behavior(if command.animated {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        el.scroll_to_with_scroll_to_options(&options);
    }
}

/// Handle to the page session, shared with the sections through context.
/// Disposed together with the page's reactive owner.
#[derive(Clone, Copy)]
pub struct PageHandle {
    session: StoredValue<PageSession<Viewport>>,
    gate: RwSignal<GateState>,
    viewport: NodeRef<html::Div>,
    content: NodeRef<html::Div>,
}

pub fn use_page() -> PageHandle {
    expect_context::<PageHandle>()
}

impl PageHandle {
    fn new() -> Self {
        let viewport = NodeRef::new();
        Self {
            session: StoredValue::new(PageSession::new(Viewport(viewport))),
            gate: RwSignal::new(GateState::Hidden),
            viewport,
            content: NodeRef::new(),
        }
    }

    pub fn go_to(self, section: Section) -> Option<ScrollCommand> {
        self.session.with_value(|s| s.go_to(section))
    }

    pub fn scroll_to_top(self) {
        self.session.with_value(|s| s.scroll_to_top());
    }

    pub fn record_layout(self, section: Section, offset: f64) {
        self.session.update_value(|s| s.record_layout(section, offset));
    }

    pub fn gate_state(self) -> ReadSignal<GateState> {
        self.gate.read_only()
    }

    pub fn fade_complete(self) {
        if self.session.try_update_value(|s| s.fade_complete()) == Some(true) {
            self.gate.set(GateState::Hidden);
        }
    }

    fn sync_scroll(self) {
        let el = if let Some(el) = self.viewport.get_untracked() {
            el
        } else {
            return;
        };
        let offset = el.scroll_top() as f64;
        let transition = self
            .session
            .try_update_value(|s| s.on_scroll(offset))
            .flatten();
        match transition {
            Some(GateTransition::FadeIn) => self.gate.set(GateState::Visible),
            Some(GateTransition::FadeOut) => self.gate.set(GateState::Fading),
            None => {}
        }
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let page = PageHandle::new();
    provide_context(page);

    view! {
        <Title text="Portfolio" />
        <Navigation />
        <div
            node_ref=page.viewport
            class="relative h-screen overflow-y-auto no-scrollbar"
            on:scroll=move |_| page.sync_scroll()
        >
            <div node_ref=page.content>
                <SectionAnchor section=Section::Hero>
                    <Hero />
                </SectionAnchor>
                <SectionAnchor section=Section::About>
                    <About />
                </SectionAnchor>
                <SectionAnchor section=Section::Projects>
                    <Projects />
                </SectionAnchor>
                <SectionAnchor section=Section::Skills>
                    <Skills />
                </SectionAnchor>
                <SectionAnchor section=Section::Contact>
                    <Contact />
                </SectionAnchor>
                <Footer />
            </div>
        </div>
        <ScrollToTop />
    }
}

/// Wraps a section and reports its offset within the viewport whenever the
/// content column is laid out again.
#[component]
fn SectionAnchor(section: Section, children: Children) -> impl IntoView {
    let page = use_page();
    let anchor = NodeRef::<html::Section>::new();

    let measure = move || {
        if let Some(el) = anchor.get_untracked() {
            page.record_layout(section, el.offset_top() as f64);
        }
    };

    Effect::new(move |_| {
        if anchor.get().is_some() {
            measure();
        }
    });
    // the observer also fires once when it starts observing
    use_resize_observer(page.content, move |_, _| measure());

    view! {
        <section id=section.name() node_ref=anchor>
            {children()}
        </section>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let page = use_page();
    let state = page.gate_state();

    view! {
        <Show when=move || state.get().is_interactive()>
            <button
                class=move || {
                    let fade = if state.get() == GateState::Visible {
                        "animate-fade-in"
                    } else {
                        "animate-fade-out"
                    };
                    format!(
                        "fixed bottom-8 right-5 z-50 w-14 h-14 rounded-full bg-primary text-2xl shadow-lg shadow-primary/40 {fade}",
                    )
                }
                style:animation-duration=format!("{FADE_DURATION_MS}ms")
                aria-label="Scroll to top"
                on:click=move |_| page.scroll_to_top()
                on:animationend=move |_| page.fade_complete()
            >
                "↑"
            </button>
        </Show>
    }
}
