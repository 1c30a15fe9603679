use leptos::prelude::*;

use crate::{
    content::PORTFOLIO,
    scroll::{NavMenu, Section},
};

use super::page::use_page;

#[component]
pub fn Navigation() -> impl IntoView {
    let page = use_page();
    let (menu, set_menu) = signal(NavMenu::default());

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-background/90 backdrop-blur border-b border-border">
            <nav class="flex items-center justify-between px-5 py-4">
                <button
                    class="text-2xl font-bold text-primary"
                    on:click=move |_| {
                        page.go_to(Section::Hero);
                    }
                >
                    {PORTFOLIO.initials()}
                </button>
                <div class="hidden md:flex gap-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="font-medium hover:text-primary transition-colors duration-200"
                                    on:click=move |_| {
                                        page.go_to(section);
                                    }
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden p-2 text-2xl leading-none"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu.update(NavMenu::toggle)
                >
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-surface border-t border-border">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="block w-full text-left px-5 py-4 text-lg font-medium border-b border-border"
                                    on:click=move |_| {
                                        set_menu
                                            .update(|m| {
                                                m.select(section, |s| page.go_to(s));
                                            })
                                    }
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
