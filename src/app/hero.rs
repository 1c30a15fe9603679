use leptos::prelude::*;

use crate::{content::PORTFOLIO, scroll::Section};

use super::page::use_page;

#[component]
pub fn Hero() -> impl IntoView {
    let page = use_page();
    let data = &*PORTFOLIO;

    view! {
        <div class="relative flex items-center justify-center min-h-[90vh] px-5 pt-28 pb-16 overflow-hidden bg-gradient-to-br from-background via-surface to-background">
            <div class="absolute -top-24 -left-24 w-72 h-72 rounded-full bg-primary/40 blur-3xl animate-glow"></div>
            <div class="absolute -bottom-32 -right-16 w-96 h-96 rounded-full bg-accent/30 blur-3xl animate-glow"></div>
            <div class="relative z-10 flex flex-col items-center max-w-3xl text-center animate-hero-enter">
                <div class="relative mb-8 animate-pop-in">
                    <div class="absolute inset-0 rounded-full bg-primary/40 blur-xl"></div>
                    <img
                        src=data.avatar_url.as_str()
                        alt=data.name.as_str()
                        class="relative w-40 h-40 rounded-full border-4 border-primary object-cover"
                    />
                </div>
                <p class="text-lg text-secondary mb-2">"Hi, I am"</p>
                <h1 class="text-5xl md:text-6xl font-extrabold tracking-tight mb-4">
                    {data.name.as_str()}
                </h1>
                <h2 class="text-2xl md:text-3xl font-semibold text-primary mb-6">
                    {data.title.as_str()}
                </h2>
                <p class="text-lg text-secondary leading-relaxed mb-10">
                    {data.tagline.as_str()}
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <button
                        class="flex items-center gap-2 px-8 py-4 rounded-full font-semibold bg-gradient-to-r from-primary to-accent hover:opacity-90 transition-opacity duration-200"
                        on:click=move |_| {
                            page.go_to(Section::Contact);
                        }
                    >
                        "Hire Me"
                        <span>"→"</span>
                    </button>
                    <button
                        class="flex items-center gap-2 px-8 py-4 rounded-full font-semibold text-primary border-2 border-primary hover:bg-primary/10 transition-colors duration-200"
                        on:click=move |_| {
                            page.go_to(Section::Projects);
                        }
                    >
                        "View Projects"
                        <span>"👁"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
