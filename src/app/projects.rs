use leptos::prelude::*;

use crate::{
    content::{Project, PORTFOLIO},
    scroll::Section,
};

use super::{page::use_page, SectionTitle};

#[component]
pub fn Projects() -> impl IntoView {
    let page = use_page();

    view! {
        <div class="px-5 py-20 bg-surface/40">
            <SectionTitle text="Featured Projects" />
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 max-w-6xl mx-auto">
                {PORTFOLIO
                    .projects
                    .iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
            <div class="mt-12 text-center">
                <p class="text-secondary mb-4">"Have something in mind?"</p>
                <button
                    class="px-8 py-4 rounded-full font-semibold text-primary border-2 border-primary hover:bg-primary/10 transition-colors duration-200"
                    on:click=move |_| {
                        page.go_to(Section::Contact);
                    }
                >
                    "Let's talk"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="flex flex-col p-6 rounded-2xl bg-surface border border-border hover:border-primary transition-colors duration-200">
            <h3 class="text-xl font-bold mb-3">{project.title.as_str()}</h3>
            <p class="flex-grow text-secondary leading-relaxed mb-4">
                {project.description.as_str()}
            </p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="px-3 py-1 rounded-full text-xs text-accent bg-accent/10">
                                {tag.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            {project
                .link
                .as_deref()
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="font-semibold text-primary hover:underline"
                        >
                            "View code ↗"
                        </a>
                    }
                })}
        </article>
    }
}
