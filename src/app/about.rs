use leptos::prelude::*;

use crate::content::PORTFOLIO;

use super::SectionTitle;

#[component]
pub fn About() -> impl IntoView {
    let data = &*PORTFOLIO;

    view! {
        <div class="px-5 py-20 animate-fade-in-slow">
            <SectionTitle text="About Me" />
            <div class="max-w-3xl mx-auto">
                <p class="text-lg text-secondary leading-relaxed mb-10">{data.bio.as_str()}</p>
                <div class="mb-10">
                    <h3 class="text-xl font-semibold mb-4">"Skills & Technologies"</h3>
                    <div class="flex flex-wrap gap-3">
                        {data
                            .all_skills()
                            .map(|skill| {
                                view! {
                                    <span class="px-4 py-2 rounded-full text-sm bg-surface border border-border">
                                        {skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                // inert, there is no CV behind it
                <button
                    type="button"
                    class="flex items-center gap-2 mx-auto px-8 py-4 rounded-full font-semibold bg-primary hover:opacity-90 transition-opacity duration-200"
                >
                    <span>"⬇"</span>
                    "Download CV"
                </button>
            </div>
        </div>
    }
}
