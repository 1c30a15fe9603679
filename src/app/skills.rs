use leptos::prelude::*;

use crate::content::PORTFOLIO;

use super::SectionTitle;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="px-5 py-20 animate-fade-in-delayed">
            <SectionTitle text="Skills & Expertise" />
            <div class="grid gap-6 md:grid-cols-3 max-w-6xl mx-auto">
                {PORTFOLIO
                    .skill_categories()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div class="p-6 rounded-2xl bg-surface border border-border">
                                <div class="flex items-center justify-center w-16 h-16 mb-4 rounded-xl text-2xl text-primary bg-primary/15">
                                    {category.icon}
                                </div>
                                <h3 class="text-xl font-bold mb-4">{category.title}</h3>
                                <ul class="space-y-3">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <li class="flex items-center gap-3 text-secondary">
                                                    <span class="w-2 h-2 rounded-full bg-primary"></span>
                                                    {skill.as_str()}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
