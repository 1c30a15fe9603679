use leptos::prelude::*;

use crate::content::PORTFOLIO;

/// Stamped by `build.rs`.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="px-5 py-8 bg-surface border-t border-border">
            <div class="flex items-center justify-center gap-3 max-w-6xl mx-auto">
                <span class="w-2 h-2 rounded-full bg-primary"></span>
                <div class="flex flex-col gap-1">
                    <span class="font-semibold">{PORTFOLIO.name.as_str()}</span>
                    <span class="text-sm text-secondary">
                        {format!("© {BUILD_YEAR} All rights reserved")}
                    </span>
                </div>
            </div>
        </footer>
    }
}
