mod about;
mod contact;
mod footer;
mod hero;
mod navigation;
mod page;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PORTFOLIO;
use page::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=PORTFOLIO.tagline.as_str() />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-text">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = PORTFOLIO.name.as_str();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Oops!" />
        <div class="flex flex-col items-center justify-center min-h-screen p-5">
            <h1 class="text-xl font-bold mb-4">"This page does not exist."</h1>
            <A href="/" attr:class="mt-4 py-4 font-semibold text-primary hover:underline">
                "Go to home screen"
            </A>
        </div>
    }
}

/// Centered section heading with the accent divider underneath.
#[component]
fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl font-bold text-center mb-4">{text}</h2>
        <div class="w-16 h-1 mx-auto mb-12 rounded-full bg-gradient-to-r from-primary to-accent"></div>
    }
}
