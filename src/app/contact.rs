use leptos::{either::Either, prelude::*};

use crate::{
    contact::{ContactError, ContactForm},
    content::PORTFOLIO,
};

use super::SectionTitle;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-surface border border-border placeholder-muted focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
pub fn Contact() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (status, set_status) = signal(None::<Result<&'static str, ContactError>>);

    view! {
        <div class="px-5 py-20 bg-surface/40">
            <SectionTitle text="Get In Touch" />
            <div class="grid gap-12 md:grid-cols-2 max-w-5xl mx-auto">
                <form
                    class="flex flex-col gap-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        set_status(set_form.try_update(ContactForm::submit));
                    }
                >
                    <input
                        type="text"
                        placeholder="Your Name"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Your Email"
                        autocapitalize="none"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Your Message"
                        rows="6"
                        class=format!("{INPUT_CLASS} min-h-[120px]")
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| set_form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        class="flex items-center justify-center gap-2 px-8 py-4 rounded-xl font-semibold bg-primary hover:opacity-90 transition-opacity duration-200"
                    >
                        "Send Message"
                        <span>"➤"</span>
                    </button>
                    {move || {
                        status
                            .get()
                            .map(|res| match res {
                                Ok(notice) => {
                                    Either::Left(
                                        view! { <p class="text-green-400 font-medium">{notice}</p> },
                                    )
                                }
                                Err(e) => {
                                    Either::Right(
                                        view! {
                                            <p class="text-red-400 font-medium">{e.to_string()}</p>
                                        },
                                    )
                                }
                            })
                    }}
                </form>
                <SocialLinks />
            </div>
        </div>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    let social = &PORTFOLIO.social;
    let links = [
        ("GitHub", "devicon-github-original", social.github.as_str()),
        ("LinkedIn", "devicon-linkedin-plain", social.linkedin.as_str()),
        ("Twitter", "devicon-twitter-original", social.twitter.as_str()),
    ];
    let link_class = "flex items-center justify-center w-14 h-14 rounded-full text-2xl bg-surface border border-border hover:border-primary hover:text-primary transition-colors duration-200";

    view! {
        <div class="flex flex-col items-center md:items-start gap-6">
            <h3 class="text-xl font-semibold">"Connect With Me"</h3>
            <div class="flex gap-4">
                {links
                    .into_iter()
                    .map(|(label, icon, href)| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=label
                                class=link_class
                            >
                                <i class=icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
                <a href=PORTFOLIO.email_href() aria-label="Email" class=link_class>
                    "✉"
                </a>
            </div>
            <p class="text-secondary">
                "Or write to "
                <a href=PORTFOLIO.email_href() class="text-primary hover:underline">
                    {PORTFOLIO.social.email.as_str()}
                </a>
            </p>
        </div>
    }
}
