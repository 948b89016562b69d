use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactForm;
use crate::contact::DEFAULT_RECIPIENT;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="max-w-6xl mx-auto page-content">
            <section class="flex flex-col items-center text-center gap-4 my-12">
                <h1 class="text-4xl font-bold">"Matheus Castro"</h1>
                <p class="text-lg text-muted">"Full-stack developer based in Rio de Janeiro"</p>
            </section>
            <section id="contact" class="my-12">
                <h2 class="text-3xl font-bold text-center mb-4">"Get in Touch"</h2>
                <p class="max-w-2xl mx-auto text-center mb-12">
                    "I'm always interested in hearing about new projects and opportunities. Whether you have a question or just want to say hi, feel free to drop me a message!"
                </p>
                <div class="grid gap-16 lg:grid-cols-2">
                    <ContactDetails />
                    <ContactForm />
                </div>
            </section>
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="flex items-center space-x-4 p-4 rounded-3xl shadow-lg w-full max-w-md">
                <span class="text-lg font-medium">{DEFAULT_RECIPIENT}</span>
            </div>
            <div class="flex items-center space-x-4 p-4 rounded-3xl shadow-lg w-full max-w-md">
                <span class="text-lg font-medium">"Rio de Janeiro, RJ"</span>
            </div>
            <div class="flex space-x-4 mt-6">
                <a
                    href="https://github.com/Couks"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub Profile"
                >
                    "GitHub"
                </a>
                <a
                    href="https://www.linkedin.com/in/matheus-castro-araujo/"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn Profile"
                >
                    "LinkedIn"
                </a>
            </div>
        </div>
    }
}
