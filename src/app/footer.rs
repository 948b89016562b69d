use leptos::prelude::*;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-4">
            <div class="flex justify-center items-center gap-4">
                <p class="text-sm">{format!("© {BUILD_YEAR} Matheus Castro.")}</p>
            </div>
        </footer>
    }
}
