use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 bg-slate-50">
            <div class="max-w-7xl mx-auto px-6 py-10 text-center">
                <p class="text-xs text-slate-500">"Content served from the blockpress content directory."</p>
            </div>
        </footer>
    }
}
