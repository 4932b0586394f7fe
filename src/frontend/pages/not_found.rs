//! 404 page

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-6">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-tuner bg-gradient-to-br from-orange-400 via-orange-500 to-orange-600 bg-clip-text text-transparent mb-4">
                    "404"
                </h1>
                <p class="text-2xl font-semibold text-blue-800 mb-2">"Page not found"</p>
                <p class="text-slate-500 mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a href="/" class="inline-flex px-6 py-3 rounded-full bg-blue-600 text-white font-semibold">"Return Home"</a>
            </div>
        </div>
    }
}
