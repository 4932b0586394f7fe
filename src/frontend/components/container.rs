use leptos::prelude::*;

#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-6 sm:px-8">
            {children()}
        </div>
    }
}

/// Soft gradient glow drawn behind the bottom edge of a section.
#[component]
pub fn GradGlow() -> impl IntoView {
    view! {
        <div
            aria-hidden="true"
            class="absolute w-full h-64 bottom-0 left-0 -z-10 pointer-events-none bg-[radial-gradient(ellipse_at_bottom,_rgba(251,146,60,0.25),_transparent_70%)]"
        ></div>
    }
}
