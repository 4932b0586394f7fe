use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::api::get_page;
use crate::frontend::components::{CarouselFeatureBlock, ErrorAlert, Footer, Nav};
use crate::models::{Page, PageBlock};

/// Page assembled from the content document named by the `slug` route
/// parameter; `/` loads the default page.
#[component]
pub fn ContentPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let page = Resource::new(slug, get_page);

    view! {
        <div class="min-h-screen flex flex-col">
            <Suspense fallback=|| view! { <Nav/> }>
                {move || Suspend::new(async move {
                    match page.await {
                        Ok(page) => view! {
                            <Title text=page.title.clone().unwrap_or_else(|| "blockpress".into())/>
                            <Nav title=page.title.clone()/>
                            <PageBlocks page=page/>
                        }
                        .into_any(),
                        Err(e) => view! {
                            <Nav/>
                            <div class="max-w-3xl mx-auto px-6">
                                <ErrorAlert message=e.to_string()/>
                            </div>
                        }
                        .into_any(),
                    }
                })}
            </Suspense>
            <div class="flex-grow"></div>
            <Footer/>
        </div>
    }
}

/// Renders each block of `page` in order; unsupported blocks render nothing.
#[component]
pub fn PageBlocks(page: Page) -> impl IntoView {
    page.blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| match block {
            PageBlock::CarouselFeature(data) => {
                view! { <CarouselFeatureBlock data=data index=index/> }.into_any()
            }
            PageBlock::Unsupported => ().into_any(),
        })
        .collect_view()
}
