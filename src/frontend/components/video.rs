use leptos::prelude::*;

use crate::carousel::VideoMedia;

#[component]
pub fn FeatureVideo(media: VideoMedia) -> impl IntoView {
    view! {
        <video
            autoplay=true
            muted=true
            prop:muted=true
            loop=true
            playsinline=true
            class="w-full h-auto mt-6 lg:mt-0"
            poster=media.poster
        >
            <source src=media.webm type="video/webm"/>
            <source src=media.mp4 type="video/mp4"/>
            "Your browser does not support the video tag."
        </video>
    }
}
