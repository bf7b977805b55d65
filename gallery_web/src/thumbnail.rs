use gallery_core::{Tile, TileMedia};
use web_sys::HtmlMediaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThumbnailProps {
    pub tile: Tile,
}

#[function_component(Thumbnail)]
pub fn thumbnail(props: &ThumbnailProps) -> Html {
    let media = match &props.tile.media {
        TileMedia::Video { src } => html! { <ThumbnailVideo src={src.clone()} /> },
        TileMedia::Image { src, alt } => html! { <ThumbnailImage src={src.clone()} alt={alt.clone()} /> },
    };

    html! {
        <div class="thumbnail">
            <div class="thumbnail-content">
                { media }
            </div>
            <div class="thumbnail-caption">
                <div class="thumbnail-text">{ &props.tile.title }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThumbnailVideoProps {
    pub src: AttrValue,
}

#[function_component(ThumbnailVideo)]
pub fn thumbnail_video(props: &ThumbnailVideoProps) -> Html {
    let video_ref = use_node_ref();

    {
        // the `muted` attribute alone does not mute an element created from script
        let video_ref = video_ref.clone();
        use_effect_with(props.src.clone(), move |_| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                video.set_muted(true);
            }
            || ()
        });
    }

    html! {
        <video ref={video_ref} class="thumbnail-media thumbnail-video" width="240" autoplay=true loop=true muted=true playsinline=true>
            <source src={props.src.clone()} />
        </video>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThumbnailImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component(ThumbnailImage)]
pub fn thumbnail_image(props: &ThumbnailImageProps) -> Html {
    html! {
        <img
            class="thumbnail-media thumbnail-image"
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            decoding="async"
        />
    }
}
