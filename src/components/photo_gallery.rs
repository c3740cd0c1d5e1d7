use yew::prelude::*;

use super::icons::{icon_camera, icon_plus};
use crate::models::Photo;

#[derive(Properties, PartialEq)]
pub struct PhotoGalleryProps {
    pub photos: Vec<Photo>,
    pub on_add_photo: Callback<()>,
}

#[function_component(PhotoGallery)]
pub fn photo_gallery(props: &PhotoGalleryProps) -> Html {
    let on_add = {
        let on_add_photo = props.on_add_photo.clone();
        Callback::from(move |_: MouseEvent| on_add_photo.emit(()))
    };

    if props.photos.is_empty() {
        return html! {
            <div class="bg-card rounded-lg border border-border">
                <div class="p-6">
                    <h3 class="flex items-center gap-2 text-lg font-semibold">
                        { icon_camera(20, "") }
                        {"Memory Wall"}
                    </h3>
                </div>
                <div class="text-center py-12 px-6">
                    <div class="flex justify-center mb-4">{ icon_camera(64, "text-gray-300") }</div>
                    <p class="text-gray-500 mb-4">{"No photos yet"}</p>
                    <button onclick={on_add} class="inline-flex items-center bg-sunset-600 hover:bg-sunset-700 text-white px-4 py-2 rounded-md">
                        { icon_plus(16, "mr-2") }
                        {"Add First Photo"}
                    </button>
                </div>
            </div>
        };
    }

    html! {
        <div class="bg-card rounded-lg border border-border">
            <div class="p-6 flex flex-row items-center justify-between">
                <h3 class="flex items-center gap-2 text-lg font-semibold">
                    { icon_camera(20, "") }
                    { format!("Memory Wall ({} photos)", props.photos.len()) }
                </h3>
                <button onclick={on_add} class="inline-flex items-center bg-sunset-600 hover:bg-sunset-700 text-white px-3 py-1.5 text-sm rounded-md">
                    { icon_plus(16, "mr-2") }
                    {"Add Photo"}
                </button>
            </div>
            <div class="p-6 pt-0">
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                    { for props.photos.iter().map(|photo| html! {
                        <div key={photo.id.clone()} class="group relative aspect-square overflow-hidden rounded-lg bg-gray-100 cursor-pointer">
                            <img src={photo.url.clone()} alt={photo.caption.clone()} class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-110" />
                            <div class="absolute inset-0 bg-black/60 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end">
                                <div class="p-3 text-white">
                                    <p class="text-sm font-medium line-clamp-2">{ photo.caption.clone() }</p>
                                    {
                                        if photo.preview_tags().is_empty() {
                                            html! {}
                                        } else {
                                            html! {
                                                <div class="flex flex-wrap gap-1 mt-1">
                                                    { for photo.preview_tags().iter().map(|tag| html! {
                                                        <span class="text-xs bg-white/20 px-1 rounded">{ format!("#{}", tag) }</span>
                                                    }) }
                                                </div>
                                            }
                                        }
                                    }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use tokio::test;
    use yew::ServerRenderer;

    use super::*;

    const TAG_CHIP: &str = r#"class="text-xs bg-white/20 px-1 rounded""#;

    fn photo(id: &str, tags: &[&str]) -> Photo {
        Photo {
            id: id.to_string(),
            url: format!("https://example.com/{}.jpg", id),
            caption: format!("Caption {}", id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    async fn render(photos: Vec<Photo>) -> String {
        ServerRenderer::<PhotoGallery>::with_props(move || PhotoGalleryProps {
            photos,
            on_add_photo: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[test]
    async fn empty_gallery_offers_first_photo() {
        let html = render(vec![]).await;
        assert!(html.contains("No photos yet"));
        assert!(html.contains("Add First Photo"));
        assert!(!html.contains("<img"));
    }

    #[test]
    async fn only_two_tags_are_shown_per_photo() {
        let html = render(vec![photo("1", &["city", "night", "food", "rain"])]).await;
        assert_eq!(html.matches(TAG_CHIP).count(), 2);
        assert!(html.contains("#city"));
        assert!(html.contains("#night"));
        assert!(!html.contains("#food"));
        assert!(html.contains("Memory Wall (1 photos)"));
    }

    #[test]
    async fn untagged_photo_renders_no_chips() {
        let html = render(vec![photo("1", &[]), photo("2", &["sea"])]).await;
        assert_eq!(html.matches(TAG_CHIP).count(), 1);
        assert_eq!(html.matches("<img").count(), 2);
    }
}
