use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, InputEvent};
use yew::prelude::*;

use crate::config::{default_map_token, MapConfig};
use crate::error::MapError;
use crate::hooks::{use_toast, Notice};
use crate::models::Location;
use crate::services::mapbox::{self, MapHandle};
use crate::services::{MapPhase, MapSlot};

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    #[prop_or_default]
    pub on_location_add: Option<Callback<Location>>,
}

async fn initialize<F>(
    config: &MapConfig,
    token: &str,
    container: Option<HtmlElement>,
    on_location: F,
) -> Result<MapHandle, MapError>
where
    F: FnMut(Location) + 'static,
{
    let container = container.ok_or(MapError::MissingContainer)?;
    mapbox::load_library(config).await?;
    mapbox::create_map(token, &container, config, on_location)
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let config = use_memo(|_| MapConfig::default(), ());
    let token = use_state(default_map_token);
    let phase = use_state(|| MapPhase::AwaitingToken);
    let container = use_node_ref();
    let slot = use_mut_ref(MapSlot::<MapHandle>::default);
    let notify = use_toast();

    // The container is hidden until ready, so the map has to re-measure once shown.
    {
        let slot = slot.clone();
        use_effect_with_deps(
            move |phase: &MapPhase| {
                if *phase == MapPhase::Ready {
                    if let Some(map) = slot.borrow().get() {
                        map.resize();
                    }
                }
                || ()
            },
            *phase,
        );
    }

    {
        let slot = slot.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    slot.borrow_mut().release();
                }
            },
            (),
        );
    }

    let on_token_input = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                token.set(input.value());
            }
        })
    };

    let on_submit = {
        let config = config.clone();
        let token = token.clone();
        let phase = phase.clone();
        let container = container.clone();
        let slot = slot.clone();
        let notify = notify.clone();
        let on_location_add = props.on_location_add.clone();
        Callback::from(move |_: MouseEvent| {
            let accepted = match phase.submit_token(&token) {
                Ok((next, accepted)) => {
                    phase.set(next);
                    accepted
                }
                Err(MapError::EmptyToken) => {
                    log::warn!("map token rejected: empty");
                    notify.emit(Notice::error(
                        "Token Required",
                        "Please enter your Mapbox public token.",
                    ));
                    return;
                }
                Err(err) => {
                    log::debug!("token submission ignored: {}", err);
                    return;
                }
            };

            let on_location = {
                let notify = notify.clone();
                let on_location_add = on_location_add.clone();
                move |location: Location| {
                    notify.emit(Notice::info(
                        "Location added!",
                        "Click the marker to add trip details.",
                    ));
                    if let Some(on_location_add) = &on_location_add {
                        on_location_add.emit(location);
                    }
                }
            };

            let config = config.clone();
            let element = container.cast::<HtmlElement>();
            let phase = phase.clone();
            let slot = slot.clone();
            let notify = notify.clone();
            log::info!("loading map library");
            spawn_local(async move {
                let outcome = initialize(&config, &accepted, element, on_location).await;
                if !slot.borrow().is_mounted() {
                    log::debug!("map view unmounted during initialization");
                    return;
                }
                let next = MapPhase::Initializing.resolve(&outcome);
                match outcome {
                    Ok(map) => {
                        // Rejected maps are dropped here, which removes them.
                        if slot.borrow_mut().store(map).is_err() {
                            return;
                        }
                        log::info!("map ready");
                    }
                    Err(err) => {
                        log::error!("error initializing map: {}", err);
                        notify.emit(Notice::error(
                            "Map Error",
                            "Failed to load the map. Please check your Mapbox token.",
                        ));
                    }
                }
                phase.set(next);
            });
        })
    };

    let busy = phase.is_busy();
    let container_class = if phase.shows_token_form() {
        "h-96 w-full hidden"
    } else {
        "h-96 w-full"
    };

    html! {
        <div class="bg-card rounded-lg border border-border overflow-hidden">
            {
                if phase.shows_token_form() {
                    html! {
                        <div class="p-6 text-center">
                            <h3 class="text-lg font-semibold mb-4">{"Setup Mapbox"}</h3>
                            <p class="text-sm text-muted-foreground mb-4">
                                {"To display the interactive map, please enter your Mapbox public token."}
                                <br />
                                <a href={config.token_help_url} target="_blank" rel="noopener noreferrer" class="text-ocean-600 hover:underline">
                                    {"Get your token from mapbox.com"}
                                </a>
                            </p>
                            <div class="flex gap-2 max-w-md mx-auto">
                                <input
                                    type="text"
                                    placeholder={config.token_placeholder}
                                    value={(*token).clone()}
                                    oninput={on_token_input}
                                    class="flex-1 p-2 border rounded-md"
                                />
                                <button onclick={on_submit} disabled={busy} class="bg-ocean-600 hover:bg-ocean-700 text-white px-4 rounded-md disabled:opacity-50">
                                    { if busy { "Loading..." } else { "Load Map" } }
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="p-4 bg-gradient-to-r from-ocean-50 to-sunset-50">
                            <h3 class="text-lg font-semibold text-gray-800">{"Interactive Travel Map"}</h3>
                            <p class="text-sm text-gray-600">{"Click anywhere to add a visited location"}</p>
                        </div>
                    }
                }
            }
            <div ref={container} class={container_class}></div>
        </div>
    }
}
