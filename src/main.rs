use yew::prelude::*;

mod components;
mod config;
mod error;
mod hooks;
mod models;
mod services;
mod state;
mod utils;

use components::icons::icon_plus;
use components::{Header, MapView, QuickStats, Toaster, TripCard, TripModal, TripStats};
use hooks::{ToastContext, ToastState};
use models::{mock, Location};
use state::{JournalAction, JournalState};

#[function_component(JournalPage)]
fn journal_page() -> Html {
    let journal = use_reducer(|| JournalState::new(mock::load_trips()));
    let stats = use_memo(|trips| TripStats::from_trips(trips), journal.trips.clone());

    let on_view_details = {
        let journal = journal.dispatcher();
        Callback::from(move |id: String| journal.dispatch(JournalAction::ViewDetails(id)))
    };
    let on_close = {
        let journal = journal.dispatcher();
        Callback::from(move |_: ()| journal.dispatch(JournalAction::CloseModal))
    };
    // Picking a point on the map does not create a trip yet.
    let on_location_add = Callback::from(|location: Location| {
        log::info!(
            "new location added: {} ({}, {})",
            location.name,
            location.lat,
            location.lng
        );
    });
    let on_new_trip = Callback::from(|_: MouseEvent| log::info!("new trip clicked"));

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-emerald-50">
            <Header theme={config::header_theme()} />

            <main class="container mx-auto px-4 py-8 space-y-8">
                <section class="animate-fade-in">
                    <div class="flex justify-between items-center mb-6">
                        <div>
                            <h2 class="text-2xl font-bold text-gray-800">{"Your Travel Map"}</h2>
                            <p class="text-muted-foreground">{"Click anywhere to add a new destination"}</p>
                        </div>
                    </div>
                    <MapView on_location_add={Some(on_location_add)} />
                </section>

                <section class="animate-fade-in" style="animation-delay: 200ms">
                    <div class="flex justify-between items-center mb-6">
                        <div>
                            <h2 class="text-2xl font-bold text-gray-800">{"Your Journeys"}</h2>
                            <p class="text-muted-foreground">{"Track your adventures and memories"}</p>
                        </div>
                        <button onclick={on_new_trip} class="inline-flex items-center bg-emerald-400 hover:bg-emerald-500 text-white px-4 py-2 rounded-md">
                            { icon_plus(16, "mr-2") }
                            {"New Trip"}
                        </button>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        { for journal.trips.iter().enumerate().map(|(index, trip)| html! {
                            <div key={trip.id.clone()} class="animate-scale-in" style={format!("animation-delay: {}ms", 300 + index * 100)}>
                                <TripCard trip={trip.clone()} on_view_details={on_view_details.clone()} />
                            </div>
                        }) }
                    </div>
                </section>

                <section class="animate-fade-in" style="animation-delay: 600ms">
                    <QuickStats stats={(*stats).clone()} />
                </section>
            </main>

            <TripModal
                trip={journal.selected_trip().cloned()}
                is_open={journal.modal_open}
                on_close={on_close}
            />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let toasts = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toasts}>
            <JournalPage />
            <Toaster />
        </ContextProvider<ToastContext>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("starting travelogue");
    yew::Renderer::<App>::new().render();
}
