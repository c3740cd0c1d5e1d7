use yew::prelude::*;

use super::icons::{icon_calendar, icon_camera, icon_dollar, icon_map_pin};
use crate::models::Trip;
use crate::utils::budget::progress_width;
use crate::utils::format::format_spent_of_budget;

#[derive(Properties, PartialEq)]
pub struct TripCardProps {
    pub trip: Trip,
    pub on_view_details: Callback<String>,
}

#[function_component(TripCard)]
pub fn trip_card(props: &TripCardProps) -> Html {
    let trip = &props.trip;
    let percentage = trip.budget_percentage();
    let level = trip.budget_level();

    let on_card_click = {
        let on_view_details = props.on_view_details.clone();
        let id = trip.id.clone();
        Callback::from(move |_: MouseEvent| on_view_details.emit(id.clone()))
    };
    // The button sits inside the clickable card; keep the click from firing twice.
    let on_button_click = {
        let on_view_details = props.on_view_details.clone();
        let id = trip.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_view_details.emit(id.clone());
        })
    };

    html! {
        <div class="card-hover group cursor-pointer rounded-lg border border-slate-200 bg-card" onclick={on_card_click}>
            <div class="p-6 pb-3">
                <div class="flex justify-between items-start">
                    <div>
                        <h3 class="text-xl font-semibold group-hover:text-teal-600 transition-colors">{ trip.destination.clone() }</h3>
                        <p class="text-sm text-muted-foreground flex items-center gap-1 mt-1">
                            { icon_map_pin(12, "") }
                            { trip.country.clone() }
                        </p>
                    </div>
                    <span class={classes!("rounded-full", "px-2.5", "py-0.5", "text-xs", "font-semibold", trip.status.badge_class())}>
                        { trip.status.label() }
                    </span>
                </div>
            </div>

            <div class="p-6 pt-0 space-y-4">
                <div class="flex items-center gap-4 text-sm text-muted-foreground">
                    <div class="flex items-center gap-1">
                        { icon_calendar(16, "") }
                        <span>{ trip.date_range() }</span>
                    </div>
                </div>

                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-1 text-sm">
                        { icon_dollar(16, "") }
                        <span class={level.text_class()}>{ format_spent_of_budget(trip.spent, trip.budget) }</span>
                    </div>
                    <div class="flex items-center gap-1 text-sm text-muted-foreground">
                        { icon_camera(16, "") }
                        <span>{ trip.photo_count_label() }</span>
                    </div>
                </div>

                <div class="w-full bg-gray-200 rounded-full h-2">
                    <div
                        class={classes!("h-2", "rounded-full", "transition-all", "duration-300", level.bar_class())}
                        style={format!("width: {}%", progress_width(percentage))}
                    ></div>
                </div>

                <p class="text-sm text-muted-foreground line-clamp-2">{ trip.description.clone() }</p>

                <button
                    class="w-full rounded-md border border-input px-4 py-2 text-sm group-hover:bg-ocean-50 group-hover:border-ocean-300"
                    onclick={on_button_click}
                >
                    {"View Details"}
                </button>
            </div>
        </div>
    }
}
