use yew::prelude::*;

use super::budget_chart::BudgetChart;
use super::icons::{icon_calendar, icon_camera, icon_close, icon_dollar, icon_map_pin};
use super::photo_gallery::PhotoGallery;
use crate::models::Trip;
use crate::utils::format::{format_percentage, format_spent_of_budget};

#[derive(Properties, PartialEq)]
pub struct TripModalProps {
    pub trip: Option<Trip>,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn summary_tile(gradient: &'static str, accent: &'static str, icon: Html, title: &'static str, body: String) -> Html {
    html! {
        <div class={classes!("bg-gradient-to-r", gradient, "p-4", "rounded-lg")}>
            <div class={classes!("flex", "items-center", "gap-2", "mb-2", accent)}>
                { icon }
                <span class="font-medium">{ title }</span>
            </div>
            <p class="text-sm">{ body }</p>
        </div>
    }
}

#[function_component(TripModal)]
pub fn trip_modal(props: &TripModalProps) -> Html {
    let dialog_ref = use_node_ref();

    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    if let Some(dialog) = dialog_ref.cast::<web_sys::HtmlElement>() {
                        let _ = dialog.focus();
                    }
                }
                || ()
            },
            props.is_open,
        );
    }

    let Some(trip) = props.trip.as_ref() else {
        return html! {};
    };
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_add_photo = Callback::from(|_: ()| log::info!("add photo clicked"));

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/80" onclick={close.clone()}>
            <div
                ref={dialog_ref}
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                class="relative w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-lg bg-background p-6 shadow-lg outline-none"
                onclick={keep_open}
                onkeydown={on_keydown}
            >
                <button class="absolute right-4 top-4 rounded-sm opacity-70 hover:opacity-100" aria-label="Close" onclick={close}>
                    { icon_close(16, "") }
                </button>

                <div class="flex justify-between items-start pr-8">
                    <div>
                        <h2 class="text-2xl font-semibold">{ trip.destination.clone() }</h2>
                        <p class="text-muted-foreground flex items-center gap-1 mt-1">
                            { icon_map_pin(16, "") }
                            { trip.country.clone() }
                        </p>
                    </div>
                    <span class={classes!("rounded-full", "px-2.5", "py-0.5", "text-xs", "font-semibold", trip.status.badge_class())}>
                        { trip.status.label() }
                    </span>
                </div>

                <div class="space-y-6 mt-6">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        { summary_tile("from-ocean-50 to-ocean-100", "text-ocean-700", icon_calendar(16, ""), "Duration", trip.date_range()) }
                        { summary_tile(
                            "from-sunset-50 to-sunset-100",
                            "text-sunset-700",
                            icon_dollar(16, ""),
                            "Budget",
                            format!(
                                "{} ({})",
                                format_spent_of_budget(trip.spent, trip.budget),
                                format_percentage(trip.budget_percentage())
                            ),
                        ) }
                        { summary_tile("from-earth-50 to-earth-100", "text-earth-700", icon_camera(16, ""), "Memories", trip.photo_count_label()) }
                    </div>

                    <div>
                        <h3 class="font-semibold mb-2">{"About This Trip"}</h3>
                        <p class="text-muted-foreground">{ trip.description.clone() }</p>
                    </div>

                    {
                        if trip.expenses.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div>
                                    <h3 class="font-semibold mb-4">{"Budget Analysis"}</h3>
                                    <BudgetChart expenses={trip.expenses.clone()} total_budget={trip.budget} />
                                </div>
                            }
                        }
                    }

                    <PhotoGallery photos={trip.photos.clone()} {on_add_photo} />
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
    use crate::models::mock;

    fn trip_named(destination: &str) -> Trip {
        mock::load_trips()
            .into_iter()
            .find(|t| t.destination == destination)
            .unwrap()
    }

    async fn render(trip: Option<Trip>, is_open: bool) -> String {
        ServerRenderer::<TripModal>::with_props(move || TripModalProps {
            trip,
            is_open,
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[test]
    async fn nothing_without_a_trip() {
        assert_eq!(render(None, true).await, "");
        assert_eq!(render(None, false).await, "");
    }

    #[test]
    async fn nothing_while_closed() {
        assert_eq!(render(Some(trip_named("Paris")), false).await, "");
    }

    #[test]
    async fn trip_without_expenses_skips_budget_analysis() {
        let html = render(Some(trip_named("Santorini")), true).await;
        assert!(html.contains("Santorini"));
        assert!(html.contains("About This Trip"));
        assert!(!html.contains("Budget Analysis"));
        assert!(html.contains("No photos yet"));
    }

    #[test]
    async fn trip_with_expenses_shows_budget_analysis() {
        let html = render(Some(trip_named("Paris")), true).await;
        assert!(html.contains("Budget Analysis"));
        assert!(html.contains("Budget Breakdown"));
        assert!(html.contains("Memory Wall (2 photos)"));
    }
}
