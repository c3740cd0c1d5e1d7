use std::collections::HashSet;

use yew::prelude::*;

use crate::models::Trip;
use crate::utils::format::format_amount_grouped;

#[derive(Clone, Debug, PartialEq)]
pub struct TripStats {
    pub countries: usize,
    pub trips: usize,
    pub total_budget: f64,
    pub photos: usize,
}

impl TripStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        let countries: HashSet<&str> = trips.iter().map(|t| t.country.as_str()).collect();
        Self {
            countries: countries.len(),
            trips: trips.len(),
            total_budget: trips.iter().map(|t| t.budget).sum(),
            photos: trips.iter().map(|t| t.photos.len()).sum(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QuickStatsProps {
    pub stats: TripStats,
}

fn stat_tile(value: String, label: &'static str, accent: &'static str) -> Html {
    html! {
        <div class="glass-effect p-6 rounded-lg text-center">
            <div class={classes!("text-2xl", "font-bold", accent)}>{ value }</div>
            <div class="text-sm text-muted-foreground">{ label }</div>
        </div>
    }
}

#[function_component(QuickStats)]
pub fn quick_stats(props: &QuickStatsProps) -> Html {
    let stats = &props.stats;
    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            { stat_tile(stats.countries.to_string(), "Countries Visited", "text-emerald-500") }
            { stat_tile(stats.trips.to_string(), "Total Trips", "text-pink-400") }
            { stat_tile(format_amount_grouped(stats.total_budget), "Total Budget", "text-teal-400") }
            { stat_tile(stats.photos.to_string(), "Photos Captured", "text-indigo-400") }
        </div>
    }
}
