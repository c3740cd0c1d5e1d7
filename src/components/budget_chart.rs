use std::sync::atomic::{AtomicUsize, Ordering};

use charming::component::{Axis, Grid};
use charming::datatype::DataPointItem;
use charming::element::{AxisLabel, AxisType, Color, ItemStyle, Label, Tooltip, Trigger};
use charming::series::{bar, Pie};
use charming::{Chart, WasmRenderer};
use web_sys::Element;
use yew::prelude::*;

use crate::models::Expense;
use crate::utils::budget::breakdown_series;
use crate::utils::format::format_amount;

const BAR_FILL: &str = "#0ea5e9";
const CHART_HEIGHT: u32 = 250;
const FALLBACK_WIDTH: u32 = 400;
const VALUE_TOOLTIP: &str = "{b}: ${c}";

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

fn next_chart_id(kind: &str) -> String {
    format!("{}-chart-{}", kind, NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed))
}

/// Ring of the breakdown series, each slice in its expense color with a thin
/// white gap between neighbours.
pub(crate) fn breakdown_chart(series: &[Expense]) -> Chart {
    let colors: Vec<Color> = series.iter().map(|e| Color::from(e.color.as_str())).collect();
    let data: Vec<DataPointItem> = series
        .iter()
        .map(|e| DataPointItem::new(e.amount).name(e.category.clone()))
        .collect();

    Chart::new()
        .color(colors)
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter(VALUE_TOOLTIP))
        .series(
            Pie::new()
                .name("Budget")
                .radius(vec!["60", "100"])
                .item_style(ItemStyle::new().border_color("#fff").border_width(5))
                .label(Label::new().show(false))
                .data(data),
        )
}

/// One bar per raw expense, categories along a slanted x axis.
pub(crate) fn category_chart(expenses: &[Expense]) -> Chart {
    let labels: Vec<String> = expenses.iter().map(|e| e.category.clone()).collect();
    let amounts: Vec<f64> = expenses.iter().map(|e| e.amount).collect();

    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter(VALUE_TOOLTIP))
        .grid(Grid::new().left("3%").right("4%").bottom(60).contain_label(true))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().rotate(-45)),
        )
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            bar::Bar::new()
                .name("Amount")
                .item_style(ItemStyle::new().color(BAR_FILL))
                .data(amounts),
        )
}

fn render_into(node: &NodeRef, id: &str, chart: &Chart) {
    let width = node
        .cast::<Element>()
        .map(|el| el.client_width())
        .filter(|w| *w > 0)
        .map_or(FALLBACK_WIDTH, |w| w as u32);

    if let Err(err) = WasmRenderer::new(width, CHART_HEIGHT).render(id, chart) {
        log::warn!("failed to render chart {}: {:?}", id, err);
    }
}

#[derive(Properties, PartialEq)]
pub struct BudgetChartProps {
    pub expenses: Vec<Expense>,
    pub total_budget: f64,
}

#[function_component(BudgetChart)]
pub fn budget_chart(props: &BudgetChartProps) -> Html {
    let series = breakdown_series(&props.expenses, props.total_budget);
    let ring_ref = use_node_ref();
    let bars_ref = use_node_ref();
    let ids = use_memo(|_| (next_chart_id("breakdown"), next_chart_id("categories")), ());

    {
        let ring_ref = ring_ref.clone();
        let bars_ref = bars_ref.clone();
        let ids = ids.clone();
        use_effect_with_deps(
            move |(expenses, total_budget): &(Vec<Expense>, f64)| {
                let series = breakdown_series(expenses, *total_budget);
                render_into(&ring_ref, &ids.0, &breakdown_chart(&series));
                render_into(&bars_ref, &ids.1, &category_chart(expenses));
                || ()
            },
            (props.expenses.clone(), props.total_budget),
        );
    }

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="bg-card rounded-lg border border-border">
                <div class="p-6 pb-2">
                    <h3 class="text-lg font-semibold">{"Budget Breakdown"}</h3>
                </div>
                <div class="p-6 pt-0">
                    <div id={ids.0.clone()} ref={ring_ref} class="w-full h-[250px]"></div>
                    <div class="mt-4 grid grid-cols-2 gap-2 text-sm">
                        { for series.iter().map(|item| html! {
                            <div class="flex items-center gap-2">
                                <div class="w-3 h-3 rounded-full" style={format!("background-color: {}", item.color)}></div>
                                <span class="truncate">{ format!("{}: {}", item.category, format_amount(item.amount)) }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="bg-card rounded-lg border border-border">
                <div class="p-6 pb-2">
                    <h3 class="text-lg font-semibold">{"Expense Categories"}</h3>
                </div>
                <div class="p-6 pt-0">
                    <div id={ids.1.clone()} ref={bars_ref} class="w-full h-[250px]"></div>
                </div>
            </div>
        </div>
    }
}
