use yew::prelude::*;

fn icon_base(paths: &'static [&'static str], size: u32, class: &'static str) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class={class}>
            { for paths.iter().map(|d| html! { <path d={*d}></path> }) }
        </svg>
    }
}

pub fn icon_map_pin(size: u32, class: &'static str) -> Html {
    icon_base(&["M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0116 0z", "M12 10m-3 0a3 3 0 106 0 3 3 0 10-6 0"], size, class)
}
pub fn icon_camera(size: u32, class: &'static str) -> Html {
    icon_base(&["M23 19a2 2 0 01-2 2H3a2 2 0 01-2-2V8a2 2 0 012-2h4l2-3h6l2 3h4a2 2 0 012 2z", "M12 13m-4 0a4 4 0 108 0 4 4 0 10-8 0"], size, class)
}
pub fn icon_calendar(size: u32, class: &'static str) -> Html {
    icon_base(&["M3 4h18v18H3z", "M16 2v4M8 2v4M3 10h18"], size, class)
}
pub fn icon_dollar(size: u32, class: &'static str) -> Html {
    icon_base(&["M12 1v22", "M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6"], size, class)
}
pub fn icon_plus(size: u32, class: &'static str) -> Html {
    icon_base(&["M12 5v14M5 12h14"], size, class)
}
pub fn icon_close(size: u32, class: &'static str) -> Html {
    icon_base(&["M18 6L6 18M6 6l12 12"], size, class)
}
