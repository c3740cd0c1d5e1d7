use yew::prelude::*;

use super::icons::icon_map_pin;
use crate::config::HeaderTheme;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: HeaderTheme,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="relative overflow-hidden">
            <div class={props.theme.banner_class()}>
                <div class={props.theme.text_class()}>
                    <div class="flex items-center justify-center gap-3 mb-2">
                        { icon_map_pin(32, "") }
                        <h1 class="text-4xl font-bold">{"Travelogue"}</h1>
                    </div>
                    <p class="text-lg opacity-80">{"Your journey, beautifully documented"}</p>
                </div>
            </div>
            <div class="absolute bottom-0 left-0 right-0 h-4 bg-gradient-to-t from-background to-transparent"></div>
        </header>
    }
}
