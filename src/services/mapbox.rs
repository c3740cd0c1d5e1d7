//! Bindings to the mapbox-gl browser library and its on-demand loader.
//!
//! The library is pulled in by injecting its script and stylesheet the first
//! time a token is submitted; nothing here runs until then.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlLinkElement, HtmlScriptElement};

use crate::config::MapConfig;
use crate::error::{js_message, MapError};
use crate::models::Location;

const SCRIPT_ID: &str = "mapbox-gl-script";
const STYLESHEET_ID: &str = "mapbox-gl-stylesheet";

const MARKER_POPUP_HTML: &str = r#"<div class="p-2">
  <p class="font-semibold text-sm">New Location</p>
  <p class="text-xs text-gray-600">Click to add trip details</p>
</div>"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Clone)]
    type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    fn new(options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = addControl)]
    fn add_control(this: &Map, control: &NavigationControl, position: &str);

    #[wasm_bindgen(method, js_name = on)]
    fn on_click(this: &Map, event: &str, handler: &Closure<dyn FnMut(MapMouseEvent)>);

    #[wasm_bindgen(method, js_name = on)]
    fn on_error(this: &Map, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(method)]
    fn resize(this: &Map);

    #[wasm_bindgen(method)]
    fn remove(this: &Map);

    #[wasm_bindgen(js_namespace = mapboxgl)]
    type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "NavigationControl")]
    fn new() -> NavigationControl;

    #[wasm_bindgen(js_namespace = mapboxgl)]
    type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Marker")]
    fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &Marker, lng_lat: &js_sys::Array) -> Marker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &Marker, popup: &Popup) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(js_namespace = mapboxgl)]
    type Popup;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Popup")]
    fn new() -> Popup;

    #[wasm_bindgen(method, js_name = setHTML)]
    fn set_html(this: &Popup, html: &str) -> Popup;

    type MapMouseEvent;

    #[wasm_bindgen(method, getter, js_name = lngLat)]
    fn lng_lat(this: &MapMouseEvent) -> LngLat;

    type LngLat;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LngLat) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LngLat) -> f64;
}

fn browser_error(err: JsValue) -> MapError {
    MapError::Browser(js_message(&err))
}

fn document() -> Result<Document, MapError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapError::Browser("no document".to_string()))
}

fn append_to_head(document: &Document, node: &web_sys::Node) -> Result<(), MapError> {
    let head = document
        .head()
        .ok_or_else(|| MapError::Browser("no <head> element".to_string()))?;
    head.append_child(node).map_err(browser_error)?;
    Ok(())
}

fn library_namespace() -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))
        .ok()
        .filter(|ns| !ns.is_undefined() && !ns.is_null())
}

fn ensure_stylesheet(document: &Document, url: &str) -> Result<(), MapError> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let link: HtmlLinkElement = document
        .create_element("link")
        .map_err(browser_error)?
        .dyn_into()
        .map_err(|_| MapError::Browser("link element cast failed".to_string()))?;
    link.set_id(STYLESHEET_ID);
    link.set_rel("stylesheet");
    link.set_href(url);
    append_to_head(document, &link)
}

async fn load_script(document: &Document, url: &str) -> Result<(), MapError> {
    // A leftover tag means an earlier attempt failed.
    if let Some(stale) = document.get_element_by_id(SCRIPT_ID) {
        stale.remove();
    }

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(browser_error)?
        .dyn_into()
        .map_err(|_| MapError::Browser("script element cast failed".to_string()))?;
    script.set_id(SCRIPT_ID);
    script.set_src(url);

    let loaded = Promise::new(&mut |resolve: Function, reject: Function| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });
    append_to_head(document, &script)?;

    if JsFuture::from(loaded).await.is_err() {
        script.remove();
        return Err(MapError::LibraryLoad(format!("could not fetch {}", url)));
    }
    Ok(())
}

/// Makes sure the library is present, loading it if needed.
pub async fn load_library(config: &MapConfig) -> Result<(), MapError> {
    if library_namespace().is_some() {
        return Ok(());
    }
    let document = document()?;
    ensure_stylesheet(&document, &config.stylesheet_url)?;
    load_script(&document, &config.script_url).await?;

    match library_namespace() {
        Some(_) => Ok(()),
        None => Err(MapError::LibraryLoad(
            "script loaded but mapboxgl is undefined".to_string(),
        )),
    }
}

/// A live map and the event closures it calls into. Dropping it tears the
/// map down.
pub struct MapHandle {
    map: Map,
    _on_click: Closure<dyn FnMut(MapMouseEvent)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
}

impl MapHandle {
    pub fn resize(&self) {
        self.map.resize();
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.map.remove();
    }
}

fn marker_options(color: &str) -> Result<JsValue, MapError> {
    let options = js_sys::Object::new();
    Reflect::set(&options, &JsValue::from_str("color"), &JsValue::from_str(color))
        .map_err(|e| MapError::Construction(js_message(&e)))?;
    Ok(options.into())
}

fn place_marker(map: &Map, options: &JsValue, lng: f64, lat: f64) {
    let position = js_sys::Array::of2(&JsValue::from_f64(lng), &JsValue::from_f64(lat));
    let popup = Popup::new().set_html(MARKER_POPUP_HTML);
    Marker::new(options)
        .set_lng_lat(&position)
        .set_popup(&popup)
        .add_to(map);
}

/// Builds the map inside `container`. Every click drops a marker and hands
/// the clicked location to `on_location`.
pub fn create_map<F>(
    token: &str,
    container: &HtmlElement,
    config: &MapConfig,
    mut on_location: F,
) -> Result<MapHandle, MapError>
where
    F: FnMut(Location) + 'static,
{
    let namespace = library_namespace()
        .ok_or_else(|| MapError::LibraryLoad("mapboxgl is undefined".to_string()))?;
    Reflect::set(
        &namespace,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token),
    )
    .map_err(|e| MapError::Construction(js_message(&e)))?;

    let json = serde_json::to_string(&config.options)
        .map_err(|e| MapError::Construction(e.to_string()))?;
    let options = js_sys::JSON::parse(&json).map_err(|e| MapError::Construction(js_message(&e)))?;
    Reflect::set(&options, &JsValue::from_str("container"), container)
        .map_err(|e| MapError::Construction(js_message(&e)))?;

    let map = Map::new(&options).map_err(|e| MapError::Construction(js_message(&e)))?;
    map.add_control(&NavigationControl::new(), config.control_position);

    let marker = marker_options(config.marker_color)?;
    let click_map = map.clone();
    let on_click = Closure::<dyn FnMut(MapMouseEvent)>::new(move |event: MapMouseEvent| {
        let point = event.lng_lat();
        let (lat, lng) = (point.lat(), point.lng());
        place_marker(&click_map, &marker, lng, lat);
        on_location(Location::from_click(lat, lng));
    });
    map.on_click("click", &on_click);

    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let detail = Reflect::get(&event, &JsValue::from_str("error"))
            .ok()
            .filter(|inner| !inner.is_undefined())
            .unwrap_or(event);
        log::warn!("map reported an error: {}", js_message(&detail));
    });
    map.on_error("error", &on_error);

    Ok(MapHandle {
        map,
        _on_click: on_click,
        _on_error: on_error,
    })
}
