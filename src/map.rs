//! Maps attached to chat answers.
//!
//! A map can only be drawn once its anchor element exists, so the view reports
//! anchors as they mount and unmount and the registry creates or drops the map
//! handles accordingly. Handles are owned here and never re-created while alive.

use crate::types::{Location, MapId, Message};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

pub const DEFAULT_ZOOM: u8 = 15;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const MARKER_ICON_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";

/// Attempts per anchor before a map is given up on.
pub const MAX_ATTEMPTS: u32 = 5;
/// Pause before checking a freshly created map, and between attempts.
pub const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerIcon {
    pub url: &'static str,
    pub size: [i32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            url: MARKER_ICON_URL,
            size: [25, 41],
            anchor: [12, 41],
            popup_anchor: [1, -34],
        }
    }
}

/// Everything a renderer needs to draw one map: view, tile layer and marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MapSpec {
    pub center: (f64, f64),
    pub zoom: u8,
    pub zoom_control: bool,
    pub scroll_wheel_zoom: bool,
    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
    pub marker_icon: MarkerIcon,
    pub popup: String,
}

impl MapSpec {
    pub fn for_location(location: &Location) -> Self {
        Self {
            center: (location.lat, location.lng),
            zoom: DEFAULT_ZOOM,
            zoom_control: true,
            scroll_wheel_zoom: false,
            tile_url: TILE_URL,
            tile_attribution: TILE_ATTRIBUTION,
            marker_icon: MarkerIcon::default(),
            popup: location.title.clone(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("map {id} could not be created: {reason}")]
pub struct MapError {
    pub id: MapId,
    pub reason: String,
}

pub trait MapRenderer {
    type Handle;

    fn create(&mut self, id: MapId, spec: &MapSpec) -> Result<Self::Handle, MapError>;

    fn destroy(&mut self, _id: MapId, _handle: Self::Handle) {}
}

pub struct MapRegistry<R: MapRenderer> {
    renderer: R,
    mounted: HashSet<MapId>,
    maps: HashMap<MapId, R::Handle>,
    failures: HashMap<MapId, u32>,
}

impl<R: MapRenderer> MapRegistry<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            mounted: HashSet::new(),
            maps: HashMap::new(),
            failures: HashMap::new(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn has_map(&self, id: MapId) -> bool {
        self.maps.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// The anchor element for `id` now exists in the view.
    pub fn anchor_mounted(&mut self, id: MapId) {
        self.mounted.insert(id);
    }

    /// The anchor element for `id` is gone; its map goes with it.
    pub fn anchor_unmounted(&mut self, id: MapId) {
        self.mounted.remove(&id);
        self.failures.remove(&id);
        if let Some(handle) = self.maps.remove(&id) {
            self.renderer.destroy(id, handle);
        }
    }

    /// Whether `id` still has attempts left.
    pub fn can_retry(&self, id: MapId) -> bool {
        self.failures.get(&id).copied().unwrap_or(0) < MAX_ATTEMPTS
    }

    /// Create maps for every located message whose anchor is mounted and that has no
    /// map yet. Safe to call any number of times. Returns how many maps were created.
    pub fn sync(&mut self, messages: &[Message]) -> usize {
        let mut created = 0;
        for message in messages {
            let Some((id, location)) = message.map_target() else {
                continue;
            };
            if !self.mounted.contains(&id) || self.maps.contains_key(&id) || !self.can_retry(id) {
                continue;
            }
            match self.renderer.create(id, &MapSpec::for_location(location)) {
                Ok(handle) => {
                    self.maps.insert(id, handle);
                    created += 1;
                }
                Err(err) => self.record_failure(err),
            }
        }
        created
    }

    /// The renderer found out after the fact that the map for `err.id` was not drawn.
    /// The handle is forgotten so the next [`sync`](Self::sync) creates it again.
    /// Returns whether another attempt is allowed.
    pub fn creation_failed(&mut self, err: MapError) -> bool {
        let id = err.id;
        self.maps.remove(&id);
        self.record_failure(err);
        self.can_retry(id)
    }

    fn record_failure(&mut self, err: MapError) {
        tracing::warn!("{err}");
        *self.failures.entry(err.id).or_default() += 1;
    }
}

impl<R: MapRenderer> Drop for MapRegistry<R> {
    fn drop(&mut self) {
        for (id, handle) in self.maps.drain() {
            self.renderer.destroy(id, handle);
        }
    }
}

// ============================================
// Leaflet
// ============================================

/// Drives Leaflet in the page by handing JavaScript snippets to `run`. Live map
/// objects are kept in `window.__campusMaps` so they can be removed later.
pub struct LeafletRenderer<F: FnMut(&str)> {
    run: F,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LeafletMap {
    pub anchor: String,
}

impl<F: FnMut(&str)> LeafletRenderer<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F: FnMut(&str)> MapRenderer for LeafletRenderer<F> {
    type Handle = LeafletMap;

    fn create(&mut self, id: MapId, spec: &MapSpec) -> Result<LeafletMap, MapError> {
        let anchor = id.to_string();
        let script = leaflet_create_script(&anchor, spec).map_err(|e| MapError {
            id,
            reason: e.to_string(),
        })?;
        (self.run)(&script);
        Ok(LeafletMap { anchor })
    }

    fn destroy(&mut self, _id: MapId, handle: LeafletMap) {
        (self.run)(&leaflet_remove_script(&handle.anchor));
    }
}

pub fn leaflet_create_script(anchor: &str, spec: &MapSpec) -> serde_json::Result<String> {
    let anchor_js = serde_json::to_string(anchor)?;
    let popup_js = serde_json::to_string(&spec.popup)?;
    let tile_js = serde_json::to_string(spec.tile_url)?;
    let attribution_js = serde_json::to_string(spec.tile_attribution)?;
    let icon_js = serde_json::to_string(spec.marker_icon.url)?;
    let (lat, lng) = spec.center;
    let icon = &spec.marker_icon;
    Ok(format!(
        r#"return (function() {{
    const el = document.getElementById({anchor_js});
    if (!el) return "{MISSING_ANCHOR}";
    if (!window.L) return "{LEAFLET_NOT_LOADED}";
    window.__campusMaps = window.__campusMaps || {{}};
    if (window.__campusMaps[{anchor_js}]) return "{CREATED}";
    let map = null;
    try {{
        map = L.map(el, {{ zoomControl: {zoom_control}, scrollWheelZoom: {scroll_wheel} }}).setView([{lat}, {lng}], {zoom});
        L.tileLayer({tile_js}, {{ attribution: {attribution_js} }}).addTo(map);
        L.marker([{lat}, {lng}], {{
            icon: L.icon({{
                iconUrl: {icon_js},
                iconSize: [{sw}, {sh}],
                iconAnchor: [{aw}, {ah}],
                popupAnchor: [{pw}, {ph}]
            }})
        }}).addTo(map).bindPopup({popup_js}).openPopup();
    }} catch (e) {{
        if (map) map.remove();
        return "leaflet error: " + e;
    }}
    window.__campusMaps[{anchor_js}] = map;
    return "{CREATED}";
}})();"#,
        zoom_control = spec.zoom_control,
        scroll_wheel = spec.scroll_wheel_zoom,
        zoom = spec.zoom,
        sw = icon.size[0],
        sh = icon.size[1],
        aw = icon.anchor[0],
        ah = icon.anchor[1],
        pw = icon.popup_anchor[0],
        ph = icon.popup_anchor[1],
    ))
}

const CREATED: &str = "created";
const MISSING_ANCHOR: &str = "anchor element not found";
const LEAFLET_NOT_LOADED: &str = "leaflet not loaded";

/// Script that answers whether the map for `anchor` is live in the page, with the same
/// status strings the create script returns.
pub fn leaflet_status_script(anchor: &str) -> String {
    let anchor_js = serde_json::to_string(anchor).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"if (window.__campusMaps && window.__campusMaps[{anchor_js}]) return "{CREATED}";
if (!document.getElementById({anchor_js})) return "{MISSING_ANCHOR}";
if (!window.L) return "{LEAFLET_NOT_LOADED}";
return "map not created";"#
    )
}

/// Turn a status reported by the page into a result for [`MapRegistry::creation_failed`].
pub fn leaflet_outcome(id: MapId, status: &str) -> Result<(), MapError> {
    if status == CREATED {
        Ok(())
    } else {
        Err(MapError {
            id,
            reason: status.to_string(),
        })
    }
}

pub fn leaflet_remove_script(anchor: &str) -> String {
    let anchor_js = serde_json::to_string(anchor).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(function() {{
    const maps = window.__campusMaps || {{}};
    if (maps[{anchor_js}]) {{ maps[{anchor_js}].remove(); delete maps[{anchor_js}]; }}
}})();"#
    )
}
