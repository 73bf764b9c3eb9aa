//! Map View Component
//!
//! Slippy map rendered on HTML5 Canvas: OpenStreetMap raster tiles drawn via
//! image onload callbacks, with sighting markers and the pending report pin
//! composited on top. Clicking the canvas either places the pending pin
//! (while the report modal is open) or selects the nearest marker.

use leptos::*;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::api;
use crate::state::global::{GlobalState, Sighting};

const TILE_SIZE: f64 = 256.0;
const TILE_URL: &str = "https://tile.openstreetmap.org";

/// Default map center: Kanchanaburi town
pub const KANCHANABURI_CENTER: (f64, f64) = (14.0227, 99.5328);
/// Default zoom level
pub const DEFAULT_ZOOM: u8 = 11;

const MIN_ZOOM: u8 = 3;
const MAX_ZOOM: u8 = 18;

/// Web Mercator clamps latitude to this magnitude
const MAX_LATITUDE: f64 = 85.0511;

const MARKER_RADIUS: f64 = 7.0;
/// Click-to-marker matching distance in canvas pixels
const HIT_RADIUS: f64 = 14.0;

/// Map viewport: center coordinates and integer zoom
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: KANCHANABURI_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Interactive sighting map
#[component]
pub fn MapView(
    /// True while the report modal is open: clicks place the pending pin
    #[prop(into)]
    selecting: Signal<bool>,
    /// The pending report location, if one has been chosen
    selected_location: RwSignal<Option<(f64, f64)>>,
    /// The sighting whose detail card is open, if any
    selected_sighting: RwSignal<Option<Sighting>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let viewport = create_rw_signal(Viewport::default());

    // Redraw whenever the sightings, viewport, or pending pin change
    create_effect(move |_| {
        let sightings = state.sightings.get();
        let vp = viewport.get();
        let pending = selected_location.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_map(&canvas, &sightings, &vp, pending);
        }
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;

        // Canvas pixels and CSS pixels differ when the element is scaled
        let scale_x = width / canvas.client_width().max(1) as f64;
        let scale_y = height / canvas.client_height().max(1) as f64;
        let x = ev.offset_x() as f64 * scale_x;
        let y = ev.offset_y() as f64 * scale_y;

        let vp = viewport.get_untracked();

        if selecting.get_untracked() {
            selected_location.set(Some(screen_to_lat_lng(x, y, &vp, width, height)));
            return;
        }

        let sightings = state.sightings.get_untracked();
        let positions: Vec<(f64, f64)> = sightings
            .iter()
            .map(|s| screen_position(s.latitude, s.longitude, &vp, width, height))
            .collect();

        match hit_test(&positions, x, y, HIT_RADIUS) {
            Some(idx) => {
                let sighting = sightings[idx].clone();
                let id = sighting.id;
                selected_sighting.set(Some(sighting));

                // Replace the cached record with fresh server truth
                spawn_local(async move {
                    if let Ok(fresh) = api::sightings::get(id).await {
                        selected_sighting.set(Some(fresh));
                    }
                });
            }
            None => selected_sighting.set(None),
        }
    };

    let zoom_in = move |_| {
        viewport.update(|vp| vp.zoom = (vp.zoom + 1).min(MAX_ZOOM));
    };
    let zoom_out = move |_| {
        viewport.update(|vp| vp.zoom = vp.zoom.saturating_sub(1).max(MIN_ZOOM));
    };

    view! {
        <div class="relative w-full h-full">
            <canvas
                node_ref=canvas_ref
                width="1024"
                height="640"
                on:click=on_click
                class="w-full h-full cursor-crosshair"
            />

            // Zoom controls
            <div class="absolute bottom-4 right-4 flex flex-col space-y-1">
                <button
                    on:click=zoom_in
                    class="w-10 h-10 bg-gray-800 hover:bg-gray-700 text-white text-xl
                           rounded-lg shadow font-bold"
                >
                    "+"
                </button>
                <button
                    on:click=zoom_out
                    class="w-10 h-10 bg-gray-800 hover:bg-gray-700 text-white text-xl
                           rounded-lg shadow font-bold"
                >
                    "−"
                </button>
            </div>

            // Attribution
            <div class="absolute bottom-0 left-0 bg-gray-900/70 text-gray-300 text-xs px-2 py-0.5 rounded-tr">
                "© OpenStreetMap contributors"
            </div>
        </div>
    }
}

// ============ Rendering ============

#[derive(Clone, Copy)]
struct Marker {
    x: f64,
    y: f64,
    verified: bool,
    pending: bool,
}

/// Render tiles and markers for the current viewport. Tiles arrive
/// asynchronously; each onload blits its tile and repaints the markers so
/// they stay on top.
fn draw_map(
    canvas: &HtmlCanvasElement,
    sightings: &[Sighting],
    viewport: &Viewport,
    pending: Option<(f64, f64)>,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Backdrop until tiles land
    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let (cx, cy) = project(viewport.center.0, viewport.center.1, viewport.zoom);
    let origin_x = cx - width / 2.0;
    let origin_y = cy - height / 2.0;

    let mut markers: Vec<Marker> = Vec::new();
    for sighting in sightings {
        let (x, y) = screen_position(sighting.latitude, sighting.longitude, viewport, width, height);
        if x < -TILE_SIZE || x > width + TILE_SIZE || y < -TILE_SIZE || y > height + TILE_SIZE {
            continue;
        }
        markers.push(Marker {
            x,
            y,
            verified: sighting.is_verified,
            pending: false,
        });
    }
    if let Some((lat, lng)) = pending {
        let (x, y) = screen_position(lat, lng, viewport, width, height);
        markers.push(Marker {
            x,
            y,
            verified: false,
            pending: true,
        });
    }
    let markers = Rc::new(markers);

    let tiles_per_axis = 1i64 << viewport.zoom;
    let tx0 = (origin_x / TILE_SIZE).floor() as i64;
    let tx1 = ((origin_x + width) / TILE_SIZE).floor() as i64;
    let ty0 = (origin_y / TILE_SIZE).floor() as i64;
    let ty1 = ((origin_y + height) / TILE_SIZE).floor() as i64;

    for tx in tx0..=tx1 {
        for ty in ty0..=ty1 {
            if ty < 0 || ty >= tiles_per_axis {
                continue;
            }
            let dx = tx as f64 * TILE_SIZE - origin_x;
            let dy = ty as f64 * TILE_SIZE - origin_y;
            // Longitude wraps
            let tile_x = tx.rem_euclid(tiles_per_axis);
            load_tile(&ctx, viewport.zoom, tile_x, ty, dx, dy, Rc::clone(&markers));
        }
    }

    draw_markers(&ctx, &markers);
}

/// Fetch one tile image and draw it (plus the marker layer) once loaded
fn load_tile(
    ctx: &CanvasRenderingContext2d,
    zoom: u8,
    x: i64,
    y: i64,
    dx: f64,
    dy: f64,
    markers: Rc<Vec<Marker>>,
) {
    let Ok(img) = HtmlImageElement::new() else {
        return;
    };

    let ctx = ctx.clone();
    let img_for_draw = img.clone();
    let onload = Closure::wrap(Box::new(move || {
        let _ = ctx.draw_image_with_html_image_element(&img_for_draw, dx, dy);
        draw_markers(&ctx, &markers);
    }) as Box<dyn FnMut()>);
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    img.set_cross_origin(Some("anonymous"));
    img.set_src(&format!("{}/{}/{}/{}.png", TILE_URL, zoom, x, y));
}

fn draw_markers(ctx: &CanvasRenderingContext2d, markers: &[Marker]) {
    for marker in markers {
        let color = if marker.pending {
            "#fbbf24" // amber: the pending report pin
        } else if marker.verified {
            "#22c55e" // green: verified sighting
        } else {
            "#ef4444" // red: unverified sighting
        };

        ctx.begin_path();
        let _ = ctx.arc(marker.x, marker.y, MARKER_RADIUS, 0.0, std::f64::consts::PI * 2.0);
        ctx.set_fill_style(&color.into());
        ctx.fill();
        ctx.set_stroke_style(&"#ffffff".into());
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
}

// ============ Projection ============

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * (1i64 << zoom) as f64
}

/// Project lat/lng to Web Mercator world pixel coordinates at `zoom`
pub fn project(lat: f64, lng: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let lat_rad = lat.to_radians();

    let x = (lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`]
pub fn unproject(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);

    let lng = x / size * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    (lat, lng)
}

/// Canvas position of a lat/lng for the given viewport
pub fn screen_position(
    lat: f64,
    lng: f64,
    viewport: &Viewport,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let (cx, cy) = project(viewport.center.0, viewport.center.1, viewport.zoom);
    let (x, y) = project(lat, lng, viewport.zoom);
    (x - cx + width / 2.0, y - cy + height / 2.0)
}

/// Lat/lng under a canvas position for the given viewport
pub fn screen_to_lat_lng(
    x: f64,
    y: f64,
    viewport: &Viewport,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let (cx, cy) = project(viewport.center.0, viewport.center.1, viewport.zoom);
    unproject(cx + x - width / 2.0, cy + y - height / 2.0, viewport.zoom)
}

/// Index of the closest point within `radius` of (x, y), if any
fn hit_test(positions: &[(f64, f64)], x: f64, y: f64, radius: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, (px, py)) in positions.iter().enumerate() {
        let dist = ((px - x).powi(2) + (py - y).powi(2)).sqrt();
        if dist <= radius && best.map(|(_, d)| dist < d).unwrap_or(true) {
            best = Some((idx, dist));
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_round_trip() {
        let (lat, lng) = KANCHANABURI_CENTER;
        let (x, y) = project(lat, lng, DEFAULT_ZOOM);
        let (lat2, lng2) = unproject(x, y, DEFAULT_ZOOM);

        assert!((lat - lat2).abs() < 1e-6);
        assert!((lng - lng2).abs() < 1e-6);
    }

    #[test]
    fn test_kanchanaburi_tile_at_default_zoom() {
        let (x, y) = project(KANCHANABURI_CENTER.0, KANCHANABURI_CENTER.1, 11);
        let tile = ((x / TILE_SIZE).floor() as i64, (y / TILE_SIZE).floor() as i64);
        assert_eq!(tile, (1590, 943));
    }

    #[test]
    fn test_project_clamps_polar_latitudes() {
        let (_, y_pole) = project(90.0, 0.0, 4);
        let (_, y_clamped) = project(MAX_LATITUDE, 0.0, 4);
        assert!((y_pole - y_clamped).abs() < 1e-9);
    }

    #[test]
    fn test_screen_round_trip() {
        let vp = Viewport::default();
        let (w, h) = (1024.0, 640.0);

        let (x, y) = screen_position(14.02, 99.53, &vp, w, h);
        let (lat, lng) = screen_to_lat_lng(x, y, &vp, w, h);

        assert!((lat - 14.02).abs() < 1e-6);
        assert!((lng - 99.53).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_center_maps_to_canvas_center() {
        let vp = Viewport::default();
        let (x, y) = screen_position(vp.center.0, vp.center.1, &vp, 1024.0, 640.0);
        assert!((x - 512.0).abs() < 1e-9);
        assert!((y - 320.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test_picks_nearest_within_radius() {
        let positions = vec![(100.0, 100.0), (110.0, 100.0), (400.0, 400.0)];

        assert_eq!(hit_test(&positions, 108.0, 100.0, 14.0), Some(1));
        assert_eq!(hit_test(&positions, 102.0, 101.0, 14.0), Some(0));
        assert_eq!(hit_test(&positions, 250.0, 250.0, 14.0), None);
        assert_eq!(hit_test(&[], 0.0, 0.0, 14.0), None);
    }
}
