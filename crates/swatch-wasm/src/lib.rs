//! WebAssembly bindings for the Swatch palette generator.
//!
//! The browser UI owns rendering, persistence, and file handling; it calls
//! into these bindings with plain data and gets plain data back.
//!
//! ## Example
//!
//! ```js
//! import { generatePalette, extractColors, PaletteSession } from 'swatch-wasm';
//!
//! // One-shot generation, keeping the locked first color.
//! const next = generatePalette([
//!   { hex: '#3B82F6', locked: true },
//!   { hex: '#000000' },
//!   { hex: '#000000' },
//! ], 'triadic');
//!
//! // Colors from a decoded canvas.
//! const data = ctx.getImageData(0, 0, w, h);
//! const colors = extractColors(data.data, w, h, 5);
//!
//! // Stateful editing.
//! const session = new PaletteSession(5);
//! session.toggleLock(0);
//! session.generate('analogous');
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use swatch_core::Color;
use swatch_extract::{extract_with_config, DEFAULT_COUNT};
use swatch_harmony::{generate_with, HarmonyRule};

mod session;
mod types;

pub use session::*;
pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Get the version of the library.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Generate a new palette from `colors` under the named rule.
///
/// Unknown rule names act like `auto`. `options` may be omitted.
#[wasm_bindgen(js_name = generatePalette)]
pub fn generate_palette(colors: JsValue, rule: &str, options: JsValue) -> Result<JsValue, JsError> {
    let colors: Vec<Color> = from_js(colors, "palette")?;
    let options: GenerateOptionsJs = from_js_or_default(options, "generate options")?;

    let out = generate_with(
        &colors,
        HarmonyRule::from_name(rule),
        &options.into_core(),
        &mut rand::thread_rng(),
    );
    to_js(&out)
}

/// Names of every supported harmony rule.
#[wasm_bindgen(js_name = harmonyRules)]
pub fn harmony_rules() -> Vec<String> {
    HarmonyRule::ALL.iter().map(|r| r.name().to_string()).collect()
}

/// Extract the `k` (default 5) most frequent colors from canvas RGBA data.
#[wasm_bindgen(js_name = extractColors)]
pub fn extract_colors(
    pixels: &[u8],
    width: u32,
    height: u32,
    k: Option<u32>,
    options: JsValue,
) -> Result<JsValue, JsError> {
    let options: ExtractOptionsJs = from_js_or_default(options, "extract options")?;
    let k = k.map_or(DEFAULT_COUNT, |k| k as usize);

    let colors = extract_with_config(pixels, width, height, k, &options.into_core())
        .map_err(|e| JsError::new(&format!("Extraction error: {}", e)))?;
    to_js(&colors)
}

/// Decode an image file's bytes and extract its dominant colors.
#[wasm_bindgen(js_name = extractColorsFromImage)]
pub fn extract_colors_from_image(
    bytes: &[u8],
    k: Option<u32>,
    options: JsValue,
) -> Result<JsValue, JsError> {
    let options: ExtractOptionsJs = from_js_or_default(options, "extract options")?;
    let k = k.map_or(DEFAULT_COUNT, |k| k as usize);

    let colors = swatch_extract::extract_from_image(bytes, k, &options.into_core())
        .map_err(|e| JsError::new(&format!("Extraction error: {}", e)))?;
    to_js(&colors)
}

/// Name of the nearest reference color.
#[wasm_bindgen(js_name = colorName)]
pub fn color_name(hex: &str) -> String {
    swatch_core::color_name(hex).to_string()
}

/// Whether dark text should be drawn on this color.
#[wasm_bindgen(js_name = isLightColor)]
pub fn is_light_color(hex: &str) -> bool {
    swatch_core::is_light_color(hex)
}

/// `{ r, g, b }` for a `#RRGGBB` string, or `null` when malformed.
#[wasm_bindgen(js_name = hexToRgb)]
pub fn hex_to_rgb(hex: &str) -> Result<JsValue, JsError> {
    match swatch_core::hex_to_rgb(hex) {
        Some(rgb) => to_js(&rgb),
        None => Ok(JsValue::NULL),
    }
}

/// Uppercase `#RRGGBB`, clamping each channel to 0-255.
#[wasm_bindgen(js_name = rgbToHex)]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    swatch_core::rgb_to_hex(r, g, b)
}

pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&format!("Invalid {}: {}", what, e)))
}

/// Like [`from_js`], but `undefined`/`null` yields the default.
pub(crate) fn from_js_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    what: &str,
) -> Result<T, JsError> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        from_js(value, what)
    }
}
