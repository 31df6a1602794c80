//! A palette editing session for the interactive generator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use swatch_core::{Adjustment, Color, Palette, PaletteError};
use swatch_harmony::{generate, HarmonyRule};

use crate::{from_js, to_js};

/// Number of colors in a fresh session.
const DEFAULT_LEN: usize = 5;

/// Holds the palette the user is editing along with its random source.
#[wasm_bindgen]
pub struct PaletteSession {
    palette: Palette,
    rng: StdRng,
}

#[wasm_bindgen]
impl PaletteSession {
    /// Start a session with `len` random colors (default 5).
    #[wasm_bindgen(constructor)]
    pub fn new(len: Option<u32>) -> Result<PaletteSession, JsError> {
        Self::with_rng(len.map_or(DEFAULT_LEN, |n| n as usize), StdRng::from_entropy())
            .map_err(palette_error)
    }

    /// Start a reproducible session.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(len: u32, seed: u64) -> Result<PaletteSession, JsError> {
        Self::with_rng(len as usize, StdRng::seed_from_u64(seed)).map_err(palette_error)
    }

    /// Regenerate unlocked colors under the named rule (unknown names act
    /// like `auto`) and return the new colors.
    pub fn generate(&mut self, rule: &str) -> Result<JsValue, JsError> {
        self.regenerate(HarmonyRule::from_name(rule))
            .map_err(palette_error)?;
        self.colors()
    }

    /// Current colors, in order.
    pub fn colors(&self) -> Result<JsValue, JsError> {
        to_js(self.palette.colors())
    }

    /// Current hex strings, in order.
    pub fn hexes(&self) -> Vec<String> {
        self.palette.hexes().into_iter().map(String::from).collect()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.palette.len()
    }

    /// Flip the lock at `index`, returning the new state.
    #[wasm_bindgen(js_name = toggleLock)]
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, JsError> {
        self.palette.toggle_lock(index).map_err(palette_error)
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, index: usize, hex: &str) -> Result<(), JsError> {
        self.palette.set_color(index, hex).map_err(palette_error)
    }

    /// Append a random color.
    #[wasm_bindgen(js_name = addColor)]
    pub fn add_color(&mut self) -> Result<(), JsError> {
        self.palette.push_random(&mut self.rng).map_err(palette_error)
    }

    #[wasm_bindgen(js_name = removeColor)]
    pub fn remove_color(&mut self, index: usize) -> Result<(), JsError> {
        self.palette.remove(index).map(drop).map_err(palette_error)
    }

    #[wasm_bindgen(js_name = moveColor)]
    pub fn move_color(&mut self, from: usize, to: usize) -> Result<(), JsError> {
        self.palette.move_color(from, to).map_err(palette_error)
    }

    /// Shift unlocked colors by `{ hue, saturation, lightness }`.
    pub fn adjust(&mut self, adjustment: JsValue) -> Result<(), JsError> {
        let adjustment: Adjustment = from_js(adjustment, "adjustment")?;
        self.palette.adjust(adjustment);
        Ok(())
    }

    /// Adopt a whole palette, e.g. from extraction or a saved list.
    pub fn replace(&mut self, colors: JsValue) -> Result<(), JsError> {
        let colors: Vec<Color> = from_js(colors, "colors")?;
        self.palette.replace(colors).map_err(palette_error)
    }
}

impl PaletteSession {
    fn with_rng(len: usize, mut rng: StdRng) -> Result<Self, PaletteError> {
        let palette = Palette::random(len, &mut rng)?;
        Ok(Self { palette, rng })
    }

    fn regenerate(&mut self, rule: HarmonyRule) -> Result<(), PaletteError> {
        let next = generate(self.palette.colors(), rule, &mut self.rng);
        self.palette.replace(next)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

fn palette_error(e: PaletteError) -> JsError {
    JsError::new(&format!("Palette error: {}", e))
}
