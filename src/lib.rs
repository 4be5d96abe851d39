use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Formats to the browser console; compiled out on native targets.
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::log(&format!($($arg)*));
        #[cfg(not(target_arch = "wasm32"))]
        let _ = || format!($($arg)*);
    }};
}

pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod rules;
pub mod session;
pub mod types;
pub mod wasm;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
