//! WebAssembly bindings for kiji.
//!
//! Mounts the two page components on a static blog page:
//! - the **quick-search widget** on the sidebar search input, and
//! - the **article navigator**: outline, active-section tracking and reading stats.
//!
//! # Architecture
//!
//! All decisions live in `kiji-core`. This crate only adapts the page to the
//! surfaces the core drives: `DomSearchSurface` and `DomNavigatorSurface`
//! wrap `web_sys` elements, `FetchIndexSource` loads the index with `fetch`,
//! and event listeners forward browser events to the component methods.
//! Component state lives in `Rc<RefCell<_>>` owned by the listeners; no
//! borrow is held across an `.await`.
//!
//! ## Module Structure
//!
//! - [`builder`] - `Kiji` builder for custom configuration
//! - [`search`] - quick-search surface and event wiring
//! - [`navigator`] - outline surface, scroll tracking, reading stats
//! - [`fetch`] - Fetch API index source
//! - [`error`] - Error types with JavaScript interop
//! - [`types`] - JS-facing result shapes
//!
//! # Example
//!
//! ```javascript
//! import init, { mount } from '@kiji/wasm';
//!
//! await init();
//! mount();
//! ```
//!
//! Every DOM target is optional. A page without the search input or the
//! outline container simply gets the other component.

mod builder;
mod dom;
mod error;
mod fetch;
pub mod navigator;
pub mod search;
mod types;

pub use builder::Kiji;
pub use error::{ErrorCode, KijiJsError};
pub use fetch::FetchIndexSource;
pub use navigator::DomNavigatorSurface;
pub use search::DomSearchSurface;
pub use types::{JsQuickResult, JsQuickResults};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic messages and console logging. Called automatically by
/// wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Mount both components with the default configuration.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    Kiji::new().mount()
}

/// Get the version of the kiji-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
