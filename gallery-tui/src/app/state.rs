//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`).

use libgallery::{CatalogState, Config, PriceFormat};

/// Root application state
///
/// Single source of truth for the storefront page: the catalog slice plus
/// the few bits of UI state the page keeps for itself.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Index of the focused card
    pub focused: usize,

    /// Loading spinner frame, advanced on ticks while loading
    pub spinner_frame: usize,

    /// Terminal width from the last resize, 0 until one arrives
    pub viewport_width: u16,

    /// Catalog store state
    pub catalog: CatalogState,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Price rendering
    pub price_format: PriceFormat,

    /// Card description cut-off
    pub description_max_chars: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colors_enabled: true,
            unicode_enabled: true,
            tick_rate_ms: 100,
            price_format: PriceFormat::default(),
            description_max_chars: 40,
        }
    }
}

impl UiConfig {
    /// Defaults adjusted for the environment (`NO_COLOR`, tick rate override)
    pub fn from_env() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("GALLERY_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled; // Same heuristic for now

        let tick_rate_ms = std::env::var("GALLERY_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
            ..Self::default()
        }
    }

    /// Environment defaults overlaid with the file configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            price_format: config.price_format(),
            description_max_chars: config.storefront.description_max_chars,
            ..Self::from_env()
        }
    }
}

impl AppState {
    /// Create new application state, UI settings taken from the environment
    pub fn new() -> Self {
        Self::with_config(UiConfig::from_env())
    }

    /// Create state with an explicit UI configuration
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Cards per grid row at the current terminal width
    pub fn grid_columns(&self) -> usize {
        crate::ui::columns_for_width(self.viewport_width)
    }

    /// Any overlay covering the grid?
    pub fn overlay_open(&self) -> bool {
        self.help_visible || self.catalog.selected.is_some()
    }
}
