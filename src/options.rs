use morph_core::{FieldConfig, Layout, RingSettings, Symbol};

/// Layout used when a canvas names neither a layout nor a valid symbol.
pub const FALLBACK_LAYOUT: Layout = Layout::Symbol(Symbol::Arch);

/// Where a canvas takes its CSS box from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sizing {
    /// The stylesheet sizes the canvas; only the backing store is written.
    #[default]
    Stylesheet,
    /// The canvas is measured off its host and pinned to that size inline.
    Host,
}

impl Sizing {
    pub fn pins_style(self) -> bool {
        matches!(self, Sizing::Host)
    }
}

/// Per-canvas settings read from `data-morph-*` attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct MountOptions {
    pub layout: Layout,
    pub config: FieldConfig,
    /// Engage while the canvas crosses the middle of the viewport.
    pub center_band: bool,
    pub sizing: Sizing,
}

impl MountOptions {
    pub fn resolve(
        layout: Option<&str>,
        symbol: Option<&str>,
        seed: Option<&str>,
        headline: Option<&str>,
        band: Option<&str>,
    ) -> Self {
        let layout = layout
            .or(symbol)
            .map(|name| match name.parse::<Layout>() {
                Ok(l) => l,
                Err(e) => {
                    log::warn!("[mount] {e}; using {FALLBACK_LAYOUT}");
                    FALLBACK_LAYOUT
                }
            })
            .unwrap_or(FALLBACK_LAYOUT);

        let mut config = FieldConfig::for_layout(layout);
        if let Some(raw) = seed {
            match raw.trim().parse::<u32>() {
                Ok(s) => config = config.with_seed(s),
                Err(_) => log::warn!("[mount] ignoring seed `{raw}`"),
            }
        }
        if let Some(text) = headline.map(str::trim).filter(|t| !t.is_empty()) {
            config = config.with_headline(text);
        }
        let center_band = matches!(band.map(str::trim), Some("" | "true" | "1"));

        Self {
            layout,
            config,
            center_band,
            sizing: Sizing::Stylesheet,
        }
    }
}

/// Ring preset from `data-ring-field`; empty or unknown names give the hero rings.
pub fn ring_settings(name: Option<&str>) -> RingSettings {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        None => RingSettings::hero(),
        Some(n) => RingSettings::by_name(n).unwrap_or_else(|| {
            log::warn!("[mount] unknown ring preset `{n}`; using hero");
            RingSettings::hero()
        }),
    }
}

/// Combines the intent sources of one host into the morph `want` flag.
///
/// Hover devices follow enter/leave; tap devices toggle on click. Either way
/// the center-band observer can engage the morph on its own. A tap that turns
/// the morph off mutes the band until the canvas leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostIntent {
    pub hovering: bool,
    pub toggled: bool,
    pub in_band: bool,
    pub band_muted: bool,
    pub forced: Option<bool>,
}

impl HostIntent {
    pub fn want(&self) -> bool {
        let band = self.in_band && !self.band_muted;
        self.forced
            .unwrap_or(self.hovering || self.toggled || band)
    }

    pub fn enter(&mut self) {
        self.hovering = true;
    }

    pub fn leave(&mut self) {
        self.hovering = false;
    }

    pub fn tap(&mut self) {
        let next = !self.want();
        self.toggled = next;
        self.band_muted = self.in_band && !next;
        self.forced = None;
    }

    pub fn set_in_band(&mut self, in_band: bool) {
        self.in_band = in_band;
        if !in_band {
            self.band_muted = false;
        }
    }

    /// Explicit override from page glue; `None` returns control to the observers.
    pub fn force(&mut self, want: Option<bool>) {
        self.forced = want;
    }
}
