//! Layout geometry for rendering row patterns
//!
//! Resolves quiet zones and scale factors per axis, and turns each row into
//! dark runs. Producing a concrete image or vector format is left to callers.

use super::Symbology;

/// Optional overrides for a symbology's layout defaults
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutOptions {
    /// Quiet zone on both axes, in modules
    pub quiet_zone: Option<usize>,
    /// Horizontal quiet zone; wins over `quiet_zone`
    pub quiet_zone_x: Option<usize>,
    /// Vertical quiet zone; wins over `quiet_zone`
    pub quiet_zone_y: Option<usize>,
    /// Scale applied on both axes after prescaling
    pub scale: Option<f64>,
    /// Horizontal after-scale; wins over `scale`
    pub scale_x: Option<f64>,
    /// Vertical after-scale; wins over `scale`
    pub scale_y: Option<f64>,
    /// Horizontal prescale as a fraction of the unscaled height
    pub prescale_ratio_x: Option<f64>,
    /// Vertical prescale as a fraction of the unscaled width
    pub prescale_ratio_y: Option<f64>,
    /// Explicit horizontal prescale; wins over the ratio
    pub prescale_x: Option<f64>,
    /// Explicit vertical prescale; wins over the ratio
    pub prescale_y: Option<f64>,
}

impl LayoutOptions {
    /// No overrides: every value comes from the symbology
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quiet zone on both axes
    pub fn with_quiet_zone(mut self, modules: usize) -> Self {
        self.quiet_zone = Some(modules);
        self
    }

    /// Set the horizontal quiet zone
    pub fn with_quiet_zone_x(mut self, modules: usize) -> Self {
        self.quiet_zone_x = Some(modules);
        self
    }

    /// Set the vertical quiet zone
    pub fn with_quiet_zone_y(mut self, modules: usize) -> Self {
        self.quiet_zone_y = Some(modules);
        self
    }

    /// Set the after-scale on both axes
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the horizontal after-scale
    pub fn with_scale_x(mut self, scale: f64) -> Self {
        self.scale_x = Some(scale);
        self
    }

    /// Set the vertical after-scale
    pub fn with_scale_y(mut self, scale: f64) -> Self {
        self.scale_y = Some(scale);
        self
    }

    /// Set the horizontal prescale ratio
    pub fn with_prescale_ratio_x(mut self, ratio: f64) -> Self {
        self.prescale_ratio_x = Some(ratio);
        self
    }

    /// Set the vertical prescale ratio
    pub fn with_prescale_ratio_y(mut self, ratio: f64) -> Self {
        self.prescale_ratio_y = Some(ratio);
        self
    }

    /// Set an explicit horizontal prescale
    pub fn with_prescale_x(mut self, prescale: f64) -> Self {
        self.prescale_x = Some(prescale);
        self
    }

    /// Set an explicit vertical prescale
    pub fn with_prescale_y(mut self, prescale: f64) -> Self {
        self.prescale_y = Some(prescale);
        self
    }
}

/// A horizontal run of dark modules, in unscaled coordinates including the quiet zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Row, offset by the vertical quiet zone
    pub row: usize,
    /// First dark column, offset by the horizontal quiet zone
    pub start: usize,
    /// Dark modules in the run
    pub len: usize,
}

/// Resolved geometry of one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    quiet_zone_x: usize,
    quiet_zone_y: usize,
    unscaled_width: usize,
    unscaled_height: usize,
    scale_x: usize,
    scale_y: usize,
}

impl Layout {
    /// Resolve quiet zones and scales for `symbol` under `options`
    pub fn new<S: Symbology + ?Sized>(symbol: &S, options: &LayoutOptions) -> Self {
        let rows = symbol.row_patterns();
        let raw_height = rows.len();
        let raw_width = rows.first().map_or(0, Vec::len);

        let quiet_zone_x = options
            .quiet_zone_x
            .or(options.quiet_zone)
            .unwrap_or_else(|| symbol.quiet_zone_x());
        let quiet_zone_y = options
            .quiet_zone_y
            .or(options.quiet_zone)
            .unwrap_or_else(|| symbol.quiet_zone_y());

        let unscaled_width = raw_width + quiet_zone_x * 2;
        let unscaled_height = raw_height + quiet_zone_y * 2;

        let afterscale = options.scale.unwrap_or(1.0);
        let afterscale_x = options.scale_x.unwrap_or(afterscale);
        let afterscale_y = options.scale_y.unwrap_or(afterscale);

        let ratio_x = options.prescale_ratio_x.or(symbol.prescale_ratio_x());
        let ratio_y = options.prescale_ratio_y.or(symbol.prescale_ratio_y());
        let prescale_x = options
            .prescale_x
            .or(ratio_x.map(|ratio| ratio * unscaled_height as f64))
            .unwrap_or(1.0);
        let prescale_y = options
            .prescale_y
            .or(ratio_y.map(|ratio| ratio * unscaled_width as f64))
            .unwrap_or(1.0);

        Self {
            quiet_zone_x,
            quiet_zone_y,
            unscaled_width,
            unscaled_height,
            scale_x: round_scale(prescale_x * afterscale_x),
            scale_y: round_scale(prescale_y * afterscale_y),
        }
    }

    /// Horizontal quiet zone in modules
    pub fn quiet_zone_x(&self) -> usize {
        self.quiet_zone_x
    }

    /// Vertical quiet zone in modules
    pub fn quiet_zone_y(&self) -> usize {
        self.quiet_zone_y
    }

    /// Width in modules, quiet zones included
    pub fn unscaled_width(&self) -> usize {
        self.unscaled_width
    }

    /// Height in modules, quiet zones included
    pub fn unscaled_height(&self) -> usize {
        self.unscaled_height
    }

    /// Horizontal units per module
    pub fn scale_x(&self) -> usize {
        self.scale_x
    }

    /// Vertical units per module
    pub fn scale_y(&self) -> usize {
        self.scale_y
    }

    /// Unscaled width times `scale_x`
    pub fn scaled_width(&self) -> usize {
        self.unscaled_width * self.scale_x
    }

    /// Unscaled height times `scale_y`
    pub fn scaled_height(&self) -> usize {
        self.unscaled_height * self.scale_y
    }

    /// Dark runs of every row, shifted by the quiet zones
    pub fn runs(&self, rows: &[Vec<bool>]) -> Vec<Run> {
        let mut runs = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let mut start = None;
            // Trailing sentinel closes a run that touches the right edge
            for (col, dark) in row.iter().copied().chain(std::iter::once(false)).enumerate() {
                match (dark, start) {
                    (true, None) => start = Some(col),
                    (false, Some(begin)) => {
                        runs.push(Run {
                            row: index + self.quiet_zone_y,
                            start: begin + self.quiet_zone_x,
                            len: col - begin,
                        });
                        start = None;
                    }
                    _ => {}
                }
            }
        }
        runs
    }
}

/// Half-up rounding, clamped at zero
fn round_scale(value: f64) -> usize {
    (value + 0.5).floor().max(0.0) as usize
}
