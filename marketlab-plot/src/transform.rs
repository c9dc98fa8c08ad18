/// A point on the drawing surface, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfacePoint {
    /// Horizontal coordinate, growing rightward
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
}

/// The logical size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSize {
    /// Width in logical pixels
    pub width: f64,
    /// Height in logical pixels
    pub height: f64,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 440.0,
            height: 380.0,
        }
    }
}

/// Padding between the surface edge and the plot rectangle, leaving room for
/// axis labels and tick text.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// Inset from the top edge
    pub top: f64,
    /// Inset from the right edge
    pub right: f64,
    /// Inset from the bottom edge
    pub bottom: f64,
    /// Inset from the left edge
    pub left: f64,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 30.0,
            bottom: 50.0,
            left: 55.0,
        }
    }
}

/// The affine transform from economic `(quantity, price)` space to drawing
/// `(x, y)` space.
///
/// Quantity grows rightward and price grows upward, so `y` is inverted
/// relative to the surface's downward-growing axis. The transform is a pure
/// value-to-value function, cheap to recreate on every draw.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PlotTransformDto", into = "PlotTransformDto")
)]
pub struct PlotTransform {
    size: SurfaceSize,
    padding: Insets,
    max_q: f64,
    max_p: f64,
}

impl PlotTransform {
    /// Creates a transform, validating its geometry.
    ///
    /// The presentation layer is expected to reject nonsense before it gets
    /// here; this validation is the backstop that keeps `NaN` and negative
    /// extents out of every downstream computation.
    pub fn new(
        size: SurfaceSize,
        padding: Insets,
        max_q: f64,
        max_p: f64,
    ) -> Result<Self, PlotError> {
        Self::try_from(PlotTransformDto {
            size,
            padding,
            max_q,
            max_p,
        })
    }

    /// The width of the plot rectangle (surface width minus side insets).
    pub fn plot_width(&self) -> f64 {
        self.size.width - self.padding.left - self.padding.right
    }

    /// The height of the plot rectangle (surface height minus vertical insets).
    pub fn plot_height(&self) -> f64 {
        self.size.height - self.padding.top - self.padding.bottom
    }

    /// The quantity-axis maximum.
    pub fn max_q(&self) -> f64 {
        self.max_q
    }

    /// The price-axis maximum.
    pub fn max_p(&self) -> f64 {
        self.max_p
    }

    /// The padding insets.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// The logical surface size.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Maps an economic-space point to the drawing surface.
    ///
    /// `x = left + (q / max_q) · plot_width`;
    /// `y = top + (1 − p / max_p) · plot_height`.
    ///
    /// Out-of-range inputs map to points outside the plot rectangle; this
    /// function never clamps. Whether to clip is the caller's decision (the
    /// curve sampler breaks its polyline instead, see `sample_curve`).
    pub fn to_surface(&self, q: f64, p: f64) -> SurfacePoint {
        SurfacePoint {
            x: self.padding.left + (q / self.max_q) * self.plot_width(),
            y: self.padding.top + (1.0 - p / self.max_p) * self.plot_height(),
        }
    }

    /// The surface corner where both axes meet (the economic origin).
    pub fn origin(&self) -> SurfacePoint {
        self.to_surface(0.0, 0.0)
    }
}

impl Default for PlotTransform {
    fn default() -> Self {
        Self {
            size: SurfaceSize::default(),
            padding: Insets::default(),
            max_q: 12.0,
            max_p: 12.0,
        }
    }
}

/// DTO to ensure that we always validate when we deserialize from an
/// untrusted source.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct PlotTransformDto {
    /// Logical surface size
    pub size: SurfaceSize,
    /// Padding insets
    pub padding: Insets,
    /// Quantity-axis maximum
    pub max_q: f64,
    /// Price-axis maximum
    pub max_p: f64,
}

impl From<PlotTransform> for PlotTransformDto {
    fn from(value: PlotTransform) -> Self {
        Self {
            size: value.size,
            padding: value.padding,
            max_q: value.max_q,
            max_p: value.max_p,
        }
    }
}

impl TryFrom<PlotTransformDto> for PlotTransform {
    type Error = PlotError;

    fn try_from(value: PlotTransformDto) -> Result<Self, Self::Error> {
        let fields = [
            value.size.width,
            value.size.height,
            value.padding.top,
            value.padding.right,
            value.padding.bottom,
            value.padding.left,
            value.max_q,
            value.max_p,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(PlotError::NonFinite);
        }
        if value.max_q <= 0.0 || value.max_p <= 0.0 {
            return Err(PlotError::NonPositiveAxis);
        }
        let transform = Self {
            size: value.size,
            padding: value.padding,
            max_q: value.max_q,
            max_p: value.max_p,
        };
        if transform.plot_width() <= 0.0 || transform.plot_height() <= 0.0 {
            return Err(PlotError::DegeneratePlotArea);
        }
        Ok(transform)
    }
}

/// Errors that can occur when constructing a plot transform
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PlotError {
    /// Error when any geometry field is NaN or infinite
    #[error("Plot geometry must be finite")]
    NonFinite,
    /// Error when an axis maximum is zero or negative
    #[error("Axis maxima must be positive")]
    NonPositiveAxis,
    /// Error when the padding leaves no plot area
    #[error("Padding leaves no plot area")]
    DegeneratePlotArea,
}
