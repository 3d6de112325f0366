// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms plus slot layout for bars and candles.

/// Value Y coordinate (e.g., an amount).
pub type Value = f64;

/// Horizontal scale spreading point indices `0..n-1` evenly across `[left_px, right_px]`.
/// Spacing ignores label semantics: index 3 is always one step right of index 2.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl IndexScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    /// Pixel distance between neighbouring indices (0 when fewer than two points).
    pub fn step(&self) -> f32 {
        if self.count < 2 { return 0.0; }
        (self.right_px - self.left_px) / (self.count - 1) as f32
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + index as f32 * self.step()
    }
}

/// Vertical value scale mapping a data range to `[top_px, bottom_px]` (max at top).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    /// Linear scale; a degenerate range (all values equal) is widened to a span of 1.
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if !(s.vmax - s.vmin).is_finite() || (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    /// Build from the extremes of `values`. Empty input yields the unit range `[0, 1]`.
    pub fn fit<I>(top_px: f32, bottom_px: f32, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let (lo, hi) = min_max(values).unwrap_or((0.0, 1.0));
        Self::new_linear(top_px, bottom_px, lo, hi)
    }

    pub fn span(&self) -> Value {
        self.vmax - self.vmin
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = self.span().max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let h = (self.bottom_px - self.top_px).max(1e-6);
        self.vmin + ((self.bottom_px - py) / h) as f64 * self.span()
    }
}

/// Equal-width slots across a horizontal extent, each split into a mark and a gap.
///
/// `fill` is the share of the slot occupied by the mark (0.8 for bars, 0.6 for candles);
/// the remaining gap is split evenly on both sides.
#[derive(Clone, Copy, Debug)]
pub struct SlotLayout {
    pub left_px: f32,
    pub slot: f32,
    pub fill: f32,
}

impl SlotLayout {
    pub fn new(left_px: f32, right_px: f32, count: usize, fill: f32) -> Self {
        let slot = if count == 0 { 0.0 } else { (right_px - left_px).max(0.0) / count as f32 };
        Self { left_px, slot, fill: fill.clamp(0.0, 1.0) }
    }

    pub fn mark_width(&self) -> f32 { self.slot * self.fill }
    pub fn gap(&self) -> f32 { self.slot - self.mark_width() }

    /// Left edge of the mark in slot `i`.
    pub fn mark_left(&self, i: usize) -> f32 {
        self.left_px + i as f32 * self.slot + self.gap() * 0.5
    }

    /// Horizontal centre of slot `i`.
    pub fn center(&self, i: usize) -> f32 {
        self.left_px + (i as f32 + 0.5) * self.slot
    }
}

/// Minimum and maximum of the finite values in `values`, or `None` when there are none.
pub fn min_max<I>(values: I) -> Option<(Value, Value)>
where
    I: IntoIterator<Item = Value>,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}
