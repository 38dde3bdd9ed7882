/// Settings recognized when rendering a diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Whether to draw the background grid.
    pub grid: bool,
    /// Whether to force the X and Y axes to the same scale.
    pub equal_aspect: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            grid: true,
            equal_aspect: true,
        }
    }
}
