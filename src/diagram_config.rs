/// Figure-level settings for a diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramConfig {
    /// The width of the rendered figure in pixels.
    pub width: u32,
    /// The height of the rendered figure in pixels.
    pub height: u32,
    /// The title drawn above the plot.
    pub title: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        DiagramConfig {
            width: 1000,
            height: 1000,
            title: String::from("Phasor Diagram"),
        }
    }
}
