//! Inline SVG charts for dashboards

pub mod bar_chart;
pub mod geometry;
pub mod line_chart;
pub mod pie_chart;

pub use bar_chart::{BarChart, BarOrientation};
pub use line_chart::LineChart;
pub use pie_chart::PieChart;

/// One data point as charts see it
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Axis / legend label
    pub label: String,
    pub value: f64,
    /// Hover text (SVG `<title>`)
    pub tooltip: String,
}

/// Plasma-like sequential palette
pub const PLASMA: &[&str] = &[
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Viridis-like sequential palette
pub const VIRIDIS: &[&str] = &[
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

/// Qualitative palette for pie slices
pub const CATEGORICAL: &[&str] = &[
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

pub const LINE_COLOR: &str = "#636efa";

/// Цвет для i-го элемента; палитра растягивается на `count` элементов
pub fn palette_color(palette: &'static [&'static str], index: usize, count: usize) -> &'static str {
    if palette.is_empty() {
        return LINE_COLOR;
    }
    if count <= 1 {
        return palette[0];
    }
    let position = index * (palette.len() - 1) / (count - 1);
    palette[position.min(palette.len() - 1)]
}
