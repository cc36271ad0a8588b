//! SVG rendering of simulation frames.
//!
//! Each frame becomes a standalone document: a square-aspect plot of the
//! arena with a grid, both circle outlines, and a red dot at every solved
//! point.
//!
//! ```
//! use circlecross::render::render_frame;
//! use circlecross::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default();
//! let mut sim = Simulation::with_seed(config.clone(), 1).unwrap();
//! let frame = sim.step().unwrap();
//!
//! let svg = render_frame(&frame, &config);
//! assert!(svg.contains("Step=0"));
//! ```

mod svg;

pub use svg::SvgCanvas;

use crate::config::SimulationConfig;
use crate::primitives::Point2;
use crate::simulation::Frame;

const TITLE: &str = "Crossing points of circles";
const CLIP_ID: &str = "plot-area";
const MAX_GRID_LINES: usize = 1000;

/// Page layout for rendered frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Total page width in pixels; the height follows the arena's aspect.
    pub width_px: f64,
    /// Blank border around the plot for title and tick labels.
    pub margin_px: f64,
    /// World-space spacing of grid lines. A non-positive step, or one that
    /// would need more than 1000 lines per axis, disables the grid.
    pub grid_step: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_px: 640.0,
            margin_px: 48.0,
            grid_step: 2.5,
        }
    }
}

/// Maps world coordinates (y up) onto the page (y down).
#[derive(Debug, Clone, Copy)]
struct Viewport {
    x_min: f64,
    y_max: f64,
    scale: f64,
    margin: f64,
}

impl Viewport {
    fn to_screen(self, p: Point2<f64>) -> (f64, f64) {
        (
            self.margin + (p.x - self.x_min) * self.scale,
            self.margin + (self.y_max - p.y) * self.scale,
        )
    }

    fn length(self, world: f64) -> f64 {
        world * self.scale
    }
}

/// Renders `frame` with the default [`RenderOptions`].
pub fn render_frame(frame: &Frame, config: &SimulationConfig) -> String {
    render_frame_with(frame, config, &RenderOptions::default())
}

/// Renders `frame` onto a page laid out by `options`.
pub fn render_frame_with(frame: &Frame, config: &SimulationConfig, options: &RenderOptions) -> String {
    let world_w = config.x_max - config.x_min;
    let world_h = config.y_max - config.y_min;
    let margin = options.margin_px;
    let scale = (options.width_px - 2.0 * margin).max(1.0) / world_w;
    let plot_w = world_w * scale;
    let plot_h = world_h * scale;

    let view = Viewport {
        x_min: config.x_min,
        y_max: config.y_max,
        scale,
        margin,
    };

    let mut svg = SvgCanvas::new(options.width_px, plot_h + 2.0 * margin);
    svg.text(options.width_px / 2.0, margin * 0.5, TITLE, 16.0, "#222222", "middle");

    if options.grid_step > 0.0 {
        draw_grid(&mut svg, config, options.grid_step, view);
    }
    svg.rect(margin, margin, plot_w, plot_h, "none", "#444444", 1.0);
    svg.text(margin + plot_w / 2.0, plot_h + margin * 1.85, "x", 13.0, "#222222", "middle");
    svg.text(margin * 0.25, margin + plot_h / 2.0, "y", 13.0, "#222222", "middle");

    svg.clip_rect(CLIP_ID, margin, margin, plot_w, plot_h);
    svg.group_start(CLIP_ID);
    for circle in &frame.circles {
        let (cx, cy) = view.to_screen(circle.center);
        svg.circle(cx, cy, view.length(circle.radius), "none", "#1f77b4", 1.5);
    }
    let marker = view.length(config.marker_radius());
    for p in frame.intersection.points.iter() {
        let (px, py) = view.to_screen(p);
        svg.circle(px, py, marker, "red", "none", 0.0);
    }
    svg.group_end();

    let (lx, ly) = view.to_screen(Point2::new(config.x_min, config.y_max - 0.05 * world_h));
    svg.text(lx + 4.0, ly, &format!("Step={}", frame.step), 12.0, "#222222", "start");
    svg.text(
        lx + 4.0,
        ly + 16.0,
        frame.intersection.relationship.label(),
        12.0,
        "#666666",
        "start",
    );

    svg.finish()
}

fn draw_grid(svg: &mut SvgCanvas, config: &SimulationConfig, step: f64, view: Viewport) {
    for x in grid_lines(config.x_min, config.x_max, step) {
        let (sx, top) = view.to_screen(Point2::new(x, config.y_max));
        let (_, bottom) = view.to_screen(Point2::new(x, config.y_min));
        svg.line(sx, top, sx, bottom, "#dddddd", 1.0);
        svg.text(sx, bottom + 14.0, &tick_label(x), 10.0, "#444444", "middle");
    }

    for y in grid_lines(config.y_min, config.y_max, step) {
        let (left, sy) = view.to_screen(Point2::new(config.x_min, y));
        let (right, _) = view.to_screen(Point2::new(config.x_max, y));
        svg.line(left, sy, right, sy, "#dddddd", 1.0);
        svg.text(left - 4.0, sy + 3.5, &tick_label(y), 10.0, "#444444", "end");
    }
}

/// Multiples of `step` within `[lo, hi]`.
///
/// Empty when the axis would need more than [`MAX_GRID_LINES`] lines.
fn grid_lines(lo: f64, hi: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (lo / step).ceil() * step;
    let span = (hi - first) / step + 1e-9;
    let count = if span.is_finite() && span >= 0.0 && span < MAX_GRID_LINES as f64 {
        span.floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| first + i as f64 * step)
}

fn tick_label(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}
