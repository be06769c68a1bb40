use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use crate::constants::*;
use crate::engine::{EngineInput, EngineResult};
use crate::error::EngineError;
use crate::metrics::Metrics;
use crate::types::*;

/// Which vector an arrow draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorRole {
    FirstOperand,
    SecondOperand,
    Sum,
}

/// Arrow from `tail` to `tail + vector`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrow {
    pub role: VectorRole,
    pub tail: Vector2D,
    pub vector: Vector2D,
    pub magnitude: f64,
    pub label: String,
}

impl Arrow {
    pub fn tip(&self) -> Vector2D {
        self.tail + self.vector
    }
}

/// Dashed side of the parallelogram. `parallel_to` names the operand whose
/// displacement it repeats; `delta` is that operand, copied, not derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideSegment {
    pub parallel_to: VectorRole,
    pub start: Vector2D,
    pub delta: Vector2D,
}

impl GuideSegment {
    pub fn end(&self) -> Vector2D {
        self.start + self.delta
    }
}

/// Reference line through the origin spanning the plot window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLine {
    pub start: Vector2D,
    pub end: Vector2D,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl PlotBounds {
    pub fn symmetric(bound: f64) -> Self {
        Self {
            xmin: -bound,
            xmax: bound,
            ymin: -bound,
            ymax: bound,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// The x and y axes, clipped to the window.
    pub fn axes(&self) -> [AxisLine; 2] {
        [
            AxisLine {
                start: vector2d(self.xmin, 0.0),
                end: vector2d(self.xmax, 0.0),
            },
            AxisLine {
                start: vector2d(0.0, self.ymin),
                end: vector2d(0.0, self.ymax),
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Half-width of the square plot window.
    pub bound: f64,
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            bound: PLOT_BOUND,
            show_grid: true,
        }
    }
}

/// Everything needed to draw one computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub input: EngineInput,
    pub result: EngineResult,
    pub metrics: Metrics,
    pub arrows: [Arrow; 3],
    pub guides: [GuideSegment; 2],
    pub axes: [AxisLine; 2],
    pub bounds: PlotBounds,
    /// Both axes share one scale so angles are drawn undistorted.
    pub equal_aspect: bool,
    pub show_grid: bool,
    pub grid_step: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Scene {
    /// Runs the engine on `input` and lays out its primitives. Labels and
    /// arrow lengths both come from the same computation.
    pub fn new(input: EngineInput, config: &PlotConfig) -> Result<Self, EngineError> {
        let result = input.compute()?;
        let origin = Vector2D::zeros();
        let magnitude1 = result.v1.norm();
        let magnitude2 = result.v2.norm();

        let arrows = [
            Arrow {
                role: VectorRole::FirstOperand,
                tail: origin,
                vector: result.v1,
                magnitude: magnitude1,
                label: format!("V1 ({magnitude1:.1})"),
            },
            Arrow {
                role: VectorRole::SecondOperand,
                tail: origin,
                vector: result.v2,
                magnitude: magnitude2,
                label: format!("V2 ({magnitude2:.1})"),
            },
            Arrow {
                role: VectorRole::Sum,
                tail: origin,
                vector: result.resultant,
                magnitude: result.resultant_magnitude,
                label: format!("Resultant ({:.2})", result.resultant_magnitude),
            },
        ];

        let guides = [
            GuideSegment {
                parallel_to: VectorRole::SecondOperand,
                start: result.v1,
                delta: result.v2,
            },
            GuideSegment {
                parallel_to: VectorRole::FirstOperand,
                start: result.v2,
                delta: result.v1,
            },
        ];

        let bounds = PlotBounds::symmetric(config.bound);

        Ok(Self {
            input,
            result,
            metrics: Metrics::from_result(&result),
            arrows,
            guides,
            axes: bounds.axes(),
            bounds,
            equal_aspect: true,
            show_grid: config.show_grid,
            grid_step: PLOT_GRID_STEP,
            title: PLOT_TITLE.to_string(),
            x_label: PLOT_X_LABEL.to_string(),
            y_label: PLOT_Y_LABEL.to_string(),
        })
    }

    pub fn arrow(&self, role: VectorRole) -> &Arrow {
        match role {
            VectorRole::FirstOperand => &self.arrows[0],
            VectorRole::SecondOperand => &self.arrows[1],
            VectorRole::Sum => &self.arrows[2],
        }
    }

    /// Grid line positions along one axis, from the lower bound to the upper.
    pub fn grid_ticks(&self) -> Vec<f64> {
        let first = (self.bounds.xmin / self.grid_step).ceil() as i64;
        let last = (self.bounds.xmax / self.grid_step).floor() as i64;
        (first..=last).map(|i| i as f64 * self.grid_step).collect()
    }

    pub fn write_json<W: Write>(&self, writer: W) -> io::Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
