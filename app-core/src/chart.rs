//! Renderer-agnostic chart descriptions. A reducer produces a `ChartSpec`,
//! the rendering layer decides how to draw it; the two never meet directly.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Declarative description of one chart: its type, title, axis bindings and
/// data series. Produced fresh on every reducer invocation, never cached by
/// the producer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChartSpec {
    Pie {
        title: String,
        slices: Vec<PieSlice>,
    },
    Scatter {
        title: String,
        x_label: String,
        y_label: String,
        points: Vec<ScatterPoint>,
    },
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie { title, .. } => title,
            ChartSpec::Scatter { title, .. } => title,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// One scatter point; `category` selects the color group at render time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub category: String,
}
