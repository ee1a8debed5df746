//! Bar chart for the four tariff buckets, drawn as inline SVG.
//!
//! The chart is plain data ([`BarChart`]) plus a layout pass
//! ([`BarChart::layout`]) so the view only maps geometry onto `rect`/`text`
//! elements. [`ChartSlot`] owns the one live instance a canvas may carry.

pub const BUCKET_COLORS: [&str; 4] = [
    "rgba(231, 76, 60, 0.7)",
    "rgba(243, 156, 18, 0.7)",
    "rgba(52, 152, 219, 0.7)",
    "rgba(46, 204, 113, 0.7)",
];

pub const VIEW_WIDTH: f64 = 480.0;
pub const VIEW_HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 32.0;
const BAR_FILL: f64 = 0.6;
const TARGET_TICKS: f64 = 4.0;
const MAX_TICKS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Instance number handed out by the owning slot.
    pub id: u64,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
    pub y_max: f64,
    /// Baseline of the plot area (value zero).
    pub baseline: f64,
    pub plot_left: f64,
    pub plot_right: f64,
}

impl BarChart {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        let colors = (0..values.len())
            .map(|index| BUCKET_COLORS[index % BUCKET_COLORS.len()])
            .collect();
        Self {
            id: 0,
            labels,
            values,
            colors,
        }
    }

    /// Axis top rounded up to a 1/2/5 step; the axis always starts at zero.
    /// Near `f64::MAX` the rounding would overflow, so the raw maximum is kept.
    pub fn y_max(&self) -> f64 {
        let (max, step) = self.scale();
        let top = (max / step).ceil().max(1.0) * step;
        if top.is_finite() {
            top
        } else {
            max
        }
    }

    fn scale(&self) -> (f64, f64) {
        let max = self
            .values
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return (1.0, 1.0);
        }
        (max, nice_step(max / TARGET_TICKS))
    }

    pub fn layout(&self) -> ChartLayout {
        let (_, step) = self.scale();
        let y_max = self.y_max();
        let plot_width = VIEW_WIDTH - PAD_LEFT - PAD_RIGHT;
        let plot_height = VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM;
        let baseline = PAD_TOP + plot_height;
        let slot = if self.values.is_empty() {
            plot_width
        } else {
            plot_width / self.values.len() as f64
        };

        let bars = self
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let clamped = if value.is_finite() { value.max(0.0) } else { 0.0 };
                let height = clamped / y_max * plot_height;
                let width = slot * BAR_FILL;
                Bar {
                    label: self.labels.get(index).cloned().unwrap_or_default(),
                    value,
                    color: self.colors.get(index).copied().unwrap_or(BUCKET_COLORS[0]),
                    x: PAD_LEFT + slot * index as f64 + (slot - width) / 2.0,
                    y: baseline - height,
                    width,
                    height,
                }
            })
            .collect();

        let steps = ((y_max / step).round() as usize).min(MAX_TICKS);
        let ticks = (0..=steps)
            .map(|n| {
                let value = step * n as f64;
                Tick {
                    value,
                    y: baseline - value / y_max * plot_height,
                }
            })
            .collect();

        ChartLayout {
            bars,
            ticks,
            y_max,
            baseline,
            plot_left: PAD_LEFT,
            plot_right: VIEW_WIDTH - PAD_RIGHT,
        }
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10_f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Holds at most one chart. Rendering destroys the previous instance before
/// the new one is attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSlot {
    current: Option<BarChart>,
    created: u64,
    destroyed: u64,
}

impl ChartSlot {
    pub fn render(&mut self, mut chart: BarChart) -> &BarChart {
        self.destroy();
        self.created += 1;
        chart.id = self.created;
        tracing::debug!(instance = chart.id, "chart created");
        self.current.insert(chart)
    }

    pub fn destroy(&mut self) {
        if let Some(previous) = self.current.take() {
            self.destroyed += 1;
            tracing::debug!(instance = previous.id, "chart destroyed");
        }
    }

    pub fn current(&self) -> Option<&BarChart> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn live_instances(&self) -> u64 {
        self.created - self.destroyed
    }

    #[cfg(test)]
    pub(crate) fn created(&self) -> u64 {
        self.created
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(values: [f64; 4]) -> BarChart {
        BarChart::new(
            ["a", "b", "c", "d"].map(String::from).to_vec(),
            values.to_vec(),
        )
    }

    #[test]
    fn axis_rounds_up_to_a_readable_step() {
        let layout = chart([120.0, 300.0, 200.0, 150.0]).layout();
        assert_eq!(layout.y_max, 300.0);
        let ticks: Vec<f64> = layout.ticks.iter().map(|tick| tick.value).collect();
        assert_eq!(ticks, vec![0.0, 100.0, 200.0, 300.0]);

        assert_eq!(chart([0.0, 0.0, 0.0, 730.0]).y_max(), 800.0);
    }

    #[test]
    fn all_zero_values_still_have_an_axis() {
        let layout = chart([0.0; 4]).layout();
        assert_eq!(layout.y_max, 1.0);
        assert!(layout.bars.iter().all(|bar| bar.height == 0.0));
    }

    #[test]
    fn tallest_bar_fills_to_the_axis_top_and_bars_keep_their_colours() {
        let layout = chart([120.0, 300.0, 200.0, 150.0]).layout();
        let tallest = &layout.bars[1];
        assert!((tallest.y - PAD_TOP).abs() < 1e-9);
        assert!((tallest.y + tallest.height - layout.baseline).abs() < 1e-9);
        let colors: Vec<_> = layout.bars.iter().map(|bar| bar.color).collect();
        assert_eq!(colors, BUCKET_COLORS.to_vec());
        assert!(layout.bars.windows(2).all(|pair| pair[0].x < pair[1].x));
    }

    #[test]
    fn huge_values_keep_a_finite_bounded_axis() {
        for top in [1.7e308, f64::MAX] {
            let layout = BarChart::new(vec!["a".into()], vec![top]).layout();
            assert!(layout.y_max.is_finite());
            assert!(layout.y_max >= top);
            assert!(layout.ticks.len() <= MAX_TICKS + 1);
            assert!(layout.bars[0].height.is_finite());
        }
    }

    #[test]
    fn slot_never_holds_more_than_one_instance() {
        let mut slot = ChartSlot::default();
        assert_eq!(slot.live_instances(), 0);

        for _ in 0..3 {
            slot.render(chart([1.0, 2.0, 3.0, 4.0]));
            assert_eq!(slot.live_instances(), 1);
        }

        assert_eq!(slot.created(), 3);
        assert_eq!(slot.destroyed, 2);
        assert_eq!(slot.current().map(|chart| chart.id), Some(3));

        slot.destroy();
        assert_eq!(slot.live_instances(), 0);
        assert!(slot.current().is_none());
    }
}
