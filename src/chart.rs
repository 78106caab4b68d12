//! Geometry and timing for the symptom trends chart.
//!
//! Everything here is plain math over the static week of sample data so the
//! component only has to turn numbers into SVG.

use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymptomDataPoint {
    pub day: &'static str,
    pub pain: f64,
    pub bloating: f64,
    pub fatigue: f64,
}

pub const SYMPTOM_DATA: [SymptomDataPoint; 7] = [
    SymptomDataPoint { day: "Mon", pain: 2.0, bloating: 1.0, fatigue: 4.0 },
    SymptomDataPoint { day: "Tue", pain: 1.0, bloating: 2.0, fatigue: 3.0 },
    SymptomDataPoint { day: "Wed", pain: 4.0, bloating: 2.0, fatigue: 3.0 },
    SymptomDataPoint { day: "Thu", pain: 3.0, bloating: 3.0, fatigue: 2.0 },
    SymptomDataPoint { day: "Fri", pain: 1.0, bloating: 4.0, fatigue: 2.0 },
    SymptomDataPoint { day: "Sat", pain: 3.0, bloating: 2.0, fatigue: 1.0 },
    SymptomDataPoint { day: "Sun", pain: 4.0, bloating: 1.0, fatigue: 4.0 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    Pain,
    Bloating,
    Fatigue,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Pain, Series::Bloating, Series::Fatigue];

    pub fn label(self) -> &'static str {
        match self {
            Series::Pain => "Pain",
            Series::Bloating => "Bloating",
            Series::Fatigue => "Fatigue",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Series::Pain => "#ef4444",
            Series::Bloating => "#f59e0b",
            Series::Fatigue => "#6366f1",
        }
    }

    pub fn value(self, point: &SymptomDataPoint) -> f64 {
        match self {
            Series::Pain => point.pain,
            Series::Bloating => point.bloating,
            Series::Fatigue => point.fatigue,
        }
    }
}

/// Logical SVG canvas. Values map linearly (inverted) into the padded area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub max_value: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 500.0,
            padding: 80.0,
            max_value: 5.0,
        }
    }
}

impl ChartGeometry {
    /// Baseline every point rises from.
    pub fn floor_y(&self) -> f64 {
        self.height - self.padding
    }

    pub fn ceiling_y(&self) -> f64 {
        self.padding
    }

    pub fn x_position(&self, index: usize, count: usize) -> f64 {
        if count < 2 {
            return self.padding;
        }
        let spacing = (self.width - self.padding * 2.0) / (count - 1) as f64;
        self.padding + index as f64 * spacing
    }

    pub fn y_position(&self, value: f64, progress: f64) -> f64 {
        let start = self.floor_y();
        let target = start - (value / self.max_value) * (start - self.ceiling_y());
        start + (target - start) * progress
    }

    /// `M x y L x y ...` through every point in index order.
    pub fn series_path(&self, data: &[SymptomDataPoint], series: Series, progress: &[f64]) -> String {
        let mut path = String::new();
        for (i, point) in data.iter().enumerate() {
            let p = progress.get(i).copied().unwrap_or(0.0);
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(
                path,
                "{} {} {}",
                cmd,
                self.x_position(i, data.len()),
                self.y_position(series.value(point), p)
            );
        }
        path
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Staggered left-to-right reveal: point `i` starts `i * point_delay_ms`
/// after the first one and all of them finish at `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTimeline {
    pub duration_ms: f64,
    pub point_delay_ms: f64,
    pub points: usize,
}

impl RevealTimeline {
    pub fn new(points: usize) -> Self {
        Self {
            duration_ms: 3000.0,
            point_delay_ms: 150.0,
            points,
        }
    }

    fn point_span_ms(&self) -> f64 {
        self.duration_ms - self.points.saturating_sub(1) as f64 * self.point_delay_ms
    }

    pub fn point_progress(&self, index: usize, elapsed_ms: f64) -> f64 {
        let span = self.point_span_ms();
        let local = if span <= 0.0 {
            1.0
        } else {
            let delay = index as f64 * self.point_delay_ms;
            ((elapsed_ms - delay) / span).clamp(0.0, 1.0)
        };
        ease_in_out_cubic(local)
    }

    pub fn progress_at(&self, elapsed_ms: f64) -> Vec<f64> {
        (0..self.points)
            .map(|i| self.point_progress(i, elapsed_ms))
            .collect()
    }

    pub fn is_complete(progress: &[f64]) -> bool {
        progress.iter().all(|p| *p >= 1.0)
    }
}

/// Legend fades in with the furthest-along point.
pub fn legend_opacity(progress: &[f64]) -> f64 {
    progress.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_pain_rises_from_floor_to_target() {
        let geometry = ChartGeometry::default();
        let sunday = SYMPTOM_DATA[6];
        assert_eq!(sunday.day, "Sun");

        let floor = geometry.floor_y();
        let ceiling = geometry.ceiling_y();
        assert_eq!(geometry.y_position(sunday.pain, 0.0), floor);
        let expected = floor - (4.0 / 5.0) * (floor - ceiling);
        assert!((geometry.y_position(sunday.pain, 1.0) - expected).abs() < 1e-9);
        assert!((expected - 148.0).abs() < 1e-9);
    }

    #[test]
    fn x_positions_span_padded_width() {
        let geometry = ChartGeometry::default();
        assert_eq!(geometry.x_position(0, 7), 80.0);
        assert_eq!(geometry.x_position(6, 7), 820.0);
        assert_eq!(geometry.x_position(3, 7), 450.0);
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn progress_is_monotonic_and_settles_at_one() {
        let timeline = RevealTimeline::new(SYMPTOM_DATA.len());
        let mut previous = timeline.progress_at(0.0);
        assert!(previous.iter().all(|p| *p == 0.0));

        let mut elapsed = 0.0;
        while elapsed <= 4000.0 {
            let current = timeline.progress_at(elapsed);
            for (before, now) in previous.iter().zip(&current) {
                assert!(now >= before);
            }
            previous = current;
            elapsed += 16.7;
        }

        assert!(RevealTimeline::is_complete(&timeline.progress_at(3000.0)));
        assert!(timeline.progress_at(5000.0).iter().all(|p| *p == 1.0));
    }

    #[test]
    fn earlier_points_lead_later_ones() {
        let timeline = RevealTimeline::new(SYMPTOM_DATA.len());
        let progress = timeline.progress_at(1200.0);
        for pair in progress.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert!(progress[0] > progress[6]);
        assert!(!RevealTimeline::is_complete(&progress));
    }

    #[test]
    fn path_connects_points_with_straight_segments() {
        let geometry = ChartGeometry::default();
        let progress = vec![0.0; SYMPTOM_DATA.len()];
        let path = geometry.series_path(&SYMPTOM_DATA, Series::Pain, &progress);
        assert!(path.starts_with("M 80 420"));
        assert_eq!(path.matches(" L ").count(), SYMPTOM_DATA.len() - 1);
        assert!(path.ends_with("L 820 420"));
    }

    #[test]
    fn legend_follows_leading_point() {
        assert_eq!(legend_opacity(&[0.0, 0.0]), 0.0);
        assert_eq!(legend_opacity(&[0.4, 0.1, 0.0]), 0.4);
    }
}
