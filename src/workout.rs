use crate::types::{Coords, Metrics, Workout, WorkoutKind};
use chrono::{DateTime, Local};
use uuid::Uuid;

/// `"running on March 5"`. Month names are always English.
pub fn describe(kind: WorkoutKind, date: &DateTime<Local>) -> String {
    format!("{kind} on {}", date.format("%B %-d"))
}

/// Fresh identifier for a new workout.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Workout {
    /// Builds a workout of the given kind; `metric` is cadence for running and
    /// elevation gain for cycling.
    pub fn new(
        kind: WorkoutKind,
        coords: Coords,
        distance: f64,
        duration: f64,
        metric: f64,
        date: DateTime<Local>,
    ) -> Self {
        match kind {
            WorkoutKind::Running => Self::running(coords, distance, duration, metric, date),
            WorkoutKind::Cycling => Self::cycling(coords, distance, duration, metric, date),
        }
    }

    pub fn running(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
        date: DateTime<Local>,
    ) -> Self {
        let metrics = Metrics::Running {
            cadence,
            pace: duration / distance,
        };
        Self::build(coords, distance, duration, metrics, date)
    }

    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        date: DateTime<Local>,
    ) -> Self {
        let metrics = Metrics::Cycling {
            elevation_gain,
            speed: distance / (duration / 60.0),
        };
        Self::build(coords, distance, duration, metrics, date)
    }

    fn build(
        coords: Coords,
        distance: f64,
        duration: f64,
        metrics: Metrics,
        date: DateTime<Local>,
    ) -> Self {
        let description = describe(metrics.kind(), &date);
        Self {
            id: new_id(),
            date: Some(date),
            clicks: 0,
            coords,
            distance,
            duration,
            metrics,
            description,
        }
    }

    pub const fn kind(&self) -> WorkoutKind {
        self.metrics.kind()
    }

    pub const fn pace(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Running { pace, .. } => Some(pace),
            Metrics::Cycling { .. } => None,
        }
    }

    pub const fn speed(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Cycling { speed, .. } => Some(speed),
            Metrics::Running { .. } => None,
        }
    }

    pub const fn cadence(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Running { cadence, .. } => Some(cadence),
            Metrics::Cycling { .. } => None,
        }
    }

    pub const fn elevation_gain(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Cycling { elevation_gain, .. } => Some(elevation_gain),
            Metrics::Running { .. } => None,
        }
    }
}

impl Metrics {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}
