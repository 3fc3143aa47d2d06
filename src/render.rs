use crate::types::{Coords, Metrics, Workout, WorkoutKind};
use crate::utils::{format_fixed1, format_number};
use std::fmt;

/// Popup marker placed on the map for one workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub coords: Coords,
    pub kind: WorkoutKind,
    pub popup: String,
}

impl Marker {
    pub fn for_workout(w: &Workout) -> Self {
        Self {
            id: w.id.clone(),
            coords: w.coords,
            kind: w.kind(),
            popup: format!("{} {}", w.kind().icon(), w.description),
        }
    }

    /// Popup CSS class, e.g. `running-popup`.
    pub fn class_name(&self) -> String {
        format!("{}-popup", self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// One entry of the workout list, built from stored fields only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: String,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<Detail>,
}

impl ListEntry {
    pub fn for_workout(w: &Workout) -> Self {
        let kind = w.kind();
        let mut details = vec![
            Detail {
                icon: kind.icon(),
                value: format_number(w.distance),
                unit: "km",
            },
            Detail {
                icon: "⏱",
                value: format_number(w.duration),
                unit: "min",
            },
        ];

        match w.metrics {
            Metrics::Running { cadence, pace } => {
                details.push(Detail {
                    icon: "⚡️",
                    value: format_fixed1(pace),
                    unit: "min/km",
                });
                details.push(Detail {
                    icon: "🦶🏼",
                    value: format_number(cadence),
                    unit: "spm",
                });
            }
            Metrics::Cycling {
                elevation_gain,
                speed,
            } => {
                details.push(Detail {
                    icon: "⚡️",
                    value: format_fixed1(speed),
                    unit: "km/h",
                });
                details.push(Detail {
                    icon: "⛰",
                    value: format_number(elevation_gain),
                    unit: "m",
                });
            }
        }

        Self {
            id: w.id.clone(),
            kind,
            title: w.description.clone(),
            details,
        }
    }
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.id, self.title)?;
        for d in &self.details {
            write!(f, "\t{} {} {}", d.icon, d.value, d.unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn date() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 7, 0, 0).unwrap()
    }

    #[test]
    fn running_entry_shows_pace_and_cadence() {
        let w = Workout::running(Coords::new(1.0, 2.0), 5.0, 32.0, 150.0, date());
        let e = ListEntry::for_workout(&w);
        assert_eq!(e.title, "running on March 5");
        let values: Vec<_> = e.details.iter().map(|d| (d.value.as_str(), d.unit)).collect();
        assert_eq!(
            values,
            [("5", "km"), ("32", "min"), ("6.4", "min/km"), ("150", "spm")]
        );
    }

    #[test]
    fn cycling_entry_shows_speed_and_elevation() {
        let w = Workout::cycling(Coords::new(1.0, 2.0), 27.5, 95.0, 523.0, date());
        let e = ListEntry::for_workout(&w);
        let values: Vec<_> = e.details.iter().map(|d| (d.value.as_str(), d.unit)).collect();
        assert_eq!(
            values,
            [("27.5", "km"), ("95", "min"), ("17.4", "km/h"), ("523", "m")]
        );
    }

    #[test]
    fn non_finite_pace_renders_like_a_browser() {
        let w = Workout::running(Coords::new(1.0, 2.0), 0.0, 30.0, 150.0, date());
        assert_eq!(ListEntry::for_workout(&w).details[2].value, "Infinity");

        let w = Workout::running(Coords::new(1.0, 2.0), 0.0, 0.0, 150.0, date());
        assert_eq!(ListEntry::for_workout(&w).details[2].value, "NaN");
    }

    #[test]
    fn marker_popup_has_icon_and_description() {
        let w = Workout::cycling(Coords::new(1.0, 2.0), 10.0, 30.0, 5.0, date());
        let m = Marker::for_workout(&w);
        assert_eq!(m.popup, "🚴‍♀️ cycling on March 5");
        assert_eq!(m.class_name(), "cycling-popup");
        assert_eq!(m.coords, w.coords);
    }
}
