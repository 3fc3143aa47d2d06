//! Application controller.
//!
//! Holds the workout collection and turns host events (position fix, map
//! click, form submit, kind toggle, list click) into UI calls and storage
//! writes. Each handler runs to completion before the next one starts.

use crate::dlog;
use crate::error::{GeolocationError, InputError};
use crate::host::{Geolocation, Ui};
use crate::mirror;
use crate::render::{ListEntry, Marker};
use crate::storage::Storage;
use crate::types::{Coords, Workout, WorkoutKind};
use crate::utils::parse_number;
use anyhow::Result;
use chrono::{DateTime, Local};

pub const DEFAULT_STORAGE_KEY: &str = "workouts";
pub const DEFAULT_ZOOM: u8 = 15;
pub const LOCATION_ALERT: &str = "Oopsy, unable to get your location";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub zoom: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Raw text of the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl FormInput {
    pub fn new(kind: WorkoutKind) -> Self {
        Self {
            kind,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }

    /// Value of the field that belongs to the selected kind.
    fn metric(&self) -> &str {
        match self.kind {
            WorkoutKind::Running => &self.cadence,
            WorkoutKind::Cycling => &self.elevation,
        }
    }
}

/// Every value must be finite. Running also needs all three positive;
/// cycling only checks distance and duration, so elevation gain may be zero
/// or negative.
pub fn validate(
    kind: WorkoutKind,
    distance: f64,
    duration: f64,
    metric: f64,
) -> Result<(), InputError> {
    if ![distance, duration, metric].iter().all(|v| v.is_finite()) {
        return Err(InputError::NotFinite);
    }
    let positive = match kind {
        WorkoutKind::Running => [distance, duration, metric].iter().all(|&v| v > 0.0),
        WorkoutKind::Cycling => distance > 0.0 && duration > 0.0,
    };
    if !positive {
        return Err(InputError::NotPositive);
    }
    Ok(())
}

pub struct App<S: Storage, U: Ui> {
    storage: S,
    ui: U,
    config: AppConfig,
    workouts: Vec<Workout>,
    map_loaded: bool,
    pending_click: Option<Coords>,
    clock: fn() -> DateTime<Local>,
}

impl<S: Storage, U: Ui> App<S, U> {
    pub fn new(storage: S, ui: U, config: AppConfig) -> Self {
        Self {
            storage,
            ui,
            config,
            workouts: Vec::new(),
            map_loaded: false,
            pending_click: None,
            clock: Local::now,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// Restores saved workouts into the list, then asks for the position.
    pub fn start<G: Geolocation + ?Sized>(&mut self, geolocation: &mut G) {
        self.restore();
        let position = geolocation.current_position();
        self.on_position(position);
    }

    /// Loads the collection from storage and renders it into the list only;
    /// markers wait for the map.
    pub fn restore(&mut self) {
        self.workouts = mirror::restore(&self.storage, &self.config.storage_key);
        tracing::info!(workouts = self.workouts.len(), "restored workouts");
        for w in &self.workouts {
            self.ui.render_list_entry(&ListEntry::for_workout(w));
        }
    }

    pub fn on_position(&mut self, position: Result<Coords, GeolocationError>) {
        match position {
            Ok(center) => self.load_map(center),
            Err(e) => {
                tracing::warn!(err = %e, "no position; map stays unloaded");
                self.ui.alert(LOCATION_ALERT);
            }
        }
    }

    fn load_map(&mut self, center: Coords) {
        tracing::info!(center = %center, zoom = self.config.zoom, "loading map");
        self.ui.load_map(center, self.config.zoom);
        self.map_loaded = true;
        for w in &self.workouts {
            self.ui.add_marker(&Marker::for_workout(w));
        }
    }

    pub fn map_click(&mut self, coords: Coords) {
        if !self.map_loaded {
            dlog!("map_click ignored; map not loaded");
            return;
        }
        self.pending_click = Some(coords);
        self.ui.show_form();
    }

    pub fn kind_changed(&mut self, kind: WorkoutKind) {
        self.ui.show_metric_field(kind);
    }

    /// Returns the new workout, or `None` when nothing was created.
    ///
    /// # Errors
    /// Only when the storage write fails; the workout is already in the
    /// collection and on screen at that point.
    pub fn submit(&mut self, form: &FormInput) -> Result<Option<&Workout>> {
        let Some(coords) = self.pending_click else {
            dlog!("submit ignored; no map click");
            return Ok(None);
        };

        let distance = parse_number(&form.distance);
        let duration = parse_number(&form.duration);
        let metric = parse_number(form.metric());

        if let Err(e) = validate(form.kind, distance, duration, metric) {
            dlog!(
                "submit rejected kind={} distance={distance} duration={duration} metric={metric}: {e:?}",
                form.kind
            );
            self.ui.alert(&e.to_string());
            return Ok(None);
        }

        let workout = Workout::new(form.kind, coords, distance, duration, metric, (self.clock)());
        tracing::info!(id = %workout.id, kind = %workout.kind(), "workout created");

        self.ui.add_marker(&Marker::for_workout(&workout));
        self.ui.render_list_entry(&ListEntry::for_workout(&workout));
        self.workouts.push(workout);

        self.ui.hide_form();
        self.pending_click = None;

        mirror::persist(&mut self.storage, &self.config.storage_key, &self.workouts)?;
        Ok(self.workouts.last())
    }

    /// Recenters the map on the workout with `id`. Returns whether it moved.
    pub fn list_click(&mut self, id: &str) -> bool {
        if !self.map_loaded {
            dlog!("list_click ignored; map not loaded");
            return false;
        }
        let Some(w) = self.workouts.iter().find(|w| w.id == id) else {
            dlog!("list_click unknown id={id}");
            return false;
        };
        self.ui.set_view(w.coords, self.config.zoom, true);
        true
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub const fn map_loaded(&self) -> bool {
        self.map_loaded
    }

    pub const fn ui(&self) -> &U {
        &self.ui
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
