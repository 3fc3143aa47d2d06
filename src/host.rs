//! Capabilities the controller borrows from whatever is hosting it: a map
//! widget, a form, a list, blocking alerts and a position source.

use crate::error::GeolocationError;
use crate::render::{ListEntry, Marker};
use crate::types::{Coords, WorkoutKind};

pub trait Ui {
    /// Blocking, user-facing message.
    fn alert(&mut self, message: &str);

    fn load_map(&mut self, center: Coords, zoom: u8);
    /// Recenters the map; `animate` pans there instead of jumping.
    fn set_view(&mut self, center: Coords, zoom: u8, animate: bool);
    fn add_marker(&mut self, marker: &Marker);

    fn render_list_entry(&mut self, entry: &ListEntry);

    fn show_form(&mut self);
    /// Hides the form and clears its fields.
    fn hide_form(&mut self);
    /// Shows the cadence field for running, the elevation field for cycling.
    fn show_metric_field(&mut self, kind: WorkoutKind);
}

pub trait Geolocation {
    fn current_position(&mut self) -> Result<Coords, GeolocationError>;
}

/// Always reports the same position, or fails with `Unavailable` when unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition(pub Option<Coords>);

impl Geolocation for FixedPosition {
    fn current_position(&mut self) -> Result<Coords, GeolocationError> {
        self.0.ok_or(GeolocationError::Unavailable)
    }
}
