use crate::host::Ui;
use crate::render::{ListEntry, Marker};
use crate::types::{Coords, WorkoutKind};
use std::io::Write;

/// Prints the map, list and alerts as lines of text.
pub struct TerminalUi<W: Write> {
    out: W,
    alerts: Vec<String>,
}

impl<W: Write> TerminalUi<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            alerts: Vec::new(),
        }
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}") {
            tracing::warn!(err = %e, "terminal write failed");
        }
    }
}

impl<W: Write> Ui for TerminalUi<W> {
    fn alert(&mut self, message: &str) {
        tracing::error!("{message}");
        self.alerts.push(message.to_string());
    }

    fn load_map(&mut self, center: Coords, zoom: u8) {
        self.line(format_args!("map\t{center}\tzoom={zoom}"));
    }

    fn set_view(&mut self, center: Coords, zoom: u8, animate: bool) {
        let mode = if animate { "pan" } else { "jump" };
        self.line(format_args!("view\t{center}\tzoom={zoom}\t{mode}"));
    }

    fn add_marker(&mut self, marker: &Marker) {
        let class = marker.class_name();
        self.line(format_args!(
            "marker\t{}\t{}\t{class}\t{}",
            marker.id, marker.coords, marker.popup
        ));
    }

    fn render_list_entry(&mut self, entry: &ListEntry) {
        self.line(format_args!("workout\t{entry}"));
    }

    fn show_form(&mut self) {
        crate::dlog!("form shown");
    }

    fn hide_form(&mut self) {
        crate::dlog!("form hidden");
    }

    fn show_metric_field(&mut self, kind: WorkoutKind) {
        let field = match kind {
            WorkoutKind::Running => "cadence",
            WorkoutKind::Cycling => "elevation",
        };
        crate::dlog!("form field={field}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Workout;
    use chrono::{Local, TimeZone};

    #[test]
    fn prints_markers_entries_and_views() {
        let date = Local.with_ymd_and_hms(2024, 3, 5, 7, 0, 0).unwrap();
        let mut w = Workout::running(Coords::new(1.5, -2.0), 5.0, 30.0, 150.0, date);
        w.id = "abc".to_string();

        let mut ui = TerminalUi::new(Vec::new());
        ui.load_map(Coords::new(1.0, 2.0), 15);
        ui.add_marker(&Marker::for_workout(&w));
        ui.render_list_entry(&ListEntry::for_workout(&w));
        ui.set_view(w.coords, 15, true);
        ui.alert("nope");

        let text = String::from_utf8(ui.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "map\t1,2\tzoom=15");
        assert!(lines[1].starts_with("marker\tabc\t1.5,-2\trunning-popup\t"));
        assert!(lines[1].ends_with("running on March 5"));
        assert!(lines[2].starts_with("workout\tabc\trunning on March 5\t"));
        assert!(lines[2].contains("6.0 min/km"));
        assert_eq!(lines[3], "view\t1.5,-2\tzoom=15\tpan");
    }

    #[test]
    fn alerts_are_recorded_not_printed() {
        let mut ui = TerminalUi::new(Vec::new());
        ui.alert("Inputs have to be positive numbers");
        assert_eq!(ui.alerts(), ["Inputs have to be positive numbers"]);
        assert!(ui.into_inner().is_empty());
    }
}
