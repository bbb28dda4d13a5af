//! Aktuelle Zielposition des Fahrzeugs mit Änderungsmeldung.

use super::pose::Point;

/// Änderungsmeldung einer Positionsaktualisierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionChange {
    /// Vorherige Position (`None` beim ersten Setzen)
    pub previous: Option<Point>,
    /// Neue Position
    pub current: Point,
}

/// Hält die aktuelle Position und die Canvas-Größe.
///
/// Jede Mutation liefert eine `PositionChange`, wenn sich die Position
/// tatsächlich geändert hat. Aufrufer serialisieren Zugriffe über `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct PositionStore {
    position: Option<Point>,
    dimensions: [f64; 2],
}

impl PositionStore {
    /// Erstellt einen leeren Store ohne Position und mit Canvas 0×0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Canvas-Größe `[Breite, Höhe]`.
    pub fn dimensions(&self) -> [f64; 2] {
        self.dimensions
    }

    /// Übernimmt eine neue Canvas-Größe.
    ///
    /// Ohne Position wird das Fahrzeug in die Canvas-Mitte gesetzt, sonst wird
    /// die Position proportional zur alten Größe umgerechnet. Identische
    /// Größen sind ein No-op.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> Option<PositionChange> {
        if self.dimensions == [width, height] {
            return None;
        }

        let [old_width, old_height] = self.dimensions;
        self.dimensions = [width, height];

        let new_position = match self.position {
            None => Point::new(width / 2.0, height / 2.0),
            Some(current) if old_width > 0.0 && old_height > 0.0 => Point::new(
                current.x / old_width * width,
                current.y / old_height * height,
            ),
            Some(_) => {
                log::warn!("Canvas-Größe war 0, Position wird nicht skaliert");
                return None;
            }
        };

        self.replace(new_position)
    }

    /// Setzt die Position und meldet die Änderung.
    pub fn set_position(&mut self, position: Point) -> Option<PositionChange> {
        self.replace(position)
    }

    fn replace(&mut self, position: Point) -> Option<PositionChange> {
        if self.position == Some(position) {
            return None;
        }
        let previous = self.position.replace(position);
        Some(PositionChange {
            previous,
            current: position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_layout_centers_vehicle() {
        let mut store = PositionStore::new();
        let change = store.set_dimensions(800.0, 600.0).expect("Änderung erwartet");

        assert_eq!(change.previous, None);
        assert_eq!(change.current, Point::new(400.0, 300.0));
        assert_eq!(store.position(), Some(Point::new(400.0, 300.0)));
    }

    #[test]
    fn test_resize_scales_position() {
        let mut store = PositionStore::new();
        store.set_dimensions(800.0, 600.0);
        store.set_position(Point::new(200.0, 150.0));

        let change = store.set_dimensions(400.0, 1200.0).unwrap();
        assert_eq!(change.previous, Some(Point::new(200.0, 150.0)));
        assert_eq!(change.current, Point::new(100.0, 300.0));
    }

    #[test]
    fn test_same_dimensions_is_noop() {
        let mut store = PositionStore::new();
        store.set_dimensions(800.0, 600.0);
        assert!(store.set_dimensions(800.0, 600.0).is_none());
    }

    #[test]
    fn test_resize_with_one_unchanged_side_still_scales() {
        let mut store = PositionStore::new();
        store.set_dimensions(800.0, 600.0);
        store.set_position(Point::new(400.0, 100.0));

        let change = store.set_dimensions(1600.0, 600.0).unwrap();
        assert_eq!(change.current, Point::new(800.0, 100.0));
    }

    #[test]
    fn test_set_position_reports_previous() {
        let mut store = PositionStore::new();
        let first = store.set_position(Point::new(1.0, 2.0)).unwrap();
        assert_eq!(first.previous, None);

        let second = store.set_position(Point::new(3.0, 4.0)).unwrap();
        assert_eq!(second.previous, Some(Point::new(1.0, 2.0)));

        assert!(store.set_position(Point::new(3.0, 4.0)).is_none());
    }
}
