//! Use-Case-Funktionen: mutieren den AppState für genau eine Aufgabe.

pub mod canvas;
pub mod movement;
