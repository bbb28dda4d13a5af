//! Feature-Handler: dünne Schicht zwischen Controller und Use-Cases.

pub mod motion;
pub mod view;
