//! # drape-render
//!
//! Pluggable rendering abstraction for drape.
//!
//! The solver only hands out [`Frame`](drape_solver::Frame)s. This crate
//! turns them into something drawable: a triangle topology over the grid,
//! a force-to-color map, a view-space transform, and a `Renderer` trait
//! with a `HeadlessRenderer` stub and a `JsonFrameExporter` for external
//! viewers. `RenderObserver` redraws after every scheduler step.

pub mod json_exporter;
pub mod observer;
pub mod renderer;
pub mod shading;
pub mod triangulation;
pub mod view;

pub use json_exporter::JsonFrameExporter;
pub use observer::RenderObserver;
pub use renderer::{HeadlessRenderer, Renderer};
pub use shading::{force_color, ForceColor};
pub use triangulation::ClothTopology;
pub use view::{to_view_space, Camera};
