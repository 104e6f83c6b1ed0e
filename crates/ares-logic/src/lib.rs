//! Pure habitat-design logic for ARES Designer.
//!
//! This crate contains all design-tool logic that is independent of any
//! UI framework or rendering engine. Functions take plain data and return
//! results, making them unit-testable and portable across a desktop UI,
//! a web front end, and the native headless harness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Static functional-module catalog (volumes, colors, footprints) |
//! | [`constants`] | NHV floor, habitat geometry, input bounds, module kind IDs |
//! | [`evaluator`] | Net Habitable Volume constraint evaluation and status tiers |
//! | [`layout`] | Placed-module layout state (add, clear, total volume) |
//! | [`manifest`] | Tabular module manifest for display |
//! | [`mission`] | Mission parameters, habitat classes, input validation |
//! | [`placement`] | Cylinder bounds and injectable placement strategies |
//! | [`scene`] | Render-ready 3D scene data (boundary rings, markers) |
//! | [`session`] | Design actions and the aggregate design report |

pub mod catalog;
pub mod constants;
pub mod evaluator;
pub mod layout;
pub mod manifest;
pub mod mission;
pub mod placement;
pub mod scene;
pub mod session;
