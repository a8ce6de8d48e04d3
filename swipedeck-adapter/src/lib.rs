//! Gesture-to-commit pipeline for the `swipedeck` crate.
//!
//! The `swipedeck` crate is UI-agnostic and owns the deck bookkeeping. This crate turns pointer
//! drags into decisions, in a framework-neutral way:
//!
//! - Observable motion values for the drag axes, plus clamped range transforms (tilt/scale)
//! - Analytic spring animations for the fly-out and the snap-back (adapter-driven via `tick`)
//! - A controller that sequences release -> fly-out -> advance -> tally -> hook
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod gesture;
mod motion;
mod spring;
mod transform;


pub use controller::{SwipeController, SwipeHook};
pub use gesture::{
    CardFrame, DragTransform, GestureOptions, GesturePhase, ReleaseOutcome, TickOutcome,
};
pub use motion::{ListenerId, MotionValue};
pub use spring::{Spring, SpringConfig};
pub use transform::{Transform, drag_rotate, drag_scale};
