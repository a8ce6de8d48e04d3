//! A headless stacked-card deck engine.
//!
//! For gesture handling, spring-driven fly-out animations and the commit pipeline, see the
//! `swipedeck-adapter` crate.
//!
//! This crate owns the bookkeeping behind a "swipe left / swipe right" card stack: a bounded
//! window over a (possibly paginated, possibly growing) backing collection, the fanned stack
//! layout, drag-direction classification, decision tallies, completion detection and an
//! edge-triggered "load more" latch.
//!
//! It is UI-agnostic and does not inspect the items it holds. A UI layer is expected to provide:
//! - the backing collection (and append pages as they arrive)
//! - drag displacements and decisions (usually through `swipedeck-adapter`)
//! - a renderer for a single item
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod deck;
mod latch;
mod layout;
mod options;
mod state;
mod types;


pub use deck::Deck;
pub use latch::{PrefetchDecision, PrefetchLatch};
pub use layout::{StackSpacing, stack_layout};
pub use options::{DeckOptions, OnChangeCallback, OnLoadMoreCallback};
pub use state::DeckSnapshot;
pub use types::{Direction, StackPose, SwipeTally, WindowEntry};
