//! `vg-sim`: stepwise stay/move simulator for the voyage routing engine.
//!
//! # Cycle
//!
//! ```text
//! while exploring and cycles < max_steps:
//!   ① Stay   eat (below 50 %), research, apply life_delta.
//!              Dead afterwards → finish "died during stay" (no step logged).
//!   ② Move   nearest affordable, unvisited, unblocked neighbor.
//!              None → log a stuck step (to = None), finish "no viable neighbor".
//!   ③ Log    ExecutionStep { from, to, distance, before, after }.
//! ```
//!
//! The cycle is the same [`stay_then_move`][vg_route::stay_then_move] used by
//! [`StayGreedy`][vg_route::StayGreedy], so a run's `visited_order` always
//! equals that strategy's path.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vg_sim::{NoopObserver, Simulator};
//!
//! let log = Simulator::new(&graph, "A", traveler).run(&mut NoopObserver);
//! println!("{} after {} steps", log.stop_reason, log.steps.len());
//! ```

pub mod builder;
pub mod error;
pub mod log;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use log::{ExecutionStep, RunLog};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunState, Simulator};
