//! `race-sim`: the race simulator.
//!
//! Advances a fixed field of competitors from position 0 to position 1 over
//! discrete ticks, emitting one [`Frame`] per tick and a ranked list of
//! [`RaceResult`]s exactly once when every competitor has finished.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──start()──► Running ──(all finished)──► Finished
//!                      │
//!                      └──stop()──► Stopped
//! ```
//!
//! # Host-driven ticking
//!
//! The simulator owns no thread or timer.  `start()` asks its [`TickSource`]
//! for a tick; the host calls [`RaceSimulator::poll`] from its frame loop and
//! the simulator re-requests after each tick until it is `Finished` or
//! `Stopped`:
//!
//! ```text
//! loop (host):
//!   sim.poll()
//!     └─ tick_source.poll_tick()? ──► ① clock.advance()
//!                                     ② physics::advance() per unfinished competitor
//!                                     ③ leader + Frame → observer.on_frame
//!                                     ④ all finished? → rank → observer.on_complete → Finished
//!                                        otherwise    → tick_source.request_tick()
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs [`simulate_batch`] races on Rayon's thread pool.   |
//! | `fx-hash`  | FxHash for the competitor id → index lookup.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use race_core::{Conditions, RaceConfig};
//! use race_sim::{ManualTickSource, RaceBuilder, RecordingObserver};
//!
//! let mut sim = RaceBuilder::new(field, Conditions::default(), ManualTickSource::new(), RecordingObserver::new())
//!     .config(RaceConfig::with_seed(42))
//!     .build()?;
//! sim.start();
//! sim.run_to_finish(100_000);
//! println!("{:?}", sim.results());
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod physics;
pub mod progress;
pub mod sim;
pub mod tick_source;


pub use batch::{BatchSummary, CompetitorTally, simulate_batch};
pub use builder::RaceBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CallbackObserver, NoopObserver, RaceObserver, RecordingObserver};
pub use progress::{CompetitorProgress, Frame, RaceResult};
pub use sim::{RaceSimulator, RaceState};
pub use tick_source::{FixedRateTickSource, ManualTickSource, TickSource};
