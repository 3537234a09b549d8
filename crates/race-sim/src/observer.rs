//! Race observer trait for rendering, result forwarding, and data collection.

use crate::{Frame, RaceResult};

/// Callbacks invoked by the simulator.
///
/// Both methods have default no-op implementations, so either notification
/// can be left unhandled.
///
/// # Ordering
///
/// `on_frame` is called once per tick, in tick order, after every
/// competitor's update for that tick (a competitor that crossed the line on
/// this tick is already `finished`).  `on_complete` is called at most once,
/// strictly after the frame of the finishing tick.
///
/// # Example: finish announcer
///
/// ```rust,ignore
/// struct Announcer;
///
/// impl RaceObserver for Announcer {
///     fn on_complete(&mut self, results: &[RaceResult]) {
///         if let Some(winner) = results.first() {
///             println!("winner: {}", winner.competitor);
///         }
///     }
/// }
/// ```
pub trait RaceObserver {
    /// Called after every tick with that tick's snapshot.
    fn on_frame(&mut self, _frame: &Frame) {}

    /// Called once when every competitor has finished.  `results` is sorted
    /// by rank.
    fn on_complete(&mut self, _results: &[RaceResult]) {}
}

impl<O: RaceObserver + ?Sized> RaceObserver for &mut O {
    fn on_frame(&mut self, frame: &Frame) {
        (**self).on_frame(frame)
    }
    fn on_complete(&mut self, results: &[RaceResult]) {
        (**self).on_complete(results)
    }
}

impl<O: RaceObserver + ?Sized> RaceObserver for Box<O> {
    fn on_frame(&mut self, frame: &Frame) {
        (**self).on_frame(frame)
    }
    fn on_complete(&mut self, results: &[RaceResult]) {
        (**self).on_complete(results)
    }
}

/// A [`RaceObserver`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RaceObserver for NoopObserver {}

// ── CallbackObserver ──────────────────────────────────────────────────────────

type FrameFn    = Box<dyn FnMut(&Frame)>;
type CompleteFn = Box<dyn FnMut(&[RaceResult])>;

/// Two optional closures, for callers that prefer callbacks to a trait impl.
///
/// ```rust,ignore
/// let obs = CallbackObserver::new()
///     .with_frame(|f| draw(f))
///     .with_complete(|r| settle(r));
/// ```
#[derive(Default)]
pub struct CallbackObserver {
    frame_fn:    Option<FrameFn>,
    complete_fn: Option<CompleteFn>,
}

impl CallbackObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame(mut self, f: impl FnMut(&Frame) + 'static) -> Self {
        self.frame_fn = Some(Box::new(f));
        self
    }

    pub fn with_complete(mut self, f: impl FnMut(&[RaceResult]) + 'static) -> Self {
        self.complete_fn = Some(Box::new(f));
        self
    }
}

impl RaceObserver for CallbackObserver {
    fn on_frame(&mut self, frame: &Frame) {
        if let Some(f) = self.frame_fn.as_mut() {
            f(frame);
        }
    }

    fn on_complete(&mut self, results: &[RaceResult]) {
        if let Some(f) = self.complete_fn.as_mut() {
            f(results);
        }
    }
}

// ── RecordingObserver ─────────────────────────────────────────────────────────

/// Keeps every frame and the results.  Memory grows with race length; meant
/// for tests and short diagnostic runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub frames:      Vec<Frame>,
    pub results:     Option<Vec<RaceResult>>,
    /// Number of `on_complete` calls received.
    pub completions: usize,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RaceObserver for RecordingObserver {
    fn on_frame(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn on_complete(&mut self, results: &[RaceResult]) {
        self.completions += 1;
        self.results = Some(results.to_vec());
    }
}
