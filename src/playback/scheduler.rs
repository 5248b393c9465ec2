//! The playback scheduler: applies trace steps one at a time, honoring
//! chaining, speed, pause, single-step and stale-session cancellation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::sleep;
use tracing::{debug, trace};

use crate::trace::{Step, Trace};

/// Renderer callback: called once per popped step, strictly in trace order.
/// Chained steps arrive back-to-back with no scheduler-visible gap, so the
/// implementation must tolerate rapid successive calls and must not fail on
/// valid steps.
pub trait ApplyStep: Send {
    fn apply_step(&mut self, step: &Step);
}

impl<F> ApplyStep for F
where
    F: FnMut(&Step) + Send,
{
    fn apply_step(&mut self, step: &Step) {
        self(step)
    }
}

struct State {
    trace: Trace,
    is_active: bool,
    speed: Duration,
    session: u64,
    renderer: Box<dyn ApplyStep>,
    on_finished: Option<Box<dyn FnMut() + Send>>,
}

impl State {
    fn apply(&mut self, step: &Step) {
        trace!(?step, "apply");
        self.renderer.apply_step(step);
    }

    fn finish(&mut self) {
        self.is_active = false;
        debug!("playback finished");
        if let Some(hook) = self.on_finished.as_mut() {
            hook();
        }
    }
}

enum Tick {
    Immediate,
    Sleep(Duration),
    Done,
}

/// Asynchronous replayer of one [`Trace`].
///
/// The trace is exclusively owned by the scheduler during playback; loading
/// a new trace, cancelling or restarting obsoletes any in-flight loop via
/// the session id. All methods are cheap synchronous state flips except for
/// the loop itself, which [`Playback::start`] spawns onto the current tokio
/// runtime.
pub struct Playback {
    state: Arc<Mutex<State>>,
}

impl Playback {
    /// Default delay between visible units.
    pub const DEFAULT_SPEED: Duration = Duration::from_millis(1000);

    pub fn new(renderer: impl ApplyStep + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                trace: Trace::new(),
                is_active: false,
                speed: Self::DEFAULT_SPEED,
                session: 0,
                renderer: Box::new(renderer),
                on_finished: None,
            })),
        }
    }

    /// Installs a hook fired when a trace drains (statistics display).
    pub fn on_finished(&self, hook: impl FnMut() + Send + 'static) {
        self.state.lock().on_finished = Some(Box::new(hook));
    }

    /// Replaces the trace with a fresh one. Supersedes any running loop.
    pub fn load(&self, trace: Trace) {
        let mut st = self.state.lock();
        st.session += 1;
        st.is_active = false;
        st.trace = trace;
    }

    /// Starts (or resumes) playback. The spawned loop applies the head
    /// step, then either continues immediately (the applied step was
    /// chained and more steps remain) or sleeps for the configured speed;
    /// a loop waking into a superseded session exits without touching
    /// anything.
    pub fn start(&self) {
        let session = {
            let mut st = self.state.lock();
            st.session += 1;
            st.is_active = true;
            st.session
        };

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            loop {
                let tick = {
                    let mut st = state.lock();
                    if st.session != session || !st.is_active {
                        Tick::Done
                    } else if let Some(ts) = st.trace.pop() {
                        st.apply(&ts.step);
                        if st.trace.is_empty() {
                            st.finish();
                            Tick::Done
                        } else if ts.chained {
                            Tick::Immediate
                        } else {
                            Tick::Sleep(st.speed)
                        }
                    } else {
                        st.finish();
                        Tick::Done
                    }
                };

                match tick {
                    Tick::Done => return,
                    Tick::Immediate => {}
                    Tick::Sleep(delay) => {
                        sleep(delay).await;
                        if state.lock().session != session {
                            trace!(session, "stale playback session, exiting");
                            return;
                        }
                    }
                }
            }
        });
    }

    /// Halts after the step currently being applied, if any. The trace is
    /// kept; [`Playback::start`] resumes it.
    pub fn pause(&self) {
        self.state.lock().is_active = false;
    }

    /// Applies exactly one visible unit — steps up to and including the
    /// first non-chained one — synchronously, regardless of activity.
    pub fn step(&self) {
        let mut st = self.state.lock();
        let mut applied = false;
        while let Some(ts) = st.trace.pop() {
            st.apply(&ts.step);
            applied = true;
            if !ts.chained {
                break;
            }
        }
        if applied && st.trace.is_empty() {
            st.finish();
        }
    }

    /// Discards the trace and obsoletes any in-flight loop. No step from
    /// the discarded trace is ever applied afterwards.
    pub fn cancel(&self) {
        let mut st = self.state.lock();
        st.trace = Trace::new();
        st.is_active = false;
        st.session += 1;
    }

    pub fn set_speed(&self, millis: u64) {
        self.state.lock().speed = Duration::from_millis(millis);
    }

    pub fn is_active(&self) -> bool {
        self.state.lock().is_active
    }

    /// Steps not yet applied.
    pub fn remaining(&self) -> usize {
        self.state.lock().trace.len()
    }
}
