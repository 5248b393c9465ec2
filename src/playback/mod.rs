/*!
# Playback

Replaying a trace is a cooperative, single-logical-thread affair: the
[`Playback`](scheduler::Playback) loop pops one step at a time, hands it to
the renderer callback, and sleeps between visible units. Cancellation is
session-based — every (re)start bumps a monotone session id, and any older
loop waking from its timer sees the stale id and exits silently, so at most
one logical playback is ever visibly active without any task handles being
stored or aborted.

[`Notifier`](notify::Notifier) reuses the same idiom on a smaller scale for
transient user messages that dismiss themselves after a fixed timeout.
*/

pub mod notify;
pub mod scheduler;

pub use notify::{Notice, Notifier, DISMISS_AFTER};
pub use scheduler::{ApplyStep, Playback};
