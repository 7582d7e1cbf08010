//! Chord detection and the idle poll loop.
//!
//! Chords are polled rather than registered: a mouse button with
//! modifiers cannot be a system hotkey. The watcher reports a chord on
//! the poll where it becomes held, and at most one chord per poll.

use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::Config;
use crate::input::{Chord, ChordKind, Input};
use crate::platform::Platform;
use crate::session::SessionController;

/// A configured chord and whether it was held on the last poll.
#[derive(Debug, Clone)]
struct Binding {
    kind: ChordKind,
    chord: Chord,
    held: bool,
}

/// Edge-detects the enabled chords.
///
/// When several chords become held on the same poll (Alt+Shift+Right
/// also satisfies Alt+Right), the one with more modifiers wins; ties go
/// to the declaration order of [`ChordKind::ALL`].
#[derive(Debug, Clone)]
pub struct ChordWatcher {
    bindings: Vec<Binding>,
}

impl ChordWatcher {
    pub fn new(config: &Config) -> Self {
        let mut bindings: Vec<Binding> = ChordKind::ALL
            .iter()
            .filter(|kind| config.features.enabled(**kind))
            .map(|kind| Binding {
                kind: *kind,
                chord: config.chords.chord(*kind).clone(),
                held: false,
            })
            .collect();
        // Stable sort keeps `ALL` order among equals.
        bindings.sort_by_key(|b| std::cmp::Reverse(b.chord.modifiers.len()));
        Self { bindings }
    }

    /// Kinds being watched, highest priority first.
    pub fn kinds(&self) -> impl Iterator<Item = ChordKind> + '_ {
        self.bindings.iter().map(|b| b.kind)
    }

    /// Samples every chord and returns the highest-priority one that
    /// became held since the last poll.
    pub fn poll(&mut self, input: &(impl Input + ?Sized)) -> Option<ChordKind> {
        let mut fired = None;
        for binding in &mut self.bindings {
            let held = binding.chord.is_held(input);
            if held && !binding.held && fired.is_none() {
                fired = Some(binding.kind);
            }
            binding.held = held;
        }
        fired
    }

    /// Records the current held state without reporting anything.
    ///
    /// Called after a session so a chord still held at release does not
    /// start another one.
    pub fn resync(&mut self, input: &(impl Input + ?Sized)) {
        for binding in &mut self.bindings {
            binding.held = binding.chord.is_held(input);
        }
    }
}

/// Polls for chords and runs one session per press until `should_stop`
/// returns true. Sessions run on the calling thread.
pub fn run<P, C>(platform: &P, clock: &C, config: &Config, should_stop: impl Fn() -> bool)
where
    P: Platform,
    C: Clock + ?Sized,
{
    let mut watcher = ChordWatcher::new(config);
    let controller = SessionController::new(platform, clock, config);
    let idle = config.engine.idle_poll();

    let watched: Vec<String> = watcher
        .kinds()
        .map(|kind| format!("{kind}={}", config.chords.chord(kind)))
        .collect();
    info!("watching chords: {}", watched.join(", "));

    // Chords held at startup must be released first.
    watcher.resync(platform);

    while !should_stop() {
        if let Some(kind) = watcher.poll(platform) {
            controller.on_chord(kind);
            watcher.resync(platform);
        }
        clock.sleep(idle);
    }
    debug!("chord loop stopped");
}
