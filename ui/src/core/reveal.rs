//! One-shot entrance animation state.
//!
//! A reveal wrapper starts `Hidden` and moves to `Revealed` the first time its
//! content intersects the viewport. The move never reverses. The visual
//! transition starts `delay` after the signal, which lets sibling wrappers
//! stagger their entrance.
//!
//! The machine is fed `VisibilitySignal`s by whatever observes the viewport
//! (an `IntersectionObserver` in the browser, synthetic signals in tests) and
//! stays fail-open:
//! - `Unavailable` (no observer could be created) reveals immediately.
//! - If the observer never reports anything, `fallback_elapsed` reveals.
//!
//! Timestamps are milliseconds on any monotonic clock; the machine only
//! compares and adds them.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Revealed => "revealed",
        }
    }
}

/// What the viewport observer reports for a wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilitySignal {
    /// Content intersects the viewport.
    Entered,
    /// Content is (still) outside the viewport.
    Exited,
    /// No viewport observation is possible in this environment.
    Unavailable,
}

/// Animation parameters shared by every wrapper on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTiming {
    pub duration: Duration,
    /// Vertical offset (px) the content slides up from.
    pub offset_px: u32,
    /// How long to wait for a first observer report before failing open.
    pub fallback: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            offset_px: 20,
            fallback: Duration::from_millis(1500),
        }
    }
}

impl RevealTiming {
    /// Inline CSS for a wrapper in `state`, with the per-instance `delay`.
    ///
    /// The `transition` declaration is present in both states so flipping to
    /// `Revealed` animates; hidden content keeps its layout box.
    pub fn style(&self, state: RevealState, delay: Duration) -> String {
        let duration = self.duration.as_millis();
        let delay = delay.as_millis();
        let transition = format!(
            "transition:opacity {duration}ms ease-out {delay}ms,transform {duration}ms ease-out {delay}ms;"
        );
        match state {
            RevealState::Hidden => format!(
                "opacity:0;transform:translateY({}px);{transition}",
                self.offset_px
            ),
            RevealState::Revealed => format!("opacity:1;transform:none;{transition}"),
        }
    }
}

/// The `Hidden -> Revealed` transition, once it has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// When the triggering signal arrived (ms).
    pub signalled_at: u64,
    pub delay: Duration,
    pub duration: Duration,
    pub cause: RevealCause,
}

impl Transition {
    /// When the visual effect begins (ms).
    pub fn starts_at(&self) -> u64 {
        self.signalled_at.saturating_add(duration_ms(self.delay))
    }

    /// When the visual effect has finished (ms).
    pub fn ends_at(&self) -> u64 {
        self.starts_at().saturating_add(duration_ms(self.duration))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCause {
    Intersection,
    ObserverUnavailable,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealMachine {
    timing: RevealTiming,
    delay: Duration,
    mounted_at: u64,
    state: RevealState,
    /// Set once any observer report arrived; disables the fallback.
    observed: bool,
    transition: Option<Transition>,
}

impl RevealMachine {
    pub fn new(timing: RevealTiming, delay: Duration, mounted_at: u64) -> Self {
        Self {
            timing,
            delay,
            mounted_at,
            state: RevealState::Hidden,
            observed: false,
            transition: None,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn timing(&self) -> &RevealTiming {
        &self.timing
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    /// Deadline (ms) after which `fallback_elapsed` reveals unobserved content.
    pub fn fallback_deadline(&self) -> u64 {
        self.mounted_at
            .saturating_add(duration_ms(self.timing.fallback))
    }

    /// Feed an observer report. Returns the transition if this report fired it.
    pub fn signal(&mut self, signal: VisibilitySignal, now: u64) -> Option<Transition> {
        match signal {
            VisibilitySignal::Entered => {
                self.observed = true;
                self.fire(now, RevealCause::Intersection)
            }
            VisibilitySignal::Exited => {
                self.observed = true;
                None
            }
            VisibilitySignal::Unavailable => self.fire(now, RevealCause::ObserverUnavailable),
        }
    }

    /// Fallback timer hook. Reveals only if no observer report ever arrived and
    /// the deadline has passed.
    pub fn fallback_elapsed(&mut self, now: u64) -> Option<Transition> {
        if self.observed || now < self.fallback_deadline() {
            return None;
        }
        self.fire(now, RevealCause::Fallback)
    }

    /// Inline CSS for the current state.
    pub fn style(&self) -> String {
        self.timing.style(self.state, self.delay)
    }

    fn fire(&mut self, now: u64, cause: RevealCause) -> Option<Transition> {
        if self.is_revealed() {
            return None;
        }
        let transition = Transition {
            signalled_at: now,
            delay: self.delay,
            duration: self.timing.duration,
            cause,
        };
        self.state = RevealState::Revealed;
        self.transition = Some(transition);
        Some(transition)
    }
}

/// Delay for the `index`-th of a row of siblings entering together.
pub fn stagger(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
