//! Timer-driven state machine for the scripted plan run.
//!
//! The run goes through two independent phases:
//!
//! 1. **Reveal**: starting when the screen mounts, one step becomes visible
//!    per reveal tick until the whole plan is shown.
//! 2. **Execution**: after the user confirms, every step gets a spinner, the
//!    first five complete at fixed offsets and the validation step is then
//!    flagged as needing manual action. The remaining steps keep spinning
//!    for the rest of the session.
//!
//! `PipelineRun` is the pure state. Timers live outside of it: the web UI
//! arms real timeouts from [`PipelineRun::execution_schedule`], while
//! [`Timeline`] replays the same events against a virtual clock.

use std::collections::BTreeSet;

use crate::plan::PLAN_STEPS;

/// Timing and shape of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerConfig {
    /// Number of plan steps to reveal.
    pub step_count: usize,
    /// Delay between two reveal ticks.
    pub reveal_interval_ms: u32,
    /// Completion offset after confirmation, one per auto-completing step.
    pub completion_offsets_ms: Vec<u32>,
    /// Offset after confirmation at which manual action is requested.
    pub action_required_ms: u32,
    /// Step flagged when manual action is requested.
    pub blocked_step: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            step_count: PLAN_STEPS.len(),
            reveal_interval_ms: 200,
            completion_offsets_ms: [1, 2, 3, 4, 5].iter().map(|s| s * 1000).collect(),
            action_required_ms: 6000,
            blocked_step: 5,
        }
    }
}

/// Something that happens to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// Reveal ticker fired.
    Reveal,
    /// User confirmed the plan.
    Confirm,
    /// Completion timer for a step fired.
    Complete(usize),
    /// Manual-action timer fired.
    RequireAction,
    /// User marked the blocked step as resolved.
    Resolve,
}

/// An event due at a fixed offset (relative to confirmation, or absolute
/// inside a [`Timeline`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub at_ms: u32,
    pub event: SequencerEvent,
}

/// Display status of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Not revealed yet.
    Pending,
    /// Visible, execution not started.
    Queued,
    /// Visible with an active spinner.
    Running,
    /// Visible and done.
    Completed,
    /// Visible and waiting on the user.
    Blocked,
}

/// Runtime state of the plan on the execution screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    config: SequencerConfig,
    visible_count: usize,
    active_spinners: BTreeSet<usize>,
    completed: BTreeSet<usize>,
    action_required: bool,
    confirmed: bool,
    resolved: bool,
}

impl Default for PipelineRun {
    fn default() -> Self {
        Self::new(SequencerConfig::default())
    }
}

impl PipelineRun {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            config,
            visible_count: 0,
            active_spinners: BTreeSet::new(),
            completed: BTreeSet::new(),
            action_required: false,
            confirmed: false,
            resolved: false,
        }
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn active_spinners(&self) -> &BTreeSet<usize> {
        &self.active_spinners
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn action_required(&self) -> bool {
        self.action_required
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn resolved(&self) -> bool {
        self.resolved
    }

    /// Whether the reveal ticker still has steps to show.
    pub fn reveal_pending(&self) -> bool {
        self.visible_count < self.config.step_count
    }

    /// Whether the plan may be confirmed right now.
    ///
    /// Confirmation is gated on the full reveal on purpose: the control stays
    /// disabled until all steps are visible.
    pub fn can_confirm(&self) -> bool {
        !self.confirmed && !self.reveal_pending()
    }

    /// Whether the resolve control is live.
    pub fn can_resolve(&self) -> bool {
        self.action_required && !self.resolved
    }

    /// Apply one event. Returns `true` if the state changed.
    ///
    /// Events that make no sense in the current state (a completion before
    /// confirmation, a second resolve, ...) are ignored.
    pub fn apply(&mut self, event: SequencerEvent) -> bool {
        let changed = match event {
            SequencerEvent::Reveal => {
                if self.reveal_pending() {
                    self.visible_count += 1;
                    true
                } else {
                    false
                }
            }
            SequencerEvent::Confirm => {
                if self.can_confirm() {
                    self.confirmed = true;
                    self.active_spinners.extend(0..self.config.step_count);
                    true
                } else {
                    false
                }
            }
            SequencerEvent::Complete(idx) => {
                if self.confirmed && self.active_spinners.remove(&idx) {
                    self.completed.insert(idx);
                    true
                } else {
                    false
                }
            }
            SequencerEvent::RequireAction => {
                if self.confirmed && !self.action_required {
                    self.action_required = true;
                    true
                } else {
                    false
                }
            }
            SequencerEvent::Resolve => {
                if self.can_resolve() {
                    self.resolved = true;
                    true
                } else {
                    false
                }
            }
        };

        if changed {
            log::debug!("sequencer: applied {:?}", event);
        }
        changed
    }

    /// Events to arm once the plan is confirmed, ordered by offset.
    pub fn execution_schedule(&self) -> Vec<ScheduledEvent> {
        let mut schedule: Vec<ScheduledEvent> = self
            .config
            .completion_offsets_ms
            .iter()
            .take(self.config.step_count)
            .enumerate()
            .map(|(idx, &at_ms)| ScheduledEvent {
                at_ms,
                event: SequencerEvent::Complete(idx),
            })
            .collect();
        schedule.push(ScheduledEvent {
            at_ms: self.config.action_required_ms,
            event: SequencerEvent::RequireAction,
        });
        schedule.sort_by_key(|s| s.at_ms);
        schedule
    }

    pub fn status(&self, idx: usize) -> StepStatus {
        if idx >= self.visible_count {
            StepStatus::Pending
        } else if self.completed.contains(&idx) {
            StepStatus::Completed
        } else if self.action_required && idx == self.config.blocked_step {
            StepStatus::Blocked
        } else if self.active_spinners.contains(&idx) {
            StepStatus::Running
        } else {
            StepStatus::Queued
        }
    }

    pub fn statuses(&self) -> Vec<StepStatus> {
        (0..self.config.step_count).map(|i| self.status(i)).collect()
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.confirmed {
            "Running…"
        } else {
            "Confirm & Run"
        }
    }

    pub fn resolve_label(&self) -> &'static str {
        if self.resolved {
            "Resolved"
        } else {
            "Mark as Resolved"
        }
    }
}

/// A run driven by a virtual clock.
///
/// Reveal ticks fire at every multiple of the reveal interval, counted from
/// the start of the timeline; scheduled execution events fire at their
/// absolute offsets. Events due at the same instant fire reveal first, then
/// in schedule order.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    run: PipelineRun,
    now_ms: u32,
    pending: Vec<ScheduledEvent>,
    fired: Vec<ScheduledEvent>,
}

impl Timeline {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            run: PipelineRun::new(config),
            now_ms: 0,
            pending: Vec::new(),
            fired: Vec::new(),
        }
    }

    pub fn run(&self) -> &PipelineRun {
        &self.run
    }

    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    /// Every event that changed the run, in firing order.
    pub fn fired(&self) -> &[ScheduledEvent] {
        &self.fired
    }

    /// Confirm at the current instant and arm the execution timers.
    pub fn confirm(&mut self) -> bool {
        if !self.record(SequencerEvent::Confirm) {
            return false;
        }
        let now = self.now_ms;
        self.pending.extend(
            self.run
                .execution_schedule()
                .into_iter()
                .map(|s| ScheduledEvent {
                    at_ms: now.saturating_add(s.at_ms),
                    event: s.event,
                }),
        );
        true
    }

    /// Resolve at the current instant.
    pub fn resolve(&mut self) -> bool {
        self.record(SequencerEvent::Resolve)
    }

    /// Move the clock forward, firing everything due up to and including
    /// `target_ms`. Returns the events fired during this call.
    pub fn advance_to(&mut self, target_ms: u32) -> Vec<ScheduledEvent> {
        let start = self.fired.len();
        loop {
            // Offsets past the end of the clock pin to `u32::MAX`.
            let next_reveal = self.run.reveal_pending().then(|| {
                (self.run.visible_count() as u32)
                    .saturating_add(1)
                    .saturating_mul(self.run.config().reveal_interval_ms)
            });
            let next_scheduled = self
                .pending
                .iter()
                .enumerate()
                .min_by_key(|(_, s)| s.at_ms)
                .map(|(idx, s)| (idx, s.at_ms));

            match (next_reveal, next_scheduled) {
                (Some(reveal_at), sched)
                    if reveal_at <= target_ms && sched.is_none_or(|(_, at)| reveal_at <= at) =>
                {
                    self.now_ms = reveal_at;
                    self.record(SequencerEvent::Reveal);
                }
                (_, Some((idx, at))) if at <= target_ms => {
                    let due = self.pending.remove(idx);
                    self.now_ms = at;
                    self.record(due.event);
                }
                _ => break,
            }
        }
        self.now_ms = self.now_ms.max(target_ms);
        self.fired[start..].to_vec()
    }

    fn record(&mut self, event: SequencerEvent) -> bool {
        let changed = self.run.apply(event);
        if changed {
            self.fired.push(ScheduledEvent {
                at_ms: self.now_ms,
                event,
            });
        }
        changed
    }
}
