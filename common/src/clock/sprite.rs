//! Walk and jump state machine for the clock sprite.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──(second >= 55)──> Walking ──(at target)──> Jumping ──(landed)──┬──> Walking
//!  ^                                                                    │
//!  └────────(off the right edge)──── WalkingOff <──(plan exhausted)─────┘
//! ```
//!
//! The sprite runs at its own tick rate ([`ANIMATION_TICK_MS`]) and ignores
//! calls that arrive sooner. Each run follows a [`TransitionPlan`]: walk under
//! a changing digit, jump, bump it on the way up, land, walk to the next one.
//! The first bump of a run also advances the displayed minute.
//!
//! Jump height uses screen convention: 0 is the ground and negative is up.

use log::{debug, info};
use micromath::F32;

use super::bounce::DigitBounce;
use super::ledger::DisplayedTime;
use super::planner::{Target, TransitionPlan};
use crate::config::{
    ANIMATION_TICK_MS,
    APEX_REBOUND_VELOCITY,
    ARRIVE_TOLERANCE,
    DIGIT_BOTTOM_Y,
    GRAVITY,
    JUMP_POWER,
    SPRITE_BASE_Y,
    SPRITE_EXIT_X,
    SPRITE_HEAD_OFFSET,
    SPRITE_START_X,
    TRIGGER_SECOND,
    WALK_SPEED,
};
use crate::time::WallTime;

// =============================================================================
// States
// =============================================================================

/// Observable state of the sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteState {
    /// Parked off-screen, waiting for the next minute.
    Idle,
    /// Heading for the current target.
    Walking,
    /// In the air under the current target.
    Jumping,
    /// Leaving to the right after the last target.
    WalkingOff,
}

/// Internal phase. The bump flag only exists while airborne.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Walking,
    Jumping { bumped: bool },
    WalkingOff,
}

impl Phase {
    const fn state(self) -> SpriteState {
        match self {
            Self::Idle => SpriteState::Idle,
            Self::Walking => SpriteState::Walking,
            Self::Jumping { .. } => SpriteState::Jumping,
            Self::WalkingOff => SpriteState::WalkingOff,
        }
    }
}

/// Fires at most once per wall-clock minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TriggerLatch {
    minute: Option<u8>,
    fired: bool,
}

impl TriggerLatch {
    const fn new() -> Self { Self { minute: None, fired: false } }

    /// Re-arm when the wall-clock minute changes.
    fn observe(
        &mut self,
        minute: u8,
    ) {
        if self.minute != Some(minute) {
            self.minute = Some(minute);
            self.fired = false;
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything the renderer needs to draw the sprite, in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSnapshot {
    pub state: SpriteState,
    /// Horizontal center.
    pub x: i32,
    /// Feet position (ground line plus jump height).
    pub y: i32,
    pub facing_right: bool,
    /// Gait frame, 0 or 1.
    pub walk_frame: u8,
}

impl SpriteSnapshot {
    #[inline]
    pub const fn is_jumping(&self) -> bool { matches!(self.state, SpriteState::Jumping) }
}

// =============================================================================
// Sprite Motion
// =============================================================================

/// Sprite kinematics, state machine and the plan of the current run.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteMotion {
    phase: Phase,
    x: f32,
    facing_right: bool,
    walk_frame: u8,
    jump_y: f32,
    velocity: f32,
    plan: Option<TransitionPlan>,
    latch: TriggerLatch,
    last_tick_ms: Option<u64>,
}

impl SpriteMotion {
    /// Parked and idle.
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            x: SPRITE_START_X,
            facing_right: true,
            walk_frame: 0,
            jump_y: 0.0,
            velocity: 0.0,
            plan: None,
            latch: TriggerLatch::new(),
            last_tick_ms: None,
        }
    }

    /// Run one sprite tick if at least [`ANIMATION_TICK_MS`] passed since the last.
    ///
    /// Returns `false` when the call was throttled.
    pub fn tick(
        &mut self,
        wall: &WallTime,
        now_ms: u64,
        ledger: &mut DisplayedTime,
        bounce: &mut DigitBounce,
    ) -> bool {
        if let Some(last) = self.last_tick_ms
            && now_ms.saturating_sub(last) < ANIMATION_TICK_MS
        {
            return false;
        }
        self.last_tick_ms = Some(now_ms);

        self.latch.observe(wall.time().minute());
        if wall.second() >= TRIGGER_SECOND && !self.latch.fired && self.phase == Phase::Idle {
            self.latch.fired = true;
            self.start_run(ledger);
        }

        match self.phase {
            Phase::Idle => {
                self.walk_frame = 0;
                self.x = SPRITE_START_X;
            }
            Phase::Walking => self.walk(),
            Phase::Jumping { bumped } => self.jump(bumped, wall, ledger, bounce),
            Phase::WalkingOff => self.walk_off(),
        }
        true
    }

    /// Park the sprite and forget the current run.
    pub fn reset(&mut self) { *self = Self::new(); }

    #[inline]
    pub const fn state(&self) -> SpriteState { self.phase.state() }

    #[inline]
    pub const fn x(&self) -> f32 { self.x }

    #[inline]
    pub const fn jump_y(&self) -> f32 { self.jump_y }

    /// Stop the sprite is currently working on, if a run is in progress.
    pub fn current_target(&self) -> Option<Target> { self.plan.as_ref().and_then(TransitionPlan::current) }

    pub fn snapshot(&self) -> SpriteSnapshot {
        SpriteSnapshot {
            state: self.state(),
            x: self.x as i32,
            y: SPRITE_BASE_Y + self.jump_y as i32,
            facing_right: self.facing_right,
            walk_frame: self.walk_frame,
        }
    }

    // -------------------------------------------------------------------------
    // Phases
    // -------------------------------------------------------------------------

    fn start_run(
        &mut self,
        ledger: &DisplayedTime,
    ) {
        let shown = ledger.shown();
        let plan = TransitionPlan::for_minute_after(shown);
        if plan.is_empty() {
            debug!("Nothing to change after {:02}:{:02}, staying idle", shown.hour(), shown.minute());
            return;
        }
        info!(
            "Sprite run {:02}:{:02} -> next minute, {} digit(s)",
            shown.hour(),
            shown.minute(),
            plan.targets().len()
        );
        self.plan = Some(plan);
        self.x = SPRITE_START_X;
        self.facing_right = true;
        self.phase = Phase::Walking;
    }

    fn walk(&mut self) {
        let Some(target) = self.current_target() else {
            self.begin_walk_off();
            return;
        };
        let target_x = target.x as f32;

        if F32(self.x - target_x).abs().0 > ARRIVE_TOLERANCE {
            if self.x < target_x {
                self.x += WALK_SPEED;
                self.facing_right = true;
            } else {
                self.x -= WALK_SPEED;
                self.facing_right = false;
            }
            self.walk_frame ^= 1;
        } else {
            self.x = target_x;
            self.jump_y = 0.0;
            self.velocity = JUMP_POWER;
            self.phase = Phase::Jumping { bumped: false };
            debug!("Sprite jumping at slot {}", target.slot);
        }
    }

    fn jump(
        &mut self,
        bumped: bool,
        wall: &WallTime,
        ledger: &mut DisplayedTime,
        bounce: &mut DigitBounce,
    ) {
        self.velocity += GRAVITY;
        self.jump_y += self.velocity;

        let head_y = SPRITE_BASE_Y + self.jump_y as i32 - SPRITE_HEAD_OFFSET;
        if !bumped && head_y <= DIGIT_BOTTOM_Y {
            self.phase = Phase::Jumping { bumped: true };
            if let Some(plan) = self.plan.as_mut() {
                if let Some(target) = plan.current() {
                    bounce.trigger(target.slot);
                }
                if let Some(to) = plan.take_time_advance() {
                    ledger.advance_to(to, wall.time());
                    let shown = ledger.shown();
                    debug!("Displayed time advanced to {:02}:{:02}", shown.hour(), shown.minute());
                }
            }
            self.velocity = APEX_REBOUND_VELOCITY;
        }

        if self.jump_y >= 0.0 {
            self.jump_y = 0.0;
            self.velocity = 0.0;
            self.land();
        }
    }

    fn land(&mut self) {
        match self.plan.as_mut().and_then(TransitionPlan::next_target) {
            Some(next) => {
                self.facing_right = next.x as f32 > self.x;
                self.phase = Phase::Walking;
            }
            None => self.begin_walk_off(),
        }
    }

    fn begin_walk_off(&mut self) {
        self.plan = None;
        self.facing_right = true;
        self.phase = Phase::WalkingOff;
    }

    fn walk_off(&mut self) {
        self.x += WALK_SPEED;
        self.facing_right = true;
        self.walk_frame ^= 1;
        if self.x > SPRITE_EXIT_X {
            self.x = SPRITE_START_X;
            self.phase = Phase::Idle;
            debug!("Sprite parked");
        }
    }
}

impl Default for SpriteMotion {
    fn default() -> Self { Self::new() }
}
