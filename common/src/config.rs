//! Layout, physics and timing constants.
//!
//! Everything here is a compile-time constant. Positions are in display pixels
//! with the origin at the top-left corner of the 128x64 panel.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x64 OLED).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Screen center X coordinate, pre-computed as i32 for drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Sprite Clock Layout
// =============================================================================

/// Number of glyph slots in the sprite clock: H H : M M.
pub const DIGIT_SLOTS: usize = 5;

/// Slot holding the colon separator. Never targeted by the sprite.
pub const COLON_SLOT: usize = 2;

/// Left edge of each glyph slot.
pub const DIGIT_SLOT_X: [i32; DIGIT_SLOTS] = [19, 37, 55, 73, 91];

/// Horizontal offset from a slot's left edge to its center.
pub const DIGIT_HALF_WIDTH: i32 = 9;

/// Top of the clock glyphs when at rest.
pub const TIME_Y: i32 = 26;

/// Row at which a rising sprite head strikes a digit.
pub const DIGIT_BOTTOM_Y: i32 = 47;

/// Ground line the sprite's feet stand on.
pub const SPRITE_BASE_Y: i32 = 62;

/// Distance from the sprite's feet to the top of its head.
pub const SPRITE_HEAD_OFFSET: i32 = 10;

/// Parking position of the sprite, just off the left edge.
pub const SPRITE_START_X: f32 = -15.0;

/// Once the walking-off sprite passes this x, it is parked again.
pub const SPRITE_EXIT_X: f32 = SCREEN_WIDTH as f32 + 15.0;

/// Sprite is not drawn left of this x.
pub const SPRITE_CULL_LEFT: i32 = -10;

/// Sprite is not drawn right of this x.
pub const SPRITE_CULL_RIGHT: i32 = SCREEN_WIDTH as i32 + 10;

/// Row for the date line on the sprite clock.
pub const SPRITE_CLOCK_DATE_Y: i32 = 4;

// =============================================================================
// Animation Physics
// =============================================================================

/// Horizontal distance covered per sprite tick.
pub const WALK_SPEED: f32 = 2.5;

/// Distance at which a walking sprite snaps onto its target.
pub const ARRIVE_TOLERANCE: f32 = 3.0;

/// Initial vertical velocity of a jump (negative is up).
pub const JUMP_POWER: f32 = -4.5;

/// Velocity added to the sprite per tick while airborne.
pub const GRAVITY: f32 = 0.6;

/// Velocity assigned after the head strikes a digit.
pub const APEX_REBOUND_VELOCITY: f32 = -2.0;

/// Initial velocity of a bounced digit.
pub const DIGIT_BOUNCE_POWER: f32 = -3.5;

/// Velocity added to a bouncing digit per frame.
pub const DIGIT_GRAVITY: f32 = 0.6;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Minimum interval between two sprite updates.
pub const ANIMATION_TICK_MS: u64 = 50;

/// Target frame period of the outer render loop.
pub const FRAME_PERIOD_MS: u64 = 30;

/// Seconds-within-minute at which the sprite sets off for the next minute.
pub const TRIGGER_SECOND: u8 = 55;

/// Stats are considered live for this long after the last packet.
pub const STATS_TIMEOUT_MS: u64 = 6000;

// =============================================================================
// Connectivity Labels
// =============================================================================

/// Access point name shown on the setup screen.
pub const SETUP_AP_NAME: &str = "PCMonitor-Setup";

/// Access point password shown on the setup screen.
pub const SETUP_AP_PASSWORD: &str = "monitor123";

/// Address of the configuration portal while in setup mode.
pub const SETUP_PORTAL_ADDRESS: &str = "192.168.4.1";

/// UDP port the stats sender targets.
pub const STATS_UDP_PORT: u16 = 4210;
