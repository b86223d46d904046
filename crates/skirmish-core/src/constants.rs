//! Engine constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Milliseconds per tick at the default tick rate.
pub const TICK_MS: u64 = 1000 / TICK_RATE as u64;

// --- Engagement phase timing ---

/// Time spent orienting toward a target before firing (ms).
pub const TURN_DURATION_MS: u64 = 300;

/// Firing window after a strike (ms).
pub const FIRE_DURATION_MS: u64 = 250;

/// Default cooldown between attack cycles (ms).
pub const COOLDOWN_DURATION_MS: u64 = 1000;

/// Hard ceiling on a single engagement regardless of phase (ms).
pub const TIMEOUT_DURATION_MS: u64 = 30_000;

// --- Default combat configuration ---

/// Radius within which an attacker notices candidates.
pub const DEFAULT_DETECTION_RADIUS: f64 = 12.0;

/// Radius within which an attacker can strike.
pub const DEFAULT_ATTACK_RADIUS: f64 = 8.0;

/// Energy debited per executed attack.
pub const DEFAULT_ENERGY_PER_ATTACK: f64 = 5.0;

/// Energy debit reason tag for single-engagement strikes.
pub const ATTACK_DEBIT_TAG: &str = "attack";

/// Energy debit reason tag for coordinated assault strikes.
pub const ASSAULT_DEBIT_TAG: &str = "assault";

// --- Target prioritization ---

/// Score every candidate starts from.
pub const PRIORITY_BASE: f64 = 100.0;

/// Maximum proximity bonus (candidate on top of the attacker).
pub const PRIORITY_PROXIMITY_WEIGHT: f64 = 50.0;

/// Maximum low-health bonus (candidate at zero health).
pub const PRIORITY_LOW_HEALTH_WEIGHT: f64 = 20.0;

/// Bonus for resource-draining hostile units.
pub const PRIORITY_DRAINER_BONUS: f64 = 30.0;

/// Bonus for a vulnerable high-value objective.
pub const PRIORITY_OBJECTIVE_BONUS: f64 = 100.0;

/// Bonus for a constructed fortified structure.
pub const PRIORITY_STRUCTURE_BONUS: f64 = 80.0;

/// Territorial scoring: vulnerable objective bonus.
pub const TERRITORIAL_OBJECTIVE_BONUS: f64 = 150.0;

/// Territorial scoring: constructed structure base bonus.
pub const TERRITORIAL_STRUCTURE_BONUS: f64 = 120.0;

/// Territorial scoring: extra bonus per garrisoned defender.
pub const TERRITORIAL_GARRISON_BONUS_PER_UNIT: f64 = 0.5;

/// Territorial scoring: cap on the garrison bonus.
pub const TERRITORIAL_GARRISON_BONUS_CAP: f64 = 30.0;

/// Scores closer than this are considered equal.
pub const PRIORITY_EPSILON: f64 = 0.001;

// --- Assault coordination ---

/// Damage multiplier for a lone attacker against a structure.
pub const SOLO_ASSAULT_MULTIPLIER: f64 = 0.6;

/// Coordination bonus per attacker beyond the first.
pub const COORDINATION_BONUS_PER_ATTACKER: f64 = 0.15;

/// Cap on the coordination bonus.
pub const COORDINATION_BONUS_CAP: f64 = 0.5;

/// Recommended attackers against an ungarrisoned structure.
pub const ASSAULT_BASE_RECOMMENDED: u32 = 3;

/// Garrisoned defenders per additional recommended attacker.
pub const ASSAULT_DEFENDERS_PER_EXTRA_ATTACKER: u32 = 4;

// --- Damage ---

pub const SENTRY_BASE_DAMAGE: f64 = 10.0;
pub const STRIKER_BASE_DAMAGE: f64 = 18.0;
pub const SIEGE_BASE_DAMAGE: f64 = 35.0;

// --- Movement ---

/// Attacker movement speed (world units per second).
pub const ATTACKER_SPEED: f64 = 4.0;

/// Distance at which a move order counts as complete.
pub const ARRIVAL_TOLERANCE: f64 = 0.05;

// --- Performance monitor ---

/// Telemetry window length (ms of simulation time).
pub const MONITOR_WINDOW_MS: u64 = 1000;

/// Frame-time impact above which the engine is flagged (ms).
pub const MONITOR_MAX_FRAME_IMPACT_MS: f64 = 5.0;

/// Average attack processing time above which the engine is flagged (ms).
pub const MONITOR_MAX_AVG_ATTACK_MS: f64 = 2.0;

/// Simultaneous engagements above which the engine is flagged.
pub const MONITOR_MAX_ENGAGEMENTS: usize = 20;

/// Validations per second above which the engine is flagged.
pub const MONITOR_MAX_VALIDATIONS_PER_SEC: f64 = 100.0;
