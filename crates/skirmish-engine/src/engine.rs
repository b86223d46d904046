//! Combat engine: the headless tick loop.
//!
//! `CombatEngine` owns the reference battlefield, energy bank, engagement
//! map and telemetry, applies queued commands, runs every system in a fixed
//! order, and produces a `CombatSnapshot` per tick. Same seed and same
//! commands give the same snapshots.

use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

use hecs::Entity;
use tracing::{debug, warn};

use skirmish_core::commands::CombatCommand;
use skirmish_core::config::CombatConfig;
use skirmish_core::enums::EngagementPhase;
use skirmish_core::constants::TICK_MS;
use skirmish_core::error::CombatError;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::{CombatSnapshot, PerformanceView};
use skirmish_core::types::{SimTime, UnitId};

use crate::assault::{self, AssaultOutcome};
use crate::collaborators::{DamagePolicy, MovementOrders, TickContext};
use crate::damage::ClassDamage;
use crate::engagement::{Engagement, ScoreState};
use crate::monitor::PerformanceMonitor;
use crate::systems;
use crate::world::{CombatWorld, EnergyBank, EventLog};

/// Configuration for starting a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for the damage policy. Same seed = same simulation.
    pub seed: u64,
    /// Fractional damage spread (0.1 = ±10%).
    pub damage_variance: f64,
    /// Simulation milliseconds per tick.
    pub tick_ms: u64,
    pub combat: CombatConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            damage_variance: 0.1,
            tick_ms: TICK_MS,
            combat: CombatConfig::default(),
        }
    }
}

pub struct CombatEngine {
    world: CombatWorld,
    bank: EnergyBank,
    events: EventLog,
    config: CombatConfig,
    time: SimTime,
    tick_ms: u64,
    damage: Box<dyn DamagePolicy>,
    command_queue: VecDeque<CombatCommand>,
    arrival_buffer: Vec<Entity>,

    engagements: BTreeMap<UnitId, Engagement>,
    assaults: Vec<AssaultOutcome>,
    score: ScoreState,
    monitor: PerformanceMonitor,
}

impl CombatEngine {
    pub fn new(config: SimConfig) -> Self {
        let damage = Box::new(ClassDamage::new(config.seed, config.damage_variance));
        Self::with_damage_policy(config, damage)
    }

    /// Build an engine around a caller-supplied damage formula.
    pub fn with_damage_policy(config: SimConfig, damage: Box<dyn DamagePolicy>) -> Self {
        Self {
            world: CombatWorld::new(),
            bank: EnergyBank::new(),
            events: EventLog::default(),
            config: config.combat,
            time: SimTime::default(),
            tick_ms: config.tick_ms.max(1),
            damage,
            command_queue: VecDeque::new(),
            arrival_buffer: Vec::new(),
            engagements: BTreeMap::new(),
            assaults: Vec::new(),
            score: ScoreState::default(),
            monitor: PerformanceMonitor::default(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: CombatCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = CombatCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the engine by one tick and return the resulting snapshot.
    ///
    /// Errors only on caller contract violations such as commands naming
    /// unknown units.
    pub fn tick(&mut self) -> Result<CombatSnapshot, CombatError> {
        let frame_started = Instant::now();

        self.process_commands()?;
        self.run_systems()?;
        self.time.advance(self.tick_ms);

        self.monitor
            .record_frame(frame_started.elapsed(), self.engagements.len());
        self.monitor.roll_window(self.time.now_ms);

        let events = self.events.take();
        Ok(systems::snapshot::build_snapshot(
            &self.time,
            &self.engagements,
            events,
            &self.score,
            self.monitor.summary(),
        ))
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn world(&self) -> &CombatWorld {
        &self.world
    }

    /// Mutable access for spawning and editing units between ticks.
    pub fn world_mut(&mut self) -> &mut CombatWorld {
        &mut self.world
    }

    pub fn bank(&self) -> &EnergyBank {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut EnergyBank {
        &mut self.bank
    }

    pub fn engagements(&self) -> &BTreeMap<UnitId, Engagement> {
        &self.engagements
    }

    pub fn engagement(&self, attacker: &UnitId) -> Option<&Engagement> {
        self.engagements.get(attacker)
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Every coordinated assault resolved so far, oldest first.
    pub fn assaults(&self) -> &[AssaultOutcome] {
        &self.assaults
    }

    pub fn performance_summary(&self) -> PerformanceView {
        self.monitor.summary()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) -> Result<(), CombatError> {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command)?;
        }
        Ok(())
    }

    fn handle_command(&mut self, command: CombatCommand) -> Result<(), CombatError> {
        match command {
            CombatCommand::SetConfig { config } => match config.validate() {
                Ok(()) => self.config = config,
                Err(err) => {
                    warn!(target: "skirmish::engine", error = %err, "Rejected combat config");
                }
            },
            CombatCommand::OrderMove {
                attacker,
                destination,
            } => {
                if !self.world.contains(&attacker) {
                    return Err(CombatError::UnknownAttacker(attacker));
                }
                // An engaged unit keeps fighting and heads there afterwards.
                match self.engagements.get_mut(&attacker) {
                    Some(engagement) => engagement.return_to = Some(destination),
                    None => self.world.move_to(&attacker, destination),
                }
            }
            CombatCommand::Disengage { attacker } => {
                if let Some(engagement) = self.engagements.remove(&attacker) {
                    match engagement.return_to {
                        Some(destination) => self.world.move_to(&attacker, destination),
                        None => self.world.stop(&attacker),
                    }
                    debug!(target: "skirmish::engine", attacker = %attacker, "Disengaged");
                    self.events.push(CombatEvent::EngagementEnded {
                        attacker,
                        phase: EngagementPhase::Completed,
                    });
                }
            }
            CombatCommand::AssaultTarget { target, attackers } => {
                let mut ctx = TickContext {
                    config: &self.config,
                    now_ms: self.time.now_ms,
                    world: &mut self.world,
                    ledger: &mut self.bank,
                    feedback: &mut self.events,
                    damage: self.damage.as_mut(),
                };
                let outcome = assault::coordinate_multi_attacker_damage(
                    &target,
                    &attackers,
                    &mut ctx,
                    &mut self.score,
                )?;
                self.assaults.push(outcome);
            }
        }
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self) -> Result<(), CombatError> {
        let opened = {
            let mut ctx = TickContext {
                config: &self.config,
                now_ms: self.time.now_ms,
                world: &mut self.world,
                ledger: &mut self.bank,
                feedback: &mut self.events,
                damage: self.damage.as_mut(),
            };

            // 1. Detection (new engagements for idle attackers)
            let detection = systems::detection::run(&mut self.engagements, &mut ctx)?;
            self.monitor.record_validations(detection.validations);

            // 2. Phase processing (validate, retarget, advance, strike)
            systems::phase::run(
                &mut self.engagements,
                &mut ctx,
                &mut self.score,
                &mut self.monitor,
            )?;
            detection.opened
        };

        for (attacker, target) in opened {
            self.events
                .push(CombatEvent::EngagementStarted { attacker, target });
        }

        // 3. Movement integration
        systems::movement::run(
            self.world.ecs_mut(),
            self.tick_ms,
            &mut self.arrival_buffer,
        );
        // 4. Cleanup (finished engagements, destroyed targets)
        systems::cleanup::run(&mut self.engagements, &mut self.world, &mut self.events);
        Ok(())
    }
}
