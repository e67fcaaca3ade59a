//! Combat resolution building blocks.
//!
//! This module provides the damage rolls and result types shared by heroes
//! and enemies. The functions here are pure apart from the RNG they are
//! handed.
//!
//! # Core Functions
//!
//! - `roll_attack_damage`: Attack power ± variance, floored at 1
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `reduce_attack_power`: Chill/freeze reduction (floored at 1)
//! - `follow_up_damage`: Lightning follow-up hit size

pub mod damage;
pub mod result;

pub use damage::{apply_damage, follow_up_damage, reduce_attack_power, roll_attack_damage};
pub use result::{AttackResult, MAX_SPECIAL_HITS, PassiveEffect, SpecialOutcome, Strike, Strikes};
