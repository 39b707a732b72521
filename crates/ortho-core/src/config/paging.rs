// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Paging configuration

use super::Error;
#[cfg(feature = "serde")]
use super::Format;
use crate::Action;
use crate::cast::Cast;
use crate::policy::CouplingPolicy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::path::Path;
use std::time::Duration;

/// A message which may be used to update [`PagingConfig`]
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum PagingConfigMsg {
    Policy(CouplingPolicy),
    MomentumThreshold(f32),
    Deceleration(f32),
    MomentumAnimation(u32),
    PageAnimation(u32),
    KineticTimeout(u32),
    KineticDecayMul(f32),
    KineticDecaySub(f32),
    Overscroll(f32),
    /// Reset all config values to default (not saved) values
    ResetToDefault,
}

/// Paging configuration
///
/// This is serializable (using `feature = "serde"`) with the following fields:
///
/// > `policy`: [`CouplingPolicy`] \
/// > `momentum_threshold`: `f32` (units per second) \
/// > `deceleration`: `f32` (units per second²) \
/// > `momentum_animation_ms`: `u32` (milliseconds) \
/// > `page_animation_ms`: `u32` (milliseconds) \
/// > `kinetic_timeout_ms`: `u32` (milliseconds) \
/// > `kinetic_decay_mul`: `f32` (unitless, applied each second) \
/// > `kinetic_decay_sub`: `f32` (units per second) \
/// > `overscroll`: `f32` (units)
///
/// Missing fields take their default values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PagingConfig {
    /// Vertical coupling policy
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: CouplingPolicy,

    /// Minimum speed at which momentum is handed to the outer surface
    #[cfg_attr(feature = "serde", serde(default = "defaults::momentum_threshold"))]
    pub momentum_threshold: f32,

    /// Deceleration used to convert handed-over momentum to a distance
    #[cfg_attr(feature = "serde", serde(default = "defaults::deceleration"))]
    pub deceleration: f32,

    #[cfg_attr(feature = "serde", serde(default = "defaults::momentum_animation_ms"))]
    pub momentum_animation_ms: u32,

    /// Duration of a programmatic page switch (zero to switch immediately)
    #[cfg_attr(feature = "serde", serde(default = "defaults::page_animation_ms"))]
    pub page_animation_ms: u32,

    #[cfg_attr(feature = "serde", serde(default = "defaults::kinetic_timeout_ms"))]
    pub kinetic_timeout_ms: u32,

    #[cfg_attr(feature = "serde", serde(default = "defaults::kinetic_decay_mul"))]
    pub kinetic_decay_mul: f32,

    #[cfg_attr(feature = "serde", serde(default = "defaults::kinetic_decay_sub"))]
    pub kinetic_decay_sub: f32,

    #[cfg_attr(feature = "serde", serde(default = "defaults::overscroll"))]
    pub overscroll: f32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        PagingConfig {
            policy: CouplingPolicy::default(),
            momentum_threshold: defaults::momentum_threshold(),
            deceleration: defaults::deceleration(),
            momentum_animation_ms: defaults::momentum_animation_ms(),
            page_animation_ms: defaults::page_animation_ms(),
            kinetic_timeout_ms: defaults::kinetic_timeout_ms(),
            kinetic_decay_mul: defaults::kinetic_decay_mul(),
            kinetic_decay_sub: defaults::kinetic_decay_sub(),
            overscroll: defaults::overscroll(),
        }
    }
}

impl PagingConfig {
    /// Construct the default configuration with the given `policy`
    pub fn with_policy(policy: CouplingPolicy) -> Self {
        PagingConfig {
            policy,
            ..Default::default()
        }
    }

    /// Apply a [`PagingConfigMsg`]
    ///
    /// The new value is not validated; see [`Self::validate`].
    pub fn change_config(&mut self, msg: PagingConfigMsg) -> Action {
        match msg {
            PagingConfigMsg::Policy(v) => self.policy = v,
            PagingConfigMsg::MomentumThreshold(v) => self.momentum_threshold = v,
            PagingConfigMsg::Deceleration(v) => self.deceleration = v,
            PagingConfigMsg::MomentumAnimation(v) => self.momentum_animation_ms = v,
            PagingConfigMsg::PageAnimation(v) => self.page_animation_ms = v,
            PagingConfigMsg::KineticTimeout(v) => self.kinetic_timeout_ms = v,
            PagingConfigMsg::KineticDecayMul(v) => self.kinetic_decay_mul = v,
            PagingConfigMsg::KineticDecaySub(v) => self.kinetic_decay_sub = v,
            PagingConfigMsg::Overscroll(v) => self.overscroll = v,
            PagingConfigMsg::ResetToDefault => *self = PagingConfig::default(),
        }

        Action::CONFIG
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<(), Error> {
        fn check(field: &'static str, ok: bool, reason: &'static str) -> Result<(), Error> {
            if ok {
                Ok(())
            } else {
                log::warn!("PagingConfig: invalid value for {field}: {reason}");
                Err(Error::Invalid { field, reason })
            }
        }

        let c = self;
        check(
            "momentum_threshold",
            c.momentum_threshold.is_finite() && c.momentum_threshold >= 0.0,
            "expected a finite value >= 0",
        )?;
        check(
            "deceleration",
            c.deceleration.is_finite() && c.deceleration > 0.0,
            "expected a finite value > 0",
        )?;
        check(
            "kinetic_decay_mul",
            c.kinetic_decay_mul > 0.0 && c.kinetic_decay_mul <= 1.0,
            "expected a value in (0, 1]",
        )?;
        check(
            "kinetic_decay_sub",
            c.kinetic_decay_sub.is_finite() && c.kinetic_decay_sub >= 0.0,
            "expected a finite value >= 0",
        )?;
        check(
            "overscroll",
            c.overscroll.is_finite() && c.overscroll >= 0.0,
            "expected a finite value >= 0",
        )
    }

    /// Duration of the animated momentum hand-over
    #[inline]
    pub fn momentum_animation(&self) -> Duration {
        Duration::from_millis(self.momentum_animation_ms.cast())
    }

    /// Duration of the animated transition started by
    /// [`crate::PagingCoordinator::select_page`]
    #[inline]
    pub fn page_animation(&self) -> Duration {
        Duration::from_millis(self.page_animation_ms.cast())
    }

    /// Window over which drag velocity is measured at release
    #[inline]
    pub fn kinetic_timeout(&self) -> Duration {
        Duration::from_millis(self.kinetic_timeout_ms.cast())
    }

    /// Kinetic scrolling decay: `(mul, sub)`
    ///
    /// The `mul` factor describes exponential decay: effectively, velocity is
    /// multiplied by `mul` every second. This is the dominant decay factor at
    /// high speeds; `mul = 1.0` implies no decay.
    ///
    /// The `sub` factor describes linear decay: effectively, speed is reduced
    /// by `sub` every second. This is the dominant decay factor at low speeds.
    #[inline]
    pub fn kinetic_decay(&self) -> (f32, f32) {
        (self.kinetic_decay_mul, self.kinetic_decay_sub)
    }

    /// Read and validate from `path`
    ///
    /// If `format` is [`Format::None`] it is guessed from the path.
    #[cfg(feature = "serde")]
    pub fn read_path(path: &Path, format: Format) -> Result<Self, Error> {
        let config: PagingConfig = format.read_path(path)?;
        config.validate()?;
        log::debug!("PagingConfig::read_path: {config:?}");
        Ok(config)
    }

    /// Validate then write to `path`
    ///
    /// If `format` is [`Format::None`] it is guessed from the path.
    #[cfg(feature = "serde")]
    pub fn write_path(&self, path: &Path, format: Format) -> Result<(), Error> {
        self.validate()?;
        format.write_path(path, self)
    }
}

mod defaults {
    pub fn momentum_threshold() -> f32 {
        50.0
    }
    pub fn deceleration() -> f32 {
        2500.0
    }
    pub fn momentum_animation_ms() -> u32 {
        300
    }
    pub fn page_animation_ms() -> u32 {
        250
    }
    pub fn kinetic_timeout_ms() -> u32 {
        50
    }
    pub fn kinetic_decay_mul() -> f32 {
        0.625
    }
    pub fn kinetic_decay_sub() -> f32 {
        200.0
    }
    pub fn overscroll() -> f32 {
        0.0
    }
}
