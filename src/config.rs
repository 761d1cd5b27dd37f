//! Plain numeric run settings for a driver.
//!
//! Nothing here knows about rendering; a driver maps the resulting cells onto whatever
//! scale, colours and frame rate it likes.

use crate::rule::{max_rule_number, MAX_RULE_1D};
use crate::{Automaton1D, Automaton2D, Error, InitMode, Neighborhood, Result};
use boolinator::Boolinator;
use log::debug;
use ndarray::{Array2, ArrayView1, ArrayView2};
use std::convert::TryFrom;

/// Half the length of the bar placed by [`GridConfig::seed_line`].
const SEED_RADIUS: usize = 3;

/// Settings for a 2-D run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub rule_number: u32,
    /// Either 4 or 8.
    pub neighbor_count: usize,
    /// Generations to compute before the automaton stops changing.
    pub num_steps: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 220,
            height: 220,
            rule_number: 746,
            neighbor_count: 8,
            num_steps: 300,
        }
    }
}

impl GridConfig {
    /// Check the dimensions, neighbor count and rule number together.
    pub fn validate(&self) -> Result<Neighborhood> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::EmptyGrid);
        }
        let neighborhood = Neighborhood::try_from(self.neighbor_count)?;
        let max = max_rule_number(neighborhood);
        if self.rule_number > max {
            return Err(Error::RuleNumberOutOfRange {
                rule: self.rule_number,
                max,
            });
        }
        Ok(neighborhood)
    }

    /// A horizontal bar of up to 7 live cells centered in the grid.
    pub fn seed_line(&self) -> Array2<f64> {
        let (cy, cx) = (self.height / 2, self.width / 2);
        let lo = cx.saturating_sub(SEED_RADIUS);
        let hi = cx + SEED_RADIUS;
        Array2::from_shape_fn((self.height, self.width), |(y, x)| {
            if y == cy && x >= lo && x <= hi {
                1.0
            } else {
                0.0
            }
        })
    }

    /// Check that a custom initial shape has the configured dimensions.
    pub fn check_shape(&self, shape: ArrayView2<'_, f64>) -> Result<()> {
        let expected = (self.height, self.width);
        (shape.dim() == expected).as_result(
            (),
            Error::DimensionMismatch {
                expected,
                got: shape.dim(),
            },
        )
    }

    /// Build the automaton, starting from `custom` when its dimensions match and from
    /// [`GridConfig::seed_line`] otherwise.
    pub fn build(&self, custom: Option<ArrayView2<'_, f64>>) -> Result<Automaton2D> {
        self.validate()?;
        match custom {
            Some(shape) => match self.check_shape(shape) {
                Ok(()) => Automaton2D::new(shape, self.num_steps),
                Err(e) => {
                    debug!("using the seed line instead of the custom shape: {}", e);
                    Automaton2D::new(self.seed_line().view(), self.num_steps)
                }
            },
            None => Automaton2D::new(self.seed_line().view(), self.num_steps),
        }
    }
}

/// Settings for a 1-D run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
pub struct RowConfig {
    pub width: usize,
    pub rule_number: u32,
    pub init: InitMode,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            width: 220,
            rule_number: 30,
            init: InitMode::Default,
        }
    }
}

impl RowConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::EmptyGrid);
        }
        if self.rule_number > MAX_RULE_1D {
            return Err(Error::RuleNumberOutOfRange {
                rule: self.rule_number,
                max: MAX_RULE_1D,
            });
        }
        Ok(())
    }

    pub fn build(&self, custom: Option<ArrayView1<'_, f64>>) -> Result<Automaton1D> {
        self.validate()?;
        Ok(Automaton1D::new(self.width, self.init, custom))
    }
}
