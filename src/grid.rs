use crate::rule::RuleTable2D;
use crate::{cell, Error, Result, Rule2D};
use itertools::Itertools;
use log::{trace, warn};
use ndarray::{azip, s, Array2, ArrayView2, Zip};
use std::fmt;

/// A 2-D automaton on a grid surrounded by one ring of dead padding cells.
///
/// The padding is never written, so every generation sees a fixed dead boundary and the
/// neighbor lookups need no edge cases. Evolution stops once `num_steps` generations
/// have been computed; stepping after that is a no-op.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
pub struct Automaton2D {
    cells: Array2<f64>,
    width: usize,
    height: usize,
    num_steps: usize,
    current_step: usize,
}

impl Automaton2D {
    /// Make a new automaton from the initial cells, indexed `(row, column)`.
    ///
    /// Any non-zero initial value becomes a live cell.
    pub fn new(initial: ArrayView2<'_, f64>, num_steps: usize) -> Result<Self> {
        let (height, width) = initial.dim();
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }
        let mut cells = Array2::zeros((height + 2, width + 2));
        azip!((dest in &mut cells.slice_mut(s![1..-1, 1..-1]), &c in &initial) {
            *dest = cell(c != 0.0);
        });
        Ok(Self {
            cells,
            width,
            height,
            num_steps,
            current_step: 0,
        })
    }

    /// Advance one generation with a rule number over 4 or 8 neighbors.
    ///
    /// Once the step budget is spent this returns the grid unchanged. An invalid neighbor
    /// count or a rule number too wide for it is reported as an error and leaves both the
    /// grid and the step counter untouched.
    pub fn step(&mut self, rule: u32, neighbor_count: usize) -> Result<ArrayView2<'_, f64>> {
        self.step_coded(rule, neighbor_count, false)
    }

    /// Same as [`Automaton2D::step`] but computes the cells in parallel.
    pub fn step_parallel(
        &mut self,
        rule: u32,
        neighbor_count: usize,
    ) -> Result<ArrayView2<'_, f64>> {
        self.step_coded(rule, neighbor_count, true)
    }

    fn step_coded(
        &mut self,
        rule: u32,
        neighbor_count: usize,
        parallel: bool,
    ) -> Result<ArrayView2<'_, f64>> {
        if self.is_finished() {
            return Ok(self.cells());
        }
        let table = RuleTable2D::with_count(rule, neighbor_count).map_err(|e| {
            warn!("refusing to step rule {}: {}", rule, e);
            e
        })?;
        if parallel {
            self.advance_parallel(&table);
        } else {
            self.advance(&table);
        }
        Ok(self.cells())
    }

    /// Advance one generation with an arbitrary rule over the 3x3 window of each cell.
    ///
    /// The step budget applies the same way as for rule numbers.
    pub fn step_with<R>(&mut self, rule: &R) -> ArrayView2<'_, f64>
    where
        R: Rule2D + ?Sized,
    {
        if !self.is_finished() {
            self.advance(rule);
        }
        self.cells()
    }

    /// Same as [`Automaton2D::step_with`] but computes the cells in parallel.
    pub fn step_with_parallel<R>(&mut self, rule: &R) -> ArrayView2<'_, f64>
    where
        R: Rule2D + Sync + ?Sized,
    {
        if !self.is_finished() {
            self.advance_parallel(rule);
        }
        self.cells()
    }

    /// Every 3x3 window of the padded grid is centered on exactly one interior cell, so
    /// the whole next generation is read from the previous one before anything is written.
    fn advance<R>(&mut self, rule: &R)
    where
        R: Rule2D + ?Sized,
    {
        let next = Zip::from(self.cells.windows((3, 3)))
            .map_collect(|window| cell(rule.alive(window)));
        self.commit(next);
    }

    fn advance_parallel<R>(&mut self, rule: &R)
    where
        R: Rule2D + Sync + ?Sized,
    {
        let next = Zip::from(self.cells.windows((3, 3)))
            .par_map_collect(|window| cell(rule.alive(window)));
        self.commit(next);
    }

    fn commit(&mut self, next: Array2<f64>) {
        self.cells.slice_mut(s![1..-1, 1..-1]).assign(&next);
        self.current_step += 1;
        trace!(
            "computed generation {} of {}",
            self.current_step,
            self.num_steps
        );
    }

    /// Iterate over the next `generations` grids produced by a rule number.
    ///
    /// Iteration ends early after the first refused step or once the budget is spent.
    pub fn evolve(
        &mut self,
        rule: u32,
        neighbor_count: usize,
        generations: usize,
    ) -> impl Iterator<Item = Result<Array2<f64>>> + '_ {
        (0..generations).scan(false, move |failed, _| {
            if *failed || self.is_finished() {
                return None;
            }
            let next = self.step(rule, neighbor_count).map(|cells| cells.to_owned());
            *failed = next.is_err();
            Some(next)
        })
    }

    /// Resume a run that already computed `current_step` generations.
    #[cfg(feature = "persist")]
    pub(crate) fn with_progress(mut self, current_step: usize) -> Self {
        self.current_step = current_step.min(self.num_steps);
        self
    }

    /// Reset the step counter so the automaton can run another `num_steps` generations.
    pub fn reset_counter(&mut self) {
        self.current_step = 0;
    }

    /// Get the cells without the padding, indexed `(row, column)`.
    #[inline]
    pub fn cells(&self) -> ArrayView2<'_, f64> {
        self.cells.slice(s![1..-1, 1..-1])
    }

    /// Get the cells including the padding ring.
    #[inline]
    pub fn padded(&self) -> ArrayView2<'_, f64> {
        self.cells.view()
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells().iter().filter(|&&c| c != 0.0).count()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the step budget is spent.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.num_steps
    }
}

impl fmt::Display for Automaton2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .cells()
            .outer_iter()
            .map(|row| format!("[{}]", row.iter().map(|&c| c as u8).join(" ")))
            .join("\n ");
        write!(f, "[{}]", rows)
    }
}
