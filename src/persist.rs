use crate::{Automaton1D, Automaton2D, Error, Result};
use bincode::{deserialize_from, serialize_into};
use ndarray::Array2;
use std::io::{BufRead, BufReader, Read, Write};

impl Automaton1D {
    /// Write the row to a stream.
    pub fn save_into<W: Write>(&self, writer: W) -> Result<()> {
        serialize_into(writer, self)?;
        Ok(())
    }

    /// Read a row written by [`Automaton1D::save_into`].
    pub fn load_from<R: Read>(reader: R) -> Result<Self> {
        let row: Self = deserialize_from(reader)?;
        Ok(Self::from_cells(row.cells().to_owned()))
    }
}

impl Automaton2D {
    /// Write the grid, including the step counter, to a stream.
    ///
    /// Make sure the stream is only read back by [`Automaton2D::load_from`] of the same
    /// crate version; the encoding is not self-describing.
    pub fn save_into<W: Write>(&self, writer: W) -> Result<()> {
        serialize_into(writer, self)?;
        Ok(())
    }

    /// Read a grid written by [`Automaton2D::save_into`] and resume where it stopped.
    pub fn load_from<R: Read>(reader: R) -> Result<Self> {
        let grid: Self = deserialize_from(reader)?;
        let (height, width) = grid.padded().dim();
        if height < 3 || width < 3 {
            return Err(Error::EmptyGrid);
        }
        Ok(Self::new(grid.cells(), grid.num_steps())?.with_progress(grid.current_step()))
    }
}

/// Write a custom initial shape for a 2-D automaton.
pub fn write_initial_shape<W: Write>(writer: W, shape: &Array2<f64>) -> Result<()> {
    serialize_into(writer, shape)?;
    Ok(())
}

/// Read an optional custom initial shape for a 2-D automaton.
///
/// An empty stream means there is no custom shape.
pub fn read_initial_shape<R: Read>(reader: R) -> Result<Option<Array2<f64>>> {
    let mut reader = BufReader::new(reader);
    if reader.fill_buf().map_err(|e| Box::new(bincode::ErrorKind::Io(e)))?.is_empty() {
        return Ok(None);
    }
    Ok(Some(deserialize_from(reader)?))
}
