//! Course definition types.
//!
//! - `Hole` - a single hole with its par
//! - `Course` - a named, ordered list of holes

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest par a hole may have
pub const MAX_PAR: u32 = 20;

/// Most holes a course may have (four 18-hole rounds)
pub const MAX_HOLES: usize = 72;

/// A single hole on a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hole {
    par: u32,
}

impl Hole {
    /// A hole with par in `1..=MAX_PAR`
    pub fn new(par: u32) -> Option<Self> {
        (1..=MAX_PAR).contains(&par).then_some(Self { par })
    }

    pub fn par(&self) -> u32 {
        self.par
    }
}

/// A named course with at least one hole
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    name: String,
    holes: Vec<Hole>,
}

impl Course {
    /// Build a course from a list of pars (one per hole, in play order)
    pub fn new(name: impl Into<String>, pars: &[u32]) -> Result<Self> {
        if pars.is_empty() {
            return Err(Error::EmptyCourse);
        }
        if pars.len() > MAX_HOLES {
            return Err(Error::TooManyHoles {
                holes: pars.len(),
                max: MAX_HOLES,
            });
        }

        let holes = pars
            .iter()
            .enumerate()
            .map(|(hole, &par)| Hole::new(par).ok_or(Error::InvalidPar { hole, par }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.into(),
            holes,
        })
    }

    /// Build a course where every hole has the same par
    pub fn uniform(name: impl Into<String>, holes: usize, par: u32) -> Result<Self> {
        if holes > MAX_HOLES {
            return Err(Error::TooManyHoles {
                holes,
                max: MAX_HOLES,
            });
        }
        Self::new(name, &vec![par; holes])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn hole(&self, index: usize) -> Option<&Hole> {
        self.holes.get(index)
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Always false for a constructed course
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(Hole::par).sum()
    }
}
