//! `RiverCrossing`: missionaries and cannibals.
//!
//! State: `(missionaries_left, cannibals_left, boat)`. A load of
//! `(missionaries, cannibals)` crosses in the direction the boat is facing.
//! Every crossing costs one unit.
//!
//! Safety rule, applied to each bank separately: missionaries on a bank must
//! not be outnumbered by cannibals on that bank, unless that bank has no
//! missionaries at all.

use std::fmt;

use statespace_search::Problem;

use crate::contract::{World, WorldError};

/// Which bank the boat is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bank {
    /// Starting bank.
    Left,
    /// Destination bank.
    Right,
}

impl Bank {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// People on the starting bank plus the boat position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiverState {
    pub missionaries_left: u8,
    pub cannibals_left: u8,
    pub boat: Bank,
}

impl RiverState {
    #[must_use]
    pub const fn new(missionaries_left: u8, cannibals_left: u8, boat: Bank) -> Self {
        Self {
            missionaries_left,
            cannibals_left,
            boat,
        }
    }
}

impl fmt::Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let boat = match self.boat {
            Bank::Left => 1,
            Bank::Right => 0,
        };
        write!(
            f,
            "({}, {}, {boat})",
            self.missionaries_left, self.cannibals_left
        )
    }
}

/// A boat load: how many of each group cross together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Load {
    pub missionaries: u8,
    pub cannibals: u8,
}

impl Load {
    #[must_use]
    pub const fn new(missionaries: u8, cannibals: u8) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    fn size(self) -> u16 {
        u16::from(self.missionaries) + u16::from(self.cannibals)
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.missionaries, self.cannibals)
    }
}

/// The loads of the classic three-and-three puzzle, in enumeration order.
pub const CLASSIC_LOADS: [Load; 5] = [
    Load::new(1, 0),
    Load::new(2, 0),
    Load::new(0, 1),
    Load::new(0, 2),
    Load::new(1, 1),
];

/// Missionaries and cannibals with configurable populations and loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiverCrossing {
    missionaries: u8,
    cannibals: u8,
    loads: Vec<Load>,
}

impl RiverCrossing {
    /// Build a crossing puzzle with an explicit load list.
    ///
    /// Loads are tried in the given order when enumerating actions.
    ///
    /// # Errors
    ///
    /// - [`WorldError::InvalidPopulation`] if nobody needs to cross.
    /// - [`WorldError::InvalidBoat`] if there are no loads or a load is empty.
    pub fn new(missionaries: u8, cannibals: u8, loads: Vec<Load>) -> Result<Self, WorldError> {
        if missionaries == 0 && cannibals == 0 {
            return Err(WorldError::InvalidPopulation {
                detail: "at least one person must cross".into(),
            });
        }
        if loads.is_empty() {
            return Err(WorldError::InvalidBoat {
                detail: "no loads given".into(),
            });
        }
        if let Some(empty) = loads.iter().find(|l| l.size() == 0) {
            return Err(WorldError::InvalidBoat {
                detail: format!("load {empty} moves nobody"),
            });
        }
        Ok(Self {
            missionaries,
            cannibals,
            loads,
        })
    }

    /// Build a puzzle whose boat carries one to `capacity` people.
    ///
    /// Loads are enumerated missionaries-only, then cannibals-only, then mixed,
    /// each by ascending size, so `with_capacity(3, 3, 2)` reproduces
    /// [`RiverCrossing::classic`].
    ///
    /// # Errors
    ///
    /// Same as [`RiverCrossing::new`]; a zero capacity is
    /// [`WorldError::InvalidBoat`].
    pub fn with_capacity(missionaries: u8, cannibals: u8, capacity: u8) -> Result<Self, WorldError> {
        if capacity == 0 {
            return Err(WorldError::InvalidBoat {
                detail: "capacity must be at least 1".into(),
            });
        }
        let mut loads: Vec<Load> = (1..=capacity).map(|m| Load::new(m, 0)).collect();
        loads.extend((1..=capacity).map(|c| Load::new(0, c)));
        for m in 1..capacity {
            for c in 1..=capacity - m {
                loads.push(Load::new(m, c));
            }
        }
        Self::new(missionaries, cannibals, loads)
    }

    /// Three missionaries, three cannibals, a two-seat boat.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            missionaries: 3,
            cannibals: 3,
            loads: CLASSIC_LOADS.to_vec(),
        }
    }

    #[must_use]
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    #[must_use]
    pub fn goal_state(&self) -> RiverState {
        RiverState::new(0, 0, Bank::Right)
    }

    /// Whether `state` is within bounds and nobody is outnumbered.
    #[must_use]
    pub fn is_safe(&self, state: &RiverState) -> bool {
        let m = state.missionaries_left;
        let c = state.cannibals_left;
        if m > self.missionaries || c > self.cannibals {
            return false;
        }
        if m > 0 && m < c {
            return false;
        }
        let m_right = self.missionaries - m;
        let c_right = self.cannibals - c;
        if m_right > 0 && m_right < c_right {
            return false;
        }
        true
    }

    /// Move `load` across, or `None` if that many people are not on the
    /// boat's bank.
    fn cross(&self, state: &RiverState, load: Load) -> Option<RiverState> {
        let (m, c) = match state.boat {
            Bank::Left => (
                state.missionaries_left.checked_sub(load.missionaries)?,
                state.cannibals_left.checked_sub(load.cannibals)?,
            ),
            Bank::Right => (
                state.missionaries_left.checked_add(load.missionaries)?,
                state.cannibals_left.checked_add(load.cannibals)?,
            ),
        };
        if m > self.missionaries || c > self.cannibals {
            return None;
        }
        Some(RiverState::new(m, c, state.boat.opposite()))
    }
}

impl Problem for RiverCrossing {
    type State = RiverState;
    type Action = Load;

    fn initial_state(&self) -> RiverState {
        RiverState::new(self.missionaries, self.cannibals, Bank::Left)
    }

    /// Loads whose crossing leaves both banks safe, in load order.
    fn actions(&self, state: &RiverState) -> Vec<Load> {
        self.loads
            .iter()
            .copied()
            .filter(|&load| {
                self.cross(state, load)
                    .is_some_and(|next| self.is_safe(&next))
            })
            .collect()
    }

    /// Loads not offered by `actions` leave the state unchanged.
    fn result(&self, state: &RiverState, action: &Load) -> RiverState {
        self.cross(state, *action).unwrap_or(*state)
    }

    fn goal_test(&self, state: &RiverState) -> bool {
        *state == self.goal_state()
    }

    /// People still on the starting bank.
    ///
    /// Not admissible: one crossing can carry a whole boatload, so from
    /// `(1, 1, Left)` this estimates 2 where the true cost is 1. A* under
    /// this heuristic may return a longer plan than uniform-cost.
    fn heuristic(&self, state: &RiverState) -> f64 {
        f64::from(state.missionaries_left) + f64::from(state.cannibals_left)
    }
}

impl World for RiverCrossing {
    fn world_id(&self) -> &str {
        "river_crossing"
    }

    fn describe_state(&self, state: &RiverState) -> String {
        state.to_string()
    }

    fn describe_action(&self, action: &Load) -> String {
        action.to_string()
    }
}
