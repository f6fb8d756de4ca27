use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, GuessResult},
    config::SHIPS,
    coord::Coordinate,
    placement::{place_fleet, Occupancy},
    ship::{Ship, ShipType},
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Every ship in the fleet was sunk.
    Won,
    /// The miss budget ran out.
    Exhausted,
}

impl GameStatus {
    pub fn is_complete(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One round of single-player Battleship: a hidden fleet, the visible board,
/// and the misses counted against the budget.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    fleet: Vec<Ship>,
    guesses: Vec<Coordinate>,
    max_misses: usize,
    pending: Option<Coordinate>,
}

impl Game {
    /// Start a round with the standard catalog placed at random.
    pub fn new<R: Rng>(max_misses: usize, rng: &mut R) -> Result<Self, BoardError> {
        Self::with_catalog(max_misses, &SHIPS, rng)
    }

    /// Start a round with one randomly placed ship per `catalog` entry.
    pub fn with_catalog<R: Rng>(
        max_misses: usize,
        catalog: &[ShipType],
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let fleet = place_fleet(rng, catalog)?;
        Ok(Self::from_parts(max_misses, fleet))
    }

    /// Start a round with an already placed fleet.
    ///
    /// Fails with `ShipOverlaps` if any two ships share a cell.
    pub fn with_fleet(max_misses: usize, fleet: Vec<Ship>) -> Result<Self, BoardError> {
        let mut taken = Occupancy::new();
        for ship in &fleet {
            let cells = Occupancy::from_coords(ship.cells())?;
            if !(taken & cells).is_empty() {
                return Err(BoardError::ShipOverlaps);
            }
            taken |= cells;
        }
        Ok(Self::from_parts(max_misses, fleet))
    }

    fn from_parts(max_misses: usize, fleet: Vec<Ship>) -> Self {
        let board = Board::new();
        log::debug!("new round: {} ship(s), {} miss budget", fleet.len(), max_misses);
        Self {
            board,
            fleet,
            guesses: Vec::new(),
            max_misses,
            pending: None,
        }
    }

    /// Resolve a guess against the fleet.
    ///
    /// The first ship holding `coord` as an unhit cell takes the hit. A guess
    /// at empty water or at an already hit cell resolves to `Miss`.
    pub fn resolve_guess(&mut self, coord: Coordinate) -> Result<GuessResult, BoardError> {
        if self.status().is_complete() {
            return Err(BoardError::RoundOver);
        }
        self.pending = Some(coord);
        let Some(ship) = self.fleet.iter_mut().find(|s| s.has_unhit(coord)) else {
            log::debug!("{} -> miss", coord);
            return Ok(GuessResult::Miss);
        };
        ship.register_hit(coord);
        if ship.is_sunk() {
            log::info!("You sunk the {}!", ship.name());
            return Ok(GuessResult::Sink(ship.name()));
        }
        log::debug!("{} -> hit", coord);
        Ok(GuessResult::Hit)
    }

    /// Record a resolved guess on the board.
    ///
    /// Marks only blank cells. Every miss counts against the budget, even a
    /// repeat at a cell already marked. The guess that ended the round may
    /// still be applied; anything later is `RoundOver`.
    pub fn apply_result(&mut self, hit: bool, coord: Coordinate) -> Result<(), BoardError> {
        let pending = self.pending.take();
        if self.status().is_complete() && pending != Some(coord) {
            return Err(BoardError::RoundOver);
        }
        if hit {
            self.board.mark_hit(coord);
        } else {
            self.board.mark_miss(coord);
            self.guesses.push(coord);
        }
        Ok(())
    }

    /// Resolve `coord` and apply the result in one step.
    pub fn guess(&mut self, coord: Coordinate) -> Result<GuessResult, BoardError> {
        let result = self.resolve_guess(coord)?;
        self.apply_result(result.is_hit(), coord)?;
        Ok(result)
    }

    /// Evaluate the round. The miss budget is checked before the fleet, so
    /// running out of misses is reported even if every ship is also sunk.
    pub fn status(&self) -> GameStatus {
        if self.guesses.len() >= self.max_misses {
            GameStatus::Exhausted
        } else if self.fleet.iter().all(Ship::is_sunk) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// `true` once the round has ended, logging how it ended.
    pub fn is_complete(&self) -> bool {
        match self.status() {
            GameStatus::InProgress => false,
            GameStatus::Exhausted => {
                log::info!("SORRY! NO GUESSES LEFT.");
                true
            }
            GameStatus::Won => {
                log::info!("YOU WIN!");
                true
            }
        }
    }

    /// Player-visible marks for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships(&self) -> &[Ship] {
        &self.fleet
    }

    /// Misses recorded so far, in guess order.
    pub fn misses(&self) -> &[Coordinate] {
        &self.guesses
    }

    pub fn max_misses(&self) -> usize {
        self.max_misses
    }

    pub fn misses_remaining(&self) -> usize {
        self.max_misses.saturating_sub(self.guesses.len())
    }

    /// Names of the ships sunk so far, in fleet order.
    pub fn sunk_ships(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fleet.iter().filter(|s| s.is_sunk()).map(Ship::name)
    }
}
