//! Traits describing read-only world data.
//!
//! Oracles expose static map geometry and deterministic randomness. The
//! [`Env`] aggregate bundles them so decision code can access everything it
//! needs without hard coupling to concrete implementations.
mod error;
mod map;
mod rng;

pub use error::OracleError;
pub use map::{GridMap, MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use rng::{PcgRng, RngOracle, compute_seed};

/// Aggregates the read-only oracles required by actions and the AI layer.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, M, R>
where
    M: MapOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    map: Option<&'a M>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn RngOracle + 'a>;

impl<'a, M, R> Env<'a, M, R>
where
    M: MapOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(map: Option<&'a M>, rng: Option<&'a R>) -> Self {
        Self { map, rng }
    }

    pub fn with_all(map: &'a M, rng: &'a R) -> Self {
        Self::new(Some(map), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            rng: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, M, R> Env<'a, M, R>
where
    M: MapOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based [`GameEnv`].
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(map, rng)
    }
}
