//! Traits describing the host collaborators the shipping core consumes.
//!
//! Read-only oracles expose the tile map, the item catalog, commerce progress,
//! and session authority. The [`Env`] aggregate bundles them so the scanner and
//! settlement can reach everything they need without touching host globals.
//! Mutable host state (containers, bookkeeping sinks) is passed separately by
//! `&mut` through [`ContainerStore`] and [`SettlementSink`].
mod error;
mod host;
mod items;
mod sink;
mod world;

pub use error::OracleError;
pub use host::{CommerceOracle, SessionOracle};
pub use items::{ItemFlags, ItemInfo, ItemOracle};
pub use sink::{SaleTask, SettlementSink};
pub use world::{ContainerStore, WorldOracle};

/// Aggregates read-only oracles required by the scanner and settlement.
#[derive(Debug)]
pub struct Env<'a, W, I, C, S>
where
    W: WorldOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: CommerceOracle + ?Sized,
    S: SessionOracle + ?Sized,
{
    world: Option<&'a W>,
    items: Option<&'a I>,
    commerce: Option<&'a C>,
    session: Option<&'a S>,
}

// Derived impls would bound every oracle type by `Copy`.
impl<W, I, C, S> Clone for Env<'_, W, I, C, S>
where
    W: WorldOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: CommerceOracle + ?Sized,
    S: SessionOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, I, C, S> Copy for Env<'_, W, I, C, S>
where
    W: WorldOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: CommerceOracle + ?Sized,
    S: SessionOracle + ?Sized,
{
}

pub type ShippingEnv<'a> =
    Env<'a, dyn WorldOracle + 'a, dyn ItemOracle + 'a, dyn CommerceOracle + 'a, dyn SessionOracle + 'a>;

impl<'a, W, I, C, S> Env<'a, W, I, C, S>
where
    W: WorldOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: CommerceOracle + ?Sized,
    S: SessionOracle + ?Sized,
{
    pub fn new(
        world: Option<&'a W>,
        items: Option<&'a I>,
        commerce: Option<&'a C>,
        session: Option<&'a S>,
    ) -> Self {
        Self {
            world,
            items,
            commerce,
            session,
        }
    }

    pub fn with_all(world: &'a W, items: &'a I, commerce: &'a C, session: &'a S) -> Self {
        Self::new(Some(world), Some(items), Some(commerce), Some(session))
    }

    pub fn empty() -> Self {
        Self {
            world: None,
            items: None,
            commerce: None,
            session: None,
        }
    }

    /// Returns the WorldOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::WorldNotAvailable` if no world oracle was provided.
    pub fn world(&self) -> Result<&'a W, OracleError> {
        self.world.ok_or(OracleError::WorldNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the CommerceOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CommerceNotAvailable` if no commerce oracle was provided.
    pub fn commerce(&self) -> Result<&'a C, OracleError> {
        self.commerce.ok_or(OracleError::CommerceNotAvailable)
    }

    /// Returns the SessionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SessionNotAvailable` if no session oracle was provided.
    pub fn session(&self) -> Result<&'a S, OracleError> {
        self.session.ok_or(OracleError::SessionNotAvailable)
    }

    /// Returns the current commerce level from the commerce oracle.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CommerceNotAvailable` if no commerce oracle was provided.
    pub fn commerce_level(&self) -> Result<u32, OracleError> {
        Ok(self.commerce()?.commerce_level())
    }
}

impl<'a, W, I, C, S> Env<'a, W, I, C, S>
where
    W: WorldOracle + 'a,
    I: ItemOracle + 'a,
    C: CommerceOracle + 'a,
    S: SessionOracle + 'a,
{
    /// Converts this environment into a trait-object based `ShippingEnv`.
    pub fn into_shipping_env(self) -> ShippingEnv<'a> {
        let world: Option<&'a dyn WorldOracle> = self.world.map(|world| world as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let commerce: Option<&'a dyn CommerceOracle> = self.commerce.map(|commerce| commerce as _);
        let session: Option<&'a dyn SessionOracle> = self.session.map(|session| session as _);
        Env::new(world, items, commerce, session)
    }
}
