/// Progression value that scales the settlement bonus.
pub trait CommerceOracle: Send + Sync {
    /// Current level of the commerce licence.
    fn commerce_level(&self) -> u32;
}

/// Multiplayer session authority.
///
/// Only the authoritative host may run settlement; other participants receive
/// the results through the host's own state sync.
pub trait SessionOracle: Send + Sync {
    fn is_authoritative_host(&self) -> bool;
}
