//! Model kind tag selecting the characteristic-polynomial sign convention.

use serde::Serialize;

/// Which family of linear time-series model the coefficients describe.
///
/// AR and MA checks share one result shape; the kind tag only selects the
/// sign convention used when building the characteristic polynomial and
/// the vocabulary used in rendered messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Autoregressive: the series regressed on its own past values.
    Ar,
    /// Moving-average: the series expressed through past noise terms.
    Ma,
}

impl ModelKind {
    /// Both kinds in declaration order.
    pub const ALL: [ModelKind; 2] = [Self::Ar, Self::Ma];

    /// The property this kind's check establishes.
    pub fn property(self) -> &'static str {
        match self {
            Self::Ar => "stationarity",
            Self::Ma => "invertibility",
        }
    }

    /// Conventional symbol for this kind's coefficients.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Ar => "phi",
            Self::Ma => "theta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names() {
        assert_eq!(ModelKind::Ar.property(), "stationarity");
        assert_eq!(ModelKind::Ma.property(), "invertibility");
    }

    #[test]
    fn symbols() {
        assert_eq!(ModelKind::Ar.symbol(), "phi");
        assert_eq!(ModelKind::Ma.symbol(), "theta");
    }

    #[test]
    fn all_ordering() {
        assert_eq!(ModelKind::ALL, [ModelKind::Ar, ModelKind::Ma]);
    }

    #[test]
    fn trait_assertions() {
        fn assert_copy<T: Copy>() {}
        fn assert_eq<T: Eq>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<ModelKind>();
        assert_eq::<ModelKind>();
        assert_hash::<ModelKind>();
    }
}
