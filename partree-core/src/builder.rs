//! Builder utilities for configuring [`PartialTreeMst`] runs.

use crate::{linkage::Linkage, solver::PartialTreeMst};

/// Configures and constructs [`PartialTreeMst`] instances.
///
/// # Examples
/// ```
/// use partree_core::{Linkage, MstBuilder};
///
/// let solver = MstBuilder::new().with_linkage(Linkage::Chained).build();
/// assert_eq!(solver.linkage(), Linkage::Chained);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MstBuilder {
    linkage: Linkage,
}

impl MstBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use partree_core::{Linkage, MstBuilder};
    ///
    /// assert_eq!(MstBuilder::new().linkage(), Linkage::Compressed);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the root linkage strategy.
    #[must_use]
    pub const fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = linkage;
        self
    }

    /// Returns the configured root linkage strategy.
    #[must_use]
    pub const fn linkage(&self) -> Linkage {
        self.linkage
    }

    /// Constructs a [`PartialTreeMst`] from the configuration.
    #[must_use]
    pub const fn build(self) -> PartialTreeMst {
        PartialTreeMst::new(self.linkage)
    }
}
