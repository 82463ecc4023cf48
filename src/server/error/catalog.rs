use sea_orm::DbErr;
use thiserror::Error;

/// Failures of strict catalog batch lookups.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fewer rows came back than distinct ids were requested.
    ///
    /// Any miss fails the whole batch; callers never see partial results.
    #[error("{entity} not found: requested {requested}, found {found}")]
    NotFound {
        /// Catalog entity that was looked up ("menu item", "modifier option")
        entity: &'static str,
        /// Number of distinct ids requested
        requested: usize,
        /// Number of rows returned
        found: usize,
    },

    /// Database error while running the lookup.
    #[error(transparent)]
    Db(#[from] DbErr),
}
