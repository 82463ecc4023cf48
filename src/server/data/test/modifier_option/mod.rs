use std::collections::BTreeSet;

use crate::server::{
    data::modifier_option::ModifierOptionRepository, error::catalog::CatalogError,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_ids_strict;
