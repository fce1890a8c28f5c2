use crate::{
    data::language::LanguageRepository,
    model::language::{CreateLanguageParams, UpdateLanguageParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
