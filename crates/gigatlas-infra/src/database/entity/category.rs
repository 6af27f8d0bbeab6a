//! Category entity for SeaORM.

use sea_orm::entity::prelude::*;

use gigatlas_core::domain::{Locale, Slug};
use gigatlas_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub slug: String,
    pub locale: String,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Category.
///
/// Rows with a blank slug or locale are reported as integrity violations.
impl TryFrom<Model> for gigatlas_core::domain::Category {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let invalid = |e: gigatlas_core::DomainError| {
            RepoError::Integrity(format!("category {}: {}", model.id, e))
        };

        Ok(Self {
            id: model.id,
            slug: Slug::new(model.slug.clone()).map_err(invalid)?,
            locale: Locale::new(model.locale.clone()).map_err(invalid)?,
            name: model.name,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}
