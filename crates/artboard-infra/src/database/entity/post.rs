//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub prompt: String,
    #[sea_orm(column_type = "Text")]
    pub photo: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for artboard_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            prompt: model.prompt,
            photo: model.photo,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<artboard_core::domain::Post> for ActiveModel {
    fn from(post: artboard_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            name: Set(post.name),
            prompt: Set(post.prompt),
            photo: Set(post.photo),
            created_at: Set(post.created_at.into()),
        }
    }
}
