use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub dish_name: String,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    /// JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub standard_ingredients: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub standard_steps: Json,
    #[sea_orm(column_type = "Text")]
    pub standard_tips: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub scratch_ingredients: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub scratch_steps: Json,
    #[sea_orm(column_type = "Text")]
    pub scratch_tips: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
