use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub work_email: String,
    pub gender: String,
    pub nationality: String,
    pub contact: i64,
    pub role: String,

    // Team memberships (JSON array of strings)
    pub teams: String,

    pub status: String,

    // Optional profile fields
    pub date_of_birth: Option<Date>,
    pub profile_pic: Option<String>,

    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
