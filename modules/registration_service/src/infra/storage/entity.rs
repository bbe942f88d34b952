//! SeaORM entities for database tables

/// Mentors table
pub mod mentor {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "mentors")]
    pub struct Model {
        /// Login username (primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub username: String,
        pub name: String,
        pub email: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Students table
pub mod student {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "students")]
    pub struct Model {
        /// Login username (primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub username: String,
        pub name: String,
        pub email: String,
        pub college: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
