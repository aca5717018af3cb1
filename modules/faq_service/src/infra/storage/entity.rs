//! SeaORM entities for database tables

/// FAQ question table
pub mod faq {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "faq")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub faq_id: i32,

        pub title: String,

        #[sea_orm(column_type = "Text")]
        pub content: String,

        /// URL key
        pub identifier: String,

        /// 1 = active, 0 = inactive
        pub is_active: i16,

        pub creation_time: DateTimeUtc,

        pub update_time: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Store visibility rows
        #[sea_orm(has_many = "super::faq_store::Entity")]
        Stores,
        /// Category link rows
        #[sea_orm(has_many = "super::faq_category_id::Entity")]
        CategoryLinks,
    }

    impl Related<super::faq_store::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Stores.def()
        }
    }

    impl Related<super::faq_category_id::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CategoryLinks.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// FAQ to store visibility rows
pub mod faq_store {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "faq_store")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub faq_id: i32,

        /// 0 = default scope
        #[sea_orm(primary_key, auto_increment = false)]
        pub store_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::faq::Entity",
            from = "Column::FaqId",
            to = "super::faq::Column::FaqId"
        )]
        Faq,
    }

    impl Related<super::faq::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Faq.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// FAQ to category link rows
pub mod faq_category_id {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "faq_category_id")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub faq_id: i32,

        #[sea_orm(primary_key, auto_increment = false)]
        pub category_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::faq::Entity",
            from = "Column::FaqId",
            to = "super::faq::Column::FaqId"
        )]
        Faq,
        #[sea_orm(
            belongs_to = "super::faq_category::Entity",
            from = "Column::CategoryId",
            to = "super::faq_category::Column::CategoryId"
        )]
        Category,
    }

    impl Related<super::faq::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Faq.def()
        }
    }

    impl Related<super::faq_category::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Category.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// FAQ category table
pub mod faq_category {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "faq_category")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub category_id: i32,

        pub title: String,

        /// URL key
        pub identifier: String,

        /// 1 = active, 0 = inactive
        pub is_active: i16,

        pub sort_order: i32,

        pub creation_time: DateTimeUtc,

        pub update_time: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::faq_category_id::Entity")]
        FaqLinks,
    }

    impl Related<super::faq_category_id::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::FaqLinks.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Host platform URL rewrite table
pub mod url_rewrite {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "url_rewrite")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub url_rewrite_id: i32,

        /// Owning entity kind, e.g. "faq-question"
        pub entity_type: String,

        pub entity_id: i32,

        /// Storefront path, e.g. "faq/reset-password.html"
        pub request_path: String,

        /// Internal route, e.g. "faq/question/view/faq_id/3"
        pub target_path: String,

        pub redirect_type: i16,

        pub store_id: i32,

        pub is_autogenerated: i16,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
