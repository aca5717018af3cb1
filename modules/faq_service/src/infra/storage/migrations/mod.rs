//! Database migrations for FAQ service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_faq::Migration),
            Box::new(m20250301_000002_create_faq_category::Migration),
            Box::new(m20250301_000003_create_url_rewrite::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Faq {
    Table,
    FaqId,
    Title,
    Content,
    Identifier,
    IsActive,
    CreationTime,
    UpdateTime,
}

#[derive(DeriveIden)]
enum FaqStore {
    Table,
    FaqId,
    StoreId,
}

#[derive(DeriveIden)]
enum FaqCategory {
    Table,
    CategoryId,
    Title,
    Identifier,
    IsActive,
    SortOrder,
    CreationTime,
    UpdateTime,
}

#[derive(DeriveIden)]
enum FaqCategoryId {
    Table,
    FaqId,
    CategoryId,
}

#[derive(DeriveIden)]
enum UrlRewrite {
    Table,
    UrlRewriteId,
    EntityType,
    EntityId,
    RequestPath,
    TargetPath,
    RedirectType,
    StoreId,
    IsAutogenerated,
}

mod m20250301_000001_create_faq {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_faq"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Faq::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Faq::FaqId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Faq::Title).string().not_null())
                        .col(ColumnDef::new(Faq::Content).text().not_null())
                        .col(ColumnDef::new(Faq::Identifier).string_len(100).not_null())
                        .col(
                            ColumnDef::new(Faq::IsActive)
                                .small_integer()
                                .not_null()
                                .default(1),
                        )
                        .col(
                            ColumnDef::new(Faq::CreationTime)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Faq::UpdateTime)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_faq_identifier")
                        .table(Faq::Table)
                        .col(Faq::Identifier)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(FaqStore::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(FaqStore::FaqId).integer().not_null())
                        .col(ColumnDef::new(FaqStore::StoreId).integer().not_null())
                        .primary_key(Index::create().col(FaqStore::FaqId).col(FaqStore::StoreId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_faq_store_faq")
                                .from(FaqStore::Table, FaqStore::FaqId)
                                .to(Faq::Table, Faq::FaqId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_faq_store_store_id")
                        .table(FaqStore::Table)
                        .col(FaqStore::StoreId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FaqStore::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Faq::Table).to_owned())
                .await
        }
    }
}

mod m20250301_000002_create_faq_category {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_faq_category"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(FaqCategory::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FaqCategory::CategoryId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(FaqCategory::Title).string().not_null())
                        .col(
                            ColumnDef::new(FaqCategory::Identifier)
                                .string_len(100)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(FaqCategory::IsActive)
                                .small_integer()
                                .not_null()
                                .default(1),
                        )
                        .col(
                            ColumnDef::new(FaqCategory::SortOrder)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(FaqCategory::CreationTime)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(FaqCategory::UpdateTime)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // links reference faq only; a dangling category_id finds no category
            manager
                .create_table(
                    Table::create()
                        .table(FaqCategoryId::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(FaqCategoryId::FaqId).integer().not_null())
                        .col(ColumnDef::new(FaqCategoryId::CategoryId).integer().not_null())
                        .primary_key(
                            Index::create()
                                .col(FaqCategoryId::FaqId)
                                .col(FaqCategoryId::CategoryId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_faq_category_id_faq")
                                .from(FaqCategoryId::Table, FaqCategoryId::FaqId)
                                .to(Faq::Table, Faq::FaqId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FaqCategoryId::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(FaqCategory::Table).to_owned())
                .await
        }
    }
}

mod m20250301_000003_create_url_rewrite {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_url_rewrite"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(UrlRewrite::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(UrlRewrite::UrlRewriteId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(UrlRewrite::EntityType).string_len(32).not_null())
                        .col(ColumnDef::new(UrlRewrite::EntityId).integer().not_null())
                        .col(ColumnDef::new(UrlRewrite::RequestPath).string().not_null())
                        .col(ColumnDef::new(UrlRewrite::TargetPath).string().not_null())
                        .col(
                            ColumnDef::new(UrlRewrite::RedirectType)
                                .small_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(UrlRewrite::StoreId).integer().not_null())
                        .col(
                            ColumnDef::new(UrlRewrite::IsAutogenerated)
                                .small_integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_url_rewrite_request_path_store_id")
                        .table(UrlRewrite::Table)
                        .col(UrlRewrite::RequestPath)
                        .col(UrlRewrite::StoreId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_url_rewrite_entity")
                        .table(UrlRewrite::Table)
                        .col(UrlRewrite::EntityType)
                        .col(UrlRewrite::EntityId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(UrlRewrite::Table).to_owned())
                .await
        }
    }
}
