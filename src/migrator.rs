use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_products_table::Migration),
            Box::new(m20240101_000002_create_parts_table::Migration),
            Box::new(m20240101_000003_create_product_part_associations_table::Migration),
            Box::new(m20240101_000004_create_orders_table::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ProductId,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Parts {
    Table,
    PartId,
    PartName,
    InventoryQuantity,
}

#[derive(DeriveIden)]
enum ProductPartAssociations {
    Table,
    Id,
    ProductId,
    PartId,
    Quantity,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    OrderId,
    ProductId,
    Quantity,
    OrderDate,
    Status,
}

mod m20240101_000001_create_products_table {
    use super::Products;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_products_table"
        }
    }

    /// Product names carry no length cap, so `name` is unbounded text.
    pub(super) fn table() -> TableCreateStatement {
        Table::create()
            .table(Products::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Products::ProductId)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Products::Name).text().not_null())
            .col(ColumnDef::new(Products::Description).string_len(1000).not_null())
            .to_owned()
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager.create_table(table()).await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }
}

mod m20240101_000002_create_parts_table {
    use super::Parts;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_parts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Parts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Parts::PartId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Parts::PartName).string_len(1000).not_null())
                        .col(
                            ColumnDef::new(Parts::InventoryQuantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Parts::Table).to_owned())
                .await
        }
    }
}

mod m20240101_000003_create_product_part_associations_table {
    use super::{Parts, ProductPartAssociations, Products};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_product_part_associations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ProductPartAssociations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProductPartAssociations::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ProductPartAssociations::ProductId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProductPartAssociations::PartId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProductPartAssociations::Quantity)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ppa_product_id")
                                .from(
                                    ProductPartAssociations::Table,
                                    ProductPartAssociations::ProductId,
                                )
                                .to(Products::Table, Products::ProductId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ppa_part_id")
                                .from(
                                    ProductPartAssociations::Table,
                                    ProductPartAssociations::PartId,
                                )
                                .to(Parts::Table, Parts::PartId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_ppa_product_id")
                        .table(ProductPartAssociations::Table)
                        .col(ProductPartAssociations::ProductId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(ProductPartAssociations::Table)
                        .to_owned(),
                )
                .await
        }
    }
}

mod m20240101_000004_create_orders_table {
    use super::{Orders, Products};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_orders_table"
        }
    }

    pub(super) fn table() -> TableCreateStatement {
        Table::create()
            .table(Orders::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Orders::OrderId)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Orders::ProductId).integer().not_null())
            .col(ColumnDef::new(Orders::Quantity).integer().not_null())
            .col(
                ColumnDef::new(Orders::OrderDate)
                    .timestamp_with_time_zone()
                    .null(),
            )
            .col(ColumnDef::new(Orders::Status).text().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_orders_product_id")
                    .from(Orders::Table, Orders::ProductId)
                    .to(Products::Table, Products::ProductId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .to_owned()
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager.create_table(table()).await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await
        }
    }
}
