use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DocumentTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DocumentTypes::Name).string().not_null())
                    .col(ColumnDef::new(DocumentTypes::Document).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DocumentTypes {
    Table,
    Id,
    Name,
    Document,
}
