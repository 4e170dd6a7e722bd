use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contacts::Address).string())
                    .col(ColumnDef::new(Contacts::CountryId).uuid().not_null())
                    .col(ColumnDef::new(Contacts::Phone).string().not_null())
                    .col(ColumnDef::new(Contacts::CellPhone).string())
                    .col(ColumnDef::new(Contacts::EmergencyName).string())
                    .col(ColumnDef::new(Contacts::EmergencyPhone).string())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contacts::Table, Contacts::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    Address,
    CountryId,
    Phone,
    CellPhone,
    EmergencyName,
    EmergencyPhone,
}

#[derive(Iden)]
enum Countries {
    Table,
    Id,
}
