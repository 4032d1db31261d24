use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_access_tables::Users;
use crate::m20250301_000002_create_enrollment_tables::Contracts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 账单表
        manager
            .create_table(
                Table::create()
                    .table(Debits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Debits::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Debits::ContractId).big_integer().not_null())
                    .col(ColumnDef::new(Debits::Description).string().not_null())
                    .col(ColumnDef::new(Debits::Value).double().not_null())
                    .col(
                        ColumnDef::new(Debits::Discount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Debits::Paid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Debits::Payday).date().null())
                    .col(ColumnDef::new(Debits::PaymentLimitDate).date().not_null())
                    .col(ColumnDef::new(Debits::DebitType).string().not_null())
                    .col(ColumnDef::new(Debits::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Debits::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Debits::Table, Debits::ContractId)
                            .to(Contracts::Table, Contracts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 付款表
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Payments::DebitId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Payments::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Payments::Method).string().not_null())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::Receipt).string().null())
                    .col(
                        ColumnDef::new(Payments::Discharged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Payments::DischargeDay).date().null())
                    .col(ColumnDef::new(Payments::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::DebitId)
                            .to(Debits::Table, Debits::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 结清记录表
        manager
            .create_table(
                Table::create()
                    .table(Discharges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Discharges::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Discharges::PaymentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Discharges::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Discharges::Receipt).string().not_null())
                    .col(
                        ColumnDef::new(Discharges::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Discharges::Table, Discharges::PaymentId)
                            .to(Payments::Table, Payments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Discharges::Table, Discharges::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Discharges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Debits::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Debits {
    #[sea_orm(iden = "debits")]
    Table,
    Id,
    ContractId,
    Description,
    Value,
    Discount,
    Paid,
    Payday,
    PaymentLimitDate,
    DebitType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    #[sea_orm(iden = "payments")]
    Table,
    Id,
    DebitId,
    UserId,
    Method,
    Amount,
    Receipt,
    Discharged,
    DischargeDay,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Discharges {
    #[sea_orm(iden = "discharges")]
    Table,
    Id,
    PaymentId,
    UserId,
    Receipt,
    CreatedAt,
}
