use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 权限配置表
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(flag(Profiles::CreateNewEnrollmentsPermiss))
                    .col(flag(Profiles::ValidateEnrollmentsPermiss))
                    .col(flag(Profiles::CreateExtraDebitsPermiss))
                    .col(flag(Profiles::PayDebitsPermiss))
                    .col(flag(Profiles::DischargePaymentsPermiss))
                    .col(flag(Profiles::CrudProfilesPermiss))
                    .col(flag(Profiles::CrudUsersPermiss))
                    .col(flag(Profiles::CrudGradesPermiss))
                    .col(flag(Profiles::CrudExtraDebitsPermiss))
                    .col(flag(Profiles::GenerateDocumentsPermiss))
                    .col(ColumnDef::new(Profiles::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Profiles::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::ProfileId).big_integer().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        Ok(())
    }
}

fn flag(column: Profiles) -> ColumnDef {
    ColumnDef::new(column)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum Profiles {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    Name,
    CreateNewEnrollmentsPermiss,
    ValidateEnrollmentsPermiss,
    CreateExtraDebitsPermiss,
    PayDebitsPermiss,
    DischargePaymentsPermiss,
    CrudProfilesPermiss,
    CrudUsersPermiss,
    CrudGradesPermiss,
    CrudExtraDebitsPermiss,
    GenerateDocumentsPermiss,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    PasswordHash,
    ProfileId,
    CreatedAt,
    UpdatedAt,
}
