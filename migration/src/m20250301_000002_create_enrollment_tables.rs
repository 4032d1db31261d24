use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_access_tables::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 责任人表
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Persons::Name).string().not_null())
                    .col(ColumnDef::new(Persons::BirthDate).date().not_null())
                    .col(ColumnDef::new(Persons::Nacionality).string().not_null())
                    .col(ColumnDef::new(Persons::CivilState).string().not_null())
                    .col(ColumnDef::new(Persons::Profission).string().not_null())
                    .col(ColumnDef::new(Persons::Cpf).string().not_null())
                    .col(ColumnDef::new(Persons::Rg).string().not_null())
                    .col(ColumnDef::new(Persons::AddressStreet).string().not_null())
                    .col(ColumnDef::new(Persons::AddressNumber).string().not_null())
                    .col(ColumnDef::new(Persons::AddressComplement).string().null())
                    .col(
                        ColumnDef::new(Persons::AddressNeighborhood)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Persons::AddressCity).string().not_null())
                    .col(ColumnDef::new(Persons::AddressCep).string().not_null())
                    .col(ColumnDef::new(Persons::ResidencialPhone).string().not_null())
                    .col(ColumnDef::new(Persons::CommercialPhone).string().not_null())
                    .col(ColumnDef::new(Persons::PersonalPhone).string().not_null())
                    .col(ColumnDef::new(Persons::EducationLevel).string().not_null())
                    .col(ColumnDef::new(Persons::Workplace).string().not_null())
                    .col(ColumnDef::new(Persons::MonthlyIncome).string().not_null())
                    .col(
                        ColumnDef::new(Persons::IncomeTax)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Persons::Email).string().not_null())
                    .col(ColumnDef::new(Persons::CpfPhoto).string().null())
                    .col(ColumnDef::new(Persons::RgPhoto).string().null())
                    .col(ColumnDef::new(Persons::ResidencialProofPhoto).string().null())
                    .col(ColumnDef::new(Persons::UserId).big_integer().null())
                    .col(ColumnDef::new(Persons::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Persons::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Persons::Table, Persons::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_persons_cpf")
                    .table(Persons::Table)
                    .col(Persons::Cpf)
                    .to_owned(),
            )
            .await?;

        // 学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::FatherName).string().not_null())
                    .col(ColumnDef::new(Students::MotherName).string().not_null())
                    .col(ColumnDef::new(Students::BirthDate).date().not_null())
                    .col(ColumnDef::new(Students::Nacionality).string().not_null())
                    .col(ColumnDef::new(Students::BirthCity).string().not_null())
                    .col(ColumnDef::new(Students::BirthState).string().not_null())
                    .col(ColumnDef::new(Students::Gender).string().not_null())
                    .col(ColumnDef::new(Students::Race).string().not_null())
                    .col(
                        ColumnDef::new(Students::EaseRelating)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Students::OriginSchool).string().null())
                    .col(ColumnDef::new(Students::HealthPlan).string().null())
                    .col(ColumnDef::new(Students::FoodAlergy).string().null())
                    .col(ColumnDef::new(Students::MedicationAlergy).string().null())
                    .col(ColumnDef::new(Students::HealthProblem).string().null())
                    .col(ColumnDef::new(Students::SpecialNecessities).string().null())
                    .col(ColumnDef::new(Students::BirthCertificatePhoto).string().null())
                    .col(ColumnDef::new(Students::VaccineCardPhoto).string().null())
                    .col(ColumnDef::new(Students::HealthPlanPhoto).string().null())
                    .col(
                        ColumnDef::new(Students::TransferDeclarationPhoto)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Students::MonthlyDeclarationPhoto)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(Students::SchoolRecordsPhoto).string().null())
                    .col(ColumnDef::new(Students::UserId).big_integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 亲属关系表
        manager
            .create_table(
                Table::create()
                    .table(Relationships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Relationships::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Relationships::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Relationships::PersonId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Relationships::Kinship).string().not_null())
                    .col(
                        ColumnDef::new(Relationships::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Relationships::Table, Relationships::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Relationships::Table, Relationships::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 年级表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::Name).string().not_null())
                    .col(ColumnDef::new(Grades::Year).string().not_null())
                    .col(ColumnDef::new(Grades::Value).double().not_null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_grades_name_year")
                    .table(Grades::Table)
                    .col(Grades::Name)
                    .col(Grades::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 合同表
        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contracts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contracts::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Contracts::GradeId).big_integer().not_null())
                    .col(ColumnDef::new(Contracts::Status).string().not_null())
                    .col(ColumnDef::new(Contracts::Comment).text().null())
                    .col(
                        ColumnDef::new(Contracts::Discount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Contracts::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Contracts::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contracts::Table, Contracts::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contracts::Table, Contracts::GradeId)
                            .to(Grades::Table, Grades::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_grade_status")
                    .table(Contracts::Table)
                    .col(Contracts::GradeId)
                    .col(Contracts::Status)
                    .to_owned(),
            )
            .await?;

        // 协议表（责任人与合同的关联）
        manager
            .create_table(
                Table::create()
                    .table(Agreements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Agreements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Agreements::ContractId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Agreements::PersonId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Agreements::ResponsibleType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Agreements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Agreements::Table, Agreements::ContractId)
                            .to(Contracts::Table, Contracts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Agreements::Table, Agreements::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agreements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Relationships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Persons {
    #[sea_orm(iden = "persons")]
    Table,
    Id,
    Name,
    BirthDate,
    Nacionality,
    CivilState,
    Profission,
    Cpf,
    Rg,
    AddressStreet,
    AddressNumber,
    AddressComplement,
    AddressNeighborhood,
    AddressCity,
    AddressCep,
    ResidencialPhone,
    CommercialPhone,
    PersonalPhone,
    EducationLevel,
    Workplace,
    MonthlyIncome,
    IncomeTax,
    Email,
    CpfPhoto,
    RgPhoto,
    ResidencialProofPhoto,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    FatherName,
    MotherName,
    BirthDate,
    Nacionality,
    BirthCity,
    BirthState,
    Gender,
    Race,
    EaseRelating,
    OriginSchool,
    HealthPlan,
    FoodAlergy,
    MedicationAlergy,
    HealthProblem,
    SpecialNecessities,
    BirthCertificatePhoto,
    VaccineCardPhoto,
    HealthPlanPhoto,
    TransferDeclarationPhoto,
    MonthlyDeclarationPhoto,
    SchoolRecordsPhoto,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Relationships {
    #[sea_orm(iden = "relationships")]
    Table,
    Id,
    StudentId,
    PersonId,
    Kinship,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    Name,
    Year,
    Value,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Contracts {
    #[sea_orm(iden = "contracts")]
    Table,
    Id,
    StudentId,
    GradeId,
    Status,
    Comment,
    Discount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Agreements {
    #[sea_orm(iden = "agreements")]
    Table,
    Id,
    ContractId,
    PersonId,
    ResponsibleType,
    CreatedAt,
}
