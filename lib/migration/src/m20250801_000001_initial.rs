use sea_orm::{EnumIter, Iterable};
use sea_orm_migration::prelude::*;

use crate::datatype::{timestamp, timestamp_null, uuid_char, uuid_char_null};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(uuid_char(User::Id).primary_key())
                    .col(ColumnDef::new(User::FullName).string().not_null())
                    .col(ColumnDef::new(User::Email).string().not_null())
                    .col(ColumnDef::new(User::Phone).string())
                    .col(ColumnDef::new(User::PasswordHash).string().not_null())
                    .col(ColumnDef::new(User::PhotoUrl).string())
                    .col(ColumnDef::new(User::Location).string())
                    .col(ColumnDef::new(User::Bio).text())
                    .col(ColumnDef::new(User::Rating).float())
                    .col(ColumnDef::new(User::IsVerified).boolean().not_null())
                    .col(timestamp(User::CreatedDate, manager))
                    .col(timestamp(User::LastModified, manager))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("index-User-Email-Unique")
                    .table(User::Table)
                    .col(User::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Skill::Table)
                    .col(uuid_char(Skill::Id).primary_key())
                    .col(ColumnDef::new(Skill::Name).string().not_null())
                    .col(ColumnDef::new(Skill::Category).string().not_null())
                    .col(ColumnDef::new(Skill::Description).text())
                    .col(ColumnDef::new(Skill::Icon).string())
                    .col(ColumnDef::new(Skill::IsActive).boolean().not_null())
                    .col(timestamp(Skill::CreatedDate, manager))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserSkill::Table)
                    .col(uuid_char(UserSkill::Id).primary_key())
                    .col(uuid_char(UserSkill::UserId))
                    .col(uuid_char(UserSkill::SkillId))
                    .col(ColumnDef::new(UserSkill::IsVerified).boolean().not_null())
                    .col(timestamp_null(UserSkill::VerifiedAt, manager))
                    .col(timestamp(UserSkill::CreatedDate, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-UserSkill-UserId")
                            .from(UserSkill::Table, UserSkill::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-UserSkill-SkillId")
                            .from(UserSkill::Table, UserSkill::SkillId)
                            .to(Skill::Table, Skill::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("index-UserSkill-UserId-SkillId-Unique")
                    .table(UserSkill::Table)
                    .col(UserSkill::UserId)
                    .col(UserSkill::SkillId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SkillProof::Table)
                    .col(uuid_char(SkillProof::Id).primary_key())
                    .col(uuid_char(SkillProof::UserSkillId))
                    .col(ColumnDef::new(SkillProof::FileUrl).string().not_null())
                    .col(
                        ColumnDef::new(SkillProof::FileKind)
                            .enumeration(SkillProof::FileKind, ProofFileKind::iter())
                            .not_null(),
                    )
                    .col(ColumnDef::new(SkillProof::Description).text())
                    .col(
                        ColumnDef::new(SkillProof::Status)
                            .enumeration(SkillProof::Status, ProofStatus::iter())
                            .not_null(),
                    )
                    .col(ColumnDef::new(SkillProof::AiScore).float())
                    .col(ColumnDef::new(SkillProof::AiFeedback).text())
                    .col(timestamp(SkillProof::CreatedDate, manager))
                    .col(timestamp(SkillProof::LastModified, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-SkillProof-UserSkillId")
                            .from(SkillProof::Table, SkillProof::UserSkillId)
                            .to(UserSkill::Table, UserSkill::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MiniTest::Table)
                    .col(uuid_char(MiniTest::Id).primary_key())
                    .col(uuid_char(MiniTest::SkillId))
                    .col(ColumnDef::new(MiniTest::Title).string().not_null())
                    .col(ColumnDef::new(MiniTest::Description).text())
                    .col(ColumnDef::new(MiniTest::TimeLimitMinutes).unsigned())
                    .col(ColumnDef::new(MiniTest::PassingScore).unsigned().not_null())
                    .col(ColumnDef::new(MiniTest::IsActive).boolean().not_null())
                    .col(timestamp(MiniTest::CreatedDate, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-MiniTest-SkillId")
                            .from(MiniTest::Table, MiniTest::SkillId)
                            .to(Skill::Table, Skill::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TestQuestion::Table)
                    .col(uuid_char(TestQuestion::Id).primary_key())
                    .col(uuid_char(TestQuestion::TestId))
                    .col(ColumnDef::new(TestQuestion::Text).text().not_null())
                    .col(
                        ColumnDef::new(TestQuestion::Kind)
                            .enumeration(TestQuestion::Kind, QuestionKind::iter())
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestQuestion::Options).text())
                    .col(ColumnDef::new(TestQuestion::CorrectAnswer).string().not_null())
                    .col(ColumnDef::new(TestQuestion::Points).unsigned().not_null())
                    .col(ColumnDef::new(TestQuestion::OrderIndex).unsigned().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-TestQuestion-TestId")
                            .from(TestQuestion::Table, TestQuestion::TestId)
                            .to(MiniTest::Table, MiniTest::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TestAttempt::Table)
                    .col(uuid_char(TestAttempt::Id).primary_key())
                    .col(uuid_char(TestAttempt::UserSkillId))
                    .col(uuid_char(TestAttempt::TestId))
                    .col(ColumnDef::new(TestAttempt::Score).unsigned().not_null())
                    .col(ColumnDef::new(TestAttempt::TotalPoints).unsigned().not_null())
                    .col(ColumnDef::new(TestAttempt::Passed).boolean().not_null())
                    .col(timestamp(TestAttempt::StartedAt, manager))
                    .col(timestamp_null(TestAttempt::CompletedAt, manager))
                    .col(ColumnDef::new(TestAttempt::Answers).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-TestAttempt-UserSkillId")
                            .from(TestAttempt::Table, TestAttempt::UserSkillId)
                            .to(UserSkill::Table, UserSkill::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-TestAttempt-TestId")
                            .from(TestAttempt::Table, TestAttempt::TestId)
                            .to(MiniTest::Table, MiniTest::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Certificate::Table)
                    .col(uuid_char(Certificate::Id).primary_key())
                    .col(uuid_char(Certificate::UserSkillId))
                    .col(
                        ColumnDef::new(Certificate::CertificateNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificate::QrPayload).text().not_null())
                    .col(timestamp(Certificate::IssuedDate, manager))
                    .col(ColumnDef::new(Certificate::IsActive).boolean().not_null())
                    .col(timestamp(Certificate::CreatedDate, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Certificate-UserSkillId")
                            .from(Certificate::Table, Certificate::UserSkillId)
                            .to(UserSkill::Table, UserSkill::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("index-Certificate-UserSkillId-Unique")
                    .table(Certificate::Table)
                    .col(Certificate::UserSkillId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("index-Certificate-CertificateNumber-Unique")
                    .table(Certificate::Table)
                    .col(Certificate::CertificateNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobListing::Table)
                    .col(uuid_char(JobListing::Id).primary_key())
                    .col(uuid_char(JobListing::EmployerId))
                    .col(uuid_char(JobListing::SkillId))
                    .col(ColumnDef::new(JobListing::Title).string().not_null())
                    .col(ColumnDef::new(JobListing::Description).text())
                    .col(ColumnDef::new(JobListing::Location).string())
                    .col(ColumnDef::new(JobListing::PayRate).string())
                    .col(ColumnDef::new(JobListing::IsActive).boolean().not_null())
                    .col(timestamp(JobListing::CreatedDate, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-JobListing-EmployerId")
                            .from(JobListing::Table, JobListing::EmployerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-JobListing-SkillId")
                            .from(JobListing::Table, JobListing::SkillId)
                            .to(Skill::Table, Skill::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .col(uuid_char(JobApplication::Id).primary_key())
                    .col(uuid_char(JobApplication::JobId))
                    .col(uuid_char(JobApplication::ApplicantId))
                    .col(ColumnDef::new(JobApplication::CoverNote).text())
                    .col(
                        ColumnDef::new(JobApplication::Status)
                            .enumeration(JobApplication::Status, ApplicationStatus::iter())
                            .not_null(),
                    )
                    .col(timestamp(JobApplication::CreatedDate, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-JobApplication-JobId")
                            .from(JobApplication::Table, JobApplication::JobId)
                            .to(JobListing::Table, JobListing::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-JobApplication-ApplicantId")
                            .from(JobApplication::Table, JobApplication::ApplicantId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("index-JobApplication-JobId-ApplicantId-Unique")
                    .table(JobApplication::Table)
                    .col(JobApplication::JobId)
                    .col(JobApplication::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum User {
    Table,
    Id,
    FullName,
    Email,
    Phone,
    PasswordHash,
    PhotoUrl,
    Location,
    Bio,
    Rating,
    IsVerified,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub(crate) enum Skill {
    Table,
    Id,
    Name,
    Category,
    Description,
    Icon,
    IsActive,
    CreatedDate,
}

#[derive(DeriveIden)]
pub(crate) enum UserSkill {
    Table,
    Id,
    UserId,
    SkillId,
    IsVerified,
    VerifiedAt,
    CreatedDate,
}

#[derive(DeriveIden)]
pub(crate) enum SkillProof {
    Table,
    Id,
    UserSkillId,
    FileUrl,
    FileKind,
    Description,
    Status,
    AiScore,
    AiFeedback,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub(crate) enum MiniTest {
    Table,
    Id,
    SkillId,
    Title,
    Description,
    TimeLimitMinutes,
    PassingScore,
    IsActive,
    CreatedDate,
}

#[derive(DeriveIden)]
pub(crate) enum TestQuestion {
    Table,
    Id,
    TestId,
    Text,
    Kind,
    Options,
    CorrectAnswer,
    Points,
    OrderIndex,
}

#[derive(DeriveIden)]
pub(crate) enum TestAttempt {
    Table,
    Id,
    UserSkillId,
    TestId,
    Score,
    TotalPoints,
    Passed,
    StartedAt,
    CompletedAt,
    Answers,
}

#[derive(DeriveIden)]
pub(crate) enum Certificate {
    Table,
    Id,
    UserSkillId,
    CertificateNumber,
    QrPayload,
    IssuedDate,
    IsActive,
    CreatedDate,
}

#[derive(DeriveIden)]
pub(crate) enum JobListing {
    Table,
    Id,
    EmployerId,
    SkillId,
    Title,
    Description,
    Location,
    PayRate,
    IsActive,
    CreatedDate,
}

#[derive(DeriveIden)]
pub(crate) enum JobApplication {
    Table,
    Id,
    JobId,
    ApplicantId,
    CoverNote,
    Status,
    CreatedDate,
}

#[derive(Iden, EnumIter)]
pub(crate) enum ProofFileKind {
    #[iden = "IMAGE"]
    Image,
    #[iden = "VIDEO"]
    Video,
}

#[derive(Iden, EnumIter)]
pub(crate) enum ProofStatus {
    #[iden = "UPLOADING"]
    Uploading,
    #[iden = "UPLOADED"]
    Uploaded,
    #[iden = "PROCESSING"]
    Processing,
    #[iden = "VERIFIED"]
    Verified,
    #[iden = "REJECTED"]
    Rejected,
}

#[derive(Iden, EnumIter)]
pub(crate) enum QuestionKind {
    #[iden = "MULTIPLE_CHOICE"]
    MultipleChoice,
    #[iden = "VIDEO_TASK"]
    VideoTask,
    #[iden = "TRUE_FALSE"]
    TrueFalse,
}

#[derive(Iden, EnumIter)]
pub(crate) enum ApplicationStatus {
    #[iden = "PENDING"]
    Pending,
    #[iden = "ACCEPTED"]
    Accepted,
    #[iden = "REJECTED"]
    Rejected,
}
