use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{
    AttemptId, CertificateId, JobId, QuestionId, SkillId, TestId, UserId, UserSkillId,
};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::entity::{
    certificate, job_listing, mini_test, skill, test_attempt, test_question, user, user_skill,
};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2026-03-01 12:00 UTC)
}

pub async fn setup_test_db() -> DatabaseConnection {
    crate::db_conn("sqlite::memory:", true)
        .await
        .expect("migrated in-memory db")
}

pub async fn insert_user(db: &DatabaseConnection, email: &str) -> Result<UserId, DbErr> {
    let user = user::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        full_name: Set("Jane Worker".to_string()),
        email: Set(email.to_string()),
        phone: Set(None),
        password_hash: Set("argon2id$dummy".to_string()),
        photo_url: Set(None),
        location: Set(Some("Tallinn".to_string())),
        bio: Set(None),
        rating: Set(None),
        is_verified: Set(false),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
    }
    .insert(db)
    .await?;

    Ok(user.id)
}

pub async fn insert_skill(db: &DatabaseConnection, name: &str) -> Result<SkillId, DbErr> {
    let skill = skill::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        name: Set(name.to_string()),
        category: Set("Construction".to_string()),
        description: Set(None),
        icon: Set(None),
        is_active: Set(true),
        created_date: Set(get_dummy_date()),
    }
    .insert(db)
    .await?;

    Ok(skill.id)
}

pub async fn insert_user_skill(
    db: &DatabaseConnection,
    user_id: UserId,
    skill_id: SkillId,
) -> Result<UserSkillId, DbErr> {
    let user_skill = user_skill::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        user_id: Set(user_id),
        skill_id: Set(skill_id),
        is_verified: Set(false),
        verified_at: Set(None),
        created_date: Set(get_dummy_date()),
    }
    .insert(db)
    .await?;

    Ok(user_skill.id)
}

pub async fn insert_mini_test(
    db: &DatabaseConnection,
    skill_id: SkillId,
    passing_score: u32,
) -> Result<TestId, DbErr> {
    let test = mini_test::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        skill_id: Set(skill_id),
        title: Set("Safety basics".to_string()),
        description: Set(None),
        time_limit_minutes: Set(Some(15)),
        passing_score: Set(passing_score),
        is_active: Set(true),
        created_date: Set(get_dummy_date()),
    }
    .insert(db)
    .await?;

    Ok(test.id)
}

pub async fn insert_question(
    db: &DatabaseConnection,
    test_id: TestId,
    points: u32,
    order_index: u32,
) -> Result<QuestionId, DbErr> {
    let question = test_question::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        test_id: Set(test_id),
        text: Set("Which gas mix is used for MIG welding of mild steel?".to_string()),
        kind: Set(test_question::QuestionKind::MultipleChoice),
        options: Set(Some(r#"["CO2 mix","Pure oxygen"]"#.to_string())),
        correct_answer: Set("CO2 mix".to_string()),
        points: Set(points),
        order_index: Set(order_index),
    }
    .insert(db)
    .await?;

    Ok(question.id)
}

pub async fn insert_attempt(
    db: &DatabaseConnection,
    user_skill_id: UserSkillId,
    test_id: TestId,
    completed_at: Option<OffsetDateTime>,
) -> Result<AttemptId, DbErr> {
    let attempt = test_attempt::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        user_skill_id: Set(user_skill_id),
        test_id: Set(test_id),
        score: Set(0),
        total_points: Set(100),
        passed: Set(false),
        started_at: Set(get_dummy_date()),
        completed_at: Set(completed_at),
        answers: Set("{}".to_string()),
    }
    .insert(db)
    .await?;

    Ok(attempt.id)
}

pub async fn insert_certificate(
    db: &DatabaseConnection,
    user_skill_id: UserSkillId,
    certificate_number: &str,
) -> Result<CertificateId, DbErr> {
    let certificate = certificate::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        user_skill_id: Set(user_skill_id),
        certificate_number: Set(certificate_number.to_string()),
        qr_payload: Set("{}".to_string()),
        issued_date: Set(get_dummy_date()),
        is_active: Set(true),
        created_date: Set(get_dummy_date()),
    }
    .insert(db)
    .await?;

    Ok(certificate.id)
}

pub async fn insert_job_listing(
    db: &DatabaseConnection,
    employer_id: UserId,
    skill_id: SkillId,
    title: &str,
) -> Result<JobId, DbErr> {
    let listing = job_listing::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        employer_id: Set(employer_id),
        skill_id: Set(skill_id),
        title: Set(title.to_string()),
        description: Set(None),
        location: Set(None),
        pay_rate: Set(Some("25 EUR/h".to_string())),
        is_active: Set(true),
        created_date: Set(get_dummy_date()),
    }
    .insert(db)
    .await?;

    Ok(listing.id)
}
