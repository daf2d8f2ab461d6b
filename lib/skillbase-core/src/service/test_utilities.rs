use std::collections::HashMap;

use shared_types::{SkillId, TestId, UserId, UserSkillId};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::model::certificate::Certificate;
use crate::model::mini_test::{MiniTest, QuestionKind, TestQuestion};
use crate::model::skill::Skill;
use crate::model::skill_proof::{ProofFileKind, ProofStatus, SkillProof};
use crate::model::test_attempt::TestAttempt;
use crate::model::user::User;
use crate::model::user_skill::UserSkill;

pub(crate) fn dummy_date() -> OffsetDateTime {
    datetime!(2026-03-01 12:00 UTC)
}

pub(crate) fn generic_user() -> User {
    User {
        id: Uuid::new_v4().into(),
        full_name: "Jane Worker".to_string(),
        email: "jane.worker@example.com".to_string(),
        phone: Some("+37255512345".to_string()),
        password_hash: "$argon2id$dummy".to_string(),
        photo_url: None,
        location: Some("Tallinn".to_string()),
        bio: None,
        rating: Some(4.5),
        is_verified: false,
        created_date: dummy_date(),
        last_modified: dummy_date(),
    }
}

pub(crate) fn generic_skill() -> Skill {
    Skill {
        id: Uuid::new_v4().into(),
        name: "Welding".to_string(),
        category: "Construction".to_string(),
        description: Some("MIG and TIG welding".to_string()),
        icon: None,
        is_active: true,
        created_date: dummy_date(),
    }
}

pub(crate) fn generic_user_skill(user_id: UserId) -> UserSkill {
    UserSkill {
        id: Uuid::new_v4().into(),
        user_id,
        skill_id: Uuid::new_v4().into(),
        is_verified: false,
        verified_at: None,
        created_date: dummy_date(),
        user: None,
        skill: None,
    }
}

pub(crate) fn generic_proof(user_skill_id: UserSkillId) -> SkillProof {
    SkillProof {
        id: Uuid::new_v4().into(),
        user_skill_id,
        file_url: "https://media.example.com/welds.mp4".to_string(),
        file_kind: ProofFileKind::Video,
        description: Some("Fillet weld on 5mm steel".to_string()),
        status: ProofStatus::Uploaded,
        ai_score: None,
        ai_feedback: None,
        created_date: dummy_date(),
        last_modified: dummy_date(),
        user_skill: None,
    }
}

pub(crate) fn generic_test(skill_id: SkillId) -> MiniTest {
    MiniTest {
        id: Uuid::new_v4().into(),
        skill_id,
        title: "Welding basics".to_string(),
        description: None,
        time_limit_minutes: Some(15),
        passing_score: 80,
        is_active: true,
        created_date: dummy_date(),
        questions: None,
    }
}

/// Two questions worth 50 points each, matching the reference scenario.
pub(crate) fn generic_questions(test_id: TestId) -> Vec<TestQuestion> {
    vec![
        TestQuestion {
            id: Uuid::new_v4().into(),
            test_id,
            text: "Which gas is used for MIG welding mild steel?".to_string(),
            kind: QuestionKind::MultipleChoice,
            options: Some(vec![
                "Pure argon".to_string(),
                "CO2 mix".to_string(),
                "Oxygen".to_string(),
            ]),
            correct_answer: "CO2 mix".to_string(),
            points: 50,
            order_index: 1,
        },
        TestQuestion {
            id: Uuid::new_v4().into(),
            test_id,
            text: "Slag must be removed between passes.".to_string(),
            kind: QuestionKind::TrueFalse,
            options: None,
            correct_answer: "true".to_string(),
            points: 50,
            order_index: 2,
        },
    ]
}

pub(crate) fn generic_attempt(user_skill_id: UserSkillId, test_id: TestId) -> TestAttempt {
    TestAttempt {
        id: Uuid::new_v4().into(),
        user_skill_id,
        test_id,
        score: 0,
        total_points: 100,
        passed: false,
        started_at: dummy_date(),
        completed_at: None,
        answers: HashMap::new(),
        user_skill: None,
        test: None,
    }
}

pub(crate) fn generic_certificate(user_skill_id: UserSkillId) -> Certificate {
    Certificate {
        id: Uuid::new_v4().into(),
        user_skill_id,
        certificate_number: "SKB-1772366400-482913".to_string(),
        qr_payload: "{}".to_string(),
        issued_date: dummy_date(),
        is_active: true,
        created_date: dummy_date(),
        user_skill: None,
    }
}
