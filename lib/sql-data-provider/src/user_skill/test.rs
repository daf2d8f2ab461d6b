use skillbase_core::model::user_skill::{UpdateUserSkillRequest, UserSkill, UserSkillRelations};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::user_skill_repository::UserSkillRepository;
use uuid::Uuid;

use super::UserSkillProvider;
use crate::test_utilities::{
    get_dummy_date, insert_skill, insert_user, insert_user_skill, setup_test_db,
};

#[tokio::test]
async fn test_create_user_skill_duplicate_pair() {
    let db = setup_test_db().await;
    let user_id = insert_user(&db, "jane@example.com").await.unwrap();
    let skill_id = insert_skill(&db, "Welding").await.unwrap();
    insert_user_skill(&db, user_id, skill_id).await.unwrap();
    let provider = UserSkillProvider { db };

    let result = provider
        .create_user_skill(UserSkill {
            id: Uuid::new_v4().into(),
            user_id,
            skill_id,
            is_verified: false,
            verified_at: None,
            created_date: get_dummy_date(),
            user: None,
            skill: None,
        })
        .await;
    assert!(matches!(result, Err(DataLayerError::AlreadyExists)));
}

#[tokio::test]
async fn test_get_user_skill_with_relations() {
    let db = setup_test_db().await;
    let user_id = insert_user(&db, "jane@example.com").await.unwrap();
    let skill_id = insert_skill(&db, "Welding").await.unwrap();
    let id = insert_user_skill(&db, user_id, skill_id).await.unwrap();
    let provider = UserSkillProvider { db };

    let user_skill = provider
        .get_user_skill(
            id,
            &UserSkillRelations {
                user: Some(Default::default()),
                skill: Some(Default::default()),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!("jane@example.com", user_skill.user.unwrap().email);
    assert_eq!("Welding", user_skill.skill.unwrap().name);
}

#[tokio::test]
async fn test_list_verified_filters_by_skill() {
    let db = setup_test_db().await;
    let user_id = insert_user(&db, "jane@example.com").await.unwrap();
    let welding = insert_skill(&db, "Welding").await.unwrap();
    let painting = insert_skill(&db, "Painting").await.unwrap();
    let verified = insert_user_skill(&db, user_id, welding).await.unwrap();
    insert_user_skill(&db, user_id, painting).await.unwrap();
    let provider = UserSkillProvider { db };

    provider
        .update_user_skill(
            &verified,
            UpdateUserSkillRequest {
                is_verified: Some(true),
                verified_at: Some(get_dummy_date()),
            },
        )
        .await
        .unwrap();

    let result = provider
        .list_verified(None, &UserSkillRelations::default())
        .await
        .unwrap();
    assert_eq!(1, result.len());
    assert_eq!(verified, result[0].id);

    let result = provider
        .list_verified(Some(painting), &UserSkillRelations::default())
        .await
        .unwrap();
    assert!(result.is_empty());
}
