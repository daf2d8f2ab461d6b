use skillbase_core::model::job::{
    ApplicationStatus, JobApplication, JobApplicationRelations, JobListingFilter,
    JobListingRelations,
};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::job_repository::JobRepository;
use uuid::Uuid;

use super::JobProvider;
use crate::test_utilities::{
    get_dummy_date, insert_job_listing, insert_skill, insert_user, setup_test_db,
};

#[tokio::test]
async fn test_search_listings_text_filter() {
    let db = setup_test_db().await;
    let employer_id = insert_user(&db, "boss@example.com").await.unwrap();
    let skill_id = insert_skill(&db, "Welding").await.unwrap();
    insert_job_listing(&db, employer_id, skill_id, "Welder needed in Tallinn")
        .await
        .unwrap();
    insert_job_listing(&db, employer_id, skill_id, "Painter wanted")
        .await
        .unwrap();
    let provider = JobProvider { db };

    let listings = provider
        .search_listings(
            JobListingFilter {
                text: Some("welder".to_string()),
                skill_id: None,
            },
            &JobListingRelations::default(),
        )
        .await
        .unwrap();
    assert_eq!(1, listings.len());
    assert_eq!("Welder needed in Tallinn", listings[0].title);
}

#[tokio::test]
async fn test_create_application_duplicate_rejected() {
    let db = setup_test_db().await;
    let employer_id = insert_user(&db, "boss@example.com").await.unwrap();
    let applicant_id = insert_user(&db, "jane@example.com").await.unwrap();
    let skill_id = insert_skill(&db, "Welding").await.unwrap();
    let job_id = insert_job_listing(&db, employer_id, skill_id, "Welder needed")
        .await
        .unwrap();
    let provider = JobProvider { db };

    let application = JobApplication {
        id: Uuid::new_v4().into(),
        job_id,
        applicant_id,
        cover_note: None,
        status: ApplicationStatus::Pending,
        created_date: get_dummy_date(),
        applicant: None,
    };

    provider
        .create_application(application.clone())
        .await
        .unwrap();

    let result = provider
        .create_application(JobApplication {
            id: Uuid::new_v4().into(),
            ..application
        })
        .await;
    assert!(matches!(result, Err(DataLayerError::AlreadyExists)));
}

#[tokio::test]
async fn test_list_applications_for_job_with_applicant() {
    let db = setup_test_db().await;
    let employer_id = insert_user(&db, "boss@example.com").await.unwrap();
    let applicant_id = insert_user(&db, "jane@example.com").await.unwrap();
    let skill_id = insert_skill(&db, "Welding").await.unwrap();
    let job_id = insert_job_listing(&db, employer_id, skill_id, "Welder needed")
        .await
        .unwrap();
    let provider = JobProvider { db };

    provider
        .create_application(JobApplication {
            id: Uuid::new_v4().into(),
            job_id,
            applicant_id,
            cover_note: Some("I have five years of experience.".to_string()),
            status: ApplicationStatus::Pending,
            created_date: get_dummy_date(),
            applicant: None,
        })
        .await
        .unwrap();

    let applications = provider
        .list_applications_for_job(
            job_id,
            &JobApplicationRelations {
                applicant: Some(Default::default()),
            },
        )
        .await
        .unwrap();
    assert_eq!(1, applications.len());
    assert_eq!(
        "jane@example.com",
        applications[0].applicant.as_ref().unwrap().email
    );
}
