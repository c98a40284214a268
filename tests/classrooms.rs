mod common;

use common::*;
use roster_service::errors::RosterError;
use roster_service::models::classrooms::requests::{
    ClassroomFilter, ClassroomListQuery, UpdateClassroomRequest,
};
use roster_service::storage::Storage;

#[tokio::test]
async fn classroom_crud() {
    let db = setup().await;
    let id = create_classroom(&db.storage, "P.4/1", 2024, "Somchai Jaidee").await;

    let classroom = db.storage.get_classroom(id).await.unwrap().unwrap();
    assert_eq!(classroom.class_name, "P.4/1");
    assert_eq!(classroom.academic_year, 2024);
    assert_eq!(classroom.homeroom_teacher, "Somchai Jaidee");

    let updated = db
        .storage
        .update_classroom(
            id,
            UpdateClassroomRequest {
                homeroom_teacher: Some("Malee Srisuk".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.rows_affected, 1);

    let classroom = db.storage.get_classroom(id).await.unwrap().unwrap();
    assert_eq!(classroom.class_name, "P.4/1");
    assert_eq!(classroom.homeroom_teacher, "Malee Srisuk");

    let deleted = db.storage.delete_classroom(id).await.unwrap();
    assert_eq!(deleted.rows_affected, 1);
    assert!(db.storage.get_classroom(id).await.unwrap().is_none());
}

#[tokio::test]
async fn classroom_filters() {
    let db = setup().await;
    let first = create_classroom(&db.storage, "P.4/1", 2024, "Somchai Jaidee").await;
    create_classroom(&db.storage, "P.4/2", 2024, "Malee Srisuk").await;
    create_classroom(&db.storage, "P.5/1", 2024, "Somchai Jaidee").await;

    let by_name = db
        .storage
        .list_classrooms(ClassroomListQuery {
            filter: ClassroomFilter {
                class_name: Some("P.4".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_name.total, 2);

    let by_teacher_and_name = db
        .storage
        .list_classrooms(ClassroomListQuery {
            filter: ClassroomFilter {
                class_name: Some("P.4".to_string()),
                homeroom_teacher: Some("chai".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_teacher_and_name.total, 1);
    assert_eq!(by_teacher_and_name.items[0].classroom_id, first);

    let by_id = db
        .storage
        .list_classrooms(ClassroomListQuery {
            filter: ClassroomFilter {
                classroom_id: Some(first),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_id.total, 1);

    let paged = db
        .storage
        .list_classrooms(ClassroomListQuery {
            page: Some(2),
            limit: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(paged.items.len(), 1);
    assert_eq!(paged.total, 3);
}

#[tokio::test]
async fn classroom_with_students_cannot_be_deleted() {
    let db = setup().await;
    let classroom = create_classroom(&db.storage, "P.6/1", 2024, "Somchai Jaidee").await;
    let student = create_student(
        &db.storage,
        student_request("Ann", "Lee", date(2014, 5, 1), None, None, None),
    )
    .await;
    db.storage.link_student(student, classroom).await.unwrap();

    let err = db.storage.delete_classroom(classroom).await.unwrap_err();
    assert!(matches!(err, RosterError::Conflict(_)));
    assert!(db.storage.get_classroom(classroom).await.unwrap().is_some());
}

#[tokio::test]
async fn update_of_missing_classroom_affects_no_rows() {
    let db = setup().await;
    let outcome = db
        .storage
        .update_classroom(
            31337,
            UpdateClassroomRequest {
                academic_year: Some(2025),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome.rows_affected, 0);
}

#[tokio::test]
async fn classroom_filters_match_wildcard_characters_literally() {
    let db = setup().await;
    let target = create_classroom(&db.storage, "P_4/1", 2024, "T 100%").await;
    create_classroom(&db.storage, "PX4/1", 2024, "T 1000").await;

    let by_name = db
        .storage
        .list_classrooms(ClassroomListQuery {
            filter: ClassroomFilter {
                class_name: Some("P_4".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_name.total, 1);
    assert_eq!(by_name.items[0].classroom_id, target);

    let by_teacher = db
        .storage
        .list_classrooms(ClassroomListQuery {
            filter: ClassroomFilter {
                homeroom_teacher: Some("100%".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_teacher.total, 1);
    assert_eq!(by_teacher.items[0].classroom_id, target);

    let by_backslash = db
        .storage
        .list_classrooms(ClassroomListQuery {
            filter: ClassroomFilter {
                class_name: Some("P\\4".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_backslash.total, 0);
}
