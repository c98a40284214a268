mod common;

use chrono::{Days, Months, NaiveDate, Utc};
use common::*;
use roster_service::models::lookups::entities::LookupKind;
use roster_service::storage::Storage;

// 距今 years 年又 extra_months 个月的出生日期
fn born_ago(years: u32, extra_months: u32) -> NaiveDate {
    Utc::now()
        .date_naive()
        .checked_sub_months(Months::new(years * 12 + extra_months))
        .expect("date in range")
}

#[tokio::test]
async fn male_report_filters_gender_and_age() {
    let db = setup().await;
    let classroom = create_classroom(&db.storage, "P.5/1", 2024, "Somchai Jaidee").await;

    let eleven = create_student(
        &db.storage,
        student_request(
            "Eleven",
            "Boy",
            born_ago(11, 1),
            Some(PREFIX_MASTER),
            Some(GENDER_MALE),
            Some(5),
        ),
    )
    .await;
    db.storage.link_student(eleven, classroom).await.unwrap();

    // 未分班的 10 岁男生：班级字段为空
    create_student(
        &db.storage,
        student_request(
            "Ten",
            "Boy",
            born_ago(10, 1),
            Some(PREFIX_MASTER),
            Some(GENDER_MALE),
            Some(4),
        ),
    )
    .await;

    // 12 岁 11 个月仍为 12 周岁
    create_student(
        &db.storage,
        student_request(
            "Twelve",
            "Boy",
            born_ago(12, 11),
            Some(PREFIX_MASTER),
            Some(GENDER_MALE),
            Some(6),
        ),
    )
    .await;

    // 以下均不应出现：年龄不符、女生、性别未知
    create_student(
        &db.storage,
        student_request("Nine", "Boy", born_ago(9, 1), None, Some(GENDER_MALE), None),
    )
    .await;
    create_student(
        &db.storage,
        student_request("Thirteen", "Boy", born_ago(13, 1), None, Some(GENDER_MALE), None),
    )
    .await;
    create_student(
        &db.storage,
        student_request(
            "Eleven",
            "Girl",
            born_ago(11, 1),
            Some(PREFIX_MISS),
            Some(GENDER_FEMALE),
            Some(5),
        ),
    )
    .await;
    create_student(
        &db.storage,
        student_request("Eleven", "Unknown", born_ago(11, 1), None, None, None),
    )
    .await;

    let rows = db.storage.male_students_report().await.unwrap();
    let mut names: Vec<&str> = rows.iter().map(|r| r.first_name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Eleven", "Ten", "Twelve"]);

    let eleven_row = rows.iter().find(|r| r.first_name == "Eleven").unwrap();
    assert_eq!(eleven_row.age, 11);
    assert_eq!(eleven_row.last_name, "Boy");
    assert_eq!(eleven_row.gender_name.as_deref(), Some("Male"));
    assert_eq!(eleven_row.prefix_name.as_deref(), Some("Master"));
    assert_eq!(eleven_row.level_name.as_deref(), Some("Grade 5"));
    assert_eq!(eleven_row.class_name.as_deref(), Some("P.5/1"));
    assert_eq!(eleven_row.homeroom_teacher.as_deref(), Some("Somchai Jaidee"));

    let ten_row = rows.iter().find(|r| r.first_name == "Ten").unwrap();
    assert_eq!(ten_row.age, 10);
    assert_eq!(ten_row.class_name, None);
    assert_eq!(ten_row.homeroom_teacher, None);

    let twelve_row = rows.iter().find(|r| r.first_name == "Twelve").unwrap();
    assert_eq!(twelve_row.age, 12);
}

#[tokio::test]
async fn male_report_age_turns_on_the_birthday() {
    let db = setup().await;

    // 今天恰好满 10 周岁
    create_student(
        &db.storage,
        student_request("TenToday", "Boy", born_ago(10, 0), None, Some(GENDER_MALE), None),
    )
    .await;
    // 今天恰好满 13 周岁，超出范围
    create_student(
        &db.storage,
        student_request("ThirteenToday", "Boy", born_ago(13, 0), None, Some(GENDER_MALE), None),
    )
    .await;
    // 明天才满 13 周岁，今天仍是 12 岁
    let thirteen_tomorrow = born_ago(13, 0)
        .checked_add_days(Days::new(1))
        .expect("date in range");
    create_student(
        &db.storage,
        student_request("ThirteenTomorrow", "Boy", thirteen_tomorrow, None, Some(GENDER_MALE), None),
    )
    .await;
    // 明天才满 10 周岁，今天仍是 9 岁
    let ten_tomorrow = born_ago(10, 0)
        .checked_add_days(Days::new(1))
        .expect("date in range");
    create_student(
        &db.storage,
        student_request("TenTomorrow", "Boy", ten_tomorrow, None, Some(GENDER_MALE), None),
    )
    .await;

    let rows = db.storage.male_students_report().await.unwrap();
    let mut names: Vec<&str> = rows.iter().map(|r| r.first_name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["TenToday", "ThirteenTomorrow"]);

    let ten = rows.iter().find(|r| r.first_name == "TenToday").unwrap();
    assert_eq!(ten.age, 10);
    let twelve = rows.iter().find(|r| r.first_name == "ThirteenTomorrow").unwrap();
    assert_eq!(twelve.age, 12);
}

#[tokio::test]
async fn male_report_repeats_student_per_classroom() {
    let db = setup().await;
    let homeroom = create_classroom(&db.storage, "P.5/1", 2024, "Somchai Jaidee").await;
    let music = create_classroom(&db.storage, "Music", 2024, "Malee Srisuk").await;
    let student = create_student(
        &db.storage,
        student_request("Eleven", "Boy", born_ago(11, 1), None, Some(GENDER_MALE), None),
    )
    .await;
    db.storage.link_student(student, homeroom).await.unwrap();
    db.storage.link_student(student, music).await.unwrap();

    let rows = db.storage.male_students_report().await.unwrap();
    assert_eq!(rows.len(), 2);
    let mut classes: Vec<_> = rows.iter().filter_map(|r| r.class_name.clone()).collect();
    classes.sort();
    assert_eq!(classes, vec!["Music".to_string(), "P.5/1".to_string()]);
}

#[tokio::test]
async fn lookups_are_seeded_in_id_order() {
    let db = setup().await;

    let prefixes = db.storage.list_lookup(LookupKind::Prefix).await.unwrap();
    let names: Vec<&str> = prefixes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Master", "Miss", "Mr.", "Mrs.", "Ms."]);
    assert_eq!(prefixes[0].id, PREFIX_MASTER);

    let genders = db.storage.list_lookup(LookupKind::Gender).await.unwrap();
    assert_eq!(genders.len(), 2);
    assert_eq!(genders[0].id, GENDER_MALE);
    assert_eq!(genders[0].name, "Male");
    assert_eq!(genders[1].name, "Female");

    let grades = db.storage.list_lookup(LookupKind::GradeLevel).await.unwrap();
    assert_eq!(grades.len(), 6);
    assert_eq!(grades[2].name, "Grade 3");
    assert!(grades.windows(2).all(|w| w[0].id < w[1].id));
}
