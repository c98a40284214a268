use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::models::classrooms::requests::{CreateClassroomRequest, UpdateClassroomRequest};
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};

// 列宽与数据库定义保持一致
pub const MAX_PERSON_NAME_LEN: usize = 50;
pub const MAX_CLASS_NAME_LEN: usize = 50;
pub const MAX_TEACHER_NAME_LEN: usize = 100;

pub fn validate_text(field: &'static str, value: &str, max_len: usize) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} must not be blank"));
    }
    if trimmed.chars().count() > max_len {
        return Err(format!("{field} must be at most {max_len} characters"));
    }
    Ok(())
}

pub fn validate_academic_year(year: i32) -> Result<(), String> {
    // MySQL YEAR 列的取值范围
    if !(1901..=2155).contains(&year) {
        return Err(format!("academicYear {year} is out of range"));
    }
    Ok(())
}

pub fn validate_create_student(req: &CreateStudentRequest) -> Result<(), String> {
    validate_text("firstName", &req.first_name, MAX_PERSON_NAME_LEN)?;
    validate_text("lastName", &req.last_name, MAX_PERSON_NAME_LEN)?;
    Ok(())
}

pub fn validate_update_student(req: &UpdateStudentRequest) -> Result<(), String> {
    if req.is_empty() {
        return Err("No fields to update".to_string());
    }
    if let Some(first_name) = &req.first_name {
        validate_text("firstName", first_name, MAX_PERSON_NAME_LEN)?;
    }
    if let Some(last_name) = &req.last_name {
        validate_text("lastName", last_name, MAX_PERSON_NAME_LEN)?;
    }
    Ok(())
}

pub fn validate_create_classroom(req: &CreateClassroomRequest) -> Result<(), String> {
    validate_text("className", &req.class_name, MAX_CLASS_NAME_LEN)?;
    validate_text("homeroomTeacher", &req.homeroom_teacher, MAX_TEACHER_NAME_LEN)?;
    validate_academic_year(req.academic_year)?;
    Ok(())
}

pub fn validate_update_classroom(req: &UpdateClassroomRequest) -> Result<(), String> {
    if req.is_empty() {
        return Err("No fields to update".to_string());
    }
    if let Some(class_name) = &req.class_name {
        validate_text("className", class_name, MAX_CLASS_NAME_LEN)?;
    }
    if let Some(teacher) = &req.homeroom_teacher {
        validate_text("homeroomTeacher", teacher, MAX_TEACHER_NAME_LEN)?;
    }
    if let Some(year) = req.academic_year {
        validate_academic_year(year)?;
    }
    Ok(())
}

/// 解析出生日期，接受 `YYYY-MM-DD` 或带时间的 RFC 3339 字符串（只取日期部分）
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d").or_else(|date_err| {
        chrono::DateTime::parse_from_rfc3339(input)
            .map(|dt| dt.date_naive())
            .map_err(|_| date_err)
    })
}

pub fn deserialize_birth_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_birth_date(&raw)
        .map_err(|e| serde::de::Error::custom(format!("invalid birthDate '{raw}': {e}")))
}

pub fn deserialize_optional_birth_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_birth_date(&raw)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid birthDate '{raw}': {e}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_birth_date("2014-05-01").unwrap(),
            NaiveDate::from_ymd_opt(2014, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339_takes_date_part() {
        assert_eq!(
            parse_birth_date("2014-05-01T00:00:00Z").unwrap(),
            NaiveDate::from_ymd_opt(2014, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(parse_birth_date("01/05/2014").is_err());
        assert!(parse_birth_date("2014-02-30").is_err());
    }

    #[test]
    fn test_validate_text() {
        assert!(validate_text("firstName", "Ann", MAX_PERSON_NAME_LEN).is_ok());
        assert!(validate_text("firstName", "   ", MAX_PERSON_NAME_LEN).is_err());
        let long = "x".repeat(MAX_PERSON_NAME_LEN + 1);
        assert!(validate_text("firstName", &long, MAX_PERSON_NAME_LEN).is_err());
    }

    #[test]
    fn test_validate_update_requires_a_field() {
        let err = validate_update_student(&UpdateStudentRequest::default()).unwrap_err();
        assert_eq!(err, "No fields to update");

        let req = UpdateStudentRequest {
            last_name: Some("Lee".to_string()),
            ..Default::default()
        };
        assert!(validate_update_student(&req).is_ok());
    }

    #[test]
    fn test_validate_create_classroom() {
        let mut req = CreateClassroomRequest {
            class_name: "P.4/1".to_string(),
            academic_year: 2024,
            homeroom_teacher: "Somchai Jaidee".to_string(),
        };
        assert!(validate_create_classroom(&req).is_ok());

        req.academic_year = 1800;
        assert!(validate_create_classroom(&req).is_err());
    }
}
