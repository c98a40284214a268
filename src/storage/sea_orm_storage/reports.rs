//! 报表查询

use super::{SeaOrmStorage, db_failure};
use crate::errors::Result;
use crate::models::reports::entities::MaleStudentReportRow;
use sea_orm::{DbBackend, FromQueryResult, Statement};

// 报表筛选条件：性别 ID 1（男），周岁 10~12（含）
const MALE_GENDER_ID: i32 = 1;
const MIN_AGE: i64 = 10;
const MAX_AGE: i64 = 12;

#[derive(Debug, FromQueryResult)]
struct MaleStudentRecord {
    first_name: String,
    last_name: String,
    birth_date: chrono::NaiveDate,
    age: i64,
    gender_name: Option<String>,
    prefix_name: Option<String>,
    level_name: Option<String>,
    class_name: Option<String>,
    homeroom_teacher: Option<String>,
}

impl MaleStudentRecord {
    fn into_report_row(self) -> MaleStudentReportRow {
        MaleStudentReportRow {
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            age: self.age,
            gender_name: self.gender_name,
            prefix_name: self.prefix_name,
            level_name: self.level_name,
            class_name: self.class_name,
            homeroom_teacher: self.homeroom_teacher,
        }
    }
}

/// 按当前日期计算的周岁（生日未到则减一）
fn age_sql(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::MySql => "TIMESTAMPDIFF(YEAR, std.birth_date, CURDATE())",
        DbBackend::Postgres => "CAST(DATE_PART('year', AGE(CURRENT_DATE, std.birth_date)) AS BIGINT)",
        _ => {
            "(CAST(strftime('%Y', 'now') AS INTEGER) - CAST(strftime('%Y', std.birth_date) AS INTEGER) \
             - (strftime('%m-%d', 'now') < strftime('%m-%d', std.birth_date)))"
        }
    }
}

fn male_students_sql(backend: DbBackend) -> String {
    let age = age_sql(backend);
    format!(
        "SELECT std.first_name, std.last_name, std.birth_date, {age} AS age, \
                gen.gender_name, pre.prefix_name, lvl.level_name, \
                cls.class_name, cls.homeroom_teacher \
         FROM student std \
         LEFT JOIN prefix pre ON pre.prefix_id = std.prefix_id \
         LEFT JOIN gender gen ON gen.gender_id = std.gender_id \
         LEFT JOIN gradelevel lvl ON lvl.grade_level_id = std.grade_level_id \
         LEFT JOIN student_classroom sc ON sc.student_id = std.student_id \
         LEFT JOIN classroom cls ON cls.classroom_id = sc.classroom_id \
         WHERE std.gender_id = {MALE_GENDER_ID} \
           AND {age} BETWEEN {MIN_AGE} AND {MAX_AGE} \
         ORDER BY std.student_id, cls.classroom_id"
    )
}

impl SeaOrmStorage {
    /// 10~12 岁男生及其所在班级（未分班时班级字段为空）
    pub async fn male_students_report_impl(&self) -> Result<Vec<MaleStudentReportRow>> {
        let backend = self.db.get_database_backend();
        let rows = MaleStudentRecord::find_by_statement(Statement::from_string(
            backend,
            male_students_sql(backend),
        ))
        .all(&self.db)
        .await
        .map_err(db_failure("查询男生报表失败"))?;

        Ok(rows
            .into_iter()
            .map(MaleStudentRecord::into_report_row)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_sql_filters_gender_and_age() {
        let sql = male_students_sql(DbBackend::MySql);
        assert!(sql.contains("WHERE std.gender_id = 1"));
        assert!(sql.contains("BETWEEN 10 AND 12"));
        assert!(sql.contains("TIMESTAMPDIFF(YEAR, std.birth_date, CURDATE())"));
    }

    #[test]
    fn test_report_sql_keeps_unassigned_students() {
        let sql = male_students_sql(DbBackend::Sqlite);
        assert!(sql.contains("LEFT JOIN student_classroom sc"));
        assert!(sql.contains("LEFT JOIN classroom cls"));
    }
}
