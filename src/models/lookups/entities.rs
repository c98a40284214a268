use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 参照表条目（称谓 / 性别 / 年级）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lookup.ts")]
pub struct LookupItem {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Prefix,
    Gender,
    GradeLevel,
}

impl std::str::FromStr for LookupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefixes" => Ok(LookupKind::Prefix),
            "genders" => Ok(LookupKind::Gender),
            "grade-levels" => Ok(LookupKind::GradeLevel),
            _ => Err(format!("Unknown lookup: {s}")),
        }
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKind::Prefix => write!(f, "prefixes"),
            LookupKind::Gender => write!(f, "genders"),
            LookupKind::GradeLevel => write!(f, "grade-levels"),
        }
    }
}
