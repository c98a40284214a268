//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体组装查询，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod classroom;
pub mod gender;
pub mod gradelevel;
pub mod prefix;
pub mod student;
pub mod student_classroom;
