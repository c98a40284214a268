//! 预导入模块，方便使用

pub use super::classroom::{
    ActiveModel as ClassroomActiveModel, Entity as Classrooms, Model as ClassroomModel,
};
pub use super::gender::{Entity as Genders, Model as GenderModel};
pub use super::gradelevel::{Entity as Gradelevels, Model as GradelevelModel};
pub use super::prefix::{Entity as Prefixes, Model as PrefixModel};
pub use super::student::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::student_classroom::{
    ActiveModel as StudentClassroomActiveModel, Entity as StudentClassrooms,
    Model as StudentClassroomModel,
};
