pub mod pagination;
pub mod response;

pub use pagination::{
    PageWindow, PaginatedResponse, PaginationQuery, deserialize_optional_string_to_i32,
};
pub use response::{ApiResponse, MutationOutcome};
