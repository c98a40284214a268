/// 定义从路径参数中安全提取正整数 ID 的提取器
///
/// 参数缺失、非数字或不大于 0 时直接返回 400。
#[macro_export]
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i32);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i32>().ok())
                    .filter(|id| *id > 0);

                std::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let body = $crate::models::ApiResponse::error_empty(
                            $crate::models::ErrorCode::BadRequest,
                            format!("Invalid path parameter: {}", $param),
                        );
                        Err(actix_web::error::InternalError::from_response(
                            format!("invalid {}", $param),
                            actix_web::HttpResponse::BadRequest().json(body),
                        )
                        .into())
                    }
                })
            }
        }
    };
}

define_safe_id_extractor!(SafeStudentId, "student_id");
define_safe_id_extractor!(SafeClassroomId, "classroom_id");
