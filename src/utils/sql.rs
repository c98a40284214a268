use sea_orm::sea_query::LikeExpr;

/// 转义 LIKE 模式中的通配符，使用户输入按字面匹配
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// 子串匹配模式：两侧加通配符，并显式声明转义字符
///
/// SQLite 没有默认转义字符，缺少 `ESCAPE` 时反斜杠会按字面匹配。
pub fn contains_pattern(input: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like_pattern(input))).escape('\\')
}

/// 过滤条件归一化：去除首尾空白，空字符串视为未提供
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_wildcards() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
        assert_eq!(escape_like_pattern("Grade 3"), "Grade 3");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  Lee ")), Some("Lee"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
