//! 사용자 페이로드 필드 규칙
//!
//! 생성/수정 요청이 공유하는 필드 단위 검증 규칙들입니다.
//! 각 함수는 순수 함수로, 규칙을 통과하면 정규화된 값을 반환하고
//! 위반 시 메시지를 수집 목록에 추가한 뒤 `None`을 반환합니다.
//! 호출 측에서 모든 필드를 끝까지 검사하므로 위반 사항이 한 번의
//! 응답으로 전부 전달됩니다.

use validator::ValidateEmail;
use crate::utils::string_utils::clean_optional_string;

/// 이름 최소 길이
const NAME_MIN_LEN: usize = 2;

/// 전화번호 최소 길이
const PHONE_MIN_LEN: usize = 10;

/// 이름 규칙: trim 후 최소 2자
pub fn check_name(value: Option<String>, violations: &mut Vec<String>) -> Option<String> {
    match clean_optional_string(value) {
        Some(name) if name.chars().count() >= NAME_MIN_LEN => Some(name),
        Some(_) => {
            violations.push(format!(
                "name must be at least {} characters long",
                NAME_MIN_LEN
            ));
            None
        }
        None => {
            violations.push("name is required".to_string());
            None
        }
    }
}

/// 이메일 규칙: 이메일 문법 검사 후 trim + 소문자로 정규화
pub fn check_email(value: Option<String>, violations: &mut Vec<String>) -> Option<String> {
    match clean_optional_string(value) {
        Some(email) if email.validate_email() => Some(email.to_lowercase()),
        Some(_) => {
            violations.push("email must be a valid email address".to_string());
            None
        }
        None => {
            violations.push("email is required".to_string());
            None
        }
    }
}

/// 전화번호 규칙: 최소 10자
pub fn check_phone(value: Option<String>, violations: &mut Vec<String>) -> Option<String> {
    match value {
        Some(phone) if phone.chars().count() >= PHONE_MIN_LEN => Some(phone),
        Some(_) => {
            violations.push(format!(
                "phone must be at least {} characters long",
                PHONE_MIN_LEN
            ));
            None
        }
        None => {
            violations.push("phone is required".to_string());
            None
        }
    }
}

/// 필수 텍스트 규칙: trim 후 비어 있지 않아야 함 (company, address.city)
pub fn check_required_text(
    field: &str,
    value: Option<String>,
    violations: &mut Vec<String>,
) -> Option<String> {
    match clean_optional_string(value) {
        Some(text) => Some(text),
        None => {
            violations.push(format!("{} is required", field));
            None
        }
    }
}

/// 우편번호 규칙: 비어 있지 않은 문자열 (trim 미적용)
pub fn check_zipcode(value: Option<String>, violations: &mut Vec<String>) -> Option<String> {
    match value {
        Some(zipcode) if !zipcode.is_empty() => Some(zipcode),
        _ => {
            violations.push("address.zipcode is required".to_string());
            None
        }
    }
}

/// 숫자 필드 규칙: 존재 여부만 확인 (address.geo.lat / address.geo.lng)
pub fn check_number(field: &str, value: Option<f64>, violations: &mut Vec<String>) -> Option<f64> {
    match value {
        Some(number) => Some(number),
        None => {
            violations.push(format!("{} is required", field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_name_trims_and_enforces_min_length() {
        let mut violations = Vec::new();

        assert_eq!(
            check_name(Some("  Alice  ".to_string()), &mut violations),
            Some("Alice".to_string())
        );
        assert!(violations.is_empty());

        assert_eq!(check_name(Some("A".to_string()), &mut violations), None);
        assert_eq!(check_name(None, &mut violations), None);
        assert_eq!(
            violations,
            vec![
                "name must be at least 2 characters long".to_string(),
                "name is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_check_name_rejects_blank_as_missing() {
        let mut violations = Vec::new();

        assert_eq!(check_name(Some("   ".to_string()), &mut violations), None);
        assert_eq!(violations, vec!["name is required".to_string()]);
    }

    #[test]
    fn test_check_email_normalizes_to_lowercase() {
        let mut violations = Vec::new();

        assert_eq!(
            check_email(Some("  JO@X.COM ".to_string()), &mut violations),
            Some("jo@x.com".to_string())
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_check_email_rejects_invalid_syntax() {
        let mut violations = Vec::new();

        assert_eq!(check_email(Some("not-an-email".to_string()), &mut violations), None);
        assert_eq!(check_email(None, &mut violations), None);
        assert_eq!(
            violations,
            vec![
                "email must be a valid email address".to_string(),
                "email is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_check_phone_min_length() {
        let mut violations = Vec::new();

        assert_eq!(
            check_phone(Some("0212345678".to_string()), &mut violations),
            Some("0212345678".to_string())
        );
        assert_eq!(check_phone(Some("123".to_string()), &mut violations), None);
        assert_eq!(
            violations,
            vec!["phone must be at least 10 characters long".to_string()]
        );
    }

    #[test]
    fn test_check_required_text_labels_field() {
        let mut violations = Vec::new();

        assert_eq!(
            check_required_text("company", Some(" Acme ".to_string()), &mut violations),
            Some("Acme".to_string())
        );
        assert_eq!(check_required_text("address.city", None, &mut violations), None);
        assert_eq!(violations, vec!["address.city is required".to_string()]);
    }

    #[test]
    fn test_check_zipcode_keeps_raw_value() {
        let mut violations = Vec::new();

        // trim을 적용하지 않으므로 공백 포함 값도 그대로 유지
        assert_eq!(
            check_zipcode(Some(" 10001 ".to_string()), &mut violations),
            Some(" 10001 ".to_string())
        );
        assert_eq!(check_zipcode(Some("".to_string()), &mut violations), None);
        assert_eq!(violations, vec!["address.zipcode is required".to_string()]);
    }

    #[test]
    fn test_check_number() {
        let mut violations = Vec::new();

        assert_eq!(check_number("address.geo.lat", Some(1.5), &mut violations), Some(1.5));
        assert_eq!(check_number("address.geo.lng", None, &mut violations), None);
        assert_eq!(violations, vec!["address.geo.lng is required".to_string()]);
    }
}
