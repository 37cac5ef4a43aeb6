use crate::audit::{AuditError, AuditRequest, AuditResult, EmissionRating, RequiredField, SaveRecord, Strategy};
use crate::audit::emissions::derive_result;

fn 유효한_요청() -> AuditRequest {
    AuditRequest::new("https://example.com", "A", "a@b.com", Strategy::Desktop)
}

#[test]
fn 유효한_요청_검증_통과_테스트() {
    assert_eq!(유효한_요청().validate(), Ok(()));
}

#[test]
fn 필드_순서대로_첫_빈칸_보고_테스트() {
    let empty = AuditRequest::default();
    assert_eq!(empty.validate(), Err(AuditError::MissingField(RequiredField::Url)));

    let mut request = 유효한_요청();
    request.name = "   ".to_string();
    request.email = String::new();
    assert_eq!(request.validate(), Err(AuditError::MissingField(RequiredField::Name)));

    let mut request = 유효한_요청();
    request.email = "\t\n".to_string();
    assert_eq!(request.validate(), Err(AuditError::MissingField(RequiredField::Email)));
}

#[test]
fn 검증_에러_메시지_테스트() {
    assert_eq!(AuditError::MissingField(RequiredField::Url).to_string(), "URL is required.");
    assert_eq!(AuditError::MissingField(RequiredField::Name).to_string(), "Name is required.");
    assert_eq!(AuditError::MissingField(RequiredField::Email).to_string(), "Email is required.");
}

#[test]
fn 전략_파싱_테스트() {
    assert_eq!("desktop".parse::<Strategy>(), Ok(Strategy::Desktop));
    assert_eq!(" Mobile ".parse::<Strategy>(), Ok(Strategy::Mobile));
    assert!("tablet".parse::<Strategy>().is_err());
    assert_eq!(Strategy::default(), Strategy::Desktop);
    assert_eq!(Strategy::Mobile.to_string(), "mobile");
}

#[test]
fn 결과_표시_라인_테스트() {
    let result = derive_result(2_097_152.0, Strategy::Desktop);
    let lines = result.display_lines();

    assert_eq!(lines[0], "Device: desktop");
    assert_eq!(lines[1], "Page Size: 2.00 MB");
    assert_eq!(lines[2], "CO2 Emissions: 0.67 g");
    assert_eq!(lines[3], "Rating: E");
}

#[test]
fn 저장_레코드_직렬화_형태_테스트() {
    let request = AuditRequest::new("https://example.com", "A", "a@b.com", Strategy::Mobile);
    let result = derive_result(2_097_152.0, Strategy::Mobile);
    let record = SaveRecord::new(&request, &result);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "A",
            "email": "a@b.com",
            "url": "https://example.com",
            "results": { "MB": "2.00", "grams": "0.67" },
            "deviceName": "mobile"
        })
    );
}

#[test]
fn 잘못된_grams_문자열은_등급_없음_테스트() {
    let result = AuditResult {
        device: Strategy::Desktop,
        mb: "2.00".to_string(),
        grams: "abc".to_string(),
    };

    assert_eq!(result.grams_value(), None);
    assert_eq!(result.rating(), None);

    let lines = result.display_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| !line.starts_with("Rating")));
}

#[test]
fn 정상_grams_등급_테스트() {
    let result = derive_result(2_097_152.0, Strategy::Desktop);
    assert_eq!(result.grams_value(), Some(0.67));
    assert_eq!(result.rating(), Some(EmissionRating::E));
}
