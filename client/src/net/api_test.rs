use super::*;

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(check_status(304), Err(ApiError::Status(304)));
    assert_eq!(check_status(404), Err(ApiError::Status(404)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "unexpected status: 503");
    assert_eq!(ApiError::Network("offline".into()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("eof".into()).to_string(), "invalid response body: eof");
}
