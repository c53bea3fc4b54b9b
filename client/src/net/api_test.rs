use super::*;
use crate::net::types::Genre;

#[test]
fn collection_url_prefixes_api() {
    assert_eq!(collection_url("/generos"), "/api/generos");
    assert_eq!(collection_url("/users"), "/api/users");
}

#[test]
fn status_error_message_matches_error_view_text() {
    assert_eq!(FetchError::Status(500).to_string(), "HTTP error! status: 500");
}

#[test]
fn parse_collection_reads_array() {
    let body = r#"[{"idgenero":1,"nombre":"RPG","descripcion":"Role playing","idestatus":1}]"#;
    let genres: Vec<Genre> = parse_collection(body).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "RPG");
}

#[test]
fn parse_collection_accepts_empty_array() {
    let genres: Vec<Genre> = parse_collection("[]").unwrap();
    assert!(genres.is_empty());
}

#[test]
fn parse_collection_rejects_object_body() {
    let err = parse_collection::<Genre>(r#"{"data":[]}"#).unwrap_err();
    assert_eq!(err, FetchError::NotAnArray("object"));
    assert_eq!(err.to_string(), "expected a JSON array, got object");
}

#[test]
fn parse_collection_rejects_null_body() {
    let err = parse_collection::<Genre>("null").unwrap_err();
    assert_eq!(err, FetchError::NotAnArray("null"));
}

#[test]
fn parse_collection_rejects_malformed_json() {
    let err = parse_collection::<Genre>("[{").unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[test]
fn parse_collection_rejects_wrong_element_shape() {
    let err = parse_collection::<Genre>(r#"[1, 2, 3]"#).unwrap_err();
    assert!(matches!(err, FetchError::Shape(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_collection_is_unavailable_outside_browser() {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut cx = Context::from_waker(Waker::noop());
    let mut fut = pin!(fetch_collection::<Genre>("/generos"));
    let Poll::Ready(result) = fut.as_mut().poll(&mut cx) else {
        panic!("non-browser fetch should resolve immediately");
    };
    assert_eq!(result, Err(FetchError::Unavailable));
}
