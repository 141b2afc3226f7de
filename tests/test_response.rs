use harbor::http::response::{Body, Response, StatusCode};
use harbor::http::writer::{ResponseWriter, serialize_head};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_fixed_payload_bodies() {
    let cases = [
        (Response::bad_request(), StatusCode::BadRequest, b"Bad Request".to_vec()),
        (Response::not_found(), StatusCode::NotFound, b"Not Found".to_vec()),
        (
            Response::method_not_allowed(),
            StatusCode::MethodNotAllowed,
            b"Method Not Allowed".to_vec(),
        ),
    ];

    for (resp, status, body) in cases {
        assert_eq!(resp.status, status);
        assert_eq!(resp.content_type, "text/plain");
        match resp.body {
            Body::Bytes(bytes) => assert_eq!(bytes, body),
            Body::File { .. } => panic!("fixed payload should be in-memory bytes"),
        }
    }
}

#[test]
fn test_head_serialization_exact_bytes() {
    let head = serialize_head(&Response::not_found());

    assert_eq!(
        head,
        b"HTTP/1.1 404 Not Found\r\nContent-type: text/plain\r\nContent-length: 9\r\n\r\n"
    );
}

#[test]
fn test_content_length_matches_body() {
    let resp = Response::method_not_allowed();
    let head = String::from_utf8(serialize_head(&resp)).unwrap();

    assert!(head.contains("Content-length: 18\r\n")); // "Method Not Allowed"
}

#[tokio::test]
async fn test_repeated_404s_are_byte_identical() {
    let mut first = Vec::new();
    let mut second = Vec::new();

    ResponseWriter::new(Response::not_found())
        .write_to_stream(&mut first, 1024)
        .await
        .unwrap();
    ResponseWriter::new(Response::not_found())
        .write_to_stream(&mut second, 1024)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_writer_emits_head_then_body() {
    let mut out = Vec::new();
    ResponseWriter::new(Response::bad_request())
        .write_to_stream(&mut out, 1024)
        .await
        .unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 400 Bad Request\r\nContent-type: text/plain\r\nContent-length: 11\r\n\r\nBad Request"
    );
}
