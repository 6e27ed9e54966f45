//! Shared helpers for integration tests

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response};
use serde_json::Value;

pub const BOUNDARY: &str = "pdf-text-server-test-boundary";

/// Build a minimal PDF with one page per entry, each page showing its text
/// in Helvetica.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let page_count = pages.len();
    // 1 catalog, 2 page tree, 3 font, then a (page, content) pair per page
    let page_obj = |i: usize| 4 + 2 * i;
    let content_obj = |i: usize| 5 + 2 * i;

    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", page_obj(i)))
        .collect();

    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    for (i, text) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            content_obj(i)
        ));
        let stream = format!("BT /F1 24 Tf 72 700 Td ({}) Tj ET", escape_pdf_string(text));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    out
}

fn escape_pdf_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Encode a single multipart part
fn part(name: &str, filename: Option<&str>, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut out = format!("--{}\r\n", BOUNDARY).into_bytes();
    match filename {
        Some(filename) => out.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, filename
            )
            .as_bytes(),
        ),
        None => out.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n", name).as_bytes(),
        ),
    }
    out.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    out.extend_from_slice(data);
    out.extend_from_slice(b"\r\n");
    out
}

fn finish(mut body: Vec<u8>) -> Vec<u8> {
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// POST `data` as the `file` field
pub fn upload_request(uri: &str, data: &[u8]) -> Request<Body> {
    let body = finish(part("file", Some("upload.pdf"), "application/pdf", data));
    multipart_request(uri, body)
}

/// POST a form that carries only unrelated fields
pub fn upload_without_file(uri: &str) -> Request<Body> {
    let body = finish(part("note", None, "text/plain", b"no document attached"));
    multipart_request(uri, body)
}

/// POST a form with an extra field ahead of the file
pub fn upload_with_extra_field(uri: &str, data: &[u8]) -> Request<Body> {
    let mut body = part("instruction", None, "text/plain", b"summarize this");
    body.extend(part("file", Some("notes.pdf"), "application/pdf", data));
    multipart_request(uri, finish(body))
}

/// POST a form whose text fields all precede the `file` field
pub fn upload_after_fields(uri: &str, fields: &[(&str, &str)], data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend(part(name, None, "text/plain", value.as_bytes()));
    }
    body.extend(part("file", Some("minutes.pdf"), "application/pdf", data));
    multipart_request(uri, finish(body))
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
