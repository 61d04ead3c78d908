//! Lambda response builders for the chat routes.

use lambda_http::http::header::{ALLOW, CONTENT_TYPE};
use lambda_http::{Body, Response};
use serde::Serialize;

use crate::chat::ChatReply;

/// `{success, data}` / `{success, error}` envelope used by the non-chat routes.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

fn json_body(status: u16, body: String) -> Result<Response<Body>, lambda_http::Error> {
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .map_err(Box::new)?;
    Ok(response)
}

/// Serialize `data` as a JSON response.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    json_body(status, serde_json::to_string(data)?)
}

/// Response for a `/v1/chat` outcome; the chat bodies carry no envelope.
pub fn chat_response(reply: &ChatReply) -> Result<Response<Body>, lambda_http::Error> {
    json_body(reply.status_code(), reply.to_json()?)
}

/// 405 with an `Allow` header naming the route's only method.
pub fn method_not_allowed(allowed: &'static str) -> Result<Response<Body>, lambda_http::Error> {
    let body = ApiResponse::<()> {
        success: false,
        data: None,
        error: Some(format!("Method not allowed, use {}", allowed)),
    };
    let mut response = json_response(405, &body)?;
    response
        .headers_mut()
        .insert(ALLOW, lambda_http::http::HeaderValue::from_static(allowed));
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatErrorBody;

    fn text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(text) => text,
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_success_envelope() {
        let response = json_response(200, &ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(text(&response), r#"{"success":true,"data":[1,2]}"#);
    }

    #[test]
    fn test_chat_response_keeps_status_and_bare_body() {
        let reply = ChatReply::Invalid(ChatErrorBody {
            error: "رسالة غير صحيحة".to_string(),
            fallback: None,
        });
        let response = chat_response(&reply).unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(text(&response), r#"{"error":"رسالة غير صحيحة"}"#);
    }

    #[test]
    fn test_method_not_allowed() {
        let response = method_not_allowed("POST").unwrap();
        assert_eq!(response.status(), 405);
        assert_eq!(response.headers()[ALLOW], "POST");
        assert!(text(&response).contains(r#""success":false"#));
        assert!(text(&response).contains("use POST"));
    }
}
