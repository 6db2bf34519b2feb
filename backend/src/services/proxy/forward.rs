use std::time::Instant;

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use serde_json::json;
use uuid::Uuid;

use super::{Upstream, REQUEST_ID_HEADER};

/// Request headers replayed upstream. Hop-by-hop and browser headers stay behind.
const FORWARDED_HEADERS: [&str; 3] = ["content-type", "accept", "accept-language"];

pub(crate) async fn process(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();
    let target = upstream.target_url(req.path(), Some(req.query_string()));

    let method = match reqwest::Method::from_bytes(req.method().as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return HttpResponse::MethodNotAllowed().finish(),
    };

    info!("[{}] {} {} -> {}", request_id, req.method(), req.uri(), target);
    let started = Instant::now();

    let mut outbound = upstream
        .client
        .request(method, &target)
        .header(REQUEST_ID_HEADER, request_id.as_str());
    for name in FORWARDED_HEADERS {
        if let Some(value) = req.headers().get(name) {
            outbound = outbound.header(name, value.as_bytes());
        }
    }
    if !body.is_empty() {
        outbound = outbound.body(body.to_vec());
    }

    match outbound.send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            info!(
                "[{}] <- {} in {}ms",
                request_id,
                status,
                started.elapsed().as_millis()
            );
            relay(response, &request_id).await
        }
        Err(err) if err.is_timeout() => {
            warn!("[{}] upstream timed out: {}", request_id, err);
            gateway_error(
                StatusCode::GATEWAY_TIMEOUT,
                &request_id,
                format!(
                    "RAG service did not answer within {}s",
                    upstream.timeout_secs
                ),
            )
        }
        Err(err) => {
            warn!("[{}] upstream unreachable: {}", request_id, err);
            gateway_error(
                StatusCode::BAD_GATEWAY,
                &request_id,
                format!("RAG service unavailable at {}", upstream.base_url()),
            )
        }
    }
}

async fn relay(response: reqwest::Response, request_id: &str) -> HttpResponse {
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match response.bytes().await {
        Ok(payload) => {
            let mut builder = HttpResponse::build(status);
            builder.insert_header((REQUEST_ID_HEADER, request_id.to_string()));
            if let Some(content_type) = content_type {
                builder.insert_header((header::CONTENT_TYPE, content_type));
            }
            builder.body(payload.to_vec())
        }
        Err(err) => {
            warn!("[{}] upstream body lost: {}", request_id, err);
            gateway_error(
                StatusCode::BAD_GATEWAY,
                request_id,
                "RAG service closed the connection".to_string(),
            )
        }
    }
}

/// Failures of the hop itself use the service's own `{"message": ...}` error shape.
fn gateway_error(status: StatusCode, request_id: &str, message: String) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((REQUEST_ID_HEADER, request_id.to_string()))
        .json(json!({ "message": message }))
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use super::*;
    use crate::config::ServerConfig;
    use actix_web::{test, App, HttpServer};
    use serde_json::Value;
    use std::net::TcpListener;
    use std::time::Duration;

    fn config_for(upstream: String, timeout: Duration) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 3000,
            upstream,
            proxy_timeout: timeout,
            open_browser: false,
        }
    }

    async fn echo(req: HttpRequest, body: web::Bytes) -> HttpResponse {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        HttpResponse::Created().json(json!({
            "method": req.method().as_str(),
            "path": req.path(),
            "query": req.query_string(),
            "contentType": header("content-type"),
            "requestId": header(REQUEST_ID_HEADER),
            "body": String::from_utf8_lossy(&body),
        }))
    }

    async fn slow() -> HttpResponse {
        actix_web::rt::time::sleep(Duration::from_secs(3)).await;
        HttpResponse::Ok().finish()
    }

    fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[::core::prelude::v1::test]
    fn target_url_keeps_path_and_query() {
        let upstream = Upstream::new(&config_for("http://rag:8080".into(), Duration::from_secs(5))).unwrap();
        assert_eq!(
            upstream.target_url("/api/indexes/docs/exists", None),
            "http://rag:8080/api/indexes/docs/exists"
        );
        assert_eq!(
            upstream.target_url("/api/v1/file-viewer/content", Some("path=L2E%3D")),
            "http://rag:8080/api/v1/file-viewer/content?path=L2E%3D"
        );
        assert_eq!(upstream.target_url("/actuator/health", Some("")), "http://rag:8080/actuator/health");
    }

    #[actix_web::test]
    async fn request_is_replayed_and_answer_relayed() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = HttpServer::new(|| App::new().default_service(web::to(echo)))
            .workers(1)
            .listen(listener)
            .unwrap()
            .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let upstream =
            Upstream::new(&config_for(format!("http://127.0.0.1:{port}"), Duration::from_secs(5))).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(upstream))
                .service(configure_routes("/api")),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/rag/search?trace=1")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"query":"q","indexName":"docs"}"#)
            .to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let echoed: Value = test::read_body_json(response).await;
        assert_eq!(echoed["method"], "POST");
        assert_eq!(echoed["path"], "/api/rag/search");
        assert_eq!(echoed["query"], "trace=1");
        assert_eq!(echoed["contentType"], "application/json");
        assert_eq!(echoed["body"], r#"{"query":"q","indexName":"docs"}"#);
        assert_eq!(echoed["requestId"].as_str().map(str::len), Some(36));

        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let upstream = Upstream::new(&config_for(
            format!("http://127.0.0.1:{}", closed_port()),
            Duration::from_secs(5),
        ))
        .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(upstream))
                .service(configure_routes("/actuator")),
        )
        .await;

        let req = test::TestRequest::get().uri("/actuator/health").to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(response).await;
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("RAG service unavailable at")));
    }

    #[actix_web::test]
    async fn slow_upstream_is_gateway_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = HttpServer::new(|| App::new().default_service(web::to(slow)))
            .workers(1)
            .listen(listener)
            .unwrap()
            .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let upstream =
            Upstream::new(&config_for(format!("http://127.0.0.1:{port}"), Duration::from_secs(1))).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(upstream))
                .service(configure_routes("/api")),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/indexes").to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "RAG service did not answer within 1s");

        handle.stop(false).await;
    }
}
