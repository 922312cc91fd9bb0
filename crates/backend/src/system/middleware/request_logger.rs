use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Пишет одно событие на запрос: метод, путь, статус, длительность и
/// размер тела ответа. 5xx уходят уровнем `warn`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                method = %method,
                path = uri.path(),
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "response body could not be read: {}",
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    if parts.status.is_server_error() {
        tracing::warn!(
            method = %method,
            path = uri.path(),
            status = parts.status.as_u16(),
            elapsed_ms,
            bytes = bytes.len(),
            "request failed"
        );
    } else {
        tracing::info!(
            method = %method,
            path = uri.path(),
            status = parts.status.as_u16(),
            elapsed_ms,
            bytes = bytes.len(),
            "request"
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
