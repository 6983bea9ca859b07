/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http::apply (request id / trace / limit / timeout), security_headers::apply
 */
pub mod http;
pub mod security_headers;
