//! 请求提取器

use axum::extract::{FromRequest, FromRequestParts};
use bada_errors::AppError;

/// JSON 请求体提取器
///
/// 解析失败时返回 `{"error": "..."}` 形式的 400 响应
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

/// 路径参数提取器，非法 ID 同样返回 JSON 错误体
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
