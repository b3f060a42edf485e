use qrcode::render::svg;
use qrcode::QrCode;

use super::error::AppError;

/// QR 이미지 최소 크기 (px)
const QR_MIN_DIMENSION: u32 = 256;

/// 고객이 QR로 접속하는 설문 링크
pub fn survey_link(public_base_url: &str, code: &str) -> String {
    format!("{}/r/{}", public_base_url.trim_end_matches('/'), code)
}

/// 식당 행에 저장되는 QR 이미지 URL
pub fn qr_image_url(api_base_url: &str, code: &str) -> String {
    format!(
        "{}/api/v1/public/restaurants/{}/qr.svg",
        api_base_url.trim_end_matches('/'),
        code
    )
}

/// 데이터를 QR 코드 SVG 문자열로 렌더링
pub fn render_svg(data: &str) -> Result<String, AppError> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| AppError::InternalError(format!("QR encoding failed: {}", e)))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_DIMENSION, QR_MIN_DIMENSION)
        .quiet_zone(true)
        .build())
}
