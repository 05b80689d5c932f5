use super::types::{
    DemographicsResponse, ErrorResponse, FraudRequest, FraudResponse, HealthResponse, RoiRequest,
    RoiResponse, SentimentRequest, SentimentResponse,
};
use crate::{Error, Result, SERVICE_NAME};
use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};
use serde_json::Value;
use tracing::{debug, info};

/// Raw body extraction. The rejection is kept so that an undecodable body
/// is reported through [`Error`] instead of axum's 4xx responses.
pub type Payload = std::result::Result<Json<Value>, JsonRejection>;

fn decode(payload: Payload) -> Result<Value> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| Error::payload(rejection.body_text()))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

pub async fn sentiment_analysis(payload: Payload) -> Result<Json<SentimentResponse>> {
    let body = decode(payload)?;
    info!("Received sentiment analysis request");

    let request = SentimentRequest::from_value(&body);
    debug!(
        has_text = request.text.is_some(),
        comments = request.comments.as_ref().map_or(0, Vec::len),
        "Sentiment request view"
    );

    Ok(Json(SentimentResponse::placeholder()))
}

pub async fn predict_roi(payload: Payload) -> Result<Json<RoiResponse>> {
    let body = decode(payload)?;
    info!("Received ROI prediction request");

    let request = RoiRequest::from_value(&body);
    debug!(
        followers = ?request.followers,
        engagement_rate = ?request.engagement_rate,
        campaign_budget = ?request.campaign_budget,
        platform = ?request.platform,
        content_category = ?request.content_category,
        "ROI request view"
    );

    Ok(Json(RoiResponse::placeholder()))
}

pub async fn detect_fraud(payload: Payload) -> Result<Json<FraudResponse>> {
    let body = decode(payload)?;
    info!("Received fraud detection request");

    let request = FraudRequest::from_value(&body);
    debug!(
        subject = ?request.subject,
        metrics = request.data.as_ref().map_or(0, |data| data.len()),
        "Fraud request view"
    );

    Ok(Json(FraudResponse::placeholder()))
}

pub async fn analyze_demographics(payload: Payload) -> Result<Json<DemographicsResponse>> {
    decode(payload)?;
    info!("Received demographics analysis request");

    Ok(Json(DemographicsResponse::placeholder()))
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_string(),
        }),
    )
}
