use serde::Serialize;
use serde_json::{Map, Value};

pub const SENTIMENT_PLACEHOLDER: &str =
    "Sentiment analysis placeholder. Integrate actual BERT/DistilBERT model.";
pub const ROI_PLACEHOLDER: &str =
    "ROI prediction placeholder. Integrate trained XGBoost/Random Forest model.";
pub const FRAUD_PLACEHOLDER: &str =
    "Fraud detection placeholder. Integrate Isolation Forest/DBSCAN model.";

// Request views. Bodies are accepted as arbitrary JSON; these pick out the
// documented fields when they are present with the expected type and ignore
// everything else.

fn str_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn f64_field(body: &Value, key: &str) -> Option<f64> {
    body.get(key).and_then(Value::as_f64)
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SentimentRequest {
    pub text: Option<String>,
    pub comments: Option<Vec<String>>,
}

impl SentimentRequest {
    pub fn from_value(body: &Value) -> Self {
        let comments = body.get("comments").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        });
        Self {
            text: str_field(body, "text"),
            comments,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoiRequest {
    pub followers: Option<f64>,
    pub engagement_rate: Option<f64>,
    pub campaign_budget: Option<f64>,
    pub platform: Option<String>,
    pub content_category: Option<String>,
}

impl RoiRequest {
    pub fn from_value(body: &Value) -> Self {
        Self {
            followers: f64_field(body, "followers"),
            engagement_rate: f64_field(body, "engagement_rate"),
            campaign_budget: f64_field(body, "campaign_budget"),
            platform: str_field(body, "platform"),
            content_category: str_field(body, "content_category"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudSubject {
    InfluencerProfile,
    Campaign,
    Collaboration,
}

impl FraudSubject {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "influencer_profile" => Some(Self::InfluencerProfile),
            "campaign" => Some(Self::Campaign),
            "collaboration" => Some(Self::Collaboration),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FraudRequest {
    pub subject: Option<FraudSubject>,
    pub data: Option<Map<String, Value>>,
}

impl FraudRequest {
    pub fn from_value(body: &Value) -> Self {
        Self {
            subject: body
                .get("type")
                .and_then(Value::as_str)
                .and_then(FraudSubject::parse),
            data: body.get("data").and_then(Value::as_object).cloned(),
        }
    }
}

// Response envelopes.

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub success: bool,
    pub sentiment: &'static str,
    pub confidence: f64,
    pub message: &'static str,
}

impl SentimentResponse {
    pub fn placeholder() -> Self {
        Self {
            success: true,
            sentiment: "positive",
            confidence: 0.85,
            message: SENTIMENT_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoiResponse {
    pub success: bool,
    pub predicted_roi: f64,
    pub confidence: f64,
    pub message: &'static str,
}

impl RoiResponse {
    pub fn placeholder() -> Self {
        Self {
            success: true,
            predicted_roi: 175.5,
            confidence: 0.82,
            message: ROI_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FraudResponse {
    pub success: bool,
    pub fraud_detected: bool,
    pub fraud_score: u32,
    pub message: &'static str,
}

impl FraudResponse {
    pub fn placeholder() -> Self {
        Self {
            success: true,
            fraud_detected: false,
            fraud_score: 25,
            message: FRAUD_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DemographicsResponse {
    pub success: bool,
    pub insights: DemographicInsights,
}

#[derive(Debug, Serialize)]
pub struct DemographicInsights {
    pub primary_age_group: &'static str,
    pub gender_distribution: GenderDistribution,
    pub top_locations: Vec<&'static str>,
    pub engagement_by_age: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct GenderDistribution {
    pub male: u32,
    pub female: u32,
    pub other: u32,
}

impl DemographicsResponse {
    pub fn placeholder() -> Self {
        Self {
            success: true,
            insights: DemographicInsights {
                primary_age_group: "25-34",
                gender_distribution: GenderDistribution {
                    male: 45,
                    female: 53,
                    other: 2,
                },
                top_locations: vec!["United States", "United Kingdom", "Canada"],
                engagement_by_age: Map::new(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
