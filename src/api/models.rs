//! Resource Models
//!
//! Wire shapes for the four user resources and the `{data: ...}`
//! envelope the backend wraps them in. Access functions unwrap the
//! envelope; everything past the access layer sees the inner types.

use serde::{Deserialize, Serialize};

/// Generic `{data: ...}` response envelope
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

// ============ /user/{id} ============

/// User identity block
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfos {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
}

/// Nutritional counters shown in the key-data cards
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyData {
    pub calorie_count: f64,
    pub protein_count: f64,
    pub carbohydrate_count: f64,
    pub lipid_count: f64,
}

/// Profile record for one user.
///
/// Depending on the record variant the backend returns, the
/// goal-completion ratio lives in either `today_score` or `score`;
/// at most one of the two is populated. Use [`UserProfile::goal_score`]
/// instead of reading the fields directly.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u32,
    pub user_infos: UserInfos,
    #[serde(default)]
    pub today_score: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
    pub key_data: KeyData,
}

impl UserProfile {
    /// Goal-completion ratio in [0, 1], whichever field carries it
    pub fn goal_score(&self) -> Option<f64> {
        self.score.or(self.today_score)
    }
}

// ============ /user/{id}/activity ============

/// One day of activity: weight and energy expended
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ActivitySession {
    /// ISO calendar day, e.g. "2020-07-03"
    pub day: String,
    pub kilogram: f64,
    pub calories: f64,
}

/// Inner payload of the activity envelope.
///
/// Live backends disagree on `id` vs `userId` for this resource; the
/// alias absorbs both spellings. A missing sessions array decodes as
/// empty rather than failing.
#[derive(Debug, Deserialize)]
pub struct UserActivity {
    #[serde(alias = "userId")]
    pub id: u32,
    #[serde(default)]
    pub sessions: Vec<ActivitySession>,
}

// ============ /user/{id}/average-sessions ============

/// Average session length for one weekday (1 = Monday .. 7 = Sunday)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageSession {
    pub day: u8,
    pub session_length: f64,
}

#[derive(Debug, Deserialize)]
pub struct UserAverageSessions {
    #[serde(alias = "userId")]
    pub id: u32,
    #[serde(default)]
    pub sessions: Vec<AverageSession>,
}

// ============ /user/{id}/performance ============

/// One performance category score; `kind` is a category code in 1..=6
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PerformanceMetric {
    pub value: f64,
    pub kind: u8,
}

#[derive(Debug, Deserialize)]
pub struct UserPerformance {
    #[serde(alias = "userId")]
    pub id: u32,
    #[serde(default)]
    pub data: Vec<PerformanceMetric>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_decodes_camel_case_fields() {
        let json = r#"{
            "data": {
                "id": 12,
                "userInfos": {"firstName": "Karl", "lastName": "Dovineau", "age": 31},
                "todayScore": 0.12,
                "keyData": {
                    "calorieCount": 1930,
                    "proteinCount": 155,
                    "carbohydrateCount": 290,
                    "lipidCount": 50
                }
            }
        }"#;

        let envelope: ApiEnvelope<UserProfile> = serde_json::from_str(json).unwrap();
        let profile = envelope.data;
        assert_eq!(profile.id, 12);
        assert_eq!(profile.user_infos.first_name, "Karl");
        assert_eq!(profile.goal_score(), Some(0.12));
        assert_eq!(profile.key_data.calorie_count, 1930.0);
    }

    #[test]
    fn goal_score_prefers_overall_score() {
        let json = r#"{
            "id": 18,
            "userInfos": {"firstName": "Cecilia", "lastName": "Ratorez", "age": 34},
            "score": 0.3,
            "keyData": {
                "calorieCount": 2500,
                "proteinCount": 90,
                "carbohydrateCount": 150,
                "lipidCount": 120
            }
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.today_score, None);
        assert_eq!(profile.goal_score(), Some(0.3));
    }

    #[test]
    fn activity_accepts_both_id_spellings() {
        let with_user_id = r#"{"userId": 12, "sessions": [
            {"day": "2020-07-01", "kilogram": 80, "calories": 240}
        ]}"#;
        let with_id = r#"{"id": 12, "sessions": []}"#;

        let a: UserActivity = serde_json::from_str(with_user_id).unwrap();
        let b: UserActivity = serde_json::from_str(with_id).unwrap();
        assert_eq!(a.id, 12);
        assert_eq!(a.sessions.len(), 1);
        assert_eq!(b.id, 12);
    }

    #[test]
    fn missing_sessions_array_decodes_as_empty() {
        let json = r#"{"id": 12}"#;
        let average: UserAverageSessions = serde_json::from_str(json).unwrap();
        assert!(average.sessions.is_empty());

        let performance: UserPerformance = serde_json::from_str(json).unwrap();
        assert!(performance.data.is_empty());
    }
}
