//! Resource Mock Provider
//!
//! Static fixtures keyed by user id, shaped exactly like the live
//! API's payloads after envelope unwrapping. An unknown user is a
//! normal miss (`None`); callers decide whether that is an error.

use super::models::{
    ActivitySession, AverageSession, KeyData, PerformanceMetric, UserInfos, UserProfile,
};

/// User ids present in the fixture set
pub const MOCK_USER_IDS: [u32; 2] = [12, 18];

/// Profile fixture for one user
pub fn user_profile(user_id: u32) -> Option<UserProfile> {
    match user_id {
        12 => Some(UserProfile {
            id: 12,
            user_infos: UserInfos {
                first_name: "Karl".to_string(),
                last_name: "Dovineau".to_string(),
                age: 31,
            },
            today_score: Some(0.12),
            score: None,
            key_data: KeyData {
                calorie_count: 1930.0,
                protein_count: 155.0,
                carbohydrate_count: 290.0,
                lipid_count: 50.0,
            },
        }),
        18 => Some(UserProfile {
            id: 18,
            user_infos: UserInfos {
                first_name: "Cecilia".to_string(),
                last_name: "Ratorez".to_string(),
                age: 34,
            },
            today_score: None,
            score: Some(0.3),
            key_data: KeyData {
                calorie_count: 2500.0,
                protein_count: 90.0,
                carbohydrate_count: 150.0,
                lipid_count: 120.0,
            },
        }),
        _ => None,
    }
}

/// One week of daily activity for one user
pub fn activity_sessions(user_id: u32) -> Option<Vec<ActivitySession>> {
    let week = |days: [(&str, f64, f64); 7]| {
        days.into_iter()
            .map(|(day, kilogram, calories)| ActivitySession {
                day: day.to_string(),
                kilogram,
                calories,
            })
            .collect()
    };

    match user_id {
        12 => Some(week([
            ("2020-07-01", 80.0, 240.0),
            ("2020-07-02", 80.0, 220.0),
            ("2020-07-03", 81.0, 280.0),
            ("2020-07-04", 81.0, 290.0),
            ("2020-07-05", 80.0, 160.0),
            ("2020-07-06", 78.0, 162.0),
            ("2020-07-07", 76.0, 390.0),
        ])),
        18 => Some(week([
            ("2020-07-01", 70.0, 240.0),
            ("2020-07-02", 69.0, 220.0),
            ("2020-07-03", 70.0, 280.0),
            ("2020-07-04", 70.0, 500.0),
            ("2020-07-05", 69.0, 160.0),
            ("2020-07-06", 69.0, 162.0),
            ("2020-07-07", 69.0, 390.0),
        ])),
        _ => None,
    }
}

/// Average session length per weekday (1 = Monday .. 7 = Sunday)
pub fn average_sessions(user_id: u32) -> Option<Vec<AverageSession>> {
    let lengths: [f64; 7] = match user_id {
        12 => [30.0, 23.0, 45.0, 50.0, 0.0, 0.0, 60.0],
        18 => [30.0, 40.0, 50.0, 30.0, 30.0, 50.0, 50.0],
        _ => return None,
    };

    Some(
        lengths
            .into_iter()
            .enumerate()
            .map(|(index, session_length)| AverageSession {
                day: index as u8 + 1,
                session_length,
            })
            .collect(),
    )
}

/// Performance scores per category code for one user
pub fn performance(user_id: u32) -> Option<Vec<PerformanceMetric>> {
    let values: [f64; 6] = match user_id {
        12 => [80.0, 120.0, 140.0, 50.0, 200.0, 90.0],
        18 => [200.0, 240.0, 80.0, 80.0, 220.0, 110.0],
        _ => return None,
    };

    Some(
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| PerformanceMetric {
                value,
                kind: index as u8 + 1,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_users_have_every_resource() {
        for id in MOCK_USER_IDS {
            assert!(user_profile(id).is_some());
            assert!(activity_sessions(id).is_some());
            assert!(average_sessions(id).is_some());
            assert!(performance(id).is_some());
        }
    }

    #[test]
    fn unknown_user_is_a_miss_everywhere() {
        assert!(user_profile(99).is_none());
        assert!(activity_sessions(99).is_none());
        assert!(average_sessions(99).is_none());
        assert!(performance(99).is_none());
    }

    #[test]
    fn fixtures_cover_a_full_week_in_order() {
        for id in MOCK_USER_IDS {
            let sessions = average_sessions(id).unwrap();
            assert_eq!(sessions.len(), 7);
            let days: Vec<u8> = sessions.iter().map(|s| s.day).collect();
            assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7]);

            assert_eq!(activity_sessions(id).unwrap().len(), 7);
        }
    }

    #[test]
    fn performance_covers_all_six_categories() {
        for id in MOCK_USER_IDS {
            let metrics = performance(id).unwrap();
            let kinds: Vec<u8> = metrics.iter().map(|m| m.kind).collect();
            assert_eq!(kinds, vec![1, 2, 3, 4, 5, 6]);
            assert!(metrics.iter().all(|m| m.value > 0.0));
        }
    }

    #[test]
    fn key_data_is_populated() {
        for id in MOCK_USER_IDS {
            let key_data = user_profile(id).unwrap().key_data;
            assert!(key_data.calorie_count > 0.0);
            assert!(key_data.protein_count > 0.0);
            assert!(key_data.carbohydrate_count > 0.0);
            assert!(key_data.lipid_count > 0.0);
        }
    }
}
