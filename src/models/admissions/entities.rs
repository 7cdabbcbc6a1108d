use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrainerError};
use crate::utils::validate::{RATING_SENTINEL, is_real_rating, validate_rating};

/// 考核任务状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdmissionStatus {
    Inactive,
    Active,
    Completed,
    Examination,
}

impl AdmissionStatus {
    pub const INACTIVE: &'static str = "INACTIVE";
    pub const ACTIVE: &'static str = "ACTIVE";
    pub const COMPLETED: &'static str = "COMPLETED";
    pub const EXAMINATION: &'static str = "EXAMINATION";

    pub fn as_str(&self) -> &'static str {
        match self {
            AdmissionStatus::Inactive => Self::INACTIVE,
            AdmissionStatus::Active => Self::ACTIVE,
            AdmissionStatus::Completed => Self::COMPLETED,
            AdmissionStatus::Examination => Self::EXAMINATION,
        }
    }
}

impl std::fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            Self::INACTIVE => Ok(AdmissionStatus::Inactive),
            Self::ACTIVE => Ok(AdmissionStatus::Active),
            Self::COMPLETED => Ok(AdmissionStatus::Completed),
            Self::EXAMINATION => Ok(AdmissionStatus::Examination),
            _ => Err(format!("Invalid admission status: {s}")),
        }
    }
}

/// 考核任务：一个学员对应一个场景
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Admission {
    pub id: i64,
    pub rating: String,
    pub status: AdmissionStatus,
    pub user_id: i64,
    pub scenario_id: i64,
    /// 记录真实评分的时间，未评分为 None
    pub is_ready: Option<DateTime<Utc>>,
}

impl Admission {
    /// 新分配的任务：ACTIVE，评分为占位值
    pub fn assigned(user_id: i64, scenario_id: i64) -> Self {
        Self {
            id: 0,
            rating: RATING_SENTINEL.to_string(),
            status: AdmissionStatus::Active,
            user_id,
            scenario_id,
            is_ready: None,
        }
    }

    pub fn is_graded(&self) -> bool {
        self.is_ready.is_some()
    }

    pub fn set_rating(&mut self, value: Option<&str>) -> Result<()> {
        self.set_rating_at(value, Utc::now())
    }

    /// 评分状态机
    ///
    /// - 真实评分：写入评分，`is_ready = now`，状态强制为 COMPLETED
    /// - `"0"`：评分重置为占位值，清空 `is_ready`，状态不变
    /// - None：评分不变，清空 `is_ready`，状态不变
    ///
    /// 校验失败时不修改任何字段。
    pub fn set_rating_at(&mut self, value: Option<&str>, now: DateTime<Utc>) -> Result<()> {
        match value {
            Some(rating) => {
                validate_rating(rating).map_err(TrainerError::validation)?;
                if is_real_rating(rating) {
                    self.rating = rating.to_string();
                    self.is_ready = Some(now);
                    self.status = AdmissionStatus::Completed;
                } else {
                    self.rating = RATING_SENTINEL.to_string();
                    self.is_ready = None;
                }
            }
            None => self.is_ready = None,
        }
        Ok(())
    }

    /// 先应用调用方给出的状态，再执行评分；评分结果优先
    ///
    /// 未给出评分时只写状态，已有评分和 `is_ready` 保持不变。
    pub fn grade(&mut self, rating: Option<&str>, status: Option<AdmissionStatus>) -> Result<()> {
        if let Some(rating) = rating {
            validate_rating(rating).map_err(TrainerError::validation)?;
        }
        if let Some(status) = status {
            self.status = status;
        }
        match rating {
            Some(rating) => self.set_rating(Some(rating)),
            None => Ok(()),
        }
    }
}

/// 评分平均值；占位值 "0" 按 0 计，无评分时为 0.0
pub fn average_rating(ratings: &[String]) -> Result<f64> {
    if ratings.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for rating in ratings {
        total += rating.trim().parse::<f64>().map_err(|e| {
            TrainerError::serialization(format!("Stored rating '{rating}' is not numeric: {e}"))
        })?;
    }
    Ok(total / ratings.len() as f64)
}

/// 最近一次完成评分的任务
pub fn last_admission_task(admissions: &[Admission]) -> Option<Admission> {
    admissions
        .iter()
        .filter(|a| a.is_graded())
        .max_by_key(|a| a.is_ready)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn admission() -> Admission {
        Admission {
            id: 1,
            ..Admission::assigned(10, 20)
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "EXAMINATION".parse::<AdmissionStatus>(),
            Ok(AdmissionStatus::Examination)
        );
        assert!("completed".parse::<AdmissionStatus>().is_err());
        assert_eq!(
            serde_json::to_string(&AdmissionStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }

    #[test]
    fn test_real_rating_completes() {
        let mut a = admission();
        a.set_rating_at(Some("3.5"), at(0)).unwrap();
        assert_eq!(a.rating, "3.5");
        assert_eq!(a.is_ready, Some(at(0)));
        assert_eq!(a.status, AdmissionStatus::Completed);
    }

    #[test]
    fn test_zero_point_zero_is_real_grade() {
        let mut a = admission();
        a.set_rating_at(Some("0.0"), at(0)).unwrap();
        assert_eq!(a.status, AdmissionStatus::Completed);
        assert!(a.is_graded());
    }

    #[test]
    fn test_sentinel_clears_is_ready() {
        let mut a = admission();
        a.set_rating_at(Some("4.0"), at(0)).unwrap();
        a.status = AdmissionStatus::Examination;
        a.set_rating_at(Some("0"), at(5)).unwrap();
        assert_eq!(a.rating, "0");
        assert_eq!(a.is_ready, None);
        assert_eq!(a.status, AdmissionStatus::Examination);
    }

    #[test]
    fn test_none_keeps_rating() {
        let mut a = admission();
        a.rating = "2.5".to_string();
        a.is_ready = Some(at(0));
        a.status = AdmissionStatus::Active;
        a.set_rating_at(None, at(5)).unwrap();
        assert_eq!(a.rating, "2.5");
        assert_eq!(a.is_ready, None);
        assert_eq!(a.status, AdmissionStatus::Active);
    }

    #[test]
    fn test_invalid_rating_does_not_mutate() {
        for bad in ["6.0", "3.7", "abc"] {
            let mut a = admission();
            let before = a.clone();
            let err = a.set_rating_at(Some(bad), at(0)).unwrap_err();
            assert_eq!(err.class(), crate::errors::ErrorClass::Validation);
            assert_eq!(a, before);
        }
    }

    #[test]
    fn test_grade_real_rating_overrides_status() {
        let mut a = admission();
        a.grade(Some("4.5"), Some(AdmissionStatus::Examination))
            .unwrap();
        assert_eq!(a.status, AdmissionStatus::Completed);
    }

    #[test]
    fn test_grade_sentinel_keeps_caller_status() {
        let mut a = admission();
        a.grade(Some("0"), Some(AdmissionStatus::Examination))
            .unwrap();
        assert_eq!(a.status, AdmissionStatus::Examination);
        assert_eq!(a.is_ready, None);
    }

    #[test]
    fn test_grade_invalid_rating_keeps_status() {
        let mut a = admission();
        assert!(
            a.grade(Some("9.9"), Some(AdmissionStatus::Inactive))
                .is_err()
        );
        assert_eq!(a.status, AdmissionStatus::Active);
    }

    #[test]
    fn test_grade_status_only_keeps_real_rating() {
        let mut a = admission();
        a.set_rating_at(Some("4.5"), at(0)).unwrap();
        a.grade(None, Some(AdmissionStatus::Examination)).unwrap();
        assert_eq!(a.rating, "4.5");
        assert_eq!(a.is_ready, Some(at(0)));
        assert_eq!(a.status, AdmissionStatus::Examination);
        assert_eq!(last_admission_task(&[a.clone()]), Some(a));
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average_rating(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_average_counts_sentinel_as_zero() {
        let ratings = vec!["0".to_string(), "0".to_string(), "4.5".to_string()];
        assert!((average_rating(&ratings).unwrap() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_last_task_empty_and_ungraded() {
        assert_eq!(last_admission_task(&[]), None);
        assert_eq!(last_admission_task(&[admission()]), None);
    }

    #[test]
    fn test_last_task_picks_latest() {
        let mut first = admission();
        first.set_rating_at(Some("3.0"), at(10)).unwrap();
        let mut second = Admission {
            id: 2,
            ..admission()
        };
        second.set_rating_at(Some("4.0"), at(20)).unwrap();
        let ungraded = Admission {
            id: 3,
            ..admission()
        };
        let picked = last_admission_task(&[first, ungraded, second]).unwrap();
        assert_eq!(picked.id, 2);
    }
}
