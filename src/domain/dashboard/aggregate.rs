//! 설문 응답 집계
//!
//! DB 접근 없이 질문 목록과 응답 목록만으로 대시보드 수치를 계산합니다.
//! 응답 일자는 `utc_offset_hours`를 적용한 현지 날짜 기준으로 묶습니다.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::dto::{CategoryStat, DailyStat, DashboardSummary, QuestionStat, TrendStat};
use crate::domain::survey::entity::survey_question;
use crate::domain::survey::entity::survey_response::{self, Answer};
use crate::utils::error::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 조회 가능한 최대 기간 (일)
pub const MAX_RANGE_DAYS: i64 = 366;

/// 조회 가능한 연도 범위. 직전 구간과 UTC 변환이 chrono 한계를 넘지 않도록 제한
const MIN_YEAR: i32 = 1970;
const MAX_YEAR: i32 = 9999;

/// 양 끝을 포함하는 날짜 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, AppError> {
        for date in [from, to] {
            if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
                return Err(AppError::DashboardRangeInvalid(format!(
                    "조회 가능한 연도는 {}~{}입니다: {}",
                    MIN_YEAR, MAX_YEAR, date
                )));
            }
        }

        if from > to {
            return Err(AppError::DashboardRangeInvalid(
                "시작일은 종료일보다 늦을 수 없습니다.".to_string(),
            ));
        }

        let range = Self { from, to };
        if range.days() > MAX_RANGE_DAYS {
            return Err(AppError::DashboardRangeInvalid(format!(
                "조회 기간은 최대 {}일입니다.",
                MAX_RANGE_DAYS
            )));
        }

        Ok(range)
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// 바로 앞의 같은 길이 구간
    pub fn previous(&self) -> DateRange {
        let to = self.from - Duration::days(1);
        DateRange {
            from: to - Duration::days(self.days() - 1),
            to,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take(self.days() as usize)
    }

    /// 직전 구간 시작부터 현재 구간 끝까지의 UTC 조회 범위 `[start, end)`
    pub fn utc_window(&self, utc_offset_hours: i32) -> (NaiveDateTime, NaiveDateTime) {
        let offset = Duration::hours(i64::from(utc_offset_hours));
        let start = self.previous().from.and_time(NaiveTime::MIN) - offset;
        let end = (self.to + Duration::days(1)).and_time(NaiveTime::MIN) - offset;
        (start, end)
    }
}

/// LEFT/RIGHT 누적 카운터
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    left: u64,
    right: u64,
}

impl Tally {
    fn add(&mut self, answer: Answer) {
        match answer {
            Answer::Left => self.left += 1,
            Answer::Right => self.right += 1,
        }
    }

    fn merge(&mut self, other: Tally) {
        self.left += other.left;
        self.right += other.right;
    }

    fn satisfaction(&self) -> Option<f64> {
        let total = self.left + self.right;
        if total == 0 {
            return None;
        }
        Some(round1(self.left as f64 * 100.0 / total as f64))
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 응답 시각(UTC)을 현지 날짜로 변환
pub fn local_date(submitted_at: NaiveDateTime, utc_offset_hours: i32) -> NaiveDate {
    (submitted_at + Duration::hours(i64::from(utc_offset_hours))).date()
}

pub fn aggregate(
    questions: &[survey_question::Model],
    responses: &[survey_response::Model],
    range: DateRange,
    utc_offset_hours: i32,
) -> DashboardSummary {
    let previous = range.previous();

    let index: HashMap<&str, usize> = questions
        .iter()
        .enumerate()
        .map(|(idx, q)| (q.question.as_str(), idx))
        .collect();

    let mut per_question = vec![Tally::default(); questions.len()];
    let mut daily: BTreeMap<NaiveDate, (u64, Tally)> =
        range.dates().map(|d| (d, (0, Tally::default()))).collect();
    let mut total_responses = 0u64;
    let mut previous_responses = 0u64;
    let mut previous_tally = Tally::default();

    for response in responses {
        let Some(answers) = response.answer_map() else {
            continue;
        };
        let date = local_date(response.submitted_at, utc_offset_hours);

        if let Some((count, tally)) = daily.get_mut(&date) {
            total_responses += 1;
            *count += 1;
            for (question, answer) in &answers {
                if let Some(&idx) = index.get(question.as_str()) {
                    per_question[idx].add(*answer);
                    tally.add(*answer);
                }
            }
        } else if previous.contains(date) {
            previous_responses += 1;
            for (question, answer) in &answers {
                if index.contains_key(question.as_str()) {
                    previous_tally.add(*answer);
                }
            }
        }
    }

    let mut overall = Tally::default();
    let mut categories: BTreeMap<&str, Tally> = BTreeMap::new();
    for (q, tally) in questions.iter().zip(&per_question) {
        overall.merge(*tally);
        categories
            .entry(q.category.as_str())
            .or_default()
            .merge(*tally);
    }

    let by_category = categories
        .into_iter()
        .map(|(category, tally)| CategoryStat {
            category: category.to_string(),
            left_count: tally.left,
            right_count: tally.right,
            satisfaction: tally.satisfaction(),
        })
        .collect();

    let by_question = questions
        .iter()
        .zip(&per_question)
        .map(|(q, tally)| QuestionStat {
            question: q.question.clone(),
            option_left: q.option_left.clone(),
            option_right: q.option_right.clone(),
            category: q.category.clone(),
            left_count: tally.left,
            right_count: tally.right,
            left_percentage: tally.satisfaction(),
        })
        .collect();

    let daily = daily
        .into_iter()
        .map(|(date, (count, tally))| DailyStat {
            date: date.format(DATE_FORMAT).to_string(),
            response_count: count,
            satisfaction: tally.satisfaction(),
        })
        .collect();

    let overall_satisfaction = overall.satisfaction();
    let previous_satisfaction = previous_tally.satisfaction();
    let satisfaction_delta = match (overall_satisfaction, previous_satisfaction) {
        (Some(current), Some(prev)) => Some(round1(current - prev)),
        _ => None,
    };

    DashboardSummary {
        from: range.from().format(DATE_FORMAT).to_string(),
        to: range.to().format(DATE_FORMAT).to_string(),
        total_responses,
        overall_satisfaction,
        by_category,
        by_question,
        daily,
        trend: TrendStat {
            previous_from: previous.from().format(DATE_FORMAT).to_string(),
            previous_to: previous.to().format(DATE_FORMAT).to_string(),
            previous_responses,
            previous_satisfaction,
            response_delta: total_responses as i64 - previous_responses as i64,
            satisfaction_delta,
        },
    }
}
