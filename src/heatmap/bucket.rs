use chrono::{DateTime, FixedOffset, NaiveDate};
use std::collections::HashMap;
use tracing::warn;

use crate::model::Submission;

/// Calendar day of an epoch second under the given offset.
pub fn local_date(epoch_second: i64, offset: FixedOffset) -> Option<NaiveDate> {
    DateTime::from_timestamp(epoch_second, 0).map(|dt| dt.with_timezone(&offset).date_naive())
}

/// Submissions grouped by calendar day.
///
/// Every stored day holds at least one submission, kept in input order.
#[derive(Debug, Default)]
pub struct DayBuckets<'a> {
    days: HashMap<NaiveDate, Vec<&'a Submission>>,
}

impl<'a> DayBuckets<'a> {
    pub fn get(&self, date: NaiveDate) -> Option<&[&'a Submission]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Number of distinct days with at least one submission.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

pub fn bucket_by_day<'a>(submissions: &[&'a Submission], offset: FixedOffset) -> DayBuckets<'a> {
    let mut days: HashMap<NaiveDate, Vec<&'a Submission>> = HashMap::new();
    for &s in submissions {
        match local_date(s.epoch_second, offset) {
            Some(date) => days.entry(date).or_default().push(s),
            None => warn!(
                "Skipping submission {} with out-of-range timestamp {}",
                s.id, s.epoch_second
            ),
        }
    }
    DayBuckets { days }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(id: u64, epoch_second: i64) -> Submission {
        Submission {
            id,
            epoch_second,
            problem_id: format!("p{}", id),
            contest_id: String::new(),
            user_id: String::new(),
            language: String::new(),
            point: 0.0,
            length: 0,
            result: "AC".to_string(),
            execution_time: None,
        }
    }

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn test_offset_moves_day_boundary() {
        // 2024-03-09T20:00:00Z is already 2024-03-10 in JST.
        let epoch = 1_710_014_400;
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            local_date(epoch, utc),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(
            local_date(epoch, jst()),
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
    }

    #[test]
    fn test_same_day_accumulates_in_input_order() {
        let subs = vec![sub(3, 1_710_000_000), sub(1, 1_710_000_100), sub(2, 1_710_000_200)];
        let refs: Vec<&Submission> = subs.iter().collect();
        let buckets = bucket_by_day(&refs, jst());

        assert_eq!(buckets.len(), 1);
        let day = local_date(1_710_000_000, jst()).unwrap();
        let ids: Vec<u64> = buckets.get(day).unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_input_has_no_days() {
        let buckets = bucket_by_day(&[], jst());
        assert!(buckets.is_empty());
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(buckets.get(day).is_none());
    }

    #[test]
    fn test_out_of_range_timestamp_is_skipped() {
        let subs = vec![sub(1, i64::MAX), sub(2, 1_710_000_000)];
        let refs: Vec<&Submission> = subs.iter().collect();
        let buckets = bucket_by_day(&refs, jst());
        assert_eq!(buckets.len(), 1);
    }
}
