use crate::utils::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 名冊中的一筆學生資料（尚未建立成 [`Student`]）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentEntry {
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub scores: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Empty,
    Populated,
}

/// 一位學生的成績紀錄。
///
/// 姓名與年齡建立後不可變；分數只能附加，不能刪除。
/// 分數序列是自行成長的 `Vec`，沒有固定容量上限。
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    age: i32,
    scores: Vec<f64>,
}

impl Student {
    /// 建立新紀錄。姓名複製失敗時回傳 `AllocationError`，不會留下半成品。
    pub fn new(name: &str, age: i32) -> Result<Self> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(name.len())
            .map_err(|e| TrackerError::allocation("student name", e))?;
        owned.push_str(name);

        Ok(Self {
            name: owned,
            age,
            scores: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn score_count(&self) -> usize {
        self.scores.len()
    }

    pub fn state(&self) -> RecordState {
        if self.scores.is_empty() {
            RecordState::Empty
        } else {
            RecordState::Populated
        }
    }

    /// 附加一個分數。先保留空間再寫入，失敗時原有分數不變。
    pub fn add_score(&mut self, value: f64) -> Result<()> {
        self.scores
            .try_reserve(1)
            .map_err(|e| TrackerError::allocation("scores", e))?;
        self.scores.push(value);
        Ok(())
    }

    /// 一次附加多個分數，全部成功或全部不寫入。
    pub fn add_scores(&mut self, values: &[f64]) -> Result<()> {
        self.scores
            .try_reserve(values.len())
            .map_err(|e| TrackerError::allocation("scores", e))?;
        self.scores.extend_from_slice(values);
        Ok(())
    }

    /// 平均分數；沒有分數時為 0.0。
    pub fn average(&self) -> f64 {
        let count = self.scores.len();
        if count == 0 {
            return 0.0;
        }

        // indices 0..count, never `count` itself
        let sum: f64 = self.scores[0..count].iter().sum();
        sum / count as f64
    }

    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student: {}, Age: {}", self.name, self.age)?;
        write!(f, "Average score: {:.2}", self.average())
    }
}

impl TryFrom<&StudentEntry> for Student {
    type Error = TrackerError;

    fn try_from(entry: &StudentEntry) -> Result<Self> {
        Student::new(&entry.name, entry.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_with(name: &str, age: i32, scores: &[f64]) -> Student {
        let mut student = Student::new(name, age).unwrap();
        for &score in scores {
            student.add_score(score).unwrap();
        }
        student
    }

    #[test]
    fn test_new_student_is_empty() {
        let student = Student::new("Alice", 20).unwrap();
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.age(), 20);
        assert_eq!(student.score_count(), 0);
        assert_eq!(student.state(), RecordState::Empty);
    }

    #[test]
    fn test_empty_average_is_zero() {
        let student = Student::new("Nobody", 0).unwrap();
        assert_eq!(student.average(), 0.0);
    }

    #[test]
    fn test_add_score_transitions_to_populated() {
        let mut student = Student::new("Alice", 20).unwrap();
        student.add_score(95.5).unwrap();
        assert_eq!(student.state(), RecordState::Populated);
        assert_eq!(student.scores(), &[95.5]);
    }

    #[test]
    fn test_alice_average() {
        let student = student_with("Alice", 20, &[95.5, 87.0, 92.3]);
        assert!((student.average() - 91.6).abs() < 0.01);
    }

    #[test]
    fn test_bob_average() {
        let student = student_with("Bob", 21, &[78.5, 82.0]);
        assert!((student.average() - 80.25).abs() < 0.01);
    }

    #[test]
    #[allow(clippy::needless_range_loop)]
    fn test_average_sums_first_index_inclusive_to_count_exclusive() {
        let student = student_with("Carol", 22, &[10.0, 20.0, 30.0]);
        let count = student.score_count();

        let mut expected = 0.0;
        for i in 0..count {
            expected += student.scores()[i];
        }
        expected /= count as f64;

        assert_eq!(student.average(), expected);
        assert_eq!(student.average(), 20.0);
        // `<= count` would have read this slot
        assert!(student.scores().get(count).is_none());
    }

    #[test]
    fn test_single_score_average_is_that_score() {
        let student = student_with("Dan", 30, &[42.0]);
        assert_eq!(student.average(), 42.0);
    }

    #[test]
    fn test_thousand_scores_grow_without_fixed_capacity() {
        let mut student = Student::new("Eve", 19).unwrap();
        for i in 0..1000 {
            student.add_score(i as f64).unwrap();
        }
        assert_eq!(student.score_count(), 1000);
        assert_eq!(student.scores()[999], 999.0);
        assert!((student.average() - 499.5).abs() < 1e-9);
    }

    #[test]
    fn test_add_scores_appends_in_order() {
        let mut student = student_with("Frank", 25, &[1.0]);
        student.add_scores(&[2.0, 3.0]).unwrap();
        assert_eq!(student.scores(), &[1.0, 2.0, 3.0]);

        student.add_scores(&[]).unwrap();
        assert_eq!(student.score_count(), 3);
    }

    #[test]
    fn test_report_format() {
        let student = student_with("Alice", 20, &[95.5, 87.0, 92.3]);
        let report = student.report();
        assert!(report.contains("Age: 20"));
        assert!(report.contains("Average score: 91.60"));
        assert_eq!(report, "Student: Alice, Age: 20\nAverage score: 91.60");
    }

    #[test]
    fn test_report_does_not_mutate() {
        let student = student_with("Bob", 21, &[78.5, 82.0]);
        let before = student.clone();
        let _ = student.report();
        assert_eq!(student, before);
    }

    #[test]
    fn test_empty_name_round_trips() {
        let student = Student::new("", 20).unwrap();
        assert_eq!(student.name(), "");
        assert_eq!(student.report(), "Student: , Age: 20\nAverage score: 0.00");
    }

    #[test]
    fn test_negative_age_is_accepted() {
        let student = Student::new("Ghost", -1).unwrap();
        assert!(student.report().starts_with("Student: Ghost, Age: -1"));
    }

    #[test]
    fn test_try_from_entry_ignores_scores() {
        let entry = StudentEntry {
            name: "Alice".to_string(),
            age: 20,
            scores: vec![95.5],
        };
        let student = Student::try_from(&entry).unwrap();
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.state(), RecordState::Empty);
    }
}
