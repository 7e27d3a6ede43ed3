use crate::core::{RosterProvider, Student};
use crate::utils::error::Result;
use std::io::Write;

pub struct GradeTracker<R: RosterProvider> {
    roster: R,
}

impl<R: RosterProvider> GradeTracker<R> {
    pub fn new(roster: R) -> Self {
        Self { roster }
    }

    /// 依序建立紀錄、附加分數、輸出報表。
    ///
    /// 任一步驟失敗就直接回傳錯誤；已建立的紀錄隨之釋放。
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Student>> {
        tracing::info!("Starting grade tracker");
        writeln!(out, "=== {} ===", self.roster.title())?;

        // Create
        let entries = self.roster.students();
        let mut students = Vec::with_capacity(entries.len());
        for entry in entries {
            tracing::debug!("Creating record for {:?}, age {}", entry.name, entry.age);
            students.push(Student::try_from(entry)?);
        }
        writeln!(out, "Created students successfully")?;

        // Append
        for (student, entry) in students.iter_mut().zip(entries) {
            writeln!(out, "Adding scores for {}...", student.name())?;
            student.add_scores(&entry.scores)?;
            tracing::debug!(
                "{} now has {} scores",
                student.name(),
                student.score_count()
            );
        }

        // Report
        for student in &students {
            writeln!(out, "{}", student.report())?;
        }

        tracing::info!("Reported {} students", students.len());
        Ok(students)
    }
}
