use crate::domain::model::StudentEntry;
use crate::domain::ports::RosterProvider;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_finite, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

const BUILTIN_ROSTER: &str = include_str!("roster.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub title: String,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
}

impl RosterConfig {
    /// 編譯時內嵌的範例名冊（Alice 與 Bob）
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_ROSTER)
    }

    /// 從 TOML 字串解析名冊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrackerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl RosterProvider for RosterConfig {
    fn title(&self) -> &str {
        &self.title
    }

    fn students(&self) -> &[StudentEntry] {
        &self.students
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;

        // 空字串姓名是允許的，只檢查分數
        for (i, entry) in self.students.iter().enumerate() {
            for (j, &score) in entry.scores.iter().enumerate() {
                validate_finite(&format!("students[{}].scores[{}]", i, j), score)?;
            }
        }

        Ok(())
    }
}
