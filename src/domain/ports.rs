use crate::domain::model::StudentEntry;

/// 提供要建立的學生名冊
pub trait RosterProvider {
    fn title(&self) -> &str;
    fn students(&self) -> &[StudentEntry];
}
