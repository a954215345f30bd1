pub mod chart;
pub mod format;
pub mod navigation;
pub mod statement;
