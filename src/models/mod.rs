pub mod day_report;
pub mod entry;
pub mod interval;
pub mod work_day;
