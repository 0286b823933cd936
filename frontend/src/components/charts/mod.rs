pub mod trend_chart;
pub mod weekly_chart;
