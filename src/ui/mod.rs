/// User interface building blocks
///
/// - View fragments for the main screen (panels.rs)
/// - Before/after size bars drawn on a canvas (size_chart.rs)

pub mod panels;
pub mod size_chart;
