pub mod dashboard {
    pub mod match_row;
    pub mod pie_chart;
    pub mod stat_tile;
    pub mod week_chart;
}
pub mod footer;
pub mod nav;
