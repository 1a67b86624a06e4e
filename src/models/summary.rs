/// Aggregate statistics computed over all entries at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_days: usize,
    pub total_minutes: u64,
    pub average_minutes: f64,
    pub goal: u32,
    pub met_goal_days: usize,
}
