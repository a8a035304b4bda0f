use crate::utils::TieBreak;

/// Majority leaf grown when no split candidates are left: a tie predicts `true`.
pub const EXHAUSTED_CANDIDATES_TIE: TieBreak = TieBreak::PreferTrue;
/// Default ("no match") child of a split: a tie predicts `false`.
pub const DEFAULT_BRANCH_TIE: TieBreak = TieBreak::PreferFalse;
/// Forest vote: a tie is settled by the first tree's answer.
pub const FOREST_TIE: TieBreak = TieBreak::PreferFirst;

pub const DEFAULT_N_TREES: usize = 10;
pub const DEFAULT_SAMPLE_FRACTION: f32 = 1.0;
