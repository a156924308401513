/// Maximum number of candidate moves considered; later tokens are dropped.
pub const MAX_MOVES: usize = 256;

/// Longest move token that is read; longer tokens are cut to this many characters.
pub const MAX_TOKEN_LEN: usize = 15;

/// Longest move list that is read, in bytes.
pub const MAX_MOVE_LIST_LEN: usize = 4095;

/// Magnitude of the starting best score, worse than any reachable evaluation.
pub const WORST_SCORE: i32 = 9_999_999;
