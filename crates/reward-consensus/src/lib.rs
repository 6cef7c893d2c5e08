pub mod constants;
pub mod error;
pub mod params;
pub mod penalty;
pub mod reward;
pub mod subsidy;
mod wide;

pub use error::{ErrorCode, RewardError};
pub use params::EmissionParams;
pub use penalty::{apply_size_penalty, effective_median, max_block_weight, RewardDecision};
pub use reward::{block_reward, check_coinbase_reward, evaluate_reward};
pub use subsidy::base_reward;
pub use wide::mul_div_by_square;

#[cfg(test)]
mod tests;
