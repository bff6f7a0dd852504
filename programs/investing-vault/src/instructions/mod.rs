pub mod claim_reward;
pub mod deposit;
pub mod get_user_data;
pub mod initialize;
pub mod invest;
pub mod invest_return;
pub mod withdraw;

pub use claim_reward::*;
pub use deposit::*;
pub use get_user_data::*;
pub use initialize::*;
pub use invest::*;
pub use invest_return::*;
pub use withdraw::*;
