pub mod initialize;
pub mod init_option;
pub mod buy_option;
pub mod settle_expiry;
pub mod redeem;

pub use initialize::*;
pub use init_option::*;
pub use buy_option::*;
pub use settle_expiry::*;
pub use redeem::*;
