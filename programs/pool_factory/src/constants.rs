pub const BASE: u64 = 10_000;
pub const DEFAULT_YEAR_SECS: u64 = 31_556_926;
pub const DEFAULT_TRANSACTION_FEE_BP: u16 = 30;
pub const DEFAULT_PROTOCOL_FEE_BP: u16 = 30;
