pub mod member;
pub mod stats;
pub mod tx;
pub mod utils;

pub use member::{ApiMember, Member, MemberForm, MemberSummary};
pub use stats::DashboardStats;
pub use tx::{RawTransaction, Transaction, TransactionStatus, TransactionSummary};
