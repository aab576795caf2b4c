mod goal;
mod ledger;
mod money;
mod transaction;

pub use goal::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
