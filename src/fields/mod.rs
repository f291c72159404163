mod account_number;
mod amount;
mod reference_number;

pub use crate::fields::account_number::AccountNumber;
pub use crate::fields::amount::Amount;
pub use crate::fields::reference_number::ReferenceNumber;
