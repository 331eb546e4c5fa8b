//! Прелюдия крейта: самые нужные типы одним импортом.
//!
//! ```
//! use analytics::prelude::*;
//!
//! let store = TransactionStore::new();
//! assert!(store.is_empty());
//! ```

pub use crate::error::{FormatError, FormatResult};
pub use crate::format::{Format, LossyLoad};
pub use crate::store::{CREDIT, DEBIT, DominantType, TransactionStore};
pub use crate::transaction::Transaction;
