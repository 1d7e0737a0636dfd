//! Reference asset addresses.
//!
//! Balances are keyed by the on-chain address of the currency the amount is
//! denominated in. The [`AddressBook`] resolves `(chain, symbol)` pairs to
//! those addresses and is injected wherever a result has to be keyed.

mod address_book;

pub use address_book::AddressBook;
