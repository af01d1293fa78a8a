//! The document under inspection.
//!
//! Every validator, generator and audit check reads the page through a
//! `DocumentSnapshot` instead of ambient global state, and schema injection
//! writes back into the same value. Snapshots are built from HTML strings in
//! tests and loaded from files or URLs by the CLI.

mod load;
mod snapshot;

pub use load::load_snapshot;
pub use snapshot::{DocumentSnapshot, InjectedScript};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
