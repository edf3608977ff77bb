//! # Custody Gateway Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Deterministic validators, notice builders, harness
//! │
//! ├── exploits/         # Attack simulations
//! │   ├── replay.rs     # Re-submitting applied notices
//! │   ├── signatures.rs # Forged, duplicated and malleated signatures
//! │   ├── stale_era.rs  # Old-era notices after rotation
//! │   ├── bypass.rs     # Calling privileged handlers directly
//! │   └── rollback.rs   # Failing collaborators mid-notice
//! │
//! └── integration/      # End-to-end flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p gateway-tests
//!
//! # By category
//! cargo test -p gateway-tests integration::
//! cargo test -p gateway-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p gateway-tests
//! ```

#![allow(dead_code)]
