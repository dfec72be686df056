//! End-to-end checks of the recompute cycle
//!
//! Tests are organized by topic:
//! - `snapshot` - Sizes, membership and consistency of one update
//! - `clt` - Statistical behaviour of the sampling distribution
