/// Data layer: core types, loading, filtering, and statistics.
///
/// Architecture:
/// ```text
///   data/heart.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  remove Cholesterol == 0 rows → cleaned Dataset
///   └──────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  stats    │          │  chart    │  (crate::chart)
///   │ describe, │          │ lookup    │
///   │ corr      │          │ tables    │
///   └──────────┘          └──────────┘
/// ```
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
