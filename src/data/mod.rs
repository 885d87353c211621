/// Data layer: core types, loading, and querying.
///
/// Architecture:
/// ```text
///  employees.csv (`;`-separated)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Employee>, divisions deduplicated
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Roster   │  immutable snapshot
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  queries  │  filter / group / average / extrema / lookup
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
