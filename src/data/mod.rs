/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///   energy.xvg
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip @ / # lines → DataSeries
///   └──────────┘  collect @ directives → SeriesHeader
///        │
///        ▼
///   ┌────────────┐
///   │ DataSeries  │  Vec<(x, y)> in line order
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
