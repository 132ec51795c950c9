//! Chairside Core Library
//!
//! Deterministic scoring and recommendation engine for dental clinical
//! reference data.
//!
//! # Architecture
//!
//! ```text
//! Entity Store (chairside-store)
//!        │
//!        ▼
//! Candidate set + Criteria Profile
//!        │
//!        ├──────────────► Criteria Matcher ──► Ranking Aggregator
//!        │                (rule table)          (sort, top-N)
//!        │
//!        ├──────────────► Comparison Matrix Scorer
//!        │                (property union, averages, ratings)
//!        │
//!        └──────────────► Relevance Linker / Catalog Search
//!                         (keyword overlap, fuzzy lookup)
//! ```
//!
//! # Core Principle
//!
//! **Every score change is explained.** A rule that moves a candidate's
//! score always attaches a reasoning, warning, or alternatives string; the
//! ranked output is auditable line by line.
//!
//! All entry points are pure functions of their arguments: no global state,
//! no caching, no wall-clock reads. Calling the same function twice with the
//! same input yields identical output, ordering included.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Material, Procedure, CriteriaProfile, ...)
//! - [`engine`]: Attribute scorer, criteria rule table, ranking aggregator
//! - [`compare`]: Side-by-side comparison matrix
//! - [`relevance`]: Keyword extraction and procedure relatedness
//! - [`search`]: Fuzzy catalog search

pub mod compare;
pub mod engine;
pub mod models;
pub mod relevance;
pub mod search;

// Re-export commonly used types
pub use compare::{build_comparison_matrix, ComparisonMatrix, PropertyCategory, Rating, SortKey};
pub use engine::{match_material, rank, score_attribute, Recommender, DEFAULT_TOP_N};
pub use models::{
    AestheticRequirement, AgeBucket, CategoryScores, CostConstraint, CriteriaProfile, Location,
    LongevityExpectation, MatchOutcome, Material, MaterialCategory, Procedure, ProcedureCategory,
    PropertyValue, ScoredResult, StressLevel,
};
pub use relevance::{extract_keywords, rank_related, relevance, RelatedProcedure};
pub use search::{EntryKind, SearchHit, SearchIndex};
