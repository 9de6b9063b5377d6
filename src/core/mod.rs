// Core algorithm exports
pub mod assembler;
pub mod fallback;
pub mod namer;
pub mod prefilter;
pub mod scoring;

pub use assembler::{LookAssembler, RegenerationResult, LOOKS_PER_CALL};
pub use fallback::build_fallback_looks;
pub use namer::{name_look, style_tip};
pub use prefilter::{is_eligible, partition_by_category, prefilter_catalog, CategoryPools};
pub use scoring::{infer_size_class, score_item, LookState, ScoredCandidate, SizeClass};
