mod metadata_generator;
mod patch_level_evaluator;

pub use metadata_generator::{MetadataGenerator, TOOL_NAME};
pub use patch_level_evaluator::PatchLevelEvaluator;
