// Domain models - Immutable job specification values and their builders
//
// Every value is produced by a builder whose `build` validates eagerly and
// fails on the first violated rule. Decoding goes through the same builders.

mod drm;
mod input;
mod job;
mod output;
mod packaging;
mod region;
mod track;
mod transcoding;

pub use drm::*;
pub use input::*;
pub use job::*;
pub use output::*;
pub use packaging::*;
pub use region::*;
pub use track::*;
pub use transcoding::*;
