//! Build SCORM 1.2 packages from directories of HTML lecture notes, and
//! prepare LaTeX solution sheets for pandoc.

pub mod cli;
pub mod error;
pub mod package;
pub mod scorm;
pub mod substitute;
pub mod util;
