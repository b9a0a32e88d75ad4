//! Pipeline stages, in run order:
//! fetch → logs → clustering (in `engine`) → matching → explain → publish.

pub mod explain;
pub mod fetch;
pub mod logs;
pub mod matching;
pub mod publish;
