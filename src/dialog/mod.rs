pub mod calc_score;
pub mod dispatch;
pub mod error;

pub use calc_score::{calc_score, SCORE_ATTRIBUTE};
pub use dispatch::{dispatch, Handler};
pub use error::DialogError;
