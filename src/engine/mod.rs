// Engine module - capital-gains tax calculation (position tracking, sell rules, session fold)

pub mod evaluator;
pub mod position;
pub mod session;

pub use evaluator::Evaluator;
pub use position::Portfolio;
pub use session::run;
