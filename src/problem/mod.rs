mod relaxed_lp;

pub use relaxed_lp::*;
