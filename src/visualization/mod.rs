pub mod trails;
pub mod tbsim_vis2d;
