mod build;
mod show;

pub use build::cmd_build;
pub use show::cmd_show;
