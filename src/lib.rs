pub mod boundary;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod extract;
pub mod grid;
pub mod image;
pub mod init;
pub mod par_slice;
pub mod relax;
pub mod shape;
pub mod solver;
pub mod stencil;
pub mod sweep;
pub mod util;
