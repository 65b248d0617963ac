//! User-facing sequence functionality: sequence sets, FASTA I/O and report
//! rendering

pub mod seq;
pub mod io;
pub mod report;
