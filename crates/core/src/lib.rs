//! Domain vocabulary shared by the judge client and the HTTP host.

pub mod domain;
