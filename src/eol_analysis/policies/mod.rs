mod severity_rank;

pub use severity_rank::SeverityRank;
