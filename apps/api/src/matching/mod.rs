// Mentor matching engine.
// Normalizes student filters, scores each mentor by weighted overlap, ranks the batch.
// Pure and synchronous: callers load the full mentor list before ranking.

pub mod company;
pub mod explain;
pub mod normalize;
pub mod ranker;
pub mod rescale;
pub mod roles;
pub mod scorer;
pub mod skills;
