// Resume intake: PDF upload and text statistics.

pub mod handlers;
pub mod pdf;
