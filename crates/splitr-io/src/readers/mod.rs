pub mod chunks;
pub mod lines;

pub use chunks::ChunkReader;
pub use lines::LineReader;
