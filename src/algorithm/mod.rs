/// Injectable random bit sources
pub mod bits;
/// Cell-wise overlay of share pairs
pub mod reconstruct;
/// Share generation by 2x2 pixel expansion
pub mod shares;
