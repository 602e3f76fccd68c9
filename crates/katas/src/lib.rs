pub mod closest_pair;
pub mod count_ones;
pub mod fibonacci;
pub mod hamming;
pub mod primes;
pub mod spiral;

pub use closest_pair::{Point, closest_pair};
pub use count_ones::count_ones;
pub use fibonacci::fib;
pub use hamming::hamming;
pub use primes::primes;
pub use spiral::spiralize;
