use rand::Rng;

/// Source of the numeric token in archive names
pub trait RandomSource {
    /// Value in `[0, bound)`
    fn next_int(&mut self, bound: u32) -> u32;
}

#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_int(&mut self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

#[cfg(test)]
pub struct FixedRandom(pub u32);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.0 % bound
    }
}
